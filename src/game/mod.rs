//! Game orchestration: selection state machine, engine, and snapshots.
//!
//! ## Key Types
//!
//! - `Selection` / `SelectionStatus`: the 0-3 chosen cards and their
//!   resolution tag
//! - `GameEngine`: sole owner of deck, table, selection and score
//! - `GameSnapshot` / `CardView` / `Highlight`: the read-only view handed
//!   to the renderer after each command

pub mod engine;
pub mod selection;
pub mod snapshot;

pub use engine::GameEngine;
pub use selection::{Selection, SelectionStatus};
pub use snapshot::{CardView, GameSnapshot, Highlight};
