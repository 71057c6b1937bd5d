//! Undo/redo snapshot history and the record of entered commands.

mod input;
mod snapshot;

pub use input::InputHistory;
pub use snapshot::{SnapshotHistory, DEFAULT_HISTORY_LIMIT};
