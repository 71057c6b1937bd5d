//! Bounded undo/redo over whole-state snapshots.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::{ExecutionError, HistoryAction};

/// Default number of undoable checkpoints kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// A live state with past and future snapshot stacks around it.
///
/// Snapshots are owned values. For [`ContactBook`](crate::ContactBook) a
/// clone shares storage copy-on-write, so committing costs O(1) and later
/// edits of the live book can never reach into the stacks.
///
/// # Examples
///
/// ```
/// use contactbook::SnapshotHistory;
///
/// let mut history = SnapshotHistory::new(0, 10);
/// history.commit(1);
/// history.commit(2);
/// assert_eq!(*history.undo().unwrap(), 1);
/// assert_eq!(*history.redo().unwrap(), 2);
///
/// history.undo().unwrap();
/// history.commit(3);
/// assert!(!history.can_redo());
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotHistory<S> {
    past: VecDeque<S>,
    current: S,
    future: Vec<S>,
    limit: usize,
}

impl<S> SnapshotHistory<S> {
    /// Starts a history at `initial` keeping at most `limit` undo steps.
    /// A zero limit is raised to one.
    #[must_use]
    pub fn new(initial: S, limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            current: initial,
            future: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// The live state.
    #[must_use]
    pub fn current(&self) -> &S {
        &self.current
    }

    /// Maximum number of undo steps kept.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Records `snapshot` as the new live state.
    ///
    /// The previous live state becomes the newest undo step and every redo
    /// step is discarded. Past the limit, the oldest undo step is dropped.
    pub fn commit(&mut self, snapshot: S) {
        let previous = std::mem::replace(&mut self.current, snapshot);
        self.past.push_back(previous);
        if self.past.len() > self.limit {
            self.past.pop_front();
        }
        let discarded = self.future.len();
        self.future.clear();
        debug!(
            undo_depth = self.past.len(),
            discarded_redo = discarded,
            "history commit"
        );
    }

    /// True iff there is a state to undo to.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// True iff there is a state to redo to.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of available undo steps.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of available redo steps.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Moves back one step and returns the restored state.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::NoHistory` if there is nothing to undo; the
    /// history is unchanged.
    pub fn undo(&mut self) -> Result<&S, ExecutionError> {
        let restored = self.past.pop_back().ok_or(ExecutionError::NoHistory {
            action: HistoryAction::Undo,
        })?;
        let live = std::mem::replace(&mut self.current, restored);
        self.future.push(live);
        debug!(
            undo_depth = self.past.len(),
            redo_depth = self.future.len(),
            "history undo"
        );
        Ok(&self.current)
    }

    /// Moves forward one step and returns the restored state.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::NoHistory` if there is nothing to redo; the
    /// history is unchanged.
    pub fn redo(&mut self) -> Result<&S, ExecutionError> {
        let restored = self.future.pop().ok_or(ExecutionError::NoHistory {
            action: HistoryAction::Redo,
        })?;
        let live = std::mem::replace(&mut self.current, restored);
        self.past.push_back(live);
        debug!(
            undo_depth = self.past.len(),
            redo_depth = self.future.len(),
            "history redo"
        );
        Ok(&self.current)
    }

    /// Drops both stacks and makes `state` the live state.
    pub fn reset(&mut self, state: S) {
        self.past.clear();
        self.future.clear();
        self.current = state;
    }
}
