use std::collections::BTreeSet;

use crate::commands::{displayed_contact, Command, CommandResult, Index};
use crate::error::{BookResult, ValidationError};
use crate::history::InputHistory;
use crate::model::ContactModel;

/// Selects contacts by their position in the displayed list, replacing the
/// previous selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectCommand {
    targets: BTreeSet<Index>,
}

impl SelectCommand {
    /// Repeated indices collapse.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NoIndex` if `targets` is empty.
    pub fn new(targets: impl IntoIterator<Item = Index>) -> Result<Self, ValidationError> {
        let targets: BTreeSet<Index> = targets.into_iter().collect();
        if targets.is_empty() {
            return Err(ValidationError::NoIndex);
        }
        Ok(Self { targets })
    }
}

impl Command for SelectCommand {
    fn execute(&self, model: &mut ContactModel, _inputs: &InputHistory) -> BookResult<CommandResult> {
        let chosen = self
            .targets
            .iter()
            .map(|&index| displayed_contact(model, index))
            .collect::<BookResult<Vec<_>>>()?;
        let count = chosen.len();
        model.set_selected(chosen);
        Ok(CommandResult::new(format!("Selected {count} contacts")))
    }
}
