use std::collections::BTreeSet;
use std::fmt::Write as _;

use tracing::info;

use crate::commands::{displayed_contact, Command, CommandResult, Index};
use crate::error::{BookResult, ValidationError};
use crate::history::InputHistory;
use crate::model::ContactModel;

/// Deletes one or more contacts by their position in the displayed list.
///
/// Every index is checked before anything is deleted, and all deletions
/// share one undo checkpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    targets: BTreeSet<Index>,
}

impl DeleteCommand {
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

impl Command for DeleteCommand {
    fn execute(&self, model: &mut ContactModel, _inputs: &InputHistory) -> BookResult<CommandResult> {
        model.ensure_unlocked()?;
        let doomed = self
            .targets
            .iter()
            .map(|&index| displayed_contact(model, index))
            .collect::<BookResult<Vec<_>>>()?;

        let mut names = String::new();
        for contact in &doomed {
            model.delete_contact(contact)?;
            let _ = writeln!(names, "{}", contact.name);
        }
        model.commit();
        info!(count = doomed.len(), "contacts deleted");

        Ok(CommandResult::new(format!(
            "Deleted Contacts: {}\n{names}",
            doomed.len()
        )))
    }
}
