use tracing::info;

use crate::commands::{Command, CommandResult};
use crate::error::BookResult;
use crate::history::InputHistory;
use crate::model::ContactModel;

/// Removes every contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, model: &mut ContactModel, _inputs: &InputHistory) -> BookResult<CommandResult> {
        model.ensure_unlocked()?;
        let cleared = model.book().len();
        model.clear();
        model.commit();
        info!(cleared, "address book cleared");
        Ok(CommandResult::new("Address book has been cleared!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::typical_model;
    use crate::completion::Category;

    #[test]
    fn clears_and_is_undoable() {
        let mut model = typical_model();
        ClearCommand.execute(&mut model, &InputHistory::new()).unwrap();
        assert!(model.book().is_empty());
        assert!(model.predict(Category::Email, "").unwrap().is_empty());

        model.undo().unwrap();
        assert_eq!(model.book().len(), 3);
        assert_eq!(model.predict(Category::Email, "h").unwrap(), vec!["heinz@example.com"]);
    }
}
