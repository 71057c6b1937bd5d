use crate::commands::{Command, CommandResult};
use crate::error::BookResult;
use crate::history::InputHistory;
use crate::model::ContactModel;

/// Lists the command lines entered so far, most recent first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(&self, _model: &mut ContactModel, inputs: &InputHistory) -> BookResult<CommandResult> {
        if inputs.is_empty() {
            return Ok(CommandResult::new("You have not yet entered any commands."));
        }
        let lines: Vec<&str> = inputs.newest_first().collect();
        Ok(CommandResult::new(format!(
            "Entered commands (from most recent to earliest):\n{}",
            lines.join("\n")
        )))
    }
}
