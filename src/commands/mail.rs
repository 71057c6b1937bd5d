use tracing::info;

use crate::commands::{Command, CommandResult};
use crate::contact::{Contact, Tag};
use crate::error::{BookResult, ExecutionError};
use crate::history::InputHistory;
use crate::model::ContactModel;

/// Which contacts a mail is addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailTarget {
    /// The current selection.
    Selection,
    /// Displayed contacts carrying the tag.
    Group(Tag),
    /// Every displayed contact.
    All,
}

/// Builds a `mailto:` URI for a group of contacts.
///
/// Opening a mail client with the URI is left to the caller; the URI is
/// returned in the feedback and by [`MailCommand::recipients_uri`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailCommand {
    target: MailTarget,
}

impl MailCommand {
    /// Mails `target` when executed.
    #[must_use]
    pub fn new(target: MailTarget) -> Self {
        Self { target }
    }

    /// The `mailto:` URI for the target's email addresses, in display order.
    ///
    /// # Errors
    ///
    /// Returns `Locked` if the book is locked, or `NoRecipients` if the
    /// target matches nobody.
    pub fn recipients_uri(&self, model: &ContactModel) -> BookResult<String> {
        model.ensure_unlocked()?;
        let recipients: Vec<&Contact> = match &self.target {
            MailTarget::Selection => model.selected_contacts(),
            MailTarget::Group(tag) => model
                .filtered_contacts()
                .into_iter()
                .filter(|c| c.has_tag(tag))
                .collect(),
            MailTarget::All => model.filtered_contacts(),
        };
        if recipients.is_empty() {
            return Err(ExecutionError::NoRecipients.into());
        }
        let addresses: Vec<&str> = recipients.iter().map(|c| c.email.as_str()).collect();
        Ok(format!("mailto:{}", addresses.join(",")))
    }
}

impl Command for MailCommand {
    fn execute(&self, model: &mut ContactModel, _inputs: &InputHistory) -> BookResult<CommandResult> {
        let uri = self.recipients_uri(model)?;
        info!(recipients = ?self.target, "mail recipients built");
        Ok(CommandResult::new(format!("Mailing to: {uri}")))
    }
}
