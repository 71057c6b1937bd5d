use std::collections::BTreeSet;

use tracing::info;

use crate::commands::{displayed_contact, Command, CommandResult, Index};
use crate::contact::{Address, Contact, Email, Name, Phone, Tag};
use crate::error::{BookResult, ExecutionError, ValidationError};
use crate::filter::ContactFilter;
use crate::history::InputHistory;
use crate::model::ContactModel;

/// Fields to overwrite on an edited contact. Unset fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDescriptor {
    /// New name.
    pub name: Option<Name>,
    /// New phone.
    pub phone: Option<Phone>,
    /// New email.
    pub email: Option<Email>,
    /// New address.
    pub address: Option<Address>,
    /// Replaces the whole tag set when present.
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditDescriptor {
    /// Returns true if at least one field is set.
    #[must_use]
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Builds the edited copy of `contact`.
    #[must_use]
    pub fn apply(&self, contact: &Contact) -> Contact {
        Contact {
            name: self.name.clone().unwrap_or_else(|| contact.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| contact.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| contact.email.clone()),
            address: self.address.clone().unwrap_or_else(|| contact.address.clone()),
            tags: self.tags.clone().unwrap_or_else(|| contact.tags.clone()),
        }
    }
}

/// Edits the contact at a position in the displayed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditDescriptor,
}

impl EditCommand {
    /// # Errors
    ///
    /// Returns `ValidationError::NoFieldToEdit` if the descriptor is empty.
    pub fn new(index: Index, descriptor: EditDescriptor) -> Result<Self, ValidationError> {
        if !descriptor.is_any_field_edited() {
            return Err(ValidationError::NoFieldToEdit);
        }
        Ok(Self { index, descriptor })
    }
}

impl Command for EditCommand {
    fn execute(&self, model: &mut ContactModel, _inputs: &InputHistory) -> BookResult<CommandResult> {
        model.ensure_unlocked()?;
        let target = displayed_contact(model, self.index)?;
        let edited = self.descriptor.apply(&target);

        if !target.is_same_contact(&edited) && model.has_contact(&edited) {
            return Err(ExecutionError::DuplicateContact {
                name: edited.name.to_string(),
            }
            .into());
        }

        model.update_contact(&target, edited.clone())?;
        model.update_filter(ContactFilter::All);
        model.commit();
        info!(index = self.index.one_based(), "contact edited");
        Ok(CommandResult::new(format!("Edited Contact: {edited}")))
    }
}
