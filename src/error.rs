//! Error types for contactbook.
//!
//! All errors are strongly typed using thiserror so callers can match on
//! the specific condition and turn it into a user-visible message. Every
//! error is recoverable: the operation that produced it leaves the model
//! unchanged.

use thiserror::Error;

use crate::storage::StorageError;

/// Validation errors raised while checking caller input.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A caller-supplied argument was rejected.
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Which argument.
        argument: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A contact field failed its format check.
    #[error("Invalid {field} '{value}': {constraint}")]
    InvalidField {
        /// Field label.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Format the field must follow.
        constraint: &'static str,
    },

    /// An edit named no field.
    #[error("At least one field to edit must be provided")]
    NoFieldToEdit,

    /// A delete named no index.
    #[error("At least one index must be provided")]
    NoIndex,
}

impl ValidationError {
    /// Creates an invalid-argument error.
    #[must_use]
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }
}

/// Which direction of the history an operation tried to move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    /// Moving back.
    Undo,
    /// Moving forward.
    Redo,
}

impl std::fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undo => write!(f, "undo"),
            Self::Redo => write!(f, "redo"),
        }
    }
}

/// Execution errors raised while applying an operation to the model.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// No contact equals the target.
    #[error("Contact not found: {name}")]
    ContactNotFound {
        /// Target's name.
        name: String,
    },

    /// A contact with the same name and phone exists.
    #[error("This contact already exists in the address book: {name}")]
    DuplicateContact {
        /// Clashing name.
        name: String,
    },

    /// A completion value to remove was not indexed.
    #[error("Value '{value}' not found in {category} completions")]
    ValueNotFound {
        /// Category label.
        category: String,
        /// Missing value.
        value: String,
    },

    /// No contact carries the tag.
    #[error("Tag not found: {tag}")]
    TagNotFound {
        /// Requested tag.
        tag: String,
    },

    /// The tag index already links the tag to the contact.
    #[error("Tag '{tag}' is already recorded for {name}")]
    DuplicateTag {
        /// Tag.
        tag: String,
        /// Contact name.
        name: String,
    },

    /// A displayed-list index is out of range.
    #[error("The contact index {index} is invalid (list has {len} entries)")]
    InvalidIndex {
        /// One-based index given.
        index: usize,
        /// Displayed list length.
        len: usize,
    },

    /// The address book is locked.
    #[error("Address book is locked, please unlock it first!")]
    Locked,

    /// A mail command found nobody to address.
    #[error("No contacts selected! Select one or more and try again.")]
    NoRecipients,

    /// The history has no step in that direction.
    #[error("No more commands to {action}")]
    NoHistory {
        /// Attempted direction.
        action: HistoryAction,
    },
}

/// Top-level error type for contactbook.
#[derive(Debug, Error)]
pub enum BookError {
    /// Bad input.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The operation could not be applied.
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// Loading or saving failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Broken internal invariant.
    #[error("Internal error: {message}")]
    Internal {
        /// Description.
        message: String,
    },
}

impl BookError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an execution error.
    #[must_use]
    pub const fn is_execution(&self) -> bool {
        matches!(self, Self::Execution(_))
    }

    /// Returns true if this is a storage error.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Returns true if a lookup target (contact, completion value, tag) was absent.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Execution(
                ExecutionError::ContactNotFound { .. }
                    | ExecutionError::ValueNotFound { .. }
                    | ExecutionError::TagNotFound { .. }
            )
        )
    }

    /// Returns true if undo/redo was requested with an empty stack.
    #[must_use]
    pub const fn is_no_history(&self) -> bool {
        matches!(self, Self::Execution(ExecutionError::NoHistory { .. }))
    }

    /// Returns true if the book was locked.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self, Self::Execution(ExecutionError::Locked))
    }
}

/// Result type alias for contactbook operations.
pub type BookResult<T> = Result<T, BookError>;
