//! Completion categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::contact::Contact;
use crate::error::ValidationError;

/// A word list the autocomplete engine can complete from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Command words (`add`, `delete`, ...).
    Command,
    /// Contact names.
    Name,
    /// Contact phone numbers.
    Phone,
    /// Contact email addresses.
    Email,
    /// Contact postal addresses.
    Address,
}

impl Category {
    /// Every category, in index order.
    pub const ALL: [Self; 5] = [
        Self::Command,
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::Address,
    ];

    /// The categories whose values come from contact fields.
    pub const FIELDS: [Self; 4] = [Self::Name, Self::Phone, Self::Email, Self::Address];

    /// The label used on the external interface.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
        }
    }

    /// Field value of a contact for this category; `None` for `Command`.
    #[must_use]
    pub fn value_of(self, contact: &Contact) -> Option<&str> {
        match self {
            Self::Command => None,
            Self::Name => Some(contact.name.as_str()),
            Self::Phone => Some(contact.phone.as_str()),
            Self::Email => Some(contact.email.as_str()),
            Self::Address => Some(contact.address.as_str()),
        }
    }

    /// Category whose argument prefix (`n/`, `p/`, `e/`, `a/`) starts `token`.
    #[must_use]
    pub fn from_argument_prefix(token: &str) -> Option<(Self, &str)> {
        Self::FIELDS.into_iter().find_map(|category| {
            token
                .strip_prefix(category.argument_prefix()?)
                .map(|rest| (category, rest))
        })
    }

    /// Argument prefix used on the command line; `None` for `Command`.
    #[must_use]
    pub const fn argument_prefix(self) -> Option<&'static str> {
        match self {
            Self::Command => None,
            Self::Name => Some("n/"),
            Self::Phone => Some("p/"),
            Self::Email => Some("e/"),
            Self::Address => Some("a/"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ValidationError::invalid_argument(s, "unknown completion category"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
        assert!("tag".parse::<Category>().is_err());
        assert!("Name".parse::<Category>().is_err());
    }

    #[test]
    fn test_argument_prefix() {
        assert_eq!(
            Category::from_argument_prefix("n/Ali"),
            Some((Category::Name, "Ali"))
        );
        assert_eq!(
            Category::from_argument_prefix("a/"),
            Some((Category::Address, ""))
        );
        assert_eq!(Category::from_argument_prefix("t/friends"), None);
        assert_eq!(Category::from_argument_prefix("Ali"), None);
    }

    #[test]
    fn test_value_of() {
        let c = Contact::parse("Alice", "111", "a@b.c", "Road 1").unwrap();
        assert_eq!(Category::Email.value_of(&c), Some("a@b.c"));
        assert_eq!(Category::Command.value_of(&c), None);
    }
}
