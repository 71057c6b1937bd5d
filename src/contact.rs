//! Contact records and their validated field types.
//!
//! A [`Contact`] is the entity stored in the address book. Two notions of
//! equality apply:
//! - identity ([`Contact::is_same_contact`], keyed by name and phone) decides
//!   whether two records describe the same person and guards uniqueness;
//! - full equality (`==`) compares every field and is used when removing or
//!   editing an exact record.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

fn compiled(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("field pattern is a valid regex"))
}

macro_rules! field_type {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal, pattern = $pattern:literal, constraint = $constraint:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Human-readable constraint reported on validation failure.
            pub const CONSTRAINT: &'static str = $constraint;

            /// Validates and wraps a raw value.
            ///
            /// # Errors
            ///
            /// Returns `ValidationError::InvalidField` if the value does not satisfy
            /// [`Self::CONSTRAINT`].
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                static PATTERN: OnceLock<Regex> = OnceLock::new();
                let value = value.into();
                if compiled(&PATTERN, $pattern).is_match(&value) {
                    Ok(Self(value))
                } else {
                    Err(ValidationError::InvalidField {
                        field: $field,
                        value,
                        constraint: $constraint,
                    })
                }
            }

            /// Returns the raw value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

field_type!(
    /// A contact's full name: alphanumeric words separated by spaces.
    Name,
    field = "name",
    pattern = r"^[\p{L}\p{N}][\p{L}\p{N} ]*$",
    constraint = "names should only contain alphanumeric characters and spaces, and must not be blank"
);

field_type!(
    /// A phone number of at least three digits.
    Phone,
    field = "phone",
    pattern = r"^[0-9]{3,}$",
    constraint = "phone numbers should only contain digits and be at least 3 digits long"
);

field_type!(
    /// An email address of the form `local@domain`.
    Email,
    field = "email",
    pattern = r"^[\p{L}\p{N}+_.\-]+@[\p{L}\p{N}](?:[\p{L}\p{N}\-]*[\p{L}\p{N}])?(?:\.[\p{L}\p{N}](?:[\p{L}\p{N}\-]*[\p{L}\p{N}])?)*$",
    constraint = "emails should be of the format local-part@domain"
);

field_type!(
    /// A postal address; any text that does not start with whitespace.
    Address,
    field = "address",
    pattern = r"^\S.*$",
    constraint = "addresses can take any value, and must not be blank"
);

field_type!(
    /// A single-word tag used to group contacts.
    Tag,
    field = "tag",
    pattern = r"^[\p{L}\p{N}]+$",
    constraint = "tag names should be a single alphanumeric word"
);

/// Identity key of a contact: name and phone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactKey {
    /// Contact name.
    pub name: Name,
    /// Contact phone.
    pub phone: Phone,
}

impl fmt::Display for ContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.phone)
    }
}

/// A contact record in the address book.
///
/// # Examples
///
/// ```
/// use contactbook::Contact;
///
/// let alice = Contact::parse("Alice Pauline", "94351253", "alice@example.com", "123 Jurong West")
///     .unwrap()
///     .with_tags(["friends"])
///     .unwrap();
/// assert_eq!(alice.name.as_str(), "Alice Pauline");
/// assert_eq!(alice.tags.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    /// Full name.
    pub name: Name,
    /// Phone number, digits only.
    pub phone: Phone,
    /// Email address.
    pub email: Email,
    /// Postal address.
    pub address: Address,

    /// Tags, kept sorted.
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Contact {
    /// Creates a contact from already-validated fields, without tags.
    #[must_use]
    pub fn new(name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: BTreeSet::new(),
        }
    }

    /// Validates raw field values and creates a contact.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError::InvalidField` encountered.
    pub fn parse(
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            Name::new(name)?,
            Phone::new(phone)?,
            Email::new(email)?,
            Address::new(address)?,
        ))
    }

    /// Replaces the tag set with the given raw tag names.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidField` if any tag is malformed.
    pub fn with_tags<I, S>(mut self, tags: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags
            .into_iter()
            .map(Tag::new)
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(self)
    }

    /// Returns this contact's identity key.
    #[must_use]
    pub fn key(&self) -> ContactKey {
        ContactKey {
            name: self.name.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Returns true if both records describe the same person (same name and phone).
    #[must_use]
    pub fn is_same_contact(&self, other: &Self) -> bool {
        self.name == other.name && self.phone == other.phone
    }

    /// Returns true if the contact carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if !self.tags.is_empty() {
            f.write_str(" Tags:")?;
            for tag in &self.tags {
                write!(f, " [{tag}]")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Contact {
        Contact::parse("Alice Pauline", "94351253", "alice@example.com", "123, Jurong West Ave 6")
            .unwrap()
    }

    #[test]
    fn test_name_validation() {
        assert!(Name::new("Alice Pauline").is_ok());
        assert!(Name::new("R2D2").is_ok());
        assert!(Name::new("").is_err());
        assert!(Name::new(" Alice").is_err());
        assert!(Name::new("Alice*").is_err());
    }

    #[test]
    fn test_phone_validation() {
        assert!(Phone::new("911").is_ok());
        assert!(Phone::new("93121534").is_ok());
        assert!(Phone::new("91").is_err());
        assert!(Phone::new("9312 1534").is_err());
        assert!(Phone::new("phone").is_err());
    }

    #[test]
    fn test_email_validation() {
        assert!(Email::new("alice@example.com").is_ok());
        assert!(Email::new("a.b+c@d-e.f").is_ok());
        assert!(Email::new("alice@localhost").is_ok());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("alice@").is_err());
        assert!(Email::new("alice example.com").is_err());
        assert!(Email::new("alice@-example.com").is_err());
    }

    #[test]
    fn test_address_and_tag_validation() {
        assert!(Address::new("Blk 456, Den Road, #01-355").is_ok());
        assert!(Address::new(" ").is_err());
        assert!(Address::new("").is_err());
        assert!(Tag::new("friends").is_ok());
        assert!(Tag::new("best friends").is_err());
        assert!(Tag::new("").is_err());
    }

    #[test]
    fn test_invalid_field_reports_field_name() {
        let err = Contact::parse("Bob", "12", "bob@example.com", "Street").unwrap_err();
        match err {
            ValidationError::InvalidField { field, value, .. } => {
                assert_eq!(field, "phone");
                assert_eq!(value, "12");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_identity_vs_full_equality() {
        let a = alice();
        let mut b = a.clone();
        b.email = Email::new("other@example.com").unwrap();

        assert!(a.is_same_contact(&b));
        assert_ne!(a, b);
        assert_eq!(a.key(), b.key());

        let mut c = a.clone();
        c.phone = Phone::new("85355255").unwrap();
        assert!(!a.is_same_contact(&c));
    }

    #[test]
    fn test_with_tags_collapses_duplicates() {
        let a = alice().with_tags(["friends", "owesMoney", "friends"]).unwrap();
        assert_eq!(a.tags.len(), 2);
        assert!(a.has_tag(&Tag::new("friends").unwrap()));
        assert!(alice().with_tags(["not valid"]).is_err());
    }

    #[test]
    fn test_display() {
        let a = alice().with_tags(["friends"]).unwrap();
        let text = a.to_string();
        assert!(text.starts_with("Alice Pauline Phone: 94351253"));
        assert!(text.ends_with("Tags: [friends]"));
    }

    #[test]
    fn test_serialization_validates_fields() {
        let a = alice().with_tags(["friends"]).unwrap();
        let json = serde_json::to_string(&a).unwrap();
        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);

        let bad = json.replace("94351253", "94");
        assert!(serde_json::from_str::<Contact>(&bad).is_err());
    }
}
