//! The address book: an ordered, identity-unique collection of contacts.
//!
//! Storage is shared copy-on-write. Cloning a [`ContactBook`] is O(1) and the
//! clone is an independent value: mutating the live book never changes a
//! snapshot taken earlier, which is what the undo history relies on.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::contact::Contact;
use crate::error::{BookResult, ExecutionError};

/// An ordered collection of contacts in which no two share an identity key.
///
/// # Examples
///
/// ```
/// use contactbook::{Contact, ContactBook};
///
/// let mut book = ContactBook::new();
/// let alice = Contact::parse("Alice", "94351253", "alice@example.com", "Jurong").unwrap();
/// book.add(alice.clone()).unwrap();
///
/// let snapshot = book.clone();
/// book.remove(&alice).unwrap();
/// assert!(book.is_empty());
/// assert_eq!(snapshot.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Arc<Vec<Contact>>,
}

impl ContactBook {
    /// Creates an empty address book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from a list of contacts, rejecting identity clashes.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::DuplicateContact` on the first clash.
    pub fn from_contacts(contacts: impl IntoIterator<Item = Contact>) -> BookResult<Self> {
        let mut book = Self::new();
        for contact in contacts {
            book.add(contact)?;
        }
        Ok(book)
    }

    /// Number of contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns true if the book holds no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Returns the contact at a zero-based position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    /// Iterates contacts in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Returns the contacts as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    /// Returns true if a contact with the same identity exists.
    #[must_use]
    pub fn contains(&self, contact: &Contact) -> bool {
        self.contacts.iter().any(|c| c.is_same_contact(contact))
    }

    /// Returns true if both books share the same underlying storage.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.contacts, &other.contacts)
    }

    /// Appends a contact.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::DuplicateContact` if the identity is taken.
    pub fn add(&mut self, contact: Contact) -> BookResult<()> {
        if self.contains(&contact) {
            return Err(ExecutionError::DuplicateContact {
                name: contact.name.to_string(),
            }
            .into());
        }
        Arc::make_mut(&mut self.contacts).push(contact);
        Ok(())
    }

    /// Removes the contact equal in every field to `contact`.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::ContactNotFound` if no such contact exists.
    pub fn remove(&mut self, contact: &Contact) -> BookResult<Contact> {
        let position = self.position_of(contact)?;
        Ok(Arc::make_mut(&mut self.contacts).remove(position))
    }

    /// Replaces `target` with `edited`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `ContactNotFound` if `target` is not in the book.
    /// - `DuplicateContact` if `edited` has the identity of a different contact.
    pub fn set_contact(&mut self, target: &Contact, edited: Contact) -> BookResult<Contact> {
        let position = self.position_of(target)?;
        let clashes = self
            .contacts
            .iter()
            .enumerate()
            .any(|(i, c)| i != position && c.is_same_contact(&edited));
        if clashes {
            return Err(ExecutionError::DuplicateContact {
                name: edited.name.to_string(),
            }
            .into());
        }
        let slot = &mut Arc::make_mut(&mut self.contacts)[position];
        Ok(std::mem::replace(slot, edited))
    }

    /// Removes every contact.
    pub fn clear(&mut self) {
        if !self.contacts.is_empty() {
            self.contacts = Arc::new(Vec::new());
        }
    }

    fn position_of(&self, contact: &Contact) -> BookResult<usize> {
        self.contacts
            .iter()
            .position(|c| c == contact)
            .ok_or_else(|| {
                ExecutionError::ContactNotFound {
                    name: contact.name.to_string(),
                }
                .into()
            })
    }
}

impl<'a> IntoIterator for &'a ContactBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ContactBook {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr<'a> {
            contacts: &'a [Contact],
        }
        Repr {
            contacts: &self.contacts,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactBook {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Repr {
            #[serde(default)]
            contacts: Vec<Contact>,
        }
        let repr = Repr::deserialize(deserializer)?;
        Self::from_contacts(repr.contacts).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{Email, Phone};
    use crate::error::BookError;

    fn contact(name: &str, phone: &str) -> Contact {
        Contact::parse(name, phone, "someone@example.com", "Somewhere 1").unwrap()
    }

    #[test]
    fn test_add_rejects_same_identity() {
        let mut book = ContactBook::new();
        let alice = contact("Alice", "111");
        book.add(alice.clone()).unwrap();

        let mut twin = alice.clone();
        twin.email = Email::new("twin@example.com").unwrap();
        let err = book.add(twin).unwrap_err();
        assert!(matches!(
            err,
            BookError::Execution(ExecutionError::DuplicateContact { .. })
        ));

        // Same name, different phone is a different person.
        book.add(contact("Alice", "222")).unwrap();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_remove_requires_full_equality() {
        let mut book = ContactBook::new();
        let alice = contact("Alice", "111");
        book.add(alice.clone()).unwrap();

        let mut stale = alice.clone();
        stale.email = Email::new("stale@example.com").unwrap();
        assert!(book.remove(&stale).unwrap_err().is_not_found());

        let removed = book.remove(&alice).unwrap();
        assert_eq!(removed, alice);
        assert!(book.is_empty());
    }

    #[test]
    fn test_set_contact_keeps_position_and_checks_identity() {
        let mut book = ContactBook::new();
        let alice = contact("Alice", "111");
        let bob = contact("Bob", "222");
        book.add(alice.clone()).unwrap();
        book.add(bob.clone()).unwrap();

        let mut renamed = alice.clone();
        renamed.phone = Phone::new("333").unwrap();
        let old = book.set_contact(&alice, renamed.clone()).unwrap();
        assert_eq!(old, alice);
        assert_eq!(book.get(0), Some(&renamed));

        // Editing a contact into itself (same identity) is allowed.
        let mut same = renamed.clone();
        same.email = Email::new("new@example.com").unwrap();
        book.set_contact(&renamed, same).unwrap();

        let mut clash = bob.clone();
        clash.phone = Phone::new("333").unwrap();
        clash.name = renamed.name.clone();
        assert!(matches!(
            book.set_contact(&bob, clash).unwrap_err(),
            BookError::Execution(ExecutionError::DuplicateContact { .. })
        ));

        assert!(book.set_contact(&alice, bob).unwrap_err().is_not_found());
    }

    #[test]
    fn test_clone_is_independent_snapshot() {
        let mut book = ContactBook::new();
        book.add(contact("Alice", "111")).unwrap();
        let snapshot = book.clone();
        assert!(book.shares_storage_with(&snapshot));

        book.add(contact("Bob", "222")).unwrap();
        assert!(!book.shares_storage_with(&snapshot));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(book.len(), 2);

        book.clear();
        assert!(book.is_empty());
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_serde_rejects_duplicates() {
        let book =
            ContactBook::from_contacts([contact("Alice", "111"), contact("Bob", "222")]).unwrap();
        let json = serde_json::to_string(&book).unwrap();
        let back: ContactBook = serde_json::from_str(&json).unwrap();
        assert_eq!(book, back);

        let dup = json.replace("\"Bob\"", "\"Alice\"").replace("\"222\"", "\"111\"");
        assert!(serde_json::from_str::<ContactBook>(&dup).is_err());
    }
}
