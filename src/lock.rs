//! Lock state of the address book.
//!
//! Locking and unlocking belong to an external service (the file encryptor);
//! the model only asks whether the book is currently locked.

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Reports whether the address book is locked.
pub trait Locker: Debug + Send + Sync {
    /// True while the book is locked.
    fn is_locked(&self) -> bool;
}

/// A book that is never locked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlocked;

impl Locker for Unlocked {
    fn is_locked(&self) -> bool {
        false
    }
}

/// A lock flag shared between the model and whatever locks the book.
///
/// Clones share the same flag.
///
/// ```
/// use contactbook::{LockFlag, Locker};
///
/// let flag = LockFlag::new();
/// let seen_by_model = flag.clone();
/// flag.lock();
/// assert!(seen_by_model.is_locked());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LockFlag {
    locked: Arc<AtomicBool>,
}

impl LockFlag {
    /// An unlocked flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the book locked.
    pub fn lock(&self) {
        self.locked.store(true, Ordering::Release);
    }

    /// Marks the book unlocked.
    pub fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
    }
}

impl Locker for LockFlag {
    fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }
}
