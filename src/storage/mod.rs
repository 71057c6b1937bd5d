//! Address book storage.
//!
//! [`BookStore`] is the contract; [`InMemoryBookStore`] and
//! [`JsonFileStore`] are the provided backends.

mod json;
mod memory;
mod traits;

pub use json::JsonFileStore;
pub use memory::InMemoryBookStore;
pub use traits::{BookStore, StorageError};
