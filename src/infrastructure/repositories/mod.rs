//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod entry_list;

pub use entry_list::{LineEntryRepository, ENTRY_LIST_FILE};
