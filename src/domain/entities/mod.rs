//! Domain Entities
//!
//! - `DependencyEntry` - One typed declaration from `.libname`
//! - `EntryList` - The ordered, de-duplicated list of declarations

mod dependency;
mod entry_list;

pub use dependency::{DependencyEntry, DependencyKind};
pub use entry_list::EntryList;
