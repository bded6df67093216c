//! Domain Layer
//!
//! The dependency model and descriptor synthesis, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - `DependencyEntry`, `EntryList`
//! - `value_objects/` - `BuildMode`, `ConfigWarning`
//! - `services/` - Descriptor generation and user section merge
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or processes directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
