//! Domain Services
//!
//! Stateless, I/O-free logic:
//! - `descriptor` - Generate the managed section of `CMakeLists.txt`
//! - `user_section` - Locate and carry over the hand-written tail

mod descriptor;
mod user_section;

pub use descriptor::{generate, resolve_link_target, DEFAULT_PROJECT_NAME, MANAGED_SECTION_HEADER};
pub use user_section::{find_user_section, merge, USER_SECTION_MARKER, USER_SECTION_PLACEHOLDER};

use crate::domain::entities::DependencyEntry;

/// Full descriptor content: generated section plus the preserved user section
pub fn render_descriptor(
    project_name: &str,
    entries: &[DependencyEntry],
    existing: &str,
) -> String {
    merge(existing, &generate(project_name, entries))
}
