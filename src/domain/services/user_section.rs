//! User section preservation
//!
//! Everything from the marker line to the end of `CMakeLists.txt` belongs to
//! the user and is carried over verbatim on every regeneration. The existing
//! file is treated as an opaque string; nothing here parses CMake.

/// Marker that starts the user-owned part of `CMakeLists.txt`
pub const USER_SECTION_MARKER: &str = "# === CTC USER SECTION (not modified by ctc) ===";

/// User section written when the existing file has none
pub const USER_SECTION_PLACEHOLDER: &str = "# === CTC USER SECTION (not modified by ctc) ===
# Add any custom CMake logic below. This section is preserved by ctc.
";

/// Locate the user section (marker included) in an existing descriptor
pub fn find_user_section(existing: &str) -> Option<&str> {
    existing
        .find(USER_SECTION_MARKER)
        .map(|start| &existing[start..])
}

/// Join freshly generated managed text with the preserved user section
///
/// `existing` may be empty (no file yet). When it holds no marker, the
/// placeholder is used and whatever else it contained is dropped.
pub fn merge(existing: &str, managed: &str) -> String {
    let user_section = find_user_section(existing).unwrap_or(USER_SECTION_PLACEHOLDER);

    let mut out = String::with_capacity(managed.len() + 1 + user_section.len());
    out.push_str(managed);
    out.push('\n');
    out.push_str(user_section);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_starts_with_marker() {
        assert!(USER_SECTION_PLACEHOLDER.starts_with(USER_SECTION_MARKER));
    }

    #[test]
    fn merge_into_empty_uses_placeholder() {
        let merged = merge("", "managed\n");
        assert_eq!(merged, format!("managed\n\n{}", USER_SECTION_PLACEHOLDER));
    }

    #[test]
    fn merge_without_marker_uses_placeholder() {
        let merged = merge("cmake_minimum_required(VERSION 3.10)\n", "managed\n");
        assert!(merged.ends_with(USER_SECTION_PLACEHOLDER));
        assert!(!merged.contains("VERSION 3.10"));
    }

    #[test]
    fn merge_preserves_user_text_verbatim() {
        let user = format!(
            "{}\nadd_compile_options(-Wall)\n\n  # trailing spaces   \nno newline at end",
            USER_SECTION_MARKER
        );
        let existing = format!("old managed stuff\n\n{}", user);

        let merged = merge(&existing, "new managed\n");

        assert_eq!(merged, format!("new managed\n\n{}", user));
        assert_eq!(find_user_section(&merged), Some(user.as_str()));
    }

    #[test]
    fn merge_is_idempotent() {
        let first = merge("", "managed\n");
        let second = merge(&first, "managed\n");
        assert_eq!(first, second);
    }

    #[test]
    fn first_marker_wins_when_repeated() {
        let existing = format!(
            "{m}\nfirst\n{m}\nsecond\n",
            m = USER_SECTION_MARKER
        );
        let merged = merge(&existing, "managed\n");
        assert!(merged.ends_with(&existing));
    }
}
