//! Property tests for descriptor generation and user-section merge.

use proptest::prelude::*;

use ctc::domain::services::{find_user_section, USER_SECTION_MARKER};
use ctc::{generate, render_descriptor, DependencyEntry};

fn package_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,10}").unwrap()
}

fn entries() -> impl Strategy<Value = Vec<DependencyEntry>> {
    let entry = prop_oneof![
        package_name().prop_map(DependencyEntry::package),
        (package_name(), package_name())
            .prop_map(|(p, c)| DependencyEntry::package_component(&p, &c)),
        package_name().prop_map(DependencyEntry::library_name),
        package_name().prop_map(|p| DependencyEntry::library_path(format!("/opt/{}", p))),
        package_name().prop_map(|p| DependencyEntry::include_path(format!("third_party/{}", p))),
        (package_name(), package_name())
            .prop_map(|(k, t)| DependencyEntry::link_override(format!("{}={}", k, t))),
    ];
    proptest::collection::vec(entry, 0..10)
}

fn user_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ -~\n\t]{0,80}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: regenerating over our own output changes nothing.
    #[test]
    fn property_regeneration_is_idempotent(entries in entries()) {
        let first = render_descriptor("demo", &entries, "");
        let second = render_descriptor("demo", &entries, &first);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: everything from the marker on survives regeneration verbatim.
    #[test]
    fn property_user_section_is_preserved(
        entries in entries(),
        before in "[a-z() \n]{0,40}",
        user in user_text(),
    ) {
        let section = format!("{}\n{}", USER_SECTION_MARKER, user);
        let existing = format!("{}{}", before, section);

        let merged = render_descriptor("demo", &entries, &existing);

        prop_assert!(merged.ends_with(&section));
        prop_assert_eq!(find_user_section(&merged), Some(section.as_str()));
    }

    /// PROPERTY: the managed section is a pure function of its inputs.
    #[test]
    fn property_generate_is_deterministic(entries in entries()) {
        prop_assert_eq!(generate("demo", &entries), generate("demo", &entries));
    }

    /// PROPERTY: a bare package without override links as `<pkg>::<pkg>`.
    #[test]
    fn property_default_link_convention(name in package_name()) {
        let text = generate("demo", &[DependencyEntry::package(name.as_str())]);
        let expected = format!(
            "target_link_libraries(${{PROJECT_NAME}} {}::{})",
            name, name
        );
        prop_assert!(text.contains(&expected));
    }
}
