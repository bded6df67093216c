//! Property tests for the `.libname` line codec and list operations.

use proptest::prelude::*;

use ctc::{DependencyEntry, DependencyKind, EntryList};

fn kind() -> impl Strategy<Value = DependencyKind> {
    proptest::sample::select(DependencyKind::ALL.to_vec())
}

fn value() -> impl Strategy<Value = String> {
    // No line breaks: a value always fits on one line.
    proptest::string::string_regex("[A-Za-z0-9_./:=+ -]{0,24}").unwrap()
}

fn entry() -> impl Strategy<Value = DependencyEntry> {
    (kind(), value()).prop_map(|(kind, value)| DependencyEntry::new(kind, value))
}

fn entry_list() -> impl Strategy<Value = EntryList> {
    proptest::collection::vec(entry(), 0..12).prop_map(|entries| {
        let mut list = EntryList::new();
        for e in entries {
            list.add(e);
        }
        list
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: decoding an encoded entry yields the same entry.
    #[test]
    fn property_entry_line_round_trips(e in entry()) {
        prop_assert_eq!(DependencyEntry::from_line(&e.to_line()), e);
    }

    /// PROPERTY: file content decodes back to the same ordered list.
    #[test]
    fn property_list_content_round_trips(list in entry_list()) {
        let content = list.to_content();
        prop_assert_eq!(EntryList::from_lines(content.lines()), list);
    }

    /// PROPERTY: adding an absent entry and removing it restores the list.
    #[test]
    fn property_remove_undoes_add(list in entry_list(), e in entry()) {
        prop_assume!(!list.contains(&e));

        let mut changed = list.clone();
        prop_assert!(changed.add(e.clone()));
        prop_assert_eq!(changed.remove(&e), 1);
        prop_assert_eq!(changed, list);
    }

    /// PROPERTY: adding the same entry twice stores it once.
    #[test]
    fn property_add_is_deduplicated(list in entry_list(), e in entry()) {
        let mut once = list.clone();
        once.add(e.clone());
        let mut twice = once.clone();

        prop_assert!(!twice.add(e.clone()));
        prop_assert_eq!(twice.len(), once.len());
        prop_assert_eq!(twice.iter().filter(|x| x.same_as(&e)).count(), 1);
    }

    /// PROPERTY: untagged lines are read as bare packages, never dropped.
    #[test]
    fn property_untagged_line_is_package(name in "[a-z][a-z0-9_]{0,12}") {
        let e = DependencyEntry::from_line(&name);
        prop_assert_eq!(e.kind(), DependencyKind::Package);
        prop_assert_eq!(e.value(), name.as_str());
    }
}
