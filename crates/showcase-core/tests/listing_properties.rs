use proptest::prelude::*;
use showcase_core::listing::{filter_by_category, matches_category, sort_by_generation_desc, window};
use showcase_core::model::{Category, ProjectRecord};

use generators::*;

fn field_matches(record: &ProjectRecord, category: Category) -> bool {
    record
        .field()
        .as_slice()
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(category.as_str()))
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(512))]

    #[test]
    fn filter_is_sound_complete_and_ordered(
        records in arb_records(40),
        category in arb_non_wildcard_category(),
    ) {
        let filtered = filter_by_category(&records, category);

        for record in &filtered {
            prop_assert!(field_matches(record, category));
        }

        let expected: Vec<&ProjectRecord> = records
            .iter()
            .filter(|r| field_matches(r, category))
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn wildcard_filter_is_identity(records in arb_records(40)) {
        let filtered: Vec<ProjectRecord> = filter_by_category(&records, Category::All)
            .into_iter()
            .cloned()
            .collect();
        prop_assert_eq!(filtered, records);
    }

    #[test]
    fn matches_category_agrees_with_filter(
        records in arb_records(20),
        category in arb_category(),
    ) {
        let count = records.iter().filter(|r| matches_category(r, category)).count();
        prop_assert_eq!(count, filter_by_category(&records, category).len());
    }

    #[test]
    fn sort_is_stable_descending_permutation(records in arb_records(40)) {
        let sorted = sort_by_generation_desc(&records);

        prop_assert_eq!(sorted.len(), records.len());
        let mut indices: Vec<usize> = sorted.iter().map(|r| input_index(r)).collect();

        for pair in sorted.windows(2) {
            prop_assert!(pair[0].generation() >= pair[1].generation());
            if pair[0].generation() == pair[1].generation() {
                prop_assert!(input_index(pair[0]) < input_index(pair[1]));
            }
        }

        indices.sort_unstable();
        let expected: Vec<usize> = (0..records.len()).collect();
        prop_assert_eq!(indices, expected);
    }

    #[test]
    fn window_past_length_shows_everything(
        records in arb_records(30),
        extra in 0usize..10,
    ) {
        let page = window(&records, records.len() + extra);
        prop_assert!(!page.has_more);
        let shown: Vec<ProjectRecord> = page.shown.into_iter().cloned().collect();
        prop_assert_eq!(shown, records);
    }

    #[test]
    fn window_short_of_length_truncates(
        (records, visible) in arb_records(30)
            .prop_filter("need at least one record", |r| !r.is_empty())
            .prop_flat_map(|records| {
                let len = records.len();
                (Just(records), 0..len)
            }),
    ) {
        let page = window(&records, visible);
        prop_assert_eq!(page.shown.len(), visible);
        prop_assert!(page.has_more);
        prop_assert_eq!(page.total, records.len());
    }
}
