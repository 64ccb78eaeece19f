use crate::{
    dedup::{dedup_sorted, dedup_sorted_in_place},
    list::List,
};
use itertools::Itertools as _;
use proptest::prelude::*;

// to make sure that tests are not accidentally run without debug asserts.
#[should_panic]
#[test]
fn debug_assert_is_enabled() {
    debug_assert!(false);
}

/// Ascending `Vec`s with plenty of repeats.
fn sorted_vec() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(-8_i64..8, 0..64).prop_map(|mut x| {
        x.sort_unstable();
        x
    })
}

proptest! {
    #[test]
    fn dedup_matches_itertools(v in sorted_vec()) {
        let expected = v.iter().copied().dedup().collect_vec();
        prop_assert_eq!(dedup_sorted(&v), expected);
    }

    #[test]
    fn dedup_keeps_each_distinct_value_once(v in sorted_vec()) {
        let out = dedup_sorted(&v);
        prop_assert!(out.iter().tuple_windows().all(|(a, b)| a < b));
        prop_assert!(v.iter().all(|x| out.contains(x)));
    }

    #[test]
    fn dedup_is_identity_without_adjacent_duplicates(
        v in proptest::collection::btree_set(any::<i64>(), 0..64)
    ) {
        let v = v.into_iter().collect_vec();
        prop_assert_eq!(dedup_sorted(&v), v.clone());
        let mut w = v.clone();
        dedup_sorted_in_place(&mut w);
        prop_assert_eq!(w, v.clone());
        let mut list: List<i64> = v.iter().copied().collect();
        list.dedup_sorted();
        prop_assert_eq!(list.into_iter().collect_vec(), v);
    }

    #[test]
    fn dedup_is_idempotent(v in sorted_vec()) {
        let once = dedup_sorted(&v);
        prop_assert_eq!(dedup_sorted(&once), once.clone());

        let mut list: List<i64> = v.iter().copied().collect();
        list.dedup_sorted();
        let first = list.iter().copied().collect_vec();
        list.dedup_sorted();
        prop_assert_eq!(list.iter().copied().collect_vec(), first);
    }

    #[test]
    fn all_forms_agree(v in sorted_vec()) {
        let array = dedup_sorted(&v);

        let mut in_place = v.clone();
        dedup_sorted_in_place(&mut in_place);
        prop_assert_eq!(&in_place, &array);

        let mut list: List<i64> = v.iter().copied().collect();
        list.dedup_sorted();
        prop_assert_eq!(list.len(), array.len());
        prop_assert_eq!(list.into_iter().collect_vec(), array);
    }

    #[test]
    fn unsorted_input_collapses_only_adjacent(v in proptest::collection::vec(0_u8..4, 0..32)) {
        let expected = v.iter().copied().dedup().collect_vec();
        prop_assert_eq!(dedup_sorted(&v), expected.clone());
        let mut in_place = v.clone();
        dedup_sorted_in_place(&mut in_place);
        prop_assert_eq!(&in_place, &expected);
        let mut list: List<u8> = v.iter().copied().collect();
        list.dedup_sorted();
        prop_assert_eq!(list.into_iter().collect_vec(), expected);
    }
}
