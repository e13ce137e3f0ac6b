//! Property-based tests for the interval algebra.

use super::{intersect_all, merge, subtract_all, Interval};
use proptest::prelude::*;

fn interval_strategy() -> impl Strategy<Value = Interval> {
    (0i64..10_000, 1i64..2_000).prop_map(|(start, len)| Interval::new(start, start + len).unwrap())
}

fn intervals_strategy() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(interval_strategy(), 0..20)
}

fn covered(intervals: &[Interval], t: i64) -> bool {
    intervals
        .iter()
        .any(|i| i.start_time() <= t && t < i.end_time())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // merge(merge(xs)) == merge(xs)
    #[test]
    fn merge_is_idempotent(xs in intervals_strategy()) {
        let once = merge(xs);
        let twice = merge(once.clone());
        prop_assert_eq!(once, twice);
    }

    // Output is start-ordered with a real gap between neighbours
    #[test]
    fn merge_output_is_disjoint_and_sorted(xs in intervals_strategy()) {
        let merged = merge(xs);
        for pair in merged.windows(2) {
            prop_assert!(pair[0].end_time() < pair[1].start_time());
        }
    }

    // Merging never changes which instants are covered
    #[test]
    fn merge_preserves_coverage(xs in intervals_strategy(), t in 0i64..12_000) {
        let merged = merge(xs.clone());
        prop_assert_eq!(covered(&xs, t), covered(&merged, t));
    }

    // left + to_remove + right rebuild the original
    #[test]
    fn split_round_trip(a in interval_strategy(), lo in 1i64..1000, hi in 1i64..1000) {
        prop_assume!(a.duration_ms() >= 3);
        let span = a.duration_ms();
        let start = a.start_time() + 1 + lo % (span - 2);
        let end = start + 1 + hi % (a.end_time() - start - 1).max(1);
        prop_assume!(end < a.end_time());
        let to_remove = Interval::new(start, end).unwrap();

        let (left, right) = a.split(&to_remove).unwrap();
        prop_assert_eq!(left.end_time(), to_remove.start_time());
        prop_assert_eq!(right.start_time(), to_remove.end_time());
        prop_assert_eq!(left.start_time(), a.start_time());
        prop_assert_eq!(right.end_time(), a.end_time());
        prop_assert_eq!(
            left.duration_ms() + to_remove.duration_ms() + right.duration_ms(),
            a.duration_ms()
        );
    }

    // A cut keeps a non-empty part of `a` and drops all of the cutter
    #[test]
    fn cut_stays_inside_and_avoids_cutter(
        a in interval_strategy(),
        offset in 0i64..2_000,
        overhang in 1i64..500,
        cut_left in any::<bool>(),
    ) {
        // The cutter shares a strict, non-empty part of `a` and sticks out on one side
        let inside = a.start_time() + 1 + offset % a.duration_ms().max(1);
        prop_assume!(inside < a.end_time());
        let cutter = if cut_left {
            Interval::new(a.start_time() - overhang, inside).unwrap()
        } else {
            Interval::new(inside, a.end_time() + overhang).unwrap()
        };

        let rest = a.cut(&cutter).unwrap();
        prop_assert!(rest.start_time() < rest.end_time());
        prop_assert!(a.contains(&rest));
        prop_assert!(!rest.overlaps(&cutter));
        prop_assert_eq!(rest.duration_ms() + a.intersect(&cutter).unwrap().duration_ms(), a.duration_ms());
    }

    // Without a one-sided overlap there is nothing to cut
    #[test]
    fn cut_is_none_or_inside(a in interval_strategy(), b in interval_strategy()) {
        match a.cut(&b) {
            Some(rest) => {
                prop_assert!(a.contains(&rest));
                prop_assert!(!rest.overlaps(&b));
            }
            None => prop_assert!(!a.overlaps(&b) || b.contains(&a) || a.split(&b).is_some()),
        }
    }

    #[test]
    fn intersect_is_commutative(a in interval_strategy(), b in interval_strategy()) {
        prop_assert_eq!(a.intersect(&b), b.intersect(&a));
        if let Some(shared) = a.intersect(&b) {
            prop_assert!(a.contains(&shared) && b.contains(&shared));
        }
    }

    // t survives subtraction iff it was in the minuend and not in the subtrahend
    #[test]
    fn subtract_matches_pointwise_difference(
        minuend in intervals_strategy(),
        subtrahend in intervals_strategy(),
        t in 0i64..12_000,
    ) {
        let minuend = merge(minuend);
        let rest = subtract_all(&minuend, &subtrahend);
        prop_assert_eq!(covered(&rest, t), covered(&minuend, t) && !covered(&subtrahend, t));
        for piece in &rest {
            prop_assert!(piece.start_time() < piece.end_time());
        }
    }

    #[test]
    fn intersect_all_matches_pointwise_and(
        a in intervals_strategy(),
        b in intervals_strategy(),
        t in 0i64..12_000,
    ) {
        let shared = intersect_all(&a, &b);
        prop_assert_eq!(covered(&shared, t), covered(&a, t) && covered(&b, t));
    }
}
