//! Property-based tests for availability reconciliation.

use std::collections::BTreeMap;

use super::{
    free_windows, reconcile_availability, Availability, AvailabilityId, BookedSpan, VehicleId,
};
use crate::interval::{merge, subtract_all, Interval};
use proptest::prelude::*;

fn interval_strategy() -> impl Strategy<Value = Interval> {
    (0i64..5_000, 1i64..1_000).prop_map(|(start, len)| Interval::new(start, start + len).unwrap())
}

/// Non-overlapping stored rows of one vehicle, as left by earlier edits.
fn rows_strategy() -> impl Strategy<Value = Vec<Availability>> {
    prop::collection::vec(interval_strategy(), 0..12).prop_map(|intervals| {
        merge(intervals)
            .into_iter()
            .zip(1..)
            .map(|(interval, id)| Availability {
                id: AvailabilityId(id),
                vehicle: VehicleId(1),
                interval,
            })
            .collect()
    })
}

fn covered(intervals: impl IntoIterator<Item = Interval>, t: i64) -> bool {
    intervals.into_iter().any(|i| i.start_time() <= t && t < i.end_time())
}

/// Applies the changes to an id-keyed copy of the table.
fn apply(rows: &[Availability], to_remove: &Interval) -> Vec<Interval> {
    let changes = reconcile_availability(rows, to_remove);
    let mut table: BTreeMap<AvailabilityId, Interval> =
        rows.iter().map(|row| (row.id, row.interval)).collect();
    for id in &changes.delete {
        table.remove(id);
    }
    for row in &changes.update {
        table.insert(row.id, row.interval);
    }
    let mut result: Vec<Interval> = table.into_values().collect();
    result.extend(changes.insert.iter().map(|new| new.interval));
    result
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Applying the changes removes exactly `to_remove`
    #[test]
    fn reconciliation_matches_subtraction(
        rows in rows_strategy(),
        to_remove in interval_strategy(),
        t in 0i64..7_000,
    ) {
        let after = apply(&rows, &to_remove);
        let expected = covered(rows.iter().map(|r| r.interval), t)
            && !(to_remove.start_time() <= t && t < to_remove.end_time());
        prop_assert_eq!(covered(after.iter().copied(), t), expected);
    }

    // Only overlapping rows change, each at most once
    #[test]
    fn only_overlapping_rows_change(rows in rows_strategy(), to_remove in interval_strategy()) {
        let changes = reconcile_availability(&rows, &to_remove);
        let mut touched: Vec<AvailabilityId> = changes
            .delete
            .iter()
            .copied()
            .chain(changes.update.iter().map(|row| row.id))
            .collect();
        touched.sort();
        let before = touched.len();
        touched.dedup();
        prop_assert_eq!(before, touched.len());

        for row in &rows {
            prop_assert_eq!(touched.contains(&row.id), row.interval.overlaps(&to_remove));
        }
        prop_assert_eq!(changes.insert.len() % 2, 0);
    }

    // Recomputing after applying is a no-op
    #[test]
    fn reconciliation_is_idempotent(rows in rows_strategy(), to_remove in interval_strategy()) {
        let after: Vec<Availability> = apply(&rows, &to_remove)
            .into_iter()
            .zip(1..)
            .map(|(interval, id)| Availability { id: AvailabilityId(id), vehicle: VehicleId(1), interval })
            .collect();
        prop_assert!(reconcile_availability(&after, &to_remove).is_empty());
    }

    #[test]
    fn free_windows_are_sorted_and_free(
        rows in rows_strategy(),
        tours in prop::collection::vec(interval_strategy(), 0..6),
    ) {
        let booked: Vec<BookedSpan> = tours
            .iter()
            .map(|&interval| BookedSpan { vehicle: VehicleId(1), interval })
            .collect();
        let free = free_windows(&rows, &booked);
        let Some(list) = free.get(&VehicleId(1)) else {
            prop_assert!(rows.is_empty());
            return Ok(());
        };
        for pair in list.windows(2) {
            prop_assert!(pair[0].end_time() < pair[1].start_time());
        }
        let available: Vec<Interval> = rows.iter().map(|r| r.interval).collect();
        prop_assert_eq!(list, &subtract_all(&merge(available), &tours));
    }
}
