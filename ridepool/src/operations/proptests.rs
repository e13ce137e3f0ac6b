//! Property-based tests for availability operations.
//!
//! These run against a real database, so the case count is kept low.

use proptest::prelude::*;

use super::{remove_availability, RemoveAvailabilityOptions};
use crate::availability::{reconcile_availability, Availability, NewAvailability};
use crate::database::test_util::{create_test_database, create_test_vehicle};
use crate::database::Database;
use crate::ids::{AvailabilityId, CompanyId, VehicleId};
use crate::interval::{merge, subtract_all, Interval};

use super::plan::PlanAction;

fn interval_strategy() -> impl Strategy<Value = Interval> {
    (0i64..1_000, 1i64..200).prop_map(|(start, len)| Interval::new(start, start + len).unwrap())
}

// Stored availability never overlaps; pieces are disjoint and sorted.
fn disjoint_rows() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec((1i64..50, 1i64..80), 0..8).prop_map(|gaps| {
        let mut cursor = 0;
        gaps.into_iter()
            .map(|(gap, len)| {
                let interval = Interval::new(cursor + gap, cursor + gap + len).unwrap();
                cursor = interval.end_time();
                interval
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // After a removal the vehicle covers exactly the old cover minus the removed time
    #[test]
    fn removal_matches_subtraction(rows in disjoint_rows(), to_remove in interval_strategy()) {
        let mut db = create_test_database();
        let vehicle = create_test_vehicle(&db, 1);
        for &interval in &rows {
            Database::create_availability(
                db.connection(),
                &NewAvailability { vehicle: vehicle.id, interval },
            )
            .unwrap();
        }

        let options = RemoveAvailabilityOptions::new(vehicle.id, CompanyId(1), to_remove, 0)
            .with_min_prep_ms(0);
        remove_availability(&mut db, options).unwrap();

        let remaining: Vec<Interval> = Database::list_availability(db.connection(), Some(vehicle.id))
            .unwrap()
            .into_iter()
            .map(|row| row.interval)
            .collect();
        prop_assert_eq!(merge(remaining), subtract_all(&merge(rows), &[to_remove]));
    }

    // Plans list deletes first, then inserts, then updates
    #[test]
    fn plan_actions_are_grouped(rows in disjoint_rows(), to_remove in interval_strategy()) {
        let existing: Vec<Availability> = rows
            .into_iter()
            .zip(1..)
            .map(|(interval, id)| Availability {
                id: AvailabilityId(id),
                vehicle: VehicleId(1),
                interval,
            })
            .collect();

        let reconciliation = reconcile_availability(&existing, &to_remove);
        let expected = reconciliation.len();
        let plan = reconciliation.into_plan("remove");
        prop_assert_eq!(plan.len(), expected);

        let rank = |action: &PlanAction| match action {
            PlanAction::DeleteAvailability(_) => 0,
            PlanAction::InsertAvailability(_) => 1,
            PlanAction::UpdateAvailability(_) => 2,
        };
        prop_assert!(plan.actions.windows(2).all(|w| rank(&w[0]) <= rank(&w[1])));
    }
}
