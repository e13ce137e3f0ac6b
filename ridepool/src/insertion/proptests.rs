//! Property-based tests for the insertion scan.
//!
//! Tours are built from random requests so that every dropoff follows its
//! pickup; the scan is then checked against brute-force simulation.

use super::{feasible_indices, insertion_ranges, Event};
use crate::capacity::{Capacities, Load};
use proptest::prelude::*;

fn small_capacities() -> impl Strategy<Value = Capacities> {
    (0u32..=2, 0u32..=1, 0u32..=1, 0u32..=2).prop_map(|(p, w, b, l)| Capacities::new(p, w, b, l))
}

fn vehicle_strategy() -> impl Strategy<Value = Capacities> {
    (1u32..=6, 0u32..=2, 0u32..=2, 0u32..=4).prop_map(|(p, w, b, l)| Capacities::new(p, w, b, l))
}

/// A tour of paired pickups and dropoffs, ordered by a sort key.
fn tour_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((small_capacities(), 0u32..20, 0u32..10), 0..8).prop_map(|requests| {
        let mut keyed: Vec<(u32, Event)> = requests
            .into_iter()
            .flat_map(|(load, at, len)| {
                [
                    (2 * at, Event::pickup(load)),
                    (2 * (at + len) + 1, Event::dropoff(load)),
                ]
            })
            .collect();
        keyed.sort_by_key(|(key, _)| *key);
        keyed.into_iter().map(|(_, event)| event).collect()
    })
}

fn simulate_all(vehicle: &Capacities, events: &[Event]) -> bool {
    let mut load = Load::default();
    events.iter().all(|event| {
        load = load.apply(event.is_pickup, &event.capacities);
        vehicle.admits(&load)
    })
}

fn with_request(events: &[Event], required: Capacities, pickup: usize, dropoff: usize) -> Vec<Event> {
    let mut out = events.to_vec();
    out.insert(dropoff, Event::dropoff(required));
    out.insert(pickup, Event::pickup(required));
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Every position inside a reported window re-simulates as valid
    #[test]
    fn reported_positions_resimulate_valid(
        vehicle in vehicle_strategy(),
        required in small_capacities(),
        events in tour_strategy(),
    ) {
        let flags = feasible_indices(&vehicle, &required, &events);
        for range in insertion_ranges(&vehicle, &required, &events) {
            prop_assert!(range.earliest_pickup <= range.latest_dropoff);
            prop_assert!(range.latest_dropoff <= events.len());
            if range.earliest_pickup == 0 {
                prop_assert!(vehicle.admits_request(&required));
            }
            for index in range.earliest_pickup.saturating_sub(1)..range.latest_dropoff {
                prop_assert!(flags[index], "index {} inside {:?}", index, range);
            }
        }
    }

    // Windows come out ordered and never touch
    #[test]
    fn ranges_are_ordered_and_separated(
        vehicle in vehicle_strategy(),
        required in small_capacities(),
        events in tour_strategy(),
    ) {
        let ranges = insertion_ranges(&vehicle, &required, &events);
        for pair in ranges.windows(2) {
            prop_assert!(pair[0].latest_dropoff < pair[1].earliest_pickup);
        }
    }

    // On a valid tour, a placement works iff some window admits it
    #[test]
    fn windows_match_brute_force(
        vehicle in vehicle_strategy(),
        required in small_capacities(),
        events in tour_strategy(),
    ) {
        if !simulate_all(&vehicle, &events) {
            return Ok(());
        }
        let ranges = insertion_ranges(&vehicle, &required, &events);
        for pickup in 0..=events.len() {
            for dropoff in pickup..=events.len() {
                let expected = simulate_all(&vehicle, &with_request(&events, required, pickup, dropoff));
                let reported = ranges.iter().any(|r| r.admits_positions(pickup, dropoff));
                prop_assert_eq!(reported, expected, "pickup {} dropoff {}", pickup, dropoff);
            }
        }
    }

    #[test]
    fn empty_tour_yields_single_window(
        vehicle in vehicle_strategy(),
        required in small_capacities(),
    ) {
        let none: [Event; 0] = [];
        let ranges = insertion_ranges(&vehicle, &required, &none);
        if vehicle.admits_request(&required) {
            prop_assert_eq!(ranges.len(), 1);
            prop_assert_eq!((ranges[0].earliest_pickup, ranges[0].latest_dropoff), (0, 0));
        } else {
            prop_assert!(ranges.is_empty());
        }
    }
}
