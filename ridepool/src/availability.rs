//! Vehicle availability windows.
//!
//! This module computes how a vehicle's stored availability rows change
//! when part of its time is removed, and which time remains free once
//! booked tours are taken out. Everything here is pure; the
//! [`operations`](crate::operations) module applies the results to the
//! database.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{AvailabilityId, VehicleId};
use crate::interval::{merge, subtract_all, Interval};

mod timeframe;

#[cfg(test)]
mod proptests;

pub use timeframe::{allowed_times, alterable_timeframe, DAY_MS, HOUR_MS, MINUTE_MS};

/// A stored availability row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Row id.
    pub id: AvailabilityId,
    /// Owning vehicle.
    pub vehicle: VehicleId,
    /// The window itself.
    #[serde(flatten)]
    pub interval: Interval,
}

/// An availability row that has not been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAvailability {
    /// Owning vehicle.
    pub vehicle: VehicleId,
    /// The window itself.
    #[serde(flatten)]
    pub interval: Interval,
}

/// A span of a vehicle's time already taken by a booked tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedSpan {
    /// The vehicle driving the tour.
    pub vehicle: VehicleId,
    /// Start and end of the tour.
    #[serde(flatten)]
    pub interval: Interval,
}

/// Row changes needed to take an interval out of a vehicle's availability.
///
/// Produced by [`reconcile_availability`]; nothing is applied until the
/// whole set has been computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    /// Rows to delete.
    pub delete: Vec<AvailabilityId>,
    /// Rows to create (the two halves of split rows).
    pub insert: Vec<NewAvailability>,
    /// Rows to shrink in place, keeping their id.
    pub update: Vec<Availability>,
}

impl Reconciliation {
    /// Returns `true` if no row changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.delete.is_empty() && self.insert.is_empty() && self.update.is_empty()
    }

    /// Total number of row changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.delete.len() + self.insert.len() + self.update.len()
    }
}

/// Computes the row changes that remove `to_remove` from `existing`.
///
/// For every row overlapping `to_remove`:
/// - a row inside `to_remove` is deleted;
/// - a row that strictly contains `to_remove` (sharing neither end) is
///   deleted and replaced by its two remaining halves;
/// - any other row is shrunk in place with [`Interval::cut`].
///
/// Rows that do not overlap `to_remove` are left alone. The function is
/// deterministic, so a caller retrying after a conflict simply re-reads the
/// rows and calls it again.
///
/// # Examples
///
/// ```
/// use ridepool::{reconcile_availability, Availability, AvailabilityId, Interval, VehicleId};
///
/// let row = Availability {
///     id: AvailabilityId(1),
///     vehicle: VehicleId(7),
///     interval: Interval::new(0, 100).unwrap(),
/// };
/// let changes = reconcile_availability(&[row], &Interval::new(20, 30).unwrap());
///
/// assert_eq!(changes.delete, vec![AvailabilityId(1)]);
/// assert_eq!(changes.insert.len(), 2);
/// assert!(changes.update.is_empty());
/// ```
#[must_use]
pub fn reconcile_availability(existing: &[Availability], to_remove: &Interval) -> Reconciliation {
    existing
        .iter()
        .filter(|row| row.interval.overlaps(to_remove))
        .fold(Reconciliation::default(), |mut changes, row| {
            if to_remove.contains(&row.interval) {
                log::debug!("availability {} {}: delete", row.id, row.interval);
                changes.delete.push(row.id);
            } else if let Some((left, right)) = row.interval.split(to_remove) {
                log::debug!(
                    "availability {} {}: split into {left} and {right}",
                    row.id,
                    row.interval
                );
                changes.delete.push(row.id);
                changes.insert.extend([left, right].map(|interval| NewAvailability {
                    vehicle: row.vehicle,
                    interval,
                }));
            } else if let Some(rest) = row.interval.cut(to_remove) {
                log::debug!("availability {} {}: cut to {rest}", row.id, row.interval);
                changes.update.push(Availability {
                    interval: rest,
                    ..*row
                });
            }
            changes
        })
}

/// Merges each vehicle's availability into a minimal start-ordered cover.
#[must_use]
pub fn merge_per_vehicle<'a>(
    rows: impl IntoIterator<Item = &'a Availability>,
) -> BTreeMap<VehicleId, Vec<Interval>> {
    group_by_vehicle(rows.into_iter().map(|row| (row.vehicle, row.interval)))
        .into_iter()
        .map(|(vehicle, intervals)| (vehicle, merge(intervals)))
        .collect()
}

/// The time each vehicle is available and not yet booked.
///
/// Availability is merged per vehicle before the vehicle's booked spans are
/// subtracted, so every list is start-ordered and non-overlapping. A vehicle
/// whose availability is fully booked maps to an empty list; booked spans of
/// vehicles without availability are ignored.
///
/// # Examples
///
/// ```
/// use ridepool::{free_windows, Availability, AvailabilityId, BookedSpan, Interval, VehicleId};
///
/// let iv = |s, e| Interval::new(s, e).unwrap();
/// let rows = [
///     Availability { id: AvailabilityId(1), vehicle: VehicleId(1), interval: iv(0, 50) },
///     Availability { id: AvailabilityId(2), vehicle: VehicleId(1), interval: iv(40, 90) },
/// ];
/// let booked = [BookedSpan { vehicle: VehicleId(1), interval: iv(10, 20) }];
///
/// let free = free_windows(&rows, &booked);
/// assert_eq!(free[&VehicleId(1)], vec![iv(0, 10), iv(20, 90)]);
/// ```
#[must_use]
pub fn free_windows(
    availabilities: &[Availability],
    booked: &[BookedSpan],
) -> BTreeMap<VehicleId, Vec<Interval>> {
    let booked = group_by_vehicle(booked.iter().map(|span| (span.vehicle, span.interval)));
    merge_per_vehicle(availabilities)
        .into_iter()
        .map(|(vehicle, available)| {
            let free = match booked.get(&vehicle) {
                Some(spans) => subtract_all(&available, spans),
                None => available,
            };
            (vehicle, free)
        })
        .collect()
}

fn group_by_vehicle(
    items: impl Iterator<Item = (VehicleId, Interval)>,
) -> BTreeMap<VehicleId, Vec<Interval>> {
    items.fold(BTreeMap::new(), |mut groups, (vehicle, interval)| {
        groups.entry(vehicle).or_insert_with(Vec::new).push(interval);
        groups
    })
}
