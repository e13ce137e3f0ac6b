//! Capacity-constrained insertion scanning.
//!
//! Given the time-ordered pickup/dropoff events of one vehicle, the scanner
//! finds every window of positions where a new request's pickup and dropoff
//! can be placed without any resource exceeding the vehicle's capacity at
//! any point of the tour.
//!
//! Positions are gaps in the event list: position `p` means "directly
//! before `events[p]`", and position `events.len()` is after the last
//! event. A [`Range`] admits every pickup position `p` and dropoff position
//! `d` with `earliest_pickup <= p <= d <= latest_dropoff`.
//!
//! The scan is a pure fold and safe to run in parallel across vehicles.
//!
//! # Examples
//!
//! ```
//! use ridepool::{insertion_ranges, Capacities, Event, Range};
//!
//! let taxi = Capacities::new(2, 0, 0, 0);
//! let one = Capacities::new(1, 0, 0, 0);
//! let events = [Event::pickup(one), Event::pickup(one), Event::dropoff(one), Event::dropoff(one)];
//!
//! let ranges = insertion_ranges(&taxi, &one, &events);
//! assert_eq!(ranges, vec![
//!     Range { earliest_pickup: 0, latest_dropoff: 1 },
//!     Range { earliest_pickup: 3, latest_dropoff: 4 },
//! ]);
//! ```

use serde::{Deserialize, Serialize};

use crate::capacity::{Capacities, Load};

#[cfg(test)]
mod proptests;

/// Anything that picks up or drops off a capacity vector.
///
/// Taxi tour events and ride-share events both implement this, so one scan
/// serves both.
pub trait CapacityEvent {
    /// `true` for a pickup (adds load), `false` for a dropoff.
    fn is_pickup(&self) -> bool;

    /// The quantities picked up or dropped off.
    fn capacities(&self) -> Capacities;
}

impl<T: CapacityEvent + ?Sized> CapacityEvent for &T {
    fn is_pickup(&self) -> bool {
        (**self).is_pickup()
    }

    fn capacities(&self) -> Capacities {
        (**self).capacities()
    }
}

/// A plain pickup or dropoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// `true` for a pickup.
    pub is_pickup: bool,
    /// The quantities moved by this event.
    #[serde(flatten)]
    pub capacities: Capacities,
}

impl Event {
    /// A pickup of `capacities`.
    #[must_use]
    pub const fn pickup(capacities: Capacities) -> Self {
        Self {
            is_pickup: true,
            capacities,
        }
    }

    /// A dropoff of `capacities`.
    #[must_use]
    pub const fn dropoff(capacities: Capacities) -> Self {
        Self {
            is_pickup: false,
            capacities,
        }
    }
}

impl CapacityEvent for Event {
    fn is_pickup(&self) -> bool {
        self.is_pickup
    }

    fn capacities(&self) -> Capacities {
        self.capacities
    }
}

/// A window of event positions where a request may be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// First position at which the pickup may be placed.
    pub earliest_pickup: usize,
    /// Last position at which the dropoff may be placed.
    pub latest_dropoff: usize,
}

impl Range {
    /// Returns `true` if placing the pickup at `pickup` and the dropoff at
    /// `dropoff` stays inside this window.
    #[must_use]
    pub const fn admits_positions(&self, pickup: usize, dropoff: usize) -> bool {
        self.earliest_pickup <= pickup && pickup <= dropoff && dropoff <= self.latest_dropoff
    }
}

/// Scan state after a prefix of the tour.
///
/// `open_from` holds the earliest pickup position of the feasible run that
/// is still open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScanState {
    load: Load,
    open_from: Option<usize>,
}

impl ScanState {
    /// The state before the first event: the request is already on board.
    fn start(vehicle: &Capacities, required: &Capacities) -> Self {
        let load = Load::seeded(required);
        Self {
            load,
            open_from: vehicle.admits(&load).then_some(0),
        }
    }

    /// Applies `event` at `index`, returning the next state and the range
    /// closed by this step, if any.
    fn step<E: CapacityEvent>(
        self,
        vehicle: &Capacities,
        index: usize,
        event: &E,
    ) -> (Self, Option<Range>) {
        let load = self.load.apply(event.is_pickup(), &event.capacities());
        if vehicle.admits(&load) {
            let open_from = self.open_from.or(Some(index + 1));
            (Self { load, open_from }, None)
        } else {
            let closed = self.open_from.map(|from| Range {
                earliest_pickup: from,
                latest_dropoff: index,
            });
            (
                Self {
                    load,
                    open_from: None,
                },
                closed,
            )
        }
    }

    /// Closes a run still open after the last event.
    fn finish(self, len: usize) -> Option<Range> {
        self.open_from.map(|from| Range {
            earliest_pickup: from,
            latest_dropoff: len,
        })
    }
}

/// Computes every insertion window for a request on a vehicle's tour.
///
/// Returns an empty list if the vehicle cannot carry the request even when
/// otherwise empty. For an empty tour and a feasible request the result is
/// the single window `0..=0`, meaning "anywhere".
///
/// The events must be ordered by scheduled time.
#[must_use]
pub fn insertion_ranges<E: CapacityEvent>(
    vehicle: &Capacities,
    required: &Capacities,
    events: &[E],
) -> Vec<Range> {
    if !vehicle.admits_request(required) {
        return Vec::new();
    }

    let initial = ScanState::start(vehicle, required);
    let (last, mut ranges) = events.iter().enumerate().fold(
        (initial, Vec::new()),
        |(state, mut ranges), (index, event)| {
            let (next, closed) = state.step(vehicle, index, event);
            ranges.extend(closed);
            (next, ranges)
        },
    );
    ranges.extend(last.finish(events.len()));

    log::debug!(
        "insertion scan: {} event(s), {} window(s) for request {required}",
        events.len(),
        ranges.len()
    );
    ranges
}

/// For each event, whether the load right after it (with the request on
/// board) fits the vehicle.
#[must_use]
pub fn feasible_indices<E: CapacityEvent>(
    vehicle: &Capacities,
    required: &Capacities,
    events: &[E],
) -> Vec<bool> {
    events
        .iter()
        .scan(Load::seeded(required), |load, event| {
            *load = load.apply(event.is_pickup(), &event.capacities());
            Some(vehicle.admits(load))
        })
        .collect()
}

/// The outcome of an insertion scan with the "nowhere" and "anywhere" cases
/// kept apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "fits", content = "ranges", rename_all = "snake_case")]
pub enum InsertionScan {
    /// The vehicle can never carry this request.
    Nowhere,
    /// The vehicle has no commitments; any position works.
    Anywhere,
    /// Only the listed windows work.
    Within(Vec<Range>),
}

impl InsertionScan {
    /// Scans `events` and classifies the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use ridepool::{Capacities, Event, InsertionScan};
    ///
    /// let taxi = Capacities::new(3, 0, 0, 0);
    /// let none: [Event; 0] = [];
    ///
    /// assert_eq!(
    ///     InsertionScan::run(&taxi, &Capacities::new(2, 0, 0, 0), &none),
    ///     InsertionScan::Anywhere
    /// );
    /// assert_eq!(
    ///     InsertionScan::run(&taxi, &Capacities::new(4, 0, 0, 0), &none),
    ///     InsertionScan::Nowhere
    /// );
    /// ```
    #[must_use]
    pub fn run<E: CapacityEvent>(vehicle: &Capacities, required: &Capacities, events: &[E]) -> Self {
        let ranges = insertion_ranges(vehicle, required, events);
        if ranges.is_empty() {
            Self::Nowhere
        } else if events.is_empty() {
            Self::Anywhere
        } else {
            Self::Within(ranges)
        }
    }

    /// Returns `true` unless the request fits nowhere.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        !matches!(self, Self::Nowhere)
    }
}
