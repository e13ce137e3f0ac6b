//! Capacity vectors and running loads.
//!
//! A vehicle carries a fixed [`Capacities`] vector; every request needs one.
//! While a tour is simulated, the occupancy is tracked as a signed [`Load`]
//! so that a malformed event order shows up as a failed check instead of an
//! integer underflow.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Per-resource quantities: passenger seats, wheelchair places, bike racks
/// and luggage slots.
///
/// Used both for a vehicle's maximum and for a request's requirement.
///
/// # Examples
///
/// ```
/// use ridepool::Capacities;
///
/// let taxi = Capacities::new(3, 1, 0, 2);
/// assert!(taxi.admits_request(&Capacities::new(1, 1, 0, 3)));
/// assert!(!taxi.admits_request(&Capacities::new(4, 0, 0, 0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Capacities {
    /// Passenger seats.
    pub passengers: u32,
    /// Wheelchair places.
    pub wheelchairs: u32,
    /// Bike racks.
    pub bikes: u32,
    /// Luggage slots. Unused passenger seats also take luggage.
    pub luggage: u32,
}

impl Capacities {
    /// Creates a capacity vector.
    #[must_use]
    pub const fn new(passengers: u32, wheelchairs: u32, bikes: u32, luggage: u32) -> Self {
        Self {
            passengers,
            wheelchairs,
            bikes,
            luggage,
        }
    }

    /// Creates a capacity vector from signed values, rejecting negatives.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] naming the first negative field, or
    /// when a value does not fit into `u32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ridepool::Capacities;
    ///
    /// assert!(Capacities::from_signed(2, 0, 1, 0).is_ok());
    /// assert!(Capacities::from_signed(2, -1, 1, 0).is_err());
    /// ```
    pub fn from_signed(passengers: i64, wheelchairs: i64, bikes: i64, luggage: i64) -> Result<Self> {
        fn field(name: &'static str, value: i64) -> Result<u32> {
            u32::try_from(value).map_err(|_| Error::InvalidCapacity { field: name, value })
        }

        Ok(Self {
            passengers: field("passengers", passengers)?,
            wheelchairs: field("wheelchairs", wheelchairs)?,
            bikes: field("bikes", bikes)?,
            luggage: field("luggage", luggage)?,
        })
    }

    /// Returns `true` if `load` fits into this capacity.
    ///
    /// Bikes, wheelchairs and passengers are bounded individually. Luggage
    /// and passengers additionally share one pooled budget: a seat without
    /// a passenger can hold a bag.
    #[must_use]
    pub fn admits(&self, load: &Load) -> bool {
        load.bikes <= i64::from(self.bikes)
            && load.wheelchairs <= i64::from(self.wheelchairs)
            && load.passengers <= i64::from(self.passengers)
            && load.luggage + load.passengers
                <= i64::from(self.luggage) + i64::from(self.passengers)
    }

    /// Returns `true` if the vehicle could carry `required` with nobody else
    /// on board.
    #[must_use]
    pub fn admits_request(&self, required: &Capacities) -> bool {
        self.admits(&Load::seeded(required))
    }
}

impl fmt::Display for Capacities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "passengers={} wheelchairs={} bikes={} luggage={}",
            self.passengers, self.wheelchairs, self.bikes, self.luggage
        )
    }
}

/// Running occupancy while walking along a tour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Load {
    /// Passengers on board.
    pub passengers: i64,
    /// Wheelchairs on board.
    pub wheelchairs: i64,
    /// Bikes on board.
    pub bikes: i64,
    /// Luggage on board.
    pub luggage: i64,
}

impl Load {
    /// A load consisting of exactly `capacities`.
    #[must_use]
    pub fn seeded(capacities: &Capacities) -> Self {
        Self {
            passengers: i64::from(capacities.passengers),
            wheelchairs: i64::from(capacities.wheelchairs),
            bikes: i64::from(capacities.bikes),
            luggage: i64::from(capacities.luggage),
        }
    }

    /// Returns the load after a pickup (`is_pickup`) or dropoff of `delta`.
    #[must_use]
    pub fn apply(self, is_pickup: bool, delta: &Capacities) -> Self {
        let sign = if is_pickup { 1 } else { -1 };
        Self {
            passengers: self.passengers + sign * i64::from(delta.passengers),
            wheelchairs: self.wheelchairs + sign * i64::from(delta.wheelchairs),
            bikes: self.bikes + sign * i64::from(delta.bikes),
            luggage: self.luggage + sign * i64::from(delta.luggage),
        }
    }
}
