//! Vehicles and their scheduled tour events.

use serde::{Deserialize, Serialize};

use crate::capacity::Capacities;
use crate::ids::{CompanyId, EventId, VehicleId};
use crate::insertion::CapacityEvent;
use crate::interval::UnixtimeMs;

/// A vehicle owned by a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Vehicle id.
    pub id: VehicleId,
    /// Owning company.
    pub company: CompanyId,
    /// What the vehicle can carry at once.
    #[serde(flatten)]
    pub capacities: Capacities,
}

/// A pickup or dropoff already scheduled on a vehicle's tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourEvent {
    /// Event id.
    pub id: EventId,
    /// The vehicle serving the event.
    pub vehicle: VehicleId,
    /// When the stop is scheduled.
    pub scheduled_time: UnixtimeMs,
    /// `true` for a pickup.
    pub is_pickup: bool,
    /// What is picked up or dropped off.
    #[serde(flatten)]
    pub capacities: Capacities,
}

/// A tour event that has not been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTourEvent {
    /// The vehicle serving the event.
    pub vehicle: VehicleId,
    /// When the stop is scheduled.
    pub scheduled_time: UnixtimeMs,
    /// `true` for a pickup.
    pub is_pickup: bool,
    /// What is picked up or dropped off.
    #[serde(flatten)]
    pub capacities: Capacities,
}

impl CapacityEvent for TourEvent {
    fn is_pickup(&self) -> bool {
        self.is_pickup
    }

    fn capacities(&self) -> Capacities {
        self.capacities
    }
}
