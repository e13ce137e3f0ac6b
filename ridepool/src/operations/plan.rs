//! Plan types for availability operations.
//!
//! A plan lists the row changes an operation will make, without making
//! them, so it can be shown in a dry run or executed inside the same
//! transaction it was computed in.

use crate::availability::{Availability, NewAvailability, Reconciliation};
use crate::ids::AvailabilityId;

/// A single row change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Delete an availability row.
    DeleteAvailability(AvailabilityId),

    /// Insert a new availability row.
    InsertAvailability(NewAvailability),

    /// Overwrite an existing row's bounds, keeping its id.
    UpdateAvailability(Availability),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::DeleteAvailability(id) => format!("Delete availability {id}"),
            Self::InsertAvailability(row) => {
                format!("Add availability {} for vehicle {}", row.interval, row.vehicle)
            }
            Self::UpdateAvailability(row) => {
                format!("Shrink availability {} to {}", row.id, row.interval)
            }
        }
    }
}

/// A complete operation plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The actions, in execution order.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates an empty plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use ridepool::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Remove availability").add_warning("nothing to do");
    /// assert!(plan.is_empty());
    /// assert_eq!(plan.warnings.len(), 1);
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds several actions.
    #[must_use]
    pub fn add_actions(mut self, actions: impl IntoIterator<Item = PlanAction>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Adds a warning.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Returns `true` if the plan changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

impl Reconciliation {
    /// Turns the row changes into plan actions: deletes, then inserts, then
    /// updates.
    #[must_use]
    pub fn into_plan(self, description: impl Into<String>) -> OperationPlan {
        let Self {
            delete,
            insert,
            update,
        } = self;
        OperationPlan::new(description).add_actions(
            delete
                .into_iter()
                .map(PlanAction::DeleteAvailability)
                .chain(insert.into_iter().map(PlanAction::InsertAvailability))
                .chain(update.into_iter().map(PlanAction::UpdateAvailability)),
        )
    }
}
