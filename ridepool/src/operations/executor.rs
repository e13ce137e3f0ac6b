//! Plan execution engine.

use rusqlite::Connection;

use crate::availability::Availability;
use crate::database::Database;
use crate::error::{Error, Result};

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether this was a dry run (no changes made).
    pub dry_run: bool,

    /// Descriptions of the actions taken (or that would be taken).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// Rows created by insert actions, with their new ids. Empty in a dry
    /// run.
    pub inserted: Vec<Availability>,
}

impl ExecutionResult {
    fn from_plan(plan: &OperationPlan, dry_run: bool, inserted: Vec<Availability>) -> Self {
        Self {
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            inserted,
        }
    }
}

/// Applies operation plans to the database.
///
/// Pass a [`rusqlite::Transaction`] to apply the plan atomically together
/// with the reads it was built from.
///
/// # Examples
///
/// ```no_run
/// use ridepool::database::{Database, DatabaseConfig};
/// use ridepool::operations::{OperationPlan, PlanExecutor};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/ridepool.db")).unwrap();
/// let tx = db.begin_transaction().unwrap();
/// let result = PlanExecutor::new(&tx).execute(&OperationPlan::new("noop")).unwrap();
/// tx.commit().unwrap();
/// assert!(result.actions_taken.is_empty());
/// ```
pub struct PlanExecutor<'a> {
    conn: &'a Connection,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a plan executor.
    #[must_use]
    pub const fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            dry_run: false,
        }
    }

    /// Switches to dry-run mode: the plan is reported but not applied.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the plan in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails. A row to delete that no longer
    /// exists means the plan is stale, reported as
    /// [`Error::ConcurrentModification`].
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            log::info!("dry run: {} ({} action(s))", plan.description, plan.len());
            return Ok(ExecutionResult::from_plan(plan, true, Vec::new()));
        }

        let mut inserted = Vec::new();
        for action in &plan.actions {
            log::debug!("{}", action.description());
            match action {
                PlanAction::DeleteAvailability(id) => {
                    if Database::delete_availability(self.conn, &[*id])? == 0 {
                        return Err(Error::ConcurrentModification {
                            details: format!("availability {id} was removed by another writer"),
                        });
                    }
                }
                PlanAction::InsertAvailability(row) => {
                    inserted.push(Database::create_availability(self.conn, row)?);
                }
                PlanAction::UpdateAvailability(row) => {
                    Database::upsert_availability(self.conn, std::slice::from_ref(row))?;
                }
            }
        }

        log::info!("{}: applied {} action(s)", plan.description, plan.len());
        Ok(ExecutionResult::from_plan(plan, false, inserted))
    }
}
