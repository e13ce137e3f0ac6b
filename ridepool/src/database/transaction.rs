//! Write transactions.
//!
//! `BEGIN IMMEDIATE` takes SQLite's write lock up front, so two writers can
//! never interleave a read of the same rows with a conflicting write. A
//! writer that cannot get the lock within the busy timeout fails with
//! [`Error::ConcurrentModification`](crate::Error::ConcurrentModification).

use rusqlite::{Transaction, TransactionBehavior};

use crate::error::Result;

use super::connection::Database;

impl Database {
    /// Starts an `IMMEDIATE` transaction.
    ///
    /// # Errors
    ///
    /// Returns a concurrent-modification error if another writer holds the
    /// lock past the busy timeout.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ridepool::database::{Database, DatabaseConfig};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/ridepool.db")).unwrap();
    /// let tx = db.begin_transaction().unwrap();
    /// let vehicles = Database::list_vehicles(&tx, None).unwrap();
    /// tx.commit().unwrap();
    /// ```
    pub fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        log::debug!("began immediate transaction");
        Ok(tx)
    }
}
