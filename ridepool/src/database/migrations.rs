//! Schema initialization and version checks.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_AVAILABILITY_INDEX, CREATE_AVAILABILITY_TABLE, CREATE_EVENTS_INDEX,
    CREATE_EVENTS_TABLE, CREATE_METADATA_TABLE, CREATE_VEHICLES_TABLE, CURRENT_SCHEMA_VERSION,
    INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Creates all tables and indices and records the schema version.
///
/// # Errors
///
/// Returns an error if any statement fails.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use ridepool::database::migrations::{get_schema_version, initialize_schema};
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// assert_eq!(get_schema_version(&conn).unwrap(), 1);
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    for statement in [
        CREATE_METADATA_TABLE,
        CREATE_VEHICLES_TABLE,
        CREATE_AVAILABILITY_TABLE,
        CREATE_EVENTS_TABLE,
        CREATE_AVAILABILITY_INDEX,
        CREATE_EVENTS_INDEX,
    ] {
        conn.execute(statement, [])?;
    }
    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION.to_string()])?;
    log::debug!("initialized schema version {CURRENT_SCHEMA_VERSION}");
    Ok(())
}

/// Reads the schema version; 0 means the database is uninitialized.
///
/// # Errors
///
/// Returns an error if the query fails for a reason other than a missing
/// metadata table or row.
pub fn get_schema_version(conn: &Connection) -> Result<u32> {
    let metadata_exists: bool = conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'metadata')",
        [],
        |row| row.get(0),
    )?;
    if !metadata_exists {
        return Ok(0);
    }

    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| row.get::<_, String>(0)) {
        Ok(value) => value.parse::<u32>().map_err(|e| Error::Validation {
            field: "schema_version".into(),
            message: format!("unreadable schema version '{value}': {e}"),
        }),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => Err(e.into()),
    }
}

/// Initializes a fresh database or verifies the version of an existing one.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] if the stored version differs
/// from [`CURRENT_SCHEMA_VERSION`], or a database error.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    match get_schema_version(conn)? {
        0 => initialize_schema(conn),
        CURRENT_SCHEMA_VERSION => Ok(()),
        found => Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_connection() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn test_initialize_schema() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
        for table in ["vehicles", "availability", "events"] {
            let count: i64 = conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })
                .unwrap();
            assert_eq!(count, 0, "{table}");
        }
    }

    #[test]
    fn test_uninitialized_version_is_zero() {
        let conn = create_test_connection();
        assert_eq!(get_schema_version(&conn).unwrap(), 0);
    }

    #[test]
    fn test_check_initializes_fresh_database() {
        let conn = create_test_connection();
        check_schema_compatibility(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);

        // Second check is a no-op
        check_schema_compatibility(&conn).unwrap();
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();
        conn.execute(
            "UPDATE metadata SET value = '999' WHERE key = 'schema_version'",
            [],
        )
        .unwrap();

        let err = check_schema_compatibility(&conn).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedSchemaVersion {
                expected: CURRENT_SCHEMA_VERSION,
                found: 999
            }
        ));
    }

    #[test]
    fn test_zero_length_availability_is_refused() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO vehicles (company, passengers, wheelchairs, bikes, luggage) VALUES (1, 3, 0, 0, 0)",
            [],
        )
        .unwrap();
        let result = conn.execute(
            "INSERT INTO availability (vehicle, start_time, end_time) VALUES (1, 5, 5)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_creates_indices() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();
        let index_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_%'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(index_count, 2);
    }
}
