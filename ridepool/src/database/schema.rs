//! SQL table definitions and statements.

/// Schema version written to the metadata table.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Key/value store for versioning.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// Vehicles and their capacity vectors.
pub const CREATE_VEHICLES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS vehicles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        company INTEGER NOT NULL,
        passengers INTEGER NOT NULL CHECK (passengers >= 0),
        wheelchairs INTEGER NOT NULL CHECK (wheelchairs >= 0),
        bikes INTEGER NOT NULL CHECK (bikes >= 0),
        luggage INTEGER NOT NULL CHECK (luggage >= 0)
    )";

/// Availability windows. Zero-length rows are refused by the CHECK.
pub const CREATE_AVAILABILITY_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS availability (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        vehicle INTEGER NOT NULL REFERENCES vehicles(id) ON DELETE CASCADE,
        start_time INTEGER NOT NULL,
        end_time INTEGER NOT NULL,
        CHECK (start_time < end_time)
    )";

/// Scheduled pickups and dropoffs.
pub const CREATE_EVENTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS events (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        vehicle INTEGER NOT NULL REFERENCES vehicles(id) ON DELETE CASCADE,
        scheduled_time INTEGER NOT NULL,
        is_pickup INTEGER NOT NULL CHECK (is_pickup IN (0, 1)),
        passengers INTEGER NOT NULL CHECK (passengers >= 0),
        wheelchairs INTEGER NOT NULL CHECK (wheelchairs >= 0),
        bikes INTEGER NOT NULL CHECK (bikes >= 0),
        luggage INTEGER NOT NULL CHECK (luggage >= 0)
    )";

/// Serves the per-vehicle overlap query.
pub const CREATE_AVAILABILITY_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_availability_vehicle_start ON availability(vehicle, start_time)";

/// Serves the ordered tour read.
pub const CREATE_EVENTS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_events_vehicle_time ON events(vehicle, scheduled_time)";

/// Reads the schema version.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// Writes the schema version.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

pub(super) const INSERT_VEHICLE: &str = r"
    INSERT INTO vehicles (company, passengers, wheelchairs, bikes, luggage)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

pub(super) const SELECT_VEHICLE: &str = r"
    SELECT id, company, passengers, wheelchairs, bikes, luggage
    FROM vehicles
    WHERE id = ?1
";

pub(super) const LIST_VEHICLES: &str = r"
    SELECT id, company, passengers, wheelchairs, bikes, luggage
    FROM vehicles
    WHERE ?1 IS NULL OR company = ?1
    ORDER BY id
";

pub(super) const VEHICLE_BELONGS_TO: &str =
    "SELECT EXISTS (SELECT 1 FROM vehicles WHERE id = ?1 AND company = ?2)";

pub(super) const INSERT_AVAILABILITY: &str =
    "INSERT INTO availability (vehicle, start_time, end_time) VALUES (?1, ?2, ?3)";

pub(super) const UPSERT_AVAILABILITY: &str = r"
    INSERT INTO availability (id, vehicle, start_time, end_time)
    VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT (id) DO UPDATE SET
        vehicle = excluded.vehicle,
        start_time = excluded.start_time,
        end_time = excluded.end_time
";

pub(super) const DELETE_AVAILABILITY: &str = "DELETE FROM availability WHERE id = ?1";

pub(super) const LIST_AVAILABILITY: &str = r"
    SELECT id, vehicle, start_time, end_time
    FROM availability
    WHERE ?1 IS NULL OR vehicle = ?1
    ORDER BY vehicle, start_time, id
";

// Half-open overlap: start < to AND end > from
pub(super) const SELECT_OVERLAPPING_AVAILABILITY: &str = r"
    SELECT id, vehicle, start_time, end_time
    FROM availability
    WHERE vehicle = ?1 AND start_time < ?3 AND end_time > ?2
    ORDER BY start_time, id
";

pub(super) const INSERT_EVENT: &str = r"
    INSERT INTO events (vehicle, scheduled_time, is_pickup, passengers, wheelchairs, bikes, luggage)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
";

pub(super) const SELECT_EVENTS_FOR_VEHICLE: &str = r"
    SELECT id, vehicle, scheduled_time, is_pickup, passengers, wheelchairs, bikes, luggage
    FROM events
    WHERE vehicle = ?1
    ORDER BY scheduled_time, id
";
