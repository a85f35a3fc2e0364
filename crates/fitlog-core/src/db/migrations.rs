//! Database migrations

use crate::error::Result;
use rusqlite::Connection;

/// Run all pending migrations
pub fn run(conn: &Connection) -> Result<()> {
    let version = get_version(conn)?;

    if version < 1 {
        migrate_v1(conn)?;
    }

    Ok(())
}

/// Get the current schema version
fn get_version(conn: &Connection) -> Result<i32> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get::<_, i32>(0).map(|v| v != 0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;

    Ok(version)
}

/// Migration to version 1: Initial schema
///
/// Timestamps are Unix milliseconds. Identity is `(id, user_id)` everywhere
/// except the singleton profile, which is keyed by owner alone.
fn migrate_v1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        );

        CREATE TABLE IF NOT EXISTS workout_sessions (
            id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            date TEXT NOT NULL,
            workout_name TEXT NOT NULL,
            notes TEXT,
            created_at INTEGER NOT NULL,
            updated_at INTEGER,
            PRIMARY KEY (id, user_id)
        );
        CREATE INDEX IF NOT EXISTS idx_sessions_user_time
            ON workout_sessions(user_id, COALESCE(updated_at, created_at));

        CREATE TABLE IF NOT EXISTS workout_sets (
            id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            session_id TEXT NOT NULL,
            exercise TEXT NOT NULL,
            set_number INTEGER NOT NULL,
            reps INTEGER NOT NULL,
            weight_kg REAL,
            rpe REAL,
            PRIMARY KEY (id, user_id),
            FOREIGN KEY (session_id, user_id)
                REFERENCES workout_sessions(id, user_id)
        );
        CREATE INDEX IF NOT EXISTS idx_sets_session
            ON workout_sets(user_id, session_id);

        CREATE TABLE IF NOT EXISTS food_entries (
            id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            date TEXT NOT NULL,
            meal TEXT NOT NULL,
            food_name TEXT NOT NULL,
            quantity REAL NOT NULL,
            unit TEXT NOT NULL,
            calories REAL NOT NULL,
            protein_g REAL NOT NULL,
            carbs_g REAL NOT NULL,
            fat_g REAL NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER,
            PRIMARY KEY (id, user_id)
        );
        CREATE INDEX IF NOT EXISTS idx_food_user_time
            ON food_entries(user_id, COALESCE(updated_at, created_at));

        CREATE TABLE IF NOT EXISTS weight_entries (
            id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            date TEXT NOT NULL,
            weight_kg REAL NOT NULL,
            created_at INTEGER NOT NULL,
            PRIMARY KEY (id, user_id)
        );
        CREATE INDEX IF NOT EXISTS idx_weight_user_time
            ON weight_entries(user_id, created_at);

        CREATE TABLE IF NOT EXISTS profiles (
            user_id TEXT PRIMARY KEY,
            id TEXT NOT NULL,
            height_cm REAL,
            birth_year INTEGER,
            sex TEXT,
            activity_level TEXT,
            goal TEXT,
            created_at INTEGER NOT NULL,
            updated_at INTEGER
        );

        INSERT INTO schema_version (version) VALUES (1);

        COMMIT;",
    )?;

    Ok(())
}
