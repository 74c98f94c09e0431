//! Versioned schema steps for the exercise cache.
//!
//! The schema version lives in SQLite's `user_version` pragma. Every step
//! carries both directions so a database can be moved to any known version.
//! Version 0 means "no schema yet".

use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;
use tracing::{info, warn};

use super::StoreError;

pub struct Migration {
    pub version: u32,
    pub description: &'static str,
    pub up: &'static [&'static str],
    pub down: &'static [&'static str],
}

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "create exercises table",
        up: &[r"
            CREATE TABLE exercises (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                body_part TEXT NOT NULL,
                description TEXT NOT NULL,
                instructions TEXT NOT NULL,
                duration INTEGER NOT NULL CHECK (duration >= 0),
                calories INTEGER NOT NULL CHECK (calories >= 0),
                difficulty TEXT NOT NULL
            )
            "],
        down: &["DROP TABLE exercises"],
    },
    Migration {
        version: 2,
        description: "index exercises by body part",
        up: &["CREATE INDEX idx_exercises_body_part ON exercises (body_part)"],
        down: &["DROP INDEX idx_exercises_body_part"],
    },
];

pub const LATEST_VERSION: u32 = MIGRATIONS[MIGRATIONS.len() - 1].version;

/// What to do when the database was written by a different schema version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationPolicy {
    /// Apply the pending steps in order; existing rows are kept.
    #[default]
    Incremental,
    /// Drop the table and rebuild it from the default dataset when the
    /// database is older than this build. Rows added through `upsert` are
    /// lost. A newer database is refused, as with `Incremental`.
    Recreate,
}

pub(crate) async fn current_version(conn: &mut SqliteConnection) -> Result<u32, StoreError> {
    let version: i64 = sqlx::query_scalar("PRAGMA user_version")
        .fetch_one(&mut *conn)
        .await?;
    // user_version is a signed 32-bit header field
    u32::try_from(version).map_err(|_| StoreError::UnsupportedSchemaVersion {
        found: version,
        latest: LATEST_VERSION,
    })
}

async fn set_version(conn: &mut SqliteConnection, version: u32) -> Result<(), StoreError> {
    // PRAGMA does not accept bound parameters
    sqlx::query(&format!("PRAGMA user_version = {}", version))
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Move the schema from `from` to `to`, running `up` steps forward or `down`
/// steps in reverse. Returns true when the exercises table was created, which
/// is the caller's cue to seed it.
pub(crate) async fn migrate_between(
    conn: &mut SqliteConnection,
    from: u32,
    to: u32,
) -> Result<bool, StoreError> {
    if to > LATEST_VERSION {
        return Err(StoreError::UnknownVersion(to));
    }
    if from > LATEST_VERSION {
        return Err(StoreError::UnsupportedSchemaVersion {
            found: i64::from(from),
            latest: LATEST_VERSION,
        });
    }

    if to > from {
        for migration in MIGRATIONS.iter().filter(|m| m.version > from && m.version <= to) {
            info!(version = migration.version, description = migration.description, "Applying migration");
            for statement in migration.up {
                sqlx::query(statement).execute(&mut *conn).await?;
            }
        }
    } else {
        for migration in MIGRATIONS.iter().rev().filter(|m| m.version <= from && m.version > to) {
            info!(version = migration.version, description = migration.description, "Reverting migration");
            for statement in migration.down {
                sqlx::query(statement).execute(&mut *conn).await?;
            }
        }
    }

    if from != to {
        set_version(conn, to).await?;
    }
    Ok(from == 0 && to > 0)
}

/// Bring the schema to `LATEST_VERSION` according to `policy`.
pub(crate) async fn migrate_to_latest(
    conn: &mut SqliteConnection,
    policy: MigrationPolicy,
) -> Result<bool, StoreError> {
    let found = current_version(conn).await?;
    if found == LATEST_VERSION {
        return Ok(false);
    }
    // Never drop data written by a newer build, whatever the policy.
    if found > LATEST_VERSION {
        return Err(StoreError::UnsupportedSchemaVersion {
            found: i64::from(found),
            latest: LATEST_VERSION,
        });
    }

    match policy {
        MigrationPolicy::Incremental => migrate_between(conn, found, LATEST_VERSION).await,
        MigrationPolicy::Recreate => {
            if found != 0 {
                warn!(
                    found,
                    latest = LATEST_VERSION,
                    "Schema version mismatch, recreating exercise cache; user-added exercises are discarded"
                );
                sqlx::query("DROP TABLE IF EXISTS exercises")
                    .execute(&mut *conn)
                    .await?;
            }
            migrate_between(conn, 0, LATEST_VERSION).await
        }
    }
}
