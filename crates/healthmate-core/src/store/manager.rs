use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::{debug, info};

use crate::models::{Category, Difficulty, ExerciseRecord};

use super::migrations::{self, MigrationPolicy};
use super::seed::default_exercises;
use super::StoreError;

const SELECT_COLUMNS: &str =
    "SELECT id, name, body_part, description, instructions, duration, calories, difficulty FROM exercises";

const UPSERT_SQL: &str = r"
    INSERT INTO exercises (id, name, body_part, description, instructions, duration, calories, difficulty)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
    ON CONFLICT(id) DO UPDATE SET
        name = excluded.name,
        body_part = excluded.body_part,
        description = excluded.description,
        instructions = excluded.instructions,
        duration = excluded.duration,
        calories = excluded.calories,
        difficulty = excluded.difficulty
    ";

/// Local exercise cache backed by SQLite.
///
/// All access goes through a pool holding a single connection, so each query
/// acquires it for its own duration and hands it back on every exit path.
/// Clone is cheap - the pool is reference counted.
#[derive(Clone)]
pub struct ExerciseStore {
    pool: SqlitePool,
}

impl ExerciseStore {
    /// Open (creating if missing) the cache file at `path` and bring its
    /// schema up to date. A new file is seeded with the default exercises.
    pub async fn open(path: &Path, policy: MigrationPolicy) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        debug!(path = %path.display(), "Opening exercise cache");

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self::connect(options, policy).await
    }

    /// A private, seeded cache that lives as long as the returned store.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        Self::connect(options, MigrationPolicy::Incremental).await
    }

    async fn connect(
        options: SqliteConnectOptions,
        policy: MigrationPolicy,
    ) -> Result<Self, StoreError> {
        // One connection that is never recycled; an in-memory database
        // disappears with its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.initialize(policy).await?;
        Ok(store)
    }

    async fn initialize(&self, policy: MigrationPolicy) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        let created = migrations::migrate_to_latest(&mut tx, policy).await?;
        if created {
            Self::seed(&mut tx).await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn seed(conn: &mut SqliteConnection) -> Result<(), StoreError> {
        let defaults = default_exercises();
        for record in &defaults {
            Self::upsert_on(conn, record).await?;
        }
        info!(count = defaults.len(), "Seeded exercise cache with default exercises");
        Ok(())
    }

    /// Move the schema to `version`, upgrading or downgrading through the
    /// known steps. Moving up from version 0 reseeds the defaults.
    pub async fn migrate_to(&self, version: u32) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        let found = migrations::current_version(&mut tx).await?;
        let created = migrations::migrate_between(&mut tx, found, version).await?;
        if created {
            Self::seed(&mut tx).await?;
        }
        tx.commit().await?;
        Ok(())
    }

    pub async fn schema_version(&self) -> Result<u32, StoreError> {
        let mut conn = self.pool.acquire().await?;
        migrations::current_version(&mut conn).await
    }

    /// Every cached exercise, in insertion order.
    pub async fn get_all(&self) -> Result<Vec<ExerciseRecord>, StoreError> {
        let rows = sqlx::query(&format!("{} ORDER BY rowid", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_exercise).collect()
    }

    pub async fn get_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<ExerciseRecord>, StoreError> {
        let rows = sqlx::query(&format!("{} WHERE body_part = ?1 ORDER BY rowid", SELECT_COLUMNS))
            .bind(category.local_name())
            .fetch_all(&self.pool)
            .await?;
        debug!(category = %category, count = rows.len(), "Loaded exercises by category");
        rows.iter().map(row_to_exercise).collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<ExerciseRecord>, StoreError> {
        let row = sqlx::query(&format!("{} WHERE id = ?1", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_exercise).transpose()
    }

    /// Insert the record, or overwrite every field of the row with the same id.
    /// Returns the id.
    pub async fn upsert(&self, record: &ExerciseRecord) -> Result<String, StoreError> {
        if record.id.trim().is_empty() {
            return Err(StoreError::InvalidRecord(
                "exercise id must not be empty".to_string(),
            ));
        }
        let mut conn = self.pool.acquire().await?;
        Self::upsert_on(&mut conn, record).await?;
        debug!(id = %record.id, "Upserted exercise");
        Ok(record.id.clone())
    }

    async fn upsert_on(conn: &mut SqliteConnection, record: &ExerciseRecord) -> Result<(), StoreError> {
        sqlx::query(UPSERT_SQL)
            .bind(&record.id)
            .bind(&record.name)
            .bind(record.category.local_name())
            .bind(&record.description)
            .bind(&record.instructions)
            .bind(i64::from(record.duration_minutes))
            .bind(i64::from(record.calories_burned))
            .bind(record.difficulty.as_str())
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercises")
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    /// Close the pooled connection. Further calls fail with a database error.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn row_to_exercise(row: &SqliteRow) -> Result<ExerciseRecord, StoreError> {
    let id: String = row.try_get("id")?;
    let corrupt = |reason: String| StoreError::CorruptRow {
        id: id.clone(),
        reason,
    };

    let body_part: String = row.try_get("body_part")?;
    let category = Category::from_local(&body_part).map_err(|e| corrupt(e.to_string()))?;

    let difficulty_str: String = row.try_get("difficulty")?;
    let difficulty = Difficulty::parse(&difficulty_str)
        .ok_or_else(|| corrupt(format!("unknown difficulty {:?}", difficulty_str)))?;

    let duration: i64 = row.try_get("duration")?;
    let duration_minutes =
        u32::try_from(duration).map_err(|_| corrupt(format!("duration out of range: {}", duration)))?;

    let calories: i64 = row.try_get("calories")?;
    let calories_burned =
        u32::try_from(calories).map_err(|_| corrupt(format!("calories out of range: {}", calories)))?;

    Ok(ExerciseRecord {
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        instructions: row.try_get("instructions")?,
        category,
        duration_minutes,
        calories_burned,
        difficulty,
        id,
    })
}

// ============================================================================
// Tests
// ============================================================================
