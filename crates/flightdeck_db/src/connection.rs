//! Database connection management.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::{debug, error, info};

use crate::error::{DbError, DbResult};
use crate::models::FlightRecord;
use crate::queries;

/// Connection to a flight-records database.
///
/// Wraps a single `SqlitePool` that lives for the whole process: opened once
/// at startup, shared by every report, closed explicitly on exit.
#[derive(Debug, Clone)]
pub struct FlightsDb {
    pool: SqlitePool,
}

impl FlightsDb {
    /// Open an existing flight-records database file.
    ///
    /// The dataset is shipped, not created by this tool, so a missing file
    /// is a startup error rather than an empty database. Migrations are
    /// written as `IF NOT EXISTS` and pass through a populated dataset
    /// untouched.
    pub async fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DbError::database_missing(path));
        }

        info!("Opening flights database: {}", path.display());

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(false)
            .journal_mode(SqliteJournalMode::Wal)
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(5) // SQLite is single-writer, but readers can parallelize
            .connect_with(options)
            .await?;

        debug!("Database connection established");

        Self::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    /// Open an in-memory database (for testing).
    pub async fn open_in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(1) // In-memory must be single connection to share state
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    /// Run database migrations.
    async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
        debug!("Running database migrations");
        sqlx::migrate!("./migrations").run(pool).await?;
        debug!("Database migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Check if the database is healthy.
    pub async fn health_check(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Get database statistics.
    pub async fn stats(&self) -> DbResult<DbStats> {
        let flights: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM flights")
            .fetch_one(&self.pool)
            .await?;

        let airlines: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM airlines")
            .fetch_one(&self.pool)
            .await?;

        Ok(DbStats {
            flight_count: flights.0 as u64,
            airline_count: airlines.0 as u64,
        })
    }

    // ========================================================================
    // Report facade
    //
    // These methods preserve the interactive tool's fail-open contract: any
    // query failure is logged and surfaced as an empty result, so the shell
    // cannot tell "no matches" from "query failed". Callers that need the
    // distinction should use `queries::reports` directly.
    // ========================================================================

    /// Look up a single flight by its identifier.
    ///
    /// Returns at most one row; an unknown or non-numeric id yields an
    /// empty result.
    pub async fn get_flight_by_id(&self, flight_id: &str) -> Vec<FlightRecord> {
        self.report(queries::reports::flight_by_id(&self.pool, flight_id))
            .await
    }

    /// All flights on a given date, `YYYY-MM-DD`.
    ///
    /// A malformed date is rejected before any query runs.
    pub async fn get_flights_by_date(&self, date_str: &str) -> Vec<FlightRecord> {
        let date = match queries::reports::parse_report_date(date_str) {
            Ok(date) => date,
            Err(e) => {
                error!("{}", e);
                return Vec::new();
            }
        };
        self.report(queries::reports::flights_by_date(&self.pool, date))
            .await
    }

    /// Delayed flights (departure delay >= 20 minutes) for an airline,
    /// matched exactly on its display name.
    pub async fn get_delayed_flights_by_airline(&self, airline_name: &str) -> Vec<FlightRecord> {
        self.report(queries::reports::delayed_flights_by_airline(
            &self.pool,
            airline_name,
        ))
        .await
    }

    /// Delayed flights (departure delay >= 20 minutes) departing from an
    /// origin airport code.
    pub async fn get_delayed_flights_by_origin(&self, origin_code: &str) -> Vec<FlightRecord> {
        self.report(queries::reports::delayed_flights_by_origin(
            &self.pool,
            origin_code,
        ))
        .await
    }

    async fn report(
        &self,
        query: impl std::future::Future<Output = DbResult<Vec<FlightRecord>>>,
    ) -> Vec<FlightRecord> {
        match query.await {
            Ok(rows) => rows,
            Err(e) => {
                error!("Query failed: {}", e);
                Vec::new()
            }
        }
    }
}

/// Database statistics.
#[derive(Debug, Clone)]
pub struct DbStats {
    pub flight_count: u64,
    pub airline_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_in_memory() {
        let db = FlightsDb::open_in_memory().await.unwrap();
        db.health_check().await.unwrap();

        let stats = db.stats().await.unwrap();
        assert_eq!(stats.flight_count, 0);
        assert_eq!(stats.airline_count, 0);
    }

    #[tokio::test]
    async fn test_open_missing_file_fails() {
        let err = FlightsDb::open("/nonexistent/flights.sqlite3")
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::DatabaseMissing { .. }));
    }

    #[tokio::test]
    async fn test_malformed_date_is_fail_open() {
        let db = FlightsDb::open_in_memory().await.unwrap();
        assert!(db.get_flights_by_date("2015/13/40").await.is_empty());
        assert!(db.get_flights_by_date("not-a-date").await.is_empty());
    }
}
