use async_trait::async_trait;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::time::Duration;

use super::{ClimateData, Error, Measurement, Station, StationActivity, TemperatureSummary};

const MAX_CONNECTIONS: u32 = 5;

pub struct ClimateAccess {
    pool: SqlitePool,
}

impl ClimateAccess {
    /// Opens the dataset read-only. The file must already exist.
    pub async fn new(path: &str) -> Result<Self, Error> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        info!("opened climate dataset at: {}", path);
        Ok(Self { pool })
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").fetch_one(&mut *conn).await?;
        Ok(())
    }
}

// Each query acquires its own pooled connection; the guard hands it back on drop,
// including when the query errors.
#[async_trait]
impl ClimateData for ClimateAccess {
    async fn latest_measurement_date(&self) -> Result<Option<String>, Error> {
        let mut conn = self.pool.acquire().await?;
        let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&mut *conn)
            .await?;
        Ok(latest)
    }

    async fn most_active_station(&self) -> Result<Option<StationActivity>, Error> {
        let mut conn = self.pool.acquire().await?;
        let activity = sqlx::query_as::<_, StationActivity>(
            "SELECT station, COUNT(id) AS observations
             FROM measurement
             GROUP BY station
             ORDER BY COUNT(id) DESC
             LIMIT 1",
        )
        .fetch_optional(&mut *conn)
        .await?;
        Ok(activity)
    }

    async fn stations(&self) -> Result<Vec<Station>, Error> {
        let mut conn = self.pool.acquire().await?;
        let stations = sqlx::query_as::<_, Station>(
            "SELECT station, name, latitude, longitude, elevation FROM station",
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(stations)
    }

    async fn measurements_since(&self, start: &str) -> Result<Vec<Measurement>, Error> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, Measurement>(
            "SELECT id, station, date, prcp, tobs
             FROM measurement
             WHERE date >= ?",
        )
        .bind(start)
        .fetch_all(&mut *conn)
        .await?;
        debug!("{} measurements since {}", rows.len(), start);
        Ok(rows)
    }

    async fn station_measurements_since(
        &self,
        station: &str,
        start: &str,
    ) -> Result<Vec<Measurement>, Error> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, Measurement>(
            "SELECT id, station, date, prcp, tobs
             FROM measurement
             WHERE date >= ? AND station = ?",
        )
        .bind(start)
        .bind(station)
        .fetch_all(&mut *conn)
        .await?;
        debug!("{} measurements for {} since {}", rows.len(), station, start);
        Ok(rows)
    }

    async fn temperature_summary(&self, start: &str) -> Result<TemperatureSummary, Error> {
        let mut conn = self.pool.acquire().await?;
        let row: (Option<f64>, Option<f64>, Option<f64>) = sqlx::query_as(
            "SELECT CAST(MIN(tobs) AS REAL), CAST(AVG(tobs) AS REAL), CAST(MAX(tobs) AS REAL)
             FROM measurement
             WHERE date >= ?",
        )
        .bind(start)
        .fetch_one(&mut *conn)
        .await?;
        Ok(row.into())
    }

    async fn temperature_summary_between(
        &self,
        start: &str,
        end: &str,
    ) -> Result<TemperatureSummary, Error> {
        let mut conn = self.pool.acquire().await?;
        let row: (Option<f64>, Option<f64>, Option<f64>) = sqlx::query_as(
            "SELECT CAST(MIN(tobs) AS REAL), CAST(AVG(tobs) AS REAL), CAST(MAX(tobs) AS REAL)
             FROM measurement
             WHERE date >= ? AND date <= ?",
        )
        .bind(start)
        .bind(end)
        .fetch_one(&mut *conn)
        .await?;
        Ok(row.into())
    }
}
