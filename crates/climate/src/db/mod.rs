pub mod sqlite;

pub use sqlite::ClimateAccess;

use async_trait::async_trait;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query sqlite: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Failed to parse date string: {0}")]
    DateParse(#[from] time::error::Parse),
    #[error("Failed to format date: {0}")]
    DateFormat(#[from] time::error::Format),
    #[error("Invalid calendar date: {0}")]
    DateRange(#[from] time::error::ComponentRange),
    #[error("Dataset contains no measurements")]
    EmptyDataset,
}

/// Read access to the station and measurement tables.
///
/// Every call is a single query; implementations must not write.
#[async_trait]
pub trait ClimateData: Send + Sync {
    /// Latest `measurement.date`, `None` when the table is empty
    async fn latest_measurement_date(&self) -> Result<Option<String>, Error>;
    /// Station with the highest measurement count, `None` when the table is empty
    async fn most_active_station(&self) -> Result<Option<StationActivity>, Error>;
    async fn stations(&self) -> Result<Vec<Station>, Error>;
    /// All measurements with `date >= start`
    async fn measurements_since(&self, start: &str) -> Result<Vec<Measurement>, Error>;
    /// Measurements of one station with `date >= start`
    async fn station_measurements_since(
        &self,
        station: &str,
        start: &str,
    ) -> Result<Vec<Measurement>, Error>;
    /// MIN/AVG/MAX of `tobs` for rows with `date >= start`
    async fn temperature_summary(&self, start: &str) -> Result<TemperatureSummary, Error>;
    /// MIN/AVG/MAX of `tobs` for rows with `start <= date <= end`
    async fn temperature_summary_between(
        &self,
        start: &str,
        end: &str,
    ) -> Result<TemperatureSummary, Error>;
}

/// Row of the `station` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Station {
    /// Station code, e.g. `USC00519397`
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// Row of the `measurement` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Measurement {
    pub id: i64,
    pub station: String,
    /// ISO 8601 calendar date (`YYYY-MM-DD`)
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct StationActivity {
    pub station: String,
    pub observations: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PrecipitationEntry {
    pub date: String,
    pub prcp: Option<f64>,
}

impl From<Measurement> for PrecipitationEntry {
    fn from(value: Measurement) -> Self {
        Self {
            date: value.date,
            prcp: value.prcp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemperatureEntry {
    pub date: String,
    pub tobs: f64,
}

impl From<Measurement> for TemperatureEntry {
    fn from(value: Measurement) -> Self {
        Self {
            date: value.date,
            tobs: value.tobs,
        }
    }
}

/// Temperature aggregates over a date range, all `None` when no rows matched.
///
/// Serialized as a `[min, avg, max]` array.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TemperatureSummary {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl From<(Option<f64>, Option<f64>, Option<f64>)> for TemperatureSummary {
    fn from((min, avg, max): (Option<f64>, Option<f64>, Option<f64>)) -> Self {
        Self { min, avg, max }
    }
}

impl Serialize for TemperatureSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.min, self.avg, self.max].serialize(serializer)
    }
}
