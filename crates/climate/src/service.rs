use log::debug;
use std::sync::Arc;

use crate::{
    db::{ClimateData, Error},
    PrecipitationEntry, ReferencePoints, Station, TemperatureEntry, TemperatureSummary,
};

/// Endpoint-level queries over the dataset.
///
/// Holds the startup reference points; they are computed in [`ClimateService::new`]
/// and never refreshed.
pub struct ClimateService {
    db: Arc<dyn ClimateData>,
    reference: ReferencePoints,
}

impl ClimateService {
    pub async fn new(db: Arc<dyn ClimateData>) -> Result<Self, Error> {
        let reference = ReferencePoints::compute(db.as_ref()).await?;
        Ok(Self { db, reference })
    }

    pub fn reference(&self) -> &ReferencePoints {
        &self.reference
    }

    /// Every `(date, prcp)` pair on or after the cutoff date, one per measurement row
    pub async fn list_precipitation(&self) -> Result<Vec<PrecipitationEntry>, Error> {
        let rows = self
            .db
            .measurements_since(&self.reference.cutoff_date)
            .await?;
        Ok(rows.into_iter().map(PrecipitationEntry::from).collect())
    }

    pub async fn list_stations(&self) -> Result<Vec<Station>, Error> {
        self.db.stations().await
    }

    /// Temperature observations of the most active station since the cutoff date
    pub async fn list_recent_temperatures(&self) -> Result<Vec<TemperatureEntry>, Error> {
        let rows = self
            .db
            .station_measurements_since(
                &self.reference.most_active_station,
                &self.reference.cutoff_date,
            )
            .await?;
        Ok(rows.into_iter().map(TemperatureEntry::from).collect())
    }

    /// `start` is compared as a string against stored dates, it is not parsed
    pub async fn temperature_summary(&self, start: &str) -> Result<TemperatureSummary, Error> {
        debug!("temperature summary from {}", start);
        self.db.temperature_summary(start).await
    }

    pub async fn temperature_summary_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<TemperatureSummary, Error> {
        debug!("temperature summary from {} to {}", start, end);
        self.db.temperature_summary_between(start, end).await
    }
}
