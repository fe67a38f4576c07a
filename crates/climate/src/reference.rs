//! Values derived once from the dataset at startup and shared read-only by every request.

use log::info;
use time::{macros::format_description, Date};

use crate::db::{ClimateData, Error};

#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePoints {
    /// One year before the latest measurement date, `YYYY-MM-DD`
    pub cutoff_date: String,
    /// Station with the most measurement rows
    pub most_active_station: String,
}

impl ReferencePoints {
    pub async fn compute(db: &dyn ClimateData) -> Result<Self, Error> {
        let cutoff_date = compute_cutoff_date(db).await?;
        let most_active_station = compute_most_active_station(db).await?;
        info!(
            "reference points: cutoff date {}, most active station {}",
            cutoff_date, most_active_station
        );
        Ok(Self {
            cutoff_date,
            most_active_station,
        })
    }
}

pub async fn compute_cutoff_date(db: &dyn ClimateData) -> Result<String, Error> {
    let latest = db
        .latest_measurement_date()
        .await?
        .ok_or(Error::EmptyDataset)?;
    one_year_before(&latest)
}

pub async fn compute_most_active_station(db: &dyn ClimateData) -> Result<String, Error> {
    let activity = db.most_active_station().await?.ok_or(Error::EmptyDataset)?;
    info!(
        "station {} has the most measurements ({})",
        activity.station, activity.observations
    );
    Ok(activity.station)
}

/// Same month and day one year earlier.
///
/// Expects zero-padded `YYYY-MM-DD`. Feb 29 has no counterpart in the prior
/// year and is an error.
pub fn one_year_before(date: &str) -> Result<String, Error> {
    let date = Date::parse(date, format_description!("[year]-[month]-[day]"))?;
    let shifted = date.replace_year(date.year() - 1)?;
    Ok(shifted.format(format_description!("[year]-[month]-[day]"))?)
}
