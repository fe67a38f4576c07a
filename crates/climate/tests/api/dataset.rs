use crate::helpers::{
    create_dataset, get, measurement, mock_measurements, mock_stations,
};
use axum::http::StatusCode;
use climate::{
    app, build_app_state, compute_cutoff_date, compute_most_active_station, ClimateAccess,
    ClimateData, PrecipitationEntry, Station, TemperatureEntry,
};
use serde_json::{from_slice, json, Value};

#[tokio::test]
async fn startup_aggregates_come_from_dataset() {
    let dataset = create_dataset(&mock_stations(), &mock_measurements()).await;
    let access = ClimateAccess::new(&dataset.path).await.unwrap();

    assert_eq!(compute_cutoff_date(&access).await.unwrap(), "2016-08-23");
    assert_eq!(
        compute_most_active_station(&access).await.unwrap(),
        "USC00519281"
    );

    let activity = access.most_active_station().await.unwrap().unwrap();
    assert_eq!(activity.observations, 4);
}

#[tokio::test]
async fn single_station_example_keeps_both_rows() {
    let rows = vec![
        measurement(1, "USC1", "2017-08-10", Some(0.5), 75.0),
        measurement(2, "USC1", "2016-08-10", Some(0.6), 74.0),
    ];
    let dataset = create_dataset(&[], &rows).await;
    let state = build_app_state(&dataset.path)
        .await
        .unwrap();
    assert_eq!(state.climate.reference().cutoff_date, "2016-08-10");

    let precipitation = state.climate.list_precipitation().await.unwrap();
    assert_eq!(
        precipitation,
        vec![
            PrecipitationEntry {
                date: "2017-08-10".to_string(),
                prcp: Some(0.5)
            },
            PrecipitationEntry {
                date: "2016-08-10".to_string(),
                prcp: Some(0.6)
            },
        ]
    );
}

#[tokio::test]
async fn precipitation_excludes_rows_before_cutoff() {
    let dataset = create_dataset(&mock_stations(), &mock_measurements()).await;
    let state = build_app_state(&dataset.path)
        .await
        .unwrap();
    let app = app(state);

    let (status, body) = get(&app, "/api/v1.0/precipitation").await;
    assert_eq!(status, StatusCode::OK);

    let entries: Vec<PrecipitationEntry> = from_slice(&body).unwrap();
    let expected: Vec<PrecipitationEntry> = mock_measurements()
        .into_iter()
        .filter(|m| m.date.as_str() >= "2016-08-23")
        .map(PrecipitationEntry::from)
        .collect();

    assert_eq!(entries.len(), 6);
    assert_eq!(entries, expected);
    assert!(entries.iter().all(|e| e.date.as_str() >= "2016-08-23"));
    // two stations reported on the cutoff date, both are kept
    assert_eq!(entries.iter().filter(|e| e.date == "2016-08-23").count(), 2);
    assert!(entries.iter().any(|e| e.prcp.is_none()));
}

#[tokio::test]
async fn stations_match_station_table() {
    let dataset = create_dataset(&mock_stations(), &mock_measurements()).await;
    let state = build_app_state(&dataset.path)
        .await
        .unwrap();
    let app = app(state);

    let (status, body) = get(&app, "/api/v1.0/stations").await;
    assert_eq!(status, StatusCode::OK);

    let stations: Vec<Station> = from_slice(&body).unwrap();
    assert_eq!(stations, mock_stations());
}

#[tokio::test]
async fn tobs_only_contains_most_active_station() {
    let dataset = create_dataset(&mock_stations(), &mock_measurements()).await;
    let state = build_app_state(&dataset.path)
        .await
        .unwrap();
    let app = app(state);

    let (status, body) = get(&app, "/api/v1.0/tobs").await;
    assert_eq!(status, StatusCode::OK);

    let entries: Vec<TemperatureEntry> = from_slice(&body).unwrap();
    let dates: Vec<&str> = entries.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, vec!["2016-08-23", "2017-01-15", "2017-08-18"]);
    assert_eq!(
        entries.iter().map(|e| e.tobs).collect::<Vec<_>>(),
        vec![77.0, 70.0, 79.0]
    );
}

#[tokio::test]
async fn start_summary_aggregates_in_sqlite() {
    let dataset = create_dataset(&mock_stations(), &mock_measurements()).await;
    let state = build_app_state(&dataset.path)
        .await
        .unwrap();
    let app = app(state);

    let (status, body) = get(&app, "/api/v1.0/2017-01-01").await;
    assert_eq!(status, StatusCode::OK);

    let payload: Value = from_slice(&body).unwrap();
    assert_eq!(payload, json!([70.0, 77.5, 81.0]));

    let values: Vec<f64> = from_slice(&body).unwrap();
    assert!(values[0] <= values[1] && values[1] <= values[2]);
}

#[tokio::test]
async fn range_summary_is_inclusive() {
    let dataset = create_dataset(&mock_stations(), &mock_measurements()).await;
    let state = build_app_state(&dataset.path)
        .await
        .unwrap();
    let app = app(state);

    let (status, body) = get(&app, "/api/v1.0/2017-01-15/2017-08-18").await;
    assert_eq!(status, StatusCode::OK);

    let payload: Value = from_slice(&body).unwrap();
    assert_eq!(payload, json!([70.0, 74.5, 79.0]));
}

#[tokio::test]
async fn no_matching_rows_yield_nulls() {
    let dataset = create_dataset(&mock_stations(), &mock_measurements()).await;
    let state = build_app_state(&dataset.path)
        .await
        .unwrap();
    let app = app(state);

    for uri in [
        "/api/v1.0/2099-01-01",
        "/api/v1.0/2017-08-20/2017-01-01",
        "/api/v1.0/not-a-date",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, b"[null,null,null]", "{uri}");
    }
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let dataset = create_dataset(&mock_stations(), &mock_measurements()).await;
    let state = build_app_state(&dataset.path)
        .await
        .unwrap();
    let app = app(state);

    for uri in [
        "/api/v1.0/precipitation",
        "/api/v1.0/stations",
        "/api/v1.0/tobs",
        "/api/v1.0/2016-08-23",
        "/api/v1.0/2016-08-23/2017-08-23",
    ] {
        let (_, first) = get(&app, uri).await;
        let (_, second) = get(&app, uri).await;
        assert_eq!(first, second, "{uri}");
    }
}

#[tokio::test]
async fn empty_measurement_table_fails_startup() {
    let dataset = create_dataset(&mock_stations(), &[]).await;
    let result = build_app_state(&dataset.path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn missing_dataset_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.sqlite");
    let result = build_app_state(&path.to_string_lossy()).await;
    assert!(result.is_err());
    assert!(!path.exists());
}

#[tokio::test]
async fn leap_day_latest_date_fails_startup() {
    let rows = vec![
        measurement(1, "USC00519281", "2016-02-29", Some(0.1), 70.0),
        measurement(2, "USC00519281", "2015-12-31", Some(0.0), 68.0),
    ];
    let dataset = create_dataset(&mock_stations(), &rows).await;
    let result = build_app_state(&dataset.path).await;
    assert!(result.is_err());
}
