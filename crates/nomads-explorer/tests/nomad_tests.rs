//! Exploration of local NWM mirrors through the `Nomad` searcher.

use nomads_explorer::{
    CatalogFilter, ExplorerError, ForecastOffset, LocalExplorer, Nomad, EXPLORERS,
};
use nwm_config::{ConversionConfiguration, ModelConfiguration, NwmModel};
use test_utils::{build_nwm_mirror, filenames, temp_test_dir_with_prefix, CONVERSION_JSON};

fn sample_mirror() -> tempfile::TempDir {
    let dir = temp_test_dir_with_prefix("nwm_mirror_");
    build_nwm_mirror(
        dir.path(),
        &[
            ("20240114", "short_range", filenames::SHORT_RANGE_CHANNEL),
            ("20240115", "short_range", filenames::SHORT_RANGE_CHANNEL),
            ("20240115", "short_range", "nwm.t00z.short_range.channel_rt.f002.conus.nc"),
            ("20240115", "medium_range_mem3", filenames::MEDIUM_RANGE_MEMBER_LAND),
            ("20240115", "analysis_assim", filenames::ANALYSIS_LOOKBACK),
            ("20240115", "forcing_short_range", filenames::SHORT_RANGE_FORCING),
            ("20240115", "short_range", "nwm.t00z.short_range.channel_rt.f001.conus.nc.idx"),
            ("20240115", "usgs_timeslices", "2024-01-15_00:00:00.15min.usgsTimeSlice.ncdf"),
        ],
    );
    dir
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_unknown_explorer_rejected() {
    let result = Nomad::new("/data/nwm", "s3");
    assert!(matches!(result, Err(ExplorerError::UnknownExplorer { .. })));
}

#[test]
fn test_every_registered_explorer_constructs() {
    for (name, _) in EXPLORERS {
        let nomad = Nomad::new("https://example.com/nwm/", name).unwrap();
        assert_eq!(nomad.explorer_name(), *name);
        assert!(nomad.catalog().is_empty());
    }
}

// ============================================================================
// Local exploration
// ============================================================================

#[tokio::test]
async fn test_explore_local_mirror() {
    let mirror = sample_mirror();
    let mut nomad = Nomad::new(mirror.path().display().to_string(), "local").unwrap();

    let catalog = nomad.explore().await.unwrap();

    // .idx and timeslice files are not NWM output
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.issuances().len(), 5);
    assert!(catalog
        .iter()
        .all(|entry| entry.location.starts_with(&mirror.path().display().to_string())));
}

#[tokio::test]
async fn test_explore_with_file_scheme() {
    let mirror = sample_mirror();
    let address = format!("file://{}", mirror.path().display());
    let mut nomad = Nomad::with_explorer(address, Box::new(LocalExplorer::new()));

    nomad.explore().await.unwrap();
    assert_eq!(nomad.catalog().len(), 6);
}

#[tokio::test]
async fn test_filter_from_configuration() {
    let mirror = sample_mirror();
    let config = ConversionConfiguration::from_json_str(CONVERSION_JSON).unwrap();

    let mut nomad = Nomad::new(mirror.path().display().to_string(), "local")
        .unwrap()
        .with_filter(CatalogFilter::from_data_configuration(&config.input));
    let catalog = nomad.explore().await.unwrap();

    assert_eq!(catalog.len(), 3);
    for entry in catalog {
        assert_eq!(entry.file.model_configuration, ModelConfiguration::ShortRange);
        assert_eq!(entry.file.model, NwmModel::ChannelRt);
    }
    assert_eq!(catalog.entries()[2].file.offset, ForecastOffset::Lead(120));
}

#[tokio::test]
async fn test_member_and_lookback_entries() {
    let mirror = sample_mirror();
    let mut nomad = Nomad::new(mirror.path().display().to_string(), "local")
        .unwrap()
        .with_filter(CatalogFilter {
            model: Some(NwmModel::Land),
            ..Default::default()
        });

    let catalog = nomad.explore().await.unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.entries()[0].file.member, Some(3));
    assert_eq!(catalog.entries()[0].issuance.to_rfc3339(), "2024-01-15T06:00:00+00:00");
}

#[tokio::test]
async fn test_missing_mirror_fails() {
    let dir = temp_test_dir_with_prefix("nwm_mirror_");
    let mut nomad = Nomad::new(dir.path().join("absent").display().to_string(), "local").unwrap();

    let result = nomad.explore().await;
    assert!(matches!(result, Err(ExplorerError::InvalidAddress { .. })));
    assert!(nomad.catalog().is_empty());
}

#[tokio::test]
async fn test_catalog_json_output() {
    let mirror = sample_mirror();
    let mut nomad = Nomad::new(mirror.path().display().to_string(), "local").unwrap();
    let catalog = nomad.explore().await.unwrap();

    let json = serde_json::to_value(catalog).unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 6);
    assert_eq!(entries[0]["model_configuration"], "short_range");
    assert_eq!(entries[0]["model"], "channel_rt");
    assert_eq!(entries[0]["offset"]["lead"], 60);
}
