//! Top-level conversion configuration, loaded from a JSON file.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::data::DataConfiguration;
use crate::error::{ConfigError, ConfigResult};
use crate::geometry::GeometryConfiguration;

/// Everything needed to convert NWM netCDF output into a GeoPackage.
///
/// ```json
/// {
///   "geometry": {"path": "...", "input_format": "geojson", "feature_id_field": "COMID"},
///   "input": {"address": "...", "model_configuration": "short_range", "model": "channel_rt"},
///   "output_path": "nwm.gpkg"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversionConfiguration {
    /// How to correlate NWM data to geographic data
    pub geometry: GeometryConfiguration,
    /// What data to convert
    pub input: DataConfiguration,
    /// Where to put the converted data
    pub output_path: String,
}

impl ConversionConfiguration {
    /// Load and validate a configuration file.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: ConversionConfiguration =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        debug!(
            model_configuration = %config.input.model_configuration,
            model = %config.input.model,
            output = %config.output_path,
            "Loaded conversion configuration"
        );
        Ok(config)
    }

    /// Parse and validate an in-memory JSON document.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: ConversionConfiguration =
            serde_json::from_str(content).map_err(|source| ConfigError::Parse {
                path: "<inline>".into(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that deserialize but cannot drive a conversion.
    pub fn validate(&self) -> ConfigResult<()> {
        let required = [
            ("geometry.path", &self.geometry.path),
            ("geometry.feature_id_field", &self.geometry.feature_id_field),
            ("input.address", &self.input.data_address),
            ("output_path", &self.output_path),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("'{}' must not be empty", key)));
            }
        }

        let constraints = &self.input.constraints;
        if let (Some(min), Some(max)) = (
            constraints.absolute_minimum_issuance,
            constraints.absolute_maximum_issuance,
        ) {
            if min > max {
                return Err(ConfigError::Invalid(format!(
                    "absolute minimum issuance {} is after maximum {}",
                    min, max
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GeometryFormat, ModelConfiguration, NwmModel};
    use chrono::{TimeZone, Utc};

    const CONFIG: &str = r#"{
        "geometry": {
            "path": "flowlines.shp",
            "input_format": "shapefile",
            "feature_id_field": "feature_id"
        },
        "input": {
            "address": "/data/nwm",
            "model_configuration": "medium_range",
            "model": "channel_rt"
        },
        "output_path": "out/medium_range.gpkg"
    }"#;

    #[test]
    fn test_from_json_str() {
        let config = ConversionConfiguration::from_json_str(CONFIG).unwrap();
        assert_eq!(config.geometry.input_format, GeometryFormat::Shapefile);
        assert_eq!(config.input.model_configuration, ModelConfiguration::MediumRange);
        assert_eq!(config.input.model, NwmModel::ChannelRt);
        assert_eq!(config.output_path, "out/medium_range.gpkg");
    }

    #[test]
    fn test_empty_output_path_invalid() {
        let json = CONFIG.replace("out/medium_range.gpkg", " ");
        let err = ConversionConfiguration::from_json_str(&json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("output_path")));
    }

    #[test]
    fn test_inverted_issuance_window_invalid() {
        let mut config = ConversionConfiguration::from_json_str(CONFIG).unwrap();
        config.input.constraints = config
            .input
            .constraints
            .with_absolute_minimum_issuance(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
            .with_absolute_maximum_issuance(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
