//! Enumerated vocabulary of the National Water Model and geometry sources.
//!
//! Each enum deserializes from, and displays as, the exact token used in
//! configuration files and NWM filenames.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// File format of the geometry dataset that gives NWM features a shape.
///
/// Parsing ignores case and accepts the common short names (`gpkg`, `shp`,
/// `nc`, `json`), so `"GeoJSON"` and `"GPKG"` are both valid in a
/// configuration file. The canonical token is always written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryFormat {
    Geojson,
    Shapefile,
    Netcdf,
    Geopackage,
    Csv,
}

impl GeometryFormat {
    pub const ALL: [GeometryFormat; 5] = [
        GeometryFormat::Geojson,
        GeometryFormat::Shapefile,
        GeometryFormat::Netcdf,
        GeometryFormat::Geopackage,
        GeometryFormat::Csv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryFormat::Geojson => "geojson",
            GeometryFormat::Shapefile => "shapefile",
            GeometryFormat::Netcdf => "netcdf",
            GeometryFormat::Geopackage => "geopackage",
            GeometryFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for GeometryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "geojson" | "json" => Ok(GeometryFormat::Geojson),
            "shapefile" | "shp" => Ok(GeometryFormat::Shapefile),
            "netcdf" | "nc" => Ok(GeometryFormat::Netcdf),
            "geopackage" | "gpkg" => Ok(GeometryFormat::Geopackage),
            "csv" => Ok(GeometryFormat::Csv),
            _ => Err(ConfigError::UnknownValue {
                kind: "geometry format",
                value: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for GeometryFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(de::Error::custom)
    }
}

/// NWM run configuration (the product family a file belongs to).
///
/// The token is the third dot-separated field of an NWM filename, e.g.
/// `nwm.t00z.short_range.channel_rt.f001.conus.nc`. These are the products
/// NWM v3 publishes under `nwm/prod`. Regional runs (`short_range_hawaii`,
/// `medium_range_alaska_mem1`, ...) reuse these tokens in their filenames
/// and differ only by directory and domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelConfiguration {
    AnalysisAssim,
    AnalysisAssimExtend,
    AnalysisAssimExtendNoDa,
    AnalysisAssimLong,
    AnalysisAssimLongNoDa,
    AnalysisAssimNoDa,
    ShortRange,
    ShortRangeNoDa,
    MediumRange,
    MediumRangeNoDa,
    MediumRangeBlend,
    LongRange,
}

impl ModelConfiguration {
    pub const ALL: [ModelConfiguration; 12] = [
        ModelConfiguration::AnalysisAssim,
        ModelConfiguration::AnalysisAssimExtend,
        ModelConfiguration::AnalysisAssimExtendNoDa,
        ModelConfiguration::AnalysisAssimLong,
        ModelConfiguration::AnalysisAssimLongNoDa,
        ModelConfiguration::AnalysisAssimNoDa,
        ModelConfiguration::ShortRange,
        ModelConfiguration::ShortRangeNoDa,
        ModelConfiguration::MediumRange,
        ModelConfiguration::MediumRangeNoDa,
        ModelConfiguration::MediumRangeBlend,
        ModelConfiguration::LongRange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelConfiguration::AnalysisAssim => "analysis_assim",
            ModelConfiguration::AnalysisAssimExtend => "analysis_assim_extend",
            ModelConfiguration::AnalysisAssimExtendNoDa => "analysis_assim_extend_no_da",
            ModelConfiguration::AnalysisAssimLong => "analysis_assim_long",
            ModelConfiguration::AnalysisAssimLongNoDa => "analysis_assim_long_no_da",
            ModelConfiguration::AnalysisAssimNoDa => "analysis_assim_no_da",
            ModelConfiguration::ShortRange => "short_range",
            ModelConfiguration::ShortRangeNoDa => "short_range_no_da",
            ModelConfiguration::MediumRange => "medium_range",
            ModelConfiguration::MediumRangeNoDa => "medium_range_no_da",
            ModelConfiguration::MediumRangeBlend => "medium_range_blend",
            ModelConfiguration::LongRange => "long_range",
        }
    }

    /// Analysis configurations look backwards from the cycle time (`tm##`).
    pub fn is_analysis(&self) -> bool {
        matches!(
            self,
            ModelConfiguration::AnalysisAssim
                | ModelConfiguration::AnalysisAssimExtend
                | ModelConfiguration::AnalysisAssimExtendNoDa
                | ModelConfiguration::AnalysisAssimLong
                | ModelConfiguration::AnalysisAssimLongNoDa
                | ModelConfiguration::AnalysisAssimNoDa
        )
    }
}

impl fmt::Display for ModelConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelConfiguration {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|config| config.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownValue {
                kind: "model configuration",
                value: s.to_string(),
            })
    }
}

/// NWM output model (which component of the hydrologic model wrote the file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NwmModel {
    ChannelRt,
    Land,
    Reservoir,
    TerrainRt,
    Forcing,
}

impl NwmModel {
    pub const ALL: [NwmModel; 5] = [
        NwmModel::ChannelRt,
        NwmModel::Land,
        NwmModel::Reservoir,
        NwmModel::TerrainRt,
        NwmModel::Forcing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NwmModel::ChannelRt => "channel_rt",
            NwmModel::Land => "land",
            NwmModel::Reservoir => "reservoir",
            NwmModel::TerrainRt => "terrain_rt",
            NwmModel::Forcing => "forcing",
        }
    }
}

impl fmt::Display for NwmModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NwmModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownValue {
                kind: "model",
                value: s.to_string(),
            })
    }
}
