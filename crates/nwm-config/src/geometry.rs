//! Geometry source configuration.

use serde::Deserialize;

use crate::model::GeometryFormat;

/// Where to find the dataset that dictates what the points in the NWM data
/// mean, and how to read it.
///
/// The JSON object must carry exactly `path`, `input_format` and
/// `feature_id_field`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeometryConfiguration {
    /// Location of the geometry dataset
    pub path: String,
    /// File format of the geometry dataset
    pub input_format: GeometryFormat,
    /// Field in the geometry dataset matching the NWM `feature_id`
    pub feature_id_field: String,
}

impl GeometryConfiguration {
    pub fn new(
        path: impl Into<String>,
        input_format: GeometryFormat,
        feature_id_field: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            input_format,
            feature_id_field: feature_id_field.into(),
        }
    }
}
