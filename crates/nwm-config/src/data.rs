//! Input data configuration: where the NWM data lives and what to take.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer};

use crate::model::{ModelConfiguration, NwmModel};

/// Where to get the input NWM data and what limits to place upon it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataConfiguration {
    /// Root of the input data
    #[serde(rename = "address")]
    pub data_address: String,
    /// Run configuration to use (`short_range`, `analysis_assim`, ...)
    pub model_configuration: ModelConfiguration,
    /// Model output to use (`channel_rt`, `land`, `reservoir`, ...)
    pub model: NwmModel,
    /// Limits on which issuances to convert
    #[serde(default)]
    pub constraints: DataConstraintConfiguration,
}

/// Limits on which forecast or simulation issuances should be used.
///
/// Relative bounds are measured backwards from "now": a relative minimum of
/// six hours admits nothing issued earlier than six hours ago.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataConstraintConfiguration {
    /// Earliest issuance to consider, in absolute time
    pub absolute_minimum_issuance: Option<DateTime<Utc>>,
    /// Latest issuance to consider, in absolute time
    pub absolute_maximum_issuance: Option<DateTime<Utc>>,
    /// Earliest issuance to consider, as an age relative to now
    pub relative_minimum_issuance: Option<Duration>,
    /// Latest issuance to consider, as an age relative to now
    pub relative_maximum_issuance: Option<Duration>,
}

impl DataConstraintConfiguration {
    /// Build constraints from the optional `constraints` JSON object.
    ///
    /// No bound is populated from the document yet.
    // TODO: interpret issuance bounds by converting date strings to
    // `DateTime<Utc>` and duration strings to `Duration`.
    pub fn from_json(_constraints: Option<&serde_json::Value>) -> Self {
        Self::default()
    }

    pub fn with_absolute_minimum_issuance(mut self, issuance: DateTime<Utc>) -> Self {
        self.absolute_minimum_issuance = Some(issuance);
        self
    }

    pub fn with_absolute_maximum_issuance(mut self, issuance: DateTime<Utc>) -> Self {
        self.absolute_maximum_issuance = Some(issuance);
        self
    }

    pub fn with_relative_minimum_issuance(mut self, age: Duration) -> Self {
        self.relative_minimum_issuance = Some(age);
        self
    }

    pub fn with_relative_maximum_issuance(mut self, age: Duration) -> Self {
        self.relative_maximum_issuance = Some(age);
        self
    }

    /// True when no bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.absolute_minimum_issuance.is_none()
            && self.absolute_maximum_issuance.is_none()
            && self.relative_minimum_issuance.is_none()
            && self.relative_maximum_issuance.is_none()
    }

    /// Check whether an issuance falls within every bound that is set.
    pub fn admits(&self, issuance: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        if let Some(min) = self.absolute_minimum_issuance {
            if issuance < min {
                return false;
            }
        }
        if let Some(max) = self.absolute_maximum_issuance {
            if issuance > max {
                return false;
            }
        }
        if let Some(earliest) = relative_cutoff(self.relative_minimum_issuance, now) {
            if issuance < earliest {
                return false;
            }
        }
        if let Some(latest) = relative_cutoff(self.relative_maximum_issuance, now) {
            if issuance > latest {
                return false;
            }
        }
        true
    }
}

/// `now - age`. An age that reaches outside the representable time range
/// leaves that side unbounded.
fn relative_cutoff(age: Option<Duration>, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    age.and_then(|age| now.checked_sub_signed(age))
}

impl<'de> Deserialize<'de> for DataConstraintConfiguration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(Self::from_json(raw.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_data_configuration() {
        let json = r#"{
            "address": "https://nomads.ncep.noaa.gov/pub/data/nccf/com/nwm/prod/",
            "model_configuration": "short_range",
            "model": "channel_rt"
        }"#;

        let data: DataConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(
            data.data_address,
            "https://nomads.ncep.noaa.gov/pub/data/nccf/com/nwm/prod/"
        );
        assert_eq!(data.model_configuration, ModelConfiguration::ShortRange);
        assert_eq!(data.model, NwmModel::ChannelRt);
        assert!(data.constraints.is_unbounded());
    }

    #[test]
    fn test_constraints_are_not_interpreted() {
        let json = r#"{
            "address": "/data/nwm",
            "model_configuration": "analysis_assim",
            "model": "land",
            "constraints": {
                "absolute_minimum_issuance": "2024-01-01T00:00:00Z",
                "relative_maximum_issuance": "PT6H"
            }
        }"#;

        let data: DataConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(data.constraints, DataConstraintConfiguration::default());
    }

    #[test]
    fn test_null_constraints() {
        let json = r#"{
            "address": "/data/nwm",
            "model_configuration": "long_range",
            "model": "reservoir",
            "constraints": null
        }"#;

        let data: DataConfiguration = serde_json::from_str(json).unwrap();
        assert!(data.constraints.is_unbounded());
    }

    #[test]
    fn test_missing_model_rejected() {
        let json = r#"{"address": "/data/nwm", "model_configuration": "short_range"}"#;
        let err = serde_json::from_str::<DataConfiguration>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `model`"));
    }

    #[test]
    fn test_unbounded_admits_everything() {
        let constraints = DataConstraintConfiguration::default();
        assert!(constraints.admits(at(0), at(12)));
        assert!(constraints.admits(at(23), at(12)));
    }

    #[test]
    fn test_absolute_bounds() {
        let constraints = DataConstraintConfiguration::default()
            .with_absolute_minimum_issuance(at(6))
            .with_absolute_maximum_issuance(at(12));

        assert!(!constraints.admits(at(5), at(23)));
        assert!(constraints.admits(at(6), at(23)));
        assert!(constraints.admits(at(12), at(23)));
        assert!(!constraints.admits(at(13), at(23)));
    }

    #[test]
    fn test_relative_bounds() {
        let now = at(18);
        let constraints = DataConstraintConfiguration::default()
            .with_relative_minimum_issuance(Duration::hours(12))
            .with_relative_maximum_issuance(Duration::hours(2));

        assert!(!constraints.admits(at(5), now));
        assert!(constraints.admits(at(6), now));
        assert!(constraints.admits(at(16), now));
        assert!(!constraints.admits(at(17), now));
    }

    #[test]
    fn test_out_of_range_relative_bounds_are_unbounded() {
        let now = at(18);
        let ages = [Duration::days(365 * 1_000_000), -Duration::days(365 * 1_000_000)];

        for age in ages {
            let constraints = DataConstraintConfiguration::default()
                .with_relative_minimum_issuance(age)
                .with_relative_maximum_issuance(age);
            assert!(constraints.admits(at(0), now));
            assert!(constraints.admits(at(23), now));
        }

        let constraints = DataConstraintConfiguration::default()
            .with_relative_minimum_issuance(Duration::days(365 * 1_000_000))
            .with_relative_maximum_issuance(Duration::hours(2));
        assert!(constraints.admits(at(16), now));
        assert!(!constraints.admits(at(17), now));
    }
}
