//! Catalog of discovered NWM files.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use nwm_config::{DataConfiguration, DataConstraintConfiguration, ModelConfiguration, NwmModel};
use serde::Serialize;

use crate::filename::{ForecastOffset, NwmFileInfo};

/// A single discovered NWM file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CatalogEntry {
    /// URL or filesystem path of the file
    pub location: String,
    /// Cycle time of the run that produced the file
    pub issuance: DateTime<Utc>,
    #[serde(flatten)]
    pub file: NwmFileInfo,
}

impl CatalogEntry {
    /// Build an entry from the `nwm.YYYYMMDD` directory date and parsed filename.
    pub fn new(location: impl Into<String>, date: NaiveDate, file: NwmFileInfo) -> Option<Self> {
        let issuance = date.and_hms_opt(file.cycle, 0, 0)?;
        Some(Self {
            location: location.into(),
            issuance: Utc.from_utc_datetime(&issuance),
            file,
        })
    }

    #[allow(clippy::type_complexity)]
    fn sort_key(
        &self,
    ) -> (
        DateTime<Utc>,
        ModelConfiguration,
        NwmModel,
        Option<u32>,
        ForecastOffset,
        &str,
        &str,
    ) {
        (
            self.issuance,
            self.file.model_configuration,
            self.file.model,
            self.file.member,
            self.file.offset,
            &self.file.domain,
            &self.location,
        )
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.issuance.format("%Y-%m-%dT%H:%MZ"),
            self.file.model_configuration,
            self.file.model
        )?;
        if let Some(member) = self.file.member {
            write!(f, "_{}", member)?;
        }
        write!(f, " {} {} {}", self.file.offset, self.file.domain, self.location)
    }
}

/// Parse the date out of an `nwm.YYYYMMDD` directory name.
pub fn parse_date_directory(name: &str) -> Option<NaiveDate> {
    let digits = name.trim_end_matches('/').strip_prefix("nwm.")?;
    if digits.len() != 8 {
        return None;
    }
    NaiveDate::parse_from_str(digits, "%Y%m%d").ok()
}

/// Narrows discovery to one configuration, one model and an issuance window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub model_configuration: Option<ModelConfiguration>,
    pub model: Option<NwmModel>,
    pub constraints: DataConstraintConfiguration,
}

impl CatalogFilter {
    pub fn from_data_configuration(data: &DataConfiguration) -> Self {
        Self {
            model_configuration: Some(data.model_configuration),
            model: Some(data.model),
            constraints: data.constraints.clone(),
        }
    }

    /// Whether a configuration directory (`short_range`, `forcing_analysis_assim`,
    /// `medium_range_mem3`, ...) may hold matching files.
    ///
    /// Forcing output only lives under `forcing_*` directories and nothing else does.
    pub fn admits_directory(&self, name: &str) -> bool {
        let name = name.trim_end_matches('/');
        let is_forcing_dir = name.starts_with("forcing_");

        match self.model {
            Some(NwmModel::Forcing) if !is_forcing_dir => return false,
            Some(model) if model != NwmModel::Forcing && is_forcing_dir => return false,
            _ => {}
        }

        self.model_configuration
            .map_or(true, |config| name.contains(config.as_str()))
    }

    /// Whether any cycle on this date falls inside the issuance window.
    pub fn admits_date(&self, date: NaiveDate, now: DateTime<Utc>) -> bool {
        if self.constraints.is_unbounded() {
            return true;
        }
        (0..24).filter_map(|hour| date.and_hms_opt(hour, 0, 0)).any(|naive| {
            self.constraints
                .admits(Utc.from_utc_datetime(&naive), now)
        })
    }

    pub fn admits(&self, entry: &CatalogEntry, now: DateTime<Utc>) -> bool {
        self.model_configuration
            .map_or(true, |config| entry.file.model_configuration == config)
            && self.model.map_or(true, |model| entry.file.model == model)
            && self.constraints.admits(entry.issuance, now)
    }
}

/// Ordered, de-duplicated set of discovered NWM files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(mut entries: Vec<CatalogEntry>) -> Self {
        entries.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        entries.dedup_by(|a, b| a.location == b.location);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Distinct issuance times, oldest first.
    pub fn issuances(&self) -> Vec<DateTime<Utc>> {
        self.entries
            .iter()
            .map(|entry| entry.issuance)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The newest issuance in the catalog, if any.
    pub fn latest_issuance(&self) -> Option<DateTime<Utc>> {
        self.entries.iter().map(|entry| entry.issuance).max()
    }

    /// A new catalog holding only the entries the filter admits.
    pub fn filter(&self, filter: &CatalogFilter, now: DateTime<Utc>) -> Catalog {
        Catalog {
            entries: self
                .entries
                .iter()
                .filter(|entry| filter.admits(entry, now))
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "NWM catalog: {} files across {} issuances",
            self.entries.len(),
            self.issuances().len()
        )?;
        for entry in &self.entries {
            writeln!(f, "  {}", entry)?;
        }
        Ok(())
    }
}
