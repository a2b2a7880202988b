//! NWM filename parsing.
//!
//! NWM output files are named
//! `nwm.t{HH}z.{configuration}.{model}[_{member}].{offset}.{domain}.nc`,
//! for example `nwm.t06z.medium_range.channel_rt_3.f012.conus.nc` or
//! `nwm.t00z.analysis_assim.land.tm02.conus.nc`.

use std::fmt;

use nwm_config::{ModelConfiguration, NwmModel};
use serde::Serialize;

/// Time offset of a file relative to its cycle, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastOffset {
    /// `f###` (hours) or `f#####` (hours and minutes): valid after the cycle
    Lead(u32),
    /// `tm##` (hours) or `tm####` (hours and minutes): valid before the cycle
    Lookback(u32),
}

impl ForecastOffset {
    pub fn minutes(&self) -> u32 {
        match self {
            ForecastOffset::Lead(m) | ForecastOffset::Lookback(m) => *m,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        if let Some(digits) = token.strip_prefix("tm") {
            return parse_offset_digits(digits, 2).map(ForecastOffset::Lookback);
        }
        if let Some(digits) = token.strip_prefix('f') {
            return parse_offset_digits(digits, 3).map(ForecastOffset::Lead);
        }
        None
    }
}

/// Parse `H..H` or `H..HMM` where the hour field has `hour_width` digits.
fn parse_offset_digits(digits: &str, hour_width: usize) -> Option<u32> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() == hour_width {
        digits.parse::<u32>().ok().map(|h| h * 60)
    } else if digits.len() == hour_width + 2 {
        let hours = digits[..hour_width].parse::<u32>().ok()?;
        let minutes = digits[hour_width..].parse::<u32>().ok()?;
        (minutes < 60).then_some(hours * 60 + minutes)
    } else {
        None
    }
}

impl fmt::Display for ForecastOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, width, minutes) = match self {
            ForecastOffset::Lead(m) => ("f", 3, *m),
            ForecastOffset::Lookback(m) => ("tm", 2, *m),
        };
        if minutes % 60 == 0 {
            write!(f, "{}{:0width$}", prefix, minutes / 60, width = width)
        } else {
            write!(
                f,
                "{}{:0width$}{:02}",
                prefix,
                minutes / 60,
                minutes % 60,
                width = width
            )
        }
    }
}

/// Information extracted from an NWM filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NwmFileInfo {
    /// Cycle hour (0-23)
    pub cycle: u32,
    pub model_configuration: ModelConfiguration,
    pub model: NwmModel,
    /// Ensemble member for medium and long range output
    pub member: Option<u32>,
    pub offset: ForecastOffset,
    /// Spatial domain (conus, hawaii, puertorico, alaska)
    pub domain: String,
}

/// Parse an NWM output filename.
///
/// Gzipped files (`.nc.gz`) are accepted. Returns `None` for anything that
/// is not an NWM netCDF file, including index (`.idx`) files that sit next
/// to the data on NOMADS.
pub fn parse_nwm_filename(filename: &str) -> Option<NwmFileInfo> {
    let name = filename.strip_suffix(".gz").unwrap_or(filename);
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() != 7 || parts[0] != "nwm" || parts[6] != "nc" {
        return None;
    }

    let cycle = parts[1]
        .strip_prefix('t')
        .and_then(|s| s.strip_suffix('z'))
        .filter(|s| s.len() == 2)
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|&c| c < 24)?;

    let model_configuration = parts[2].parse::<ModelConfiguration>().ok()?;
    let (model, member) = parse_model_token(parts[3])?;
    let offset = ForecastOffset::parse(parts[4])?;

    let domain = parts[5];
    if domain.is_empty() || !domain.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }

    Some(NwmFileInfo {
        cycle,
        model_configuration,
        model,
        member,
        offset,
        domain: domain.to_string(),
    })
}

/// `channel_rt` or `channel_rt_3`.
fn parse_model_token(token: &str) -> Option<(NwmModel, Option<u32>)> {
    if let Ok(model) = token.parse::<NwmModel>() {
        return Some((model, None));
    }
    let (name, member) = token.rsplit_once('_')?;
    let member = member.parse::<u32>().ok()?;
    let model = name.parse::<NwmModel>().ok()?;
    Some((model, Some(member)))
}
