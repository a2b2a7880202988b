//! Common test fixtures for NWM discovery and configuration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Representative NWM filenames.
pub mod filenames {
    /// Short range channel output, forecast hour 1
    pub const SHORT_RANGE_CHANNEL: &str = "nwm.t00z.short_range.channel_rt.f001.conus.nc";

    /// Medium range ensemble member 3, land output, forecast hour 6
    pub const MEDIUM_RANGE_MEMBER_LAND: &str = "nwm.t06z.medium_range.land_3.f006.conus.nc";

    /// Analysis file two hours back from the cycle time
    pub const ANALYSIS_LOOKBACK: &str = "nwm.t12z.analysis_assim.reservoir.tm02.conus.nc";

    /// Hawaii short range output (forecast minutes in the offset token)
    pub const HAWAII_SHORT_RANGE: &str = "nwm.t00z.short_range.channel_rt.f00100.hawaii.nc";

    /// Forcing file from the forcing_short_range directory
    pub const SHORT_RANGE_FORCING: &str = "nwm.t18z.short_range.forcing.f003.conus.nc";

    /// Not an NWM output file
    pub const NOT_NWM: &str = "gfs.t00z.pgrb2.0p25.f003";
}

/// A minimal conversion configuration document.
pub const CONVERSION_JSON: &str = r#"{
    "geometry": {
        "path": "data/flowlines.geojson",
        "input_format": "geojson",
        "feature_id_field": "COMID"
    },
    "input": {
        "address": "https://nomads.ncep.noaa.gov/pub/data/nccf/com/nwm/prod/",
        "model_configuration": "short_range",
        "model": "channel_rt"
    },
    "output_path": "nwm.gpkg"
}"#;

/// An Apache-style directory index like the NOMADS production root.
pub const NOMADS_ROOT_INDEX: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 3.2 Final//EN">
<html>
 <head>
  <title>Index of /pub/data/nccf/com/nwm/prod</title>
 </head>
 <body>
<h1>Index of /pub/data/nccf/com/nwm/prod</h1>
<pre><a href="?C=N;O=D">Name</a>                    <a href="?C=M;O=A">Last modified</a>      <a href="?C=S;O=A">Size</a>
<hr><a href="/pub/data/nccf/com/nwm/">Parent Directory</a>                             -
<a href="nwm.20240114/">nwm.20240114/</a>           2024-01-14 00:41    -
<a href="nwm.20240115/">nwm.20240115/</a>           2024-01-15 00:40    -
<hr></pre>
</body></html>
"#;

/// Directory index of a single NOMADS date directory.
pub const NOMADS_DATE_INDEX: &str = r#"<html>
<body>
<h1>Index of /pub/data/nccf/com/nwm/prod/nwm.20240115</h1>
<pre><a href="?C=N;O=D">Name</a>
<hr><a href="/pub/data/nccf/com/nwm/prod/">Parent Directory</a>
<a href="analysis_assim/">analysis_assim/</a>        2024-01-15 23:17    -
<a href="forcing_short_range/">forcing_short_range/</a>   2024-01-15 23:40    -
<a href="short_range/">short_range/</a>           2024-01-15 23:52    -
<a href="usgs_timeslices/">usgs_timeslices/</a>       2024-01-15 23:59    -
<hr></pre>
</body></html>
"#;

/// Directory index of a NOMADS configuration directory.
pub const NOMADS_FILE_INDEX: &str = r#"<html>
<body>
<pre><a href="?C=N;O=D">Name</a>
<hr><a href="/pub/data/nccf/com/nwm/prod/nwm.20240115/">Parent Directory</a>
<a href="nwm.t00z.short_range.channel_rt.f001.conus.nc">nwm.t00z.short_range.channel_rt.f001.conus.nc</a> 2024-01-15 01:31  12M
<a href="nwm.t00z.short_range.channel_rt.f002.conus.nc">nwm.t00z.short_range.channel_rt.f002.conus.nc</a> 2024-01-15 01:31  12M
<a href="nwm.t00z.short_range.land.f001.conus.nc">nwm.t00z.short_range.land.f001.conus.nc</a> 2024-01-15 01:32  43M
<a href="nwm.t00z.short_range.channel_rt.f001.conus.nc.idx">nwm.t00z.short_range.channel_rt.f001.conus.nc.idx</a> 2024-01-15 01:31  1K
<hr></pre>
</body></html>
"#;

/// Lay out a local NWM mirror: `<root>/nwm.<date>/<directory>/<filename>`.
///
/// Each file is written with a few placeholder bytes. Returns the created
/// file paths.
pub fn build_nwm_mirror(root: &Path, files: &[(&str, &str, &str)]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|(date, directory, filename)| {
            let dir = root.join(format!("nwm.{}", date)).join(directory);
            fs::create_dir_all(&dir).expect("Failed to create mirror directory");
            let path = dir.join(filename);
            fs::write(&path, b"CDF\x01").expect("Failed to write mirror file");
            path
        })
        .collect()
}
