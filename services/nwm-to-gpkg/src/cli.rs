//! Command-line arguments.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::Parser;
use nomads_explorer::{explorer_names, NOMADS_PROD_URL};
use nwm_config::ConversionConfiguration;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "nwm-to-gpkg")]
#[command(about = "Find National Water Model output to convert into a GeoPackage")]
pub struct Args {
    /// Where to find the National Water Model data [default: the
    /// configuration's input address, or NOMADS production]
    pub address: Option<String>,

    /// Where to save the output
    #[arg(short = 'o', value_name = "path", default_value = "nwm.gpkg")]
    pub output: PathBuf,

    /// The type of explorer that will look for the data
    #[arg(
        short = 'e',
        value_name = "explorer_type",
        default_value = "remote",
        value_parser = PossibleValuesParser::new(explorer_names())
    )]
    pub explorer_type: String,

    /// Conversion configuration file; its input section narrows discovery
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    /// The address to explore: the command line wins, then the
    /// configuration's `input.address`, then NOMADS production.
    pub fn resolve_address(&self, config: Option<&ConversionConfiguration>) -> String {
        self.address
            .clone()
            .or_else(|| config.map(|c| c.input.data_address.clone()))
            .unwrap_or_else(|| NOMADS_PROD_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["nwm-to-gpkg"]).unwrap();
        assert_eq!(args.address, None);
        assert_eq!(args.resolve_address(None), NOMADS_PROD_URL);
        assert_eq!(args.output, PathBuf::from("nwm.gpkg"));
        assert_eq!(args.explorer_type, "remote");
        assert!(args.config.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_explicit_values() {
        let args = Args::try_parse_from([
            "nwm-to-gpkg",
            "/data/nwm",
            "-o",
            "out/short_range.gpkg",
            "-e",
            "local",
            "--config",
            "conversion.json",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.address.as_deref(), Some("/data/nwm"));
        assert_eq!(args.output, PathBuf::from("out/short_range.gpkg"));
        assert_eq!(args.explorer_type, "local");
        assert_eq!(args.config, Some(PathBuf::from("conversion.json")));
        assert!(args.json);
    }

    #[test]
    fn test_address_resolution_order() {
        let config = ConversionConfiguration::from_json_str(
            r#"{
                "geometry": {"path": "flowlines.gpkg", "input_format": "gpkg", "feature_id_field": "COMID"},
                "input": {"address": "/mirror/nwm", "model_configuration": "short_range", "model": "channel_rt"},
                "output_path": "nwm.gpkg"
            }"#,
        )
        .unwrap();

        let args = Args::try_parse_from(["nwm-to-gpkg"]).unwrap();
        assert_eq!(args.resolve_address(Some(&config)), "/mirror/nwm");
        assert_eq!(args.resolve_address(None), NOMADS_PROD_URL);

        let args = Args::try_parse_from(["nwm-to-gpkg", "/data/nwm"]).unwrap();
        assert_eq!(args.resolve_address(Some(&config)), "/data/nwm");
    }

    #[test]
    fn test_unknown_explorer_rejected() {
        let err = Args::try_parse_from(["nwm-to-gpkg", "-e", "s3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_every_registered_explorer_accepted() {
        for name in explorer_names() {
            let args = Args::try_parse_from(["nwm-to-gpkg", "-e", name]).unwrap();
            assert_eq!(args.explorer_type, name);
        }
    }

    #[test]
    fn test_log_level_mapping() {
        let args = Args::try_parse_from(["nwm-to-gpkg", "--log-level", "DEBUG"]).unwrap();
        assert_eq!(args.level(), Level::DEBUG);

        let args = Args::try_parse_from(["nwm-to-gpkg", "--log-level", "chatty"]).unwrap();
        assert_eq!(args.level(), Level::INFO);
    }
}
