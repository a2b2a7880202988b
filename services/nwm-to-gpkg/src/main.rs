//! National Water Model discovery for GeoPackage conversion.
//!
//! Explores a NOMADS-style address for NWM netCDF output and prints the
//! resulting catalog:
//! - `remote` walks HTTP directory indexes (NOMADS production by default)
//! - `local` walks a filesystem mirror of the same layout
//! - an optional conversion configuration narrows the catalog to one
//!   model configuration and model

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use nomads_explorer::{CatalogFilter, Nomad};
use nwm_config::ConversionConfiguration;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use cli::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Logs go to stderr so stdout carries only the catalog
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.level())
        .with_target(true)
        .with_writer(std::io::stderr)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => {
            let config = ConversionConfiguration::load(path)
                .with_context(|| format!("Failed to load configuration: {}", path.display()))?;
            if config.output_path != args.output.to_string_lossy() {
                warn!(
                    configured = %config.output_path,
                    output = %args.output.display(),
                    "Command-line output path overrides configuration"
                );
            }
            Some(config)
        }
        None => None,
    };

    let address = args.resolve_address(config.as_ref());
    if let (Some(cli), Some(config)) = (&args.address, &config) {
        if *cli != config.input.data_address {
            warn!(
                configured = %config.input.data_address,
                address = %cli,
                "Command-line address overrides configuration"
            );
        }
    }

    info!(
        address = %address,
        explorer = %args.explorer_type,
        output = %args.output.display(),
        "Starting NWM discovery"
    );

    let filter = config
        .as_ref()
        .map(|config| CatalogFilter::from_data_configuration(&config.input))
        .unwrap_or_default();

    let mut searcher = Nomad::new(address.clone(), &args.explorer_type)
        .context("Failed to create searcher")?
        .with_filter(filter);

    let catalog = searcher
        .explore()
        .await
        .with_context(|| format!("Failed to explore {}", address))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
    } else {
        print!("{}", catalog);
    }

    Ok(())
}
