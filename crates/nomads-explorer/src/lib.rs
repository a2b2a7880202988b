//! Discovery of National Water Model output.
//!
//! A [`Nomad`] pairs a data address with an [`Explorer`] strategy chosen
//! from the [`EXPLORERS`] registry. Exploring walks the NOMADS directory
//! layout (`nwm.YYYYMMDD/<configuration>/<file>.nc`) over HTTP or on a
//! local mirror and collects every NWM file it recognises into a
//! [`Catalog`].

pub mod catalog;
pub mod discovery;
pub mod error;
pub mod filename;
pub mod local;
pub mod nomad;
pub mod remote;

pub use catalog::{parse_date_directory, Catalog, CatalogEntry, CatalogFilter};
pub use discovery::{create_explorer, explorer_names, Explorer, ExplorerType, EXPLORERS};
pub use error::{ExplorerError, ExplorerResult};
pub use filename::{parse_nwm_filename, ForecastOffset, NwmFileInfo};
pub use local::LocalExplorer;
pub use nomad::Nomad;
pub use remote::{extract_links, RemoteExplorer, RemoteExplorerConfig, NOMADS_PROD_URL};
