//! The searcher that pairs an address with an explorer strategy.

use chrono::Utc;
use tracing::{info, instrument};

use crate::catalog::{Catalog, CatalogFilter};
use crate::discovery::{create_explorer, Explorer, ExplorerType};
use crate::error::ExplorerResult;

/// Searches an address for NWM data and holds the resulting catalog.
///
/// ```ignore
/// let mut searcher = Nomad::new(NOMADS_PROD_URL, "remote")?;
/// searcher.explore().await?;
/// println!("{}", searcher.catalog());
/// ```
pub struct Nomad {
    address: String,
    explorer: Box<dyn Explorer>,
    filter: CatalogFilter,
    catalog: Catalog,
}

impl Nomad {
    /// Create a searcher using the explorer registered under `explorer_type`.
    pub fn new(address: impl Into<String>, explorer_type: &str) -> ExplorerResult<Self> {
        let explorer_type: ExplorerType = explorer_type.parse()?;
        Ok(Self::with_explorer(address, create_explorer(explorer_type)?))
    }

    /// Create a searcher around an already constructed explorer.
    pub fn with_explorer(address: impl Into<String>, explorer: Box<dyn Explorer>) -> Self {
        Self {
            address: address.into(),
            explorer,
            filter: CatalogFilter::default(),
            catalog: Catalog::default(),
        }
    }

    /// Restrict which files end up in the catalog.
    pub fn with_filter(mut self, filter: CatalogFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn explorer_name(&self) -> &'static str {
        self.explorer.name()
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    /// Run the explorer and replace the catalog with what it found.
    #[instrument(skip(self), fields(address = %self.address, explorer = self.explorer.name()))]
    pub async fn explore(&mut self) -> ExplorerResult<&Catalog> {
        let entries = self.explorer.explore(&self.address, &self.filter).await?;

        // Explorers may prune coarsely; the filter has the final say.
        let catalog = Catalog::new(entries).filter(&self.filter, Utc::now());
        info!(
            files = catalog.len(),
            issuances = catalog.issuances().len(),
            "Exploration complete"
        );

        self.catalog = catalog;
        Ok(&self.catalog)
    }

    /// The catalog from the last call to [`Nomad::explore`].
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
