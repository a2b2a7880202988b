//! Explorer strategies and the registry that names them.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::catalog::{CatalogEntry, CatalogFilter};
use crate::error::{ExplorerError, ExplorerResult};
use crate::local::LocalExplorer;
use crate::remote::RemoteExplorer;

/// Strategy for discovering NWM files under an address.
#[async_trait]
pub trait Explorer: Send + Sync {
    /// Registry name of this explorer.
    fn name(&self) -> &'static str;

    /// Find every NWM file under `address` that the filter admits.
    async fn explore(
        &self,
        address: &str,
        filter: &CatalogFilter,
    ) -> ExplorerResult<Vec<CatalogEntry>>;
}

/// Known explorer strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplorerType {
    /// HTTP directory indexes such as NOMADS
    Remote,
    /// A filesystem mirror of the NOMADS layout
    Local,
}

/// Registry of explorer names, in the order they are offered on the command line.
pub const EXPLORERS: &[(&str, ExplorerType)] = &[
    ("remote", ExplorerType::Remote),
    ("local", ExplorerType::Local),
];

/// Names of every registered explorer.
pub fn explorer_names() -> Vec<&'static str> {
    EXPLORERS.iter().map(|(name, _)| *name).collect()
}

impl ExplorerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExplorerType::Remote => "remote",
            ExplorerType::Local => "local",
        }
    }
}

impl fmt::Display for ExplorerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExplorerType {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EXPLORERS
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, explorer_type)| *explorer_type)
            .ok_or_else(|| ExplorerError::UnknownExplorer {
                name: s.to_string(),
                known: explorer_names().join(", "),
            })
    }
}

/// Create the explorer registered for a type.
pub fn create_explorer(explorer_type: ExplorerType) -> ExplorerResult<Box<dyn Explorer>> {
    Ok(match explorer_type {
        ExplorerType::Remote => Box::new(RemoteExplorer::new()?),
        ExplorerType::Local => Box::new(LocalExplorer::new()),
    })
}
