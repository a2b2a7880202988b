//! Discovery over a filesystem mirror of the NOMADS layout.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use crate::catalog::{parse_date_directory, CatalogEntry, CatalogFilter};
use crate::discovery::Explorer;
use crate::error::{ExplorerError, ExplorerResult};
use crate::filename::parse_nwm_filename;

/// Walks a local directory tree containing `nwm.YYYYMMDD` directories.
#[derive(Debug, Default)]
pub struct LocalExplorer;

impl LocalExplorer {
    pub fn new() -> Self {
        Self
    }
}

/// Resolve an address to a mirror root, accepting `file://` prefixes.
pub fn mirror_root(address: &str) -> ExplorerResult<PathBuf> {
    let path = PathBuf::from(address.trim().strip_prefix("file://").unwrap_or(address.trim()));
    if !path.is_dir() {
        return Err(ExplorerError::InvalidAddress {
            address: address.to_string(),
            reason: "not a directory".to_string(),
        });
    }
    Ok(path)
}

/// Date of the nearest `nwm.YYYYMMDD` ancestor of a file.
fn issuance_date(path: &Path) -> Option<NaiveDate> {
    path.ancestors()
        .skip(1)
        .filter_map(|dir| dir.file_name().and_then(|name| name.to_str()))
        .find_map(parse_date_directory)
}

fn walk_mirror(root: &Path, filter: &CatalogFilter) -> ExplorerResult<Vec<CatalogEntry>> {
    let now = Utc::now();
    let mut entries = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(filename) = entry.file_name().to_str() else {
            continue;
        };
        let Some(info) = parse_nwm_filename(filename) else {
            continue;
        };
        let Some(date) = issuance_date(entry.path()) else {
            debug!(path = %entry.path().display(), "NWM file outside a dated directory");
            continue;
        };
        let Some(catalog_entry) =
            CatalogEntry::new(entry.path().display().to_string(), date, info)
        else {
            continue;
        };

        if filter.admits(&catalog_entry, now) {
            entries.push(catalog_entry);
        }
    }

    Ok(entries)
}

#[async_trait]
impl Explorer for LocalExplorer {
    fn name(&self) -> &'static str {
        "local"
    }

    #[instrument(skip(self, filter), fields(explorer = "local"))]
    async fn explore(
        &self,
        address: &str,
        filter: &CatalogFilter,
    ) -> ExplorerResult<Vec<CatalogEntry>> {
        let root = mirror_root(address)?;
        let filter = filter.clone();

        let entries = tokio::task::spawn_blocking(move || walk_mirror(&root, &filter)).await??;

        info!(count = entries.len(), "Local exploration complete");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issuance_date_from_ancestor() {
        let path = Path::new("/mirror/nwm.20240115/short_range/nwm.t00z.short_range.land.f001.conus.nc");
        assert_eq!(issuance_date(path), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(issuance_date(Path::new("/mirror/short_range/file.nc")), None);
    }

    #[test]
    fn test_mirror_root_rejects_missing_directory() {
        let result = mirror_root("file:///definitely/not/a/mirror");
        assert!(matches!(result, Err(ExplorerError::InvalidAddress { .. })));
    }
}
