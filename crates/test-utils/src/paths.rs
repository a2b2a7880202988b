//! Path utilities for locating test data files.
//!
//! Fixtures committed next to a crate live in `crates/<crate>/testdata/`.

use std::path::PathBuf;

/// Workspace root: two levels above this crate's manifest (`crates/test-utils`).
pub fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root = manifest_dir.ancestors().nth(2).map(PathBuf::from);
    root.unwrap_or(manifest_dir)
}

/// Returns the path to `crates/{crate_name}/testdata/`.
pub fn crate_testdata_dir(crate_name: &str) -> PathBuf {
    workspace_root()
        .join("crates")
        .join(crate_name)
        .join("testdata")
}

/// Returns the path of a file in a crate's testdata directory.
///
/// Panics if the file does not exist; use this for fixtures that are
/// committed alongside the crate.
pub fn crate_test_file(crate_name: &str, name: &str) -> PathBuf {
    let path = crate_testdata_dir(crate_name).join(name);
    assert!(path.exists(), "Missing test fixture: {}", path.display());
    path
}

/// Creates a temporary directory with a specific prefix.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn temp_test_dir_with_prefix(prefix: &str) -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("Failed to create temporary test directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_is_valid() {
        let root = workspace_root();
        // Should contain Cargo.toml at workspace level
        assert!(
            root.join("Cargo.toml").exists(),
            "Workspace root should contain Cargo.toml: {:?}",
            root
        );
    }

    #[test]
    fn test_crate_testdata_dir() {
        let dir = crate_testdata_dir("nwm-config");
        assert!(dir.ends_with("crates/nwm-config/testdata"));
    }

    #[test]
    fn test_crate_test_file_committed() {
        let path = crate_test_file("nwm-config", "conversion.json");
        assert!(path.starts_with(workspace_root()));
    }

    #[test]
    fn test_temp_test_dir_with_prefix() {
        let dir = temp_test_dir_with_prefix("nwm_test_");
        let path_str = dir.path().to_string_lossy();
        assert!(path_str.contains("nwm_test_"));
    }
}
