//! Shared test utilities for the nwm-to-gpkg workspace.
//!
//! - Testdata paths and temporary directories
//! - NWM fixtures: filenames, NOMADS directory indexes, configuration
//!   documents and a local mirror builder
//!
//! ```ignore
//! use test_utils::{build_nwm_mirror, filenames, temp_test_dir_with_prefix};
//! ```

pub mod fixtures;
pub mod paths;

pub use fixtures::*;
pub use paths::*;
