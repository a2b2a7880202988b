//! Configuration for converting National Water Model output to GeoPackage.
//!
//! A conversion is described by a single JSON document naming the geometry
//! dataset that gives NWM features their shape, the NWM data to read and
//! where to write the result. Every object here is built once at startup
//! and treated as read-only afterwards.

pub mod conversion;
pub mod data;
pub mod error;
pub mod geometry;
pub mod model;

pub use conversion::ConversionConfiguration;
pub use data::{DataConfiguration, DataConstraintConfiguration};
pub use error::{ConfigError, ConfigResult};
pub use geometry::GeometryConfiguration;
pub use model::{GeometryFormat, ModelConfiguration, NwmModel};
