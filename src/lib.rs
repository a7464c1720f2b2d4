pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::core::converter::{convert, convert_reader, convert_with};
pub use crate::core::{engine::ConvertEngine, geo_writer::GeoWriter};
pub use crate::domain::model::{ConversionSummary, ConvertOptions, ElectrodeRecord, ViewStyle};
pub use crate::utils::error::{GeoError, Result};
