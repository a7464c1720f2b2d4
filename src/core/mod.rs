pub mod converter;
pub mod engine;
pub mod geo_writer;

pub use crate::domain::model::{ConversionSummary, ConvertOptions, ElectrodeRecord, ViewStyle};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
