//! Converter trait

use metra_core::{Conversion, ConversionError, Family};
use serde::Serialize;

/// Metadata for a category converter
#[derive(Debug, Clone, Serialize)]
pub struct CategoryMeta {
    pub name: &'static str,
    pub family: Family,
    /// Unit every conversion normalizes through; `None` when each unit pair
    /// has its own formula
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_unit: Option<&'static str>,
}

/// One measurement category: its ordered units and how to convert between them
pub trait Converter: Send + Sync {
    fn meta(&self) -> CategoryMeta;

    /// Unit names in display order. The first two are the default from/to pair.
    fn units(&self) -> &[&'static str];

    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> Result<Conversion, ConversionError>;

    fn has_unit(&self, unit: &str) -> bool {
        self.units().iter().any(|u| *u == unit)
    }
}
