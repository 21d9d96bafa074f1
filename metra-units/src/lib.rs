//! Metra Units - Category Unit Conversion
//!
//! Converts a value between two units of one category and explains the
//! arithmetic. Each category is a closed table; there is no conversion across
//! categories.
//!
//! Categories (in display order):
//! - Length, Weight/Mass, Area, Volume, Time, Speed, Pressure, Energy,
//!   Power, Data, Angle (linear, through a base unit)
//! - Temperature (affine, per-pair formulas)
//! - Fuel Economy (reciprocal, through km/L)
//! - Currency (static rate table, through USD)

mod tables;
mod linear;
mod temperature;
mod fuel;
mod currency;

pub use linear::LinearTable;
pub use temperature::{Scale, Temperature};
pub use fuel::FuelEconomy;
pub use currency::RateTable;

use std::sync::LazyLock;
use metra_core::{Conversion, ConversionError, ConversionRequest};
use metra_plugin::CategoryRegistry;

/// Process-wide standard registry, built on first use and never mutated
pub static REGISTRY: LazyLock<CategoryRegistry> = LazyLock::new(standard_registry);

/// Load the standard categories into registry
pub fn load_units_library(registry: CategoryRegistry) -> CategoryRegistry {
    registry
        .with_category(LinearTable::new("Length", "Meter", tables::LENGTH))
        .with_category(LinearTable::new("Weight/Mass", "Gram", tables::MASS))
        .with_category(Temperature)
        .with_category(LinearTable::new("Area", "Square Meter", tables::AREA))
        .with_category(LinearTable::new("Volume", "Milliliter", tables::VOLUME))
        .with_category(LinearTable::new("Time", "Second", tables::TIME))
        .with_category(LinearTable::new("Speed", "Meter/Second", tables::SPEED))
        .with_category(LinearTable::new("Pressure", "Pascal", tables::PRESSURE))
        .with_category(LinearTable::new("Energy", "Joule", tables::ENERGY))
        .with_category(LinearTable::new("Power", "Watt", tables::POWER))
        .with_category(LinearTable::new("Data", "Byte", tables::DATA))
        .with_category(LinearTable::new("Angle", "Radian", tables::ANGLE).through("radians"))
        .with_category(FuelEconomy)
        .with_category(RateTable::new("Currency", "USD", tables::USD_RATES))
}

/// A fresh registry holding the standard categories
pub fn standard_registry() -> CategoryRegistry {
    load_units_library(CategoryRegistry::new())
}

/// Convert `value` from one unit of `category` to another
pub fn convert(category: &str, value: f64, from_unit: &str, to_unit: &str) -> Result<Conversion, ConversionError> {
    REGISTRY.convert(category, value, from_unit, to_unit)
}

pub fn convert_request(request: &ConversionRequest) -> Result<Conversion, ConversionError> {
    REGISTRY.convert_request(request)
}

pub fn list_categories() -> Vec<&'static str> {
    REGISTRY.list_categories()
}

pub fn list_units(category: &str) -> Result<&'static [&'static str], ConversionError> {
    REGISTRY.units_for(category)
}

pub fn default_units(category: &str) -> Result<(&'static str, &'static str), ConversionError> {
    REGISTRY.default_units(category)
}
