//! Currency conversion through a reference currency
//!
//! Rates are embedded constants, not fetched.

use std::collections::HashMap;
use metra_core::{Conversion, ConversionError, Family, Formula};
use metra_plugin::{CategoryMeta, Converter};

/// Currencies priced against one reference currency.
///
/// `rate[code]` is how many units of `code` one reference unit buys, so
/// `result = value / rate[from] * rate[to]`.
pub struct RateTable {
    name: &'static str,
    reference: &'static str,
    units: Vec<&'static str>,
    rates: HashMap<&'static str, f64>,
}

impl RateTable {
    pub fn new(name: &'static str, reference: &'static str, rates: &[(&'static str, f64)]) -> Self {
        RateTable {
            name,
            reference,
            units: rates.iter().map(|(code, _)| *code).collect(),
            rates: rates.iter().copied().collect(),
        }
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    fn lookup(&self, code: &str) -> Result<f64, ConversionError> {
        self.rate(code)
            .ok_or_else(|| ConversionError::unknown_unit(self.name, code))
    }
}

impl Converter for RateTable {
    fn meta(&self) -> CategoryMeta {
        CategoryMeta {
            name: self.name,
            family: Family::RateTable,
            base_unit: Some(self.reference),
        }
    }

    fn units(&self) -> &[&'static str] {
        &self.units
    }

    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> Result<Conversion, ConversionError> {
        let from_rate = self.lookup(from_unit)?;
        let to_rate = self.lookup(to_unit)?;

        if from_unit == to_unit {
            return Ok(Conversion::identity(value, from_unit, false));
        }

        let reference_amount = value / from_rate;
        let result = reference_amount * to_rate;

        Ok(Conversion::new(result, Formula::RateTable {
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result,
            from_rate,
            to_rate,
            reference: self.reference,
        }))
    }
}
