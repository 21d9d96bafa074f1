//! Linear-factor conversion through a fixed base unit

use std::collections::HashMap;
use metra_core::{Basis, Conversion, ConversionError, Family, Formula};
use metra_plugin::{CategoryMeta, Converter};
use tracing::trace;

/// Category whose units differ only by a scale factor.
///
/// `result = value * coeff[from] / coeff[to]`
pub struct LinearTable {
    name: &'static str,
    base_unit: &'static str,
    units: Vec<&'static str>,
    coefficients: HashMap<&'static str, f64>,
    through: Option<&'static str>,
}

impl LinearTable {
    pub fn new(name: &'static str, base_unit: &'static str, entries: &[(&'static str, f64)]) -> Self {
        LinearTable {
            name,
            base_unit,
            units: entries.iter().map(|(unit, _)| *unit).collect(),
            coefficients: entries.iter().copied().collect(),
            through: None,
        }
    }

    /// Describe the pivot in formula text instead of listing coefficients
    pub fn through(mut self, pivot: &'static str) -> Self {
        self.through = Some(pivot);
        self
    }

    /// Base-unit quantity in one `unit`
    pub fn coefficient(&self, unit: &str) -> Option<f64> {
        self.coefficients.get(unit).copied()
    }

    fn lookup(&self, unit: &str) -> Result<f64, ConversionError> {
        self.coefficient(unit)
            .ok_or_else(|| ConversionError::unknown_unit(self.name, unit))
    }
}

impl Converter for LinearTable {
    fn meta(&self) -> CategoryMeta {
        CategoryMeta {
            name: self.name,
            family: Family::Linear,
            base_unit: Some(self.base_unit),
        }
    }

    fn units(&self) -> &[&'static str] {
        &self.units
    }

    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> Result<Conversion, ConversionError> {
        let from = self.lookup(from_unit)?;
        let to = self.lookup(to_unit)?;

        if from_unit == to_unit {
            return Ok(Conversion::identity(value, from_unit, false));
        }

        let base = value * from;
        let result = base / to;
        trace!(category = self.name, base, "normalized through {}", self.base_unit);

        let basis = match self.through {
            Some(pivot) => Basis::Through(pivot),
            None => Basis::Coefficients { from, to },
        };

        Ok(Conversion::new(result, Formula::Linear {
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result,
            basis,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables;

    fn length() -> LinearTable {
        LinearTable::new("Length", "Meter", tables::LENGTH)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_kilometer_to_meter() {
        let conversion = length().convert(1.0, "Kilometer", "Meter").unwrap();
        assert_eq!(conversion.value, 1000.0);
        assert_eq!(
            conversion.formula_text(),
            "1.0 Kilometer = 1000 Meter (Conversion: 1.0 × 1000 ÷ 1)"
        );
    }

    #[test]
    fn test_mile_to_kilometer() {
        let conversion = length().convert(10.0, "Mile", "Kilometer").unwrap();
        assert!(close(conversion.value, 16.0934));
        assert_eq!(
            conversion.formula_text(),
            "10.0 Mile = 16.0934 Kilometer (Conversion: 10.0 × 1609.34 ÷ 1000)"
        );
    }

    #[test]
    fn test_negative_and_zero_pass_through() {
        let table = length();
        assert_eq!(table.convert(0.0, "Foot", "Inch").unwrap().value, 0.0);
        assert!(close(table.convert(-1.0, "Foot", "Inch").unwrap().value, -12.0));
    }

    #[test]
    fn test_same_unit_is_exact_identity() {
        let conversion = length().convert(0.1, "Foot", "Foot").unwrap();
        assert_eq!(conversion.value, 0.1);
        assert!(conversion.formula.is_identity());
        assert_eq!(conversion.formula_text(), "0.1 Foot = 0.1 Foot");
    }

    #[test]
    fn test_unknown_units() {
        let table = length();
        assert_eq!(
            table.convert(1.0, "Meter", "Parsec").unwrap_err(),
            ConversionError::unknown_unit("Length", "Parsec")
        );
        assert_eq!(
            table.convert(1.0, "Parsec", "Meter").unwrap_err(),
            ConversionError::unknown_unit("Length", "Parsec")
        );
        assert!(table.convert(1.0, "Parsec", "Parsec").is_err());
    }

    #[test]
    fn test_through_pivot_hides_coefficients() {
        let angle = LinearTable::new("Angle", "Radian", tables::ANGLE).through("radians");
        let conversion = angle.convert(90.0, "Degree", "Radian").unwrap();
        assert!(close(conversion.value, std::f64::consts::FRAC_PI_2));
        assert_eq!(
            conversion.formula_text(),
            "90.0 Degree = 1.5708 Radian (Conversion through radians)"
        );
    }

    #[test]
    fn test_nan_propagates() {
        assert!(length().convert(f64::NAN, "Meter", "Foot").unwrap().value.is_nan());
    }

    #[test]
    fn test_units_keep_table_order() {
        let table = length();
        assert_eq!(table.units()[0], "Meter");
        assert_eq!(table.units()[1], "Kilometer");
        assert_eq!(table.units().len(), tables::LENGTH.len());
        assert_eq!(table.coefficient("Nautical Mile"), Some(1852.0));
    }
}
