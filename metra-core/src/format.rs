//! Number rendering for formula text
//!
//! Results and coefficients are shown with a fixed number of significant
//! digits (`%g` style); echoed inputs keep their shortest exact form, always
//! with a fractional part or an exponent so they read as floats.

/// Significant digits used for results and coefficients in formula text
pub const FORMULA_SIGFIGS: usize = 6;

/// Render `value` with `sigfigs` significant digits.
///
/// Fixed notation is used when the decimal exponent lies in
/// `[-4, sigfigs)`, scientific notation (`1.07374e+09`) otherwise.
/// Trailing zeros are stripped in both forms.
pub fn format_sigfigs(value: f64, sigfigs: usize) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let sigfigs = sigfigs.max(1);

    // Round in scientific form first so carries (9999999 -> 1e7) move the exponent
    let scientific = format!("{:.*e}", sigfigs - 1, value);
    let (mantissa, exp) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exp < -4 || exp >= sigfigs as i32 {
        with_exponent(trim_fraction(mantissa), exp)
    } else {
        let decimals = (sigfigs as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Render `value` in its shortest form that parses back to the same f64.
///
/// Integral values keep a `.0` (`1.0`, `-40.0`). Values outside
/// `[1e-4, 1e16)` switch to exponent form with the same exponent layout as
/// [`format_sigfigs`] (`1e-05`, `1.5e+20`).
pub fn format_plain(value: f64) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }
    let magnitude = value.abs();
    if value == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let fixed = format!("{}", value);
        if fixed.contains('.') {
            fixed
        } else {
            format!("{}.0", fixed)
        }
    } else {
        let scientific = format!("{:e}", value);
        match scientific.split_once('e') {
            Some((mantissa, exp)) => with_exponent(mantissa, exp.parse::<i32>().unwrap_or(0)),
            None => scientific,
        }
    }
}

/// Signed exponent with at least two digits: `e+09`, `e-05`, `e+300`
fn with_exponent(mantissa: &str, exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exp.abs())
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value == f64::INFINITY {
        Some("inf")
    } else if value == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}

/// Strip trailing fractional zeros and a dangling decimal point
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(value: f64) -> String {
        format_sigfigs(value, FORMULA_SIGFIGS)
    }

    #[test]
    fn test_integers_drop_fraction() {
        assert_eq!(sig(1000.0), "1000");
        assert_eq!(sig(212.0), "212");
        assert_eq!(sig(32.0), "32");
        assert_eq!(sig(1.0), "1");
    }

    #[test]
    fn test_fraction_rounds_to_six_digits() {
        assert_eq!(sig(0.277778), "0.277778");
        assert_eq!(sig(0.0225969), "0.0225969");
        assert_eq!(sig(0.29307107), "0.293071");
        assert_eq!(sig(3.14159265), "3.14159");
        assert_eq!(sig(-32.5), "-32.5");
    }

    #[test]
    fn test_scientific_outside_fixed_range() {
        assert_eq!(sig(1073741824.0), "1.07374e+09");
        assert_eq!(sig(1.602176634e-19), "1.60218e-19");
        assert_eq!(sig(0.00001), "1e-05");
        assert_eq!(sig(1_000_000.0), "1e+06");
    }

    #[test]
    fn test_rounding_carry_moves_exponent() {
        assert_eq!(sig(9_999_999.0), "1e+07");
        assert_eq!(sig(0.0001), "0.0001");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(sig(f64::INFINITY), "inf");
        assert_eq!(sig(f64::NEG_INFINITY), "-inf");
        assert_eq!(sig(f64::NAN), "nan");
        assert_eq!(sig(0.0), "0");
    }

    #[test]
    fn test_plain_keeps_shortest_form() {
        assert_eq!(format_plain(0.5), "0.5");
        assert_eq!(format_plain(149.5), "149.5");
        assert_eq!(format_plain(123456.789), "123456.789");
        assert_eq!(format_plain(0.0001), "0.0001");
        assert_eq!(format_plain(f64::INFINITY), "inf");
    }

    #[test]
    fn test_plain_integral_values_keep_fraction() {
        assert_eq!(format_plain(1.0), "1.0");
        assert_eq!(format_plain(-40.0), "-40.0");
        assert_eq!(format_plain(0.0), "0.0");
        assert_eq!(format_plain(-0.0), "-0.0");
        assert_eq!(format_plain(1e15), "1000000000000000.0");
    }

    #[test]
    fn test_plain_exponent_matches_sigfigs_layout() {
        assert_eq!(format_plain(1e-5), "1e-05");
        assert_eq!(format_plain(1e-7), "1e-07");
        assert_eq!(format_plain(1e16), "1e+16");
        assert_eq!(format_plain(1.5e20), "1.5e+20");
        assert_eq!(format_plain(-2.5e-9), "-2.5e-09");
        assert_eq!(format_plain(1e300), "1e+300");
        assert_eq!(format_plain(1e-5), sig(1e-5));
        assert_eq!(format_plain(1e20), sig(1e20));
    }
}
