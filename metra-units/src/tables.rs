//! Unit definitions - coefficient tables for every category
//!
//! Linear tables map a unit name to the quantity of the category's base unit
//! in one of that unit. Entry order is the order units are offered in.

use std::f64::consts::PI;

// ============ Length (base: Meter) ============

pub const LENGTH: &[(&str, f64)] = &[
    ("Meter", 1.0),
    ("Kilometer", 1000.0),
    ("Centimeter", 0.01),
    ("Millimeter", 0.001),
    ("Mile", 1609.34),
    ("Yard", 0.9144),
    ("Foot", 0.3048),
    ("Inch", 0.0254),
    ("Nautical Mile", 1852.0),
];

// ============ Weight/Mass (base: Gram) ============

pub const MASS: &[(&str, f64)] = &[
    ("Kilogram", 1000.0),
    ("Gram", 1.0),
    ("Milligram", 0.001),
    ("Pound", 453.592),
    ("Ounce", 28.3495),
    ("Ton (Metric)", 1_000_000.0),
    ("Ton (US)", 907_185.0),
    ("Stone", 6350.29),
];

// ============ Area (base: Square Meter) ============

pub const AREA: &[(&str, f64)] = &[
    ("Square Meter", 1.0),
    ("Square Kilometer", 1_000_000.0),
    ("Square Mile", 2_590_000.0),
    ("Hectare", 10_000.0),
    ("Acre", 4046.86),
    ("Square Foot", 0.092903),
    ("Square Inch", 0.00064516),
    ("Square Yard", 0.836127),
];

// ============ Volume (base: Milliliter) ============

pub const VOLUME: &[(&str, f64)] = &[
    ("Cubic Meter", 1_000_000.0),
    ("Liter", 1000.0),
    ("Milliliter", 1.0),
    ("Gallon (US)", 3785.41),
    ("Gallon (UK)", 4546.09),
    ("Quart (US)", 946.353),
    ("Pint (US)", 473.176),
    ("Cup", 236.588),
    ("Fluid Ounce (US)", 29.5735),
    ("Tablespoon", 14.7868),
    ("Teaspoon", 4.92892),
    ("Cubic Inch", 16.3871),
    ("Cubic Foot", 28316.8),
];

// ============ Time (base: Second) ============

pub const TIME: &[(&str, f64)] = &[
    ("Second", 1.0),
    ("Minute", 60.0),
    ("Hour", 3600.0),
    ("Day", 86_400.0),
    ("Week", 604_800.0),
    ("Month (30 days)", 2_592_000.0),
    ("Year (365 days)", 31_536_000.0),
    ("Millisecond", 0.001),
    ("Microsecond", 0.000001),
    ("Nanosecond", 0.000000001),
];

// ============ Speed (base: Meter/Second) ============

pub const SPEED: &[(&str, f64)] = &[
    ("Meter/Second", 1.0),
    ("Kilometer/Hour", 0.277778),
    ("Mile/Hour", 0.44704),
    ("Foot/Second", 0.3048),
    ("Knot", 0.514444),
    ("Mach (at sea level)", 340.29),
];

// ============ Pressure (base: Pascal) ============

pub const PRESSURE: &[(&str, f64)] = &[
    ("Pascal", 1.0),
    ("Kilopascal", 1000.0),
    ("Bar", 100_000.0),
    ("PSI", 6894.76),
    ("Atmosphere", 101_325.0),
    ("Torr", 133.322),
    ("Millimeter of Mercury", 133.322),
];

// ============ Energy (base: Joule) ============

pub const ENERGY: &[(&str, f64)] = &[
    ("Joule", 1.0),
    ("Kilojoule", 1000.0),
    ("Calorie", 4.184),
    ("Kilocalorie", 4184.0),
    ("Watt-hour", 3600.0),
    ("Kilowatt-hour", 3_600_000.0),
    ("Electronvolt", 1.602176634e-19),
    ("British Thermal Unit", 1055.06),
    ("Foot-pound", 1.35582),
];

// ============ Power (base: Watt) ============

pub const POWER: &[(&str, f64)] = &[
    ("Watt", 1.0),
    ("Kilowatt", 1000.0),
    ("Megawatt", 1_000_000.0),
    ("Horsepower", 745.7),
    ("Foot-pound/minute", 0.0225969),
    ("BTU/hour", 0.29307107),
];

// ============ Data (base: Byte) ============

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;
const TIB: f64 = GIB * 1024.0;
const PIB: f64 = TIB * 1024.0;

// Decimal-named units deliberately share the 1024-based multiples
pub const DATA: &[(&str, f64)] = &[
    ("Bit", 0.125),
    ("Byte", 1.0),
    ("Kilobyte (KB)", KIB),
    ("Megabyte (MB)", MIB),
    ("Gigabyte (GB)", GIB),
    ("Terabyte (TB)", TIB),
    ("Petabyte (PB)", PIB),
    ("Kibibyte (KiB)", KIB),
    ("Mebibyte (MiB)", MIB),
    ("Gibibyte (GiB)", GIB),
    ("Tebibyte (TiB)", TIB),
    ("Pebibyte (PiB)", PIB),
];

// ============ Angle (base: Radian) ============

pub const ANGLE: &[(&str, f64)] = &[
    ("Degree", PI / 180.0),
    ("Radian", 1.0),
    ("Gradian", PI / 200.0),
    ("Minute of Arc", PI / (180.0 * 60.0)),
    ("Second of Arc", PI / (180.0 * 3600.0)),
    ("Turn/Revolution", 2.0 * PI),
];

// ============ Fuel Economy (pivot: Kilometers per Liter) ============

/// Kilometers per liter in one US mile per gallon
pub const KPL_PER_MPG_US: f64 = 0.425144;

/// Kilometers per liter in one UK (imperial) mile per gallon
pub const KPL_PER_MPG_UK: f64 = 0.354006;

/// Distance of the inverse unit, liters per 100 km
pub const L_PER_100KM_DISTANCE: f64 = 100.0;

// ============ Currency (reference: USD) ============

/// Units of each currency bought by one US dollar. Static snapshot, not live.
pub const USD_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("JPY", 149.5),
    ("CAD", 1.35),
    ("AUD", 1.52),
    ("INR", 83.1),
    ("CNY", 7.2),
    ("PKR", 278.5),
    ("SAR", 3.75),
    ("AED", 3.67),
];
