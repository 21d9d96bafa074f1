//! Metra Core - Fundamental types
//!
//! This crate provides the types shared by every Metra crate:
//! - `Conversion`: a converted value together with its formula
//! - `Formula`: the explanation of the arithmetic, rendered per family
//! - `ConversionError` / `MetraError`: local and structured errors
//! - `format`: significant-digit rendering used in formula text

mod conversion;
mod error;
mod formula;
pub mod format;

pub use conversion::{Conversion, ConversionRequest, Family};
pub use error::{codes, ConversionError, ErrorContext, MetraError};
pub use formula::{Basis, Formula};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Basis, Conversion, ConversionError, ConversionRequest, Family, Formula, MetraError};
    pub use crate::error::codes;
    pub use crate::format::{format_plain, format_sigfigs, FORMULA_SIGFIGS};
}
