//! Metra Plugin System
//!
//! Provides the `Converter` trait every category implements and the
//! `CategoryRegistry` that maps category names to converters.

mod traits;
mod registry;

pub use traits::{CategoryMeta, Converter};
pub use registry::{CategoryInfo, CategoryRegistry};

/// Re-export core types for converter authors
pub mod prelude {
    pub use crate::{CategoryInfo, CategoryMeta, CategoryRegistry, Converter};
    pub use metra_core::prelude::*;
}
