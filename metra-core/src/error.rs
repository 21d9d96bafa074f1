//! Conversion errors
//!
//! `ConversionError` is what the engine returns. `MetraError` is the
//! structured, serializable form handed to machine consumers: a stable code,
//! a message, and a suggestion for fixing the request.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INVALID_PARAMS: &str = "INVALID_PARAMS";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Errors raised while resolving or performing a conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Category name not in the registry
    #[error("unknown category: {name}")]
    UnknownCategory {
        name: String,
        /// Registered categories with similar names, best match first
        similar: Vec<String>,
    },

    /// Unit name not valid for the category
    #[error("unknown unit '{unit}' for category {category}")]
    UnknownUnit { category: String, unit: String },
}

impl ConversionError {
    pub fn unknown_category(name: impl Into<String>) -> Self {
        ConversionError::UnknownCategory { name: name.into(), similar: Vec::new() }
    }

    pub fn unknown_unit(category: impl Into<String>, unit: impl Into<String>) -> Self {
        ConversionError::UnknownUnit { category: category.into(), unit: unit.into() }
    }

    /// Attach similar category names (no-op for unit errors)
    pub fn with_similar(self, names: Vec<String>) -> Self {
        match self {
            ConversionError::UnknownCategory { name, .. } => {
                ConversionError::UnknownCategory { name, similar: names }
            }
            other => other,
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::UnknownCategory { .. } => codes::UNKNOWN_CATEGORY,
            ConversionError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
        }
    }
}

/// Where an error occurred
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Structured error for programmatic consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetraError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl MetraError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set category context
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.category = Some(category.into());
        self
    }

    /// Builder: set unit context
    pub fn for_unit(mut self, unit: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.unit = Some(unit.into());
        self
    }

    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_PARAMS, format!("Invalid parameters: {}", details.into()))
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
    }
}

impl std::fmt::Display for MetraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for MetraError {}

impl From<ConversionError> for MetraError {
    fn from(err: ConversionError) -> Self {
        let code = err.code();
        let message = format!("{}", err);
        match err {
            ConversionError::UnknownCategory { name, similar } => {
                let suggestion = if similar.is_empty() {
                    "Use list_categories() for the full list".to_string()
                } else {
                    format!(
                        "Similar: {}. Use list_categories() for the full list.",
                        similar.join(", ")
                    )
                };
                Self::new(code, message).with_suggestion(suggestion).in_category(name)
            }
            ConversionError::UnknownUnit { category, unit } => Self::new(code, message)
                .with_suggestion(format!("Use list_units('{}') for valid units", category))
                .in_category(category)
                .for_unit(unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConversionError::unknown_unit("Length", "Parsec");
        assert_eq!(err.to_string(), "unknown unit 'Parsec' for category Length");

        let err = ConversionError::unknown_category("Lenght");
        assert_eq!(err.to_string(), "unknown category: Lenght");
    }

    #[test]
    fn test_with_similar_only_touches_categories() {
        let err = ConversionError::unknown_category("Lenght").with_similar(vec!["Length".into()]);
        assert_eq!(err, ConversionError::UnknownCategory {
            name: "Lenght".into(),
            similar: vec!["Length".into()],
        });

        let unit = ConversionError::unknown_unit("Length", "Parsec");
        assert_eq!(unit.clone().with_similar(vec!["x".into()]), unit);
    }

    #[test]
    fn test_structured_unknown_unit() {
        let err: MetraError = ConversionError::unknown_unit("Length", "Parsec").into();
        assert_eq!(err.code, codes::UNKNOWN_UNIT);
        assert_eq!(err.suggestion.as_deref(), Some("Use list_units('Length') for valid units"));
        let ctx = err.context.expect("context");
        assert_eq!(ctx.category.as_deref(), Some("Length"));
        assert_eq!(ctx.unit.as_deref(), Some("Parsec"));
    }

    #[test]
    fn test_structured_unknown_category_lists_similar() {
        let err: MetraError = ConversionError::unknown_category("Tempature")
            .with_similar(vec!["Temperature".into()])
            .into();
        assert_eq!(err.code, codes::UNKNOWN_CATEGORY);
        assert!(err.suggestion.unwrap().starts_with("Similar: Temperature."));
    }

    #[test]
    fn test_internal_error() {
        let err = MetraError::internal("catalog");
        assert_eq!(err.code, codes::INTERNAL);
        assert_eq!(err.to_string(), "[INTERNAL] Internal error: catalog (suggestion: This is a bug, please report it)");
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let err = MetraError::invalid_params("missing value");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_PARAMS");
        assert!(json.get("suggestion").is_none());
        assert!(json.get("context").is_none());
    }
}
