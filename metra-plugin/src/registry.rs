//! Category Registry

use crate::{CategoryMeta, Converter};
use metra_core::{Conversion, ConversionError, ConversionRequest, Family};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, trace};

/// Serializable summary of one registered category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub family: Family,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_unit: Option<&'static str>,
    pub units: Vec<&'static str>,
}

/// Ordered map from category name to converter.
///
/// Built once with `with_category` and read-only afterwards, so a shared
/// reference can serve any number of threads.
pub struct CategoryRegistry {
    categories: Vec<Arc<dyn Converter>>,
    // lowercased name -> position in `categories`
    index: HashMap<String, usize>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a category. A category with the same name is replaced in place.
    pub fn with_category<C: Converter + 'static>(mut self, converter: C) -> Self {
        let key = Self::key(converter.meta().name);
        match self.index.get(&key) {
            Some(&slot) => self.categories[slot] = Arc::new(converter),
            None => {
                self.index.insert(key, self.categories.len());
                self.categories.push(Arc::new(converter));
            }
        }
        self
    }

    pub fn get(&self, category: &str) -> Option<&dyn Converter> {
        self.index
            .get(&Self::key(category))
            .map(|&slot| self.categories[slot].as_ref())
    }

    pub fn converter_for(&self, category: &str) -> Result<&dyn Converter, ConversionError> {
        self.get(category).ok_or_else(|| {
            trace!(category, "category lookup failed");
            ConversionError::unknown_category(category).with_similar(self.find_similar(category))
        })
    }

    pub fn units_for(&self, category: &str) -> Result<&[&'static str], ConversionError> {
        Ok(self.converter_for(category)?.units())
    }

    /// Default (from, to) selection: first unit, then the second (or the
    /// first again when the category has a single unit)
    pub fn default_units(&self, category: &str) -> Result<(&'static str, &'static str), ConversionError> {
        let converter = self.converter_for(category)?;
        let units = converter.units();
        let from = *units
            .first()
            .ok_or_else(|| ConversionError::unknown_unit(converter.meta().name, ""))?;
        let to = units.get(1).copied().unwrap_or(from);
        Ok((from, to))
    }

    pub fn convert(
        &self,
        category: &str,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<Conversion, ConversionError> {
        let converter = self.converter_for(category)?;
        let conversion = converter.convert(value, from_unit, to_unit)?;
        debug!(
            category = converter.meta().name,
            from_unit,
            to_unit,
            value,
            result = conversion.value,
            "converted"
        );
        Ok(conversion)
    }

    pub fn convert_request(&self, request: &ConversionRequest) -> Result<Conversion, ConversionError> {
        self.convert(&request.category, request.value, &request.from_unit, &request.to_unit)
    }

    /// Category names in registration order
    pub fn list_categories(&self) -> Vec<&'static str> {
        self.categories.iter().map(|c| c.meta().name).collect()
    }

    pub fn catalog(&self) -> Vec<CategoryInfo> {
        self.categories
            .iter()
            .map(|c| {
                let CategoryMeta { name, family, base_unit } = c.meta();
                CategoryInfo {
                    name,
                    family,
                    base_unit,
                    units: c.units().to_vec(),
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Up to five registered names resembling `name`, best match first
    fn find_similar(&self, name: &str) -> Vec<String> {
        let query = Self::key(name);
        let mut matches: Vec<(&'static str, usize)> = self.categories.iter()
            .filter_map(|c| {
                let candidate = c.meta().name;
                let score = Self::similarity_score(&query, &candidate.to_lowercase());
                if score > 0 {
                    Some((candidate, score))
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1));
        matches.into_iter().take(5).map(|(name, _)| name.to_string()).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        if query.is_empty() {
            return 0;
        }

        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().filter(|c| c.is_alphanumeric()).collect();
        let candidate_chars: HashSet<char> = candidate.chars().filter(|c| c.is_alphanumeric()).collect();
        let common = query_chars.intersection(&candidate_chars).count();

        // A couple of shared letters is noise
        if score == 0 && common * 2 < query_chars.len() {
            return 0;
        }
        score += common * 2;

        let len_diff = (query.len() as i32 - candidate.len() as i32).unsigned_abs() as usize;
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
