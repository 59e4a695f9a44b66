//! Compiled, immutable rule catalog.

use std::collections::BTreeMap;

use regex::Regex;
use tracing::debug;

use super::builtin;
use super::types::{Category, Rule, RuleDefinition};
use crate::error::{Result, ReviewError};
use crate::language::Language;

/// The rules of one category, in definition order.
#[derive(Debug, Clone)]
pub struct CategoryRules {
    pub category: Category,
    pub rules: Vec<Rule>,
}

/// Immutable lookup from language to its categorized rules.
///
/// Build once per run and pass it to the reviewer; it is `Send + Sync` and can
/// be shared read-only between concurrent reviews.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    entries: BTreeMap<Language, Vec<CategoryRules>>,
}

impl RuleCatalog {
    /// A catalog with no rules at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile the built-in rule table.
    ///
    /// # Example
    ///
    /// ```
    /// use hunkcheck::language::Language;
    /// use hunkcheck::rules::RuleCatalog;
    ///
    /// let catalog = RuleCatalog::builtin().unwrap();
    /// assert_eq!(catalog.rules_for(Language::Rust).len(), 3);
    /// assert!(catalog.rules_for(Language::Python).is_empty());
    /// ```
    pub fn builtin() -> Result<Self> {
        let definitions: Vec<RuleDefinition> = Language::ALL
            .iter()
            .flat_map(|&lang| builtin::definitions_for(lang).iter().copied())
            .collect();

        Self::from_definitions(&definitions)
    }

    /// Compile a catalog from rule definitions.
    ///
    /// Categories keep the order in which they first appear for each language,
    /// rules keep their definition order within a category.
    ///
    /// # Returns
    ///
    /// * `Ok(RuleCatalog)` - All patterns compiled
    /// * `Err(ReviewError::Catalog)` - A pattern is not a valid regex
    pub fn from_definitions(definitions: &[RuleDefinition]) -> Result<Self> {
        let mut entries: BTreeMap<Language, Vec<CategoryRules>> = BTreeMap::new();

        for definition in definitions {
            let regex = Regex::new(definition.pattern).map_err(|e| {
                ReviewError::Catalog(format!(
                    "{} {} pattern '{}' - {}",
                    definition.language, definition.category, definition.pattern, e
                ))
            })?;

            let categories = entries.entry(definition.language).or_default();
            let idx = match categories
                .iter()
                .position(|c| c.category == definition.category)
            {
                Some(idx) => idx,
                None => {
                    categories.push(CategoryRules {
                        category: definition.category,
                        rules: Vec::new(),
                    });
                    categories.len() - 1
                }
            };
            categories[idx].rules.push(Rule::new(definition, regex));
        }

        let catalog = Self { entries };
        debug!(rules = catalog.rule_count(), "compiled rule catalog");
        Ok(catalog)
    }

    /// Categorized rules for `language`; empty when it has no entry.
    pub fn rules_for(&self, language: Language) -> &[CategoryRules] {
        self.entries
            .get(&language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of rules across all languages.
    pub fn rule_count(&self) -> usize {
        self.entries
            .values()
            .flatten()
            .map(|c| c.rules.len())
            .sum()
    }

    /// Languages that have at least one rule.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.entries.keys().copied()
    }
}
