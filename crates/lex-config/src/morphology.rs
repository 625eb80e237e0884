//! Morphological rule configuration.

use lex_core::Category;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_rules_enabled() -> bool {
    true
}

/// One suffix substitution, e.g. `{ category = "noun", suffix = "ves", replacement = "f" }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleConfig {
    /// Category name or WordNet code (`noun`, `v`, `adj`, ...).
    pub category: String,
    pub suffix: String,
    #[serde(default)]
    pub replacement: String,
}

impl RuleConfig {
    /// Parse the rule's category.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn parsed_category(&self) -> Result<Category, ConfigError> {
        self.category
            .parse()
            .map_err(|e: lex_core::CoreError| ConfigError::InvalidValue {
                field: "morphology.rules.category".to_string(),
                reason: e.to_string(),
            })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MorphologyConfig {
    /// Start from the built-in English rule set.
    #[serde(default = "default_rules_enabled")]
    pub default_rules: bool,

    /// Extra rules, tried after the defaults in the order given.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl Default for MorphologyConfig {
    fn default() -> Self {
        Self {
            default_rules: default_rules_enabled(),
            rules: Vec::new(),
        }
    }
}

impl MorphologyConfig {
    /// Extra rules as `(category, suffix, replacement)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first rule with an
    /// unrecognized category or an empty suffix.
    pub fn parsed_rules(&self) -> Result<Vec<(Category, &str, &str)>, ConfigError> {
        self.rules
            .iter()
            .map(|rule| {
                if rule.suffix.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: "morphology.rules.suffix".to_string(),
                        reason: "suffix must not be empty".to_string(),
                    });
                }
                Ok((
                    rule.parsed_category()?,
                    rule.suffix.as_str(),
                    rule.replacement.as_str(),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(category: &str, suffix: &str, replacement: &str) -> RuleConfig {
        RuleConfig {
            category: category.to_string(),
            suffix: suffix.to_string(),
            replacement: replacement.to_string(),
        }
    }

    #[test]
    fn defaults_enable_builtin_rules() {
        let config = MorphologyConfig::default();
        assert!(config.default_rules);
        assert!(config.rules.is_empty());
        assert!(config.parsed_rules().unwrap().is_empty());
    }

    #[test]
    fn parses_codes_and_names() {
        let config = MorphologyConfig {
            default_rules: false,
            rules: vec![rule("n", "ves", "f"), rule("adverb", "lier", "ly")],
        };
        assert_eq!(
            config.parsed_rules().unwrap(),
            vec![
                (Category::Noun, "ves", "f"),
                (Category::Adverb, "lier", "ly")
            ]
        );
    }

    #[test]
    fn rejects_unknown_category() {
        let config = MorphologyConfig {
            rules: vec![rule("noun", "s", ""), rule("pronoun", "s", "")],
            ..MorphologyConfig::default()
        };
        let err = config.parsed_rules().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "morphology.rules.category"
        ));
        assert!(err.to_string().contains("pronoun"));
    }

    #[test]
    fn rejects_empty_suffix() {
        let config = MorphologyConfig {
            rules: vec![rule("verb", "", "x")],
            ..MorphologyConfig::default()
        };
        assert!(matches!(
            config.parsed_rules(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "morphology.rules.suffix"
        ));
    }
}
