//! Grammar rule identifiers
//!
//! The LESS lexer lives outside this crate. `GrammarRules` names the
//! rules of that grammar that highlighting cares about, so a host can
//! plug in whatever rule ids its generated grammar uses.

use crate::error::{ConfigurationError, Result};

/// String literal terminal rule in the generated LESS grammar
pub const STRING_RULE: &str = "RULE_STRING";
/// Block comment terminal rule
pub const ML_COMMENT_RULE: &str = "RULE_ML_COMMENT";
/// Line comment terminal rule
pub const SL_COMMENT_RULE: &str = "RULE_SL_COMMENT";
/// Shared rule name for keyword tokens
pub const KEYWORD_RULE: &str = "KEYWORD";

/// Rule identifiers of an external LESS grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarRules {
    /// Terminal rule for string literals
    pub string_rule: String,
    /// Terminal rules for comments (block and line)
    pub comment_rules: Vec<String>,
    /// Rule shared by all keyword tokens
    pub keyword_rule: String,
}

impl Default for GrammarRules {
    fn default() -> Self {
        Self::less()
    }
}

impl GrammarRules {
    /// Rule names of the generated LESS grammar
    pub fn less() -> Self {
        Self {
            string_rule: STRING_RULE.to_string(),
            comment_rules: vec![ML_COMMENT_RULE.to_string(), SL_COMMENT_RULE.to_string()],
            keyword_rule: KEYWORD_RULE.to_string(),
        }
    }

    /// Check that no rule name is empty
    pub fn validate(&self) -> Result<()> {
        if self.string_rule.is_empty() {
            return Err(ConfigurationError::EmptyRuleName("string"));
        }
        if self.comment_rules.is_empty() || self.comment_rules.iter().any(|r| r.is_empty()) {
            return Err(ConfigurationError::EmptyRuleName("comments"));
        }
        if self.keyword_rule.is_empty() {
            return Err(ConfigurationError::EmptyRuleName("keyword"));
        }
        Ok(())
    }

    pub fn is_string_rule(&self, rule_name: &str) -> bool {
        self.string_rule == rule_name
    }

    pub fn is_comment_rule(&self, rule_name: &str) -> bool {
        self.comment_rules.iter().any(|r| r == rule_name)
    }

    /// Check whether a rule name denotes a keyword token
    ///
    /// Accepts the shared keyword rule as well as ANTLR-style literal
    /// token names such as `'@media'`.
    pub fn is_keyword_rule(&self, rule_name: &str) -> bool {
        self.keyword_rule == rule_name || is_quoted_literal(rule_name)
    }
}

fn is_quoted_literal(name: &str) -> bool {
    name.len() > 2 && name.starts_with('\'') && name.ends_with('\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_less_rules_valid() {
        assert!(GrammarRules::less().validate().is_ok());
        assert_eq!(GrammarRules::default(), GrammarRules::less());
    }

    #[test]
    fn test_rule_predicates() {
        let rules = GrammarRules::less();
        assert!(rules.is_string_rule("RULE_STRING"));
        assert!(!rules.is_string_rule("RULE_ID"));
        assert!(rules.is_comment_rule("RULE_ML_COMMENT"));
        assert!(rules.is_comment_rule("RULE_SL_COMMENT"));
        assert!(!rules.is_comment_rule("RULE_STRING"));
    }

    #[test]
    fn test_keyword_rule_forms() {
        let rules = GrammarRules::less();
        assert!(rules.is_keyword_rule("KEYWORD"));
        assert!(rules.is_keyword_rule("'@media'"));
        assert!(rules.is_keyword_rule("'and'"));
        assert!(!rules.is_keyword_rule("''"));
        assert!(!rules.is_keyword_rule("'"));
        assert!(!rules.is_keyword_rule("RULE_ID"));
    }

    #[test]
    fn test_validate_empty_rules() {
        let mut rules = GrammarRules::less();
        rules.string_rule.clear();
        assert!(matches!(rules.validate(), Err(ConfigurationError::EmptyRuleName("string"))));

        let mut rules = GrammarRules::less();
        rules.comment_rules.clear();
        assert!(matches!(rules.validate(), Err(ConfigurationError::EmptyRuleName("comments"))));

        let mut rules = GrammarRules::less();
        rules.keyword_rule = String::new();
        assert!(matches!(rules.validate(), Err(ConfigurationError::EmptyRuleName("keyword"))));
    }
}
