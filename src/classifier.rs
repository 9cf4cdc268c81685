//! Token classification
//!
//! Maps a token from the external lexer to its semantic category.
//! Classification is total: anything unrecognized is `Default`.

use std::collections::HashMap;

use crate::error::Result;
use crate::grammar::GrammarRules;
use crate::token::{Category, Token};

/// At-rule keywords, matched by exact text
pub const AT_KEYWORDS: [&str; 5] = ["@import", "@media", "@page", "@font-face", "@charset"];

/// Media query keywords, matched by exact text
pub const MEDIA_QUERY_KEYWORDS: [&str; 2] = ["and", "only"];

/// Classifies tokens into categories
#[derive(Debug, Clone)]
pub struct TokenClassifier {
    rules: GrammarRules,
    /// Keyword text -> category
    keywords: HashMap<&'static str, Category>,
}

impl TokenClassifier {
    /// Create a classifier for the given grammar rules
    pub fn new(rules: GrammarRules) -> Result<Self> {
        rules.validate()?;

        let mut keywords = HashMap::new();
        for keyword in AT_KEYWORDS {
            keywords.insert(keyword, Category::AtKeyword);
        }
        for keyword in MEDIA_QUERY_KEYWORDS {
            keywords.insert(keyword, Category::MediaQueryKeyword);
        }

        Ok(Self { rules, keywords })
    }

    /// Grammar rules this classifier was built with
    pub fn rules(&self) -> &GrammarRules {
        &self.rules
    }

    /// Determine the category of a token
    ///
    /// Keyword literals are checked before terminal rules.
    pub fn classify(&self, token: &Token) -> Category {
        if self.rules.is_keyword_rule(&token.rule_name) {
            if let Some(&category) = self.keywords.get(token.text.as_str()) {
                return category;
            }
        }

        if self.rules.is_string_rule(&token.rule_name) {
            Category::String
        } else if self.rules.is_comment_rule(&token.rule_name) {
            Category::Comment
        } else {
            Category::Default
        }
    }

    /// Return the token with its category filled in
    pub fn annotate(&self, token: Token) -> Token {
        let category = self.classify(&token);
        token.with_category(category)
    }
}
