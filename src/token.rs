//! Tokens and semantic categories
//!
//! Tokens are produced by an external LESS lexer. This module only
//! defines their shape and the closed set of categories a token can
//! be classified into.

use std::fmt;
use std::ops::Range;

/// Semantic categories for LESS highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Plain text, and the fallback for anything unrecognized
    Default,
    /// String literals ("..." or '...')
    String,
    /// Block and line comments
    Comment,
    /// At-rule keywords (@import, @media, ...)
    AtKeyword,
    /// Media query keywords (and, only)
    MediaQueryKeyword,
}

impl Category {
    /// Every category, in binding order
    pub const ALL: [Category; 5] = [
        Category::Default,
        Category::String,
        Category::Comment,
        Category::AtKeyword,
        Category::MediaQueryKeyword,
    ];

    /// Get a human-readable name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Default => "Default",
            Category::String => "String",
            Category::Comment => "Comment",
            Category::AtKeyword => "AtKeyword",
            Category::MediaQueryKeyword => "MediaQueryKeyword",
        }
    }

    /// Parse a category from its name (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Default" => Some(Category::Default),
            "String" => Some(Category::String),
            "Comment" => Some(Category::Comment),
            "AtKeyword" => Some(Category::AtKeyword),
            "MediaQueryKeyword" => Some(Category::MediaQueryKeyword),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical token from the external LESS lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Grammar rule that matched (e.g. "RULE_STRING")
    pub rule_name: String,
    /// Matched source text
    pub text: String,
    /// Byte offset of `text` in the source
    pub offset: usize,
    /// Category, set by the classifier
    pub category: Category,
}

impl Token {
    /// Create an unclassified token at offset 0
    pub fn new(rule_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::at(rule_name, text, 0)
    }

    /// Create an unclassified token at a byte offset
    pub fn at(rule_name: impl Into<String>, text: impl Into<String>, offset: usize) -> Self {
        Self {
            rule_name: rule_name.into(),
            text: text.into(),
            offset,
            category: Category::Default,
        }
    }

    /// Builder: set the category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Source range covered by this token
    ///
    /// The end saturates at `usize::MAX`.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset.saturating_add(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(Category::from_name("Keyword"), None);
        assert_eq!(Category::from_name("default"), None);
        assert_eq!(Category::from_name(""), None);
    }

    #[test]
    fn test_new_token_is_default() {
        let token = Token::new("RULE_STRING", "\"a\"");
        assert_eq!(token.category, Category::Default);
        assert_eq!(token.offset, 0);
    }

    #[test]
    fn test_token_range() {
        let token = Token::at("KEYWORD", "@media", 10);
        assert_eq!(token.range(), 10..16);

        let empty = Token::at("RULE_STRING", "", 4);
        assert!(empty.range().is_empty());
    }

    #[test]
    fn test_token_range_near_max_offset() {
        let token = Token::at("RULE_STRING", "ab", usize::MAX - 1);
        assert_eq!(token.range(), usize::MAX - 1..usize::MAX);
    }
}
