//! Configuration file support
//!
//! Lets a host override the grammar rule names and attribute ids
//! from TOML. Anything not mentioned keeps its default.
//!
//! Example:
//! ```toml
//! [grammar]
//! string = "RULE_STRING"
//! comments = ["RULE_ML_COMMENT", "RULE_SL_COMMENT"]
//! keyword = "KEYWORD"
//!
//! [attributes]
//! AtKeyword = "less.at_keyword"
//! Comment = "less.comment"
//! ```

use std::fs;
use std::path::Path;

use toml::{Table, Value};

use crate::error::{ConfigurationError, Result};
use crate::grammar::GrammarRules;
use crate::highlighting::HighlightingConfiguration;
use crate::resolver::AttributeId;
use crate::token::Category;

/// Configuration settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Rule names of the external grammar
    pub grammar: GrammarRules,
    /// Display attributes
    pub highlighting: HighlightingConfiguration,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table)?;
        config.grammar.validate()?;
        config.highlighting.validate()?;
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) -> Result<()> {
        if let Some(key) = table.keys().find(|k| !matches!(k.as_str(), "grammar" | "attributes")) {
            return Err(invalid(key, "unknown section"));
        }
        if let Some(grammar) = table.get("grammar") {
            self.apply_grammar(as_table("grammar", grammar)?)?;
        }
        if let Some(attributes) = table.get("attributes") {
            self.apply_attributes(as_table("attributes", attributes)?)?;
        }
        Ok(())
    }

    fn apply_grammar(&mut self, grammar: &Table) -> Result<()> {
        if let Some(key) = grammar
            .keys()
            .find(|k| !matches!(k.as_str(), "string" | "comments" | "keyword"))
        {
            return Err(invalid(&format!("grammar.{}", key), "unknown key"));
        }

        if let Some(value) = grammar.get("string") {
            self.grammar.string_rule = as_str("grammar.string", value)?.to_string();
        }

        if let Some(value) = grammar.get("comments") {
            let rules = value
                .as_array()
                .ok_or_else(|| invalid("grammar.comments", "expected an array of strings"))?;
            self.grammar.comment_rules = rules
                .iter()
                .map(|rule| as_str("grammar.comments", rule).map(str::to_string))
                .collect::<Result<_>>()?;
        }

        if let Some(value) = grammar.get("keyword") {
            self.grammar.keyword_rule = as_str("grammar.keyword", value)?.to_string();
        }

        Ok(())
    }

    fn apply_attributes(&mut self, attributes: &Table) -> Result<()> {
        for (name, value) in attributes {
            let category = Category::from_name(name)
                .ok_or_else(|| ConfigurationError::UnknownCategory(name.clone()))?;
            let id = as_str(&format!("attributes.{}", name), value)?;
            if id.is_empty() {
                return Err(invalid(&format!("attributes.{}", name), "attribute id is empty"));
            }
            self.highlighting.attribute_mut(category).id = AttributeId::new(id);
        }
        Ok(())
    }
}

fn invalid(key: &str, reason: &str) -> ConfigurationError {
    ConfigurationError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn as_table<'a>(key: &str, value: &'a Value) -> Result<&'a Table> {
    value.as_table().ok_or_else(|| invalid(key, "expected a table"))
}

fn as_str<'a>(key: &str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| invalid(key, "expected a string"))
}
