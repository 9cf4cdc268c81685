//! Highlighting configuration
//!
//! The five display attributes of LESS highlighting, each with the id
//! the renderer knows it by, a name for preference UIs, and a default
//! style.

use crate::error::{ConfigurationError, Result};
use crate::resolver::AttributeId;
use crate::style::{Color, Style};
use crate::token::Category;

pub const DEFAULT_ID: &str = "default";
pub const STRING_ID: &str = "string";
pub const COMMENT_ID: &str = "comment";
pub const AT_KEYWORD_ID: &str = "at_keyword";
pub const MEDIA_QUERY_KEYWORD_ID: &str = "media_query_keyword";

/// A single display attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightAttribute {
    pub id: AttributeId,
    /// Human-readable name
    pub name: String,
    pub style: Style,
}

impl HighlightAttribute {
    pub fn new(id: &str, name: &str, style: Style) -> Self {
        Self {
            id: AttributeId::new(id),
            name: name.to_string(),
            style,
        }
    }
}

/// Attribute set for LESS highlighting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightingConfiguration {
    pub default: HighlightAttribute,
    pub string: HighlightAttribute,
    pub comment: HighlightAttribute,
    pub at_keyword: HighlightAttribute,
    pub media_query_keyword: HighlightAttribute,
}

impl Default for HighlightingConfiguration {
    fn default() -> Self {
        Self {
            default: HighlightAttribute::new(DEFAULT_ID, "Default", Style::default()),
            string: HighlightAttribute::new(STRING_ID, "String", Style::fg(Color::Green)),
            comment: HighlightAttribute::new(
                COMMENT_ID,
                "Comment",
                Style::fg(Color::BrightBlack).with_italic(),
            ),
            at_keyword: HighlightAttribute::new(
                AT_KEYWORD_ID,
                "At-rule keyword",
                Style::fg(Color::Magenta).with_bold(),
            ),
            media_query_keyword: HighlightAttribute::new(
                MEDIA_QUERY_KEYWORD_ID,
                "Media query keyword",
                Style::fg(Color::Blue).with_bold(),
            ),
        }
    }
}

impl HighlightingConfiguration {
    /// The attribute meant for a category
    pub fn attribute(&self, category: Category) -> &HighlightAttribute {
        match category {
            Category::Default => &self.default,
            Category::String => &self.string,
            Category::Comment => &self.comment,
            Category::AtKeyword => &self.at_keyword,
            Category::MediaQueryKeyword => &self.media_query_keyword,
        }
    }

    pub fn attribute_mut(&mut self, category: Category) -> &mut HighlightAttribute {
        match category {
            Category::Default => &mut self.default,
            Category::String => &mut self.string,
            Category::Comment => &mut self.comment,
            Category::AtKeyword => &mut self.at_keyword,
            Category::MediaQueryKeyword => &mut self.media_query_keyword,
        }
    }

    /// All attributes in category order
    pub fn attributes(&self) -> impl Iterator<Item = (Category, &HighlightAttribute)> {
        Category::ALL.into_iter().map(move |c| (c, self.attribute(c)))
    }

    /// Check that no two categories share an attribute id
    pub fn validate(&self) -> Result<()> {
        let attributes: Vec<_> = self.attributes().collect();
        for (i, (first, attr)) in attributes.iter().enumerate() {
            if let Some((second, _)) = attributes[i + 1..].iter().find(|(_, a)| a.id == attr.id) {
                return Err(ConfigurationError::DuplicateAttributeId {
                    id: attr.id.to_string(),
                    first: *first,
                    second: *second,
                });
            }
        }
        Ok(())
    }

    /// Style for an attribute id
    pub fn style(&self, id: &AttributeId) -> Option<Style> {
        self.attributes()
            .find(|(_, attr)| attr.id == *id)
            .map(|(_, attr)| attr.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles() {
        let config = HighlightingConfiguration::default();
        assert!(config.default.style.is_default());
        assert!(!config.string.style.is_default());
        assert!(config.comment.style.italic);
        assert!(config.at_keyword.style.bold);
        assert!(config.media_query_keyword.style.bold);
    }

    #[test]
    fn test_attribute_ids_distinct() {
        let config = HighlightingConfiguration::default();
        let mut ids: Vec<_> = config.attributes().map(|(_, a)| a.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_validate_duplicate_ids() {
        let mut config = HighlightingConfiguration::default();
        assert!(config.validate().is_ok());

        config.media_query_keyword.id = AttributeId::new(COMMENT_ID);
        match config.validate() {
            Err(ConfigurationError::DuplicateAttributeId { id, first, second }) => {
                assert_eq!(id, COMMENT_ID);
                assert_eq!(first, Category::Comment);
                assert_eq!(second, Category::MediaQueryKeyword);
            }
            other => panic!("expected duplicate attribute id, got {:?}", other),
        }
    }

    #[test]
    fn test_style_lookup() {
        let config = HighlightingConfiguration::default();
        assert_eq!(
            config.style(&AttributeId::new(STRING_ID)),
            Some(Style::fg(Color::Green))
        );
        assert_eq!(config.style(&AttributeId::new("missing")), None);
    }

    #[test]
    fn test_attribute_mut() {
        let mut config = HighlightingConfiguration::default();
        config.attribute_mut(Category::Comment).id = AttributeId::new("less.comment");
        assert_eq!(config.comment.id.as_str(), "less.comment");
        assert!(config.style(&AttributeId::new("less.comment")).is_some());
    }
}
