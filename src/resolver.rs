//! Attribute resolution
//!
//! Binds each category to the attribute id the renderer understands.
//! The binding table is written exactly once and is read-only after
//! that, so a configured resolver can be shared across threads freely.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{ConfigurationError, Result};
use crate::highlighting::HighlightingConfiguration;
use crate::token::Category;

/// Opaque identifier of a display attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeId(String);

impl AttributeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AttributeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Validated category -> attribute table
///
/// Only constructible through [`AttributeBindingBuilder::build`], so
/// every category is guaranteed to have exactly one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeBinding {
    table: BTreeMap<Category, AttributeId>,
}

impl AttributeBinding {
    pub fn builder() -> AttributeBindingBuilder {
        AttributeBindingBuilder::default()
    }

    /// Look up the attribute bound to a category
    pub fn get(&self, category: Category) -> Option<&AttributeId> {
        self.table.get(&category)
    }

    /// Iterate bindings in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &AttributeId)> {
        self.table.iter().map(|(category, id)| (*category, id))
    }
}

/// Collects bindings and validates them on `build`
#[derive(Debug, Default)]
pub struct AttributeBindingBuilder {
    table: BTreeMap<Category, AttributeId>,
    conflict: Option<ConfigurationError>,
}

impl AttributeBindingBuilder {
    /// Bind the fallback attribute
    pub fn default_attribute(self, id: impl Into<AttributeId>) -> Self {
        self.bind(Category::Default, id)
    }

    /// Bind a category to an attribute
    ///
    /// Binding a category again to the same id is accepted; binding it
    /// to a different id is reported by `build`.
    pub fn bind(mut self, category: Category, id: impl Into<AttributeId>) -> Self {
        let id = id.into();
        match self.table.get(&category) {
            Some(existing) if *existing != id => {
                if self.conflict.is_none() {
                    self.conflict = Some(ConfigurationError::ConflictingBinding {
                        category,
                        existing: existing.to_string(),
                        new: id.to_string(),
                    });
                }
            }
            Some(_) => {}
            None => {
                self.table.insert(category, id);
            }
        }
        self
    }

    /// Validate and freeze the binding table
    pub fn build(self) -> Result<AttributeBinding> {
        if let Some(conflict) = self.conflict {
            return Err(conflict);
        }
        // Default first: it is the fallback for every unmatched token
        for category in Category::ALL {
            if !self.table.contains_key(&category) {
                return Err(ConfigurationError::Unbound(category));
            }
        }
        Ok(AttributeBinding { table: self.table })
    }
}

/// Resolves categories to attribute ids
///
/// Starts unconfigured; `configure` moves it to configured exactly once.
#[derive(Debug, Default)]
pub struct AttributeResolver {
    binding: OnceLock<AttributeBinding>,
}

impl AttributeResolver {
    /// Create an unconfigured resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the five categories to the configuration's attributes
    pub fn configure(&self, config: &HighlightingConfiguration) -> Result<()> {
        if self.is_configured() {
            tracing::error!("attribute resolver configured twice");
            return Err(ConfigurationError::AlreadyConfigured);
        }

        let binding = AttributeBinding::builder()
            .default_attribute(config.default.id.clone())
            .bind(Category::String, config.string.id.clone())
            .bind(Category::Comment, config.comment.id.clone())
            .bind(Category::AtKeyword, config.at_keyword.id.clone())
            .bind(Category::MediaQueryKeyword, config.media_query_keyword.id.clone())
            .build()
            .inspect_err(|e| tracing::error!("invalid attribute binding: {}", e))?;

        self.configure_with(binding)
    }

    /// Install a prebuilt binding table
    pub fn configure_with(&self, binding: AttributeBinding) -> Result<()> {
        self.binding.set(binding).map_err(|_| {
            tracing::error!("attribute resolver configured twice");
            ConfigurationError::AlreadyConfigured
        })?;
        tracing::debug!(bindings = Category::ALL.len(), "attribute resolver configured");
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.binding.get().is_some()
    }

    /// The installed binding table, if configured
    pub fn binding(&self) -> Option<&AttributeBinding> {
        self.binding.get()
    }

    /// Look up the attribute for a category
    pub fn resolve(&self, category: Category) -> Result<&AttributeId> {
        let binding = self.binding.get().ok_or(ConfigurationError::NotConfigured)?;
        binding.get(category).ok_or(ConfigurationError::Unbound(category))
    }
}
