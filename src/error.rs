//! Error types for LESS highlighting

use thiserror::Error;

use crate::token::Category;

/// Result type alias for highlighting configuration
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Attribute resolver is already configured")]
    AlreadyConfigured,

    #[error("Attribute resolver is not configured")]
    NotConfigured,

    #[error("No attribute bound for category {0}")]
    Unbound(Category),

    #[error("Category {category} already bound to '{existing}', cannot rebind to '{new}'")]
    ConflictingBinding {
        category: Category,
        existing: String,
        new: String,
    },

    #[error("Attribute id '{id}' used by both {first} and {second}")]
    DuplicateAttributeId {
        id: String,
        first: Category,
        second: Category,
    },

    #[error("Grammar rule name for {0} is empty")]
    EmptyRuleName(&'static str),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
