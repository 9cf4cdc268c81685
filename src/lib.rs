//! less-highlight - token classification and attribute resolution for LESS
//!
//! Tokens from an external LESS lexer are classified into a small set of
//! categories, and each category is resolved to the display attribute a
//! renderer applies to the token's source range.
//!
//! ```
//! use less_highlight::{GrammarRules, Highlighter, HighlightingConfiguration, Token};
//!
//! let highlighter =
//!     Highlighter::new(GrammarRules::less(), HighlightingConfiguration::default()).unwrap();
//! let spans = highlighter.highlight(&[Token::at("KEYWORD", "@media", 0)]).unwrap();
//! assert_eq!(spans[0].attribute.as_str(), "at_keyword");
//! ```

mod classifier;
mod config;
mod error;
mod grammar;
mod highlighter;
mod highlighting;
mod resolver;
mod style;
mod token;

pub use classifier::{TokenClassifier, AT_KEYWORDS, MEDIA_QUERY_KEYWORDS};
pub use config::Config;
pub use error::{ConfigurationError, Result};
pub use grammar::GrammarRules;
pub use highlighter::Highlighter;
pub use highlighting::{HighlightAttribute, HighlightingConfiguration};
pub use resolver::{AttributeBinding, AttributeBindingBuilder, AttributeId, AttributeResolver};
pub use style::{Color, Span, Style};
pub use token::{Category, Token};
