//! Highlighter
//!
//! Owns the classifier, the resolver and the highlighting configuration.
//! Build one at startup and share it by `Arc`; every method takes
//! `&self` and nothing is mutated after construction.

use crate::classifier::TokenClassifier;
use crate::config::Config;
use crate::error::Result;
use crate::grammar::GrammarRules;
use crate::highlighting::HighlightingConfiguration;
use crate::resolver::{AttributeId, AttributeResolver};
use crate::style::{Span, Style};
use crate::token::{Category, Token};

/// Classifies tokens and resolves them to display attributes
#[derive(Debug)]
pub struct Highlighter {
    classifier: TokenClassifier,
    resolver: AttributeResolver,
    highlighting: HighlightingConfiguration,
}

impl Highlighter {
    /// Build and configure a highlighter
    pub fn new(grammar: GrammarRules, highlighting: HighlightingConfiguration) -> Result<Self> {
        highlighting.validate()?;
        let classifier = TokenClassifier::new(grammar)?;
        let resolver = AttributeResolver::new();
        resolver.configure(&highlighting)?;

        tracing::debug!(
            string_rule = %classifier.rules().string_rule,
            keyword_rule = %classifier.rules().keyword_rule,
            "LESS highlighter ready"
        );

        Ok(Self {
            classifier,
            resolver,
            highlighting,
        })
    }

    /// Build a highlighter from loaded configuration
    pub fn from_config(config: Config) -> Result<Self> {
        Self::new(config.grammar, config.highlighting)
    }

    pub fn classifier(&self) -> &TokenClassifier {
        &self.classifier
    }

    pub fn resolver(&self) -> &AttributeResolver {
        &self.resolver
    }

    pub fn highlighting(&self) -> &HighlightingConfiguration {
        &self.highlighting
    }

    /// Classify a token and resolve its attribute
    pub fn attribute_for(&self, token: &Token) -> Result<(Category, &AttributeId)> {
        let category = self.classifier.classify(token);
        let id = self.resolver.resolve(category)?;
        Ok((category, id))
    }

    /// Turn a token stream into styled spans
    ///
    /// Tokens with empty text produce no span. Default tokens still get
    /// a span so the renderer can reset styling over their range.
    pub fn highlight(&self, tokens: &[Token]) -> Result<Vec<Span>> {
        let mut spans = Vec::with_capacity(tokens.len());
        for token in tokens {
            if token.text.is_empty() {
                continue;
            }
            let (category, id) = self.attribute_for(token)?;
            let range = token.range();
            spans.push(Span::new(range.start, range.end, category, id.clone()));
        }
        Ok(spans)
    }

    /// Style for a span's attribute
    pub fn style_for(&self, span: &Span) -> Style {
        self.highlighting
            .style(&span.attribute)
            .unwrap_or(self.highlighting.default.style)
    }
}
