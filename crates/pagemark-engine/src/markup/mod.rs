//! # Section Markup
//!
//! A small line-oriented markup for editing a page's sections as one block
//! of text:
//!
//! ```text
//! Loose text becomes a paragraph.
//!
//! :::code shell: Install deps
//! brew install pyenv node
//! :::end
//!
//! :::picture https://example.com/cat.png: A cat
//! :::end
//! ```
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified on its
//!    trimmed content as a directive header, `:::end`, an unknown `:::`
//!    directive or plain text. Header lines are split into kind, context
//!    token and header by `directive`.
//!
//! 2. **Section Construction** (`builder`): a `SectionBuilder` keeps either
//!    a loose paragraph buffer or one open block, and converts blocks to
//!    sections as they close (`blocks`).
//!
//! ## Round trips
//!
//! [`sections_to_markup`] output parses back to sections of the same types,
//! content and order, but the two are not exact inverses: a body line equal
//! to `:::end`, headers containing newlines, or fields that a type does not
//! render are lost.

pub mod blocks;
pub mod builder;
pub mod classify;
pub mod directive;
pub mod serialize;

use crate::error::MarkupError;
use crate::models::Section;

use builder::SectionBuilder;
use classify::{MarkupLineClassifier, normalize_newlines};

/// Knobs shared by the parser and the serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupOptions {
    /// Language for snippets that do not name one.
    pub default_language: String,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            default_language: "text".to_string(),
        }
    }
}

/// Parse markup text into sections numbered `0..n` in document order.
pub fn parse_markup(input: &str) -> Result<Vec<Section>, MarkupError> {
    parse_markup_with(input, &MarkupOptions::default())
}

pub fn parse_markup_with(input: &str, options: &MarkupOptions) -> Result<Vec<Section>, MarkupError> {
    let input = normalize_newlines(input);
    let classifier = MarkupLineClassifier;
    let mut builder = SectionBuilder::new(options);

    for (idx, raw) in input.split('\n').enumerate() {
        builder.push(classifier.classify(idx + 1, raw))?;
    }

    builder.finish()
}

/// Render sections as markup, ordered by position. Never fails.
pub fn sections_to_markup(sections: &[Section]) -> String {
    sections_to_markup_with(sections, &MarkupOptions::default())
}

pub fn sections_to_markup_with(sections: &[Section], options: &MarkupOptions) -> String {
    serialize::render(sections, options)
}
