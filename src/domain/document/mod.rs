//! Document module - the rich-text markup being edited.
//!
//! The markup string an editor produces is the canonical document; its
//! block/inline structure is read through the tokenizer in [`markup`].
//!
//! ## Components
//!
//! - `Document` - owned markup buffer with extraction and marker helpers
//! - `Extraction` - plain text plus the plain → markup offset mapping
//! - `PositionMap` - snapshot → current offset translation across edits

mod extract;
pub mod markup;
mod position_map;

pub use extract::{Extraction, Segment};
pub use markup::{encode_uri_component, escape_html, escape_quotes, TextRuns};
pub use position_map::{PositionMap, TextEdit};

use std::fmt;
use std::ops::Range;

/// Empty editor content: one block holding a line break.
const EMPTY_MARKUP: &str = "<div><br></div>";

/// A rich-text document held as editor markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    markup: String,
}

impl Document {
    /// Wraps existing markup.
    pub fn from_markup(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    /// Builds editor markup from plain text.
    ///
    /// Paragraphs (separated by blank lines) become `<div>` blocks joined by
    /// an empty line block; single newlines become `<br>`.
    pub fn from_plain_text(text: &str) -> Self {
        let paragraphs: Vec<String> = text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                let lines: Vec<String> = p.lines().map(escape_html).collect();
                format!("<div>{}</div>", lines.join("<br>"))
            })
            .collect();

        if paragraphs.is_empty() {
            return Self::empty();
        }
        Self::from_markup(paragraphs.join(EMPTY_MARKUP))
    }

    /// An empty editor document.
    pub fn empty() -> Self {
        Self::from_markup(EMPTY_MARKUP)
    }

    /// The raw markup.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Consumes the document, returning its markup.
    pub fn into_markup(self) -> String {
        self.markup
    }

    /// Flattens the document to plain text with an offset mapping.
    pub fn extract(&self) -> Extraction {
        Extraction::from_markup(&self.markup)
    }

    /// Plain text only.
    pub fn plain_text(&self) -> String {
        self.extract().into_text()
    }

    /// Returns true when the document has no visible text.
    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }

    /// Copy of the document with every highlight marker unwrapped.
    pub fn without_markers(&self) -> Document {
        Self::from_markup(markup::strip_markers(&self.markup))
    }

    /// Number of highlight markers present.
    pub fn marker_count(&self) -> usize {
        markup::count_markers(&self.markup)
    }

    /// Replaces a markup byte range.
    pub(crate) fn replace_range(&mut self, range: Range<usize>, replacement: &str) {
        self.markup.replace_range(range, replacement);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.markup)
    }
}
