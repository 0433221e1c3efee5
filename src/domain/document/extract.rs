//! Plain-text extraction with a plain → markup offset mapping.

use std::ops::Range;

use super::markup::{tokenize, TokenKind};

/// One emitted unit of plain text and the markup it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Byte range in the extracted text.
    pub plain: Range<usize>,
    /// Byte range in the markup. Empty for newlines synthesized at block
    /// boundaries.
    pub markup: Range<usize>,
    /// True when the text was produced by a tag rather than text content.
    pub synthetic: bool,
}

/// Result of flattening markup to plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    text: String,
    segments: Vec<Segment>,
}

impl Extraction {
    /// Flattens markup: block boundaries and `<br>` become `\n`, entities
    /// are decoded, marker wrappers and `<script>`/`<style>` content vanish.
    pub fn from_markup(markup: &str) -> Self {
        let mut out = Extraction::default();
        let mut raw_depth = 0usize;

        for token in tokenize(markup) {
            match &token.kind {
                TokenKind::Tag(tag) if tag.is_raw_text() && !tag.self_closing => {
                    if tag.closing {
                        raw_depth = raw_depth.saturating_sub(1);
                    } else {
                        raw_depth += 1;
                    }
                }
                _ if raw_depth > 0 => {}
                TokenKind::Text => {
                    let base = token.range.start;
                    for (offset, c) in markup[token.range.clone()].char_indices() {
                        let start = base + offset;
                        out.push(c, start..start + c.len_utf8(), false);
                    }
                }
                TokenKind::Entity(c) => out.push(*c, token.range.clone(), false),
                TokenKind::Tag(tag) if tag.is("br") && !tag.closing => {
                    out.push('\n', token.range.clone(), true);
                }
                TokenKind::Tag(tag) if tag.is_block() && !tag.closing => {
                    if !out.text.is_empty() && !out.text.ends_with('\n') {
                        let at = token.range.start;
                        out.push('\n', at..at, true);
                    }
                }
                TokenKind::Tag(_) | TokenKind::Comment => {}
            }
        }

        out
    }

    fn push(&mut self, c: char, markup: Range<usize>, synthetic: bool) {
        let start = self.text.len();
        self.text.push(c);
        self.segments.push(Segment {
            plain: start..self.text.len(),
            markup,
            synthetic,
        });
    }

    /// The extracted plain text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the extraction, returning the plain text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// The offset mapping, one segment per emitted character.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Maps a plain-text range to the markup that produced it.
    ///
    /// Returns `None` for empty ranges, ranges that do not fall on segment
    /// boundaries, and ranges that include tag-produced newlines.
    pub fn markup_range(&self, plain: Range<usize>) -> Option<Range<usize>> {
        if plain.start >= plain.end {
            return None;
        }
        let first = self
            .segments
            .binary_search_by_key(&plain.start, |s| s.plain.start)
            .ok()?;
        let last = self
            .segments
            .binary_search_by_key(&plain.end, |s| s.plain.end)
            .ok()?;
        if last < first {
            return None;
        }

        let covered = &self.segments[first..=last];
        if covered.iter().any(|s| s.synthetic) {
            return None;
        }

        Some(covered[0].markup.start..covered[covered.len() - 1].markup.end)
    }
}
