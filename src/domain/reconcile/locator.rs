//! Finding a suggestion's issue text inside editor markup.
//!
//! The model only ever sees plain text, so its issue strings have to be
//! found again in markup where quotes, ampersands and angle brackets may be
//! escaped. A match is only usable when it lies inside a single text run:
//! wrapping or replacing it then never cuts through a tag, an attribute or
//! a character reference.

use std::fmt;
use std::ops::Range;

use thiserror::Error;

use crate::domain::document::{escape_html, escape_quotes, Extraction, TextRuns};
use crate::domain::suggestion::{Suggestion, SuggestionStore};

/// How a span was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternVariant {
    /// The issue text as given.
    Verbatim,
    /// The issue text with `& < > " '` escaped.
    HtmlEscaped,
    /// The issue text with only quotes escaped.
    QuotesEscaped,
    /// Through the suggestion's snapshot origin.
    Anchored,
}

impl PatternVariant {
    /// Substring variants in the order they are tried.
    pub const SEARCH_ORDER: [PatternVariant; 3] = [
        PatternVariant::Verbatim,
        PatternVariant::HtmlEscaped,
        PatternVariant::QuotesEscaped,
    ];

    /// The markup pattern for `issue` under this variant, if it has one.
    pub fn pattern(&self, issue: &str) -> Option<String> {
        match self {
            PatternVariant::Verbatim => Some(issue.to_string()),
            PatternVariant::HtmlEscaped => Some(escape_html(issue)),
            PatternVariant::QuotesEscaped => Some(escape_quotes(issue)),
            PatternVariant::Anchored => None,
        }
    }
}

impl fmt::Display for PatternVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PatternVariant::Verbatim => "verbatim",
            PatternVariant::HtmlEscaped => "html_escaped",
            PatternVariant::QuotesEscaped => "quotes_escaped",
            PatternVariant::Anchored => "anchored",
        };
        write!(f, "{}", s)
    }
}

/// A located occurrence of issue text, in markup byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub range: Range<usize>,
    pub variant: PatternVariant,
    /// The markup text covered by `range`.
    pub matched: String,
}

/// The issue text has no usable occurrence in the markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Issue text not found in document: {issue:?}")]
pub struct SpanNotFound {
    pub issue: String,
}

impl SpanNotFound {
    fn new(issue: &str) -> Self {
        Self {
            issue: issue.to_string(),
        }
    }
}

/// Finds the first usable occurrence of `issue` in `markup`.
///
/// Variants are tried in [`PatternVariant::SEARCH_ORDER`]; the first one
/// with any usable occurrence wins. When the issue text occurs more than
/// once, the earliest occurrence in document order is returned.
pub fn locate(markup: &str, issue: &str) -> Result<Span, SpanNotFound> {
    if issue.is_empty() {
        return Err(SpanNotFound::new(issue));
    }
    let runs = TextRuns::of(markup);

    for variant in PatternVariant::SEARCH_ORDER {
        let Some(pattern) = variant.pattern(issue) else {
            continue;
        };
        let found = markup
            .match_indices(pattern.as_str())
            .map(|(start, matched)| start..start + matched.len())
            .find(|range| runs.admits(range));

        if let Some(range) = found {
            return Ok(Span {
                matched: markup[range.clone()].to_string(),
                range,
                variant,
            });
        }
    }

    Err(SpanNotFound::new(issue))
}

/// Resolves a plain-text range of the current document to a span.
///
/// The range must still hold exactly `issue` and must map to markup inside
/// a single text run.
pub fn locate_anchored(
    markup: &str,
    issue: &str,
    plain: Range<usize>,
) -> Result<Span, SpanNotFound> {
    let extraction = Extraction::from_markup(markup);
    if extraction.text().get(plain.clone()) != Some(issue) {
        return Err(SpanNotFound::new(issue));
    }

    let range = extraction
        .markup_range(plain)
        .filter(|range| TextRuns::of(markup).admits(range))
        .ok_or_else(|| SpanNotFound::new(issue))?;

    Ok(Span {
        matched: markup[range.clone()].to_string(),
        range,
        variant: PatternVariant::Anchored,
    })
}

/// Resolves a stored suggestion: through its origin when that is still
/// intact, otherwise by searching for its issue text.
pub fn resolve(
    markup: &str,
    suggestion: &Suggestion,
    store: &SuggestionStore,
) -> Result<Span, SpanNotFound> {
    if let Some(plain) = store.current_range(suggestion) {
        if let Ok(span) = locate_anchored(markup, suggestion.issue(), plain) {
            return Ok(span);
        }
    }
    locate(markup, suggestion.issue())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_verbatim_text() {
        let markup = "<div>Their going to the store.</div>";
        let span = locate(markup, "Their going").unwrap();
        assert_eq!(span.range, 5..16);
        assert_eq!(span.variant, PatternVariant::Verbatim);
        assert_eq!(span.matched, "Their going");
    }

    #[test]
    fn falls_back_to_html_escaped() {
        let markup = "<p>Tom &amp; Jerry &lt;3</p>";
        let span = locate(markup, "Tom & Jerry <3").unwrap();
        assert_eq!(span.variant, PatternVariant::HtmlEscaped);
        assert_eq!(span.matched, "Tom &amp; Jerry &lt;3");
    }

    #[test]
    fn falls_back_to_quotes_escaped() {
        // A bare '>' survives in text while the quote was escaped.
        let markup = "<p>he said &quot;go&quot; -> left</p>";
        let span = locate(markup, "\"go\" -> left").unwrap();
        assert_eq!(span.variant, PatternVariant::QuotesEscaped);
    }

    #[test]
    fn first_occurrence_wins() {
        let markup = "<p>the cat and the dog</p>";
        let span = locate(markup, "the").unwrap();
        assert_eq!(span.range, 3..6);
    }

    #[test]
    fn ignores_attribute_and_tag_text() {
        let markup = r#"<span class="note">a note</span>"#;
        let span = locate(markup, "note").unwrap();
        assert_eq!(&markup[span.range.clone()], "note");
        assert!(span.range.start > markup.find('>').unwrap());

        assert!(locate("<div>abc</div>", "div").is_err());
    }

    #[test]
    fn does_not_cross_inline_tags() {
        let markup = "<p>very <b>bold</b> move</p>";
        assert!(locate(markup, "very bold").is_err());
        assert!(locate(markup, "b>bold").is_err());
        assert!(locate(markup, "bold").is_ok());
    }

    #[test]
    fn missing_and_empty_issues_fail() {
        assert_eq!(
            locate("<p>text</p>", "absent"),
            Err(SpanNotFound {
                issue: "absent".to_string()
            })
        );
        assert!(locate("<p>text</p>", "").is_err());
    }

    #[test]
    fn anchored_targets_later_occurrence() {
        let markup = "<p>the cat and the dog</p>";
        let span = locate_anchored(markup, "the", 12..15).unwrap();
        assert_eq!(span.range, 15..18);
        assert_eq!(span.variant, PatternVariant::Anchored);
    }

    #[test]
    fn anchored_rejects_changed_text() {
        let markup = "<p>the cat</p>";
        assert!(locate_anchored(markup, "dog", 4..7).is_err());
        assert!(locate_anchored(markup, "the", 40..43).is_err());
    }

    #[test]
    fn resolve_prefers_origin_then_searches() {
        let mut store = SuggestionStore::new();
        let raw = r#"[{"category":"style","issue":"the","suggestion":"a","explanation":"x"}]"#;
        store.ingest(raw, "one the two").unwrap();
        let suggestion = store.pending()[0].clone();

        // The origin points at the only occurrence in the snapshot.
        let markup = "<p>one the two</p>";
        let span = resolve(markup, &suggestion, &store).unwrap();
        assert_eq!(span.variant, PatternVariant::Anchored);

        // Text moved without recorded edits: fall back to searching.
        let moved = "<p>the one two</p>";
        let span = resolve(moved, &suggestion, &store).unwrap();
        assert_eq!(span.variant, PatternVariant::Verbatim);
        assert_eq!(span.range, 3..6);
    }
}
