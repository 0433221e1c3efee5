//! Rendering of highlight markers for pending suggestions.

use tracing::debug;

use super::locator::{resolve, Span};
use crate::domain::document::{encode_uri_component, markup::MARKER_ELEMENT, Document};
use crate::domain::suggestion::{Suggestion, SuggestionStore};

/// Builds the marker markup wrapping `span` for `suggestion`.
pub fn marker_for(suggestion: &Suggestion, span: &Span) -> String {
    format!(
        concat!(
            r#"<{tag} data-issue="{issue}" data-suggestion-id="{id}" "#,
            r#"style="background-color: {color}; padding: 2px 0; border-radius: 2px; cursor: pointer; transition: filter 0.2s;" "#,
            r#"onmouseover="this.style.filter='brightness(0.85)'" "#,
            r#"onmouseout="this.style.filter='brightness(1)'">{text}</{tag}>"#
        ),
        tag = MARKER_ELEMENT,
        issue = encode_uri_component(suggestion.issue()),
        id = suggestion.id(),
        color = suggestion.category().highlight_color(),
        text = span.matched,
    )
}

/// Returns `document` with exactly one marker per resolvable suggestion.
///
/// Existing markers are removed first, so rendering is idempotent and
/// markers of resolved suggestions never survive. Suggestions are wrapped
/// in order against the progressively marked markup; one whose text cannot
/// be found is skipped.
pub fn render(
    document: &Document,
    suggestions: &[Suggestion],
    store: &SuggestionStore,
) -> Document {
    let mut markup = document.without_markers().into_markup();

    for suggestion in suggestions {
        match resolve(&markup, suggestion, store) {
            Ok(span) => {
                let marker = marker_for(suggestion, &span);
                markup.replace_range(span.range, &marker);
            }
            Err(err) => {
                debug!(
                    suggestion_id = %suggestion.id(),
                    category = %suggestion.category(),
                    error = %err,
                    "Skipping highlight"
                );
            }
        }
    }

    Document::from_markup(markup)
}
