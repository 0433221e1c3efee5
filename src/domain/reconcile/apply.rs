//! Applying suggestions to the document.

use tracing::debug;

use super::highlight::render;
use super::locator::{resolve, Span};
use crate::domain::document::{escape_html, Document};
use crate::domain::foundation::SuggestionId;
use crate::domain::suggestion::{Suggestion, SuggestionStore};

/// Result of applying one suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub suggestion: Suggestion,
    /// The replaced span, or `None` when the issue text was not found and
    /// the document text was left as is.
    pub replaced: Option<Span>,
}

impl ApplyOutcome {
    pub fn was_applied(&self) -> bool {
        self.replaced.is_some()
    }
}

/// Result of applying every pending suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyAllReport {
    pub applied: Vec<Suggestion>,
    pub missed: Vec<Suggestion>,
}

impl ApplyAllReport {
    pub fn total(&self) -> usize {
        self.applied.len() + self.missed.len()
    }
}

/// Replaces the suggestion's span in an unmarked document and records the
/// text change. Returns the span when something was replaced.
fn replace_in(
    document: &mut Document,
    suggestion: &Suggestion,
    store: &mut SuggestionStore,
) -> Option<Span> {
    let span = match resolve(document.markup(), suggestion, store) {
        Ok(span) => span,
        Err(err) => {
            debug!(
                suggestion_id = %suggestion.id(),
                error = %err,
                "Suggestion text not found, leaving document unchanged"
            );
            return None;
        }
    };

    let before = document.plain_text();
    document.replace_range(span.range.clone(), &escape_html(suggestion.suggestion()));
    store.record_edit(&before, &document.plain_text());
    Some(span)
}

/// Applies one pending suggestion.
///
/// The suggestion leaves the store as accepted whether or not its text was
/// found. Highlights for the remaining suggestions are re-rendered. Returns
/// `None` if `id` is not pending.
pub fn apply(
    document: &mut Document,
    id: SuggestionId,
    store: &mut SuggestionStore,
) -> Option<ApplyOutcome> {
    let suggestion = store.get(id)?.clone();

    let mut clean = document.without_markers();
    let replaced = replace_in(&mut clean, &suggestion, store);
    store.accept(id);

    *document = render(&clean, store.pending(), store);
    Some(ApplyOutcome {
        suggestion,
        replaced,
    })
}

/// Applies every pending suggestion in order against one buffer.
///
/// Misses are reported, never fatal. Afterwards the store is empty and the
/// document carries no markers.
pub fn apply_all(document: &mut Document, store: &mut SuggestionStore) -> ApplyAllReport {
    let mut clean = document.without_markers();
    let mut report = ApplyAllReport::default();

    for suggestion in store.pending().to_vec() {
        if replace_in(&mut clean, &suggestion, store).is_some() {
            report.applied.push(suggestion);
        } else {
            report.missed.push(suggestion);
        }
    }

    store.clear_accepted();
    *document = clean;
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::suggestion::SuggestionStatus;

    fn setup(markup: &str, raw: &str) -> (Document, SuggestionStore) {
        let doc = Document::from_markup(markup);
        let mut store = SuggestionStore::new();
        store.ingest(raw, &doc.plain_text()).unwrap();
        let rendered = render(&doc, store.pending(), &store);
        (rendered, store)
    }

    #[test]
    fn applies_replacement_and_removes_marker() {
        let raw = r#"[{"category":"grammar","issue":"Their going","suggestion":"They're going","explanation":"x"}]"#;
        let (mut doc, mut store) = setup("<div>Their going to the store.</div>", raw);
        let id = store.pending()[0].id();

        let outcome = apply(&mut doc, id, &mut store).unwrap();

        assert!(outcome.was_applied());
        assert_eq!(doc.markup(), "<div>They&#039;re going to the store.</div>");
        assert_eq!(doc.plain_text(), "They're going to the store.");
        assert!(store.is_empty());
        assert_eq!(store.history()[0].status, SuggestionStatus::Accepted);
    }

    #[test]
    fn absent_issue_is_accepted_without_change() {
        let raw = r#"[{"category":"spelling","issue":"absent","suggestion":"x","explanation":"y"}]"#;
        let (mut doc, mut store) = setup("<p>nothing to fix</p>", raw);
        let id = store.pending()[0].id();

        let outcome = apply(&mut doc, id, &mut store).unwrap();

        assert!(!outcome.was_applied());
        assert_eq!(doc.markup(), "<p>nothing to fix</p>");
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_id_is_none() {
        let (mut doc, mut store) = setup("<p>a</p>", "[]");
        assert!(apply(&mut doc, SuggestionId::new(), &mut store).is_none());
    }

    #[test]
    fn remaining_markers_follow_the_edit() {
        let raw = r#"[
            {"category":"spelling","issue":"teh","suggestion":"the","explanation":"x"},
            {"category":"spelling","issue":"teh","suggestion":"the","explanation":"x"},
            {"category":"style","issue":"very big","suggestion":"huge","explanation":"y"}
        ]"#;
        let (mut doc, mut store) = setup("<p>teh cat is very big</p>", raw);
        let style = store.pending()[2].id();

        apply(&mut doc, style, &mut store).unwrap();

        assert_eq!(doc.plain_text(), "teh cat is huge");
        assert_eq!(doc.marker_count(), 2);
    }

    #[test]
    fn apply_all_reports_misses() {
        let raw = r#"[
            {"category":"spelling","issue":"teh","suggestion":"the","explanation":"x"},
            {"category":"spelling","issue":"absent","suggestion":"x","explanation":"y"},
            {"category":"grammar","issue":"are","suggestion":"is","explanation":"z"}
        ]"#;
        let (mut doc, mut store) = setup("<p>teh cat are here</p>", raw);

        let report = apply_all(&mut doc, &mut store);

        assert_eq!(doc.markup(), "<p>the cat is here</p>");
        assert_eq!(report.applied.len(), 2);
        assert_eq!(report.missed.len(), 1);
        assert_eq!(report.missed[0].issue(), "absent");
        assert!(store.is_empty());
        assert_eq!(store.history().len(), 3);
    }

    #[test]
    fn apply_all_uses_anchors_for_repeated_text() {
        let raw = r#"[
            {"category":"style","issue":"fine","suggestion":"good","explanation":"x"},
            {"category":"style","issue":"good","suggestion":"great","explanation":"y"}
        ]"#;
        let (mut doc, mut store) = setup("<p>fine and good</p>", raw);

        apply_all(&mut doc, &mut store);

        // The first replacement writes a new "good" ahead of the one the
        // second suggestion was about.
        assert_eq!(doc.plain_text(), "good and great");
    }
}
