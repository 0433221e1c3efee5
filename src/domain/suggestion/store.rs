//! The active suggestion set and its resolution history.

use std::ops::Range;

use tracing::debug;

use super::{
    parse_suggestions, CategoryFilter, ResolvedSuggestion, Suggestion, SuggestionParseError,
    SuggestionStatus,
};
use crate::domain::document::PositionMap;
use crate::domain::foundation::{StateMachine, SuggestionId, Timestamp};

/// Ordered pending suggestions plus everything needed to find their text
/// again after edits.
#[derive(Debug, Clone, Default)]
pub struct SuggestionStore {
    pending: Vec<Suggestion>,
    history: Vec<ResolvedSuggestion>,
    positions: PositionMap,
}

impl SuggestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active set with the suggestions in `raw`.
    ///
    /// `snapshot` is the plain text that was analyzed; origins are computed
    /// against it and the position map restarts from it. On error the store
    /// is left untouched.
    pub fn ingest(
        &mut self,
        raw: &str,
        snapshot: &str,
    ) -> Result<Vec<Suggestion>, SuggestionParseError> {
        let parsed: Vec<Suggestion> = parse_suggestions(raw)?
            .into_iter()
            .map(|s| s.anchored_in(snapshot))
            .collect();

        debug!(
            count = parsed.len(),
            anchored = parsed.iter().filter(|s| s.origin().is_some()).count(),
            replaced = self.pending.len(),
            "Ingested suggestions"
        );

        self.pending = parsed.clone();
        self.positions.reset();
        Ok(parsed)
    }

    /// Removes a suggestion by identity without recording it.
    pub fn remove(&mut self, id: SuggestionId) -> Option<Suggestion> {
        let index = self.pending.iter().position(|s| s.id() == id)?;
        Some(self.pending.remove(index))
    }

    /// Removes a suggestion and records it as accepted.
    pub fn accept(&mut self, id: SuggestionId) -> Option<Suggestion> {
        self.resolve(id, SuggestionStatus::Accepted)
    }

    /// Removes a suggestion and records it as dismissed.
    pub fn dismiss(&mut self, id: SuggestionId) -> Option<Suggestion> {
        self.resolve(id, SuggestionStatus::Dismissed)
    }

    fn resolve(&mut self, id: SuggestionId, target: SuggestionStatus) -> Option<Suggestion> {
        let status = SuggestionStatus::Pending.transition_to(target).ok()?;
        let suggestion = self.remove(id)?;
        self.history.push(ResolvedSuggestion {
            suggestion: suggestion.clone(),
            status,
            resolved_at: Timestamp::now(),
        });
        Some(suggestion)
    }

    /// Resolves every pending suggestion as accepted, in order.
    pub fn clear_accepted(&mut self) -> Vec<Suggestion> {
        let drained: Vec<Suggestion> = self.pending.drain(..).collect();
        let now = Timestamp::now();
        self.history
            .extend(drained.iter().cloned().map(|suggestion| ResolvedSuggestion {
                suggestion,
                status: SuggestionStatus::Accepted,
                resolved_at: now,
            }));
        drained
    }

    /// Pending suggestions passing `filter`, in ingestion order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Suggestion> {
        self.pending
            .iter()
            .filter(|s| filter.matches(s.category()))
            .collect()
    }

    pub fn get(&self, id: SuggestionId) -> Option<&Suggestion> {
        self.pending.iter().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: SuggestionId) -> bool {
        self.get(id).is_some()
    }

    /// All pending suggestions, in ingestion order.
    pub fn pending(&self) -> &[Suggestion] {
        &self.pending
    }

    /// Resolved suggestions, oldest first.
    pub fn history(&self) -> &[ResolvedSuggestion] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Records a change of the document text since the last recorded state.
    pub fn record_edit(&mut self, before: &str, after: &str) {
        self.positions.record_change(before, after);
    }

    /// Where the suggestion's origin lies in the current text, if it is
    /// still intact.
    pub fn current_range(&self, suggestion: &Suggestion) -> Option<Range<usize>> {
        suggestion
            .origin()
            .and_then(|origin| self.positions.map_range(origin))
    }

    pub fn positions(&self) -> &PositionMap {
        &self.positions
    }
}
