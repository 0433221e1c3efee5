//! The editing session aggregate.

use thiserror::Error;
use tracing::{debug, info};

use super::apply::{apply, apply_all, ApplyAllReport, ApplyOutcome};
use super::highlight::render;
use crate::domain::document::Document;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, SuggestionId, Timestamp};
use crate::domain::suggestion::{
    CategoryFilter, ResolvedSuggestion, Suggestion, SuggestionParseError, SuggestionStore,
};

/// Errors raised by session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Suggestion not found: {0}")]
    UnknownSuggestion(SuggestionId),
}

impl SessionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::UnknownSuggestion(_) => ErrorCode::SuggestionNotFound,
        }
    }
}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        let code = err.code();
        let detail = match &err {
            SessionError::UnknownSuggestion(id) => id.to_string(),
        };
        DomainError::new(code, err.to_string()).with_detail("suggestion_id", detail)
    }
}

/// One document under review together with its suggestions.
///
/// Every mutation takes `&mut self`, so a session has exactly one writer
/// and at most one analysis in flight.
#[derive(Debug, Clone)]
pub struct EditingSession {
    id: SessionId,
    document: Document,
    store: SuggestionStore,
    created_at: Timestamp,
}

impl EditingSession {
    pub fn new(document: Document) -> Self {
        Self {
            id: SessionId::new(),
            document,
            store: SuggestionStore::new(),
            created_at: Timestamp::now(),
        }
    }

    pub fn from_markup(markup: impl Into<String>) -> Self {
        Self::new(Document::from_markup(markup))
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// The document including highlight markers.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Visible text of the document.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    pub fn store(&self) -> &SuggestionStore {
        &self.store
    }

    /// Replaces the suggestion set with a model response for `snapshot`
    /// and highlights the new suggestions.
    ///
    /// On error nothing changes.
    pub fn ingest_analysis(
        &mut self,
        raw: &str,
        snapshot: &str,
    ) -> Result<Vec<Suggestion>, SuggestionParseError> {
        let ingested = self.store.ingest(raw, snapshot)?;
        self.refresh_highlights();
        info!(
            session_id = %self.id,
            suggestions = ingested.len(),
            markers = self.document.marker_count(),
            "Analysis ingested"
        );
        Ok(ingested)
    }

    /// Applies a pending suggestion to the document.
    pub fn accept(&mut self, id: SuggestionId) -> Result<ApplyOutcome, SessionError> {
        let outcome = apply(&mut self.document, id, &mut self.store)
            .ok_or(SessionError::UnknownSuggestion(id))?;
        debug!(
            session_id = %self.id,
            suggestion_id = %id,
            applied = outcome.was_applied(),
            "Suggestion accepted"
        );
        Ok(outcome)
    }

    /// Drops a pending suggestion without touching the text.
    pub fn dismiss(&mut self, id: SuggestionId) -> Result<Suggestion, SessionError> {
        let dismissed = self
            .store
            .dismiss(id)
            .ok_or(SessionError::UnknownSuggestion(id))?;
        self.refresh_highlights();
        debug!(session_id = %self.id, suggestion_id = %id, "Suggestion dismissed");
        Ok(dismissed)
    }

    /// Applies every pending suggestion and clears the set.
    pub fn apply_all(&mut self) -> ApplyAllReport {
        let report = apply_all(&mut self.document, &mut self.store);
        info!(
            session_id = %self.id,
            applied = report.applied.len(),
            missed = report.missed.len(),
            "Applied all suggestions"
        );
        report
    }

    /// Replaces the document with user-edited markup.
    ///
    /// The text change is recorded so suggestion anchors stay valid, then
    /// highlights are rebuilt.
    pub fn set_markup(&mut self, markup: impl Into<String>) {
        let before = self.document.plain_text();
        let edited = Document::from_markup(markup);
        self.store.record_edit(&before, &edited.plain_text());
        self.document = edited;
        self.refresh_highlights();
    }

    /// Pending suggestions passing `filter`.
    pub fn suggestions(&self, filter: &CategoryFilter) -> Vec<&Suggestion> {
        self.store.filter(filter)
    }

    /// Accepted and dismissed suggestions, oldest first.
    pub fn history(&self) -> &[ResolvedSuggestion] {
        self.store.history()
    }

    fn refresh_highlights(&mut self) {
        self.document = render(&self.document, self.store.pending(), &self.store);
    }
}

impl Default for EditingSession {
    fn default() -> Self {
        Self::new(Document::empty())
    }
}
