//! The Suggestion value object and its lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

use super::Category;
use crate::domain::foundation::{StateMachine, SuggestionId, Timestamp, ValidationError};

/// One proposed edit returned by the model.
///
/// Immutable once constructed. `origin` is where the issue text first
/// occurred in the text that was analyzed; it is translated to current
/// offsets through the store's position map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    id: SuggestionId,
    category: Category,
    issue: String,
    suggestion: String,
    explanation: String,
    #[serde(skip)]
    origin: Option<Range<usize>>,
}

impl Suggestion {
    /// Creates a suggestion with a fresh id and no origin.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `issue` is empty.
    pub fn new(
        category: impl Into<Category>,
        issue: impl Into<String>,
        suggestion: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let issue = issue.into();
        if issue.is_empty() {
            return Err(ValidationError::empty_field("issue"));
        }
        Ok(Self {
            id: SuggestionId::new(),
            category: category.into(),
            issue,
            suggestion: suggestion.into(),
            explanation: explanation.into(),
            origin: None,
        })
    }

    /// Anchors the suggestion at the first occurrence of its issue text in
    /// `snapshot`, if any.
    pub fn anchored_in(mut self, snapshot: &str) -> Self {
        self.origin = snapshot
            .find(&self.issue)
            .map(|start| start..start + self.issue.len());
        self
    }

    pub fn id(&self) -> SuggestionId {
        self.id
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// The exact text the suggestion claims to replace.
    pub fn issue(&self) -> &str {
        &self.issue
    }

    /// The replacement text.
    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Snapshot range of the issue text, if it was found at analysis time.
    pub fn origin(&self) -> Option<Range<usize>> {
        self.origin.clone()
    }
}

/// Lifecycle status of a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    #[default]
    Pending,
    Accepted,
    Dismissed,
}

impl SuggestionStatus {
    /// Only pending suggestions may be highlighted.
    pub fn is_highlightable(&self) -> bool {
        matches!(self, SuggestionStatus::Pending)
    }
}

impl StateMachine for SuggestionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SuggestionStatus::*;
        matches!((self, target), (Pending, Accepted) | (Pending, Dismissed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SuggestionStatus::*;
        match self {
            Pending => vec![Accepted, Dismissed],
            Accepted | Dismissed => vec![],
        }
    }
}

impl fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SuggestionStatus::Pending => "Pending",
            SuggestionStatus::Accepted => "Accepted",
            SuggestionStatus::Dismissed => "Dismissed",
        };
        write!(f, "{}", s)
    }
}

/// A suggestion that left the active set, and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSuggestion {
    pub suggestion: Suggestion,
    pub status: SuggestionStatus,
    pub resolved_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Suggestion {
        Suggestion::new("grammar", "Their going", "They're going", "contraction").unwrap()
    }

    #[test]
    fn new_rejects_empty_issue() {
        let err = Suggestion::new("grammar", "", "x", "y").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("issue"));
    }

    #[test]
    fn identical_fields_get_distinct_ids() {
        assert_ne!(sample().id(), sample().id());
    }

    #[test]
    fn anchored_in_records_first_occurrence() {
        let s = sample().anchored_in("Yes. Their going. Their going.");
        assert_eq!(s.origin(), Some(5..16));
    }

    #[test]
    fn anchored_in_missing_text_has_no_origin() {
        let s = sample().anchored_in("Nothing here.");
        assert_eq!(s.origin(), None);
    }

    #[test]
    fn pending_can_be_accepted_or_dismissed() {
        let pending = SuggestionStatus::Pending;
        assert_eq!(
            pending.transition_to(SuggestionStatus::Accepted),
            Ok(SuggestionStatus::Accepted)
        );
        assert_eq!(
            pending.transition_to(SuggestionStatus::Dismissed),
            Ok(SuggestionStatus::Dismissed)
        );
    }

    #[test]
    fn resolved_states_are_terminal() {
        assert!(SuggestionStatus::Accepted.is_terminal());
        assert!(SuggestionStatus::Dismissed.is_terminal());
        assert!(SuggestionStatus::Accepted
            .transition_to(SuggestionStatus::Pending)
            .is_err());
    }

    #[test]
    fn only_pending_is_highlightable() {
        assert!(SuggestionStatus::Pending.is_highlightable());
        assert!(!SuggestionStatus::Dismissed.is_highlightable());
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SuggestionStatus::Dismissed).unwrap(),
            "\"dismissed\""
        );
    }
}
