//! AnalyzeText handler.
//!
//! Sends the session's current text to the model and replaces the
//! session's suggestion set with the parsed reply. The session is borrowed
//! mutably for the whole call, so one session never has two analyses in
//! flight.

use std::sync::Arc;
use tracing::warn;

use super::completion::complete_prompt;
use super::errors::ToolError;
use crate::domain::prompt::analysis_prompt;
use crate::domain::reconcile::EditingSession;
use crate::domain::suggestion::Suggestion;
use crate::ports::{AIProvider, RequestMetadata, TokenUsage, ToolKind};

/// Result of analyzing a session's text.
#[derive(Debug, Clone)]
pub struct AnalyzeTextResult {
    /// Suggestions now pending in the session.
    pub suggestions: Vec<Suggestion>,
    /// Model that produced them.
    pub model: String,
    pub usage: TokenUsage,
}

/// Handler for writing analysis.
pub struct AnalyzeTextHandler<P>
where
    P: AIProvider + ?Sized,
{
    ai_provider: Arc<P>,
    max_tokens: Option<u32>,
}

impl<P> AnalyzeTextHandler<P>
where
    P: AIProvider + ?Sized,
{
    pub fn new(ai_provider: Arc<P>) -> Self {
        Self {
            ai_provider,
            max_tokens: None,
        }
    }

    /// Overrides the provider's default completion limit.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Analyzes the session's text.
    ///
    /// On any error the session's document and suggestions are untouched.
    pub async fn handle(
        &self,
        session: &mut EditingSession,
    ) -> Result<AnalyzeTextResult, ToolError> {
        let snapshot = session.plain_text();
        if snapshot.trim().is_empty() {
            return Err(ToolError::EmptyInput);
        }

        let session_id = session.id();
        let metadata =
            RequestMetadata::for_tool(ToolKind::WritingAnalysis).with_session(session_id);
        let completion = complete_prompt(
            self.ai_provider.as_ref(),
            metadata,
            analysis_prompt(&snapshot),
            self.max_tokens,
        )
        .await?;

        let suggestions = session
            .ingest_analysis(&completion.text, &snapshot)
            .map_err(|err| {
                warn!(%session_id, error = %err, "Analysis reply rejected");
                ToolError::Parse(err)
            })?;

        Ok(AnalyzeTextResult {
            suggestions,
            model: completion.model,
            usage: completion.usage,
        })
    }
}
