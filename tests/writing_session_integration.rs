//! Integration tests for the writing assistant flow.
//!
//! These tests drive an editing session through the public API:
//! 1. AnalyzeTextHandler sends the text to a mock provider
//! 2. The reply is ingested and highlighted
//! 3. Suggestions are accepted, dismissed or applied in bulk

use std::sync::Arc;

use draftwise::adapters::ai::{MockAIProvider, MockError};
use draftwise::application::{AnalyzeTextHandler, ToolError};
use draftwise::domain::document::Document;
use draftwise::domain::foundation::{Locale, MessageKey};
use draftwise::domain::reconcile::EditingSession;
use draftwise::domain::suggestion::{Category, CategoryFilter, SuggestionStatus};
use draftwise::ports::ToolKind;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn reply(entries: &[(&str, &str, &str)]) -> String {
    let items: Vec<serde_json::Value> = entries
        .iter()
        .map(|(category, issue, suggestion)| {
            serde_json::json!({
                "category": category,
                "issue": issue,
                "suggestion": suggestion,
                "explanation": format!("{} fix", category),
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

async fn analyzed(text: &str, model_reply: String) -> (EditingSession, Arc<MockAIProvider>) {
    let provider = Arc::new(MockAIProvider::new().with_response(model_reply));
    let handler = AnalyzeTextHandler::new(provider.clone());
    let mut session = EditingSession::new(Document::from_plain_text(text));
    handler.handle(&mut session).await.unwrap();
    (session, provider)
}

// =============================================================================
// Single suggestion
// =============================================================================

#[tokio::test]
async fn their_going_is_highlighted_then_fixed() {
    let (mut session, _) = analyzed(
        "Their going to the store.",
        reply(&[("grammar", "Their going", "They're going")]),
    )
    .await;

    let markup = session.document().markup().to_string();
    assert_eq!(session.document().marker_count(), 1);
    assert!(markup.contains(Category::Grammar.highlight_color()));
    assert!(markup.contains(">Their going</mark>"));
    assert_eq!(session.plain_text(), "Their going to the store.");

    let id = session.store().pending()[0].id();
    let outcome = session.accept(id).unwrap();

    assert!(outcome.was_applied());
    assert_eq!(session.plain_text(), "They're going to the store.");
    assert!(session.store().is_empty());
    assert_eq!(session.document().marker_count(), 0);
    assert_eq!(session.history()[0].status, SuggestionStatus::Accepted);
}

#[tokio::test]
async fn fenced_reply_is_ingested() {
    let fenced = "```json\n[{\"category\":\"spelling\",\"issue\":\"recieve\",\"suggestion\":\"receive\",\"explanation\":\"spelling\"}]\n```";
    let (session, _) = analyzed("I did not recieve it.", fenced.to_string()).await;

    let pending = session.store().pending();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].category(), &Category::Spelling);
    assert_eq!(pending[0].issue(), "recieve");
    assert_eq!(pending[0].suggestion(), "receive");
    assert_eq!(pending[0].explanation(), "spelling");
}

#[tokio::test]
async fn not_json_reply_leaves_store_unchanged() {
    let provider = Arc::new(
        MockAIProvider::new()
            .with_response(reply(&[("style", "very very", "very")]))
            .with_response("not json"),
    );
    let handler = AnalyzeTextHandler::new(provider);
    let mut session = EditingSession::new(Document::from_plain_text("It was very very good."));
    handler.handle(&mut session).await.unwrap();
    let before = session.store().pending().to_vec();

    let err = handler.handle(&mut session).await.unwrap_err();

    assert!(matches!(err, ToolError::Parse(_)));
    assert_eq!(err.message_key(ToolKind::WritingAnalysis), MessageKey::FailedToParse);
    assert_eq!(
        err.user_message(ToolKind::WritingAnalysis, Locale::EnUs),
        "Failed to parse suggestions. Please try again."
    );
    assert_eq!(session.store().pending(), before.as_slice());
}

#[tokio::test]
async fn transport_failure_is_distinct_from_parse_failure() {
    let provider = Arc::new(MockAIProvider::new().with_error(MockError::Unavailable {
        message: "overloaded".to_string(),
    }));
    let handler = AnalyzeTextHandler::new(provider);
    let mut session = EditingSession::new(Document::from_plain_text("Some text."));

    let err = handler.handle(&mut session).await.unwrap_err();

    assert_eq!(err.message_key(ToolKind::WritingAnalysis), MessageKey::FailedToAnalyze);
    assert!(session.store().is_empty());
}

// =============================================================================
// Bulk and mixed operations
// =============================================================================

#[tokio::test]
async fn apply_all_drops_missing_issue_without_error() {
    let (mut session, _) = analyzed(
        "Their going home. I recieve mail.",
        reply(&[
            ("grammar", "Their going", "They're going"),
            ("clarity", "not in the text", "anything"),
            ("spelling", "recieve", "receive"),
        ]),
    )
    .await;
    assert_eq!(session.document().marker_count(), 2);

    let report = session.apply_all();

    assert_eq!(report.applied.len(), 2);
    assert_eq!(report.missed.len(), 1);
    assert_eq!(report.missed[0].issue(), "not in the text");
    assert_eq!(session.plain_text(), "They're going home. I receive mail.");
    assert!(session.store().is_empty());
    assert_eq!(session.document().marker_count(), 0);
}

#[tokio::test]
async fn accepting_absent_issue_still_removes_it() {
    let (mut session, _) = analyzed(
        "A short note.",
        reply(&[("style", "missing words", "other words")]),
    )
    .await;
    let id = session.store().pending()[0].id();

    let outcome = session.accept(id).unwrap();

    assert!(!outcome.was_applied());
    assert_eq!(session.plain_text(), "A short note.");
    assert!(session.store().is_empty());
}

#[tokio::test]
async fn dismiss_keeps_text_and_rehighlights_rest() {
    let (mut session, _) = analyzed(
        "Their going home. I recieve mail.",
        reply(&[
            ("grammar", "Their going", "They're going"),
            ("spelling", "recieve", "receive"),
        ]),
    )
    .await;
    let grammar = session.store().pending()[0].id();

    session.dismiss(grammar).unwrap();

    assert_eq!(session.plain_text(), "Their going home. I recieve mail.");
    assert_eq!(session.document().marker_count(), 1);
    assert_eq!(session.suggestions(&CategoryFilter::All).len(), 1);
    assert!(session
        .suggestions(&CategoryFilter::Only(Category::Grammar))
        .is_empty());
    assert_eq!(session.history()[0].status, SuggestionStatus::Dismissed);
    assert!(session.dismiss(grammar).is_err());
}

#[tokio::test]
async fn user_edit_before_accept_keeps_anchor() {
    let (mut session, _) =
        analyzed("It is fine and good.", reply(&[("style", "good", "great")])).await;

    session.set_markup("<div>Now it is good, fine and good.</div>");
    let id = session.store().pending()[0].id();
    session.accept(id).unwrap();

    assert_eq!(session.plain_text(), "Now it is good, fine and great.");
}

#[tokio::test]
async fn reanalysis_replaces_suggestion_set() {
    let provider = Arc::new(
        MockAIProvider::new()
            .with_response(reply(&[("grammar", "Their going", "They're going")]))
            .with_response(reply(&[("punctuation", "store", "store!")])),
    );
    let handler = AnalyzeTextHandler::new(provider.clone());
    let mut session = EditingSession::new(Document::from_plain_text("Their going to the store."));

    handler.handle(&mut session).await.unwrap();
    handler.handle(&mut session).await.unwrap();

    let pending = session.store().pending();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].category(), &Category::Punctuation);
    assert_eq!(session.document().marker_count(), 1);
    assert_eq!(provider.call_count(), 2);
}
