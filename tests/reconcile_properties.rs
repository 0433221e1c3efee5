//! Property tests for highlighting and applying suggestions.

use proptest::prelude::*;
use proptest::sample::Index;

use draftwise::domain::document::Document;
use draftwise::domain::reconcile::{apply, locate, render};
use draftwise::domain::suggestion::SuggestionStore;

fn paragraphs() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-z]{1,8}", 1..10), 1..4)
}

fn join(paragraphs: &[Vec<String>]) -> String {
    paragraphs
        .iter()
        .map(|words| words.join(" "))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn pick(paragraphs: &[Vec<String>], picks: &[Index]) -> Vec<String> {
    let words: Vec<&String> = paragraphs.iter().flatten().collect();
    picks.iter().map(|i| i.get(&words).to_string()).collect()
}

fn model_reply(issues: &[String], categories: &[&str]) -> String {
    let entries: Vec<serde_json::Value> = issues
        .iter()
        .enumerate()
        .map(|(n, issue)| {
            serde_json::json!({
                "category": categories[n % categories.len()],
                "issue": issue,
                "suggestion": format!("{}x", issue),
                "explanation": "test",
            })
        })
        .collect();
    serde_json::Value::Array(entries).to_string()
}

fn highlighted(text: &str, issues: &[String]) -> (Document, SuggestionStore) {
    let document = Document::from_plain_text(text);
    let mut store = SuggestionStore::new();
    store
        .ingest(
            &model_reply(issues, &["grammar", "spelling", "tone"]),
            &document.plain_text(),
        )
        .unwrap();
    let rendered = render(&document, store.pending(), &store);
    (rendered, store)
}

proptest! {
    #[test]
    fn highlighting_never_changes_visible_text(
        paras in paragraphs(),
        picks in prop::collection::vec(any::<Index>(), 0..6),
    ) {
        let text = join(&paras);
        let issues = pick(&paras, &picks);
        let (rendered, _) = highlighted(&text, &issues);

        prop_assert_eq!(rendered.plain_text(), Document::from_plain_text(&text).plain_text());
        prop_assert_eq!(rendered.without_markers(), Document::from_plain_text(&text));
    }

    #[test]
    fn rendering_twice_equals_rendering_once(
        paras in paragraphs(),
        picks in prop::collection::vec(any::<Index>(), 1..6),
    ) {
        let text = join(&paras);
        let issues = pick(&paras, &picks);
        let (once, store) = highlighted(&text, &issues);
        let twice = render(&once, store.pending(), &store);

        prop_assert_eq!(twice, once);
    }

    #[test]
    fn present_issue_is_located_and_replaced(
        paras in paragraphs(),
        pick_one in any::<Index>(),
    ) {
        let text = join(&paras);
        let issue = pick(&paras, &[pick_one]).remove(0);
        let (mut document, mut store) = highlighted(&text, std::slice::from_ref(&issue));

        prop_assert!(locate(document.without_markers().markup(), &issue).is_ok());

        let id = store.pending()[0].id();
        let outcome = apply(&mut document, id, &mut store).unwrap();

        prop_assert!(outcome.was_applied());
        let expected = Document::from_plain_text(&text)
            .plain_text()
            .replacen(&issue, &format!("{}x", issue), 1);
        prop_assert_eq!(document.plain_text(), expected);
        prop_assert!(store.is_empty());
    }

    #[test]
    fn absent_issue_is_dropped_without_edit(paras in paragraphs()) {
        let text = join(&paras);
        let missing = "NOT-PRESENT".to_string();
        let (mut document, mut store) = highlighted(&text, std::slice::from_ref(&missing));
        let before = document.plain_text();

        prop_assert!(locate(document.markup(), &missing).is_err());

        let id = store.pending()[0].id();
        let outcome = apply(&mut document, id, &mut store).unwrap();

        prop_assert!(!outcome.was_applied());
        prop_assert_eq!(document.plain_text(), before);
        prop_assert!(store.is_empty());
    }
}
