//! Turns loosely formatted model output into display blocks.
//!
//! Models answer with a markdown-ish mix of `**headings**`, bullets and
//! numbered steps. The rules here are line based and never fail: anything
//! not recognized is paragraph text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::document::escape_html;

static BOLD_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*([^*]+)\*\*\s*(.*)$").expect("valid heading regex"));
static STAR_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\s+([^*].*)$").expect("valid heading regex"));
static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+(.+)$").expect("valid list regex"));
static UNORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-•]\s+(.+)$").expect("valid list regex"));
static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+[A-Z]").expect("valid sentence regex"));

/// A display block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    /// Paragraph text split into sentences.
    Paragraph(Vec<String>),
    List { ordered: bool, items: Vec<String> },
}

#[derive(Default)]
struct Builder {
    blocks: Vec<Block>,
    paragraph: Vec<String>,
    list: Option<(bool, Vec<String>)>,
}

impl Builder {
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        self.paragraph.clear();
        let sentences = split_sentences(&text);
        if !sentences.is_empty() {
            self.blocks.push(Block::Paragraph(sentences));
        }
    }

    fn flush_list(&mut self) {
        if let Some((ordered, items)) = self.list.take() {
            self.blocks.push(Block::List { ordered, items });
        }
    }

    fn flush(&mut self) {
        self.flush_paragraph();
        self.flush_list();
    }

    fn heading(&mut self, title: &str) {
        self.flush();
        let title = clean(title);
        if !title.is_empty() {
            self.blocks.push(Block::Heading(title));
        }
    }

    fn item(&mut self, ordered: bool, text: &str) {
        self.flush_paragraph();
        if self.list.as_ref().is_some_and(|(kind, _)| *kind != ordered) {
            self.flush_list();
        }
        let (_, items) = self.list.get_or_insert_with(|| (ordered, Vec::new()));
        items.push(clean(text));
    }

    fn text(&mut self, line: &str) {
        self.flush_list();
        let line = clean(line);
        if !line.is_empty() {
            self.paragraph.push(line);
        }
    }
}

fn clean(text: &str) -> String {
    text.replace("**", "").trim().to_string()
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BREAK.find_iter(text) {
        sentences.push(text[start..m.start() + 1].trim().to_string());
        // The match ends with one ASCII capital that begins the next sentence.
        start = m.end() - 1;
    }
    sentences.push(text[start..].trim().to_string());
    sentences.retain(|s| !s.is_empty());
    sentences
}

/// Splits model output into blocks.
pub fn reformat(text: &str) -> Vec<Block> {
    let mut builder = Builder::default();
    let mut heading_next = false;

    for raw in text.lines() {
        let line = raw.trim();

        if line.is_empty() {
            builder.flush();
            continue;
        }
        if line == "*" {
            builder.flush();
            heading_next = true;
            continue;
        }
        if heading_next {
            heading_next = false;
            builder.heading(line.trim_start_matches('*'));
            continue;
        }

        if let Some(caps) = BOLD_HEADING.captures(line) {
            builder.heading(&caps[1]);
            let rest = caps[2].trim();
            if !rest.is_empty() {
                builder.text(rest);
            }
        } else if let Some(caps) = STAR_HEADING.captures(line) {
            builder.heading(&caps[1]);
        } else if let Some(caps) = ORDERED_ITEM.captures(line) {
            builder.item(true, &caps[1]);
        } else if let Some(caps) = UNORDERED_ITEM.captures(line) {
            builder.item(false, &caps[1]);
        } else {
            builder.text(line);
        }
    }

    builder.flush();
    builder.blocks
}

/// Renders blocks as escaped HTML.
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading(title) => {
                out.push_str(&format!("<h3>{}</h3>", escape_html(title)));
            }
            Block::Paragraph(sentences) => {
                let body: Vec<String> = sentences.iter().map(|s| escape_html(s)).collect();
                out.push_str(&format!("<p>{}</p>", body.join("<br><br>")));
            }
            Block::List { ordered, items } => {
                let tag = if *ordered { "ol" } else { "ul" };
                out.push_str(&format!("<{}>", tag));
                for item in items {
                    out.push_str(&format!("<li>{}</li>", escape_html(item)));
                }
                out.push_str(&format!("</{}>", tag));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_line_is_heading() {
        assert_eq!(
            reformat("**Role:** You are a poet."),
            vec![
                Block::Heading("Role:".to_string()),
                Block::Paragraph(vec!["You are a poet.".to_string()]),
            ]
        );
    }

    #[test]
    fn lone_star_marks_next_line() {
        assert_eq!(
            reformat("*\nContext\nSome text."),
            vec![
                Block::Heading("Context".to_string()),
                Block::Paragraph(vec!["Some text.".to_string()]),
            ]
        );
    }

    #[test]
    fn star_bullet_is_heading() {
        assert_eq!(
            reformat("* Output Format"),
            vec![Block::Heading("Output Format".to_string())]
        );
    }

    #[test]
    fn groups_list_items() {
        let blocks = reformat("1. First\n2. Second\n- a\n• b");
        assert_eq!(
            blocks,
            vec![
                Block::List {
                    ordered: true,
                    items: vec!["First".to_string(), "Second".to_string()],
                },
                Block::List {
                    ordered: false,
                    items: vec!["a".to_string(), "b".to_string()],
                },
            ]
        );
    }

    #[test]
    fn splits_sentences_and_drops_emphasis() {
        let blocks = reformat("Write **clearly**. Use examples! why not? Keep it short.");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![
                "Write clearly.".to_string(),
                "Use examples! why not?".to_string(),
                "Keep it short.".to_string(),
            ])]
        );
    }

    #[test]
    fn blank_lines_separate_paragraphs() {
        let blocks = reformat("one\ntwo\n\nthree");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(vec!["one two".to_string()]),
                Block::Paragraph(vec!["three".to_string()]),
            ]
        );
    }

    #[test]
    fn renders_escaped_html() {
        let blocks = reformat("**Use <tags>**\nFirst. Second.\n- a & b");
        assert_eq!(
            render_blocks(&blocks),
            "<h3>Use &lt;tags&gt;</h3><p>First.<br><br>Second.</p><ul><li>a &amp; b</li></ul>"
        );
    }

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(reformat("  \n\n").is_empty());
        assert_eq!(render_blocks(&[]), "");
    }
}
