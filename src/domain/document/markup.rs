//! Tokenizer for editor markup plus the escaping helpers used when writing
//! text back into it.
//!
//! The tokenizer is deliberately forgiving: it understands the subset of
//! HTML a contenteditable editor produces (tags with quoted attributes,
//! comments, named and numeric character references) and treats anything it
//! does not recognize as plain text.

use std::ops::Range;

/// Elements that start a new line when their content is flattened to text.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "blockquote", "div", "dl", "dt", "dd", "figure", "footer", "h1", "h2",
    "h3", "h4", "h5", "h6", "header", "hr", "li", "ol", "p", "pre", "section", "table", "tr",
    "ul",
];

/// Elements whose content is never user-visible text.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Element used for highlight markers.
pub const MARKER_ELEMENT: &str = "mark";

/// A lexical unit of markup with its byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupToken<'a> {
    pub kind: TokenKind<'a>,
    pub range: Range<usize>,
}

/// What a token is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// Literal text content.
    Text,
    /// A recognized character reference and the character it stands for.
    Entity(char),
    /// An opening, closing or self-closing tag.
    Tag(Tag<'a>),
    /// `<!-- ... -->`, doctype and other declarations.
    Comment,
}

/// A parsed tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    pub name: &'a str,
    pub closing: bool,
    pub self_closing: bool,
}

impl Tag<'_> {
    /// Case-insensitive element name comparison.
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Returns true for block-level elements.
    pub fn is_block(&self) -> bool {
        BLOCK_ELEMENTS.iter().any(|b| self.is(b))
    }

    /// Returns true for `<script>` and `<style>`.
    pub fn is_raw_text(&self) -> bool {
        RAW_TEXT_ELEMENTS.iter().any(|b| self.is(b))
    }

    /// Returns true for highlight marker tags.
    pub fn is_marker(&self) -> bool {
        self.is(MARKER_ELEMENT)
    }
}

/// Splits markup into tokens covering every byte exactly once.
pub fn tokenize(markup: &str) -> Vec<MarkupToken<'_>> {
    let bytes = markup.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => {
                if let Some((kind, end)) = scan_tag(markup, i) {
                    flush(&mut tokens, text_start, i);
                    tokens.push(MarkupToken { kind, range: i..end });
                    i = end;
                    text_start = i;
                } else {
                    i += 1;
                }
            }
            b'&' => {
                if let Some((decoded, len)) = decode_entity(&markup[i..]) {
                    flush(&mut tokens, text_start, i);
                    tokens.push(MarkupToken {
                        kind: TokenKind::Entity(decoded),
                        range: i..i + len,
                    });
                    i += len;
                    text_start = i;
                } else {
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }
    flush(&mut tokens, text_start, bytes.len());

    tokens
}

/// Scans a tag or comment starting at `start` (which holds `<`).
fn scan_tag(markup: &str, start: usize) -> Option<(TokenKind<'_>, usize)> {
    let bytes = markup.as_bytes();
    let next = *bytes.get(start + 1)?;

    if next == b'!' {
        if markup[start..].starts_with("<!--") {
            let end = markup[start + 4..].find("-->")? + start + 4 + 3;
            return Some((TokenKind::Comment, end));
        }
        let end = markup[start..].find('>')? + start + 1;
        return Some((TokenKind::Comment, end));
    }

    let closing = next == b'/';
    let name_start = if closing { start + 2 } else { start + 1 };
    if !bytes.get(name_start).is_some_and(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    let mut name_end = name_start;
    while name_end < bytes.len()
        && (bytes[name_end].is_ascii_alphanumeric() || bytes[name_end] == b'-')
    {
        name_end += 1;
    }

    // Find the closing '>' outside of quoted attribute values.
    let mut quote: Option<u8> = None;
    let mut i = name_end;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => {
                let self_closing = i > name_end && bytes[i - 1] == b'/';
                let tag = Tag {
                    name: &markup[name_start..name_end],
                    closing,
                    self_closing,
                };
                return Some((TokenKind::Tag(tag), i + 1));
            }
            None => {}
        }
        i += 1;
    }

    None
}

fn flush(tokens: &mut Vec<MarkupToken<'_>>, start: usize, end: usize) {
    if end > start {
        tokens.push(MarkupToken {
            kind: TokenKind::Text,
            range: start..end,
        });
    }
}

/// Decodes a character reference at the start of `s` (which begins with `&`).
///
/// Returns the character and the byte length of the reference.
fn decode_entity(s: &str) -> Option<(char, usize)> {
    let semi = s.bytes().take(12).position(|b| b == b';')?;
    let body = &s[1..semi];

    let decoded = if let Some(numeric) = body.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        char::from_u32(code)?
    } else {
        match body {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            "nbsp" => '\u{a0}',
            _ => return None,
        }
    };

    Some((decoded, semi + 1))
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes only double and single quotes.
pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "&quot;").replace('\'', "&#039;")
}

/// Percent-encodes text with the `encodeURIComponent` alphabet.
pub fn encode_uri_component(text: &str) -> String {
    const UNRESERVED: &[u8] = b"-_.!~*'()";
    let mut out = String::with_capacity(text.len());
    for b in text.bytes() {
        if b.is_ascii_alphanumeric() || UNRESERVED.contains(&b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}

/// Byte ranges of markup where visible text lives.
///
/// A run is a maximal sequence of adjacent text and entity tokens outside
/// `<script>`/`<style>`. Anything that lies inside one run and does not cut
/// an entity in half can be wrapped or replaced without touching structure.
#[derive(Debug, Clone, Default)]
pub struct TextRuns {
    runs: Vec<Range<usize>>,
    entities: Vec<Range<usize>>,
}

impl TextRuns {
    /// Indexes the text runs of `markup`.
    pub fn of(markup: &str) -> Self {
        let mut runs: Vec<Range<usize>> = Vec::new();
        let mut entities = Vec::new();
        let mut current: Option<Range<usize>> = None;
        let mut raw_depth = 0usize;

        for token in tokenize(markup) {
            match &token.kind {
                TokenKind::Text | TokenKind::Entity(_) if raw_depth == 0 => {
                    if matches!(token.kind, TokenKind::Entity(_)) {
                        entities.push(token.range.clone());
                    }
                    current = Some(match current {
                        Some(run) => run.start..token.range.end,
                        None => token.range.clone(),
                    });
                }
                TokenKind::Text | TokenKind::Entity(_) => {}
                TokenKind::Tag(tag) => {
                    if tag.is_raw_text() && !tag.self_closing {
                        if tag.closing {
                            raw_depth = raw_depth.saturating_sub(1);
                        } else {
                            raw_depth += 1;
                        }
                    }
                    if let Some(run) = current.take() {
                        runs.push(run);
                    }
                }
                TokenKind::Comment => {
                    if let Some(run) = current.take() {
                        runs.push(run);
                    }
                }
            }
        }
        if let Some(run) = current.take() {
            runs.push(run);
        }

        Self { runs, entities }
    }

    /// Returns true if `range` is non-empty, inside a single run and does
    /// not split an entity.
    pub fn admits(&self, range: &Range<usize>) -> bool {
        if range.start >= range.end {
            return false;
        }
        let inside_run = self
            .runs
            .iter()
            .any(|run| run.start <= range.start && range.end <= run.end);
        let splits_entity = self.entities.iter().any(|e| {
            (e.start < range.start && range.start < e.end) || (e.start < range.end && range.end < e.end)
        });
        inside_run && !splits_entity
    }
}

/// Removes every marker tag, keeping the marked text.
pub fn strip_markers(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    for token in tokenize(markup) {
        match &token.kind {
            TokenKind::Tag(tag) if tag.is_marker() => {}
            _ => out.push_str(&markup[token.range]),
        }
    }
    out
}

/// Counts opening marker tags.
pub fn count_markers(markup: &str) -> usize {
    tokenize(markup)
        .iter()
        .filter(|t| matches!(&t.kind, TokenKind::Tag(tag) if tag.is_marker() && !tag.closing))
        .count()
}
