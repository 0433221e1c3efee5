//! Translation of snapshot offsets to current offsets across edits.
//!
//! Suggestions are anchored to byte ranges of the text that was analyzed.
//! Every later change to the text is appended here as a [`TextEdit`], so an
//! anchor can be carried forward; a range touched by an edit is tombstoned.

use std::ops::Range;

/// A single replacement in plain-text coordinates of the text it applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEdit {
    pub start: usize,
    pub removed: usize,
    pub inserted: usize,
}

impl TextEdit {
    /// Computes the smallest single edit turning `before` into `after`.
    ///
    /// Returns `None` when the texts are equal.
    pub fn between(before: &str, after: &str) -> Option<TextEdit> {
        if before == after {
            return None;
        }
        let (b, a) = (before.as_bytes(), after.as_bytes());

        let mut prefix = b.iter().zip(a.iter()).take_while(|(x, y)| x == y).count();
        while !before.is_char_boundary(prefix) {
            prefix -= 1;
        }

        let max_suffix = (b.len() - prefix).min(a.len() - prefix);
        let mut suffix = b
            .iter()
            .rev()
            .zip(a.iter().rev())
            .take(max_suffix)
            .take_while(|(x, y)| x == y)
            .count();
        while !before.is_char_boundary(b.len() - suffix) {
            suffix -= 1;
        }

        Some(TextEdit {
            start: prefix,
            removed: b.len() - prefix - suffix,
            inserted: a.len() - prefix - suffix,
        })
    }

    fn end(&self) -> usize {
        self.start + self.removed
    }

    /// Carries a range across this edit, or `None` if the edit touches it.
    fn map(&self, range: Range<usize>) -> Option<Range<usize>> {
        if range.end <= self.start {
            Some(range)
        } else if range.start >= self.end() {
            let shifted = |p: usize| p - self.removed + self.inserted;
            Some(shifted(range.start)..shifted(range.end))
        } else {
            None
        }
    }
}

/// Ordered log of edits since a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionMap {
    edits: Vec<TextEdit>,
}

impl PositionMap {
    /// Creates an identity map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets every edit, making the current text the new snapshot.
    pub fn reset(&mut self) {
        self.edits.clear();
    }

    /// Appends an edit.
    pub fn record(&mut self, edit: TextEdit) {
        self.edits.push(edit);
    }

    /// Appends the change between two successive texts, if any.
    pub fn record_change(&mut self, before: &str, after: &str) {
        if let Some(edit) = TextEdit::between(before, after) {
            self.record(edit);
        }
    }

    /// Number of recorded edits.
    pub fn edit_count(&self) -> usize {
        self.edits.len()
    }

    /// Maps a snapshot range to the current text.
    pub fn map_range(&self, range: Range<usize>) -> Option<Range<usize>> {
        self.edits
            .iter()
            .try_fold(range, |current, edit| edit.map(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_finds_replacement() {
        let edit = TextEdit::between("Their going home", "They're going home").unwrap();
        assert_eq!(
            edit,
            TextEdit {
                start: 3,
                removed: 2,
                inserted: 4
            }
        );
    }

    #[test]
    fn between_equal_texts_is_none() {
        assert_eq!(TextEdit::between("same", "same"), None);
    }

    #[test]
    fn between_respects_char_boundaries() {
        let edit = TextEdit::between("café", "cafè").unwrap();
        assert_eq!(edit.start, 3);
        assert_eq!(edit.removed, 2);
        assert_eq!(edit.inserted, 2);
    }

    #[test]
    fn between_handles_pure_insertion() {
        let edit = TextEdit::between("ab", "aXb").unwrap();
        assert_eq!(
            edit,
            TextEdit {
                start: 1,
                removed: 0,
                inserted: 1
            }
        );
    }

    #[test]
    fn ranges_before_an_edit_are_unchanged() {
        let mut map = PositionMap::new();
        map.record_change("teh cat sat", "teh cat sits");
        assert_eq!(map.map_range(0..3), Some(0..3));
    }

    #[test]
    fn ranges_after_an_edit_shift() {
        let mut map = PositionMap::new();
        map.record_change("teh cat", "the big cat");
        // "cat" was at 4..7 and moves right by four bytes.
        assert_eq!(map.map_range(4..7), Some(8..11));
    }

    #[test]
    fn overlapping_ranges_are_tombstoned() {
        let mut map = PositionMap::new();
        map.record_change("their going", "they're going");
        assert_eq!(map.map_range(0..5), None);
    }

    #[test]
    fn edits_compose_in_order() {
        let mut map = PositionMap::new();
        map.record_change("a b c", "aa b c");
        map.record_change("aa b c", "aa bb c");
        assert_eq!(map.map_range(4..5), Some(6..7));
        assert_eq!(map.edit_count(), 2);

        map.reset();
        assert_eq!(map.map_range(4..5), Some(4..5));
    }
}
