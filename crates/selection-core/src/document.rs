//! Host document boundary.
//!
//! The engine never owns the text it tracks selections over; it reads the host's
//! document through the [`Document`] trait and receives edits as [`ContentChange`]
//! batches. [`TextDocument`] is a Rope-backed reference implementation used by
//! in-process hosts, tests, and benchmarks.

use ropey::Rope;
use std::cmp::Ordering;

/// Host-native position: zero-based (line, column) coordinates.
///
/// Columns are counted in characters. Column `line_length` addresses the
/// implicit line-break symbol that joins a line to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Coord {
    /// Create a new host-native position.
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Host-native selection: an anchor endpoint and an active (moving) endpoint.
///
/// Endpoints are boundary coordinates, so `anchor == active` is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordSelection {
    /// The fixed endpoint.
    pub anchor: Coord,
    /// The moving endpoint, where the host draws the cursor.
    pub active: Coord,
}

impl CoordSelection {
    /// Create a selection from its two endpoints.
    pub const fn new(anchor: Coord, active: Coord) -> Self {
        Self { anchor, active }
    }

    /// Create a caret (empty selection) at `position`.
    pub const fn caret(position: Coord) -> Self {
        Self {
            anchor: position,
            active: position,
        }
    }

    /// The document-order start of the selection.
    pub fn start(&self) -> Coord {
        self.anchor.min(self.active)
    }

    /// The document-order end of the selection.
    pub fn end(&self) -> Coord {
        self.anchor.max(self.active)
    }

    /// Returns `true` if both endpoints coincide.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Returns `true` if the active endpoint precedes the anchor.
    pub fn is_reversed(&self) -> bool {
        self.active < self.anchor
    }
}

/// One text replacement, expressed in absolute character offsets.
///
/// Semantics follow the host's change notifications: `start` is an offset in
/// the document **at the time this change is applied**, `removed_length`
/// characters starting there are removed, and `inserted_text` takes their
/// place. Changes within a batch must be pre-sorted by `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChange {
    /// Start character offset of the replaced range.
    pub start: usize,
    /// Length of the removed range in characters (may be zero).
    pub removed_length: usize,
    /// Replacement text (may be empty).
    pub inserted_text: String,
}

impl ContentChange {
    /// Create a replacement change.
    pub fn new(start: usize, removed_length: usize, inserted_text: impl Into<String>) -> Self {
        Self {
            start,
            removed_length,
            inserted_text: inserted_text.into(),
        }
    }

    /// Create a pure insertion at `start`.
    pub fn insertion(start: usize, text: impl Into<String>) -> Self {
        Self::new(start, 0, text)
    }

    /// Create a pure deletion of `length` characters at `start`.
    pub fn deletion(start: usize, length: usize) -> Self {
        Self::new(start, length, "")
    }

    /// Length of `inserted_text` in characters.
    pub fn inserted_length(&self) -> usize {
        self.inserted_text.chars().count()
    }

    /// Exclusive end character offset of the removed range, in the pre-change document.
    pub fn removed_end(&self) -> usize {
        self.start.saturating_add(self.removed_length)
    }

    /// Net character-count change: `inserted_length - removed_length`.
    pub fn delta(&self) -> isize {
        self.inserted_length() as isize - self.removed_length as isize
    }

    /// Returns `true` if the change removes and inserts nothing.
    pub fn is_noop(&self) -> bool {
        self.removed_length == 0 && self.inserted_text.is_empty()
    }
}

/// Read access to the host's document model.
///
/// Offsets are character offsets from the document start; the implicit
/// line-break between lines counts as one character. All lookups clamp
/// out-of-range input to the document bounds rather than panicking.
pub trait Document {
    /// Total line count. An empty document has one (empty) line.
    fn line_count(&self) -> usize;

    /// Total character count, line breaks included.
    fn char_count(&self) -> usize;

    /// Text of the given line, excluding the trailing line break.
    ///
    /// Returns `None` for out-of-range line numbers.
    fn line_text(&self, line: usize) -> Option<String>;

    /// Length in characters of the given line, excluding the line break.
    fn line_length(&self, line: usize) -> usize {
        self.line_text(line).map_or(0, |t| t.chars().count())
    }

    /// Character offset of the first character of the given line.
    fn line_start_offset(&self, line: usize) -> usize;

    /// Character offset for a host coordinate, clamped to the document.
    fn offset_at(&self, coord: Coord) -> usize;

    /// Host coordinate for a character offset, clamped to the document.
    fn coord_at(&self, offset: usize) -> Coord;

    /// Character at the given absolute offset, if in range.
    ///
    /// Line breaks are reported as `'\n'`.
    fn char_at(&self, offset: usize) -> Option<char> {
        if offset >= self.char_count() {
            return None;
        }
        let coord = self.coord_at(offset);
        let text = self.line_text(coord.line)?;
        text.chars().nth(coord.column).or(Some('\n'))
    }

    /// Text of the `[start, end)` character-offset range, clamped.
    fn text_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.char_count());
        (start.min(end)..end)
            .filter_map(|offset| self.char_at(offset))
            .collect()
    }

    /// Offset one past the last character of the document.
    fn end_offset(&self) -> usize {
        self.char_count()
    }

    /// Coordinate of the document end.
    fn end_coord(&self) -> Coord {
        self.coord_at(self.end_offset())
    }

    /// Returns `true` if the document contains no characters.
    fn is_empty(&self) -> bool {
        self.char_count() == 0
    }
}

/// Rope-backed [`Document`] implementation.
///
/// Rope provides O(log n) line/offset conversion, suitable for large documents.
#[derive(Debug, Clone, Default)]
pub struct TextDocument {
    rope: Rope,
}

impl TextDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a document from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get the complete text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace `removed_length` characters at `start` with `text`, returning
    /// the change record describing the edit.
    pub fn replace(&mut self, start: usize, removed_length: usize, text: &str) -> ContentChange {
        let start = start.min(self.rope.len_chars());
        let end = start.saturating_add(removed_length).min(self.rope.len_chars());

        if start < end {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }

        ContentChange::new(start, end - start, text)
    }

    /// Apply a batch of changes in order.
    ///
    /// Each change's offsets refer to the document as it stands when that
    /// change is applied, matching host change-notification semantics.
    pub fn apply(&mut self, changes: &[ContentChange]) {
        for change in changes {
            self.replace(change.start, change.removed_length, &change.inserted_text);
        }
    }
}

impl Document for TextDocument {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        Some(text)
    }

    fn line_length(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }

        let start = self.rope.line_to_char(line);
        let end = if line + 1 < self.rope.len_lines() {
            // Exclude the line break before the next line.
            self.rope.line_to_char(line + 1) - 1
        } else {
            self.rope.len_chars()
        };
        end - start
    }

    fn line_start_offset(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line)
    }

    fn offset_at(&self, coord: Coord) -> usize {
        let line = coord.line.min(self.rope.len_lines().saturating_sub(1));
        let start = self.rope.line_to_char(line);
        start + coord.column.min(self.line_length(line))
    }

    fn coord_at(&self, offset: usize) -> Coord {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        let column = offset - self.rope.line_to_char(line);
        Coord::new(line, column)
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        if offset < self.rope.len_chars() {
            Some(self.rope.char(offset))
        } else {
            None
        }
    }

    fn text_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.rope.len_chars());
        let start = start.min(end);
        self.rope.slice(start..end).to_string()
    }
}
