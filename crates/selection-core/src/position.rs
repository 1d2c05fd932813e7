//! Tracked positions.
//!
//! A [`Position`] is a (line, column, offset) triple addressing one text
//! symbol: a character, or the implicit line break at the end of a line.
//! The triple is kept internally consistent through two update paths:
//! a *validated* path that re-derives the offset through the document, and a
//! *fast* path for callers that already computed a consistent triple (checked
//! against the validated computation in debug builds).

use crate::document::{Coord, Document};
use bitflags::bitflags;
use std::cmp::Ordering;

/// Scan and movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the document end.
    Forward,
    /// Toward the document start.
    Backward,
}

impl Direction {
    /// The opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Policy for horizontal movement reaching a line boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBoundary {
    /// Stop at the line boundary.
    Stop,
    /// Continue onto the adjacent line.
    Cross,
}

/// Whether a directional selection helper collapses the anchor first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    /// Collapse the anchor onto the active end, then move both.
    Move,
    /// Leave the anchor fixed and move only the active end.
    Extend,
}

/// Selector for one endpoint of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The fixed endpoint.
    Anchor,
    /// The moving endpoint.
    Active,
}

bitflags! {
    /// Flags controlling [`collapse_to_active`](crate::Selection::collapse_to_active).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CollapseFlags: u8 {
        /// Land the resulting point before the formerly-selected character
        /// instead of on it.
        const EXCLUDE_CHARACTER = 1;
    }
}

/// Lightweight snapshot of a [`Position`], used to restore a scan that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedPosition {
    line: usize,
    column: usize,
    offset: usize,
}

/// A tracked (line, column, offset) triple bound to one document.
///
/// Positions address symbols: column `line_length` is the line break joining
/// a line to the next. Invariant: `offset == document.offset_at((line, column))`
/// after every validated update. Equality and ordering compare offsets only.
#[derive(Debug, Clone)]
pub struct Position {
    line: usize,
    column: usize,
    offset: usize,
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl Eq for Position {}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Position {
    /// Position at the document start.
    pub fn document_start() -> Self {
        Self {
            line: 0,
            column: 0,
            offset: 0,
        }
    }

    /// Position at the document end.
    pub fn document_end(doc: &dyn Document) -> Self {
        Self::from_offset(doc, doc.end_offset())
    }

    /// Create a position from an absolute character offset (validated, clamped).
    pub fn from_offset(doc: &dyn Document, offset: usize) -> Self {
        let offset = offset.min(doc.end_offset());
        let coord = doc.coord_at(offset);
        Self {
            line: coord.line,
            column: coord.column,
            offset,
        }
    }

    /// Create a position from a host coordinate (validated, clamped).
    pub fn from_coord(doc: &dyn Document, coord: Coord) -> Self {
        let offset = doc.offset_at(coord);
        // Re-derive so an over-length column comes back normalized.
        Self::from_offset(doc, offset)
    }

    /// Create a position from a caller-computed triple without validation.
    ///
    /// The caller guarantees `offset == document.offset_at((line, column))`.
    pub fn from_raw(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Zero-based line index.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Zero-based column (symbol index within the line).
    pub fn column(&self) -> usize {
        self.column
    }

    /// Absolute character offset from the document start.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The host-native coordinate of this position.
    pub fn as_coord(&self) -> Coord {
        Coord::new(self.line, self.column)
    }

    /// Character offset of the start of the containing line.
    pub fn line_start_offset(&self) -> usize {
        self.offset - self.column
    }

    /// Returns `true` if this position is at column 0.
    pub fn is_first_character(&self) -> bool {
        self.column == 0
    }

    /// Returns `true` if this position is on the last character of its line,
    /// excluding the line break.
    pub fn is_last_character(&self, doc: &dyn Document) -> bool {
        let len = doc.line_length(self.line);
        len > 0 && self.column + 1 == len
    }

    /// Returns `true` if this position addresses the implicit line break.
    pub fn is_line_break(&self, doc: &dyn Document) -> bool {
        self.column == doc.line_length(self.line) && self.line + 1 < doc.line_count()
    }

    /// Returns `true` if this position is on the first line.
    pub fn is_first_line(&self) -> bool {
        self.line == 0
    }

    /// Returns `true` if this position is on the last line.
    pub fn is_last_line(&self, doc: &dyn Document) -> bool {
        self.line + 1 >= doc.line_count()
    }

    /// Returns `true` if this position is at offset 0.
    pub fn is_document_start(&self) -> bool {
        self.offset == 0
    }

    /// Returns `true` if this position is one past the last symbol.
    pub fn is_document_end(&self, doc: &dyn Document) -> bool {
        self.offset >= doc.end_offset()
    }

    /// The symbol at this position.
    ///
    /// The implicit line break is reported as `line_break`; the document end
    /// has no symbol and yields `None`. The sentinel is caller-suppliable so
    /// that it cannot collide with other sentinels a predicate may reserve.
    pub fn symbol_or(&self, doc: &dyn Document, line_break: char) -> Option<char> {
        match doc.char_at(self.offset) {
            Some('\n') => Some(line_break),
            other => other,
        }
    }

    /// The symbol at this position, with `'\n'` for line breaks.
    pub fn symbol(&self, doc: &dyn Document) -> Option<char> {
        self.symbol_or(doc, '\n')
    }

    /// Squared coordinate distance to a host coordinate.
    ///
    /// Not a Euclidean distance: the square root is never taken, because the
    /// only consumer (selection reconciliation) compares distances.
    pub fn coord_distance_sq(&self, to: Coord) -> usize {
        let dl = self.line.abs_diff(to.line);
        let dc = self.column.abs_diff(to.column);
        dl * dl + dc * dc
    }

    /// Exchange the full state of two positions.
    pub fn swap(&mut self, other: &mut Position) {
        std::mem::swap(self, other);
    }

    /// Save the current state to a lightweight snapshot.
    pub fn save(&self) -> SavedPosition {
        SavedPosition {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Restore a previously saved state.
    pub fn restore(&mut self, saved: SavedPosition) {
        self.line = saved.line;
        self.column = saved.column;
        self.offset = saved.offset;
    }

    /// Validated update from an absolute offset (clamped).
    pub fn set_offset(&mut self, doc: &dyn Document, offset: usize) {
        *self = Self::from_offset(doc, offset);
    }

    /// Validated update from a host coordinate (clamped).
    pub fn set_coord(&mut self, doc: &dyn Document, coord: Coord) {
        *self = Self::from_coord(doc, coord);
    }

    /// Translate the offset without re-deriving line/column.
    ///
    /// Leaves the triple inconsistent until a validated update runs; used by
    /// batch document-change adjustment, where line/column are only re-derived
    /// once per batch.
    pub(crate) fn translate_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    /// Re-derive line/column from the current offset (clamped).
    pub(crate) fn revalidate(&mut self, doc: &dyn Document) {
        *self = Self::from_offset(doc, self.offset);
    }

    /// Fast update from a caller-computed triple.
    ///
    /// The caller guarantees the triple is consistent; debug builds cross-check
    /// it against the validated computation.
    pub fn set_raw(&mut self, doc: &dyn Document, line: usize, column: usize, offset: usize) {
        debug_assert_eq!(
            doc.offset_at(Coord::new(line, column)),
            offset,
            "inconsistent fast-path position update: ({line}, {column}) != offset {offset}",
        );
        self.line = line;
        self.column = column;
        self.offset = offset;
    }

    /// Move to the first character of the current line.
    pub fn to_line_start(&mut self) {
        self.offset -= self.column;
        self.column = 0;
    }

    /// Move to the first non-whitespace character of the current line, or to
    /// the line break if the line is blank.
    pub fn to_first_non_blank(&mut self, doc: &dyn Document) {
        let text = doc.line_text(self.line).unwrap_or_default();
        let column = text
            .chars()
            .position(|c| !c.is_whitespace())
            .unwrap_or_else(|| text.chars().count());
        let offset = self.line_start_offset() + column;
        self.set_raw(doc, self.line, column, offset);
    }

    /// Move to the last character of the current line, excluding the line
    /// break. On an empty line this is column 0.
    pub fn to_last_character(&mut self, doc: &dyn Document) {
        let len = doc.line_length(self.line);
        let column = len.saturating_sub(1);
        let offset = self.line_start_offset() + column;
        self.set_raw(doc, self.line, column, offset);
    }

    /// Move to the line break of the current line (the position one past the
    /// last character).
    pub fn to_line_break(&mut self, doc: &dyn Document) {
        let len = doc.line_length(self.line);
        let offset = self.line_start_offset() + len;
        self.set_raw(doc, self.line, len, offset);
    }

    /// Move to the previous line's line break.
    ///
    /// Returns `false` (no move) on the first line.
    pub fn to_previous_line_break(&mut self, doc: &dyn Document) -> bool {
        if self.is_first_line() {
            return false;
        }

        let offset = self.line_start_offset() - 1;
        let line = self.line - 1;
        let column = doc.line_length(line);
        self.set_raw(doc, line, column, offset);
        true
    }

    /// Move to the next line's first character.
    ///
    /// Returns `false` (no move) on the last line.
    pub fn to_next_line_start(&mut self, doc: &dyn Document) -> bool {
        if self.is_last_line(doc) {
            return false;
        }

        let offset = self.line_start_offset() + doc.line_length(self.line) + 1;
        self.set_raw(doc, self.line + 1, 0, offset);
        true
    }

    /// Move to the document start.
    pub fn to_document_start(&mut self) {
        self.line = 0;
        self.column = 0;
        self.offset = 0;
    }

    /// Move to the document end.
    pub fn to_document_end(&mut self, doc: &dyn Document) {
        *self = Self::document_end(doc);
    }

    /// Move `count` symbols to the right.
    ///
    /// With [`LineBoundary::Stop`] the move clamps at the current line's
    /// break; with [`LineBoundary::Cross`] it continues onto following lines,
    /// clamping at the document end. Returns `true` if the full count was
    /// travelled.
    pub fn move_right(&mut self, doc: &dyn Document, count: usize, boundary: LineBoundary) -> bool {
        match boundary {
            LineBoundary::Stop => {
                let len = doc.line_length(self.line);
                let column = (self.column + count).min(len);
                let moved = column - self.column;
                let offset = self.offset + moved;
                self.set_raw(doc, self.line, column, offset);
                moved == count
            }
            LineBoundary::Cross => {
                let target = self.offset.saturating_add(count);
                let clamped = target.min(doc.end_offset());
                let within_line = doc.line_length(self.line).saturating_sub(self.column);
                if clamped - self.offset <= within_line {
                    let column = self.column + (clamped - self.offset);
                    self.set_raw(doc, self.line, column, clamped);
                } else {
                    self.set_offset(doc, clamped);
                }
                clamped == target
            }
        }
    }

    /// Move `count` symbols to the left.
    ///
    /// With [`LineBoundary::Stop`] the move clamps at column 0; with
    /// [`LineBoundary::Cross`] it continues onto preceding lines, clamping at
    /// the document start. Returns `true` if the full count was travelled.
    pub fn move_left(&mut self, doc: &dyn Document, count: usize, boundary: LineBoundary) -> bool {
        match boundary {
            LineBoundary::Stop => {
                let moved = count.min(self.column);
                let column = self.column - moved;
                let offset = self.offset - moved;
                self.set_raw(doc, self.line, column, offset);
                moved == count
            }
            LineBoundary::Cross => {
                let moved = count.min(self.offset);
                let target = self.offset - moved;
                if moved <= self.column {
                    self.set_raw(doc, self.line, self.column - moved, target);
                } else {
                    self.set_offset(doc, target);
                }
                moved == count
            }
        }
    }
}
