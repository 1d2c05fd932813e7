//! Character scanners.
//!
//! [`Cursor`] walks a tracked [`Position`] symbol by symbol, caching the
//! current line's text so repeated steps don't re-fetch it. [`OffsetCursor`]
//! answers origin-relative character probes with a lazily-moved line window,
//! giving amortized O(1) access for monotonically increasing or decreasing
//! offsets (pair/quote matching probes many nearby offsets).
//!
//! Both scanners are transient: they must be discarded as soon as any
//! document change is processed.

use crate::document::Document;
use crate::position::{Direction, Position, SavedPosition};
use thiserror::Error;

/// Errors from scanner operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A relative offset projected outside the document.
    #[error("relative offset {relative} from origin {origin} is outside the document (length {length})")]
    OffsetOutOfRange {
        /// The requested origin-relative offset.
        relative: isize,
        /// The absolute offset of the origin.
        origin: usize,
        /// The document length in characters.
        length: usize,
    },
}

/// Where a successful [`Cursor::skip_while`] scan lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Select {
    /// The symbol before the last matching symbol.
    Previous,
    /// The last matching symbol.
    Current,
    /// The first non-matching symbol.
    #[default]
    Next,
}

/// How [`Cursor::skip_while`] treats the starting line's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineLimit {
    /// No limit: cross line boundaries freely.
    #[default]
    None,
    /// Cancel the scan entirely: restore the position and report failure.
    Cancel,
    /// Accept the boundary symbol as the landing point.
    Accept,
    /// Advance onto the adjacent line's first column in the scan direction
    /// before stopping (next line going forward, previous line going
    /// backward).
    AcceptNext,
}

/// Options for [`Cursor::skip_while`] / [`Cursor::skip_until`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipOptions {
    /// Landing point on a successful scan.
    pub select: Select,
    /// Behavior at the starting line's boundary.
    pub line_limit: LineLimit,
    /// Restore the starting position when the scan runs off the buffer edge
    /// without the predicate ever being falsified.
    pub restore_if_never_satisfied: bool,
}

/// A stateful scanner over one tracked position.
///
/// Holds the position mutably for its whole lifetime; the position is updated
/// in place as the cursor moves.
pub struct Cursor<'d, 'p> {
    doc: &'d dyn Document,
    position: &'p mut Position,
    chars: Vec<char>,
    line_start: usize,
    line_break: char,
}

impl<'d, 'p> Cursor<'d, 'p> {
    /// Create a cursor at `position`, reporting line breaks as `'\n'`.
    pub fn new(doc: &'d dyn Document, position: &'p mut Position) -> Self {
        Self::with_line_break(doc, position, '\n')
    }

    /// Create a cursor that reports line breaks to predicates as `line_break`.
    ///
    /// The sentinel is caller-suppliable so it cannot collide with sentinels a
    /// predicate reserves for other conditions.
    pub fn with_line_break(
        doc: &'d dyn Document,
        position: &'p mut Position,
        line_break: char,
    ) -> Self {
        let mut cursor = Self {
            doc,
            position,
            chars: Vec::new(),
            line_start: 0,
            line_break,
        };
        cursor.fetch_line();
        cursor
    }

    fn fetch_line(&mut self) {
        let line = self.position.line();
        self.chars = self
            .doc
            .line_text(line)
            .unwrap_or_default()
            .chars()
            .collect();
        self.line_start = self.doc.line_start_offset(line);
    }

    /// The tracked position.
    pub fn position(&self) -> &Position {
        self.position
    }

    /// The symbol under the cursor.
    ///
    /// Line breaks are reported as the configured sentinel; the document end
    /// has no symbol.
    pub fn symbol(&self) -> Option<char> {
        let column = self.position.column();
        if column < self.chars.len() {
            Some(self.chars[column])
        } else if self.position.offset() < self.doc.end_offset() {
            Some(self.line_break)
        } else {
            None
        }
    }

    /// Advance or retreat exactly one symbol, crossing line boundaries.
    ///
    /// Returns `false` (and does not move) only at the document start/end.
    pub fn skip(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => {
                let offset = self.position.offset();
                if offset >= self.doc.end_offset() {
                    return false;
                }
                if self.position.column() < self.chars.len() {
                    self.position.set_raw(
                        self.doc,
                        self.position.line(),
                        self.position.column() + 1,
                        offset + 1,
                    );
                } else {
                    // Stepping over the line break onto the next line.
                    self.position
                        .set_raw(self.doc, self.position.line() + 1, 0, offset + 1);
                    self.fetch_line();
                }
                true
            }
            Direction::Backward => {
                let offset = self.position.offset();
                if offset == 0 {
                    return false;
                }
                if self.position.column() > 0 {
                    self.position.set_raw(
                        self.doc,
                        self.position.line(),
                        self.position.column() - 1,
                        offset - 1,
                    );
                } else {
                    // Stepping onto the previous line's line break.
                    let line = self.position.line() - 1;
                    let column = self.doc.line_length(line);
                    self.position.set_raw(self.doc, line, column, offset - 1);
                    self.fetch_line();
                }
                true
            }
        }
    }

    /// Skip symbols while `predicate` holds, crossing line boundaries as the
    /// options allow.
    ///
    /// The predicate receives `(symbol, offset, line, column)`. On success the
    /// position lands according to [`SkipOptions::select`] (or the line-limit
    /// policy) and the call returns `true`. Reaching the buffer edge with the
    /// predicate still satisfied is a normal, reported outcome: the call
    /// returns `false`, leaving the position at the edge unless
    /// [`SkipOptions::restore_if_never_satisfied`] was set.
    pub fn skip_while(
        &mut self,
        direction: Direction,
        mut predicate: impl FnMut(char, usize, usize, usize) -> bool,
        options: SkipOptions,
    ) -> bool {
        let saved = self.position.save();
        let mut matched = 0usize;

        loop {
            let Some(symbol) = self.symbol() else {
                return self.exhausted(saved, options);
            };

            if !predicate(
                symbol,
                self.position.offset(),
                self.position.line(),
                self.position.column(),
            ) {
                return self.land(direction, options.select, matched);
            }
            matched += 1;

            if options.line_limit != LineLimit::None && self.at_line_edge(direction) {
                return self.line_boundary(direction, options.line_limit, saved);
            }

            if !self.skip(direction) {
                return self.exhausted(saved, options);
            }
        }
    }

    /// [`skip_while`](Self::skip_while) with the predicate inverted.
    pub fn skip_until(
        &mut self,
        direction: Direction,
        mut predicate: impl FnMut(char, usize, usize, usize) -> bool,
        options: SkipOptions,
    ) -> bool {
        self.skip_while(
            direction,
            move |c, offset, line, column| !predicate(c, offset, line, column),
            options,
        )
    }

    fn at_line_edge(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.position.column() >= self.chars.len(),
            Direction::Backward => self.position.column() == 0,
        }
    }

    fn land(&mut self, direction: Direction, select: Select, matched: usize) -> bool {
        if matched > 0 {
            let back = match select {
                Select::Next => 0,
                Select::Current => 1,
                Select::Previous => 2,
            };
            for _ in 0..back {
                if !self.skip(direction.opposite()) {
                    break;
                }
            }
        }
        true
    }

    fn line_boundary(&mut self, direction: Direction, limit: LineLimit, saved: SavedPosition) -> bool {
        match limit {
            LineLimit::None => unreachable!("checked by the caller"),
            LineLimit::Cancel => {
                self.position.restore(saved);
                self.fetch_line();
                false
            }
            LineLimit::Accept => true,
            LineLimit::AcceptNext => {
                match direction {
                    Direction::Forward => {
                        // The boundary symbol is the line break, so a next
                        // line always exists here.
                        self.position.to_next_line_start(self.doc);
                    }
                    Direction::Backward => {
                        if !self.position.is_first_line() {
                            let line = self.position.line() - 1;
                            let offset = self.doc.line_start_offset(line);
                            self.position.set_raw(self.doc, line, 0, offset);
                        }
                    }
                }
                self.fetch_line();
                true
            }
        }
    }

    fn exhausted(&mut self, saved: SavedPosition, options: SkipOptions) -> bool {
        if options.restore_if_never_satisfied {
            self.position.restore(saved);
            self.fetch_line();
        }
        false
    }
}

/// An origin-relative character window.
///
/// Lets lookahead code probe symbols around an origin without mutating the
/// tracked position until a match is [committed](Self::commit).
pub struct OffsetCursor<'d, 'p> {
    doc: &'d dyn Document,
    position: &'p mut Position,
    line: usize,
    chars: Vec<char>,
    line_start: usize,
    line_break: char,
}

impl<'d, 'p> OffsetCursor<'d, 'p> {
    /// Create an offset cursor anchored at `position`, reporting line breaks
    /// as `'\n'`.
    pub fn new(doc: &'d dyn Document, position: &'p mut Position) -> Self {
        Self::with_line_break(doc, position, '\n')
    }

    /// Create an offset cursor with a caller-supplied line-break sentinel.
    pub fn with_line_break(
        doc: &'d dyn Document,
        position: &'p mut Position,
        line_break: char,
    ) -> Self {
        let line = position.line();
        let chars: Vec<char> = doc.line_text(line).unwrap_or_default().chars().collect();
        let line_start = doc.line_start_offset(line);
        Self {
            doc,
            position,
            line,
            chars,
            line_start,
            line_break,
        }
    }

    /// The origin position.
    pub fn origin(&self) -> &Position {
        self.position
    }

    fn absolute(&self, relative: isize) -> Option<usize> {
        let absolute = self.position.offset() as isize + relative;
        if absolute < 0 || absolute > self.doc.end_offset() as isize {
            return None;
        }
        Some(absolute as usize)
    }

    /// Slide the cached line window until it covers `absolute`.
    fn seek(&mut self, absolute: usize) -> usize {
        while absolute > self.line_start + self.chars.len() {
            self.line += 1;
            self.line_start += self.chars.len() + 1;
            self.chars = self
                .doc
                .line_text(self.line)
                .unwrap_or_default()
                .chars()
                .collect();
        }
        while absolute < self.line_start {
            self.line -= 1;
            self.chars = self
                .doc
                .line_text(self.line)
                .unwrap_or_default()
                .chars()
                .collect();
            self.line_start -= self.chars.len() + 1;
        }
        absolute - self.line_start
    }

    /// The symbol at the given origin-relative offset.
    ///
    /// Line breaks are reported as the configured sentinel; offsets outside
    /// the document yield `None`.
    pub fn char(&mut self, relative: isize) -> Option<char> {
        let absolute = self.absolute(relative)?;
        if absolute >= self.doc.end_offset() {
            return None;
        }
        let column = self.seek(absolute);
        if column < self.chars.len() {
            Some(self.chars[column])
        } else {
            Some(self.line_break)
        }
    }

    /// The absolute offset of the given origin-relative offset, if it lies
    /// inside the document.
    pub fn offset(&self, relative: isize) -> Option<usize> {
        self.absolute(relative)
    }

    /// A validated [`Position`] for the given origin-relative offset, if it
    /// lies inside the document.
    pub fn position(&mut self, relative: isize) -> Option<Position> {
        let absolute = self.absolute(relative)?;
        let column = self.seek(absolute);
        Some(Position::from_raw(self.line, column, absolute))
    }

    /// Re-anchor the origin at the given relative offset.
    ///
    /// Subsequent probes are relative to the new origin. Out-of-range offsets
    /// leave the origin untouched and report an error.
    pub fn commit(&mut self, relative: isize) -> Result<(), ScanError> {
        let Some(absolute) = self.absolute(relative) else {
            return Err(ScanError::OffsetOutOfRange {
                relative,
                origin: self.position.offset(),
                length: self.doc.end_offset(),
            });
        };
        let column = self.seek(absolute);
        self.position.set_raw(self.doc, self.line, column, absolute);
        Ok(())
    }
}
