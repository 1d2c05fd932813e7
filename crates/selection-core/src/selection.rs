//! Tracked selections.
//!
//! A [`Selection`] is an anchor/active pair of [`Position`]s. Everything else
//! (start/end order, direction, emptiness) is derived, never stored. The
//! caret-mode ("non-directional") invariant is enforced here: when the owning
//! set's [`SelectionPolicy`] forbids empty selections, a logical point is
//! materialized as a one-symbol selection whose anchor/active ordering still
//! encodes a direction.

use crate::document::{Coord, CoordSelection, Document};
use crate::position::{
    Anchor, CollapseFlags, Direction, LineBoundary, MoveMode, Position, SavedPosition,
};

/// Stable identity of a tracked selection.
///
/// Identity survives reconciliation with host-reported selection lists, so
/// subsystems that key off a particular selection (marks, per-selection
/// history) can follow it across value changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionId(u64);

impl SelectionId {
    /// Identity of a selection not (yet) owned by a set.
    pub const DETACHED: Self = Self(0);

    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric identity.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// The editing-mode flags shared by every selection in a set.
///
/// The flags live on the aggregate ([`crate::SelectionSet`]) and are passed
/// by value into selection operations, so all selections in a set always see
/// one policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Whether truly empty selections are allowed.
    pub can_be_empty: bool,
    /// Whether one-symbol selections are treated as non-directional points.
    pub can_be_non_directional: bool,
}

impl SelectionPolicy {
    /// Conventional mode: empty selections allowed, direction always meaningful.
    pub const fn standard() -> Self {
        Self {
            can_be_empty: true,
            can_be_non_directional: false,
        }
    }

    /// Caret mode: a point occupies exactly one symbol, never zero.
    pub const fn caret() -> Self {
        Self {
            can_be_empty: false,
            can_be_non_directional: true,
        }
    }
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Lightweight snapshot of a selection's endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedSelection {
    anchor: SavedPosition,
    active: SavedPosition,
}

/// One cursor/range: a fixed anchor and a moving active endpoint.
///
/// Each endpoint is exclusively owned; copying a selection deep-copies both
/// positions. Equality compares endpoint offsets and ignores identity.
#[derive(Debug, Clone)]
pub struct Selection {
    id: SelectionId,
    anchor: Position,
    active: Position,
}

impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        self.anchor == other.anchor && self.active == other.active
    }
}

impl Eq for Selection {}

impl Selection {
    /// Create a selection from two existing positions, trusting the caller.
    ///
    /// No caret-mode normalization is applied.
    pub fn from_positions(anchor: Position, active: Position) -> Self {
        Self {
            id: SelectionId::DETACHED,
            anchor,
            active,
        }
    }

    /// Create a caret at `position` (anchor and active coincide).
    pub fn caret(position: Position) -> Self {
        let anchor = position.clone();
        Self::from_positions(anchor, position)
    }

    /// Create a selection from a host-native selection, normalizing
    /// caret semantics at construction time.
    ///
    /// When `policy` forbids empty selections, an empty host selection is
    /// materialized as a one-symbol selection: backward when the point is at
    /// the document end, forward otherwise. On a document with no characters
    /// there is no symbol to occupy, and the selection stays empty.
    pub fn from_host(doc: &dyn Document, policy: SelectionPolicy, host: &CoordSelection) -> Self {
        let anchor = Position::from_coord(doc, host.anchor);
        let active = Position::from_coord(doc, host.active);
        let mut selection = Self::from_positions(anchor, active);
        selection.normalize(doc, policy);
        selection
    }

    /// The stable identity of this selection within its owning set.
    pub fn id(&self) -> SelectionId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: SelectionId) {
        self.id = id;
    }

    /// The fixed endpoint.
    pub fn anchor(&self) -> &Position {
        &self.anchor
    }

    /// The moving endpoint.
    pub fn active(&self) -> &Position {
        &self.active
    }

    /// Mutable access to the fixed endpoint.
    pub fn anchor_mut(&mut self) -> &mut Position {
        &mut self.anchor
    }

    /// Mutable access to the moving endpoint.
    pub fn active_mut(&mut self) -> &mut Position {
        &mut self.active
    }

    /// The endpoint selected by `which`.
    pub fn endpoint(&self, which: Anchor) -> &Position {
        match which {
            Anchor::Anchor => &self.anchor,
            Anchor::Active => &self.active,
        }
    }

    /// Mutable access to the endpoint selected by `which`.
    pub fn endpoint_mut(&mut self, which: Anchor) -> &mut Position {
        match which {
            Anchor::Anchor => &mut self.anchor,
            Anchor::Active => &mut self.active,
        }
    }

    /// The document-order first endpoint.
    pub fn start(&self) -> &Position {
        if self.is_reversed() {
            &self.active
        } else {
            &self.anchor
        }
    }

    /// The document-order last endpoint.
    pub fn end(&self) -> &Position {
        if self.is_reversed() {
            &self.anchor
        } else {
            &self.active
        }
    }

    /// Forward if the active endpoint is at or after the anchor.
    pub fn direction(&self) -> Direction {
        if self.is_reversed() {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// Returns `true` if the active endpoint precedes the anchor.
    pub fn is_reversed(&self) -> bool {
        self.active.offset() < self.anchor.offset()
    }

    /// Returns `true` if both endpoints coincide.
    pub fn is_empty(&self) -> bool {
        self.anchor.offset() == self.active.offset()
    }

    /// Length of the selection in symbols.
    pub fn length(&self) -> usize {
        self.end().offset() - self.start().offset()
    }

    /// Returns `true` if the selection occupies exactly one symbol.
    pub fn is_single_symbol(&self) -> bool {
        self.length() == 1
    }

    /// The selected text.
    pub fn text(&self, doc: &dyn Document) -> String {
        doc.text_range(self.start().offset(), self.end().offset())
    }

    /// Sum of squared coordinate distances between this selection's endpoints
    /// and a host selection's endpoints.
    pub fn coord_distance_sq(&self, host: &CoordSelection) -> usize {
        self.anchor.coord_distance_sq(host.anchor) + self.active.coord_distance_sq(host.active)
    }

    /// Save both endpoints to a lightweight snapshot.
    pub fn save(&self) -> SavedSelection {
        SavedSelection {
            anchor: self.anchor.save(),
            active: self.active.save(),
        }
    }

    /// Restore both endpoints from a snapshot.
    pub fn restore(&mut self, saved: SavedSelection) {
        self.anchor.restore(saved.anchor);
        self.active.restore(saved.active);
    }

    /// Swap anchor and active in place.
    pub fn reverse(&mut self) {
        self.anchor.swap(&mut self.active);
    }

    /// Collapse the selection to a point at the active end.
    ///
    /// With [`CollapseFlags::EXCLUDE_CHARACTER`] the point lands before the
    /// formerly-selected character instead of on it (mode transitions use
    /// this to pick "land before the cursor" vs "land after"). Under a
    /// caret-mode policy the resulting point is re-materialized as a
    /// one-symbol selection.
    pub fn collapse_to_active(
        &mut self,
        doc: &dyn Document,
        policy: SelectionPolicy,
        flags: CollapseFlags,
    ) {
        if flags.contains(CollapseFlags::EXCLUDE_CHARACTER) && !self.is_empty() {
            match self.direction() {
                Direction::Forward => {
                    self.active.move_left(doc, 1, LineBoundary::Cross);
                }
                Direction::Backward => {
                    self.active.move_right(doc, 1, LineBoundary::Cross);
                }
            }
        }
        self.anchor = self.active.clone();
        self.normalize(doc, policy);
    }

    /// Re-establish the owning policy's invariants after a mutation.
    ///
    /// Under a caret-mode policy an empty selection is materialized as a
    /// one-symbol selection at its point: backward when the point is at the
    /// document end, forward otherwise.
    pub fn normalize(&mut self, doc: &dyn Document, policy: SelectionPolicy) {
        if policy.can_be_empty || !self.is_empty() {
            return;
        }
        if doc.is_empty() {
            // A single empty line has no symbol to occupy.
            self.anchor.to_document_start();
            self.active.to_document_start();
            return;
        }

        if self.active.is_document_end(doc) {
            self.active.move_left(doc, 1, LineBoundary::Cross);
        } else {
            self.active.move_right(doc, 1, LineBoundary::Cross);
        }
    }

    /// Project this selection to the host's native two-endpoint form.
    ///
    /// Caret-mode selections are already materialized over whole symbols, so
    /// endpoints map through directly; a selection of the sole line-break
    /// symbol of an empty line therefore spans from that line's start to the
    /// next line's start. The only special case is a logically empty
    /// caret-mode selection, which can exist only on a document that is a
    /// single empty line and projects to an empty host selection at the
    /// document start.
    pub fn to_host(&self, policy: SelectionPolicy) -> CoordSelection {
        if !policy.can_be_empty && self.is_empty() {
            return CoordSelection::caret(Coord::new(0, 0));
        }
        CoordSelection::new(self.anchor.as_coord(), self.active.as_coord())
    }

    /// The host-native range of this selection, in document order.
    pub fn to_host_range(&self) -> (Coord, Coord) {
        (self.start().as_coord(), self.end().as_coord())
    }

    /// Returns `true` if this selection's host projection equals `host`.
    pub fn eq_host(&self, policy: SelectionPolicy, host: &CoordSelection) -> bool {
        self.to_host(policy) == *host
    }

    /// Move the selection `count` symbols to the right.
    ///
    /// [`MoveMode::Move`] collapses the anchor onto the active point first;
    /// [`MoveMode::Extend`] leaves the anchor fixed. Returns `true` if the
    /// full count was travelled.
    pub fn move_right(
        &mut self,
        doc: &dyn Document,
        policy: SelectionPolicy,
        mode: MoveMode,
        count: usize,
        boundary: LineBoundary,
    ) -> bool {
        self.collapse_for(policy, mode);
        let moved = self.active.move_right(doc, count, boundary);
        self.finish_move(doc, policy, mode);
        moved
    }

    /// Move the selection `count` symbols to the left.
    pub fn move_left(
        &mut self,
        doc: &dyn Document,
        policy: SelectionPolicy,
        mode: MoveMode,
        count: usize,
        boundary: LineBoundary,
    ) -> bool {
        self.collapse_for(policy, mode);
        let moved = self.active.move_left(doc, count, boundary);
        self.finish_move(doc, policy, mode);
        moved
    }

    /// Move the selection `count` lines down, clamping the column to the
    /// target line's length.
    ///
    /// With [`LineBoundary::Stop`] the move clamps at the last line; with
    /// [`LineBoundary::Cross`] running past it lands on the document end.
    pub fn move_down(
        &mut self,
        doc: &dyn Document,
        policy: SelectionPolicy,
        mode: MoveMode,
        count: usize,
        boundary: LineBoundary,
    ) -> bool {
        self.collapse_for(policy, mode);
        let target = self.active.line().saturating_add(count);
        let last = doc.line_count() - 1;
        let moved = if target > last {
            match boundary {
                LineBoundary::Stop => self.active.set_coord(
                    doc,
                    Coord::new(last, self.active.column()),
                ),
                LineBoundary::Cross => self.active.to_document_end(doc),
            }
            false
        } else {
            self.active
                .set_coord(doc, Coord::new(target, self.active.column()));
            true
        };
        self.finish_move(doc, policy, mode);
        moved
    }

    /// Move the selection `count` lines up, clamping the column to the
    /// target line's length.
    ///
    /// With [`LineBoundary::Stop`] the move clamps at the first line; with
    /// [`LineBoundary::Cross`] running past it lands on the document start.
    pub fn move_up(
        &mut self,
        doc: &dyn Document,
        policy: SelectionPolicy,
        mode: MoveMode,
        count: usize,
        boundary: LineBoundary,
    ) -> bool {
        self.collapse_for(policy, mode);
        let moved = if count > self.active.line() {
            match boundary {
                LineBoundary::Stop => self
                    .active
                    .set_coord(doc, Coord::new(0, self.active.column())),
                LineBoundary::Cross => self.active.to_document_start(),
            }
            false
        } else {
            let target = self.active.line() - count;
            self.active
                .set_coord(doc, Coord::new(target, self.active.column()));
            true
        };
        self.finish_move(doc, policy, mode);
        moved
    }

    fn collapse_for(&mut self, policy: SelectionPolicy, mode: MoveMode) {
        if mode != MoveMode::Move {
            return;
        }
        if !policy.can_be_empty && !self.is_empty() {
            // The logical point of a materialized one-symbol selection is its
            // start symbol; collapse there so a one-step move lands on the
            // adjacent symbol, not one past it.
            let point = self.start().clone();
            self.anchor = point.clone();
            self.active = point;
        } else {
            self.anchor = self.active.clone();
        }
    }

    fn finish_move(&mut self, doc: &dyn Document, policy: SelectionPolicy, mode: MoveMode) {
        if mode == MoveMode::Move {
            self.anchor = self.active.clone();
        }
        self.normalize(doc, policy);
    }

    /// Translate this selection's endpoints for one content change.
    ///
    /// Offsets are translated immediately; line/column re-derivation is
    /// deferred to [`revalidate`](Self::revalidate) so a batch composes
    /// left-to-right on offsets alone. Returns `false` when the selection
    /// was non-empty and fell entirely inside the removed range, meaning the
    /// owner should drop it.
    pub fn adjust_for_change(&mut self, change: &crate::document::ContentChange) -> bool {
        let lo = self.start().offset();
        let hi = self.end().offset();
        let ch_start = change.start;
        let ch_end = change.removed_end();

        // Change entirely after the selection: nothing to do. Text typed
        // exactly at a collapsed cursor still extends it (the end endpoint
        // moves on `ch_start == hi`).
        if ch_start > hi {
            return true;
        }

        if !self.is_empty() && ch_start <= lo && hi <= ch_end && change.removed_length > 0 {
            return false;
        }

        let translate = |offset: usize| -> usize {
            if offset >= ch_end {
                (offset as isize + change.delta()) as usize
            } else {
                // Inside the removed range: clamp to the replacement start.
                ch_start
            }
        };

        let new_lo = if ch_start < lo { translate(lo) } else { lo };
        let new_hi = if ch_start <= hi { translate(hi) } else { hi };

        let reversed = self.is_reversed();
        let (anchor_off, active_off) = if reversed {
            (new_hi, new_lo)
        } else {
            (new_lo, new_hi)
        };
        self.anchor.translate_offset(anchor_off);
        self.active.translate_offset(active_off);
        true
    }

    /// Re-derive both endpoints' line/column from their offsets after a
    /// batch of [`adjust_for_change`](Self::adjust_for_change) calls.
    pub fn revalidate(&mut self, doc: &dyn Document) {
        self.anchor.revalidate(doc);
        self.active.revalidate(doc);
    }

    pub(crate) fn repoint(&mut self, doc: &dyn Document, policy: SelectionPolicy, host: &CoordSelection) {
        let fresh = Selection::from_host(doc, policy, host);
        self.anchor = fresh.anchor;
        self.active = fresh.active;
    }
}
