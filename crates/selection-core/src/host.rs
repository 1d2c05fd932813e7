//! Host editor boundary.
//!
//! The engine mutates selections on behalf of a host editor but never talks
//! to a concrete UI: hosts implement [`HostEditor`] to expose their native
//! selection list and accept writes back. [`LocalEditor`] is an in-process
//! host backed by [`TextDocument`], used by tests, examples, and benchmarks.

use crate::document::{ContentChange, Coord, CoordSelection, Document, TextDocument};

/// Opaque identity of one editor binding (a document shown in one editor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditorId(u64);

impl EditorId {
    /// Create an editor id from a raw numeric identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric identifier.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// The host editor surface the engine reads from and writes back to.
pub trait HostEditor {
    /// Identity of this editor binding.
    fn id(&self) -> EditorId;

    /// The document shown in this editor.
    fn document(&self) -> &dyn Document;

    /// The host's current native selection list, in host order.
    fn selections(&self) -> Vec<CoordSelection>;

    /// Replace the host's native selection list.
    fn set_selections(&mut self, selections: &[CoordSelection]);

    /// Apply an edit batch to the document, translating the host's own native
    /// selections the way the host would, and return the applied changes.
    ///
    /// Changes in `edits` are applied in order; each change's offsets refer
    /// to the document as it stands when that change is applied.
    fn apply_edits(&mut self, edits: &[ContentChange]) -> Vec<ContentChange>;
}

/// An in-process [`HostEditor`] backed by a [`TextDocument`].
#[derive(Debug, Clone)]
pub struct LocalEditor {
    id: EditorId,
    document: TextDocument,
    selections: Vec<CoordSelection>,
}

impl LocalEditor {
    /// Create an editor over `text` with a single caret at the document start.
    pub fn new(id: EditorId, text: &str) -> Self {
        Self {
            id,
            document: TextDocument::from_text(text),
            selections: vec![CoordSelection::caret(Coord::new(0, 0))],
        }
    }

    /// The backing document.
    pub fn text_document(&self) -> &TextDocument {
        &self.document
    }

    /// Current document text.
    pub fn text(&self) -> String {
        self.document.text()
    }

    fn translate(offset: usize, change: &ContentChange) -> usize {
        if offset >= change.removed_end() {
            (offset as isize + change.delta()) as usize
        } else if offset >= change.start {
            // Inside the replaced range: land after the replacement, the way
            // hosts move a caret that text was typed over.
            change.start + change.inserted_length()
        } else {
            offset
        }
    }
}

impl HostEditor for LocalEditor {
    fn id(&self) -> EditorId {
        self.id
    }

    fn document(&self) -> &dyn Document {
        &self.document
    }

    fn selections(&self) -> Vec<CoordSelection> {
        self.selections.clone()
    }

    fn set_selections(&mut self, selections: &[CoordSelection]) {
        self.selections = selections.to_vec();
    }

    fn apply_edits(&mut self, edits: &[ContentChange]) -> Vec<ContentChange> {
        // Work on offsets so endpoint translation composes with each edit.
        let mut endpoints: Vec<(usize, usize)> = self
            .selections
            .iter()
            .map(|s| {
                (
                    self.document.offset_at(s.anchor),
                    self.document.offset_at(s.active),
                )
            })
            .collect();

        let mut applied = Vec::with_capacity(edits.len());
        for edit in edits {
            let change = self
                .document
                .replace(edit.start, edit.removed_length, &edit.inserted_text);
            for (anchor, active) in &mut endpoints {
                *anchor = Self::translate(*anchor, &change);
                *active = Self::translate(*active, &change);
            }
            applied.push(change);
        }

        self.selections = endpoints
            .into_iter()
            .map(|(anchor, active)| {
                CoordSelection::new(
                    self.document.coord_at(anchor),
                    self.document.coord_at(active),
                )
            })
            .collect();
        applied
    }
}
