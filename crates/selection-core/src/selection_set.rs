//! Tracked selection sets and host reconciliation.
//!
//! A [`SelectionSet`] owns the full set of cursors for one (document, editor)
//! pair. It keeps every owned [`Selection`] valid as the document changes,
//! reconciles the set against externally-driven host selection reports while
//! preserving per-selection identity, and offers the bulk-mutation entry
//! points command implementations build on.

use crate::document::{ContentChange, CoordSelection, Document};
use crate::host::{EditorId, HostEditor};
use crate::position::Position;
use crate::selection::{Selection, SelectionId, SelectionPolicy};
use std::collections::HashMap;

/// Handle to a detached-but-synchronized copy of a selection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CopyId(u64);

impl CopyId {
    /// The raw numeric identifier.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// What a [`SelectionEvent`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEventKind {
    /// Selections were adjusted for a document change batch.
    DocumentAdjusted,
    /// Selections were reconciled against a host selection report.
    Reconciled,
    /// Selections were mutated through a bulk-update entry point.
    Mutated,
    /// Selections were written back to the host.
    Committed,
    /// Selections were restored from a saved copy.
    Restored,
}

/// Record of one selection-set change, delivered to subscribers.
#[derive(Debug, Clone)]
pub struct SelectionEvent {
    /// What changed.
    pub kind: SelectionEventKind,
    /// Version before the change.
    pub old_version: u64,
    /// Version after the change.
    pub new_version: u64,
    /// Selection count after the change.
    pub selection_count: usize,
}

/// Selection event callback function type.
pub type SelectionEventCallback = Box<dyn FnMut(&SelectionEvent) + Send>;

struct SelectionCopy {
    id: CopyId,
    selections: Vec<Selection>,
}

/// The full set of cursors for one (document, editor) pair.
///
/// Selections are kept in host order; the selection at index 0 is the main
/// selection. The order is meaningful: the index is a stable handle other
/// subsystems use alongside [`SelectionId`]. Selections are not required to
/// be sorted or non-overlapping; overlap resolution is a caller concern.
pub struct SelectionSet {
    selections: Vec<Selection>,
    policy: SelectionPolicy,
    document_end: Position,
    committing: bool,
    copies: Vec<SelectionCopy>,
    next_selection_id: u64,
    next_copy_id: u64,
    version: u64,
    callbacks: Vec<SelectionEventCallback>,
}

impl SelectionSet {
    /// Create a set tracking `host_selections` over `doc`.
    pub fn new(
        doc: &dyn Document,
        policy: SelectionPolicy,
        host_selections: &[CoordSelection],
    ) -> Self {
        let mut set = Self {
            selections: Vec::with_capacity(host_selections.len()),
            policy,
            document_end: Position::document_end(doc),
            committing: false,
            copies: Vec::new(),
            next_selection_id: 0,
            next_copy_id: 0,
            version: 0,
            callbacks: Vec::new(),
        };
        for host in host_selections {
            let mut selection = Selection::from_host(doc, policy, host);
            selection.set_id(set.alloc_id());
            set.selections.push(selection);
        }
        set
    }

    fn alloc_id(&mut self) -> SelectionId {
        self.next_selection_id += 1;
        SelectionId::new(self.next_selection_id)
    }

    /// The tracked selections, in host order.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// The main selection (index 0), if the set is not empty.
    pub fn main(&self) -> Option<&Selection> {
        self.selections.first()
    }

    /// Number of tracked selections.
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Returns `true` if no selections remain.
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// The shared editing-mode policy.
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Change the shared policy, re-normalizing every selection under it.
    pub fn set_policy(&mut self, doc: &dyn Document, policy: SelectionPolicy) {
        self.policy = policy;
        for selection in &mut self.selections {
            selection.normalize(doc, policy);
        }
        self.bump(SelectionEventKind::Mutated);
    }

    /// The cached document end position.
    pub fn document_end(&self) -> &Position {
        &self.document_end
    }

    /// Current version number, incremented by every mutating pass.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns `true` while the engine is writing its own state to the host.
    pub fn is_committing(&self) -> bool {
        self.committing
    }

    /// Subscribe to selection-set change events.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&SelectionEvent) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    fn bump(&mut self, kind: SelectionEventKind) {
        let old_version = self.version;
        self.version += 1;
        let event = SelectionEvent {
            kind,
            old_version,
            new_version: self.version,
            selection_count: self.selections.len(),
        };
        for callback in &mut self.callbacks {
            callback(&event);
        }
    }

    /// Process a document change batch.
    ///
    /// Every owned selection, including those in live copies, is translated
    /// per change; selections whose range fell entirely inside a deletion are
    /// dropped and the set compacted. The batch must be pre-sorted by change
    /// start so offset deltas compose left-to-right. Ignored while the
    /// engine's own edit is in flight (`committing`), since
    /// [`edit_and_sync`](Self::edit_and_sync) re-synchronizes directly from
    /// the host's post-edit report.
    pub fn notify_document_changed(&mut self, doc: &dyn Document, changes: &[ContentChange]) {
        if self.committing {
            return;
        }
        debug_assert!(
            changes.windows(2).all(|w| w[0].start <= w[1].start),
            "document change batches must be sorted by start offset",
        );

        self.document_end = Position::document_end(doc);
        let policy = self.policy;

        self.selections.retain_mut(|selection| {
            Self::adjust_one(selection, doc, policy, changes)
        });
        for copy in &mut self.copies {
            copy.selections
                .retain_mut(|selection| Self::adjust_one(selection, doc, policy, changes));
        }

        self.bump(SelectionEventKind::DocumentAdjusted);
    }

    fn adjust_one(
        selection: &mut Selection,
        doc: &dyn Document,
        policy: SelectionPolicy,
        changes: &[ContentChange],
    ) -> bool {
        for change in changes {
            if !selection.adjust_for_change(change) {
                return false;
            }
        }
        selection.revalidate(doc);
        selection.normalize(doc, policy);
        true
    }

    /// Reconcile the set against a host-reported selection list.
    ///
    /// Two phases: first every incoming selection is paired with a tracked
    /// selection of exactly equal value, preserving identity for selections
    /// the user did not move. Remaining incoming selections are then walked
    /// in reverse index order (hosts insert fresh selections at the front of
    /// the list, so processing them last keeps them from stealing an
    /// unrelated tracked selection) and each takes the unmatched tracked
    /// selection at minimum squared coordinate distance, or a brand-new one
    /// once the pool is exhausted. Ignored while `committing`, so the
    /// engine's own write-backs do not trigger a spurious reconciliation.
    pub fn notify_selections_changed(&mut self, doc: &dyn Document, incoming: &[CoordSelection]) {
        if self.committing {
            return;
        }
        self.reconcile(doc, incoming);
        self.bump(SelectionEventKind::Reconciled);
    }

    fn reconcile(&mut self, doc: &dyn Document, incoming: &[CoordSelection]) {
        let policy = self.policy;
        let mut pool: Vec<Selection> = std::mem::take(&mut self.selections);
        let mut result: Vec<Option<Selection>> = Vec::with_capacity(incoming.len());
        result.resize_with(incoming.len(), || None);

        for (index, host) in incoming.iter().enumerate() {
            if let Some(found) = pool.iter().position(|s| s.eq_host(policy, host)) {
                result[index] = Some(pool.remove(found));
            }
        }

        for index in (0..incoming.len()).rev() {
            if result[index].is_some() {
                continue;
            }
            let host = &incoming[index];
            let reused = if pool.is_empty() {
                let mut fresh = Selection::from_host(doc, policy, host);
                fresh.set_id(self.alloc_id());
                fresh
            } else {
                let nearest = pool
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, s)| s.coord_distance_sq(host))
                    .map(|(pool_index, _)| pool_index)
                    .expect("pool is non-empty");
                let mut selection = pool.remove(nearest);
                selection.repoint(doc, policy, host);
                selection
            };
            result[index] = Some(reused);
        }

        // Tracked selections with no incoming counterpart are discarded.
        self.selections = result.into_iter().flatten().collect();
    }

    /// One-shot idle correction pass.
    ///
    /// Re-normalizes every selection under the current policy and, if any
    /// host projection differs from what the host currently shows, writes
    /// the corrected list back under the `committing` guard. The guard
    /// suppresses the selection-changed notification the write would
    /// otherwise re-enter with, so this cannot loop.
    pub fn normalize_and_commit(&mut self, editor: &mut dyn HostEditor) {
        let doc = editor.document();
        for selection in &mut self.selections {
            selection.normalize(doc, self.policy);
        }
        let desired: Vec<CoordSelection> = self
            .selections
            .iter()
            .map(|s| s.to_host(self.policy))
            .collect();
        if desired != editor.selections() {
            self.committing = true;
            editor.set_selections(&desired);
            self.committing = false;
            self.bump(SelectionEventKind::Committed);
        }
    }

    /// Write the tracked selections back to the host unconditionally.
    pub fn commit(&mut self, editor: &mut dyn HostEditor) {
        let desired: Vec<CoordSelection> = self
            .selections
            .iter()
            .map(|s| s.to_host(self.policy))
            .collect();
        self.committing = true;
        editor.set_selections(&desired);
        self.committing = false;
        self.bump(SelectionEventKind::Committed);
    }

    /// Mutate every selection in place, then re-normalize.
    ///
    /// The closure receives the selection's index alongside the selection.
    pub fn update_each<F>(&mut self, doc: &dyn Document, mut f: F)
    where
        F: FnMut(usize, &mut Selection),
    {
        let policy = self.policy;
        for (index, selection) in self.selections.iter_mut().enumerate() {
            f(index, selection);
            selection.normalize(doc, policy);
        }
        self.bump(SelectionEventKind::Mutated);
    }

    /// Mutate every selection in place with the same closure.
    pub fn update_all<F>(&mut self, doc: &dyn Document, mut f: F)
    where
        F: FnMut(&mut Selection),
    {
        self.update_each(doc, |_, selection| f(selection));
    }

    /// Rebuild the selection list through a per-selection builder.
    ///
    /// For each existing selection the builder may emit zero or more
    /// replacements; a seek that fails for one selection simply emits
    /// nothing, dropping it. Emitted selections that carry no identity yet
    /// are assigned a fresh one.
    pub fn update_with_builder<F>(&mut self, doc: &dyn Document, mut f: F)
    where
        F: FnMut(&Selection, &mut Vec<Selection>),
    {
        let policy = self.policy;
        let mut rebuilt = Vec::with_capacity(self.selections.len());
        for selection in std::mem::take(&mut self.selections) {
            let before = rebuilt.len();
            f(&selection, &mut rebuilt);
            for index in before..rebuilt.len() {
                if rebuilt[index].id() == SelectionId::DETACHED {
                    let id = self.alloc_id();
                    rebuilt[index].set_id(id);
                }
                rebuilt[index].normalize(doc, policy);
            }
        }
        self.selections = rebuilt;
        self.bump(SelectionEventKind::Mutated);
    }

    /// Apply an edit through the host and re-synchronize from its post-edit
    /// selection report.
    ///
    /// An edit issued by command code already knows its before/after mapping,
    /// so positions are rebuilt from where the host actually put the
    /// selections instead of going through the generic document-changed
    /// path. Runs entirely under the `committing` guard. Returns the applied
    /// change batch so callers can feed peripheral trackers.
    pub fn edit_and_sync(
        &mut self,
        editor: &mut dyn HostEditor,
        edits: &[ContentChange],
    ) -> Vec<ContentChange> {
        self.committing = true;
        let applied = editor.apply_edits(edits);
        let incoming = editor.selections();
        let doc = editor.document();
        self.document_end = Position::document_end(doc);
        self.reconcile(doc, &incoming);
        self.committing = false;
        self.bump(SelectionEventKind::Mutated);
        applied
    }

    /// Save a detached-but-synchronized copy of the current selections.
    ///
    /// The copy keeps receiving document-change adjustment until it is
    /// [forgotten](Self::forget) or restored.
    pub fn copy(&mut self) -> CopyId {
        self.next_copy_id += 1;
        let id = CopyId(self.next_copy_id);
        self.copies.push(SelectionCopy {
            id,
            selections: self.selections.clone(),
        });
        id
    }

    /// Replace the live selections with a previously saved copy.
    ///
    /// The copy stays live; forget it separately when done. Returns `false`
    /// for an unknown or forgotten copy.
    pub fn restore(&mut self, doc: &dyn Document, id: CopyId) -> bool {
        let Some(copy) = self.copies.iter().find(|c| c.id == id) else {
            return false;
        };
        self.selections = copy.selections.clone();
        let policy = self.policy;
        for selection in &mut self.selections {
            selection.normalize(doc, policy);
        }
        self.bump(SelectionEventKind::Restored);
        true
    }

    /// Stop synchronizing a saved copy. Returns `false` if it was unknown.
    pub fn forget(&mut self, id: CopyId) -> bool {
        let before = self.copies.len();
        self.copies.retain(|c| c.id != id);
        self.copies.len() != before
    }

    /// Selections of a live copy, for inspection.
    pub fn copy_selections(&self, id: CopyId) -> Option<&[Selection]> {
        self.copies
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.selections.as_slice())
    }

    /// Drop every selection but the main one.
    pub fn reduce_to_main(&mut self) {
        if self.selections.len() > 1 {
            self.selections.truncate(1);
            self.bump(SelectionEventKind::Mutated);
        }
    }
}

/// Registry of tracked selection sets, one per editor binding.
#[derive(Default)]
pub struct SelectionTracker {
    sets: HashMap<EditorId, SelectionSet>,
}

impl SelectionTracker {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Obtain the tracked set for `editor`, creating it from the editor's
    /// current selections the first time the editor is observed.
    pub fn from_editor(
        &mut self,
        editor: &dyn HostEditor,
        policy: SelectionPolicy,
    ) -> &mut SelectionSet {
        self.sets
            .entry(editor.id())
            .or_insert_with(|| SelectionSet::new(editor.document(), policy, &editor.selections()))
    }

    /// The tracked set for an editor id, if one exists.
    pub fn get(&self, id: EditorId) -> Option<&SelectionSet> {
        self.sets.get(&id)
    }

    /// Mutable access to the tracked set for an editor id.
    pub fn get_mut(&mut self, id: EditorId) -> Option<&mut SelectionSet> {
        self.sets.get_mut(&id)
    }

    /// Drop the tracked set for a closed editor. Returns `false` if none
    /// existed.
    pub fn forget(&mut self, id: EditorId) -> bool {
        self.sets.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Coord, TextDocument};
    use crate::host::LocalEditor;

    fn caret(line: usize, column: usize) -> CoordSelection {
        CoordSelection::caret(Coord::new(line, column))
    }

    fn span(al: usize, ac: usize, bl: usize, bc: usize) -> CoordSelection {
        CoordSelection::new(Coord::new(al, ac), Coord::new(bl, bc))
    }

    #[test]
    fn test_new_assigns_distinct_identities() {
        let doc = TextDocument::from_text("hello\nworld");
        let set = SelectionSet::new(
            &doc,
            SelectionPolicy::standard(),
            &[caret(0, 1), caret(1, 2)],
        );

        assert_eq!(set.len(), 2);
        assert_ne!(set.selections()[0].id(), set.selections()[1].id());
        assert_eq!(set.main().unwrap().active().offset(), 1);
    }

    #[test]
    fn test_document_change_drops_contained_selection() {
        let doc = TextDocument::from_text("0123456789");
        let mut set = SelectionSet::new(&doc, SelectionPolicy::standard(), &[span(0, 5, 0, 8)]);

        let mut doc = doc;
        let change = doc.replace(3, 7, "");
        set.notify_document_changed(&doc, &[change]);

        assert!(set.is_empty());
    }

    #[test]
    fn test_document_change_translates_selection() {
        let doc = TextDocument::from_text("0123456789");
        let mut set = SelectionSet::new(&doc, SelectionPolicy::standard(), &[span(0, 5, 0, 8)]);

        let mut doc = doc;
        let change = doc.replace(0, 2, "XXXXX");
        set.notify_document_changed(&doc, &[change]);

        let s = &set.selections()[0];
        assert_eq!(s.start().offset(), 8);
        assert_eq!(s.end().offset(), 11);
    }

    #[test]
    fn test_reconciliation_preserves_identity_across_reorder() {
        let doc = TextDocument::from_text("aaa bbb ccc");
        let mut set = SelectionSet::new(
            &doc,
            SelectionPolicy::standard(),
            &[span(0, 0, 0, 3), span(0, 4, 0, 7), span(0, 8, 0, 11)],
        );
        let ids: Vec<_> = set.selections().iter().map(|s| s.id()).collect();

        // Same values, reordered.
        set.notify_selections_changed(&doc, &[span(0, 8, 0, 11), span(0, 0, 0, 3), span(0, 4, 0, 7)]);

        let got: Vec<_> = set.selections().iter().map(|s| s.id()).collect();
        assert_eq!(got, vec![ids[2], ids[0], ids[1]]);
    }

    #[test]
    fn test_reconciliation_binds_nearest_by_squared_distance() {
        let doc = TextDocument::from_text(&"x".repeat(60));
        let mut set = SelectionSet::new(&doc, SelectionPolicy::standard(), &[caret(0, 10)]);
        let id = set.selections()[0].id();

        set.notify_selections_changed(&doc, &[caret(0, 50), caret(0, 9)]);

        assert_eq!(set.len(), 2);
        // The tracked selection at column 10 binds to the incoming column 9,
        // not to the first incoming entry.
        assert_eq!(set.selections()[1].id(), id);
        assert_eq!(set.selections()[1].active().offset(), 9);
        assert_ne!(set.selections()[0].id(), id);
    }

    #[test]
    fn test_reconciliation_drops_unmatched_tracked_selections() {
        let doc = TextDocument::from_text("hello world");
        let mut set = SelectionSet::new(
            &doc,
            SelectionPolicy::standard(),
            &[caret(0, 1), caret(0, 5), caret(0, 9)],
        );

        set.notify_selections_changed(&doc, &[caret(0, 5)]);

        assert_eq!(set.len(), 1);
        assert_eq!(set.selections()[0].active().offset(), 5);
    }

    #[test]
    fn test_committing_guard_suppresses_reconciliation() {
        let doc = TextDocument::from_text("hello");
        let mut set = SelectionSet::new(&doc, SelectionPolicy::standard(), &[caret(0, 1)]);
        let id = set.selections()[0].id();

        let mut editor = LocalEditor::new(EditorId::new(1), "hello");
        set.commit(&mut editor);
        assert_eq!(editor.selections(), vec![caret(0, 1)]);

        // A report arriving while committing is ignored.
        set.committing = true;
        set.notify_selections_changed(&doc, &[caret(0, 4)]);
        set.committing = false;

        assert_eq!(set.selections()[0].id(), id);
        assert_eq!(set.selections()[0].active().offset(), 1);
    }

    #[test]
    fn test_normalize_and_commit_is_one_shot() {
        let mut editor = LocalEditor::new(EditorId::new(1), "hello");
        editor.set_selections(&[caret(0, 2)]);

        let mut set = SelectionSet::new(
            editor.document(),
            SelectionPolicy::caret(),
            &editor.selections(),
        );

        // The caret-mode materialization differs from the host's empty
        // selection, so a corrected list is written back once.
        set.normalize_and_commit(&mut editor);
        assert_eq!(editor.selections(), vec![span(0, 2, 0, 3)]);

        let version = set.version();
        set.normalize_and_commit(&mut editor);
        assert_eq!(set.version(), version);
    }

    #[test]
    fn test_update_each_renormalizes() {
        let doc = TextDocument::from_text("abcdef");
        let mut set = SelectionSet::new(&doc, SelectionPolicy::caret(), &[caret(0, 0)]);

        set.update_each(&doc, |_, selection| {
            selection
                .active_mut()
                .move_right(&doc, 2, crate::LineBoundary::Cross);
            let target = selection.active().clone();
            *selection.anchor_mut() = target;
        });

        // Collapsed by the closure, re-materialized by the policy.
        let s = &set.selections()[0];
        assert!(s.is_single_symbol());
    }

    #[test]
    fn test_update_with_builder_drops_and_splits() {
        let doc = TextDocument::from_text("ab cd");
        let mut set = SelectionSet::new(
            &doc,
            SelectionPolicy::standard(),
            &[span(0, 0, 0, 2), span(0, 3, 0, 5)],
        );
        let first_id = set.selections()[0].id();

        set.update_with_builder(&doc, |selection, out| {
            if selection.id() == first_id {
                // Split into two carets.
                out.push(Selection::caret(selection.start().clone()));
                out.push(Selection::caret(selection.end().clone()));
            }
            // The second selection emits nothing and is dropped.
        });

        assert_eq!(set.len(), 2);
        assert_ne!(set.selections()[0].id(), SelectionId::DETACHED);
        assert_ne!(set.selections()[0].id(), set.selections()[1].id());
    }

    #[test]
    fn test_edit_and_sync_rebuilds_from_host_report() {
        let mut editor = LocalEditor::new(EditorId::new(1), "hello world");
        editor.set_selections(&[caret(0, 5)]);

        let mut set = SelectionSet::new(
            editor.document(),
            SelectionPolicy::standard(),
            &editor.selections(),
        );
        let id = set.selections()[0].id();

        let applied = set.edit_and_sync(&mut editor, &[ContentChange::insertion(5, ", there")]);

        assert_eq!(editor.text(), "hello, there world");
        assert_eq!(applied.len(), 1);
        assert_eq!(set.selections()[0].active().offset(), 12);
        assert_eq!(set.selections()[0].id(), id);
    }

    #[test]
    fn test_copies_stay_synchronized_until_forgotten() {
        let doc = TextDocument::from_text("0123456789");
        let mut set = SelectionSet::new(&doc, SelectionPolicy::standard(), &[span(0, 5, 0, 8)]);

        let copy = set.copy();

        let mut doc = doc;
        let change = doc.replace(0, 0, "++");
        set.notify_document_changed(&doc, &[change]);

        let saved = set.copy_selections(copy).unwrap();
        assert_eq!(saved[0].start().offset(), 7);

        // Move the live selection away, then restore the copy.
        set.notify_selections_changed(&doc, &[caret(0, 0)]);
        assert!(set.restore(&doc, copy));
        assert_eq!(set.selections()[0].start().offset(), 7);

        assert!(set.forget(copy));
        assert!(!set.forget(copy));
        assert!(set.copy_selections(copy).is_none());
    }

    #[test]
    fn test_reduce_to_main() {
        let doc = TextDocument::from_text("hello");
        let mut set = SelectionSet::new(
            &doc,
            SelectionPolicy::standard(),
            &[caret(0, 1), caret(0, 3)],
        );
        let main_id = set.selections()[0].id();

        set.reduce_to_main();
        assert_eq!(set.len(), 1);
        assert_eq!(set.selections()[0].id(), main_id);
    }

    #[test]
    fn test_subscription_reports_versions() {
        use std::sync::{Arc, Mutex};

        let doc = TextDocument::from_text("hello");
        let mut set = SelectionSet::new(&doc, SelectionPolicy::standard(), &[caret(0, 0)]);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        set.subscribe(move |event| {
            sink.lock().unwrap().push((event.kind, event.new_version));
        });

        set.notify_selections_changed(&doc, &[caret(0, 2)]);
        set.reduce_to_main();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], (SelectionEventKind::Reconciled, 1));
    }

    #[test]
    fn test_tracker_creates_once_per_editor() {
        let mut tracker = SelectionTracker::new();
        let editor = LocalEditor::new(EditorId::new(7), "hello");

        let set = tracker.from_editor(&editor, SelectionPolicy::standard());
        set.notify_selections_changed(editor.document(), &[caret(0, 3)]);

        let again = tracker.from_editor(&editor, SelectionPolicy::standard());
        assert_eq!(again.selections()[0].active().offset(), 3);

        assert!(tracker.forget(EditorId::new(7)));
        assert!(tracker.get(EditorId::new(7)).is_none());
    }
}
