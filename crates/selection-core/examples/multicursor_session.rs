//! Walks through a typical host session: track selections, survive an edit,
//! reconcile a host report, and write corrections back.

use selection_core::{
    ContentChange, Coord, CoordSelection, EditorId, HostEditor, LocalEditor, SelectionPolicy,
    SelectionTracker,
};

fn main() {
    let mut editor = LocalEditor::new(EditorId::new(1), "alpha\nbeta\ngamma\n");
    editor.set_selections(&[
        CoordSelection::caret(Coord::new(0, 0)),
        CoordSelection::caret(Coord::new(1, 0)),
        CoordSelection::caret(Coord::new(2, 0)),
    ]);

    let mut tracker = SelectionTracker::new();
    let set = tracker.from_editor(&editor, SelectionPolicy::caret());
    println!("tracking {} selections", set.len());
    for selection in set.selections() {
        println!(
            "  id={} covers {:?}",
            selection.id().raw(),
            selection.text(editor.document()),
        );
    }

    // A command inserts a comma prefix at the first caret and re-syncs from
    // the host's post-edit report.
    set.edit_and_sync(&mut editor, &[ContentChange::insertion(0, "# ")]);
    println!("after edit: {:?}", editor.text());

    // The host reports that the user clicked on line 2; the nearest tracked
    // selection follows, keeping its identity.
    let clicked = vec![CoordSelection::caret(Coord::new(2, 3))];
    set.notify_selections_changed(editor.document(), &clicked);
    println!(
        "after click: {} selection(s), main id={}",
        set.len(),
        set.main().unwrap().id().raw(),
    );

    // Normalize caret-mode materialization back into the host.
    set.normalize_and_commit(&mut editor);
    println!("host now shows {:?}", editor.selections());
}
