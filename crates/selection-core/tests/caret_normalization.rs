use pretty_assertions::assert_eq;
use selection_core::{
    Coord, CoordSelection, Document, Selection, SelectionPolicy, SelectionSet, TextDocument,
};

fn caret(line: usize, column: usize) -> CoordSelection {
    CoordSelection::caret(Coord::new(line, column))
}

fn span(al: usize, ac: usize, bl: usize, bc: usize) -> CoordSelection {
    CoordSelection::new(Coord::new(al, ac), Coord::new(bl, bc))
}

fn round_trip(doc: &TextDocument, host: CoordSelection) -> (Selection, Selection) {
    let policy = SelectionPolicy::caret();
    let selection = Selection::from_host(doc, policy, &host);
    let projected = selection.to_host(policy);
    let back = Selection::from_host(doc, policy, &projected);
    (selection, back)
}

#[test]
fn test_projection_fixed_point_mid_line_single_character() {
    let doc = TextDocument::from_text("hello world");

    let (selection, back) = round_trip(&doc, span(0, 4, 0, 5));
    assert_eq!(selection, back);

    let (selection, back) = round_trip(&doc, span(0, 5, 0, 4));
    assert_eq!(selection, back);
    assert!(back.is_reversed());
}

#[test]
fn test_projection_fixed_point_sole_character_on_blank_line() {
    let doc = TextDocument::from_text("above\n\nbelow");

    let (selection, back) = round_trip(&doc, caret(1, 0));
    assert_eq!(selection, back);

    // The materialized symbol is the blank line's own line break, so the
    // host projection spans to the next line's start.
    let host = selection.to_host(SelectionPolicy::caret());
    assert_eq!(host.anchor, Coord::new(1, 0));
    assert_eq!(host.active, Coord::new(2, 0));
}

#[test]
fn test_projection_fixed_point_selection_ending_at_line_break() {
    let doc = TextDocument::from_text("abc\ndef");

    // Covers "abc" plus the line break; the closing endpoint is the next
    // line's start.
    let (selection, back) = round_trip(&doc, span(0, 0, 1, 0));
    assert_eq!(selection, back);
    assert_eq!(selection.length(), 4);
}

#[test]
fn test_empty_host_caret_materializes_forward() {
    let doc = TextDocument::from_text("abc");
    let policy = SelectionPolicy::caret();

    let selection = Selection::from_host(&doc, policy, &caret(0, 1));
    assert!(selection.is_single_symbol());
    assert_eq!(selection.anchor().offset(), 1);
    assert_eq!(selection.active().offset(), 2);
    assert_eq!(selection.text(&doc), "b");
}

#[test]
fn test_empty_host_caret_at_document_end_materializes_backward() {
    let doc = TextDocument::from_text("abc");
    let policy = SelectionPolicy::caret();

    let selection = Selection::from_host(&doc, policy, &caret(0, 3));
    assert!(selection.is_single_symbol());
    assert!(selection.is_reversed());
    assert_eq!(selection.text(&doc), "c");
}

#[test]
fn test_degenerate_single_empty_line_document() {
    let doc = TextDocument::new();
    let policy = SelectionPolicy::caret();

    let selection = Selection::from_host(&doc, policy, &caret(0, 0));
    assert!(selection.is_empty());

    // Rule 1: the only legal projection is a truly empty selection at the
    // document start.
    assert_eq!(selection.to_host(policy), caret(0, 0));
}

#[test]
fn test_standard_mode_is_untouched_by_projection() {
    let doc = TextDocument::from_text("abc\ndef");
    let policy = SelectionPolicy::standard();

    for host in [caret(0, 2), span(0, 1, 1, 2), span(1, 2, 0, 1)] {
        let selection = Selection::from_host(&doc, policy, &host);
        assert_eq!(selection.to_host(policy), host);
    }
}

#[test]
fn test_switching_policy_rematerializes_points() {
    let doc = TextDocument::from_text("hello");
    let mut set = SelectionSet::new(&doc, SelectionPolicy::standard(), &[caret(0, 2)]);
    assert!(set.main().unwrap().is_empty());

    set.set_policy(&doc, SelectionPolicy::caret());
    assert!(set.main().unwrap().is_single_symbol());
    assert_eq!(set.main().unwrap().text(&doc), "l");
}

#[test]
fn test_projection_preserves_direction_of_single_symbol() {
    let doc = TextDocument::from_text("word");
    let policy = SelectionPolicy::caret();

    let forward = Selection::from_host(&doc, policy, &span(0, 1, 0, 2));
    assert_eq!(forward.to_host(policy), span(0, 1, 0, 2));

    let backward = Selection::from_host(&doc, policy, &span(0, 2, 0, 1));
    assert_eq!(backward.to_host(policy), span(0, 2, 0, 1));
}

#[test]
fn test_caret_on_every_offset_round_trips() {
    let doc = TextDocument::from_text("ab\n\ncd\n");
    let policy = SelectionPolicy::caret();

    for offset in 0..=doc.char_count() {
        let coord = doc.coord_at(offset);
        let selection = Selection::from_host(&doc, policy, &CoordSelection::caret(coord));
        let projected = selection.to_host(policy);
        let back = Selection::from_host(&doc, policy, &projected);
        assert_eq!(selection, back, "fixed point failed at offset {offset}");
        assert!(selection.is_single_symbol());
    }
}
