use pretty_assertions::assert_eq;
use selection_core::{
    CharacterClasses, Coord, Cursor, Direction, LineLimit, OffsetCursor, Position, Select,
    SkipOptions, TextDocument,
};

#[test]
fn test_forward_word_class_skip_lands_on_first_blank() {
    let doc = TextDocument::from_text("foo   bar");
    let classes = CharacterClasses::new();
    let mut position = Position::from_offset(&doc, 0);

    let mut cursor = Cursor::new(&doc, &mut position);
    let found = cursor.skip_while(
        Direction::Forward,
        |c, _, _, _| classes.is_word(c),
        SkipOptions {
            select: Select::Next,
            ..SkipOptions::default()
        },
    );

    assert!(found);
    assert_eq!(position.offset(), 3);
}

#[test]
fn test_backward_skip_crossing_line_limit_lands_on_previous_line_start() {
    let doc = TextDocument::from_text("abc\nxyz");
    let classes = CharacterClasses::new();
    let mut position = Position::from_offset(&doc, 5);

    let mut cursor = Cursor::new(&doc, &mut position);
    let found = cursor.skip_while(
        Direction::Backward,
        |c, _, _, _| classes.is_word(c),
        SkipOptions {
            line_limit: LineLimit::AcceptNext,
            ..SkipOptions::default()
        },
    );

    assert!(found);
    assert_eq!(position.as_coord(), Coord::new(0, 0));
}

#[test]
fn test_seek_to_next_word_start() {
    let doc = TextDocument::from_text("foo   bar baz");
    let classes = CharacterClasses::new();
    let mut position = Position::from_offset(&doc, 0);

    // Word seek: skip the current word, then the following blanks.
    let mut cursor = Cursor::new(&doc, &mut position);
    assert!(cursor.skip_while(
        Direction::Forward,
        |c, _, _, _| classes.is_word(c),
        SkipOptions::default(),
    ));
    assert!(cursor.skip_while(
        Direction::Forward,
        |c, _, _, _| classes.is_blank(c),
        SkipOptions::default(),
    ));

    assert_eq!(position.offset(), 6);
    assert_eq!(position.symbol(&doc), Some('b'));
}

#[test]
fn test_skip_while_across_multiple_lines() {
    let doc = TextDocument::from_text("aaa\nbbb\n   ccc");
    let mut position = Position::from_offset(&doc, 0);

    // Line breaks match the predicate through the supplied sentinel, so the
    // scan runs until the first space on line 2.
    let mut cursor = Cursor::new(&doc, &mut position);
    assert!(cursor.skip_while(
        Direction::Forward,
        |c, _, _, _| c.is_alphanumeric() || c == '\n',
        SkipOptions::default(),
    ));

    assert_eq!(position.as_coord(), Coord::new(2, 0));
}

#[test]
fn test_scan_exhaustion_is_an_ordinary_outcome() {
    let doc = TextDocument::from_text("aaaa");
    let mut position = Position::from_offset(&doc, 0);

    let mut cursor = Cursor::new(&doc, &mut position);
    let found = cursor.skip_while(Direction::Forward, |c, _, _, _| c == 'a', SkipOptions::default());

    assert!(!found);
    assert_eq!(cursor.position().offset(), 4);
}

#[test]
fn test_predicate_receives_full_coordinates() {
    let doc = TextDocument::from_text("ab\ncd");
    let mut position = Position::from_offset(&doc, 0);
    let mut seen = Vec::new();

    let mut cursor = Cursor::new(&doc, &mut position);
    cursor.skip_while(
        Direction::Forward,
        |c, offset, line, column| {
            seen.push((c, offset, line, column));
            offset < 3
        },
        SkipOptions::default(),
    );

    assert_eq!(
        seen,
        vec![
            ('a', 0, 0, 0),
            ('b', 1, 0, 1),
            ('\n', 2, 0, 2),
            ('c', 3, 1, 0),
        ]
    );
}

#[test]
fn test_offset_cursor_bracket_matching_probe() {
    let doc = TextDocument::from_text("let x = (a + (b - c));");
    let open = doc.text().find('(').unwrap();
    let mut position = Position::from_offset(&doc, open);
    let mut cursor = OffsetCursor::new(&doc, &mut position);

    // Walk forward from the opening bracket, counting nesting depth.
    let mut depth = 0isize;
    let mut relative = 0isize;
    let close = loop {
        match cursor.char(relative) {
            Some('(') => depth += 1,
            Some(')') => {
                depth -= 1;
                if depth == 0 {
                    break relative;
                }
            }
            Some(_) => {}
            None => panic!("unbalanced brackets"),
        }
        relative += 1;
    };

    assert_eq!(cursor.commit(close), Ok(()));
    assert_eq!(position.offset(), 20);
    assert_eq!(position.symbol(&doc), Some(')'));
}

#[test]
fn test_offset_cursor_backward_probing_is_windowed() {
    let doc = TextDocument::from_text("line one\nline two\nline three");
    let origin = doc.text().find("three").unwrap();
    let mut position = Position::from_offset(&doc, origin);
    let mut cursor = OffsetCursor::new(&doc, &mut position);

    // Monotonically decreasing probes slide the window backward one line at
    // a time.
    let mut collected = String::new();
    for relative in (-9..=0).rev() {
        if let Some(c) = cursor.char(relative) {
            collected.push(c);
        }
    }

    assert_eq!(collected.chars().rev().collect::<String>(), "two\nline t");
}

#[test]
fn test_scanners_are_rebuilt_after_an_edit() {
    let mut doc = TextDocument::from_text("abc");
    let mut position = Position::from_offset(&doc, 1);

    {
        let mut cursor = Cursor::new(&doc, &mut position);
        assert!(cursor.skip(Direction::Forward));
    }
    assert_eq!(position.offset(), 2);

    // A document change invalidates any live scanner; a fresh one is built
    // from the re-validated position.
    let change = doc.replace(0, 0, ">> ");
    position.set_offset(&doc, 2 + change.inserted_length());

    let cursor = Cursor::new(&doc, &mut position);
    assert_eq!(cursor.symbol(), Some('c'));
}
