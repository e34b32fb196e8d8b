use pretty_assertions::assert_eq;

use super::Position;

#[test]
fn default_is_start_of_file() {
    assert_eq!(Position::default(), Position::new(0, 1));
}

#[test]
fn ordering_follows_offset_first() {
    assert!(Position::new(3, 1) < Position::new(4, 1));
    assert!(Position::new(4, 1) < Position::new(5, 2));
}

#[test]
fn column_on_first_line() {
    assert_eq!(Position::new(0, 1).column("var x"), 1);
    assert_eq!(Position::new(4, 1).column("var x"), 5);
}

#[test]
fn column_resets_after_newline() {
    let source = "a = 1\nbb = 2";
    assert_eq!(Position::new(6, 2).column(source), 1);
    assert_eq!(Position::new(8, 2).column(source), 3);
}

#[test]
fn column_counts_characters_not_bytes() {
    let source = "s = '\u{3bb}' $";
    // `$` is at byte offset 9 but character index 8.
    assert_eq!(Position::new(9, 1).column(source), 9);
}

#[test]
fn column_clamps_past_end() {
    assert_eq!(Position::new(100, 1).column("ab"), 3);
}

#[test]
fn debug_shows_offset_and_line() {
    assert_eq!(format!("{:?}", Position::new(12, 3)), "12@3");
}
