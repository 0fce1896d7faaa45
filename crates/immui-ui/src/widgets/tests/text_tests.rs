use super::*;

fn mono(s: &str) -> i32 {
    s.chars().count() as i32 * 8
}

#[test]
fn short_text_is_one_line() {
    assert_eq!(wrap_lines("hello world", 200, &mono), vec!["hello world"]);
}

#[test]
fn wraps_at_word_boundaries() {
    // "aaa bbb" is 56 wide; a 40 wide cell fits one word per line.
    assert_eq!(wrap_lines("aaa bbb ccc", 40, &mono), vec!["aaa", "bbb", "ccc"]);
    assert_eq!(wrap_lines("aaa bbb ccc", 60, &mono), vec!["aaa bbb", "ccc"]);
}

#[test]
fn long_word_keeps_its_own_line() {
    assert_eq!(
        wrap_lines("a verylongword b", 40, &mono),
        vec!["a", "verylongword", "b"]
    );
}

#[test]
fn newlines_split_paragraphs() {
    assert_eq!(wrap_lines("a\n\nb", 100, &mono), vec!["a", "", "b"]);
    assert_eq!(wrap_lines("a\n", 100, &mono), vec!["a"]);
    assert_eq!(wrap_lines("\n", 100, &mono), vec![""]);
}

#[test]
fn empty_text_has_no_lines() {
    assert!(wrap_lines("", 100, &mono).is_empty());
}
