use super::*;

#[test]
fn two_words_give_two_letters() {
    assert_eq!(initials("Aarav Mehta"), "AM");
}

#[test]
fn extra_words_are_ignored() {
    assert_eq!(initials("ada byron king lovelace"), "AB");
}

#[test]
fn single_word_gives_one_letter() {
    assert_eq!(initials("  zoya "), "Z");
}

#[test]
fn blank_name_gives_placeholder() {
    assert_eq!(initials(""), "?");
    assert_eq!(initials("   "), "?");
}

#[test]
fn non_ascii_letters_uppercase() {
    assert_eq!(initials("élodie ørsted"), "ÉØ");
}
