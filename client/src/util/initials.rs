//! Avatar initials for members whose photo is missing or fails to load.

#[cfg(test)]
#[path = "initials_test.rs"]
mod initials_test;

/// First letter of up to two words, uppercased; `?` for a blank name.
pub fn initials(name: &str) -> String {
    let letters = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect::<String>();
    if letters.is_empty() { "?".to_owned() } else { letters }
}
