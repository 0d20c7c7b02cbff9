use super::*;
use crate::content::wings::wings;

#[test]
fn find_wing_matches_exact_slug() {
    let all = wings();
    let wing = find_wing(&all, "climate-tech");
    assert_eq!(wing.map(|w| w.name.as_str()), all.iter().find(|w| w.slug == "climate-tech").map(|w| w.name.as_str()));
}

#[test]
fn find_wing_ignores_case_and_whitespace() {
    let all = wings();
    assert!(find_wing(&all, "  Web-Coding ").is_some());
}

#[test]
fn find_wing_unknown_slug_is_none() {
    let all = wings();
    assert!(find_wing(&all, "underwater-basket-weaving").is_none());
    assert!(find_wing(&all, "").is_none());
}
