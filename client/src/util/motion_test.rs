#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn reduced_motion_is_false_outside_browser() {
    assert!(!prefers_reduced_motion());
}
