use super::*;

#[test]
fn unchecked_session_never_redirects() {
    assert!(!should_redirect_unauth(&AdminSession::default()));
}

#[test]
fn checked_session_without_token_redirects() {
    let session = AdminSession { token: None, checked: true };
    assert!(should_redirect_unauth(&session));
}

#[test]
fn checked_session_with_blank_token_redirects() {
    let session = AdminSession { token: Some(String::new()), checked: true };
    assert!(should_redirect_unauth(&session));
}

#[test]
fn checked_session_with_token_stays() {
    let session = AdminSession { token: Some("tok".to_owned()), checked: true };
    assert!(!should_redirect_unauth(&session));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn storage_is_empty_outside_browser() {
    store_admin_token("tok");
    assert_eq!(read_admin_token(), None);
    clear_admin_token();
}

#[test]
fn storage_key_matches_deployed_name() {
    assert_eq!(TOKEN_STORAGE_KEY, "aether_admin_token");
}
