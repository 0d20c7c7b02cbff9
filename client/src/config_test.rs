use super::*;

#[test]
fn resolve_base_defaults_when_unset_or_blank() {
    assert_eq!(resolve_base(None), DEFAULT_API_BASE_URL);
    assert_eq!(resolve_base(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn resolve_base_trims_whitespace_and_trailing_slashes() {
    assert_eq!(resolve_base(Some(" https://api.example.test/v1// ")), "https://api.example.test/v1");
}

#[test]
fn endpoint_joins_with_single_slash() {
    assert_eq!(endpoint("http://x/api/", "/team"), "http://x/api/team");
    assert_eq!(endpoint("http://x/api", "wings"), "http://x/api/wings");
    assert_eq!(endpoint("http://x/api", "auth/login"), "http://x/api/auth/login");
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}
