#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::net::types::MemberType;

#[test]
fn extract_list_reads_nested_members() {
    let body = serde_json::json!({
        "success": true,
        "data": { "members": [ { "name": "Riya", "type": "CORE" }, { "name": "Kabir" } ] }
    });
    let members: Vec<TeamMember> = extract_list(&body, TEAM_LIST_PATH).unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].member_type, MemberType::Core);
    assert_eq!(members[1].name, "Kabir");
}

#[test]
fn extract_list_preserves_order() {
    let body = serde_json::json!({ "data": { "wings": [
        { "slug": "b", "name": "B" }, { "slug": "a", "name": "A" }, { "slug": "c", "name": "C" }
    ] } });
    let wings: Vec<Wing> = extract_list(&body, WINGS_LIST_PATH).unwrap();
    let slugs = wings.iter().map(|w| w.slug.as_str()).collect::<Vec<_>>();
    assert_eq!(slugs, vec!["b", "a", "c"]);
}

#[test]
fn extract_list_missing_key_is_shape_error() {
    let body = serde_json::json!({ "members": [] });
    let err = extract_list::<TeamMember>(&body, TEAM_LIST_PATH).unwrap_err();
    assert_eq!(err, FetchError::Shape("data.members".to_owned()));
}

#[test]
fn extract_list_non_array_is_shape_error() {
    let body = serde_json::json!({ "data": { "members": { "name": "Solo" } } });
    let err = extract_list::<TeamMember>(&body, TEAM_LIST_PATH).unwrap_err();
    assert!(matches!(err, FetchError::Shape(_)));
}

#[test]
fn extract_list_bad_item_is_decode_error() {
    let body = serde_json::json!({ "data": { "members": [ { "role": "no name" } ] } });
    let err = extract_list::<TeamMember>(&body, TEAM_LIST_PATH).unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn extract_string_reads_token_and_rejects_blank() {
    let body = serde_json::json!({ "data": { "token": " abc.def " } });
    assert_eq!(extract_string(&body, LOGIN_TOKEN_PATH), Ok("abc.def".to_owned()));

    let blank = serde_json::json!({ "data": { "token": "" } });
    assert!(matches!(extract_string(&blank, LOGIN_TOKEN_PATH), Err(FetchError::Shape(_))));
}

#[test]
fn fetch_team_members_falls_back_off_browser() {
    let team = futures::executor::block_on(fetch_team_members());
    assert!(!team.is_live());
    assert_eq!(team.fallback_reason(), Some(&FetchError::Unavailable));
    assert!(!team.value().is_empty());
    assert_eq!(team.value(), &content::team::team_members());
}

#[test]
fn fetch_wings_falls_back_off_browser() {
    let wings = futures::executor::block_on(fetch_wings());
    assert!(!wings.is_live());
    assert!(!wings.value().is_empty());
}

#[test]
fn admin_login_is_unavailable_off_browser() {
    let result = futures::executor::block_on(admin_login("a@b.c", "pw"));
    assert_eq!(result, Err(FetchError::Unavailable));
}
