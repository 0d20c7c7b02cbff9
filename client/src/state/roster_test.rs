use super::*;
use crate::net::sourced::resolve_list;
use crate::net::types::SocialLinks;

fn member(name: &str, member_type: MemberType, active: bool) -> TeamMember {
    TeamMember {
        id: name.to_lowercase(),
        name: name.to_owned(),
        role: String::new(),
        program: String::new(),
        image_url: None,
        social_links: SocialLinks::default(),
        sort_order: 0,
        active,
        member_type,
    }
}

#[test]
fn home_roster_keeps_live_featured_in_order() {
    let team = Sourced::Live(vec![
        member("Zed", MemberType::HomeFeatured, true),
        member("Amy", MemberType::Core, true),
        member("Bo", MemberType::HomeFeatured, true),
        member("Cy", MemberType::HomeFeatured, false),
    ]);
    let roster = home_roster(team);
    assert!(roster.is_live());
    let names = roster.value().iter().map(|m| m.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Zed", "Bo"]);
}

#[test]
fn home_roster_falls_back_when_live_has_no_featured() {
    let team = Sourced::Live(vec![member("Amy", MemberType::Core, true)]);
    let roster = home_roster(team);
    assert_eq!(roster.fallback_reason(), Some(&FetchError::Empty));
    assert!(!roster.value().is_empty());
    assert!(roster.value().iter().all(|m| m.member_type == MemberType::HomeFeatured));
}

#[test]
fn home_roster_filters_fallback_data_and_keeps_reason() {
    let team = Sourced::Fallback { value: content::team::team_members(), reason: FetchError::Status(502) };
    let roster = home_roster(team);
    assert_eq!(roster.fallback_reason(), Some(&FetchError::Status(502)));
    assert!(!roster.value().is_empty());
}

#[test]
fn team_roster_falls_back_when_live_has_no_active_members() {
    let team = resolve_list("team", Ok(vec![member("Gone", MemberType::Core, false)]), content::team::team_members);
    assert!(team.is_live());
    let roster = team_roster(team);
    assert_eq!(roster.fallback_reason(), Some(&FetchError::Empty));
    assert!(!roster.value().is_empty());
    assert!(roster.value().iter().all(|m| m.active));
}

#[test]
fn team_roster_keeps_live_active_members_in_order() {
    let team = Sourced::Live(vec![
        member("C", MemberType::Member, true),
        member("A", MemberType::Core, false),
        member("B", MemberType::WingLead, true),
    ]);
    let roster = team_roster(team);
    assert!(roster.is_live());
    let names = roster.value().iter().map(|m| m.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["C", "B"]);
}

#[test]
fn team_roster_filters_fallback_data_and_keeps_reason() {
    let team = Sourced::Fallback {
        value: vec![member("X", MemberType::Core, false), member("Y", MemberType::Core, true)],
        reason: FetchError::Network("offline".to_owned()),
    };
    let roster = team_roster(team);
    assert_eq!(roster.fallback_reason(), Some(&FetchError::Network("offline".to_owned())));
    assert_eq!(roster.value().len(), 1);
}

#[test]
fn visible_roster_hides_inactive_without_reordering() {
    let members = vec![
        member("C", MemberType::Member, true),
        member("A", MemberType::Member, false),
        member("B", MemberType::Core, true),
    ];
    let visible = visible_roster(&members);
    let names = visible.iter().map(|m| m.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["C", "B"]);
    assert_eq!(members.len(), 3);
}

#[test]
fn featured_speakers_filters_flag() {
    let all = content::speakers::speakers();
    let featured = featured_speakers(&all);
    assert!(!featured.is_empty());
    assert!(featured.iter().all(|s| s.featured));
    assert_eq!(featured.len(), all.iter().filter(|s| s.featured).count());
}
