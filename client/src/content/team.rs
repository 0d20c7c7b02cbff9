//! Bundled team roster.

use super::links;
use crate::net::types::{MemberType, TeamMember};

fn member(
    id: &str,
    name: &str,
    role: &str,
    program: &str,
    sort_order: i32,
    member_type: MemberType,
    handle: &str,
) -> TeamMember {
    TeamMember {
        id: id.to_owned(),
        name: name.to_owned(),
        role: role.to_owned(),
        program: program.to_owned(),
        image_url: Some(format!("/images/team/{handle}.jpg")),
        social_links: links(
            &format!("https://www.linkedin.com/in/{handle}"),
            &format!("https://github.com/{handle}"),
            "",
        ),
        sort_order,
        active: true,
        member_type,
    }
}

/// Full roster in display order.
pub fn team_members() -> Vec<TeamMember> {
    vec![
        member("tm-01", "Aarav Mehta", "President", "B.Tech CSE, 4th year", 1, MemberType::HomeFeatured, "aarav-mehta"),
        member("tm-02", "Ishita Rao", "Vice President", "B.Tech ECE, 4th year", 2, MemberType::HomeFeatured, "ishita-rao"),
        member("tm-03", "Kabir Singh", "Technical Head", "B.Tech CSE, 3rd year", 3, MemberType::HomeFeatured, "kabir-singh"),
        member("tm-04", "Meera Nair", "Events Head", "BBA, 3rd year", 4, MemberType::HomeFeatured, "meera-nair"),
        member("tm-05", "Rohan Das", "Web & Coding Lead", "B.Tech IT, 3rd year", 5, MemberType::WingLead, "rohan-das"),
        member("tm-06", "Ananya Iyer", "Climate Tech Lead", "B.Sc Environmental Science, 3rd year", 6, MemberType::WingLead, "ananya-iyer"),
        member("tm-07", "Vikram Joshi", "AI & Data Lead", "B.Tech CSE (AI/ML), 3rd year", 7, MemberType::WingLead, "vikram-joshi"),
        member("tm-08", "Sara Khan", "Design Lead", "B.Des, 2nd year", 8, MemberType::WingLead, "sara-khan"),
        member("tm-09", "Dev Patel", "Treasurer", "B.Com, 3rd year", 9, MemberType::Core, "dev-patel"),
        member("tm-10", "Naina Gupta", "Outreach Coordinator", "BA Mass Communication, 2nd year", 10, MemberType::Core, "naina-gupta"),
        member("tm-11", "Arjun Reddy", "Robotics Lead", "B.Tech ME, 3rd year", 11, MemberType::WingLead, "arjun-reddy"),
        member("tm-12", "Tara Bose", "Security Lead", "B.Tech CSE, 2nd year", 12, MemberType::WingLead, "tara-bose"),
    ]
}
