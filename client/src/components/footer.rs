//! Site footer with club socials.

use leptos::prelude::*;

use crate::components::social_links::SocialLinkList;
use crate::net::types::SocialLinks;

fn club_links() -> SocialLinks {
    SocialLinks {
        linkedin: Some("https://www.linkedin.com/company/aether-club".to_owned()),
        github: Some("https://github.com/aether-club".to_owned()),
        instagram: Some("https://www.instagram.com/aether.club".to_owned()),
        twitter: None,
        email: Some("hello@aether.club".to_owned()),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__brand">
                <strong>"AETHER"</strong>
                <span>"The student technology club."</span>
            </div>
            <SocialLinkList links=club_links() owner="AETHER"/>
            <small class="site-footer__legal">"Built by students, for students."</small>
        </footer>
    }
}
