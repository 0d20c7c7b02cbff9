//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, nav_bar::NavBar};
use crate::pages::{
    admin::AdminPage, admin_login::AdminLoginPage, events::EventsPage, home::HomePage, speakers::SpeakersPage,
    team::TeamPage, wing_detail::WingDetailPage, wings::WingsPage,
};
use crate::state::auth::AdminSession;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="AETHER, the student technology club."/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the admin session context and sets up client-side routing.
/// Public pages own their data; nothing else is shared.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(AdminSession::default());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/aether.css"/>
        <Title text="AETHER | Student Technology Club"/>

        <Router>
            <NavBar/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("team") view=TeamPage/>
                    <Route path=StaticSegment("speakers") view=SpeakersPage/>
                    <Route path=StaticSegment("events") view=EventsPage/>
                    <Route path=StaticSegment("wings") view=WingsPage/>
                    <Route path=(StaticSegment("wings"), ParamSegment("slug")) view=WingDetailPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
