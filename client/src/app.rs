//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::pages::{
    admin::AdminPage, campaign::CampaignPage, client_dashboard::ClientDashboardPage,
    client_journey::ClientJourneyPage, concept::ConceptPage, home::HomePage, journeys::JourneysPage,
    login::LoginPage, not_found::NotFoundPage,
};
use crate::state::session::{SessionState, SessionStore};
use crate::util::session_expiry::install_expiry_watch;
use crate::util::session_seed::{SEED_ELEMENT_ID, encode_seed, initial_session_state};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The session known to the server is embedded as a JSON seed so the
/// hydrating client starts from the same state the markup was rendered with.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let seed = encode_seed(&initial_session_state());

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script id=SEED_ELEMENT_ID type="application/json" inner_html=seed></script>
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
/// Owns the per-tab session store. The store is mirrored into an
/// `RwSignal<SessionState>` through a subscription that is released when the
/// root scope is cleaned up; provider pushes and the expiry timer are
/// released the same way.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::seeded(initial_session_state());
    let session = RwSignal::new(store.current());
    let subscription = store.subscribe(move |state: &SessionState| session.set(state.clone()));
    on_cleanup(move || drop(subscription));

    #[cfg(feature = "hydrate")]
    {
        let watch = store.connect(&crate::net::api::HttpAuthClient);
        on_cleanup(move || drop(watch));

        let store = store.clone();
        leptos::task::spawn_local(async move {
            store.hydrate(&crate::net::api::HttpAuthClient).await;
        });
    }
    install_expiry_watch(store.clone(), session);

    provide_context(store);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/maison.css"/>
        <Title text="Maison Itinérance"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("concept") view=ConceptPage/>
                    <Route path=StaticSegment("journeys") view=JourneysPage/>
                    <Route path=(StaticSegment("campaigns"), ParamSegment("slug")) view=CampaignPage/>
                    <Route path=StaticSegment("client") view=ClientDashboardPage/>
                    <Route
                        path=(StaticSegment("client"), StaticSegment("journeys"), ParamSegment("slug"))
                        view=ClientJourneyPage
                    />
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}
