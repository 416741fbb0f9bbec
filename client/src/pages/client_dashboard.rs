//! Client portal dashboard at `/client`.

#[cfg(test)]
#[path = "client_dashboard_test.rs"]
mod client_dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::session_gate::SessionGate;
use crate::state::session::SessionState;

pub(crate) fn greeting_for(name: &str) -> String {
    format!("Welcome back, {name}")
}

pub(crate) fn client_journey_href(slug: &str) -> String {
    format!("/client/journeys/{slug}")
}

#[component]
pub fn ClientDashboardPage() -> impl IntoView {
    view! {
        <Title text="Client portal · Maison Itinérance"/>
        <SessionGate>
            <ClientDashboard/>
        </SessionGate>
    }
}

#[component]
fn ClientDashboard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let greeting = move || {
        session.with(|state| state.session().map(|s| greeting_for(s.user.display_name())).unwrap_or_default())
    };

    view! {
        <section class="client-dashboard">
            <h1>{greeting}</h1>
            {catalog::spotlight()
                .map(|record| {
                    view! {
                        <article class="client-dashboard__spotlight">
                            <p class="eyebrow">"Spotlight"</p>
                            <h2>{record.title}</h2>
                            <p>{format!("{} · {}", record.travel_window, record.status.label())}</p>
                            <a href=client_journey_href(record.slug)>"Open itinerary"</a>
                        </article>
                    }
                })}
            <h2>"Your journeys"</h2>
            <ul class="client-dashboard__journeys">
                {catalog::client_overview()
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li class="client-dashboard__journey">
                                <a href=client_journey_href(entry.record.slug)>{entry.record.title}</a>
                                <span class="client-dashboard__destination">{entry.destination().to_owned()}</span>
                                <span class="client-dashboard__status">{entry.record.status.label()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
