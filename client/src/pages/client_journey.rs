//! Client journey itinerary at `/client/journeys/:slug`.

use catalog::ClientJourneyRecord;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::not_found::NotFoundPage;
use crate::components::media_frame::MediaFrame;
use crate::components::session_gate::SessionGate;

#[component]
pub fn ClientJourneyPage() -> impl IntoView {
    view! {
        <SessionGate>
            <ClientJourneyLookup/>
        </SessionGate>
    }
}

#[component]
fn ClientJourneyLookup() -> impl IntoView {
    let params = use_params_map();
    let record = move || params.with(|p| p.get("slug")).and_then(|slug| catalog::client_journey_by_slug(&slug));

    move || match record() {
        Some(record) => view! { <ClientJourneyDetail record=record/> }.into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}

#[component]
fn ClientJourneyDetail(record: &'static ClientJourneyRecord) -> impl IntoView {
    let base = catalog::find_by_id(catalog::journeys(), record.journey_id);

    view! {
        <Title text=format!("{} · Client portal", record.title)/>
        <article class="client-journey">
            <a class="client-journey__back" href="/client">"All journeys"</a>
            <p class="eyebrow">{format!("{} · {}", record.status.label(), record.travel_window)}</p>
            <h1>{record.title}</h1>
            {base.map(|journey| view! { <p class="client-journey__base">{format!("Based on {}", journey.title)}</p> })}
            <p class="client-journey__concierge">{format!("Your concierge: {}", record.concierge)}</p>
            <ol class="client-journey__itinerary">
                {record
                    .itinerary
                    .iter()
                    .map(|stop| {
                        view! {
                            <li>
                                <span class="client-journey__day">{format!("Day {}", stop.day)}</span>
                                <span class="client-journey__place">{stop.place}</span>
                                <p>{stop.note}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <div class="client-journey__moodboard">
                {record.moodboard.iter().map(|asset| view! { <MediaFrame asset=*asset/> }).collect_view()}
            </div>
        </article>
    }
}
