//! Signature journeys listing.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::journey_card::JourneyCard;

#[component]
pub fn JourneysPage() -> impl IntoView {
    view! {
        <Title text="Journeys · Maison Itinérance"/>
        <section class="journeys">
            <h1>"Journeys"</h1>
            <div class="journeys__grid">
                {catalog::journeys().iter().map(|journey| view! { <JourneyCard journey=journey/> }).collect_view()}
            </div>
        </section>
    }
}
