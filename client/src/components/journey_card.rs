//! Summary card for a signature journey.

use catalog::JourneyRecord;
use leptos::prelude::*;

use super::media_frame::MediaFrame;

#[component]
pub fn JourneyCard(journey: &'static JourneyRecord) -> impl IntoView {
    view! {
        <article class="journey-card" id=journey.slug>
            <MediaFrame asset=journey.hero/>
            <h3 class="journey-card__title">{journey.title}</h3>
            <p class="journey-card__meta">
                {format!("{} · {} · {} days", journey.destination, journey.season, journey.duration_days)}
            </p>
            <p class="journey-card__summary">{journey.summary}</p>
        </article>
    }
}
