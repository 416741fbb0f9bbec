//! Concept page.

use leptos::prelude::*;
use leptos_meta::Title;

struct Pillar {
    heading: &'static str,
    body: &'static str,
}

const PILLARS: &[Pillar] = &[
    Pillar {
        heading: "Made in place",
        body: "Every journey is built around a working atelier: dye houses, looms, tanneries, tailors.",
    },
    Pillar {
        heading: "Produced, not packaged",
        body: "We run campaign productions on location, and our guests travel with the same crews.",
    },
    Pillar {
        heading: "Small by design",
        body: "Private groups of two to eight, one concierge from first call to return flight.",
    },
];

#[component]
pub fn ConceptPage() -> impl IntoView {
    view! {
        <Title text="Concept · Maison Itinérance"/>
        <section class="concept">
            <h1>"Concept"</h1>
            {PILLARS
                .iter()
                .map(|pillar| {
                    view! {
                        <article class="concept__pillar">
                            <h2>{pillar.heading}</h2>
                            <p>{pillar.body}</p>
                        </article>
                    }
                })
                .collect_view()}
        </section>
    }
}
