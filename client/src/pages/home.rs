//! Home page: hero, showcase carousel and recent campaigns.

use leptos::prelude::*;

use crate::components::carousel::Carousel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-hero">
            <p class="eyebrow">"Travel and fashion production"</p>
            <h1>"Journeys made with the people who make the cloth."</h1>
            <a class="home-hero__cta" href="/concept">"Our concept"</a>
        </section>
        <Carousel/>
        <section class="home-campaigns">
            <h2>"Campaigns"</h2>
            <ul class="home-campaigns__list">
                {catalog::campaigns()
                    .iter()
                    .map(|campaign| {
                        view! {
                            <li>
                                <a href=format!("/campaigns/{}", campaign.slug)>
                                    <span class="home-campaigns__title">{campaign.title}</span>
                                    <span class="home-campaigns__house">
                                        {format!("{} · {}", campaign.house, campaign.year)}
                                    </span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
