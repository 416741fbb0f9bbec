//! Campaign detail page at `/campaigns/:slug`.

use catalog::CampaignRecord;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::not_found::NotFoundPage;
use crate::components::media_frame::MediaFrame;

/// Looks up the campaign by slug; unknown slugs render the not-found view.
#[component]
pub fn CampaignPage() -> impl IntoView {
    let params = use_params_map();
    let campaign = move || params.with(|p| p.get("slug")).and_then(|slug| catalog::campaign_by_slug(&slug));

    move || match campaign() {
        Some(campaign) => view! { <CampaignDetail campaign=campaign/> }.into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}

#[component]
fn CampaignDetail(campaign: &'static CampaignRecord) -> impl IntoView {
    view! {
        <Title text=format!("{} · Maison Itinérance", campaign.title)/>
        <article class="campaign">
            <p class="eyebrow">{format!("{} · {} · {}", campaign.house, campaign.year, campaign.location)}</p>
            <h1>{campaign.title}</h1>
            <p class="campaign__synopsis">{campaign.synopsis}</p>
            <div class="campaign__media">
                {campaign.media.iter().map(|asset| view! { <MediaFrame asset=*asset/> }).collect_view()}
            </div>
            <dl class="campaign__credits">
                {campaign
                    .credits
                    .iter()
                    .map(|credit| {
                        view! {
                            <dt>{credit.role}</dt>
                            <dd>{credit.name}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        </article>
    }
}
