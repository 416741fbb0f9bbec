//! Media frame that degrades to a placeholder.

use catalog::{MediaAsset, PLACEHOLDER_SRC};
use leptos::prelude::*;

/// Render a media asset: `<video>` for films, `<img>` otherwise. Assets
/// without a source start on the placeholder; a client-side load error swaps
/// to it. A failed film falls back to the placeholder image.
#[component]
pub fn MediaFrame(asset: MediaAsset) -> impl IntoView {
    let failed = RwSignal::new(asset.is_missing());
    let src = move || if failed.get() { PLACEHOLDER_SRC } else { asset.display_src() };

    let media = move || {
        if asset.is_video() && !failed.get() {
            view! {
                <video
                    src=asset.display_src()
                    aria-label=asset.alt
                    controls=true
                    muted=true
                    playsinline=true
                    preload="metadata"
                    on:error=move |_| failed.set(true)
                ></video>
            }
            .into_any()
        } else {
            view! { <img src=src alt=asset.alt loading="lazy" on:error=move |_| failed.set(true)/> }.into_any()
        }
    };

    view! {
        <figure
            class="media-frame"
            class:media-frame--video=asset.is_video()
            class:media-frame--fallback=move || failed.get()
        >
            {media}
            {asset.credit.map(|credit| view! { <figcaption class="media-frame__credit">{credit}</figcaption> })}
        </figure>
    }
}
