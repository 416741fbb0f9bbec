//! Not-found view for unknown routes and unknown content slugs.

use leptos::prelude::*;
use leptos_meta::Title;

/// Not-found page. Sets a `404` on the server response when rendered during SSR.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not found · Maison Itinérance"/>
        <section class="not-found">
            <h1>"Not found"</h1>
            <p>"The page you were looking for has moved or never existed."</p>
            <a href="/">"Return home"</a>
        </section>
    }
}
