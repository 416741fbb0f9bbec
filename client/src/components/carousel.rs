//! Home-page carousel over the editorial showcase.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use leptos::prelude::*;

use super::media_frame::MediaFrame;

/// Index of the neighbouring slide, wrapping at both ends.
pub(crate) fn advance(current: usize, count: usize, forward: bool) -> usize {
    if count == 0 {
        return 0;
    }
    if forward { (current + 1) % count } else { (current + count - 1) % count }
}

#[component]
pub fn Carousel() -> impl IntoView {
    let slides = catalog::carousel();
    let count = slides.len();
    let current = RwSignal::new(0_usize);

    let on_prev = move |_| current.update(|i| *i = advance(*i, count, false));
    let on_next = move |_| current.update(|i| *i = advance(*i, count, true));

    view! {
        <section class="carousel" aria-roledescription="carousel">
            <ol class="carousel__track">
                {slides
                    .into_iter()
                    .map(|slide| {
                        let position = slide.position;
                        view! {
                            <li
                                class="carousel__slide"
                                class:is-current=move || current.get() == position
                                aria-hidden=move || (current.get() != position).to_string()
                            >
                                <MediaFrame asset=slide.journey.hero/>
                                <p class="carousel__caption">{slide.caption}</p>
                                <a class="carousel__link" href=format!("/journeys#{}", slide.journey.slug)>
                                    {slide.journey.title}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <Show when=move || { count > 1 }>
                <div class="carousel__controls">
                    <button class="carousel__prev" on:click=on_prev aria-label="Previous slide">"‹"</button>
                    <button class="carousel__next" on:click=on_next aria-label="Next slide">"›"</button>
                </div>
            </Show>
        </section>
    }
}
