//! Site header with the navigation menu and account area.
//!
//! The menu's open/closed state lives in a [`MenuState`] signal. Focus
//! requests returned by transitions go back to the opener, and the
//! keyboard-highlighted link takes DOM focus as the highlight moves. The
//! trigger and the open menu both listen for the menu keys.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::nav::{FocusTarget, MenuEvent, MenuState, NAV_ITEMS, is_active, key_events, menu_item_id};
use crate::state::session::{SessionState, SessionStore};

pub const MENU_TRIGGER_ID: &str = "site-menu-trigger";
const MENU_ID: &str = "site-menu";

/// Focus the element with DOM id `id` on the next frame, once any menu
/// content rendered by the same state change is in the document.
fn focus_element(id: String) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        request_animation_frame(move || {
            let element = document()
                .get_element_by_id(&id)
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(element) = element {
                let _ = element.focus();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Sign out without leaving the page when running in the browser; on the
/// server-rendered form the plain POST to `/api/auth/logout` applies.
fn sign_out_in_place(ev: leptos::ev::SubmitEvent, store: &SessionStore) {
    #[cfg(feature = "hydrate")]
    {
        ev.prevent_default();
        let store = store.clone();
        leptos::task::spawn_local(async move {
            store.sign_out(&crate::net::api::HttpAuthClient).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, store);
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = expect_context::<RwSignal<SessionState>>();
    let pathname = use_location().pathname;

    let menu = RwSignal::new(MenuState::default());

    let dispatch = move |event: MenuEvent| {
        let transition = menu.get_untracked().apply(event, NAV_ITEMS.len());
        menu.set(transition.state);
        if let Some(target) = transition.focus {
            focus_element(target.as_str().to_owned());
        }
    };

    // Focus follows the keyboard highlight.
    Effect::new(move || {
        if let Some(index) = menu.with(MenuState::highlighted) {
            focus_element(menu_item_id(index));
        }
    });

    // Close once the router lands somewhere new.
    Effect::new(move |previous: Option<String>| {
        let path = pathname.get();
        if previous.is_some_and(|prev| prev != path) {
            dispatch(MenuEvent::NavigationComplete);
        }
        path
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let opener = FocusTarget::new(MENU_TRIGGER_ID);
        let events = key_events(&ev.key(), menu.with_untracked(MenuState::is_open), &opener);
        if events.is_empty() {
            return;
        }
        ev.prevent_default();
        for event in events {
            dispatch(event);
        }
    };

    let account = move || match session.get() {
        SessionState::Present(current) => {
            let store = store.clone();
            view! {
                <span class="site-header__user">{current.user.display_name().to_owned()}</span>
                <form
                    class="site-header__sign-out"
                    method="post"
                    action="/api/auth/logout"
                    on:submit=move |ev| sign_out_in_place(ev, &store)
                >
                    <button type="submit">"Sign out"</button>
                </form>
            }
                .into_any()
        }
        SessionState::Absent => view! { <a class="site-header__sign-in" href="/login">"Client sign in"</a> }.into_any(),
        SessionState::Unknown => ().into_any(),
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Maison Itinérance"</a>
            <button
                id=MENU_TRIGGER_ID
                class="site-header__trigger"
                aria-haspopup="true"
                aria-controls=MENU_ID
                aria-expanded=move || menu.with(MenuState::is_open).to_string()
                on:click=move |_| dispatch(MenuEvent::Trigger(FocusTarget::new(MENU_TRIGGER_ID)))
                on:keydown=on_keydown
            >
                "Menu"
            </button>
            <Show when=move || menu.with(MenuState::is_open)>
                <nav id=MENU_ID class="site-menu" on:keydown=on_keydown>
                    <ul class="site-menu__list">
                        {NAV_ITEMS
                            .iter()
                            .enumerate()
                            .map(|(index, item)| {
                                view! {
                                    <li>
                                        <a
                                            id=menu_item_id(index)
                                            href=item.href
                                            class="site-menu__link"
                                            class:is-active=move || is_active(item.href, &pathname.get())
                                            class:is-highlighted=move || menu.with(MenuState::highlighted) == Some(index)
                                            on:click=move |_| dispatch(MenuEvent::Select(index))
                                        >
                                            {item.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <button class="site-menu__close" on:click=move |_| dispatch(MenuEvent::Dismiss)>
                        "Close"
                    </button>
                </nav>
            </Show>
            <div class="site-header__account">{account}</div>
        </header>
    }
}
