//! Site navigation: the destination list and the menu state machine.
//!
//! DESIGN
//! ======
//! The menu is a two-state machine. Every transition returns the next state
//! plus an optional focus request; the header component applies the focus
//! request to the DOM. Closing through selection or dismissal hands focus
//! back to the element that opened the menu.
//!
//! KEYBOARD
//! ========
//! The trigger and the open menu share one key map ([`key_events`]). Arrow
//! keys on a closed menu open it and move the highlight in one gesture; each
//! highlighted item is addressed by [`menu_item_id`] so focus can follow it.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A single menu destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    /// Display and keyboard traversal position.
    pub order: u8,
}

/// Menu destinations, already sorted by `order`.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "/", order: 0 },
    NavItem { label: "Concept", href: "/concept", order: 1 },
    NavItem { label: "Journeys", href: "/journeys", order: 2 },
    NavItem { label: "Client Portal", href: "/client", order: 3 },
];

/// Whether `href` should be marked active for the current `path`.
///
/// The root only matches itself; other destinations also match their
/// sub-paths (`/client/journeys/x` keeps "Client Portal" active).
#[must_use]
pub fn is_active(href: &str, path: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

/// DOM id of the menu link at `index`.
#[must_use]
pub fn menu_item_id(index: usize) -> String {
    format!("site-menu-item-{index}")
}

/// DOM identity of a focusable element (its `id` attribute).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusTarget(String);

impl FocusTarget {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open {
        /// Element that opened the menu; receives focus when it closes.
        opener: FocusTarget,
        /// Keyboard-highlighted item index.
        highlighted: Option<usize>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The trigger was activated.
    Trigger(FocusTarget),
    /// The item at this index was chosen.
    Select(usize),
    /// Escape, close button, or backdrop.
    Dismiss,
    /// The router finished moving to a new location.
    NavigationComplete,
    HighlightNext,
    HighlightPrev,
}

/// Result of applying one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: MenuState,
    /// Element that must receive focus after this transition.
    pub focus: Option<FocusTarget>,
}

impl Transition {
    fn stay(state: MenuState) -> Self {
        Self { state, focus: None }
    }

    fn close_to(opener: FocusTarget) -> Self {
        Self { state: MenuState::Closed, focus: Some(opener) }
    }
}

impl MenuState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        match self {
            Self::Open { highlighted, .. } => *highlighted,
            Self::Closed => None,
        }
    }

    /// Apply `event` against a menu of `item_count` entries.
    #[must_use]
    pub fn apply(self, event: MenuEvent, item_count: usize) -> Transition {
        match (self, event) {
            (Self::Closed, MenuEvent::Trigger(opener)) => {
                Transition::stay(Self::Open { opener, highlighted: None })
            }
            (Self::Open { opener, .. }, MenuEvent::Trigger(_) | MenuEvent::Dismiss) => Transition::close_to(opener),
            (Self::Open { opener, .. }, MenuEvent::Select(index)) if index < item_count => {
                Transition::close_to(opener)
            }
            (_, MenuEvent::NavigationComplete) => Transition::stay(Self::Closed),
            (Self::Open { opener, highlighted }, MenuEvent::HighlightNext) => Transition::stay(Self::Open {
                opener,
                highlighted: step(highlighted, item_count, true),
            }),
            (Self::Open { opener, highlighted }, MenuEvent::HighlightPrev) => Transition::stay(Self::Open {
                opener,
                highlighted: step(highlighted, item_count, false),
            }),
            (state, _) => Transition::stay(state),
        }
    }
}

/// Move the highlight one item forward or back, wrapping at both ends.
fn step(current: Option<usize>, item_count: usize, forward: bool) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let next = match (current, forward) {
        (None, true) => 0,
        (None, false) => item_count - 1,
        (Some(i), true) => (i + 1) % item_count,
        (Some(i), false) => (i + item_count - 1) % item_count,
    };
    Some(next)
}

/// Menu events for a key press. `opener` is the element the key was pressed
/// on, used when an arrow key has to open the menu first. Unhandled keys map
/// to no events, so the browser default stays in place.
#[must_use]
pub fn key_events(key: &str, open: bool, opener: &FocusTarget) -> Vec<MenuEvent> {
    let highlight = match key {
        "ArrowDown" => MenuEvent::HighlightNext,
        "ArrowUp" => MenuEvent::HighlightPrev,
        "Escape" if open => return vec![MenuEvent::Dismiss],
        _ => return Vec::new(),
    };
    if open { vec![highlight] } else { vec![MenuEvent::Trigger(opener.clone()), highlight] }
}
