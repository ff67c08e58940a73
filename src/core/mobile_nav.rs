//! Collapsible mobile navigation
//!
//! The menu is either open or closed. Only the toggler opens it; a link click,
//! a click outside the navbar, Escape and widening the viewport past the
//! desktop breakpoint all close it. Handling an event reports a new state only
//! when it actually changed, so the DOM is touched only on real transitions.

/// Viewport width above which the collapsed menu no longer applies (px)
pub const DESKTOP_BREAKPOINT: f64 = 992.0;

/// Menu visibility
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        matches!(self, NavState::Open)
    }

    /// Value of the toggler's `aria-expanded` attribute
    pub fn aria_expanded(&self) -> &'static str {
        match self {
            NavState::Open => "true",
            NavState::Closed => "false",
        }
    }
}

/// Inputs that can move the menu
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavEvent {
    /// The hamburger button was clicked
    Toggle,
    /// A navigation link was clicked
    LinkClick,
    /// A click landed outside the navbar
    OutsideClick,
    /// A key was pressed
    Key(NavKey),
    /// The viewport was resized to this width
    Resize(f64),
}

/// Keys the menu cares about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    Other,
}

impl NavKey {
    pub fn from_key(key: &str) -> Self {
        if key == "Escape" {
            NavKey::Escape
        } else {
            NavKey::Other
        }
    }
}

/// Mobile navigation state machine
#[derive(Clone, Debug, Default)]
pub struct MobileNav {
    state: NavState,
}

impl MobileNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Feed an event in.
    ///
    /// Returns the new state if the event caused a transition.
    pub fn handle(&mut self, event: NavEvent) -> Option<NavState> {
        let next = match (self.state, event) {
            (NavState::Closed, NavEvent::Toggle) => NavState::Open,
            (NavState::Open, NavEvent::Toggle) => NavState::Closed,
            (NavState::Open, NavEvent::LinkClick)
            | (NavState::Open, NavEvent::OutsideClick)
            | (NavState::Open, NavEvent::Key(NavKey::Escape)) => NavState::Closed,
            (NavState::Open, NavEvent::Resize(width)) if width > DESKTOP_BREAKPOINT => {
                NavState::Closed
            }
            (state, _) => state,
        };

        if next == self.state {
            None
        } else {
            self.state = next;
            Some(next)
        }
    }
}
