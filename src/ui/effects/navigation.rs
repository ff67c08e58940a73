//! Navbar, in-page links, mobile menu and back-to-top control

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, Node};

use super::dom::{self, listen, on_page_load, query, query_all, set_class};
use crate::core::EffectError;
use crate::core::mobile_nav::{MobileNav, NavEvent, NavKey, NavState};
use crate::core::scroll::{
    SectionBoundary, anchor_scroll_target, back_to_top_visible, current_section, fragment_id,
    link_targets_section, navbar_scrolled,
};

const NAVBAR: &str = ".navbar";
const NAV_LINKS: &str = ".navbar-nav .nav-link";

/// `scrolled` navbar class and active nav link, kept in step with scrolling
pub fn install_scroll_state() -> Result<(), EffectError> {
    let update = || {
        update_navbar();
        update_active_link();
    };

    let document = dom::document()?;
    listen(&document, "scroll", move |_| update())?;
    on_page_load(update)
}

fn update_navbar() {
    if let Ok(navbar) = query(NAVBAR) {
        set_class(&navbar, "scrolled", navbar_scrolled(dom::scroll_y()));
    }
}

fn update_active_link() {
    let sections: Vec<SectionBoundary> = query_all("section[id]")
        .into_iter()
        .filter_map(|section| {
            let html = section.dyn_ref::<HtmlElement>()?;
            Some(SectionBoundary::new(
                section.id(),
                html.offset_top() as f64,
                section.client_height() as f64,
            ))
        })
        .collect();

    let current = current_section(&sections, dom::scroll_y());

    for link in query_all(NAV_LINKS) {
        let href = link.get_attribute("href").unwrap_or_default();
        set_class(&link, "active", link_targets_section(&href, current));
    }
}

/// Smooth scrolling for `a[href^="#"]` links, leaving room for the fixed header
pub fn install_smooth_scroll() -> Result<(), EffectError> {
    for anchor in query_all(r##"a[href^="#"]"##) {
        let target_anchor = anchor.clone();
        listen(&anchor, "click", move |event| {
            event.prevent_default();

            let Some(href) = target_anchor.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_id(&href).and_then(anchor_target) else {
                return;
            };
            let _ = dom::smooth_scroll_to(anchor_scroll_target(target.offset_top() as f64));
        })?;
    }
    Ok(())
}

fn anchor_target(id: &str) -> Option<HtmlElement> {
    dom::document()
        .ok()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Hamburger menu: toggler, link clicks, outside clicks, Escape and resize
pub fn install_mobile_nav() -> Result<(), EffectError> {
    let toggler = query(".navbar-toggler")?;
    let collapse = query("#navbarNav")?;
    let navbar = query(NAVBAR)?;

    let nav = Rc::new(RefCell::new(MobileNav::new()));

    let apply = {
        let toggler = toggler.clone();
        let collapse = collapse.clone();
        let nav = nav.clone();
        move |event: NavEvent| {
            let changed = nav.borrow_mut().handle(event);
            if let Some(state) = changed {
                render(&toggler, &collapse, state);
            }
        }
    };

    {
        let apply = apply.clone();
        listen(&toggler, "click", move |event| {
            event.prevent_default();
            // Keep the document-level outside-click check from seeing this click
            event.stop_propagation();
            apply(NavEvent::Toggle);
        })?;
    }

    for link in query_all(NAV_LINKS) {
        let apply = apply.clone();
        listen(&link, "click", move |_| apply(NavEvent::LinkClick))?;
    }

    let document = dom::document()?;
    {
        let apply = apply.clone();
        let nav = nav.clone();
        listen(&document, "click", move |event| {
            if !nav.borrow().state().is_open() {
                return;
            }
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !navbar.contains(target.as_ref()) {
                apply(NavEvent::OutsideClick);
            }
        })?;
    }

    {
        let apply = apply.clone();
        listen(&document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                apply(NavEvent::Key(NavKey::from_key(&event.key())));
            }
        })?;
    }

    let window = dom::window()?;
    listen(&window, "resize", move |_| {
        apply(NavEvent::Resize(dom::viewport_width()));
    })
}

fn render(toggler: &Element, collapse: &Element, state: NavState) {
    set_class(collapse, "show", state.is_open());
    let _ = toggler.set_attribute("aria-expanded", state.aria_expanded());
}

/// Back-to-top button visibility and click
pub fn install_back_to_top() -> Result<(), EffectError> {
    let button = query(".back-to-top")?;

    let toggle = {
        let button = button.clone();
        move || set_class(&button, "show", back_to_top_visible(dom::scroll_y()))
    };

    listen(&button, "click", |event| {
        event.prevent_default();
        let _ = dom::smooth_scroll_to(0.0);
    })?;

    {
        let toggle = toggle.clone();
        let document = dom::document()?;
        listen(&document, "scroll", move |_| toggle())?;
    }
    on_page_load(toggle)
}
