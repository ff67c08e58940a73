//! Small helpers over web-sys used by the page effects

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, NodeList,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::core::EffectError;
use crate::core::loader::page_already_loaded;

pub fn window() -> Result<Window, EffectError> {
    web_sys::window().ok_or(EffectError::MissingElement("window"))
}

pub fn document() -> Result<Document, EffectError> {
    window()?
        .document()
        .ok_or(EffectError::MissingElement("document"))
}

/// First element matching `selector`, or `MissingElement`
pub fn query(selector: &'static str) -> Result<Element, EffectError> {
    query_optional(selector).ok_or(EffectError::MissingElement(selector))
}

/// First element matching `selector`, if any
pub fn query_optional(selector: &str) -> Option<Element> {
    document().ok()?.query_selector(selector).ok().flatten()
}

/// All elements matching `selector` in document order
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .ok()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(elements_of)
        .unwrap_or_default()
}

/// All descendants of `parent` matching `selector`
pub fn query_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(elements_of)
        .unwrap_or_default()
}

fn elements_of(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Register an event handler that stays for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), EffectError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Leak the closure to keep it alive
    closure.forget();
    Ok(())
}

/// Run `f` once the page has loaded, or right away if it already has.
pub fn on_page_load<F>(f: F) -> Result<(), EffectError>
where
    F: FnOnce() + 'static,
{
    if page_already_loaded(&document()?.ready_state()) {
        Timeout::new(0, f).forget();
        return Ok(());
    }

    let mut f = Some(f);
    let window = window()?;
    listen(&window, "load", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    })
}

/// Fire-and-forget delayed callback
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(ms, f).forget();
}

/// Current vertical scroll offset
pub fn scroll_y() -> f64 {
    window()
        .ok()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Current viewport width
pub fn viewport_width() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Current viewport height
pub fn viewport_height() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Animated scroll to an absolute offset
pub fn smooth_scroll_to(top: f64) -> Result<(), EffectError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Add or remove a class
pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let _ = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}

/// Set an inline style property, ignoring rejected values
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Drop an inline style property
pub fn clear_style(element: &Element, property: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().remove_property(property);
    }
}
