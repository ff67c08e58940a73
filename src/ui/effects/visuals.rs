//! Decorative effects: parallax, counters, typing, particles, cards, reveal

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom::{
    self, clear_style, listen, query, query_all, query_all_in, query_optional, set_style,
};
use crate::core::EffectError;
use crate::core::aos::AosOptions;
use crate::core::counter::{
    COUNTER_VISIBILITY_THRESHOLD, CounterAnimation, parse_target, suffix_for,
};
use crate::core::particles;
use crate::core::reveal::{
    CARD_LIFT_TRANSFORM, CARD_SELECTOR, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, REVEAL_TRANSITION,
    reveal_styles,
};
use crate::core::scroll::{floating_element_offset, particle_layer_offset, translate_y_3d};
use crate::core::typing::{TYPING_INTERVAL_MS, TypingReveal};

/// Scroll-linked translation of the hero background and floating shapes
pub fn install_parallax() -> Result<(), EffectError> {
    let particles = query_optional(".hero-particles");
    let floating = query_all(".floating-element");

    let window = dom::window()?;
    listen(&window, "scroll", move |_| {
        let scrolled = dom::scroll_y();

        if let Some(layer) = &particles {
            set_style(layer, "transform", &translate_y_3d(particle_layer_offset(scrolled)));
        }
        for (index, element) in floating.iter().enumerate() {
            set_style(
                element,
                "transform",
                &translate_y_3d(floating_element_offset(index, scrolled)),
            );
        }
    })
}

/// Build an intersection observer whose callback gets each intersecting entry
fn observe_intersections<F>(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: F,
) -> Result<IntersectionObserver, EffectError>
where
    F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    if entry.is_intersecting() {
                        on_visible(&entry, &observer);
                    }
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // The observer holds the callback for as long as the page lives
    callback.forget();
    Ok(observer)
}

/// Count-up animation for `.stat-number[data-target]` once half visible
pub fn install_counters() -> Result<(), EffectError> {
    for counter in query_all(".stat-number") {
        // Counters without a numeric target stay as written
        let Some(target) = counter
            .get_attribute("data-target")
            .as_deref()
            .and_then(parse_target)
        else {
            continue;
        };

        let animation = Rc::new(RefCell::new(CounterAnimation::new(
            target,
            suffix_for(footer_position(&counter)),
        )));

        let observer = observe_intersections(COUNTER_VISIBILITY_THRESHOLD, None, {
            let animation = animation.clone();
            move |entry: &IntersectionObserverEntry, _: &IntersectionObserver| {
                if !animation.borrow_mut().trigger() {
                    return;
                }
                let element = entry.target();
                let _ = element.class_list().add_1("counted");
                run_counter(element, animation.clone());
            }
        })?;
        observer.observe(&counter);
    }
    Ok(())
}

/// Index and size of the counter's footer stats group, if it sits in one
fn footer_position(counter: &Element) -> Option<(usize, usize)> {
    let group = counter.closest(".footer-stats").ok().flatten()?;
    let siblings = query_all_in(&group, ".stat-number");
    let index = siblings
        .iter()
        .position(|other| other.is_same_node(Some(counter)))?;
    Some((index, siblings.len()))
}

/// Drive a counter with requestAnimationFrame until it settles
fn run_counter(element: Element, animation: Rc<RefCell<CounterAnimation>>) {
    let frame_closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let frame_closure_clone = frame_closure.clone();

    *frame_closure.borrow_mut() = Some(Closure::new(move || {
        let frame = animation.borrow_mut().step();
        element.set_text_content(Some(&frame.text));

        // The loop's closure is leaked once the counter settles
        if frame.done {
            return;
        }
        request_frame(&frame_closure_clone);
    }));

    request_frame(&frame_closure);
}

fn request_frame(closure: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Ok(window), Some(closure)) = (dom::window(), closure.borrow().as_ref()) {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

/// Typewriter reveal of `.hero-title`
pub fn install_typing_effect() -> Result<(), EffectError> {
    let title = query(".hero-title")?;

    let text = title.text_content().unwrap_or_default();
    let mut reveal = TypingReveal::new(&title.inner_html(), &text);

    title.set_inner_html("");
    set_style(&title, "opacity", "1");

    spawn_local(async move {
        loop {
            TimeoutFuture::new(TYPING_INTERVAL_MS).await;
            match reveal.next_frame() {
                Some(markup) => title.set_inner_html(&markup),
                None => break,
            }
        }
    });
    Ok(())
}

/// Scatter decorative particles over the hero section
pub fn install_particles() -> Result<(), EffectError> {
    let hero = query(".hero-section")?;
    let document = dom::document()?;

    let mut rng = js_sys::Math::random;
    for spec in particles::generate(&mut rng) {
        let particle = document.create_element("div")?;
        particle.set_class_name("particle");
        let _ = particle.set_attribute("style", &spec.css_text());
        hero.append_child(&particle)?;
    }
    Ok(())
}

/// Lift cards under the pointer
pub fn install_card_hover() -> Result<(), EffectError> {
    for card in query_all(CARD_SELECTOR) {
        let lifted = card.clone();
        listen(&card, "mouseenter", move |_| {
            set_style(&lifted, "transform", CARD_LIFT_TRANSFORM);
        })?;

        let dropped = card.clone();
        listen(&card, "mouseleave", move |_| {
            clear_style(&dropped, "transform");
        })?;
    }
    Ok(())
}

/// Fade cards in the first time they scroll into view
pub fn install_scroll_reveal() -> Result<(), EffectError> {
    let observer = observe_intersections(
        REVEAL_THRESHOLD,
        Some(REVEAL_ROOT_MARGIN),
        |entry: &IntersectionObserverEntry, observer: &IntersectionObserver| {
            let element = entry.target();
            for (property, value) in reveal_styles(true) {
                set_style(&element, property, value);
            }
            // One-shot: the card is never looked at again
            observer.unobserve(&element);
        },
    )?;

    for element in query_all(CARD_SELECTOR) {
        for (property, value) in reveal_styles(false) {
            set_style(&element, property, value);
        }
        set_style(&element, "transition", REVEAL_TRANSITION);
        observer.observe(&element);
    }
    Ok(())
}

/// Initialize AOS if the page loaded it
pub fn install_aos() -> Result<(), EffectError> {
    let window = dom::window()?;
    let aos = js_sys::Reflect::get(&window, &JsValue::from_str("AOS"))?;
    if aos.is_undefined() || aos.is_null() {
        return Ok(());
    }

    let init = js_sys::Reflect::get(&aos, &JsValue::from_str("init"))?;
    let Some(init) = init.dyn_ref::<js_sys::Function>() else {
        return Ok(());
    };

    let options = serde_wasm_bindgen::to_value(&AosOptions::default())
        .map_err(|e| EffectError::Js(e.to_string()))?;
    init.call1(&aos, &options)?;
    tracing::debug!("AOS initialized");
    Ok(())
}
