//! Loading overlay and reading-progress bars

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::dom::{self, after, listen, on_page_load, query, query_optional, set_class, set_style};
use crate::core::EffectError;
use crate::core::loader::{
    FALLBACK_HIDE_MS, HIDE_DELAY_MS, LOAD_GRACE_MS, LOGO_ANIMATION, LoadingProgress,
    PROGRESS_TICK_MS, SPINNER_ANIMATION,
};
use crate::core::progress::{ProgressUpdate, ScrollProgress, header_bar_scale, scale_x};

/// Shared handle to the progress simulation so any path can stop it
type Ticker = Rc<RefCell<Option<Interval>>>;

fn stop(ticker: &Ticker) {
    if let Some(interval) = ticker.borrow_mut().take() {
        interval.cancel();
    }
}

fn hide(loader: &Element, ticker: &Ticker) {
    set_class(loader, "loaded", true);
    stop(ticker);
}

/// Animated `#loader` overlay with simulated progress
pub fn install_loader() -> Result<(), EffectError> {
    let loader = query("#loader")?;
    let document = dom::document()?;

    if let Some(logo) = loader.query_selector(".loader-logo")? {
        set_style(&logo, "animation", LOGO_ANIMATION);
    }
    if let Some(spinner) = loader.query_selector(".loader-spinner")? {
        set_style(&spinner, "animation", SPINNER_ANIMATION);
    }

    let progress_track = document.create_element("div")?;
    progress_track.set_class_name("loader-progress");
    progress_track.set_inner_html(r#"<div class="loader-progress-bar"></div>"#);

    let loading_text = document.create_element("div")?;
    loading_text.set_class_name("loader-text");
    loading_text.set_text_content(Some(""));

    if let Some(content) = loader.query_selector(".loader-content")? {
        content.append_child(&progress_track)?;
        content.append_child(&loading_text)?;
    }

    let progress = Rc::new(Cell::new(LoadingProgress::new()));
    let ticker: Ticker = Rc::new(RefCell::new(None));

    let render = {
        let loader = loader.clone();
        move |progress: &LoadingProgress| {
            if let Ok(Some(bar)) = loader.query_selector(".loader-progress-bar") {
                set_style(&bar, "width", &progress.css_width());
            }
        }
    };

    {
        let progress = progress.clone();
        let ticker_handle = ticker.clone();
        let render = render.clone();
        *ticker.borrow_mut() = Some(Interval::new(PROGRESS_TICK_MS, move || {
            let mut current = progress.get();
            current.tick(js_sys::Math::random());
            progress.set(current);
            render(&current);

            if current.is_complete() {
                stop(&ticker_handle);
            }
        }));
    }

    {
        let loader = loader.clone();
        let ticker = ticker.clone();
        on_page_load(move || {
            after(LOAD_GRACE_MS, move || {
                let mut current = progress.get();
                current.complete();
                progress.set(current);
                render(&current);

                after(HIDE_DELAY_MS, move || hide(&loader, &ticker));
            });
        })?;
    }

    // Never leave the page covered, whatever happens to the load event
    after(FALLBACK_HIDE_MS, move || {
        if !loader.class_list().contains("loaded") {
            tracing::debug!("loader hidden by fallback timer");
            hide(&loader, &ticker);
        }
    });
    Ok(())
}

/// `#scrollProgress` and `#headerScrollBar`, updated at most once per frame
pub fn install_scroll_progress() -> Result<(), EffectError> {
    let bar = query("#scrollProgress")?;
    let header_bar = query_optional("#headerScrollBar");

    let tracker = Rc::new(RefCell::new(ScrollProgress::new()));

    let recompute = {
        let tracker = tracker.clone();
        move || {
            let Some(root) = dom::document().ok().and_then(|d| d.document_element()) else {
                return;
            };
            let update = tracker.borrow_mut().update(
                dom::scroll_y(),
                root.scroll_height() as f64,
                dom::viewport_height(),
            );

            if let ProgressUpdate::Scale(scale) = update {
                set_style(&bar, "transform", &scale_x(scale));
                set_style(&bar, "transform-origin", "left");
                if let Some(header_bar) = &header_bar {
                    set_style(header_bar, "transform", &scale_x(header_bar_scale(scale)));
                }
            }
        }
    };

    let frame = Closure::<dyn FnMut()>::new({
        let recompute = recompute.clone();
        move || recompute()
    });

    {
        let window = dom::window()?;
        let document = dom::document()?;
        listen(&document, "scroll", move |_| {
            if tracker.borrow_mut().request_frame() {
                let _ = window.request_animation_frame(frame.as_ref().unchecked_ref());
            }
        })?;
    }

    {
        let recompute = recompute.clone();
        let window = dom::window()?;
        listen(&window, "resize", move |_| recompute())?;
    }
    on_page_load(recompute)
}
