//! Scroll-position driven page state
//!
//! Pure functions that turn a sampled vertical scroll offset into the visual
//! state of the navbar, the active navigation link, the back-to-top control
//! and the parallax layers. The DOM side samples `window.scrollY` and applies
//! the results.

/// Navbar gets the `scrolled` class past this offset (px)
pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 100.0;

/// Space reserved for the fixed header when jumping to an anchor (px)
pub const ANCHOR_HEADER_OFFSET: f64 = 80.0;

/// A section counts as current once scrolled to within this distance of its top (px)
pub const ACTIVE_SECTION_LEAD: f64 = 200.0;

/// Back-to-top control shows past this offset (px)
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Parallax rate of the hero particle background
pub const PARTICLE_LAYER_RATE: f64 = -0.5;

/// Parallax rate of the first floating element; each later one moves faster
pub const FLOATING_BASE_SPEED: f64 = 0.2;

/// Extra parallax speed per floating element index
pub const FLOATING_SPEED_STEP: f64 = 0.1;

/// Whether the navbar should carry the `scrolled` class
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_THRESHOLD
}

/// Whether the back-to-top control should be shown
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Scroll destination that puts an element's top just below the fixed header
pub fn anchor_scroll_target(element_offset_top: f64) -> f64 {
    element_offset_top - ANCHOR_HEADER_OFFSET
}

/// Turn an in-page link's href into the id it points at.
///
/// Returns `None` for a bare `#` or anything that isn't a fragment link.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Position of a labeled page section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBoundary {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBoundary {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Pick the section the reader is currently in.
///
/// Sections are given in document order. Every section whose top (minus the
/// lead distance) has been scrolled past qualifies, and the last qualifying
/// one wins.
pub fn current_section(sections: &[SectionBoundary], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| scroll_y >= section.top - ACTIVE_SECTION_LEAD)
        .last()
        .map(|section| section.id.as_str())
}

/// Whether a navigation link's href points at the given section
pub fn link_targets_section(href: &str, section_id: Option<&str>) -> bool {
    match section_id {
        Some(id) => fragment_id(href) == Some(id),
        None => false,
    }
}

/// Vertical offset of the particle background layer
pub fn particle_layer_offset(scroll_y: f64) -> f64 {
    scroll_y * PARTICLE_LAYER_RATE
}

/// Vertical offset of the floating element at `index`
pub fn floating_element_offset(index: usize, scroll_y: f64) -> f64 {
    let speed = FLOATING_BASE_SPEED + index as f64 * FLOATING_SPEED_STEP;
    -(scroll_y * speed)
}

/// CSS transform for a vertical parallax translation
pub fn translate_y_3d(offset: f64) -> String {
    // -0.0 would print as "-0"
    let offset = if offset == 0.0 { 0.0 } else { offset };
    format!("translate3d(0, {}px, 0)", offset)
}
