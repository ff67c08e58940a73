//! Scroll reveal and card hover presentation
//!
//! A card is revealed the first time it intersects and is then unobserved,
//! so the reveal never repeats and never reverses.

/// Elements that fade in on scroll and lift on hover
pub const CARD_SELECTOR: &str = ".service-card, .pricing-card, .feature-item";

/// Hover transform of a card
pub const CARD_LIFT_TRANSFORM: &str = "translateY(-10px) scale(1.02)";

/// Portion of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport's bottom edge so elements reveal 100px in
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Styles applied before the element is revealed
pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const REVEAL_TRANSITION: &str = "all 0.6s ease-out";

/// Styles applied on reveal
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";

/// Inline `(property, value)` pairs for a card before or after its reveal
pub fn reveal_styles(revealed: bool) -> [(&'static str, &'static str); 2] {
    if revealed {
        [("opacity", SHOWN_OPACITY), ("transform", SHOWN_TRANSFORM)]
    } else {
        [("opacity", HIDDEN_OPACITY), ("transform", HIDDEN_TRANSFORM)]
    }
}
