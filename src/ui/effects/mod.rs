//! Browser-side page behaviors
//!
//! Each installer looks up the elements it drives, attaches listeners,
//! observers and timers, and returns. Installers are independent: a page
//! missing the markup for one behavior still gets all the others.

mod dom;
mod forms;
mod loader;
mod navigation;
mod visuals;

use crate::core::EffectError;

type Installer = (&'static str, fn() -> Result<(), EffectError>);

const INSTALLERS: &[Installer] = &[
    ("loader", loader::install_loader),
    ("scroll progress", loader::install_scroll_progress),
    ("navbar scroll state", navigation::install_scroll_state),
    ("smooth scroll", navigation::install_smooth_scroll),
    ("parallax", visuals::install_parallax),
    ("counters", visuals::install_counters),
    ("typing effect", visuals::install_typing_effect),
    ("particles", visuals::install_particles),
    ("mobile nav", navigation::install_mobile_nav),
    ("contact form", forms::install_contact_form),
    ("newsletter", forms::install_newsletter),
    ("card hover", visuals::install_card_hover),
    ("scroll reveal", visuals::install_scroll_reveal),
    ("back to top", navigation::install_back_to_top),
    ("aos", visuals::install_aos),
];

/// Install every page behavior, logging the ones that could not start
pub fn install_all() {
    for (name, install) in INSTALLERS {
        match install() {
            Ok(()) => tracing::debug!("{} installed", name),
            Err(error) if error.is_missing_element() => {
                tracing::debug!("{} skipped: {}", name, error)
            }
            Err(error) => tracing::warn!("{} failed to install: {}", name, error),
        }
    }
}
