//! Component that attaches the page behaviors after hydration

use leptos::prelude::*;

/// Installs the scroll, animation and form behaviors once the page is live.
///
/// Place it once at the end of a page; it renders nothing visible.
#[component]
pub fn SiteEffects() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            crate::ui::effects::install_all();
        });
    }

    view! {
        <div class="hidden"></div>
    }
}
