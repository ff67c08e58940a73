//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::styles::PAGE_CSS;
use crate::core::SiteConfig;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <Title text=format!("Page Not Found - {}", config.site_name) />
        <style inner_html=PAGE_CSS></style>

        <section class="hero-section">
            <div class="hero-content">
                // Error code
                <h1>"404"</h1>

                <h2>"Page Not Found"</h2>
                <p>"The page you're looking for doesn't exist or has been moved."</p>

                <A href="/" attr:class="btn">
                    "Go Home"
                </A>
            </div>
        </section>
    }
}
