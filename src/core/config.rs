//! Site configuration from environment variables.
//!
//! The server loads configuration using `SiteConfig::from_env()` after calling
//! `dotenvy::dotenv()` and hands it to the page through Leptos context.

/// Default brand name shown in the navbar and the document title
pub const DEFAULT_SITE_NAME: &str = "Vitrine";

/// Default contact form action
pub const DEFAULT_CONTACT_ENDPOINT: &str = "/contact";

/// Site configuration rendered into the page markup.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Brand name
    pub site_name: String,

    /// Where the contact form posts its fields.
    /// Example: https://formspree.io/f/xxxxxxx
    pub contact_endpoint: String,
}

impl SiteConfig {
    /// Build configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            site_name: non_blank("SITE_NAME").unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            contact_endpoint: non_blank("CONTACT_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_CONTACT_ENDPOINT.to_string()),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Whether the contact form points somewhere other than the placeholder
    pub fn has_contact_endpoint(&self) -> bool {
        self.contact_endpoint != DEFAULT_CONTACT_ENDPOINT
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
        }
    }
}
