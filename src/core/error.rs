//! Error type shared by the page effect installers.
//!
//! None of these errors is fatal: an installer that fails simply leaves its
//! behavior unbound and the rest of the page keeps working.

/// Errors raised while installing or running a page effect
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EffectError {
    /// An element the effect needs is not on the page
    #[error("element not found: {0}")]
    MissingElement(&'static str),

    /// A browser API call threw
    #[error("browser API error: {0}")]
    Js(String),

    /// The server answered with a non-success status
    #[error("request failed with status {0}")]
    Http(u16),

    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
}

impl EffectError {
    /// Missing markup is expected on pages that don't carry every section
    pub fn is_missing_element(&self) -> bool {
        matches!(self, EffectError::MissingElement(_))
    }
}

#[cfg(not(feature = "ssr"))]
impl From<wasm_bindgen::JsValue> for EffectError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        EffectError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for EffectError {
    fn from(error: gloo_net::Error) -> Self {
        EffectError::Network(error.to_string())
    }
}
