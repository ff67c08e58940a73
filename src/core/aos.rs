//! Options for the optional Animate On Scroll library
//!
//! Pages may load AOS from a CDN. When it is there, it is initialized once
//! with these options; when it isn't, nothing happens.

use serde::Serialize;

/// `AOS.init` options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AosOptions {
    /// Animation duration (ms)
    pub duration: u32,
    pub easing: &'static str,
    /// Animate only the first time an element scrolls into view
    pub once: bool,
    /// Animate again when scrolling back past an element
    pub mirror: bool,
}

impl Default for AosOptions {
    fn default() -> Self {
        Self {
            duration: 1000,
            easing: "ease-in-out",
            once: true,
            mirror: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_serialize_with_library_keys() {
        let json = serde_json::to_value(AosOptions::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "duration": 1000,
                "easing": "ease-in-out",
                "once": true,
                "mirror": false
            })
        );
    }
}
