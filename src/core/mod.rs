//! Page behavior logic, independent of the DOM
//!
//! Everything here compiles on both the server and the browser target and is
//! covered by native unit tests. The `ui::effects` module feeds browser
//! events into these types and applies what they return.

pub mod aos;
pub mod config;
pub mod counter;
pub mod error;
pub mod forms;
pub mod loader;
pub mod mobile_nav;
pub mod particles;
pub mod progress;
pub mod reveal;
pub mod scroll;
pub mod submission;
pub mod typing;
#[cfg(test)]
mod tests;

pub use config::SiteConfig;
pub use error::EffectError;
