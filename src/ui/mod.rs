#[cfg(not(feature = "ssr"))]
pub mod effects;
pub mod pages;
pub mod site_effects;

pub use site_effects::SiteEffects;
