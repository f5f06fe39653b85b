//! Localized site server for a sworn-translator practice.
//!
//! One route table drives the HTTP server, the sitemap generator and the
//! static prerenderer.

pub mod config;
pub mod contact;
pub mod error;
pub mod html;
pub mod i18n;
pub mod prerender;
pub mod render;
pub mod routing;
pub mod seo;
pub mod server;
pub mod sitemap;
