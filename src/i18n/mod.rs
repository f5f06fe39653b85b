//! Internationalization (i18n) module for the four site languages.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `resolver`: Active-language resolution (URL, cookie, browser, default)
//! - `strings`: Localized interface strings
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{resolver, Language, ResolveContext};
//!
//! let german = Language::from_code("de")?;
//! let active = resolver::resolve(&ResolveContext::new("/de/preise"));
//! assert_eq!(active, german);
//! ```

mod language;
mod registry;
pub mod resolver;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::ResolveContext;
pub use strings::LanguageStrings;
