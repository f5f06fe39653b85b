//! Error types callers match on.

use thiserror::Error;

use crate::i18n::Language;
use crate::routing::RouteKey;

/// Inconsistencies in the route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("slug '{slug}' ({language}) is used by both '{first}' and '{second}'")]
    DuplicateSlug {
        language: Language,
        slug: &'static str,
        first: RouteKey,
        second: RouteKey,
    },
}

/// Reasons a contact submission is refused before reaching the relay.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,

    #[error("message is required")]
    MissingMessage,

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("form relay is not configured")]
    NotConfigured,
}
