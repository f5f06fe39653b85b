//! Localized routing: route table, slug resolution, validation and request
//! dispatch.

pub mod dispatch;
pub mod slug;
pub mod table;
pub mod validator;

pub use dispatch::{dispatch, Dispatch};
pub use slug::{match_slug, path_for, path_for_id, route_key_for, SlugIndex, SlugMatch};
pub use table::{ChangeFreq, LocalizedSlug, RouteDef, RouteKey, ROUTES};
pub use validator::{RouteTableValidator, ValidationReport};
