//! SEO metadata: per-page tables, bundle resolution, structured data and the
//! document head synchronizer.

pub mod bundle;
pub mod head;
pub mod jsonld;
pub mod metadata;

pub use bundle::{
    alternates, Alternate, OpenGraph, OpenGraphOverrides, SeoBundle, SeoOverrides, SiteSettings,
    TwitterCard, TwitterOverrides, X_DEFAULT,
};
pub use head::{DocumentHead, HeadElement, HeadSynchronizer};
pub use metadata::{SeoCatalog, SeoMetadataEntry};
