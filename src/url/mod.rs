//! URL handling module for Policy-Sift
//!
//! Provides same-origin containment, href resolution against the site root,
//! and the URL shape rules used by link discovery.

mod origin;
mod shape;

pub use origin::SiteOrigin;
pub use shape::{is_article_shape, is_index_path, is_static_asset};
