//! Escaped-markup generation for the view layer.
//!
//! The [`Html`] helper renders small HTML fragments (anchors, meta links,
//! script and stylesheet includes, images, generic elements) bound to a
//! rendering context: a [`ViewConfig`] for asset base paths and a
//! [`trellis_routing::Router`] for reverse URL lookup. All text and attribute
//! values are HTML-entity-encoded unless a call explicitly opts out.

mod assets;
mod config;
mod doctype;
mod error;
mod helper;

pub use self::config::ViewConfig;
pub use self::doctype::doc_type;
pub use self::error::{HtmlError, HtmlErrorExt};
pub use self::helper::{Attributes, Html, LinkOptions, Target};
