//! Facade crate for Trellis helpers and shared modules.
//! Re-exports kernel/routing primitives and aggregates view-layer setup.
//! Keep this crate thin: it should compose other crates, not implement helpers.
//!
//! ## Usage
//! - Add `trellis` and call [`init_view`] to get an [`Html`] helper wired to
//!   the default route set.
//! - Persistence backends build on [`source`] directly.

pub use trellis_html::{Attributes, Html, HtmlError, LinkOptions, Target, ViewConfig, doc_type};
pub use trellis_kernel as kernel;
pub use trellis_logger as logger;
pub use trellis_routing::{RouteParams, Router, RoutingError};
pub use trellis_source as source;

use serde::Deserialize;
use trellis_source::SourceOptions;

/// Route templates every fresh view context understands.
pub const DEFAULT_ROUTES: &[&str] = &[
    "/{:controller}/{:action}/{:id}.{:type}",
    "/{:controller}/{:action}/{:id}",
    "/{:controller}/{:action}",
    "/{:controller}",
];

/// Combined toolkit configuration: view-layer and data-source settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    pub view: ViewConfig,
    pub source: SourceOptions,
}

/// Builds an [`Html`] helper bound to a router carrying [`DEFAULT_ROUTES`].
///
/// # Errors
/// Returns a [`RoutingError`] if a default template fails to parse; this
/// only happens when the constant set is edited inconsistently.
pub fn init_view(config: &ToolkitConfig) -> Result<Html, RoutingError> {
    let mut router = Router::new();
    for template in DEFAULT_ROUTES {
        router.connect(template)?;
    }
    Ok(Html::new(config.view.clone(), router))
}
