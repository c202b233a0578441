//! # Reverse Routing
//!
//! URL generation from route templates. Templates are plain paths with
//! `{:name}` placeholders, connected in priority order:
//!
//! ```rust
//! use trellis_routing::{RouteParams, Router};
//!
//! let mut router = Router::new();
//! router.connect("/{:controller}/{:action}/{:id}.{:type}").unwrap();
//! router.connect("/{:controller}/{:action}.{:type}").unwrap();
//!
//! let url = router.url(&RouteParams::new().set("controller", "posts").set("type", "rss"));
//! assert_eq!(url.as_deref(), Some("/posts/index.rss"));
//! ```
//!
//! Only generation lives here; request matching and dispatch are a concern of
//! the consuming application. A template matches a parameter set when every
//! placeholder can be filled from the supplied parameters plus the router's
//! defaults, and every supplied parameter is consumed by a placeholder.

mod error;

pub use error::{RoutingError, RoutingErrorExt};

use fxhash::FxHashMap;
use tracing::trace;

/// An ordered set of named route parameters.
///
/// Insertion order is preserved so diagnostics stay stable; lookups are
/// linear, which is fine for the handful of parameters a route carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: Vec<(String, String)>,
}

impl RouteParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a parameter, chainable.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if let Some(slot) = self.params.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value.into();
        } else {
            self.params.push((key, value.into()));
        }
        self
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// True when no parameters are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Param(String),
}

#[derive(Debug)]
struct Route {
    template: String,
    tokens: Vec<Token>,
}

impl Route {
    fn parse(template: &str) -> Result<Self, RoutingError> {
        let mut tokens = Vec::new();
        let mut rest = template;

        while let Some(open) = rest.find("{:") {
            if open > 0 {
                tokens.push(Token::Literal(rest[..open].to_owned()));
            }
            let after = &rest[open + 2..];
            let Some(close) = after.find('}') else {
                return Err(RoutingError::Template {
                    message: "Unclosed placeholder".into(),
                    context: Some(template.to_owned().into()),
                });
            };
            let name = &after[..close];
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(RoutingError::Template {
                    message: format!("Invalid placeholder name '{name}'").into(),
                    context: Some(template.to_owned().into()),
                });
            }
            tokens.push(Token::Param(name.to_owned()));
            rest = &after[close + 1..];
        }
        if !rest.is_empty() {
            tokens.push(Token::Literal(rest.to_owned()));
        }

        Ok(Self { template: template.to_owned(), tokens })
    }

    /// Renders this route for the given parameters, or `None` when the route
    /// cannot represent them.
    fn render(&self, params: &RouteParams, defaults: &FxHashMap<String, String>) -> Option<String> {
        let mut url = String::with_capacity(self.template.len());
        let mut consumed = 0usize;

        for token in &self.tokens {
            match token {
                Token::Literal(lit) => url.push_str(lit),
                Token::Param(name) => {
                    if let Some(value) = params.get(name) {
                        consumed += 1;
                        url.push_str(value);
                    } else {
                        url.push_str(defaults.get(name)?);
                    }
                }
            }
        }

        // Every supplied parameter must land in a placeholder, otherwise a
        // shorter route would silently drop information.
        let placeholder = |key: &str| {
            self.tokens.iter().any(|t| matches!(t, Token::Param(name) if name == key))
        };
        if consumed < params.params.len() || !params.keys().all(placeholder) {
            return None;
        }

        Some(url)
    }
}

/// Route template registry for URL generation.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
    defaults: FxHashMap<String, String>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Creates a router with the standard `action` → `index` default.
    #[must_use]
    pub fn new() -> Self {
        let mut defaults = FxHashMap::default();
        defaults.insert("action".to_owned(), "index".to_owned());
        Self { routes: Vec::new(), defaults }
    }

    /// Registers a route template. Templates are tried in connection order.
    ///
    /// # Errors
    /// Returns [`RoutingError::Template`] when the template is malformed.
    pub fn connect(&mut self, template: &str) -> Result<(), RoutingError> {
        let route = Route::parse(template)?;
        trace!(template, "Route connected");
        self.routes.push(route);
        Ok(())
    }

    /// Overrides or adds a default parameter value used when a placeholder is
    /// absent from the supplied parameters.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.defaults.insert(key.into(), value.into());
    }

    /// Removes all connected routes, keeping defaults.
    pub fn clear(&mut self) {
        self.routes.clear();
    }

    /// Generates a URL for the given parameters.
    ///
    /// Returns the first connected template that consumes every supplied
    /// parameter and fills all of its placeholders, or `None` when no
    /// template matches.
    #[must_use]
    pub fn url(&self, params: &RouteParams) -> Option<String> {
        if params.is_empty() {
            return None;
        }
        self.routes.iter().find_map(|route| route.render(params, &self.defaults))
    }
}
