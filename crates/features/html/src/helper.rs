use crate::assets;
use crate::config::ViewConfig;
use crate::doctype;
use crate::error::HtmlError;
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{debug, trace};
use trellis_kernel::security::escape::escape_html;
use trellis_routing::{RouteParams, Router};

/// Registered meta-link content types: key, MIME type, `rel` attribute.
const CONTENT_TYPES: &[(&str, &str, &str)] = &[
    ("rss", "application/rss+xml", "alternate"),
    ("atom", "application/atom+xml", "alternate"),
    ("icon", "image/x-icon", "icon"),
];

/// An ordered list of extra tag attributes.
///
/// Order is preserved as given, so emitted markup is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pairs: Vec<(String, String)>,
}

impl Attributes {
    /// Creates an empty attribute list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an attribute, chainable.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        if let Some(slot) = self.pairs.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value.into();
        } else {
            self.pairs.push((name, value.into()));
        }
        self
    }

    /// Looks up an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    fn render(&self, escape: bool) -> String {
        self.render_except(&[], escape)
    }

    fn render_except(&self, skip: &[&str], escape: bool) -> String {
        let mut out = String::new();
        for (name, value) in &self.pairs {
            if skip.contains(&name.as_str()) {
                continue;
            }
            let value = if escape { escape_html(value).into_owned() } else { value.clone() };
            let _ = write!(out, " {name}=\"{value}\"");
        }
        out
    }
}

/// A link or image destination: a literal path, or named route parameters
/// resolved through the context's [`Router`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Path(String),
    Route(RouteParams),
}

impl Target {
    fn is_empty(&self) -> bool {
        match self {
            Self::Path(path) => path.is_empty(),
            Self::Route(params) => params.is_empty(),
        }
    }
}

impl From<&str> for Target {
    fn from(path: &str) -> Self {
        Self::Path(path.to_owned())
    }
}

impl From<RouteParams> for Target {
    fn from(params: RouteParams) -> Self {
        Self::Route(params)
    }
}

/// Options for [`Html::link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOptions {
    /// Registered content-type key (`rss`, `atom`, `icon`); selects the
    /// `<link />` meta form instead of an anchor.
    pub kind: Option<String>,
    /// Optional `title` attribute (distinct from the link text).
    pub title: Option<String>,
    /// Whether text and attribute values are HTML-entity-encoded.
    pub escape: bool,
    /// Extra attributes appended verbatim after the generated ones.
    pub attrs: Attributes,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self { kind: None, title: None, escape: true, attrs: Attributes::new() }
    }
}

#[derive(Debug)]
struct HtmlInner {
    config: ViewConfig,
    router: Router,
}

/// The HTML helper: renders escaped markup fragments inside a rendering
/// context (routing state plus asset base paths).
///
/// The helper is cheap to clone; all state is behind an `Arc` and immutable
/// for the lifetime of the context.
///
/// # Example
///
/// ```rust
/// use trellis_html::{Html, ViewConfig};
/// use trellis_routing::Router;
///
/// let html = Html::new(ViewConfig::default(), Router::new());
/// assert_eq!(
///     html.script(&["app"]),
///     "<script type=\"text/javascript\" src=\"/js/app.js\"></script>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Html {
    inner: Arc<HtmlInner>,
}

impl Html {
    /// Creates a helper bound to the given view configuration and router.
    #[must_use]
    pub fn new(config: ViewConfig, router: Router) -> Self {
        debug!(webroot = %config.webroot, "view helper created");
        Self { inner: Arc::new(HtmlInner { config, router }) }
    }

    /// Returns the exact doctype markup for a known key, `None` otherwise.
    #[must_use]
    pub fn doc_type(key: &str) -> Option<&'static str> {
        doctype::doc_type(key)
    }

    /// Renders a `Content-Type` meta tag; defaults to the configured charset.
    #[must_use]
    pub fn charset(&self, encoding: Option<&str>) -> String {
        let encoding = encoding.unwrap_or(&self.inner.config.charset);
        format!(
            "<meta http-equiv=\"Content-Type\" content=\"text/html; charset={encoding}\" />"
        )
    }

    /// Renders an anchor, or a `<link />` meta link when `options.kind` is set.
    ///
    /// Registered kinds contribute their MIME type and `rel` attribute; the
    /// `icon` kind emits a second `rel="shortcut icon"` tag and falls back to
    /// `favicon.ico` when the target is empty. Unregistered kinds emit the
    /// link with only `href` and `title`.
    ///
    /// # Errors
    /// Returns [`HtmlError::NoRoute`] when a route target cannot be resolved.
    pub fn link(
        &self,
        title: &str,
        target: &Target,
        options: &LinkOptions,
    ) -> Result<String, HtmlError> {
        let Some(kind) = options.kind.as_deref() else {
            return self.anchor(title, target, options);
        };

        let registered = CONTENT_TYPES.iter().find(|(key, ..)| *key == kind);

        let href = if kind == "icon" && target.is_empty() {
            assets::resolve("/favicon.ico", "", "", &self.inner.config.webroot)
        } else {
            self.resolve_target(target)?
        };

        let title = maybe_escape(title, options.escape);
        let extra = options.attrs.render(options.escape);

        Ok(match registered {
            Some((_, mime, rel)) => {
                let mut out = format!(
                    "<link href=\"{href}\" type=\"{mime}\" rel=\"{rel}\" title=\"{title}\"{extra} />"
                );
                if kind == "icon" {
                    let _ = write!(
                        out,
                        "\n\t<link href=\"{href}\" type=\"{mime}\" rel=\"shortcut icon\" title=\"{title}\"{extra} />"
                    );
                }
                out
            }
            None => format!("<link href=\"{href}\" title=\"{title}\"{extra} />"),
        })
    }

    /// Renders one script tag per path, joined with newline + tab.
    ///
    /// Relative names gain the `.js` extension and the configured script base
    /// path; absolute paths and URLs are left in place (see [`crate::assets`]).
    /// The helper holds no per-call state, so repeated calls with the same
    /// name are idempotent.
    #[must_use]
    pub fn script(&self, paths: &[&str]) -> String {
        let config = &self.inner.config;
        paths
            .iter()
            .map(|path| {
                let src = assets::resolve(path, &config.js_path, ".js", &config.webroot);
                format!("<script type=\"text/javascript\" src=\"{src}\"></script>")
            })
            .collect::<Vec<_>>()
            .join("\n\t")
    }

    /// Renders one stylesheet link per path, joined with newline + tab.
    #[must_use]
    pub fn style(&self, paths: &[&str]) -> String {
        let config = &self.inner.config;
        paths
            .iter()
            .map(|path| {
                let href = assets::resolve(path, &config.css_path, ".css", &config.webroot);
                format!("<link rel=\"stylesheet\" type=\"text/css\" href=\"{href}\" />")
            })
            .collect::<Vec<_>>()
            .join("\n\t")
    }

    /// Renders an image tag. The `alt` attribute is always present, defaulting
    /// to an empty string.
    ///
    /// # Errors
    /// Returns [`HtmlError::NoRoute`] when a route target cannot be resolved.
    pub fn image(&self, target: &Target, attrs: &Attributes) -> Result<String, HtmlError> {
        let config = &self.inner.config;
        let src = match target {
            Target::Path(path) => assets::resolve(path, &config.img_path, "", &config.webroot),
            Target::Route(_) => self.resolve_target(target)?,
        };
        let alt = attrs.get("alt").unwrap_or("");
        let alt = escape_html(alt);
        let extra = attrs.render_except(&["alt"], true);
        Ok(format!("<img src=\"{src}\" alt=\"{alt}\"{extra} />"))
    }

    /// Renders an arbitrary element.
    ///
    /// `content: None` renders the opening tag only; `Some` wraps the content
    /// (escaped according to `escape`) in a full element.
    #[must_use]
    pub fn tag(
        &self,
        name: &str,
        content: Option<&str>,
        attrs: &Attributes,
        escape: bool,
    ) -> String {
        let rendered = attrs.render(escape);
        match content {
            Some(content) => {
                let content = maybe_escape(content, escape);
                format!("<{name}{rendered}>{content}</{name}>")
            }
            None => format!("<{name}{rendered}>"),
        }
    }

    /// Renders a `<div>` with the given class.
    #[must_use]
    pub fn block(
        &self,
        class: &str,
        content: Option<&str>,
        attrs: &Attributes,
        escape: bool,
    ) -> String {
        self.classed_tag("div", class, content, attrs, escape)
    }

    /// Renders a `<p>` with the given class.
    #[must_use]
    pub fn para(
        &self,
        class: &str,
        content: Option<&str>,
        attrs: &Attributes,
        escape: bool,
    ) -> String {
        self.classed_tag("p", class, content, attrs, escape)
    }

    fn classed_tag(
        &self,
        name: &str,
        class: &str,
        content: Option<&str>,
        attrs: &Attributes,
        escape: bool,
    ) -> String {
        let mut all = Attributes::new().set("class", class);
        for (attr, value) in &attrs.pairs {
            all = all.set(attr.clone(), value.clone());
        }
        self.tag(name, content, &all, escape)
    }

    fn anchor(
        &self,
        title: &str,
        target: &Target,
        options: &LinkOptions,
    ) -> Result<String, HtmlError> {
        let href = self.resolve_target(target)?;
        let text = maybe_escape(title, options.escape);
        let mut attrs = Attributes::new();
        if let Some(title_attr) = &options.title {
            attrs = attrs.set("title", title_attr.clone());
        }
        for (attr, value) in &options.attrs.pairs {
            attrs = attrs.set(attr.clone(), value.clone());
        }
        let rendered = attrs.render(options.escape);
        Ok(format!("<a href=\"{href}\"{rendered}>{text}</a>"))
    }

    fn resolve_target(&self, target: &Target) -> Result<String, HtmlError> {
        match target {
            Target::Path(path) => Ok(path.clone()),
            Target::Route(params) => {
                let url = self.inner.router.url(params).ok_or_else(|| HtmlError::NoRoute {
                    message: format!("no template for parameters {params:?}").into(),
                    context: None,
                })?;
                trace!(%url, "route target resolved");
                Ok(url)
            }
        }
    }
}

fn maybe_escape(text: &str, escape: bool) -> String {
    if escape { escape_html(text).into_owned() } else { text.to_owned() }
}
