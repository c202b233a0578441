use serde::Deserialize;

/// View-layer configuration: webroot and asset base paths.
///
/// All asset URLs emitted by the helper are resolved against these settings.
/// The defaults match the conventional public-directory layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Base URL path the application is mounted under.
    pub webroot: String,
    /// Base path for JavaScript assets.
    pub js_path: String,
    /// Base path for stylesheet assets.
    pub css_path: String,
    /// Base path for image assets.
    pub img_path: String,
    /// Character set emitted by [`crate::Html::charset`] when none is given.
    pub charset: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            webroot: "/".to_owned(),
            js_path: "/js".to_owned(),
            css_path: "/css".to_owned(),
            img_path: "/img".to_owned(),
            charset: "utf-8".to_owned(),
        }
    }
}
