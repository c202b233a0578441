//! Asset path resolution.
//!
//! Relative asset names are resolved against a base path and given their
//! canonical extension; absolute paths and fully-qualified URLs pass through
//! (absolute paths still gain the extension, URLs are left alone entirely).
//! Query strings are preserved and never considered part of the extension.

/// Resolves an asset reference to its emitted URL.
///
/// * `base` — type-specific base path (`/js`, `/css`, `/img`), applied only
///   to relative references.
/// * `ext` — canonical extension including the dot; empty to skip appending.
/// * `webroot` — prefix for every non-URL result; `"/"` means none.
pub(crate) fn resolve(path: &str, base: &str, ext: &str, webroot: &str) -> String {
    if path.contains("://") {
        return path.to_owned();
    }

    let (stem, query) = path.split_once('?').map_or((path, None), |(s, q)| (s, Some(q)));

    let mut resolved = stem.to_owned();
    if !ext.is_empty() && !resolved.ends_with(ext) {
        resolved.push_str(ext);
    }
    if let Some(query) = query {
        resolved.push('?');
        resolved.push_str(query);
    }

    let root = if webroot == "/" { "" } else { webroot };
    if resolved.starts_with('/') {
        format!("{root}{resolved}")
    } else {
        format!("{root}{base}/{resolved}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_extension_and_base_for_bare_names() {
        assert_eq!(resolve("script", "/js", ".js", "/"), "/js/script.js");
        assert_eq!(resolve("screen", "/css", ".css", "/"), "/css/screen.css");
    }

    #[test]
    fn keeps_existing_extension() {
        assert_eq!(resolve("script.js", "/js", ".js", "/"), "/js/script.js");
    }

    #[test]
    fn query_string_is_not_part_of_the_extension() {
        assert_eq!(
            resolve("scriptaculous.js?load=effects", "/js", ".js", "/"),
            "/js/scriptaculous.js?load=effects"
        );
        assert_eq!(resolve("screen.css?1234", "/css", ".css", "/"), "/css/screen.css?1234");
    }

    #[test]
    fn absolute_paths_skip_the_base_but_not_the_extension() {
        assert_eq!(resolve("/plugin/js/jquery-1.1.2", "/js", ".js", "/"), "/plugin/js/jquery-1.1.2.js");
        assert_eq!(
            resolve("/some_other_path/myfile.1.2.2.min.js", "/js", ".js", "/"),
            "/some_other_path/myfile.1.2.2.min.js"
        );
    }

    #[test]
    fn urls_pass_through_untouched() {
        assert_eq!(
            resolve("http://example.com/jquery.js", "/js", ".js", "/"),
            "http://example.com/jquery.js"
        );
    }

    #[test]
    fn webroot_prefixes_non_url_results() {
        assert_eq!(resolve("script", "/js", ".js", "/testing"), "/testing/js/script.js");
        assert_eq!(resolve("/logo.png", "/img", "", "/testing"), "/testing/logo.png");
    }
}
