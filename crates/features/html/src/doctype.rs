//! Document type declarations.

/// Known document-type keys and their exact markup.
const DOC_TYPES: &[(&str, &str)] = &[
    ("html5", "<!doctype html>"),
    (
        "html4-strict",
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"http://www.w3.org/TR/html4/strict.dtd\">",
    ),
    (
        "html4-trans",
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \"http://www.w3.org/TR/html4/loose.dtd\">",
    ),
    (
        "html4-frame",
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Frameset//EN\" \"http://www.w3.org/TR/html4/frameset.dtd\">",
    ),
    (
        "xhtml-strict",
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">",
    ),
    (
        "xhtml-trans",
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">",
    ),
    (
        "xhtml-frame",
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Frameset//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd\">",
    ),
    (
        "xhtml11",
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.1//EN\" \"http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd\">",
    ),
];

/// Looks up the exact doctype markup for a key; unknown keys yield `None`.
#[must_use]
pub fn doc_type(key: &str) -> Option<&'static str> {
    DOC_TYPES.iter().find(|(k, _)| *k == key).map(|(_, markup)| *markup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_resolves() {
        for (key, _) in DOC_TYPES {
            assert!(doc_type(key).is_some(), "missing doctype for {key}");
        }
    }
}
