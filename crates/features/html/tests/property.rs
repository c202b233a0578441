use proptest::prelude::*;
use trellis_html::{Attributes, Html, ViewConfig};
use trellis_routing::Router;

fn view() -> Html {
    Html::new(ViewConfig::default(), Router::new())
}

proptest! {
    // Escaped content never leaks raw markup delimiters into the element body.
    #[test]
    fn escaped_tag_content_contains_no_raw_specials(content in ".*") {
        let html = view();
        let rendered = html.tag("div", Some(&content), &Attributes::new(), true);
        let body = rendered
            .strip_prefix("<div>")
            .and_then(|r| r.strip_suffix("</div>"))
            .unwrap();
        prop_assert!(!body.contains('<'));
        prop_assert!(!body.contains('>'));
        prop_assert!(!body.contains('"'));
    }

    // Resolving an emitted script URL again yields the same URL.
    #[test]
    fn script_resolution_is_idempotent(name in "[a-z][a-z0-9_-]{0,24}") {
        let html = view();
        let first = html.script(&[name.as_str()]);
        let src_start = first.find("src=\"").unwrap() + 5;
        let src_end = first[src_start..].find('"').unwrap() + src_start;
        let resolved = &first[src_start..src_end];
        let second = html.script(&[resolved]);
        prop_assert_eq!(first, second);
    }
}
