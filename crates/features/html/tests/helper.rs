use trellis_html::{doc_type, Attributes, Html, LinkOptions, Target, ViewConfig};
use trellis_routing::{RouteParams, Router};

fn view() -> Html {
    let mut router = Router::new();
    router.connect("/{:controller}/{:action}/{:id}.{:type}").unwrap();
    router.connect("/{:controller}/{:action}").unwrap();
    Html::new(ViewConfig::default(), router)
}

#[test]
fn doctypes_are_emitted_verbatim() {
    assert_eq!(doc_type("html5"), Some("<!doctype html>"));
    assert_eq!(
        doc_type("html4-strict"),
        Some(
            "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"http://www.w3.org/TR/html4/strict.dtd\">"
        )
    );
    assert_eq!(
        doc_type("xhtml-strict"),
        Some(
            "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">"
        )
    );
    assert_eq!(doc_type("badness"), None);
}

#[test]
fn charset_defaults_to_the_configured_encoding() {
    let html = view();
    assert_eq!(
        html.charset(None),
        "<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\" />"
    );
    assert_eq!(
        html.charset(Some("UTF-7")),
        "<meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-7\" />"
    );
}

#[test]
fn anchors_escape_their_text_by_default() {
    let html = view();
    let link = html.link("Next >", &Target::from("#"), &LinkOptions::default()).unwrap();
    assert_eq!(link, "<a href=\"#\">Next &gt;</a>");

    let options = LinkOptions { escape: false, ..LinkOptions::default() };
    let link = html.link("Next >", &Target::from("#"), &options).unwrap();
    assert_eq!(link, "<a href=\"#\">Next ></a>");
}

#[test]
fn anchor_title_attributes_are_entity_encoded_even_when_already_encoded() {
    let html = view();
    let options =
        LinkOptions { title: Some("Continue &#8230;".to_owned()), ..LinkOptions::default() };
    let link = html.link("Next >", &Target::from("#"), &options).unwrap();
    assert_eq!(link, "<a href=\"#\" title=\"Continue &amp;#8230;\">Next &gt;</a>");

    let options = LinkOptions {
        title: Some("Continue &#8230;".to_owned()),
        escape: false,
        ..LinkOptions::default()
    };
    let link = html.link("Next >", &Target::from("#"), &options).unwrap();
    assert_eq!(link, "<a href=\"#\" title=\"Continue &#8230;\">Next ></a>");
}

#[test]
fn anchors_resolve_route_targets() {
    let html = view();
    let params = RouteParams::new()
        .set("controller", "test")
        .set("action", "view")
        .set("id", "1")
        .set("type", "gif");
    let link = html.link("Test", &Target::from(params), &LinkOptions::default()).unwrap();
    assert_eq!(link, "<a href=\"/test/view/1.gif\">Test</a>");
}

#[test]
fn unroutable_targets_are_an_error() {
    let html = Html::new(ViewConfig::default(), Router::new());
    let params = RouteParams::new().set("controller", "posts").set("action", "index");
    assert!(html.link("Posts", &Target::from(params), &LinkOptions::default()).is_err());
}

#[test]
fn registered_content_types_emit_meta_links() {
    let html = view();
    let options = LinkOptions { kind: Some("rss".to_owned()), ..LinkOptions::default() };
    let link = html.link("RSS Feed", &Target::from("/posts/index.rss"), &options).unwrap();
    assert_eq!(
        link,
        "<link href=\"/posts/index.rss\" type=\"application/rss+xml\" rel=\"alternate\" title=\"RSS Feed\" />"
    );

    let options = LinkOptions { kind: Some("atom".to_owned()), ..LinkOptions::default() };
    let link = html.link("Atom Feed", &Target::from("/posts/index.atom"), &options).unwrap();
    assert_eq!(
        link,
        "<link href=\"/posts/index.atom\" type=\"application/atom+xml\" rel=\"alternate\" title=\"Atom Feed\" />"
    );
}

#[test]
fn icon_links_emit_a_shortcut_icon_twin() {
    let html = view();
    let options = LinkOptions { kind: Some("icon".to_owned()), ..LinkOptions::default() };
    let link = html.link("Favicon", &Target::from("/favicon.gif"), &options).unwrap();
    assert_eq!(
        link,
        "<link href=\"/favicon.gif\" type=\"image/x-icon\" rel=\"icon\" title=\"Favicon\" />\n\t\
         <link href=\"/favicon.gif\" type=\"image/x-icon\" rel=\"shortcut icon\" title=\"Favicon\" />"
    );
}

#[test]
fn empty_icon_targets_fall_back_to_the_default_favicon() {
    let html = view();
    let options = LinkOptions { kind: Some("icon".to_owned()), ..LinkOptions::default() };
    let link = html.link("Favicon", &Target::from(""), &options).unwrap();
    assert_eq!(
        link,
        "<link href=\"/favicon.ico\" type=\"image/x-icon\" rel=\"icon\" title=\"Favicon\" />\n\t\
         <link href=\"/favicon.ico\" type=\"image/x-icon\" rel=\"shortcut icon\" title=\"Favicon\" />"
    );
}

#[test]
fn unregistered_content_types_emit_a_bare_link() {
    let html = view();
    let options = LinkOptions { kind: Some("rong".to_owned()), ..LinkOptions::default() };
    let link = html.link("Bad Type", &Target::from("/feed"), &options).unwrap();
    assert_eq!(link, "<link href=\"/feed\" title=\"Bad Type\" />");
}

#[test]
fn scripts_gain_the_extension_and_base_path() {
    let html = view();
    let expected = "<script type=\"text/javascript\" src=\"/js/script.js\"></script>";
    assert_eq!(html.script(&["script"]), expected);
    assert_eq!(html.script(&["script.js"]), expected);
    assert_eq!(html.script(&["/js/script.js"]), expected);
    assert_eq!(
        html.script(&["scriptaculous.js?load=effects"]),
        "<script type=\"text/javascript\" src=\"/js/scriptaculous.js?load=effects\"></script>"
    );
    assert_eq!(
        html.script(&["jquery-1.1.2"]),
        "<script type=\"text/javascript\" src=\"/js/jquery-1.1.2.js\"></script>"
    );
    assert_eq!(
        html.script(&["/plugin/js/jquery-1.1.2"]),
        "<script type=\"text/javascript\" src=\"/plugin/js/jquery-1.1.2.js\"></script>"
    );
    assert_eq!(
        html.script(&["http://example.com/jquery.js"]),
        "<script type=\"text/javascript\" src=\"http://example.com/jquery.js\"></script>"
    );
}

#[test]
fn multiple_scripts_join_with_newline_and_tab() {
    let html = view();
    assert_eq!(
        html.script(&["foo", "bar"]),
        "<script type=\"text/javascript\" src=\"/js/foo.js\"></script>\n\t\
         <script type=\"text/javascript\" src=\"/js/bar.js\"></script>"
    );
}

#[test]
fn styles_gain_the_extension_and_base_path() {
    let html = view();
    let expected = "<link rel=\"stylesheet\" type=\"text/css\" href=\"/css/screen.css\" />";
    assert_eq!(html.style(&["screen"]), expected);
    assert_eq!(html.style(&["screen.css"]), expected);
    assert_eq!(
        html.style(&["screen.css?1234"]),
        "<link rel=\"stylesheet\" type=\"text/css\" href=\"/css/screen.css?1234\" />"
    );
    assert_eq!(
        html.style(&["http://example.com/style.css"]),
        "<link rel=\"stylesheet\" type=\"text/css\" href=\"http://example.com/style.css\" />"
    );
}

#[test]
fn webroot_prefixes_generated_asset_urls() {
    let config = ViewConfig { webroot: "/testing".to_owned(), ..ViewConfig::default() };
    let html = Html::new(config, Router::new());
    assert_eq!(
        html.script(&["script"]),
        "<script type=\"text/javascript\" src=\"/testing/js/script.js\"></script>"
    );
    assert_eq!(
        html.style(&["screen"]),
        "<link rel=\"stylesheet\" type=\"text/css\" href=\"/testing/css/screen.css\" />"
    );
}

#[test]
fn images_always_carry_an_alt_attribute() {
    let html = view();
    let image = html.image(&Target::from("image.gif"), &Attributes::new()).unwrap();
    assert_eq!(image, "<img src=\"/img/image.gif\" alt=\"\" />");

    let image = html.image(&Target::from("/path/to/image.jpg"), &Attributes::new()).unwrap();
    assert_eq!(image, "<img src=\"/path/to/image.jpg\" alt=\"\" />");

    let image = html
        .image(&Target::from("http://example.com/logo.gif"), &Attributes::new())
        .unwrap();
    assert_eq!(image, "<img src=\"http://example.com/logo.gif\" alt=\"\" />");

    let attrs = Attributes::new().set("alt", "Company logo");
    let image = html.image(&Target::from("logo.gif"), &attrs).unwrap();
    assert_eq!(image, "<img src=\"/img/logo.gif\" alt=\"Company logo\" />");
}

#[test]
fn images_resolve_route_targets() {
    let html = view();
    let params = RouteParams::new()
        .set("controller", "test")
        .set("action", "view")
        .set("id", "1")
        .set("type", "gif");
    let image = html.image(&Target::from(params), &Attributes::new()).unwrap();
    assert_eq!(image, "<img src=\"/test/view/1.gif\" alt=\"\" />");
}

#[test]
fn tags_without_content_stay_open() {
    let html = view();
    assert_eq!(html.tag("div", None, &Attributes::new(), true), "<div>");
    let attrs = Attributes::new().set("id", "main");
    assert_eq!(html.tag("div", None, &attrs, true), "<div id=\"main\">");
}

#[test]
fn tag_content_is_escaped_by_default() {
    let html = view();
    assert_eq!(
        html.tag("div", Some("<text>"), &Attributes::new(), true),
        "<div>&lt;text&gt;</div>"
    );
    assert_eq!(html.tag("div", Some("<text>"), &Attributes::new(), false), "<div><text></div>");
}

#[test]
fn route_resolution_is_traced() {
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Capture {
        type Writer = Self;
        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::level_filters::LevelFilter::TRACE)
        .with_writer(capture.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let html = view();
        let params = RouteParams::new().set("controller", "posts");
        html.link("Posts", &Target::from(params), &LinkOptions::default()).unwrap();
    });

    let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("view helper created"), "missing creation event: {output}");
    assert!(output.contains("route target resolved"), "missing resolution event: {output}");
}

#[test]
fn blocks_and_paragraphs_put_the_class_first() {
    let html = view();
    assert_eq!(
        html.block("note", Some("hello"), &Attributes::new(), true),
        "<div class=\"note\">hello</div>"
    );
    assert_eq!(html.block("note", None, &Attributes::new(), true), "<div class=\"note\">");
    assert_eq!(
        html.para("intro", Some("hello"), &Attributes::new(), true),
        "<p class=\"intro\">hello</p>"
    );
    let attrs = Attributes::new().set("id", "first");
    assert_eq!(
        html.para("intro", Some("hello"), &attrs, true),
        "<p class=\"intro\" id=\"first\">hello</p>"
    );
}
