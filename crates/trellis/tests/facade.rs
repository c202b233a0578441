use trellis::{LinkOptions, RouteParams, Target, ToolkitConfig, init_view};

#[test]
fn init_view_wires_the_default_route_set() {
    let html = init_view(&ToolkitConfig::default()).unwrap();

    let params = RouteParams::new()
        .set("controller", "test")
        .set("action", "view")
        .set("id", "1")
        .set("type", "gif");
    let link = html.link("Test", &Target::from(params), &LinkOptions::default()).unwrap();
    assert_eq!(link, "<a href=\"/test/view/1.gif\">Test</a>");

    let params = RouteParams::new().set("controller", "posts");
    let link = html.link("Posts", &Target::from(params), &LinkOptions::default()).unwrap();
    assert_eq!(link, "<a href=\"/posts/index\">Posts</a>");
}

#[test]
fn toolkit_defaults_cover_both_subsystems() {
    let config = ToolkitConfig::default();
    assert_eq!(config.view.webroot, "/");
    assert_eq!(config.view.charset, "utf-8");
    assert!(config.source.auto_connect);
}
