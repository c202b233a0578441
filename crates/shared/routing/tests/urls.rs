use trellis_routing::{RouteParams, Router};

fn standard_router() -> Router {
    let mut router = Router::new();
    router.connect("/{:controller}/{:action}/{:id}.{:type}").expect("full template");
    router.connect("/{:controller}/{:action}.{:type}").expect("short template");
    router
}

#[test]
fn fills_defaults_for_missing_action() {
    let router = standard_router();
    let params = RouteParams::new().set("controller", "posts").set("type", "rss");
    assert_eq!(router.url(&params).as_deref(), Some("/posts/index.rss"));
}

#[test]
fn prefers_the_first_template_that_fits() {
    let router = standard_router();
    let params = RouteParams::new()
        .set("controller", "test")
        .set("action", "view")
        .set("id", "1")
        .set("type", "gif");
    assert_eq!(router.url(&params).as_deref(), Some("/test/view/1.gif"));
}

#[test]
fn refuses_routes_that_drop_parameters() {
    let mut router = Router::new();
    router.connect("/{:controller}/{:action}").expect("template");

    let params = RouteParams::new().set("controller", "posts").set("format", "rss");
    assert_eq!(router.url(&params), None, "unused `format` must not be silently dropped");
}

#[test]
fn empty_params_never_match() {
    let router = standard_router();
    assert_eq!(router.url(&RouteParams::new()), None);
}

#[test]
fn cleared_router_generates_nothing() {
    let mut router = standard_router();
    router.clear();
    let params = RouteParams::new().set("controller", "posts").set("type", "rss");
    assert_eq!(router.url(&params), None);
}

#[test]
fn set_replaces_existing_key() {
    let params = RouteParams::new().set("controller", "posts").set("controller", "pages");
    assert_eq!(params.get("controller"), Some("pages"));
}
