use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use trellis_html::{Attributes, Html, LinkOptions, Target, ViewConfig};
use trellis_routing::Router;

fn bench_render(c: &mut Criterion) {
    let mut router = Router::new();
    router.connect("/{:controller}/{:action}").expect("valid template");
    let html = Html::new(ViewConfig::default(), router);

    c.bench_function("script", |b| {
        b.iter(|| html.script(black_box(&["app", "vendor/jquery-1.1.2", "admin.js?v=3"])));
    });

    c.bench_function("anchor_escaped", |b| {
        let target = Target::from("/posts/index");
        let options = LinkOptions::default();
        b.iter(|| html.link(black_box("Next > page"), &target, &options));
    });

    c.bench_function("tag_with_attributes", |b| {
        let attrs = Attributes::new().set("id", "main").set("data-kind", "panel");
        b.iter(|| html.tag("div", Some(black_box("<inline content>")), &attrs, true));
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
