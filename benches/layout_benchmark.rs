//! Layout benchmark: Measure a full layout pass over trees of various sizes.
//!
//! Target: well under a millisecond for a few thousand elements, so the pass
//! fits in a 60 FPS frame budget.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flexer::{Axis, Canvas, Element, ElementPatch, Flexer, Rect};

/// Build a tree of alternating rows and columns, `fanout` children per node.
fn create_test_tree(depth: u32, fanout: u32) -> Flexer {
    let mut flex = Flexer::new();
    let root = flex
        .create(None, Element::new().with_bounds(Rect::new(0, 0, 1920, 1080)))
        .expect("root");

    let mut level = vec![root];
    for d in 0..depth {
        let axis = if d % 2 == 0 { Axis::Vertical } else { Axis::Horizontal };
        let mut next = Vec::with_capacity(level.len() * fanout as usize);
        for &parent in &level {
            for i in 0..fanout {
                let element = if i == 0 {
                    Element::new()
                        .with_bounds(Rect::from_size(24, 24))
                        .with_proportion(0)
                } else {
                    Element::new().with_proportion(i)
                };
                let id = flex
                    .create(Some(parent), element.with_axis(axis))
                    .expect("child");
                next.push(id);
            }
        }
        level = next;
    }
    flex
}

fn layout_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("perform_layout");
    for (depth, fanout) in [(2, 4), (4, 4), (3, 12), (6, 4)] {
        let mut flex = create_test_tree(depth, fanout);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_elements", flex.len())),
            &(),
            |b, ()| b.iter(|| black_box(&mut flex).perform_layout()),
        );
    }
    group.finish();
}

fn layout_after_resize(c: &mut Criterion) {
    let mut flex = create_test_tree(4, 4);
    let root = flex.roots().next().expect("root");
    let mut width = 1920;

    c.bench_function("layout_after_resize", |b| {
        b.iter(|| {
            width = if width == 1920 { 1280 } else { 1920 };
            flex.update(root, ElementPatch::new().bounds(Rect::new(0, 0, width, 1080)))
                .expect("update");
            flex.perform_layout();
            black_box(flex.rect(root))
        })
    });
}

fn draw_outlines(c: &mut Criterion) {
    let mut flex = create_test_tree(3, 4);
    let root = flex.roots().next().expect("root");
    flex.update(root, ElementPatch::new().bounds(Rect::new(0, 0, 200, 50)))
        .expect("update");
    flex.perform_layout();

    c.bench_function("draw_layout_200x50", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(200, 50);
            canvas.draw_layout(black_box(&flex));
            canvas
        })
    });
}

criterion_group!(benches, layout_pass, layout_after_resize, draw_outlines);
criterion_main!(benches);
