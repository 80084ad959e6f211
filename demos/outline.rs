//! Outline Demo: Lays out a small element tree every tick and draws it.
//!
//! The root follows the terminal size, so resizing the window shows the
//! proportional distribution reacting live. Number keys `1`-`4` change the
//! proportion of the left pane.
//!
//! Press 'q' or Escape to quit. Logs go to stderr, e.g.
//! `RUST_LOG=flexer=debug cargo run --example outline 2>flexer.log`.

use flexer::{Axis, Canvas, Element, ElementPatch, Flexer, Rect, Session, SessionEvent};
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Inset of the root from the terminal edges.
const MARGIN: i32 = 2;

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flexer=info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();
}

fn root_bounds(width: u16, height: u16) -> Rect {
    Rect::new(
        MARGIN,
        MARGIN,
        i32::from(width) - 2 * MARGIN,
        i32::from(height) - 2 * MARGIN,
    )
}

/// Ids the demo adjusts at runtime.
struct Tree {
    root: flexer::ElementId,
    left_pane: flexer::ElementId,
}

fn build_tree(flex: &mut Flexer, width: u16, height: u16) -> flexer::Result<Tree> {
    let root = flex.create(
        None,
        Element::new()
            .with_bounds(root_bounds(width, height))
            .with_axis(Axis::Vertical)
            .with_border(1)
            .with_spacing(1),
    )?;

    // A fixed-height toolbar: stretch, fixed, stretch.
    let toolbar = flex.create(
        Some(root),
        Element::new()
            .with_bounds(Rect::from_size(0, 5))
            .with_proportion(0)
            .with_border(1)
            .with_spacing(1),
    )?;
    flex.create(Some(toolbar), Element::new().with_bounds(Rect::from_size(0, 0)))?;
    flex.create(
        Some(toolbar),
        Element::new().with_bounds(Rect::from_size(16, 0)).with_proportion(0),
    )?;
    flex.create(Some(toolbar), Element::new().with_bounds(Rect::from_size(0, 0)))?;

    // The body takes what is left: two panes side by side.
    let body = flex.create(
        Some(root),
        Element::new()
            .with_bounds(Rect::ZERO)
            .with_border(1)
            .with_spacing(2),
    )?;
    let left_pane = flex.create(
        Some(body),
        Element::new()
            .with_bounds(Rect::ZERO)
            .with_axis(Axis::Vertical)
            .with_border(1)
            .with_spacing(1),
    )?;
    for proportion in [1, 2] {
        flex.create(
            Some(left_pane),
            Element::new().with_bounds(Rect::ZERO).with_proportion(proportion),
        )?;
    }
    flex.create(
        Some(body),
        Element::new().with_bounds(Rect::ZERO).with_proportion(2),
    )?;

    Ok(Tree { root, left_pane })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut session = Session::new()?;
    let mut flex = Flexer::new();
    let tree = build_tree(&mut flex, session.width(), session.height())?;
    let mut canvas = Canvas::new(session.width(), session.height());

    loop {
        match session.poll_event(Duration::from_millis(5))? {
            Some(SessionEvent::Quit) => break,
            Some(SessionEvent::Resize { width, height }) => {
                flex.update(tree.root, ElementPatch::new().bounds(root_bounds(width, height)))?;
                canvas.resize(width, height);
            }
            Some(SessionEvent::Key(c @ '1'..='4')) => {
                let proportion = c.to_digit(10).unwrap_or(1);
                flex.update(tree.left_pane, ElementPatch::new().proportion(proportion))?;
                tracing::info!(proportion, "left pane proportion changed");
            }
            Some(SessionEvent::Key(_)) | None => {}
        }

        flex.perform_layout();

        canvas.clear();
        canvas.draw_layout(&flex);
        session.present(&canvas)?;
    }

    drop(session);
    println!("Laid out {} elements.", flex.len());
    Ok(())
}
