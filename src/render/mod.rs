//! Render module: Debug drawing of layout results.
//!
//! Rectangles are drawn as box outlines into a character [`Canvas`], which
//! a host can print or hand to [`crate::terminal::Session`]. Overlapping
//! outlines merge into junction glyphs through [`Edges`].

mod canvas;
mod edges;

pub use canvas::{Canvas, CanvasCell};
pub use edges::Edges;
