//! Layout module: Proportional distribution of space over an element tree.
//!
//! Elements are registered once and laid out again on every tick. Each
//! container splits its main axis between its children by proportion and
//! stretches them across its cross axis.

mod axis;
mod element;
mod engine;
mod rect;

pub use axis::Axis;
pub use element::{Element, ElementId, ElementPatch};
pub use engine::Flexer;
pub use rect::Rect;
