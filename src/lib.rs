//! # Flexer
//!
//! A small flexbox-style layout solver meant to be re-run every frame.
//!
//! Flexer turns a tree of abstract elements into screen-space rectangles.
//! Each container distributes its main axis between its children according
//! to their proportions, after insetting by its border and separating them
//! by its spacing.
//!
//! ## Core Concepts
//!
//! - **Proportion**: `0` keeps the size from an element's bounds, anything
//!   else claims a weighted share of the container
//! - **Border**: inner padding a container applies around its children
//! - **Spacing**: a gap taken out of every child but the last
//! - **Axis**: horizontal or vertical flow of a container's children
//!
//! ## Example
//!
//! ```rust
//! use flexer::{Element, Flexer, Rect};
//!
//! let mut flex = Flexer::new();
//! let root = flex
//!     .create(
//!         None,
//!         Element::new()
//!             .with_bounds(Rect::new(0, 0, 300, 100))
//!             .with_border(0)
//!             .with_spacing(0),
//!     )
//!     .unwrap();
//! let left = flex.create(Some(root), Element::new()).unwrap();
//! let right = flex.create(Some(root), Element::new().with_proportion(2)).unwrap();
//!
//! flex.perform_layout();
//! assert_eq!(flex.rect(left), Rect::new(0, 0, 100, 100));
//! assert_eq!(flex.rect(right), Rect::new(100, 0, 200, 100));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod ffi;
pub mod layout;
pub mod render;
pub mod terminal;

// Re-exports for convenience
pub use error::{FlexError, Result};
pub use layout::{Axis, Element, ElementId, ElementPatch, Flexer, Rect};
pub use render::{Canvas, Edges};
pub use terminal::{OutputBuffer, Session, SessionConfig, SessionEvent};
