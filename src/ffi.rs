//! C Foreign Function Interface (FFI) for Flexer.
//!
//! This module provides a C-compatible API for embedding the layout engine
//! in hosts written in other languages. All functions are `extern "C"` with
//! stable ABI. Element ids cross the boundary as raw `u64` values, with `0`
//! meaning "no element".
//!
//! # Safety
//!
//! Handle pointers must come from [`flexer_new`] and must not be used after
//! [`flexer_destroy`]. Null pointers are tolerated everywhere.
//!
//! # Example (C)
//!
//! ```c
//! #include "flexer.h"
//!
//! int main() {
//!     Flexer* flex = flexer_new();
//!     if (!flex) return 1;
//!
//!     FlexerElementDesc desc = flexer_element_desc_default();
//!     desc.bounds = (FlexerRect){ 0, 0, 320, 240 };
//!     uint64_t root = flexer_create_element(flex, 0, &desc);
//!
//!     // Each tick...
//!     flexer_perform_layout(flex);
//!     FlexerRect rect;
//!     flexer_get_rect(flex, root, &rect);
//!
//!     flexer_destroy(flex);
//!     return 0;
//! }
//! ```

// FFI modules intentionally use unsafe and no_mangle
#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use crate::layout::{Axis, Element, ElementId, ElementPatch, Flexer as Engine, Rect};
use std::os::raw::c_char;

// =============================================================================
// Opaque Handle Types
// =============================================================================

/// Opaque handle to a layout engine.
pub struct Flexer(Engine);

/// Rectangle as seen from C; identical in layout to [`Rect`].
pub type FlexerRect = Rect;

// =============================================================================
// Result Codes and Descriptors
// =============================================================================

/// Result codes for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexerResult {
    /// Operation succeeded.
    Ok = 0,
    /// Null pointer passed.
    NullPointer = 1,
    /// The id does not name an element.
    NotFound = 2,
}

/// Horizontal flow, see [`FlexerElementDesc::axis`].
pub const FLEXER_AXIS_HORIZONTAL: u32 = 0;
/// Vertical flow, see [`FlexerElementDesc::axis`].
pub const FLEXER_AXIS_VERTICAL: u32 = 1;

/// Layout parameters of an element.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexerElementDesc {
    /// Bounds (root rectangle, or preferred size and offset for children).
    pub bounds: FlexerRect,
    /// Share of the container's main axis; `0` for fixed size.
    pub proportion: u32,
    /// Inner padding around children.
    pub border: u32,
    /// Gap between consecutive children.
    pub spacing: u32,
    /// `FLEXER_AXIS_HORIZONTAL` or `FLEXER_AXIS_VERTICAL`; other values
    /// mean horizontal.
    pub axis: u32,
}

impl From<&FlexerElementDesc> for Element {
    fn from(desc: &FlexerElementDesc) -> Self {
        Self::new()
            .with_bounds(desc.bounds)
            .with_proportion(desc.proportion)
            .with_border(desc.border)
            .with_spacing(desc.spacing)
            .with_axis(axis_from_raw(desc.axis))
    }
}

const fn axis_from_raw(raw: u32) -> Axis {
    match raw {
        FLEXER_AXIS_VERTICAL => Axis::Vertical,
        _ => Axis::Horizontal,
    }
}

// =============================================================================
// Engine Functions
// =============================================================================

/// Create a new, empty layout engine.
#[unsafe(no_mangle)]
pub extern "C" fn flexer_new() -> *mut Flexer {
    Box::into_raw(Box::new(Flexer(Engine::new())))
}

/// Destroy a layout engine.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn flexer_destroy(flex: *mut Flexer) {
    if !flex.is_null() {
        drop(Box::from_raw(flex));
    }
}

/// Element parameters with the library defaults.
#[unsafe(no_mangle)]
pub extern "C" fn flexer_element_desc_default() -> FlexerElementDesc {
    let element = Element::default();
    FlexerElementDesc {
        bounds: element.bounds,
        proportion: element.proportion,
        border: element.border,
        spacing: element.spacing,
        axis: match element.axis {
            Axis::Horizontal => FLEXER_AXIS_HORIZONTAL,
            Axis::Vertical => FLEXER_AXIS_VERTICAL,
        },
    }
}

/// Register an element under `parent` (`0` for a root).
///
/// Returns the new element id, or 0 if a pointer is null or the parent
/// does not exist.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn flexer_create_element(
    flex: *mut Flexer,
    parent: u64,
    desc: *const FlexerElementDesc,
) -> u64 {
    if flex.is_null() || desc.is_null() {
        return 0;
    }
    (*flex)
        .0
        .create(ElementId::new(parent), Element::from(&*desc))
        .map_or(0, ElementId::get)
}

/// Replace all layout parameters of an element.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn flexer_update_element(
    flex: *mut Flexer,
    id: u64,
    desc: *const FlexerElementDesc,
) -> FlexerResult {
    if flex.is_null() || desc.is_null() {
        return FlexerResult::NullPointer;
    }
    let Some(id) = ElementId::new(id) else {
        return FlexerResult::NotFound;
    };
    let patch = ElementPatch::from(&Element::from(&*desc));
    match (*flex).0.update(id, patch) {
        Ok(()) => FlexerResult::Ok,
        Err(_) => FlexerResult::NotFound,
    }
}

/// Recompute all rectangles.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn flexer_perform_layout(flex: *mut Flexer) {
    if !flex.is_null() {
        (*flex).0.perform_layout();
    }
}

/// Read the rectangle computed for `id` by the last layout pass.
///
/// On `NotFound`, `rect_out` is set to an all-zero rectangle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn flexer_get_rect(
    flex: *const Flexer,
    id: u64,
    rect_out: *mut FlexerRect,
) -> FlexerResult {
    if flex.is_null() || rect_out.is_null() {
        return FlexerResult::NullPointer;
    }
    match ElementId::new(id).and_then(|id| (*flex).0.try_rect(id)) {
        Some(rect) => {
            *rect_out = rect;
            FlexerResult::Ok
        }
        None => {
            *rect_out = Rect::ZERO;
            FlexerResult::NotFound
        }
    }
}

/// Number of rectangles produced so far.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn flexer_rect_count(flex: *const Flexer) -> usize {
    if flex.is_null() {
        return 0;
    }
    (*flex).0.rects().len()
}

/// Id of the deepest element containing the point, or 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn flexer_hit_test(flex: *const Flexer, x: i32, y: i32) -> u64 {
    if flex.is_null() {
        return 0;
    }
    (*flex).0.hit_test(x, y).map_or(0, ElementId::get)
}

// =============================================================================
// Version Information
// =============================================================================

/// Get the Flexer version string.
#[unsafe(no_mangle)]
pub extern "C" fn flexer_version() -> *const c_char {
    static VERSION: &[u8] = b"0.1.0\0";
    VERSION.as_ptr().cast::<c_char>()
}
