//! Element and ElementId: Nodes of the layout tree.

use super::axis::Axis;
use super::rect::Rect;
use std::num::NonZeroU64;

/// Unique identifier for a layout element.
///
/// Ids are allocated from 1 upwards and never reused. The raw value `0` is
/// the "no element" sentinel, which is `None` on the Rust side.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ElementId(NonZeroU64);

impl ElementId {
    /// The first id an engine hands out.
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    /// Wrap a raw id, mapping the sentinel `0` to `None`.
    pub const fn new(raw: u64) -> Option<Self> {
        match NonZeroU64::new(raw) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// The raw integer value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// The id allocated after this one, or `None` once the id space is spent.
    pub(crate) const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the layout tree.
///
/// The public fields are the layout parameters a host supplies at creation
/// and may later patch through [`ElementPatch`]. Tree links are owned by the
/// engine and are read-only from outside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// For a root: its final rectangle. For a child: preferred size on the
    /// main axis when fixed, plus an offset added to the layout position.
    pub bounds: Rect,
    /// Share of the container's main axis; `0` keeps the size from `bounds`.
    pub proportion: u32,
    /// Inner padding applied around this element's children.
    pub border: u32,
    /// Gap taken out of every child but the last along the main axis.
    pub spacing: u32,
    /// Direction in which this element's children flow.
    pub axis: Axis,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            bounds: Rect::default(),
            proportion: 1,
            border: 3,
            spacing: 3,
            axis: Axis::Horizontal,
            parent: None,
            children: Vec::new(),
        }
    }
}

impl Element {
    /// Create an element with the library defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bounds.
    #[must_use]
    pub const fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the proportion.
    #[must_use]
    pub const fn with_proportion(mut self, proportion: u32) -> Self {
        self.proportion = proportion;
        self
    }

    /// Set the border.
    #[must_use]
    pub const fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    /// Set the spacing.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// The containing element, or `None` for a root.
    #[inline]
    pub const fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Children in layout order.
    #[inline]
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Whether this element is a root.
    #[inline]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Whether this element takes its main-axis size from `bounds`.
    #[inline]
    pub const fn is_fixed(&self) -> bool {
        self.proportion == 0
    }

    /// Copy the layout parameters of `template` into a fresh, unlinked node.
    pub(crate) fn detached(template: Self, parent: Option<ElementId>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            ..template
        }
    }

    pub(crate) fn push_child(&mut self, child: ElementId) {
        self.children.push(child);
    }
}

/// A partial update of an element's layout parameters.
///
/// Fields left as `None` are not touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementPatch {
    /// New bounds.
    pub bounds: Option<Rect>,
    /// New proportion.
    pub proportion: Option<u32>,
    /// New border.
    pub border: Option<u32>,
    /// New spacing.
    pub spacing: Option<u32>,
    /// New axis.
    pub axis: Option<Axis>,
}

impl ElementPatch {
    /// An empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the bounds.
    #[must_use]
    pub const fn bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Replace the proportion.
    #[must_use]
    pub const fn proportion(mut self, proportion: u32) -> Self {
        self.proportion = Some(proportion);
        self
    }

    /// Replace the border.
    #[must_use]
    pub const fn border(mut self, border: u32) -> Self {
        self.border = Some(border);
        self
    }

    /// Replace the spacing.
    #[must_use]
    pub const fn spacing(mut self, spacing: u32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Replace the axis.
    #[must_use]
    pub const fn axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    pub(crate) fn apply(self, element: &mut Element) {
        if let Some(bounds) = self.bounds {
            element.bounds = bounds;
        }
        if let Some(proportion) = self.proportion {
            element.proportion = proportion;
        }
        if let Some(border) = self.border {
            element.border = border;
        }
        if let Some(spacing) = self.spacing {
            element.spacing = spacing;
        }
        if let Some(axis) = self.axis {
            element.axis = axis;
        }
    }
}

/// Captures every parameter of `element`, so applying it reproduces them.
impl From<&Element> for ElementPatch {
    fn from(element: &Element) -> Self {
        Self {
            bounds: Some(element.bounds),
            proportion: Some(element.proportion),
            border: Some(element.border),
            spacing: Some(element.spacing),
            axis: Some(element.axis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_none() {
        assert_eq!(ElementId::new(0), None);
        assert_eq!(ElementId::new(1), Some(ElementId::FIRST));
        assert_eq!(ElementId::FIRST.get(), 1);
    }

    #[test]
    fn test_option_id_is_pointer_sized() {
        assert_eq!(std::mem::size_of::<Option<ElementId>>(), 8);
    }

    #[test]
    fn test_next_id() {
        assert_eq!(ElementId::FIRST.next().map(ElementId::get), Some(2));
        assert_eq!(ElementId::new(u64::MAX).and_then(ElementId::next), None);
    }

    #[test]
    fn test_element_defaults() {
        let el = Element::new();
        assert_eq!(el.bounds, Rect::new(0, 0, 100, 100));
        assert_eq!(el.proportion, 1);
        assert_eq!(el.border, 3);
        assert_eq!(el.spacing, 3);
        assert_eq!(el.axis, Axis::Horizontal);
        assert!(el.is_root());
        assert!(el.children().is_empty());
    }

    #[test]
    fn test_builder_pattern() {
        let el = Element::new()
            .with_bounds(Rect::new(1, 2, 3, 4))
            .with_proportion(0)
            .with_border(0)
            .with_spacing(7)
            .with_axis(Axis::Vertical);

        assert_eq!(el.bounds, Rect::new(1, 2, 3, 4));
        assert!(el.is_fixed());
        assert_eq!(el.border, 0);
        assert_eq!(el.spacing, 7);
        assert_eq!(el.axis, Axis::Vertical);
    }

    #[test]
    fn test_patch_touches_only_set_fields() {
        let mut el = Element::new();
        ElementPatch::new().proportion(4).axis(Axis::Vertical).apply(&mut el);

        assert_eq!(el.proportion, 4);
        assert_eq!(el.axis, Axis::Vertical);
        assert_eq!(el.border, 3);
        assert_eq!(el.bounds, Rect::default());
    }

    #[test]
    fn test_full_patch_from_element() {
        let source = Element::new().with_border(9).with_bounds(Rect::from_size(5, 6));
        let mut target = Element::new();
        ElementPatch::from(&source).apply(&mut target);
        assert_eq!(target, source);
    }
}
