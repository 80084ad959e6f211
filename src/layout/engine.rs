//! Flexer: The element registry and the proportional layout pass.
//!
//! Elements live in an id-keyed arena; each node keeps the ids of its
//! children in creation order. A layout pass walks every root depth-first
//! and writes one rectangle per reachable element into the rect map, a
//! parent's rectangle always being final before its children are placed.

use super::element::{Element, ElementId, ElementPatch};
use super::rect::Rect;
use crate::error::{FlexError, Result};
use std::collections::BTreeMap;

/// The layout engine.
///
/// Owns every element and the rectangles computed for them. Call
/// [`Flexer::perform_layout`] once per tick, then read the results with
/// [`Flexer::rect`] or [`Flexer::rects`].
#[derive(Clone, Debug)]
pub struct Flexer {
    /// Next id to hand out; `None` once the id space is spent.
    next_id: Option<ElementId>,
    /// Element arena.
    elements: BTreeMap<ElementId, Element>,
    /// Rectangles from the last layout pass.
    rects: BTreeMap<ElementId, Rect>,
}

impl Default for Flexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Flexer {
    /// Create an empty engine.
    pub const fn new() -> Self {
        Self {
            next_id: Some(ElementId::FIRST),
            elements: BTreeMap::new(),
            rects: BTreeMap::new(),
        }
    }

    /// Number of registered elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if no element has been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Register an element and return its id.
    ///
    /// The layout parameters of `element` are copied; its tree links are
    /// replaced. With a `parent`, the new id is appended to that parent's
    /// children. A parent must already exist, so the tree cannot contain a
    /// cycle. On error nothing is stored and no id is consumed.
    pub fn create(&mut self, parent: Option<ElementId>, element: Element) -> Result<ElementId> {
        if let Some(parent) = parent {
            if !self.elements.contains_key(&parent) {
                tracing::warn!(parent = parent.get(), "rejected element with unknown parent");
                return Err(FlexError::InvalidParent(parent.get()));
            }
        }
        let id = self.next_id.ok_or(FlexError::IdsExhausted)?;
        self.next_id = id.next();

        self.elements.insert(id, Element::detached(element, parent));
        if let Some(parent) = parent.and_then(|p| self.elements.get_mut(&p)) {
            parent.push_child(id);
        }

        tracing::debug!(id = id.get(), parent = parent.map(ElementId::get), "element created");
        Ok(id)
    }

    /// Look up an element. Unknown ids yield `None`.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Patch the layout parameters of an element.
    ///
    /// Changes are picked up by the next [`Flexer::perform_layout`].
    pub fn update(&mut self, id: ElementId, patch: ElementPatch) -> Result<()> {
        let Some(element) = self.elements.get_mut(&id) else {
            tracing::warn!(id = id.get(), "update of unknown element");
            return Err(FlexError::UnknownElement(id.get()));
        };
        patch.apply(element);
        Ok(())
    }

    /// Ids of all root elements, ascending.
    pub fn roots(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements
            .iter()
            .filter(|(_, element)| element.is_root())
            .map(|(&id, _)| id)
    }

    /// Recompute every rectangle reachable from a root.
    ///
    /// Roots are laid out in ascending id order, so the first element ever
    /// created is always placed first. Rectangles of elements that are no
    /// longer reachable keep their previous value.
    pub fn perform_layout(&mut self) {
        let mut roots = 0_usize;
        let mut placed = 0_usize;
        for (&id, element) in &self.elements {
            if element.is_root() {
                roots += 1;
                placed += layout_tree(&self.elements, &mut self.rects, id);
            }
        }
        tracing::debug!(roots, placed, "layout pass");
    }

    /// The rectangle from the last layout pass.
    ///
    /// Returns [`Rect::ZERO`] for an element that was never laid out or does
    /// not exist. Never triggers a layout pass.
    pub fn rect(&self, id: ElementId) -> Rect {
        self.try_rect(id).unwrap_or(Rect::ZERO)
    }

    /// Like [`Flexer::rect`], but distinguishes "never laid out".
    pub fn try_rect(&self, id: ElementId) -> Option<Rect> {
        self.rects.get(&id).copied()
    }

    /// All rectangles from the last layout pass.
    ///
    /// Iteration happens to be in id order; callers should not depend on it.
    pub const fn rects(&self) -> &BTreeMap<ElementId, Rect> {
        &self.rects
    }

    /// Find the deepest element whose last rectangle contains the point.
    ///
    /// Descends from the roots; among overlapping siblings the later one wins,
    /// matching the order in which they are drawn.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<ElementId> {
        let contains = |id: &ElementId| self.try_rect(*id).is_some_and(|r| r.contains(x, y));

        let mut current = self.roots().filter(contains).last()?;
        loop {
            let next = self
                .elements
                .get(&current)
                .and_then(|element| element.children().iter().rev().find(|c| contains(*c)));
            match next {
                Some(&child) => current = child,
                None => return Some(current),
            }
        }
    }
}

/// Lay out the tree under `root`, returning how many elements were placed.
///
/// Containers are visited depth-first in creation order using an explicit
/// work stack, so tree depth is bounded by memory, not by the call stack.
fn layout_tree(
    elements: &BTreeMap<ElementId, Element>,
    rects: &mut BTreeMap<ElementId, Rect>,
    root: ElementId,
) -> usize {
    let Some(element) = elements.get(&root) else {
        return 0;
    };
    rects.insert(root, element.bounds);

    let mut placed = 1;
    let mut pending = vec![root];
    while let Some(id) = pending.pop() {
        let children = layout_container(elements, rects, id);
        placed += children.len();
        pending.extend(children.iter().rev());
    }
    placed
}

/// Place the direct children of `id` inside its finished rectangle.
///
/// Returns the ids that received a rectangle, in creation order.
fn layout_container(
    elements: &BTreeMap<ElementId, Element>,
    rects: &mut BTreeMap<ElementId, Rect>,
    id: ElementId,
) -> Vec<ElementId> {
    let Some(element) = elements.get(&id) else {
        return Vec::new();
    };
    let children = element.children();
    if children.is_empty() {
        return Vec::new();
    }

    let axis = element.axis;
    let cross_axis = axis.cross();
    let border = clamp_u32(element.border);
    let spacing = clamp_u32(element.spacing);

    let total: i64 = children
        .iter()
        .filter_map(|child| elements.get(child))
        .map(|child| i64::from(child.proportion))
        .sum();
    let total = if total <= 0 { 1 } else { total };

    let container = rects.get(&id).copied().unwrap_or_default();

    // Running cursor: fixed children are reserved up front, then every placed
    // child advances it. The stretch share below is taken from the untouched
    // container size instead.
    let mut cursor = container;
    for child in children.iter().filter_map(|child| elements.get(child)) {
        if child.is_fixed() {
            let size = axis.size_mut(&mut cursor);
            *size = size.saturating_sub(axis.size(&child.bounds));
        }
    }

    let inset = border.saturating_mul(2);
    let available = axis.size(&container).saturating_sub(inset);
    let cross = cross_axis.size(&container).saturating_sub(inset);
    let share = i64::from(available).div_euclid(total);

    tracing::trace!(id = id.get(), ?axis, available, total, "distributing container");

    let last = children.len() - 1;
    let mut placed = Vec::with_capacity(children.len());
    for (index, &child_id) in children.iter().enumerate() {
        let Some(child) = elements.get(&child_id) else {
            continue;
        };

        let mut rect = child.bounds.offset(
            cursor.x.saturating_add(border),
            cursor.y.saturating_add(border),
        );
        if !child.is_fixed() {
            *axis.size_mut(&mut rect) = saturate(share.saturating_mul(i64::from(child.proportion)));
        }
        *cross_axis.size_mut(&mut rect) = cross;

        let main = axis.size(&rect);
        let pos = axis.pos_mut(&mut cursor);
        *pos = pos.saturating_add(main);
        let remaining = axis.size_mut(&mut cursor);
        *remaining = remaining.saturating_sub(main);

        if index != last {
            let size = axis.size_mut(&mut rect);
            *size = size.saturating_sub(spacing);
        }

        rects.insert(child_id, rect);
        placed.push(child_id);
    }
    placed
}

fn clamp_u32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
