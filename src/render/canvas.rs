//! Canvas: A character grid that layout rectangles are drawn into.
//!
//! Cells are stored in row-major order. Everything drawn is clipped to the
//! grid, so rectangles with negative positions or sizes are safe to draw.

use super::edges::Edges;
use crate::layout::{Flexer, Rect};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A single canvas cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CanvasCell {
    /// Nothing drawn.
    #[default]
    Blank,
    /// Part of one or more outlines.
    Line(Edges),
    /// A grapheme of label text.
    Text(String),
    /// Second column of a wide grapheme.
    Continuation,
}

/// A grid of cells for drawing layout outlines and labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Contiguous cell storage (row-major order).
    cells: Vec<CanvasCell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
}

impl Canvas {
    /// Create a blank canvas.
    pub fn new(width: u16, height: u16) -> Self {
        let size = usize::from(width) * usize::from(height);
        Self {
            cells: vec![CanvasCell::Blank; size],
            width,
            height,
        }
    }

    /// Get the canvas width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the canvas height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Convert signed coordinates to a linear index, if on the canvas.
    #[inline]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = u16::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u16::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Get the cell at (x, y).
    ///
    /// Returns `None` if coordinates are off the canvas.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&CanvasCell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells.fill(CanvasCell::Blank);
    }

    /// Resize the canvas, discarding its content.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(usize::from(width) * usize::from(height), CanvasCell::Blank);
    }

    /// Add line segments to a cell, merging with any outline already there.
    fn add_edges(&mut self, x: i32, y: i32, edges: Edges) {
        let Some(idx) = self.index_of(x, y) else {
            return;
        };
        let merged = match &self.cells[idx] {
            CanvasCell::Line(existing) => *existing | edges,
            _ => edges,
        };
        self.cells[idx] = CanvasCell::Line(merged);
    }

    /// Draw the outline of a rectangle.
    ///
    /// A one-column or one-row rectangle draws as a single line; empty
    /// rectangles and single cells draw nothing.
    pub fn draw_outline(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let (left, top) = (rect.x, rect.y);
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

        // Only the visible part of each side is walked.
        let max_x = i32::from(self.width) - 1;
        let max_y = i32::from(self.height) - 1;
        let xs = left.max(0)..=right.min(max_x);
        let ys = top.max(0)..=bottom.min(max_y);

        let horizontal = |x: i32| {
            let mut edges = Edges::empty();
            if x > left {
                edges |= Edges::LEFT;
            }
            if x < right {
                edges |= Edges::RIGHT;
            }
            edges
        };
        let vertical = |y: i32| {
            let mut edges = Edges::empty();
            if y > top {
                edges |= Edges::UP;
            }
            if y < bottom {
                edges |= Edges::DOWN;
            }
            edges
        };

        for x in xs {
            let edges = horizontal(x);
            if !edges.is_empty() {
                self.add_edges(x, top, edges);
                self.add_edges(x, bottom, edges);
            }
        }
        for y in ys {
            let edges = vertical(y);
            if !edges.is_empty() {
                self.add_edges(left, y, edges);
                self.add_edges(right, y, edges);
            }
        }
    }

    /// Write text starting at (x, y), using at most `max_width` columns.
    ///
    /// Text is cut at a grapheme boundary; a wide grapheme that would
    /// straddle the limit is dropped. Returns the number of columns used.
    pub fn draw_label(&mut self, x: i32, y: i32, text: &str, max_width: u16) -> u16 {
        let mut used: u16 = 0;
        for grapheme in text.graphemes(true) {
            let width = u16::try_from(grapheme.width()).unwrap_or(u16::MAX);
            if width == 0 {
                continue;
            }
            if used.saturating_add(width) > max_width {
                break;
            }
            let col = x.saturating_add(i32::from(used));
            if let Some(idx) = self.index_of(col, y) {
                self.cells[idx] = CanvasCell::Text(grapheme.to_owned());
            }
            for extra in 1..width {
                if let Some(idx) = self.index_of(col.saturating_add(i32::from(extra)), y) {
                    self.cells[idx] = CanvasCell::Continuation;
                }
            }
            used += width;
        }
        used
    }

    /// Outline every rectangle of the last layout pass and label it with
    /// its element id.
    ///
    /// Rectangles are drawn in id order, so children land on top of their
    /// parents.
    pub fn draw_layout(&mut self, flex: &Flexer) {
        for rect in flex.rects().values() {
            self.draw_outline(*rect);
        }
        for (id, rect) in flex.rects() {
            if rect.is_empty() || rect.width < 3 {
                continue;
            }
            let room = u16::try_from(rect.width - 2).unwrap_or(u16::MAX);
            self.draw_label(rect.x + 1, rect.y, &id.to_string(), room);
        }
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[CanvasCell]> {
        self.cells.chunks(usize::from(self.width).max(1))
    }

    /// Render every row as a string.
    pub fn lines(&self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); usize::from(self.height)];
        }
        self.rows()
            .map(|row| {
                let mut line = String::with_capacity(row.len());
                for cell in row {
                    match cell {
                        CanvasCell::Blank => line.push(' '),
                        CanvasCell::Line(edges) => line.push(edges.glyph()),
                        CanvasCell::Text(text) => line.push_str(text),
                        CanvasCell::Continuation => {}
                    }
                }
                line
            })
            .collect()
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
