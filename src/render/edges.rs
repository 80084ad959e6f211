//! Edges: Which sides of a cell a line passes through.

use bitflags::bitflags;

bitflags! {
    /// Line segments leaving a cell, used to pick a box-drawing glyph.
    ///
    /// Segments from several outlines combine with bitwise OR, so a corner
    /// drawn over a straight edge becomes a tee.
    ///
    /// # Example
    /// ```
    /// use flexer::Edges;
    /// let tee = Edges::LEFT | Edges::RIGHT | Edges::DOWN;
    /// assert_eq!(tee.glyph(), '┬');
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        /// Segment towards the row above.
        const UP = 0b0001;
        /// Segment towards the row below.
        const DOWN = 0b0010;
        /// Segment towards the column to the left.
        const LEFT = 0b0100;
        /// Segment towards the column to the right.
        const RIGHT = 0b1000;
    }
}

impl std::fmt::Debug for Edges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl Edges {
    /// The light box-drawing glyph for this set of segments.
    ///
    /// A cell with no segments renders as a space.
    pub const fn glyph(self) -> char {
        const UP: u8 = Edges::UP.bits();
        const DOWN: u8 = Edges::DOWN.bits();
        const LEFT: u8 = Edges::LEFT.bits();
        const RIGHT: u8 = Edges::RIGHT.bits();

        match self.bits() {
            0 => ' ',
            b if b == LEFT || b == RIGHT || b == LEFT | RIGHT => '─',
            b if b == UP || b == DOWN || b == UP | DOWN => '│',
            b if b == DOWN | RIGHT => '┌',
            b if b == DOWN | LEFT => '┐',
            b if b == UP | RIGHT => '└',
            b if b == UP | LEFT => '┘',
            b if b == UP | DOWN | RIGHT => '├',
            b if b == UP | DOWN | LEFT => '┤',
            b if b == LEFT | RIGHT | DOWN => '┬',
            b if b == LEFT | RIGHT | UP => '┴',
            _ => '┼',
        }
    }
}
