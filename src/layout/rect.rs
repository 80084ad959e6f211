//! Rect: The rectangle primitive produced by layout.

/// A rectangle defined by position and size.
///
/// Coordinates are signed: layout never clamps, so a border wider than its
/// container yields a negative width or height and that value is kept as is.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Zero-sized rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Check if the rectangle covers no area.
    ///
    /// Negative sizes count as empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Move the rectangle by the given offset.
    #[inline]
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }
}

/// The unset rectangle of the original library: 100x100 at the origin.
impl Default for Rect {
    fn default() -> Self {
        Self::new(0, 0, 100, 100)
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_100_square() {
        assert_eq!(Rect::default(), Rect::new(0, 0, 100, 100));
    }

    #[test]
    fn test_negative_size_is_empty() {
        let rect = Rect::new(5, 5, -4, 10);
        assert!(rect.is_empty());
        assert_eq!(rect.right(), 1);
    }

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rect::new(10, 10, 5, 5);
        assert!(rect.contains(10, 10));
        assert!(rect.contains(14, 14));
        assert!(!rect.contains(15, 10));
        assert!(!rect.contains(10, 15));
        assert!(!rect.contains(9, 12));
    }

    #[test]
    fn test_offset_saturates() {
        let rect = Rect::new(i32::MAX - 1, 0, 1, 1).offset(10, -3);
        assert_eq!(rect, Rect::new(i32::MAX, -3, 1, 1));
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Rect::new(1, 2, 3, 4)), "Rect(1, 2 3x4)");
    }
}
