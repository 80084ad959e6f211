//! Axis: Main/cross accessors shared by both layout directions.

use super::rect::Rect;

/// Direction along which a container lays out its children.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Axis {
    /// Children flow left to right; main axis is x/width.
    #[default]
    Horizontal,
    /// Children flow top to bottom; main axis is y/height.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Position of `rect` along this axis.
    #[inline]
    pub const fn pos(self, rect: &Rect) -> i32 {
        match self {
            Self::Horizontal => rect.x,
            Self::Vertical => rect.y,
        }
    }

    /// Size of `rect` along this axis.
    #[inline]
    pub const fn size(self, rect: &Rect) -> i32 {
        match self {
            Self::Horizontal => rect.width,
            Self::Vertical => rect.height,
        }
    }

    /// Mutable position of `rect` along this axis.
    #[inline]
    pub fn pos_mut(self, rect: &mut Rect) -> &mut i32 {
        match self {
            Self::Horizontal => &mut rect.x,
            Self::Vertical => &mut rect.y,
        }
    }

    /// Mutable size of `rect` along this axis.
    #[inline]
    pub fn size_mut(self, rect: &mut Rect) -> &mut i32 {
        match self {
            Self::Horizontal => &mut rect.width,
            Self::Vertical => &mut rect.height,
        }
    }
}
