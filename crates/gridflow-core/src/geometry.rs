#![forbid(unsafe_code)]

//! Pixel-space geometric primitives.
//!
//! The engine computes in two coordinate spaces: abstract grid units
//! (columns/rows, see [`crate::item::LayoutItem`]) and client pixels. The
//! types here cover the pixel side: client rectangles captured from the host
//! UI layer and pointer positions sampled during a gesture.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in client pixel coordinates.
///
/// Origin is the top-left of the client viewport; `width`/`height` are
/// non-negative by convention but never validated here (these are raw
/// measurements handed in by the host layer).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl PixelRect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// The same rectangle shifted by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            width: self.width,
            height: self.height,
        }
    }
}

/// A pointer position in client pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Create a new pointer position.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise delta `self - origin`.
    #[inline]
    #[must_use]
    pub fn delta_from(&self, origin: PointerPosition) -> ScrollDelta {
        ScrollDelta {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

/// An accumulated pixel offset, used both for scroll-while-dragging
/// compensation and for pointer deltas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollDelta {
    pub x: f64,
    pub y: f64,
}

impl ScrollDelta {
    /// Zero offset.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new delta.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let r = PixelRect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn translated_keeps_size() {
        let r = PixelRect::new(0.0, 0.0, 30.0, 40.0).translated(5.0, -5.0);
        assert_eq!(r, PixelRect::new(5.0, -5.0, 30.0, 40.0));
    }

    #[test]
    fn pointer_delta() {
        let down = PointerPosition::new(100.0, 100.0);
        let now = PointerPosition::new(130.0, 90.0);
        let d = now.delta_from(down);
        assert_eq!(d, ScrollDelta::new(30.0, -10.0));
    }
}
