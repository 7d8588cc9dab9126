//! Math utilities and types
//!
//! Provides the fundamental 2D types used by layout and drawing.

pub use nalgebra::{Vector2, Vector4};

/// 2D vector type (positions, extents)
pub type Vec2 = Vector2<f32>;

/// 4D vector type (RGBA colors with independent alpha)
pub type Vec4 = Vector4<f32>;

/// Axis-aligned rectangle in overlay-local pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f32,

    /// Top edge
    pub y: f32,

    /// Width in pixels
    pub width: f32,

    /// Height in pixels
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The degenerate zero rectangle ("nothing to draw")
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Whether the rectangle encloses no area
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::zero()
    }
}
