//! Foundation layer: math types and logging utilities

pub mod logging;
pub mod math;

pub use math::{Rect, Vec2, Vec4};
