//! Overlay controller and drawing seam
//!
//! - `draw`: host-agnostic drawing surface trait and a recording surface
//! - `controller`: event-driven controller that caches the computed layout
//!   and replays it as draw commands each frame

pub mod controller;
pub mod draw;

pub use controller::OverlayController;
pub use draw::{CommandRecorder, DrawCommand, DrawSurface};
