//! Drawing surface seam and draw commands
//!
//! Keeps the overlay independent of any particular rendering backend. The
//! host hands a [`DrawSurface`] to each frame callback; the controller only
//! ever issues the four primitives below.

use crate::foundation::math::{Rect, Vec2, Vec4};

/// Immediate-mode drawing surface supplied by the render host
///
/// All positions are in overlay-local pixels with a top-left origin; the
/// host is responsible for screen placement. Colors carry independent alpha.
pub trait DrawSurface {
    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, color: Vec4);

    /// Draw a line of text
    fn draw_text(&mut self, text: &str, position: Vec2, color: Vec4);

    /// Draw a line of bold text
    fn draw_bold_text(&mut self, text: &str, position: Vec2, color: Vec4);

    /// Draw a straight line from `start` spanning `extent`
    fn draw_line(&mut self, start: Vec2, extent: Vec2, color: Vec4);
}

/// One recorded draw primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle
    FillRect {
        /// Target rectangle
        rect: Rect,
        /// Fill color
        color: Vec4,
    },
    /// Plain text
    Text {
        /// Text content
        text: String,
        /// Top-left position
        position: Vec2,
        /// Text color
        color: Vec4,
    },
    /// Bold text
    BoldText {
        /// Text content
        text: String,
        /// Top-left position
        position: Vec2,
        /// Text color
        color: Vec4,
    },
    /// Straight line
    Line {
        /// Start position
        start: Vec2,
        /// Span from start
        extent: Vec2,
        /// Line color
        color: Vec4,
    },
}

/// A [`DrawSurface`] that records commands instead of rasterizing them
///
/// Used by tests and by hosts that batch commands before submission.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, in issue order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Discard recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for CommandRecorder {
    fn fill_rect(&mut self, rect: Rect, color: Vec4) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Vec4) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
        });
    }

    fn draw_bold_text(&mut self, text: &str, position: Vec2, color: Vec4) {
        self.commands.push(DrawCommand::BoldText {
            text: text.to_string(),
            position,
            color,
        });
    }

    fn draw_line(&mut self, start: Vec2, extent: Vec2, color: Vec4) {
        self.commands.push(DrawCommand::Line {
            start,
            extent,
            color,
        });
    }
}
