//! Overlay layout engine
//!
//! Converts an ordered list of text items plus geometric constraints into a
//! set of display lines and a minimal bounding box. Lines wider than the
//! available width are trimmed from the end and given an ellipsis suffix;
//! when the list is longer than the item cap, a single ellipsis line marks
//! the overflow.

use crate::foundation::math::Rect;
use crate::text::{TextMeasure, TextSize};

/// The truncation and overflow marker
pub const ELLIPSIS: &str = "\u{2026}";

/// One entry of the host's ordered list
///
/// Opaque text; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Item text as supplied by the host
    pub text: String,
}

impl ListItem {
    /// Create an item from any string-like value
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Geometric constraints for layout computation
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConstraints {
    /// Maximum overlay width in pixels
    pub max_width: f32,

    /// Maximum number of items to lay out
    pub max_items: usize,

    /// Margin above the header
    pub margin_top: f32,

    /// Margin left of header and lines
    pub margin_left: f32,

    /// Margin right of the widest line
    pub margin_right: f32,

    /// Margin below the last line
    pub margin_bottom: f32,

    /// Vertical gap before each line
    pub line_spacing: f32,

    /// Header text; the overlay never shrinks narrower than it
    pub header: String,
}

impl Default for LayoutConstraints {
    fn default() -> Self {
        Self {
            max_width: 600.0,
            max_items: 10,
            margin_top: 5.0,
            margin_left: 5.0,
            margin_right: 5.0,
            margin_bottom: 5.0,
            line_spacing: 5.0,
            header: "To-Do List".to_string(),
        }
    }
}

/// One laid-out line of the overlay
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLine {
    /// Possibly-truncated text, ellipsis-suffixed when trimmed
    pub text: String,

    /// Measured line height in pixels
    pub height: f32,
}

/// The computed layout artifact
///
/// Recreated wholesale on every list or config change; the draw path only
/// ever sees a complete layout, never a partially-updated one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    /// Display lines in source order, plus at most one overflow marker
    pub lines: Vec<DisplayLine>,

    /// Minimal bounding box, origin (0, 0) in overlay-local coordinates
    pub bounds: Rect,
}

impl Layout {
    /// The empty layout ("nothing to draw")
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether there is anything to draw
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Layout calculator for the overlay
pub struct LayoutEngine;

impl LayoutEngine {
    /// Compute the layout for `items` under `constraints`
    ///
    /// Pure aside from calls into the measurement service: identical inputs
    /// yield an identical layout. An empty item list yields a zero-line
    /// layout with a degenerate bounding box.
    pub fn compute(
        items: &[ListItem],
        constraints: &LayoutConstraints,
        measure: &dyn TextMeasure,
    ) -> Layout {
        if items.is_empty() {
            return Layout::empty();
        }

        let header_size = measure.measure(&constraints.header);
        // The overlay never shrinks narrower than its header.
        let available_width = (constraints.max_width
            - constraints.margin_left
            - constraints.margin_right)
            .max(header_size.width);

        let mut lines = Vec::with_capacity(items.len().min(constraints.max_items) + 1);
        let mut used_width = header_size.width;
        let mut top = constraints.margin_top + header_size.height;

        for item in items.iter().take(constraints.max_items) {
            top += constraints.line_spacing;
            let (text, size) = Self::fit_line(&item.text, available_width, measure);
            used_width = used_width.max(size.width);
            top += size.height;
            lines.push(DisplayLine {
                text,
                height: size.height,
            });
        }

        if items.len() > constraints.max_items {
            // Overflow marker: one plain ellipsis line, never trimmed.
            top += constraints.line_spacing;
            let size = measure.measure(ELLIPSIS);
            used_width = used_width.max(size.width);
            top += size.height;
            lines.push(DisplayLine {
                text: ELLIPSIS.to_string(),
                height: size.height,
            });
        }

        Layout {
            lines,
            bounds: Rect::new(
                0.0,
                0.0,
                used_width + constraints.margin_left + constraints.margin_right,
                top + constraints.margin_bottom,
            ),
        }
    }

    /// Trim `text` until it fits in `available_width`
    ///
    /// Each pass drops the last two characters and appends an ellipsis.
    /// Text shorter than two characters is rendered as-is even when it
    /// overflows; there is nothing left to trim.
    fn fit_line(
        text: &str,
        available_width: f32,
        measure: &dyn TextMeasure,
    ) -> (String, TextSize) {
        let mut line = text.to_string();
        let mut size = measure.measure(&line);
        while size.width > available_width {
            let glyphs = line.chars().count();
            if glyphs < 2 {
                break;
            }
            let mut trimmed: String = line.chars().take(glyphs - 2).collect();
            trimmed.push_str(ELLIPSIS);
            line = trimmed;
            size = measure.measure(&line);
        }
        (line, size)
    }
}
