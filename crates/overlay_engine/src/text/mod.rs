//! Text measurement seam
//!
//! The host owns fonts and rasterization; the layout engine only needs the
//! pixel extent of a string under the overlay's font. [`TextMeasure`]
//! abstracts that service, and [`MonospaceMeasure`] provides a deterministic
//! fixed-advance implementation for tests and font-less hosts.

/// Pixel extent of a measured string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSize {
    /// Width in pixels
    pub width: f32,

    /// Height in pixels
    pub height: f32,
}

impl TextSize {
    /// Create a new size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Text measurement errors
///
/// Measurement itself never fails for valid text; only acquiring font
/// metrics can fail, and that is a fatal configuration problem for the host.
#[derive(thiserror::Error, Debug)]
pub enum MeasureError {
    /// Font metrics missing or unusable
    #[error("invalid font metrics: {0}")]
    InvalidMetrics(String),
}

/// Host text measurement service
///
/// Implementations must be deterministic for a fixed font: measuring the
/// same string twice yields the same size.
pub trait TextMeasure {
    /// Measure the pixel extent of `text`
    fn measure(&self, text: &str) -> TextSize;
}

/// Fixed-advance measurer: every glyph is `advance` wide, every string is
/// `line_height` tall
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasure {
    advance: f32,
    line_height: f32,
}

impl MonospaceMeasure {
    /// Create a measurer from per-glyph advance and line height
    ///
    /// # Errors
    /// Returns [`MeasureError::InvalidMetrics`] if either metric is
    /// non-finite or not positive.
    pub fn new(advance: f32, line_height: f32) -> Result<Self, MeasureError> {
        if !advance.is_finite() || advance <= 0.0 {
            return Err(MeasureError::InvalidMetrics(format!(
                "glyph advance must be positive, got {advance}"
            )));
        }
        if !line_height.is_finite() || line_height <= 0.0 {
            return Err(MeasureError::InvalidMetrics(format!(
                "line height must be positive, got {line_height}"
            )));
        }
        Ok(Self {
            advance,
            line_height,
        })
    }

    /// Per-glyph advance in pixels
    pub fn advance(&self) -> f32 {
        self.advance
    }

    /// Line height in pixels
    pub fn line_height(&self) -> f32 {
        self.line_height
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str) -> TextSize {
        #[allow(clippy::cast_precision_loss)]
        let width = text.chars().count() as f32 * self.advance;
        TextSize::new(width, self.line_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_width_counts_chars_not_bytes() {
        let measure = MonospaceMeasure::new(10.0, 24.0).unwrap();
        // Multi-byte ellipsis is a single glyph.
        assert_eq!(measure.measure("…").width, 10.0);
        assert_eq!(measure.measure("abc").width, 30.0);
        assert_eq!(measure.measure("").width, 0.0);
    }

    #[test]
    fn test_invalid_metrics_rejected() {
        assert!(MonospaceMeasure::new(0.0, 24.0).is_err());
        assert!(MonospaceMeasure::new(10.0, -1.0).is_err());
        assert!(MonospaceMeasure::new(f32::NAN, 24.0).is_err());
    }

    #[test]
    fn test_measure_is_deterministic() {
        let measure = MonospaceMeasure::new(7.5, 20.0).unwrap();
        assert_eq!(measure.measure("same text"), measure.measure("same text"));
    }
}
