//! Coordinate transforms between layout space, the unit square the frame is
//! expressed in, and surface pixels.

use edgeviz_core::{CanvasConfig, Error, Result};

use crate::layout::{Point, Positions};

/// Rescale layout positions into the unit square, axis by axis.
///
/// An axis with no spread collapses to 0.5.
#[must_use]
pub fn normalize(positions: &Positions) -> Positions {
    let bounds = positions.values().fold(
        (
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        ),
        |(min_x, max_x, min_y, max_y), p| {
            (min_x.min(p.x), max_x.max(p.x), min_y.min(p.y), max_y.max(p.y))
        },
    );
    let (min_x, max_x, min_y, max_y) = bounds;

    positions
        .iter()
        .map(|(label, p)| {
            let point = Point::new(scale(p.x, min_x, max_x), scale(p.y, min_y, max_y));
            (label.clone(), point)
        })
        .collect()
}

fn scale(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span.is_finite() && span > f64::EPSILON {
        (value - min) / span
    } else {
        0.5
    }
}

/// Maps unit-square points onto a pixel rectangle, y pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMap {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenMap {
    /// # Errors
    ///
    /// Returns [`Error::RenderFailed`] if the rectangle has no drawable area.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::render_failed(format!(
                "drawable width must be positive and finite, got: {width}"
            )));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(Error::render_failed(format!(
                "drawable height must be positive and finite, got: {height}"
            )));
        }
        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    /// Plot area of a fixed-size canvas: everything inside the margin, with
    /// the top margin doubled to leave room for the title.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RenderFailed`] when the margins swallow the canvas.
    pub fn for_canvas(config: &CanvasConfig) -> Result<Self> {
        let margin = f64::from(config.margin);
        Self::new(
            margin,
            margin * 2.0,
            f64::from(config.width) - margin * 2.0,
            f64::from(config.height) - margin * 3.0,
        )
    }

    #[must_use]
    pub fn project(&self, point: Point) -> (f64, f64) {
        (
            self.left + point.x * self.width,
            self.top + (1.0 - point.y) * self.height,
        )
    }
}
