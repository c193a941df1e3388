//! Drawing surface abstraction.
//!
//! Coordinates handed to a [`Canvas`] are in the unit square with y pointing
//! up; each surface maps them onto its own pixels.

use edgeviz_core::Result;

use super::palette::RgbColor;
use crate::layout::Point;

/// Line style for edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: RgbColor,
    pub width: f32,
    pub alpha: f32,
}

impl Stroke {
    #[must_use]
    pub const fn new(color: RgbColor, width: f32, alpha: f32) -> Self {
        Self {
            color,
            width,
            alpha,
        }
    }
}

/// Filled circle style for nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub color: RgbColor,
    pub radius: f32,
    pub alpha: f32,
}

/// A surface the render dispatcher can paint on.
pub trait Canvas {
    /// Erase everything drawn so far.
    ///
    /// # Errors
    ///
    /// Returns [`edgeviz_core::Error::RenderFailed`] when the backend fails.
    fn clear(&mut self) -> Result<()>;

    /// # Errors
    ///
    /// Returns [`edgeviz_core::Error::RenderFailed`] when the backend fails.
    fn edge(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<()>;

    /// # Errors
    ///
    /// Returns [`edgeviz_core::Error::RenderFailed`] when the backend fails.
    fn node(&mut self, at: Point, fill: Fill) -> Result<()>;

    /// Text centered on `at`.
    ///
    /// # Errors
    ///
    /// Returns [`edgeviz_core::Error::RenderFailed`] when the backend fails.
    fn label(&mut self, at: Point, text: &str, size: f32) -> Result<()>;

    /// # Errors
    ///
    /// Returns [`edgeviz_core::Error::RenderFailed`] when the backend fails.
    fn title(&mut self, text: &str) -> Result<()>;

    /// Commit the drawing.
    ///
    /// # Errors
    ///
    /// Returns [`edgeviz_core::Error::RenderFailed`] when the backend fails.
    fn present(&mut self) -> Result<()>;
}
