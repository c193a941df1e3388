//! SVG surface built on plotters.
//!
//! Uses the SVG backend only, so no system font libraries are needed.

use std::path::Path;

use edgeviz_core::{CanvasConfig, Error, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_svg::SVGBackend;
use tracing::info;

use super::canvas::{Canvas, Fill, Stroke};
use super::frame::Frame;
use super::palette::{self, RgbColor};
use super::viewport::ScreenMap;
use crate::layout::Point;

const FONT: &str = "sans-serif";
const TITLE_FONT_SIZE: f64 = 16.0;

/// Canvas writing SVG markup into a borrowed string.
pub struct SvgCanvas<'a> {
    area: DrawingArea<SVGBackend<'a>, Shift>,
    map: ScreenMap,
    title_at: (i32, i32),
}

impl<'a> SvgCanvas<'a> {
    /// # Errors
    ///
    /// Returns [`Error::RenderFailed`] if the margins leave no plot area.
    pub fn new(buffer: &'a mut String, config: &CanvasConfig) -> Result<Self> {
        let map = ScreenMap::for_canvas(config)?;
        let area =
            SVGBackend::with_string(buffer, (config.width, config.height)).into_drawing_area();
        let title_at = (
            i32::try_from(config.width / 2).unwrap_or(i32::MAX),
            i32::try_from(config.margin).unwrap_or(i32::MAX),
        );
        Ok(Self {
            area,
            map,
            title_at,
        })
    }

    #[allow(clippy::cast_possible_truncation)]
    fn pixel(&self, point: Point) -> (i32, i32) {
        let (x, y) = self.map.project(point);
        (x.round() as i32, y.round() as i32)
    }
}

const fn rgb(color: RgbColor) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn stroke_width(width: f32) -> u32 {
    (width.round().max(1.0)) as u32
}

#[allow(clippy::needless_pass_by_value)]
fn failed<E: std::fmt::Display>(e: E) -> Error {
    Error::render_failed(e.to_string())
}

fn centered(size: f64) -> TextStyle<'static> {
    (FONT, size)
        .into_font()
        .color(&rgb(palette::TEXT))
        .pos(Pos::new(HPos::Center, VPos::Center))
}

impl Canvas for SvgCanvas<'_> {
    fn clear(&mut self) -> Result<()> {
        self.area.fill(&rgb(palette::BACKGROUND)).map_err(failed)
    }

    fn edge(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<()> {
        let style = ShapeStyle {
            color: rgb(stroke.color).mix(f64::from(stroke.alpha)),
            filled: false,
            stroke_width: stroke_width(stroke.width),
        };
        self.area
            .draw(&PathElement::new(
                vec![self.pixel(from), self.pixel(to)],
                style,
            ))
            .map_err(failed)
    }

    fn node(&mut self, at: Point, fill: Fill) -> Result<()> {
        let style = rgb(fill.color).mix(f64::from(fill.alpha)).filled();
        self.area
            .draw(&Circle::new(self.pixel(at), f64::from(fill.radius), style))
            .map_err(failed)
    }

    fn label(&mut self, at: Point, text: &str, size: f32) -> Result<()> {
        self.area
            .draw(&Text::new(
                text.to_string(),
                self.pixel(at),
                centered(f64::from(size)),
            ))
            .map_err(failed)
    }

    fn title(&mut self, text: &str) -> Result<()> {
        self.area
            .draw(&Text::new(
                text.to_string(),
                self.title_at,
                centered(TITLE_FONT_SIZE),
            ))
            .map_err(failed)
    }

    fn present(&mut self) -> Result<()> {
        self.area.present().map_err(failed)
    }
}

/// Replay `frame` onto a fresh SVG document.
///
/// # Errors
///
/// Returns [`Error::RenderFailed`] when plotters fails or the canvas size is
/// unusable.
pub fn render_svg(frame: &Frame, config: &CanvasConfig) -> Result<String> {
    let mut buffer = String::new();
    {
        let mut canvas = SvgCanvas::new(&mut buffer, config)?;
        frame.replay(&mut canvas)?;
    }
    Ok(buffer)
}

/// Render `frame` and write the SVG document to `path`.
///
/// # Errors
///
/// Returns [`Error::RenderFailed`] when rendering or writing fails.
pub fn write_svg(frame: &Frame, config: &CanvasConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let svg = render_svg(frame, config)?;
    std::fs::write(path, svg).map_err(|e| {
        Error::render_failed(format!("cannot write {}: {e}", path.display()))
    })?;
    info!(path = %path.display(), title = frame.title(), "SVG written");
    Ok(())
}
