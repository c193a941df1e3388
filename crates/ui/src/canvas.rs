//! egui painter surface.

use edgeviz_core::Result;
use edgeviz_graph::layout::Point;
use edgeviz_graph::render::palette::{self, RgbColor};
use edgeviz_graph::render::viewport::ScreenMap;
use edgeviz_graph::render::{Canvas, Fill, Stroke};
use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect};

/// Space above the plot reserved for the title, in points.
const TITLE_BAND: f32 = 28.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const INSET: f32 = 24.0;

/// Paints frames into a rectangle of an egui [`Painter`].
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
    rect: Rect,
    map: ScreenMap,
}

impl<'a> PainterCanvas<'a> {
    /// # Errors
    ///
    /// Returns [`edgeviz_core::Error::RenderFailed`] when `rect` is too small
    /// to hold a plot.
    pub fn new(painter: &'a Painter, rect: Rect) -> Result<Self> {
        let map = ScreenMap::new(
            f64::from(rect.left() + INSET),
            f64::from(rect.top() + TITLE_BAND + INSET),
            f64::from(rect.width() - INSET * 2.0),
            f64::from(rect.height() - TITLE_BAND - INSET * 2.0),
        )?;
        Ok(Self { painter, rect, map })
    }

    #[allow(clippy::cast_possible_truncation)]
    fn pos(&self, point: Point) -> Pos2 {
        let (x, y) = self.map.project(point);
        Pos2::new(x as f32, y as f32)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn color(color: RgbColor, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, a)
}

impl Canvas for PainterCanvas<'_> {
    fn clear(&mut self) -> Result<()> {
        self.painter
            .rect_filled(self.rect, 0.0, color(palette::BACKGROUND, 1.0));
        Ok(())
    }

    fn edge(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<()> {
        self.painter.line_segment(
            [self.pos(from), self.pos(to)],
            egui::Stroke::new(stroke.width, color(stroke.color, stroke.alpha)),
        );
        Ok(())
    }

    fn node(&mut self, at: Point, fill: Fill) -> Result<()> {
        self.painter
            .circle_filled(self.pos(at), fill.radius, color(fill.color, fill.alpha));
        Ok(())
    }

    fn label(&mut self, at: Point, text: &str, size: f32) -> Result<()> {
        self.painter.text(
            self.pos(at),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(size),
            color(palette::TEXT, 1.0),
        );
        Ok(())
    }

    fn title(&mut self, text: &str) -> Result<()> {
        let at = Pos2::new(self.rect.center().x, self.rect.top() + TITLE_BAND / 2.0);
        self.painter.text(
            at,
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(TITLE_FONT_SIZE),
            color(palette::TEXT, 1.0),
        );
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_mapping() {
        assert_eq!(color(palette::EDGE, 1.0).a(), 255);
        assert_eq!(color(palette::EDGE, 0.0).a(), 0);
        assert_eq!(color(palette::EDGE, 2.0).a(), 255);
    }
}
