//! Named colors used by the render dispatcher.

/// RGB color representation (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to hex string (#RRGGBB)
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub const NODE: RgbColor = RgbColor::new(173, 216, 230); // lightblue
pub const SOURCE_NODE: RgbColor = RgbColor::new(144, 238, 144); // lightgreen
pub const TARGET_NODE: RgbColor = RgbColor::new(250, 128, 114); // salmon
pub const PATH_NODE: RgbColor = RgbColor::new(255, 165, 0); // orange
pub const EDGE: RgbColor = RgbColor::new(128, 128, 128); // gray
pub const TRAVERSAL_EDGE: RgbColor = RgbColor::new(0, 0, 255); // blue
pub const PATH_EDGE: RgbColor = RgbColor::new(255, 0, 0); // red
pub const SPANNING_EDGE: RgbColor = RgbColor::new(0, 128, 0); // green
pub const TEXT: RgbColor = RgbColor::new(0, 0, 0);
pub const BACKGROUND: RgbColor = RgbColor::new(255, 255, 255);

/// Opacity of base edges.
pub const EDGE_ALPHA: f32 = 0.6;
/// Opacity of highlighted edges.
pub const HIGHLIGHT_ALPHA: f32 = 0.8;
/// Opacity of base nodes.
pub const NODE_ALPHA: f32 = 0.9;
