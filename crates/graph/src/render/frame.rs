//! Recorded draw commands for one redraw.

use edgeviz_core::Result;

use super::canvas::{Canvas, Fill, Stroke};
use crate::layout::Point;

/// Paint order: every edge sits below every node, labels on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Edges,
    Nodes,
    Labels,
}

/// A single draw call in unit-square coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Edge {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Node {
        label: String,
        at: Point,
        fill: Fill,
    },
    Label {
        at: Point,
        text: String,
        size: f32,
    },
}

impl DrawCommand {
    #[must_use]
    pub const fn layer(&self) -> Layer {
        match self {
            Self::Edge { .. } => Layer::Edges,
            Self::Node { .. } => Layer::Nodes,
            Self::Label { .. } => Layer::Labels,
        }
    }
}

/// The result of a render dispatch: a title plus draw commands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    title: String,
    commands: Vec<DrawCommand>,
}

impl Frame {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands in paint order: sorted by layer, call order kept within one.
    #[must_use]
    pub fn commands(&self) -> Vec<&DrawCommand> {
        let mut ordered: Vec<&DrawCommand> = self.commands.iter().collect();
        ordered.sort_by_key(|command| command.layer());
        ordered
    }

    /// Edge strokes in call order, for inspection.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point, Stroke)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Edge { from, to, stroke } => Some((*from, *to, *stroke)),
            DrawCommand::Node { .. } | DrawCommand::Label { .. } => None,
        })
    }

    /// Node fills in call order, for inspection.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, Fill)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Node { label, fill, .. } => Some((label.as_str(), *fill)),
            DrawCommand::Edge { .. } | DrawCommand::Label { .. } => None,
        })
    }

    /// Label texts in call order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Label { text, .. } => Some(text.as_str()),
            DrawCommand::Edge { .. } | DrawCommand::Node { .. } => None,
        })
    }

    /// Paint the frame: clear, commands in paint order, title, present.
    ///
    /// # Errors
    ///
    /// Propagates the first canvas failure.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<()> {
        canvas.clear()?;
        for command in self.commands() {
            match command {
                DrawCommand::Edge { from, to, stroke } => canvas.edge(*from, *to, *stroke)?,
                DrawCommand::Node { at, fill, .. } => canvas.node(*at, *fill)?,
                DrawCommand::Label { at, text, size } => canvas.label(*at, text, *size)?,
            }
        }
        canvas.title(&self.title)?;
        canvas.present()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::render::palette;

    /// Canvas that records what it was asked to draw.
    #[derive(Debug, Default)]
    struct RecordingCanvas {
        calls: Vec<String>,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self) -> Result<()> {
            self.calls.push("clear".into());
            Ok(())
        }

        fn edge(&mut self, _from: Point, _to: Point, stroke: Stroke) -> Result<()> {
            self.calls.push(format!("edge {}", stroke.color.to_hex()));
            Ok(())
        }

        fn node(&mut self, _at: Point, fill: Fill) -> Result<()> {
            self.calls.push(format!("node {}", fill.color.to_hex()));
            Ok(())
        }

        fn label(&mut self, _at: Point, text: &str, _size: f32) -> Result<()> {
            self.calls.push(format!("label {text}"));
            Ok(())
        }

        fn title(&mut self, text: &str) -> Result<()> {
            self.calls.push(format!("title {text}"));
            Ok(())
        }

        fn present(&mut self) -> Result<()> {
            self.calls.push("present".into());
            Ok(())
        }
    }

    #[test]
    fn test_replay_orders_by_layer() {
        let mut frame = Frame::new("T");
        frame.push(DrawCommand::Label {
            at: Point::new(0.0, 0.0),
            text: "A".into(),
            size: 10.0,
        });
        frame.push(DrawCommand::Node {
            label: "A".into(),
            at: Point::new(0.0, 0.0),
            fill: Fill {
                color: palette::NODE,
                radius: 12.0,
                alpha: 1.0,
            },
        });
        frame.push(DrawCommand::Edge {
            from: Point::new(0.0, 0.0),
            to: Point::new(1.0, 1.0),
            stroke: Stroke::new(palette::EDGE, 1.0, 0.6),
        });

        let mut canvas = RecordingCanvas::default();
        frame.replay(&mut canvas).unwrap();
        assert_eq!(
            canvas.calls,
            [
                "clear",
                "edge #808080",
                "node #ADD8E6",
                "label A",
                "title T",
                "present"
            ]
        );
    }

    #[test]
    fn test_blank_frame_still_titles() {
        let frame = Frame::new("Empty");
        assert!(frame.is_blank());
        let mut canvas = RecordingCanvas::default();
        frame.replay(&mut canvas).unwrap();
        assert_eq!(canvas.calls, ["clear", "title Empty", "present"]);
    }
}
