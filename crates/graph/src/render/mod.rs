//! # Render dispatcher
//!
//! Turns the current graph, weight labels and an algorithm result into a
//! [`Frame`] of draw commands. Frames are replayed onto any [`Canvas`].

pub mod canvas;
pub mod frame;
pub mod palette;
pub mod svg;
pub mod viewport;

use edgeviz_core::{Error, Result, ResultExt, StyleConfig, VisualizerConfig};

use crate::algorithm::{self, Algorithm, AlgorithmResult, LabelEdge};
use crate::layout::{LayoutCache, Positions};
use crate::model::{EdgeGraph, EdgeWeightMap, DEFAULT_WEIGHT};

pub use canvas::{Canvas, Fill, Stroke};
pub use frame::{DrawCommand, Frame, Layer};
pub use svg::{render_svg, write_svg, SvgCanvas};

pub const NO_DATA_TITLE: &str = "Graph Visualization (No Data)";
pub const BASE_TITLE: &str = "Graph Visualization";

/// What to draw on the next redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// Algorithm that produced `result`; `None` for a plain redraw.
    pub algorithm: Option<Algorithm>,
    pub result: AlgorithmResult,
    /// Source and target as typed, used for node coloring and the title.
    pub source: String,
    pub target: String,
}

impl RenderRequest {
    /// Redraw the graph without highlights.
    #[must_use]
    pub fn base(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            algorithm: None,
            result: AlgorithmResult::None,
            source: source.into(),
            target: target.into(),
        }
    }

    #[must_use]
    pub fn with_result(
        algorithm: Algorithm,
        result: AlgorithmResult,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            algorithm: Some(algorithm),
            result,
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Build the frame for `request`.
///
/// Layout positions come from `layout` and are reused across calls while the
/// node count is unchanged.
#[must_use]
pub fn dispatch(
    graph: &EdgeGraph,
    weights: &EdgeWeightMap,
    layout: &mut LayoutCache,
    request: &RenderRequest,
    config: &VisualizerConfig,
) -> Frame {
    if graph.is_empty() {
        return Frame::new(NO_DATA_TITLE);
    }

    let positions = viewport::normalize(layout.positions_for(graph, &config.layout));
    let mut frame = Frame::new(title_for(graph, request));
    draw_base(&mut frame, graph, weights, &positions, request, &config.style);
    draw_overlay(&mut frame, &positions, &request.result, &config.style);
    frame
}

fn draw_base(
    frame: &mut Frame,
    graph: &EdgeGraph,
    weights: &EdgeWeightMap,
    positions: &Positions,
    request: &RenderRequest,
    style: &StyleConfig,
) {
    for label in graph.nodes() {
        let Some(at) = positions.get(label) else {
            continue;
        };
        let color = if *label == request.target {
            palette::TARGET_NODE
        } else if *label == request.source {
            palette::SOURCE_NODE
        } else {
            palette::NODE
        };
        frame.push(DrawCommand::Node {
            label: label.clone(),
            at: *at,
            fill: Fill {
                color,
                radius: style.node_radius,
                alpha: palette::NODE_ALPHA,
            },
        });
        frame.push(DrawCommand::Label {
            at: *at,
            text: label.clone(),
            size: style.node_font_size,
        });
    }

    let base = Stroke::new(palette::EDGE, style.edge_width, palette::EDGE_ALPHA);
    for (u, v, _) in graph.edges() {
        push_edge(frame, positions, u, v, base);
    }

    for (u, v, weight) in weights.iter() {
        if let (Some(a), Some(b)) = (positions.get(u), positions.get(v)) {
            frame.push(DrawCommand::Label {
                at: a.midpoint(*b),
                text: format_weight(weight),
                size: style.edge_font_size,
            });
        }
    }
}

fn draw_overlay(
    frame: &mut Frame,
    positions: &Positions,
    result: &AlgorithmResult,
    style: &StyleConfig,
) {
    let highlight = |color| Stroke::new(color, style.highlight_width, palette::HIGHLIGHT_ALPHA);
    match result {
        AlgorithmResult::EdgeTraversal(edges) => {
            push_edges(frame, positions, edges, highlight(palette::TRAVERSAL_EDGE));
        }
        AlgorithmResult::Path(nodes) => {
            for label in nodes {
                if let Some(at) = positions.get(label) {
                    frame.push(DrawCommand::Node {
                        label: label.clone(),
                        at: *at,
                        fill: Fill {
                            color: palette::PATH_NODE,
                            radius: style.highlight_node_radius,
                            alpha: 1.0,
                        },
                    });
                }
            }
            push_edges(frame, positions, &result.path_edges(), highlight(palette::PATH_EDGE));
        }
        AlgorithmResult::EdgeSet(edges) => {
            push_edges(frame, positions, edges, highlight(palette::SPANNING_EDGE));
        }
        AlgorithmResult::None => {}
    }
}

fn push_edges(frame: &mut Frame, positions: &Positions, edges: &[LabelEdge], stroke: Stroke) {
    for (u, v) in edges {
        push_edge(frame, positions, u, v, stroke);
    }
}

fn push_edge(frame: &mut Frame, positions: &Positions, u: &str, v: &str, stroke: Stroke) {
    if let (Some(from), Some(to)) = (positions.get(u), positions.get(v)) {
        frame.push(DrawCommand::Edge {
            from: *from,
            to: *to,
            stroke,
        });
    }
}

/// Plot title, with the path length or spanning-tree weight when they can
/// be computed. Failures only drop the annotation.
fn title_for(graph: &EdgeGraph, request: &RenderRequest) -> String {
    let Some(algorithm) = request.algorithm else {
        return BASE_TITLE.to_string();
    };
    let mut title = format!("{BASE_TITLE}: {algorithm} Result");

    match &request.result {
        AlgorithmResult::Path(_) => {
            if let Some(length) =
                algorithm::shortest_path_length(graph, &request.source, &request.target)
                    .ok_or_trace("path length annotation")
            {
                title.push_str(&format!(" (Length: {length:.2})"));
            }
        }
        AlgorithmResult::EdgeSet(edges) => {
            if let Some(total) =
                total_weight(graph, edges).ok_or_trace("total weight annotation")
            {
                title.push_str(&format!(" (Total Weight: {total:.2})"));
            }
        }
        AlgorithmResult::EdgeTraversal(_) | AlgorithmResult::None => {}
    }
    title
}

/// Sum of edge weights, counting unweighted edges as 1.
///
/// # Errors
///
/// Returns [`Error::Unexpected`] if an edge is not in the graph.
pub fn total_weight(graph: &EdgeGraph, edges: &[LabelEdge]) -> Result<f64> {
    edges.iter().try_fold(0.0, |total, (u, v)| {
        let weight = graph
            .weight_between(u, v)
            .ok_or_else(|| Error::Unexpected(format!("edge {u}-{v} is not in the graph")))?;
        Ok(total + weight.unwrap_or(DEFAULT_WEIGHT))
    })
}

/// Weight label text; whole numbers keep one decimal place ("2.0").
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_weight(weight: f64) -> String {
    if weight.is_finite() && weight.trunc() == weight && weight.abs() < 1e16 {
        format!("{weight:.1}")
    } else {
        weight.to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::parser::parse_into;

    struct Fixture {
        graph: EdgeGraph,
        weights: EdgeWeightMap,
        layout: LayoutCache,
        config: VisualizerConfig,
    }

    impl Fixture {
        fn parse(text: &str) -> Self {
            let mut graph = EdgeGraph::new();
            let mut weights = EdgeWeightMap::new();
            parse_into(text, &mut graph, &mut weights).unwrap();
            Self {
                graph,
                weights,
                layout: LayoutCache::new(),
                config: VisualizerConfig::default(),
            }
        }

        fn draw(&mut self, request: &RenderRequest) -> Frame {
            dispatch(
                &self.graph,
                &self.weights,
                &mut self.layout,
                request,
                &self.config,
            )
        }
    }

    fn colors(frame: &Frame) -> Vec<palette::RgbColor> {
        frame.edges().map(|(_, _, stroke)| stroke.color).collect()
    }

    #[test]
    fn test_empty_graph_frame() {
        let mut fixture = Fixture::parse("");
        let frame = fixture.draw(&RenderRequest::base("", ""));
        assert_eq!(frame.title(), NO_DATA_TITLE);
        assert!(frame.is_blank());
    }

    #[test]
    fn test_base_frame_draws_every_edge_and_weight() {
        let mut fixture = Fixture::parse("A B 1\nB C 2.5\nC D");
        let frame = fixture.draw(&RenderRequest::base("", ""));

        assert_eq!(frame.title(), BASE_TITLE);
        assert_eq!(colors(&frame), vec![palette::EDGE; 3]);
        let edge = frame.edges().next().unwrap().2;
        assert_eq!(edge.width, 1.0);
        assert_eq!(edge.alpha, 0.6);
        let labels: Vec<&str> = frame.labels().collect();
        assert_eq!(labels, ["A", "B", "C", "D", "1.0", "2.5"]);
    }

    #[test]
    fn test_source_and_target_coloring() {
        let mut fixture = Fixture::parse("A B\nB C");
        let frame = fixture.draw(&RenderRequest::base("A", "C"));
        let fills: Vec<(&str, palette::RgbColor)> =
            frame.nodes().map(|(label, fill)| (label, fill.color)).collect();
        assert_eq!(
            fills,
            [
                ("A", palette::SOURCE_NODE),
                ("B", palette::NODE),
                ("C", palette::TARGET_NODE)
            ]
        );
    }

    #[test]
    fn test_unknown_source_is_not_colored() {
        let mut fixture = Fixture::parse("A B");
        let frame = fixture.draw(&RenderRequest::base("Z", ""));
        assert!(frame.nodes().all(|(_, fill)| fill.color == palette::NODE));
    }

    #[test]
    fn test_traversal_overlay() {
        let mut fixture = Fixture::parse("A B\nB C");
        let result = AlgorithmResult::EdgeTraversal(vec![
            ("A".into(), "B".into()),
            ("B".into(), "C".into()),
        ]);
        let frame = fixture.draw(&RenderRequest::with_result(
            Algorithm::Bfs,
            result,
            "A",
            "",
        ));

        assert_eq!(frame.title(), "Graph Visualization: BFS Result");
        let overlay: Vec<Stroke> = frame.edges().skip(2).map(|(_, _, s)| s).collect();
        assert_eq!(overlay.len(), 2);
        assert!(overlay.iter().all(|s| s.color == palette::TRAVERSAL_EDGE));
        assert!(overlay.iter().all(|s| s.width == 2.5));
    }

    #[test]
    fn test_path_overlay_and_length_title() {
        let mut fixture = Fixture::parse("A B 1\nB C 2\nA C 1");
        let result = AlgorithmResult::Path(vec!["A".into(), "C".into()]);
        let frame = fixture.draw(&RenderRequest::with_result(
            Algorithm::Dijkstra,
            result,
            "A",
            "C",
        ));

        assert_eq!(
            frame.title(),
            "Graph Visualization: Dijkstra Result (Length: 1.00)"
        );
        assert_eq!(colors(&frame).last(), Some(&palette::PATH_EDGE));
        let path_nodes: Vec<&str> = frame
            .nodes()
            .filter(|(_, fill)| fill.color == palette::PATH_NODE)
            .map(|(label, _)| label)
            .collect();
        assert_eq!(path_nodes, ["A", "C"]);
        let larger = frame
            .nodes()
            .filter(|(_, fill)| fill.color == palette::PATH_NODE)
            .all(|(_, fill)| fill.radius > fixture.config.style.node_radius);
        assert!(larger);
    }

    #[test]
    fn test_spanning_overlay_and_weight_title() {
        let mut fixture = Fixture::parse("A B 1\nB C 2\nA C 5");
        let result = AlgorithmResult::EdgeSet(vec![
            ("A".into(), "B".into()),
            ("B".into(), "C".into()),
        ]);
        let frame = fixture.draw(&RenderRequest::with_result(
            Algorithm::Kruskal,
            result,
            "",
            "",
        ));
        assert_eq!(
            frame.title(),
            "Graph Visualization: Kruskal Result (Total Weight: 3.00)"
        );
        assert_eq!(
            colors(&frame)
                .iter()
                .filter(|c| **c == palette::SPANNING_EDGE)
                .count(),
            2
        );
    }

    #[test]
    fn test_title_annotation_failure_is_swallowed() {
        let mut fixture = Fixture::parse("A B 1");
        let result = AlgorithmResult::EdgeSet(vec![("A".into(), "Q".into())]);
        let frame = fixture.draw(&RenderRequest::with_result(
            Algorithm::Prim,
            result,
            "A",
            "",
        ));
        assert_eq!(frame.title(), "Graph Visualization: Prim Result");
    }

    #[test]
    fn test_unweighted_edges_count_as_one() {
        let fixture = Fixture::parse("A B\nB C 2");
        let edges = vec![("A".to_string(), "B".to_string()), ("C".into(), "B".into())];
        assert_eq!(total_weight(&fixture.graph, &edges).unwrap(), 3.0);
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(2.0), "2.0");
        assert_eq!(format_weight(-3.0), "-3.0");
        assert_eq!(format_weight(2.25), "2.25");
        assert_eq!(format_weight(f64::INFINITY), "inf");
    }

    #[test]
    fn test_layout_reused_between_redraws() {
        let mut fixture = Fixture::parse("A B\nB C");
        let first = fixture.draw(&RenderRequest::base("", ""));
        let second = fixture.draw(&RenderRequest::base("", ""));
        let points = |frame: &Frame| -> Vec<_> { frame.edges().map(|(a, b, _)| (a, b)).collect() };
        assert_eq!(points(&first), points(&second));
    }
}
