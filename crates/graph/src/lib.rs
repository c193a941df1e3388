#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # edgeviz-graph
//!
//! Parse an edge list into a petgraph graph, run one of five classical
//! algorithms on it, and turn the outcome into a drawable [`render::Frame`].
//!
//! ```
//! use edgeviz_core::VisualizerConfig;
//! use edgeviz_graph::{RunRequest, Session};
//!
//! let mut session = Session::new();
//! let report = session.run(&RunRequest::new("A B 1\nB C 2\nA C 1", "Dijkstra").source("A").target("C"));
//! assert!(report.notices.is_empty());
//!
//! if let Some(redraw) = report.redraw {
//!     let frame = session.render(&redraw, &VisualizerConfig::default());
//!     assert_eq!(frame.title(), "Graph Visualization: Dijkstra Result (Length: 1.00)");
//! }
//! ```

pub mod algorithm;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;
pub mod session;

pub use algorithm::{Algorithm, AlgorithmResult, LabelEdge};
pub use model::{EdgeData, EdgeGraph, EdgeWeightMap, NodeLabel};
pub use parser::{ParseWarning, WarningKind};
pub use render::{Canvas, Frame, RenderRequest};
pub use session::{RunReport, RunRequest, Session};
