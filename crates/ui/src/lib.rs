#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # edgeviz-ui
//!
//! Desktop front end: an edge-list editor, algorithm and node selectors,
//! a run button, and the plot painted with egui.

pub mod app;
pub mod canvas;

pub use app::{run_app, VisualizerApp, WINDOW_TITLE};
pub use canvas::PainterCanvas;
