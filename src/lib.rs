#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # edgeviz
//!
//! Command-line and desktop front ends for the edgeviz graph algorithm
//! visualizer.

pub mod cli;
pub mod commands;

pub use edgeviz_core;
pub use edgeviz_graph;
