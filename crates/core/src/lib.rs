#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # edgeviz-core
//!
//! Error, severity and configuration types shared by the edgeviz crates.

pub mod config;
pub mod error;
pub mod result;

pub use config::{CanvasConfig, LayoutConfig, StyleConfig, VisualizerConfig};
pub use error::{Error, Notice, Severity};
pub use result::{Result, ResultExt};
