//! # Run coordinator
//!
//! A [`Session`] owns the parsed graph, the weight labels and the layout
//! cache. Each [`Session::run`] re-parses the input, validates the
//! selection, runs one algorithm and reports what the UI should show.

use edgeviz_core::{Error, Notice, Result, ResultExt, VisualizerConfig};
use tracing::{debug, info};

use crate::algorithm::{self, Algorithm, AlgorithmResult};
use crate::layout::LayoutCache;
use crate::model::{EdgeGraph, EdgeWeightMap};
use crate::parser::{self, ParseWarning};
use crate::render::{self, Frame, RenderRequest};

/// One press of the run button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunRequest {
    /// Edge-list text.
    pub text: String,
    /// Algorithm name as selected; unrecognized names are reported, not
    /// rejected up front.
    pub algorithm: String,
    pub source: String,
    pub target: String,
}

impl RunRequest {
    #[must_use]
    pub fn new(text: impl Into<String>, algorithm: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            algorithm: algorithm.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }
}

/// What a run produced for the UI.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunReport {
    /// Notices in the order they arose.
    pub notices: Vec<Notice>,
    /// Set when the view should be redrawn.
    pub redraw: Option<RenderRequest>,
}

impl RunReport {
    /// Whether any notice is an error.
    #[must_use]
    pub fn has_fatal(&self) -> bool {
        self.notices.iter().any(Notice::is_fatal)
    }

    /// The algorithm result to display, if the run got that far.
    #[must_use]
    pub fn result(&self) -> Option<&AlgorithmResult> {
        self.redraw.as_ref().map(|request| &request.result)
    }

    fn notify(&mut self, notice: Notice) {
        notice.log();
        self.notices.push(notice);
    }
}

/// State carried between runs.
#[derive(Debug, Clone, Default)]
pub struct Session {
    graph: EdgeGraph,
    weights: EdgeWeightMap,
    layout: LayoutCache,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn graph(&self) -> &EdgeGraph {
        &self.graph
    }

    #[must_use]
    pub const fn weights(&self) -> &EdgeWeightMap {
        &self.weights
    }

    /// Parse, validate and run one algorithm.
    ///
    /// Never fails: every problem becomes a [`Notice`] in the report. The
    /// report asks for a redraw after a failed parse, an empty graph, a
    /// missing path or a successful run; input and algorithm errors leave
    /// the view as it was.
    pub fn run(&mut self, request: &RunRequest) -> RunReport {
        let parsed = parser::parse_into(&request.text, &mut self.graph, &mut self.weights);
        self.run_parsed(parsed, request)
    }

    /// Everything after the parse, given its outcome. A failed parse still
    /// redraws whatever the earlier lines left in the graph.
    fn run_parsed(
        &mut self,
        parsed: Result<Vec<ParseWarning>>,
        request: &RunRequest,
    ) -> RunReport {
        let mut report = RunReport::default();
        let name = request.algorithm.trim();
        let source = request.source.trim();
        let target = request.target.trim();

        match parsed.into_notice() {
            Ok(warnings) => {
                report
                    .notices
                    .extend(warnings.iter().map(Notice::from));
            }
            Err(notice) => {
                report.notify(notice);
                report.redraw = Some(RenderRequest::base(source, target));
                return report;
            }
        }

        if self.graph.is_empty() {
            report.notify(Notice::from(Error::EmptyGraph));
            report.redraw = Some(RenderRequest::base(source, target));
            return report;
        }

        let selected = name.parse::<Algorithm>().ok();
        if let Err(notice) = self.validate(selected, name, source, target).into_notice() {
            report.notify(notice);
            return report;
        }

        let Some(algorithm) = selected else {
            report.notify(Notice::from(Error::UnrecognizedAlgorithm(name.to_string())));
            return report;
        };

        debug!(%algorithm, source, target, "running algorithm");
        match algorithm::run(&self.graph, algorithm, source, target) {
            Ok(result) => {
                info!(%algorithm, "algorithm finished");
                report.redraw = Some(RenderRequest::with_result(
                    algorithm, result, source, target,
                ));
            }
            Err(e @ Error::NoPath { .. }) => {
                report.notify(Notice::from(e));
                report.redraw = Some(RenderRequest::with_result(
                    algorithm,
                    AlgorithmResult::None,
                    source,
                    target,
                ));
            }
            Err(e) => report.notify(Notice::from(e)),
        }
        report
    }

    /// Selection checks in a fixed order: required source, required target,
    /// then existence of whatever labels were given.
    fn validate(
        &self,
        selected: Option<Algorithm>,
        name: &str,
        source: &str,
        target: &str,
    ) -> Result<()> {
        if let Some(algorithm) = selected {
            if algorithm.requires_source() && source.is_empty() {
                return Err(Error::SourceRequired {
                    algorithm: name.to_string(),
                });
            }
            if algorithm.requires_target() && target.is_empty() {
                return Err(Error::TargetRequired {
                    algorithm: name.to_string(),
                });
            }
        }
        if !source.is_empty() && !self.graph.contains(source) {
            return Err(Error::SourceNotFound(source.to_string()));
        }
        if !target.is_empty() && !self.graph.contains(target) {
            return Err(Error::TargetNotFound(target.to_string()));
        }
        Ok(())
    }

    /// Build the frame for a redraw requested by [`Session::run`].
    pub fn render(&mut self, request: &RenderRequest, config: &VisualizerConfig) -> Frame {
        render::dispatch(
            &self.graph,
            &self.weights,
            &mut self.layout,
            request,
            config,
        )
    }
}
