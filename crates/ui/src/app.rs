//! eframe application: controls on the left, plot in the center, notices
//! shown one at a time in a blocking window.

use std::collections::VecDeque;

use edgeviz_core::{Notice, Severity, VisualizerConfig};
use edgeviz_graph::render::{Frame, RenderRequest};
use edgeviz_graph::{Algorithm, RunRequest, Session};
use eframe::egui;
use tracing::{debug, info};

use crate::canvas::PainterCanvas;

pub const WINDOW_TITLE: &str = "Graph Algorithm Visualizer";
const WINDOW_SIZE: [f32; 2] = [900.0, 700.0];

/// Edges pre-filled in the editor on startup.
const SAMPLE_EDGES: &str = "A B 4\nA C 2\nB C 5\nB D 10\nC E 3\nE D 4\nD F 11";

/// Desktop application state.
pub struct VisualizerApp {
    config: VisualizerConfig,
    session: Session,
    text: String,
    algorithm: Algorithm,
    source: String,
    target: String,
    frame: Frame,
    notices: VecDeque<Notice>,
}

impl VisualizerApp {
    #[must_use]
    pub fn new(config: VisualizerConfig) -> Self {
        let mut session = Session::new();
        let frame = session.render(&RenderRequest::base("", ""), &config);
        Self {
            config,
            session,
            text: SAMPLE_EDGES.to_string(),
            algorithm: Algorithm::Bfs,
            source: String::new(),
            target: String::new(),
            frame,
            notices: VecDeque::new(),
        }
    }

    fn run(&mut self) {
        let request = RunRequest::new(self.text.clone(), self.algorithm.name())
            .source(self.source.clone())
            .target(self.target.clone());
        let report = self.session.run(&request);
        info!(
            algorithm = %self.algorithm,
            notices = report.notices.len(),
            redraw = report.redraw.is_some(),
            "run finished"
        );

        if let Some(redraw) = &report.redraw {
            self.frame = self.session.render(redraw, &self.config);
        }
        self.notices.extend(report.notices);
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Graph Input");
        ui.label("One edge per line: u v [weight]");
        ui.add(
            egui::TextEdit::multiline(&mut self.text)
                .desired_rows(8)
                .desired_width(f32::INFINITY)
                .code_editor(),
        );
        ui.separator();

        egui::ComboBox::from_label("Algorithm")
            .selected_text(self.algorithm.name())
            .show_ui(ui, |ui| {
                for algorithm in Algorithm::ALL {
                    ui.selectable_value(&mut self.algorithm, algorithm, algorithm.name());
                }
            });

        egui::Grid::new("nodes").num_columns(2).show(ui, |ui| {
            ui.label("Source Node:");
            ui.text_edit_singleline(&mut self.source);
            ui.end_row();
            ui.label("Target Node:");
            ui.text_edit_singleline(&mut self.target);
            ui.end_row();
        });

        ui.separator();
        if ui.button("Run Algorithm").clicked() {
            self.run();
        }
    }

    fn plot(&self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        match PainterCanvas::new(&painter, response.rect) {
            Ok(mut canvas) => {
                if let Err(e) = self.frame.replay(&mut canvas) {
                    debug!(error = %e, "plot replay failed");
                }
            }
            Err(e) => debug!(error = %e, "plot area too small"),
        }
    }

    fn notice_window(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notices.front() else {
            return;
        };
        let prefix = match notice.severity {
            Severity::Info => "ℹ",
            Severity::Warning => "⚠",
            Severity::Error => "✖",
        };
        let mut dismissed = false;
        egui::Window::new(format!("{prefix} {}", notice.title))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&notice.message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.notices.pop_front();
        }
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let blocked = !self.notices.is_empty();

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| self.controls(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| self.plot(ui));

        self.notice_window(ctx);
    }
}

/// Open the desktop window and block until it is closed.
///
/// # Errors
///
/// Returns the eframe error if the window cannot be created.
pub fn run_app(config: VisualizerConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    info!(title = WINDOW_TITLE, "opening window");
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(VisualizerApp::new(config)))),
    )
}
