use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};

use eframe::egui::{self, Color32, RichText};
use neural_detect::{Config, HttpTransport, ImageFile};
use neural_detect_common::{
    Activity, AnalyzeError, ImageSource, PredictionTransport, RawResponse, Session,
};

use crate::io::open_image;
use crate::model::DesktopImage;

const ACCENT: Color32 = Color32::from_rgb(99, 102, 241);
const DAMAGED: Color32 = Color32::from_rgb(239, 68, 68);
const NOT_DAMAGED: Color32 = Color32::from_rgb(34, 197, 94);
const PICKER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

type AnalyzeReply = std::result::Result<RawResponse, AnalyzeError>;

pub struct DesktopApp {
    session: Session<DesktopImage>,
    config: Config,
    status: String,
    analyze_rx: Option<Receiver<AnalyzeReply>>,
}

impl DesktopApp {
    pub fn new(config: Config) -> Self {
        Self {
            session: Session::new(),
            config,
            status: String::new(),
            analyze_rx: None,
        }
    }

    fn browse(&mut self, ctx: &egui::Context) {
        let picked = rfd::FileDialog::new()
            .add_filter("Image", PICKER_EXTENSIONS)
            .pick_file();
        if let Some(path) = picked {
            self.select_path(ctx, &path);
        }
    }

    fn select_path(&mut self, ctx: &egui::Context, path: &Path) {
        match open_image(path) {
            Ok(file) => {
                self.status.clear();
                self.select_image(ctx, file);
            }
            Err(err) => {
                self.status = format!("Open failed: {err:#}");
            }
        }
    }

    fn select_image(&mut self, ctx: &egui::Context, file: ImageFile) {
        let path = file.path().to_path_buf();
        if !self.session.select_file(DesktopImage::new(file, ctx.clone())) {
            tracing::debug!("ignored non-image file: {}", path.display());
        }
    }

    /// プレビューが作れなかった画像でも解析・リセットはできる
    fn shows_actions(&self) -> bool {
        self.session.has_selection()
    }

    fn run_analyze(&mut self) {
        let Some(file) = self.session.begin_analysis().map(|image| image.file().clone()) else {
            return;
        };

        let config = self.config.clone();
        let (tx, rx) = mpsc::channel();
        self.analyze_rx = Some(rx);

        std::thread::spawn(move || {
            let _ = tx.send(send_blocking(&config, &file));
        });
    }

    fn poll_messages(&mut self) {
        let Some(reply) = self.analyze_rx.as_ref().and_then(receive_reply) else {
            return;
        };
        self.analyze_rx = None;
        self.session.complete_analysis(reply);
    }

    fn render_drop_zone(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, is_dragging: bool) {
        let stroke_color = if is_dragging { ACCENT } else { Color32::from_gray(90) };
        let fill = if is_dragging { Color32::from_rgb(38, 36, 66) } else { Color32::TRANSPARENT };
        let preview = self.session.preview().cloned();
        let file_name = self.session.selected_file().map(|image| image.file().file_name());

        egui::Frame::none()
            .fill(fill)
            .stroke(egui::Stroke::new(2.0, stroke_color))
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::same(24.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| match (preview, file_name) {
                    (Some(texture), _) => {
                        ui.add(egui::Image::new(&texture).max_size(egui::vec2(480.0, 256.0)));
                    }
                    (None, Some(name)) => {
                        ui.label(RichText::new("Preview unavailable").size(16.0).strong());
                        ui.label(RichText::new(name).color(Color32::from_gray(150)));
                    }
                    (None, None) => {
                        ui.label(RichText::new("Drop an image here").size(18.0).strong());
                        ui.label(RichText::new("or").color(Color32::from_gray(150)));
                        if ui.button("Browse...").clicked() {
                            self.browse(ctx);
                        }
                        ui.add_space(6.0);
                        ui.label(
                            RichText::new("JPEG  PNG")
                                .size(11.0)
                                .color(Color32::from_gray(150)),
                        );
                    }
                });
            });
    }

    fn render_actions(&mut self, ui: &mut egui::Ui) {
        if !self.shows_actions() {
            return;
        }
        let loading = self.session.is_loading();
        let analyze_label = if loading { "Analyzing..." } else { "Analyze Package" };

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(!loading, egui::Button::new(analyze_label)).clicked() {
                self.run_analyze();
            }
            if ui.add_enabled(!loading, egui::Button::new("Reset")).clicked() {
                self.session.reset();
            }
        });
    }

    fn render_results(&self, ui: &mut egui::Ui) {
        ui.add_space(16.0);
        match self.session.activity() {
            Activity::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Analyzing your package...");
                });
            }
            Activity::Failed(err) => {
                ui.label(RichText::new("⚠ Analysis Error").strong().color(DAMAGED));
                ui.label(RichText::new(err.to_string()).color(DAMAGED));
            }
            Activity::Succeeded(prediction) => {
                let color = if prediction.verdict().is_damaged() { DAMAGED } else { NOT_DAMAGED };
                ui.label(RichText::new("Analysis Complete").strong());
                ui.label(
                    RichText::new(prediction.display_label())
                        .size(40.0)
                        .strong()
                        .color(color),
                );
                ui.label(format!("Confidence: {}", prediction.confidence));
            }
            Activity::Idle => {}
        }
    }
}

/// ワーカーの返信を受け取る
///
/// 送信側が返信せずに落ちた場合もエラーとして返し、解析中のまま残さない
fn receive_reply(rx: &Receiver<AnalyzeReply>) -> Option<AnalyzeReply> {
    match rx.try_recv() {
        Ok(reply) => Some(reply),
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => Some(Err(AnalyzeError::transport(""))),
    }
}

fn send_blocking(config: &Config, file: &ImageFile) -> AnalyzeReply {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AnalyzeError::transport(err.to_string()))?;
    let transport = HttpTransport::from_config(config, None)
        .map_err(|err| AnalyzeError::transport(err.to_string()))?;
    runtime.block_on(transport.send(file))
}

fn render_header(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Neural").size(28.0).strong());
            ui.label(RichText::new("Detect").size(28.0).strong().color(ACCENT));
        });
        ui.label("AI-Powered Postal Package Damage Detection");
        ui.label(
            RichText::new("★ First Place Winner - Innovpost Hackathon")
                .size(12.0)
                .color(Color32::from_rgb(250, 204, 21)),
        );
        ui.add_space(8.0);
    });
}

fn dropped_path(ctx: &egui::Context) -> Option<PathBuf> {
    ctx.input(|i| i.raw.dropped_files.iter().find_map(|f| f.path.clone()))
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.is_loading() {
            ctx.request_repaint();
        }
        self.poll_messages();

        if let Some(path) = dropped_path(ctx) {
            self.select_path(ctx, &path);
        }
        let is_dragging = ctx.input(|i| !i.raw.hovered_files.is_empty());

        egui::TopBottomPanel::top("header").show(ctx, render_header);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Package Damage Detection");
                    ui.label(
                        RichText::new("Upload an image of a package to check it for damage.")
                            .color(Color32::from_gray(170)),
                    );
                });
                ui.add_space(12.0);

                self.render_drop_zone(ui, ctx, is_dragging);
                self.render_actions(ui);
                self.render_results(ui);

                if !self.status.is_empty() {
                    ui.add_space(8.0);
                    ui.label(RichText::new(&self.status).color(Color32::from_gray(170)));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neural_detect_common::{Stage, ANALYZE_FAILED_MESSAGE};
    use std::time::{Duration, Instant};

    fn broken_png() -> ImageFile {
        ImageFile::from_bytes(PathBuf::from("broken.png"), "image/png", b"not a png".to_vec())
    }

    fn app_with_selection() -> DesktopApp {
        let mut app = DesktopApp::new(Config::default());
        app.select_image(&egui::Context::default(), broken_png());
        app
    }

    fn start_loading(app: &mut DesktopApp) -> mpsc::Sender<AnalyzeReply> {
        assert!(app.session.begin_analysis().is_some());
        let (tx, rx) = mpsc::channel();
        app.analyze_rx = Some(rx);
        tx
    }

    #[test]
    fn test_undecodable_image_still_shows_actions() {
        let app = app_with_selection();
        assert!(!app.session.has_preview());
        assert!(app.shows_actions());
        assert_eq!(app.session.stage(), Stage::ReadyToAnalyze);
    }

    #[test]
    fn test_no_actions_without_selection() {
        let app = DesktopApp::new(Config::default());
        assert!(!app.shows_actions());
    }

    #[test]
    fn test_poll_keeps_loading_until_reply() {
        let mut app = app_with_selection();
        let _tx = start_loading(&mut app);

        app.poll_messages();

        assert!(app.session.is_loading());
        assert!(app.analyze_rx.is_some());
    }

    #[test]
    fn test_poll_applies_reply() {
        let mut app = app_with_selection();
        let tx = start_loading(&mut app);
        tx.send(Ok(RawResponse::new(200, r#"{"prediction":"damaged","confidence":"92%"}"#)))
            .expect("send failed");

        app.poll_messages();

        assert!(!app.session.is_loading());
        assert!(app.analyze_rx.is_none());
        let prediction = app.session.prediction().expect("no prediction");
        assert_eq!(prediction.display_label(), "Damaged");
        assert_eq!(prediction.confidence, "92%");
    }

    #[test]
    fn test_poll_finishes_when_worker_is_gone() {
        let mut app = app_with_selection();
        let tx = start_loading(&mut app);
        drop(tx);

        app.poll_messages();

        assert!(!app.session.is_loading());
        assert!(app.analyze_rx.is_none());
        assert_eq!(app.session.error_message().as_deref(), Some(ANALYZE_FAILED_MESSAGE));
    }

    #[test]
    fn test_run_analyze_against_unreachable_server_finishes() {
        let config = Config {
            endpoint: "http://127.0.0.1:1/predict".to_string(),
            timeout_seconds: 5,
        };
        let mut app = DesktopApp::new(config);
        app.select_image(&egui::Context::default(), broken_png());

        app.run_analyze();
        assert!(app.session.is_loading());

        let deadline = Instant::now() + Duration::from_secs(10);
        while app.session.is_loading() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(20));
            app.poll_messages();
        }

        assert!(!app.session.is_loading());
        assert!(matches!(app.session.error(), Some(AnalyzeError::Transport(_))));
    }
}
