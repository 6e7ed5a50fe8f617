//! The main application window.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use egui::{
    Align2, CentralPanel, Color32, FontId, RichText, ScrollArea, Sense, Stroke, TextureHandle,
    TextureOptions, Vec2,
};

use crate::camera::CameraFeed;
use crate::domain::{StatusEvent, StatusKind};
use crate::session::SessionController;

const CAMERA_SIZE: Vec2 = Vec2::new(320.0, 240.0);
const CIRCLE_SIZE: f32 = 200.0;

/// The assistant's window: camera feed, headline, activation circle, log
pub struct AnnieApp {
    controller: SessionController,
    camera: Option<CameraFeed>,
    status_rx: Receiver<StatusEvent>,
    log: Vec<StatusEvent>,
    headline: String,
    camera_texture: Option<TextureHandle>,
}

impl AnnieApp {
    /// Create the app around an inactive session
    pub fn new(
        controller: SessionController,
        camera: Option<CameraFeed>,
        status_rx: Receiver<StatusEvent>,
    ) -> Self {
        Self {
            controller,
            camera,
            status_rx,
            log: Vec::new(),
            headline: "Click to activate Annie!".to_string(),
            camera_texture: None,
        }
    }

    /// Drain pending status events; the newest one becomes the headline.
    /// The log is append-only and keeps the full session history.
    fn drain_status_events(&mut self) {
        while let Ok(event) = self.status_rx.try_recv() {
            self.headline = event.text.clone();
            self.log.push(event);
        }
    }

    /// Upload the newest camera frame to the GPU, if one arrived
    fn refresh_camera_texture(&mut self, ctx: &egui::Context) {
        let Some(frame) = self.camera.as_ref().and_then(|feed| feed.latest_frame()) else {
            return;
        };

        let size = [frame.width() as usize, frame.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, frame.as_raw());

        match &mut self.camera_texture {
            Some(texture) => texture.set(color_image, TextureOptions::LINEAR),
            None => {
                self.camera_texture =
                    Some(ctx.load_texture("camera", color_image, TextureOptions::LINEAR));
            }
        }
    }

    fn render_camera(&self, ui: &mut egui::Ui) {
        match &self.camera_texture {
            Some(texture) => {
                ui.add(egui::Image::new(texture).fit_to_exact_size(CAMERA_SIZE));
            }
            None => {
                // Blank feed while no frame has arrived (or no webcam)
                let (rect, _) = ui.allocate_exact_size(CAMERA_SIZE, Sense::hover());
                ui.painter()
                    .rect_filled(rect, 4.0, Color32::from_rgb(25, 25, 30));
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "no camera",
                    FontId::proportional(14.0),
                    Color32::from_gray(90),
                );
            }
        }
    }

    /// The clickable activation circle: green and pulsing while active,
    /// red while asleep
    fn render_activation_circle(&mut self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(CIRCLE_SIZE), Sense::click());
        let center = rect.center();
        let radius = CIRCLE_SIZE / 2.0 - 10.0;

        let active = self.controller.is_active();
        let fill = if active {
            Color32::from_rgb(40, 180, 80)
        } else {
            Color32::from_rgb(200, 60, 60)
        };

        if active {
            let time = ui.ctx().input(|i| i.time);
            let pulse = ((time * 3.0).sin() * 0.5 + 0.5) as f32;
            let ring = Color32::from_rgba_unmultiplied(
                fill.r(),
                fill.g(),
                fill.b(),
                (pulse * 120.0) as u8,
            );
            ui.painter()
                .circle_stroke(center, radius + 4.0 + pulse * 4.0, Stroke::new(3.0, ring));
        }

        ui.painter().circle_filled(center, radius, fill);
        ui.painter().text(
            center,
            Align2::CENTER_CENTER,
            "ANNIE",
            FontId::proportional(30.0),
            Color32::WHITE,
        );

        if response.clicked() {
            self.controller.toggle();
        }
    }

    fn render_log(&self, ui: &mut egui::Ui) {
        ScrollArea::vertical()
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for event in &self.log {
                    let color = match event.kind {
                        StatusKind::Heard => Color32::from_rgb(120, 170, 255),
                        StatusKind::Spoken => Color32::from_rgb(140, 220, 140),
                        StatusKind::Error => Color32::from_rgb(240, 100, 100),
                        StatusKind::System => Color32::from_gray(160),
                    };
                    let stamp = event
                        .timestamp
                        .with_timezone(&chrono::Local)
                        .format("%H:%M:%S");
                    ui.label(
                        RichText::new(format!("[{stamp}] {}", event.text))
                            .color(color)
                            .monospace(),
                    );
                }
            });
    }
}

impl eframe::App for AnnieApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_status_events();
        self.refresh_camera_texture(ctx);

        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                self.render_camera(ui);

                ui.add_space(10.0);
                ui.label(RichText::new(&self.headline).size(18.0).strong());

                ui.add_space(10.0);
                self.render_activation_circle(ui);
                ui.add_space(10.0);
            });

            ui.separator();
            self.render_log(ui);
        });

        // Keep the camera feed and pulse animation moving (~30 fps)
        ctx.request_repaint_after(Duration::from_millis(33));
    }
}
