//! GUI runner - wires the adapters together and launches the window.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;

use anyhow::Result;
use eframe::egui;
use tracing::{info, warn};

use super::app::AnnieApp;
use crate::backend::OllamaBackend;
use crate::camera::CameraFeed;
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::launcher::OsLauncher;
use crate::session::SessionController;
use crate::speech::{CommandSynthesizer, Voice, WhisperRecognizer};

/// Run the GUI application
pub fn run_gui(config_override: Option<PathBuf>) -> Result<()> {
    let config = match &config_override {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
    .unwrap_or_else(|e| {
        warn!("Failed to load config: {e:#}. Falling back to defaults.");
        Config::with_defaults()
    });
    let settings = config.settings;

    let (status_tx, status_rx) = mpsc::channel();

    let synthesizer = Arc::new(CommandSynthesizer::new(&settings.voice));
    let voice = Voice::new(synthesizer, status_tx.clone());

    let recognizer = Arc::new(WhisperRecognizer::new(
        &settings.voice,
        &Config::data_dir(),
        status_tx.clone(),
    ));

    let backend = Arc::new(OllamaBackend::new(&settings.backend));
    if !backend.is_reachable() {
        warn!("Chat backend at {} is not reachable", settings.backend.url);
    }

    let dispatcher = Arc::new(Dispatcher::new(
        &settings,
        voice.clone(),
        backend,
        Arc::new(OsLauncher),
    ));

    let controller = SessionController::new(
        recognizer,
        dispatcher,
        voice.clone(),
        status_tx.clone(),
        settings.user_name.clone(),
    );

    // A missing webcam degrades to a blank feed; the assistant still runs.
    let camera = match CameraFeed::open_default(&settings.camera) {
        Ok(feed) => Some(feed),
        Err(e) => {
            warn!("Failed to open webcam: {e:#}");
            voice.speak("Error: Could not open webcam.");
            None
        }
    };

    info!("Starting Annie GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_resizable(false),
        centered: true,
        ..Default::default()
    };

    let app = AnnieApp::new(controller, camera, status_rx);

    eframe::run_native("Annie AI", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Failed to run GUI: {e}"))?;

    Ok(())
}
