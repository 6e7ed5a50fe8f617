//! Check command implementation

use std::path::PathBuf;

use anyhow::Result;

use annie::Config;
use annie::backend::OllamaBackend;
use annie::speech::{WhisperRecognizer, check_availability, tool_exists};

/// Report whether the assistant's external tools are ready to use
pub fn check_command(config_path: Option<PathBuf>) -> Result<()> {
    let config = match &config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    let settings = &config.settings;

    let model_path = WhisperRecognizer::model_path(&settings.voice, &Config::data_dir());
    let (voice_ready, voice_message) = check_availability(&model_path);
    println!(
        "Voice:   {} - {}",
        if voice_ready { "ready" } else { "not ready" },
        voice_message
    );

    let backend = OllamaBackend::new(&settings.backend);
    if backend.is_reachable() {
        println!(
            "Backend: reachable at {} (model {})",
            settings.backend.url, settings.backend.model
        );
    } else {
        println!(
            "Backend: NOT reachable at {} - is ollama running?",
            settings.backend.url
        );
    }

    if settings.camera.device.is_empty() {
        println!("Camera:  no device configured");
    } else if tool_exists("ffmpeg") {
        println!("Camera:  ffmpeg found, device {}", settings.camera.device);
    } else {
        println!("Camera:  ffmpeg not found; the feed will stay blank");
    }

    Ok(())
}
