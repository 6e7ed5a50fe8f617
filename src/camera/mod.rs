//! Webcam capture.
//!
//! The feed is an ffmpeg child process streaming MJPEG to a pipe. A reader
//! thread splits and decodes frames, keeping only the most recent one;
//! the GUI picks that frame up on its render tick. The child is
//! terminated when the feed is dropped.

mod frames;

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result, bail};
use image::RgbaImage;

use crate::config::CameraSettings;

use frames::MjpegSplitter;

/// A live webcam feed
pub struct CameraFeed {
    child: Child,
    latest: Arc<Mutex<Option<RgbaImage>>>,
}

impl CameraFeed {
    /// Open the default capture device.
    ///
    /// Fails if ffmpeg cannot be started or the platform has no usable
    /// device configuration; callers degrade to a blank feed.
    pub fn open_default(settings: &CameraSettings) -> Result<Self> {
        let input_args = platform_input_args(settings)?;

        let mut child = Command::new("ffmpeg")
            .args(["-loglevel", "error"])
            .args(&input_args)
            .args(["-f", "image2pipe", "-vcodec", "mjpeg", "-q:v", "5", "-"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .context("Failed to start ffmpeg for camera capture")?;

        let stdout = child
            .stdout
            .take()
            .context("ffmpeg did not expose a stdout pipe")?;

        let latest = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&latest);

        thread::spawn(move || read_frames(stdout, sink));

        Ok(Self { child, latest })
    }

    /// The most recent decoded frame, if any has arrived yet
    pub fn latest_frame(&self) -> Option<RgbaImage> {
        self.latest.lock().ok()?.clone()
    }
}

impl Drop for CameraFeed {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// ffmpeg input arguments for the platform's capture device
fn platform_input_args(settings: &CameraSettings) -> Result<Vec<String>> {
    if settings.device.is_empty() {
        bail!("No camera device configured");
    }

    let size = format!("{}x{}", settings.width, settings.height);
    let fps = settings.fps.to_string();

    #[cfg(target_os = "macos")]
    let (format, input) = ("avfoundation", settings.device.clone());
    #[cfg(target_os = "windows")]
    let (format, input) = ("dshow", format!("video={}", settings.device));
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let (format, input) = ("v4l2", settings.device.clone());

    Ok(vec![
        "-f".to_string(),
        format.to_string(),
        "-framerate".to_string(),
        fps,
        "-video_size".to_string(),
        size,
        "-i".to_string(),
        input,
    ])
}

/// Reader loop: split the MJPEG stream and decode frames as they arrive
fn read_frames(mut stdout: impl Read, sink: Arc<Mutex<Option<RgbaImage>>>) {
    let mut splitter = MjpegSplitter::new();
    let mut chunk = [0u8; 16 * 1024];

    loop {
        let n = match stdout.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };

        for frame in splitter.push(&chunk[..n]) {
            match image::load_from_memory_with_format(&frame, image::ImageFormat::Jpeg) {
                Ok(decoded) => {
                    if let Ok(mut slot) = sink.lock() {
                        *slot = Some(decoded.into_rgba8());
                    }
                }
                Err(e) => tracing::debug!("dropping undecodable camera frame: {e}"),
            }
        }
    }

    tracing::debug!("camera stream ended");
}
