//! Settings configuration types

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Name the assistant addresses the user by
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// System prompt sent with every chat request.
    /// `{user}` is replaced with `user_name`.
    #[serde(default = "default_persona_template")]
    pub persona_template: String,

    /// Chat backend settings
    #[serde(default)]
    pub backend: BackendSettings,

    /// Voice input/output settings
    #[serde(default)]
    pub voice: VoiceSettings,

    /// Webcam settings
    #[serde(default)]
    pub camera: CameraSettings,

    /// Program/URL launch settings
    #[serde(default)]
    pub launcher: LauncherSettings,
}

impl Settings {
    /// The persona system prompt with the user name filled in
    pub fn persona_prompt(&self) -> String {
        self.persona_template.replace("{user}", &self.user_name)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            persona_template: default_persona_template(),
            backend: BackendSettings::default(),
            voice: VoiceSettings::default(),
            camera: CameraSettings::default(),
            launcher: LauncherSettings::default(),
        }
    }
}

fn default_user_name() -> String {
    "Shyam".to_string()
}

fn default_persona_template() -> String {
    "You are Annie, a friendly AI companion. You are my best friend. \
     Talk casually, use humor, and keep your replies short and fun. \
     Always call me {user}."
        .to_string()
}

/// Chat backend settings (local Ollama endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Base URL of the Ollama server
    #[serde(default = "default_backend_url")]
    pub url: String,

    /// Model name to chat with
    #[serde(default = "default_backend_model")]
    pub model: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            model: default_backend_model(),
        }
    }
}

fn default_backend_url() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_backend_model() -> String {
    "llama3".to_string()
}

/// Voice input/output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Whisper model for transcription (tiny, base, small, medium, large)
    #[serde(default = "default_whisper_model")]
    pub whisper_model: String,

    /// Language for transcription (auto, en, de, etc.)
    #[serde(default = "default_voice_language")]
    pub language: String,

    /// Silence threshold to stop recording (0.0-1.0)
    #[serde(default = "default_silence_threshold")]
    pub silence_threshold: f32,

    /// Silence duration marking the end of an utterance (in seconds)
    #[serde(default = "default_silence_duration")]
    pub silence_duration: f32,

    /// Maximum recording duration per utterance (in seconds)
    #[serde(default = "default_max_duration")]
    pub max_duration: f32,

    /// Text-to-speech voice name (say/espeak); None uses the system default
    #[serde(default)]
    pub tts_voice: Option<String>,

    /// Text-to-speech voice index (Windows SAPI voice enumeration)
    #[serde(default = "default_tts_voice_index")]
    pub tts_voice_index: usize,

    /// Text-to-speech rate in words per minute
    #[serde(default = "default_tts_rate")]
    pub tts_rate: u32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            whisper_model: default_whisper_model(),
            language: default_voice_language(),
            silence_threshold: default_silence_threshold(),
            silence_duration: default_silence_duration(),
            max_duration: default_max_duration(),
            tts_voice: None,
            tts_voice_index: default_tts_voice_index(),
            tts_rate: default_tts_rate(),
        }
    }
}

fn default_whisper_model() -> String {
    "base".to_string()
}

fn default_voice_language() -> String {
    "en".to_string()
}

fn default_silence_threshold() -> f32 {
    0.1 // 10% - higher value = less sensitive to background noise
}

fn default_silence_duration() -> f32 {
    1.0 // seconds of silence marking the utterance boundary
}

fn default_max_duration() -> f32 {
    30.0 // safety cap per capture cycle
}

fn default_tts_voice_index() -> usize {
    1
}

fn default_tts_rate() -> u32 {
    170
}

/// Webcam settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Capture device passed to ffmpeg.
    /// Linux: a v4l2 device path; macOS: an avfoundation index;
    /// Windows: a dshow device name (empty disables the feed).
    #[serde(default = "default_camera_device")]
    pub device: String,

    /// Requested frame width
    #[serde(default = "default_camera_width")]
    pub width: u32,

    /// Requested frame height
    #[serde(default = "default_camera_height")]
    pub height: u32,

    /// Requested frame rate
    #[serde(default = "default_camera_fps")]
    pub fps: u32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            device: default_camera_device(),
            width: default_camera_width(),
            height: default_camera_height(),
            fps: default_camera_fps(),
        }
    }
}

fn default_camera_device() -> String {
    #[cfg(target_os = "macos")]
    return "0".to_string();
    #[cfg(target_os = "windows")]
    return String::new();
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    return "/dev/video0".to_string();
}

fn default_camera_width() -> u32 {
    320
}

fn default_camera_height() -> u32 {
    240
}

fn default_camera_fps() -> u32 {
    15
}

/// Program/URL launch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherSettings {
    /// Command (program + args) launched for "open notepad"
    #[serde(default = "default_editor_command")]
    pub editor_command: Vec<String>,

    /// Command (program + args) launched for "open chrome"
    #[serde(default = "default_browser_command")]
    pub browser_command: Vec<String>,

    /// URL opened for "open youtube"
    #[serde(default = "default_youtube_url")]
    pub youtube_url: String,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            editor_command: default_editor_command(),
            browser_command: default_browser_command(),
            youtube_url: default_youtube_url(),
        }
    }
}

fn default_editor_command() -> Vec<String> {
    #[cfg(target_os = "macos")]
    return vec!["open".into(), "-a".into(), "TextEdit".into()];
    #[cfg(target_os = "windows")]
    return vec!["notepad.exe".into()];
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    return vec!["gedit".into()];
}

fn default_browser_command() -> Vec<String> {
    #[cfg(target_os = "macos")]
    return vec!["open".into(), "-a".into(), "Google Chrome".into()];
    #[cfg(target_os = "windows")]
    return vec![
        "C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe".into(),
    ];
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    return vec!["google-chrome".into()];
}

fn default_youtube_url() -> String {
    "https://www.youtube.com".to_string()
}
