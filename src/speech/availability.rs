//! Speech feature availability checking.

use std::path::Path;
use std::process::Command;

/// Whether an external tool is on the PATH
pub fn tool_exists(name: &str) -> bool {
    #[cfg(target_os = "windows")]
    let finder = "where";
    #[cfg(not(target_os = "windows"))]
    let finder = "which";

    Command::new(finder)
        .arg(name)
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

fn tts_tool() -> &'static str {
    #[cfg(target_os = "macos")]
    return "say";
    #[cfg(target_os = "windows")]
    return "powershell";
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    return "espeak";
}

/// Check availability of the speech toolchain and return a detailed status
pub fn check_availability(model_path: &Path) -> (bool, String) {
    if !tool_exists("rec") {
        return (
            false,
            "sox not found. Install it with your package manager (e.g. brew install sox)."
                .to_string(),
        );
    }

    if !tool_exists("whisper-cli") {
        return (
            false,
            "whisper-cli not found. Install whisper-cpp (e.g. brew install whisper-cpp)."
                .to_string(),
        );
    }

    if !model_path.exists() {
        return (
            false,
            format!(
                "Whisper model not found at {}. Download a ggml model there first.",
                model_path.display()
            ),
        );
    }

    if !tool_exists(tts_tool()) {
        return (
            false,
            format!("{} not found; text-to-speech is unavailable.", tts_tool()),
        );
    }

    (true, "Voice input and output ready".to_string())
}
