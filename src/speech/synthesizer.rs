//! Text-to-speech via the platform speech command.

use std::process::{Command, Stdio};

use crate::config::VoiceSettings;

use super::SpeechError;

/// Synchronous speech output: blocks until playback finishes.
pub trait SpeechOutput: Send + Sync {
    fn speak(&self, text: &str) -> Result<(), SpeechError>;
}

/// Speaks through the OS speech command (`say` on macOS, `espeak` on
/// Linux, SAPI via PowerShell on Windows).
pub struct CommandSynthesizer {
    voice: Option<String>,
    voice_index: usize,
    rate: u32,
}

impl CommandSynthesizer {
    /// Create a synthesizer from voice settings
    pub fn new(settings: &VoiceSettings) -> Self {
        Self {
            voice: settings.tts_voice.clone(),
            voice_index: settings.tts_voice_index,
            rate: settings.tts_rate,
        }
    }

    #[cfg(target_os = "macos")]
    fn speak_command(&self, text: &str) -> Command {
        let mut cmd = Command::new("say");
        cmd.arg("-r").arg(self.rate.to_string());
        if let Some(voice) = &self.voice {
            cmd.arg("-v").arg(voice);
        }
        cmd.arg(text);
        cmd
    }

    #[cfg(target_os = "windows")]
    fn speak_command(&self, text: &str) -> Command {
        // SAPI rate is -10..10; map the words-per-minute setting onto it,
        // with the 170wpm default landing on 0.
        let sapi_rate = ((self.rate as i32 - 170) / 20).clamp(-10, 10);
        let script = format!(
            "Add-Type -AssemblyName System.Speech; \
             $s = New-Object System.Speech.Synthesis.SpeechSynthesizer; \
             $voices = $s.GetInstalledVoices(); \
             if ($voices.Count -gt {index}) {{ \
                 $s.SelectVoice($voices[{index}].VoiceInfo.Name) }}; \
             $s.Rate = {rate}; \
             $s.Speak([Console]::In.ReadToEnd())",
            index = self.voice_index,
            rate = sapi_rate,
        );
        let mut cmd = Command::new("powershell");
        cmd.args(["-NoProfile", "-Command", &script]);
        let _ = text; // passed via stdin below
        cmd
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn speak_command(&self, text: &str) -> Command {
        let mut cmd = Command::new("espeak");
        cmd.arg("-s").arg(self.rate.to_string());
        if let Some(voice) = &self.voice {
            cmd.arg("-v").arg(voice);
        }
        cmd.arg(text);
        cmd
    }
}

impl SpeechOutput for CommandSynthesizer {
    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        let mut cmd = self.speak_command(text);
        cmd.stdout(Stdio::null()).stderr(Stdio::null());

        #[cfg(target_os = "windows")]
        {
            use std::io::Write;
            let mut child = cmd
                .stdin(Stdio::piped())
                .spawn()
                .map_err(|e| SpeechError::Synthesis(format!("Failed to start powershell: {e}")))?;
            if let Some(stdin) = child.stdin.as_mut() {
                let _ = stdin.write_all(text.as_bytes());
            }
            drop(child.stdin.take());
            let status = child
                .wait()
                .map_err(|e| SpeechError::Synthesis(e.to_string()))?;
            if !status.success() {
                return Err(SpeechError::Synthesis(format!(
                    "speech command exited with {status}"
                )));
            }
            return Ok(());
        }

        #[cfg(not(target_os = "windows"))]
        {
            let status = cmd
                .stdin(Stdio::null())
                .status()
                .map_err(|e| SpeechError::Synthesis(format!("Failed to start speech command: {e}")))?;
            if !status.success() {
                return Err(SpeechError::Synthesis(format!(
                    "speech command exited with {status}"
                )));
            }
            Ok(())
        }
    }
}
