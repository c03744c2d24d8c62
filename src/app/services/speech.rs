use std::process::Command;

use crate::app::error::{AppError, Result};

/// The platform speech engine driven as a child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// macOS `say`
    Say,
    /// espeak-ng on Linux and the BSDs
    EspeakNg,
    /// Windows System.Speech via PowerShell
    WindowsSpeech,
}

pub fn platform_engine() -> Engine {
    #[cfg(target_os = "macos")]
    {
        Engine::Say
    }
    #[cfg(target_os = "windows")]
    {
        Engine::WindowsSpeech
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        Engine::EspeakNg
    }
}

/// Build the child-process invocation for an utterance. With `output`
/// the engine renders to that file in its native container (WAV on
/// espeak-ng and Windows, AIFF on `say`) regardless of the extension;
/// without it the engine plays through the default output device.
pub fn build_invocation(engine: Engine, text: &str, output: Option<&str>) -> (String, Vec<String>) {
    match engine {
        Engine::Say => {
            let mut args = Vec::new();
            if let Some(path) = output {
                args.push("-o".to_string());
                args.push(path.to_string());
            }
            args.push(text.to_string());
            ("say".to_string(), args)
        }
        Engine::EspeakNg => {
            let mut args = Vec::new();
            if let Some(path) = output {
                args.push("-w".to_string());
                args.push(path.to_string());
            }
            args.push(text.to_string());
            ("espeak-ng".to_string(), args)
        }
        Engine::WindowsSpeech => {
            // Single-quoted PowerShell strings escape quotes by doubling.
            let quoted_text = text.replace('\'', "''");
            let script = match output {
                Some(path) => format!(
                    "Add-Type -AssemblyName System.Speech; \
                     $s = New-Object System.Speech.Synthesis.SpeechSynthesizer; \
                     $s.SetOutputToWaveFile('{}'); $s.Speak('{}'); $s.Dispose()",
                    path.replace('\'', "''"),
                    quoted_text
                ),
                None => format!(
                    "Add-Type -AssemblyName System.Speech; \
                     (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{}')",
                    quoted_text
                ),
            };
            (
                "powershell".to_string(),
                vec!["-NoProfile".to_string(), "-Command".to_string(), script],
            )
        }
    }
}

fn run_engine(text: &str, output: Option<&str>) -> Result<()> {
    let (program, args) = build_invocation(platform_engine(), text, output);
    let status = Command::new(&program)
        .args(&args)
        .status()
        .map_err(|e| AppError::Speech(format!("failed to launch {}: {}", program, e)))?;
    if status.success() {
        Ok(())
    } else {
        Err(AppError::Speech(format!("{} exited with {}", program, status)))
    }
}

/// Speak `text` through the default output device; blocks until playback
/// finishes. Callers that must stay responsive run this on a worker.
pub fn speak_blocking(text: &str) -> Result<()> {
    run_engine(text, None)
}

/// Render `text` as audio into the file at `path`; blocks until written.
pub fn render_to_file(text: &str, path: &str) -> Result<()> {
    run_engine(text, Some(path))
}
