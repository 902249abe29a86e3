//! VOICEPEAK TTS engine implementation for vpeak
//!
//! Wraps the closed-source VOICEPEAK command-line synthesizer: builds an
//! argument vector per call, runs the binary as a child process, and
//! parses its plain-text listings. One subprocess per operation, no
//! state beyond the validated executable path.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vpeak_tts::{Narrator, SpeechOptions, TtsEngine, TtsError, TtsResult};

mod command;
mod subprocess;
mod tests;

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoicepeakConfig {
    /// Filesystem path of the VOICEPEAK executable
    pub exe_path: PathBuf,
    /// Narrator used when a call does not select one
    pub default_narrator: Option<String>,
    /// Per-call time budget; `None` waits for the child indefinitely
    pub timeout: Option<Duration>,
}

impl VoicepeakConfig {
    pub fn new(exe_path: impl Into<PathBuf>) -> Self {
        Self {
            exe_path: exe_path.into(),
            default_narrator: None,
            timeout: None,
        }
    }
}

/// VOICEPEAK engine.
///
/// Construction validates that the executable exists; every operation
/// afterwards is an independent subprocess invocation over `&self`.
#[derive(Debug)]
pub struct VoicepeakEngine {
    config: VoicepeakConfig,
}

impl VoicepeakEngine {
    /// Create an engine for the binary at `exe_path`.
    ///
    /// Fails with [`TtsError::ExecutableNotFound`] when no file exists
    /// at the path.
    pub fn new(exe_path: impl Into<PathBuf>) -> TtsResult<Self> {
        Self::from_config(VoicepeakConfig::new(exe_path))
    }

    pub fn from_config(config: VoicepeakConfig) -> TtsResult<Self> {
        if !config.exe_path.is_file() {
            return Err(TtsError::ExecutableNotFound {
                path: config.exe_path,
            });
        }
        Ok(Self { config })
    }

    /// Narrator used whenever a call's options leave the narrator unset.
    pub fn with_default_narrator(mut self, narrator: impl Into<String>) -> Self {
        self.config.default_narrator = Some(narrator.into());
        self
    }

    /// Kill the child and fail with [`TtsError::Timeout`] when a call
    /// runs longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn config(&self) -> &VoicepeakConfig {
        &self.config
    }

    async fn run(&self, args: Vec<String>) -> TtsResult<String> {
        subprocess::run_tool(&self.config.exe_path, &args, self.config.timeout).await
    }

    fn speech_args(
        &self,
        text: Option<&str>,
        text_file: Option<&Path>,
        options: &SpeechOptions,
    ) -> TtsResult<Vec<String>> {
        command::build_speech_args(
            text,
            text_file,
            options,
            self.config.default_narrator.as_deref(),
        )
    }
}

/// Split a listing into lines, dropping empties. The binary mixes CR
/// and LF freely.
fn parse_name_list(stdout: &str) -> Vec<String> {
    stdout
        .split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

#[async_trait]
impl TtsEngine for VoicepeakEngine {
    fn name(&self) -> &str {
        "VOICEPEAK"
    }

    async fn is_available(&self) -> bool {
        tokio::fs::try_exists(&self.config.exe_path)
            .await
            .unwrap_or(false)
    }

    async fn say_text(&self, text: &str, options: &SpeechOptions) -> TtsResult<()> {
        let args = self.speech_args(Some(text), None, options)?;
        self.run(args).await?;
        Ok(())
    }

    async fn say_text_file(&self, path: &Path, options: &SpeechOptions) -> TtsResult<()> {
        // Text-file mode always names an output file.
        let args = if options.output_path.is_none() {
            let mut options = options.clone();
            options.output_path = Some(command::DEFAULT_TEXT_FILE_OUTPUT.into());
            self.speech_args(None, Some(path), &options)?
        } else {
            self.speech_args(None, Some(path), options)?
        };
        self.run(args).await?;
        Ok(())
    }

    async fn narrator_names(&self) -> TtsResult<Vec<String>> {
        let stdout = self.run(command::list_narrator_args()).await?;
        Ok(parse_name_list(&stdout))
    }

    async fn emotion_names(&self, narrator: &str) -> TtsResult<Vec<String>> {
        let stdout = self.run(command::list_emotion_args(narrator)).await?;
        Ok(parse_name_list(&stdout))
    }

    async fn narrators(&self) -> TtsResult<Vec<Narrator>> {
        let names = self.narrator_names().await?;
        let mut narrators = Vec::with_capacity(names.len());
        for name in names {
            let emotions = self.emotion_names(&name).await?;
            narrators.push(Narrator::new(name, emotions));
        }
        Ok(narrators)
    }
}
