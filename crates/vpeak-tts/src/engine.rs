//! TTS engine abstraction

use crate::error::TtsResult;
use crate::types::{Narrator, SpeechOptions};
use async_trait::async_trait;
use std::path::Path;

/// Core TTS engine interface
///
/// Implementations wrap a specific synthesis backend. Speech operations
/// produce their result as a side-effect audio file at the output path
/// carried in the options; backend stdout is discarded.
#[async_trait]
pub trait TtsEngine: Send + Sync {
    /// Get engine name/identifier
    fn name(&self) -> &str;

    /// Check if the backend is usable on this system
    async fn is_available(&self) -> bool;

    /// Speak a literal text string
    async fn say_text(&self, text: &str, options: &SpeechOptions) -> TtsResult<()>;

    /// Speak the contents of a text file
    async fn say_text_file(&self, path: &Path, options: &SpeechOptions) -> TtsResult<()>;

    /// Names of all narrators known to the backend, in report order
    async fn narrator_names(&self) -> TtsResult<Vec<String>>;

    /// Emotion labels supported by the given narrator
    async fn emotion_names(&self, narrator: &str) -> TtsResult<Vec<String>>;

    /// Full narrator records: every name with its emotion list
    async fn narrators(&self) -> TtsResult<Vec<Narrator>>;
}
