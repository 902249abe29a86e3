//! Text-to-speech abstraction layer for vpeak
//!
//! This crate provides the foundational types and traits shared by TTS
//! engine implementations: narrator records, per-call synthesis options,
//! and the engine trait.

pub mod engine;
pub mod error;
pub mod types;

pub use engine::TtsEngine;
pub use error::{TtsError, TtsResult};
pub use types::{EmotionMap, Narrator, SpeechOptions};
