//! Argument construction for the VOICEPEAK command line.
//!
//! Arguments are built as a structured vector and handed straight to the
//! process-spawn primitive; there is no shell in the path, so narrator
//! names, paths and spoken text travel as single argv elements verbatim.

use std::ops::RangeInclusive;
use std::path::Path;
use tracing::{debug, warn};
use vpeak_tts::{EmotionMap, SpeechOptions, TtsError, TtsResult};

/// Speed values the binary accepts; anything outside is dropped, not rejected.
pub(crate) const SPEED_RANGE: RangeInclusive<u32> = 50..=200;
/// Pitch values the binary accepts; same drop-on-out-of-range behavior.
pub(crate) const PITCH_RANGE: RangeInclusive<i32> = -300..=300;

/// Output file used by text-file synthesis when the caller picks none.
pub(crate) const DEFAULT_TEXT_FILE_OUTPUT: &str = "output.wav";

/// Build the argv for a synthesis call.
///
/// Exactly one of `text`/`text_file` must be supplied. Flag order is
/// fixed: text source, output, narrator (+emotions), speed, pitch.
pub(crate) fn build_speech_args(
    text: Option<&str>,
    text_file: Option<&Path>,
    options: &SpeechOptions,
    default_narrator: Option<&str>,
) -> TtsResult<Vec<String>> {
    let mut args = Vec::new();

    match (text, text_file) {
        (Some(text), None) => {
            args.push("-s".to_string());
            args.push(text.to_string());
        }
        (None, Some(file)) => {
            args.push("-t".to_string());
            args.push(file.to_string_lossy().into_owned());
        }
        (Some(_), Some(_)) => {
            return Err(TtsError::InvalidArgument(
                "text and text_file are mutually exclusive".to_string(),
            ));
        }
        (None, None) => {
            return Err(TtsError::InvalidArgument(
                "one of text or text_file is required".to_string(),
            ));
        }
    }

    if let Some(output) = &options.output_path {
        args.push("-o".to_string());
        args.push(output.to_string_lossy().into_owned());
    }

    let narrator = options.narrator.as_deref().or(default_narrator);
    if let Some(name) = narrator {
        args.push("-n".to_string());
        args.push(name.to_string());
        if !options.emotions.is_empty() {
            args.push("-e".to_string());
            args.push(render_emotions(&options.emotions));
        }
    } else if !options.emotions.is_empty() {
        warn!("emotion weights ignored: no narrator selected");
    }

    if let Some(speed) = options.speed {
        if SPEED_RANGE.contains(&speed) {
            args.push("--speed".to_string());
            args.push(speed.to_string());
        } else {
            debug!("speed {} outside {:?}, dropping", speed, SPEED_RANGE);
        }
    }

    if let Some(pitch) = options.pitch {
        if PITCH_RANGE.contains(&pitch) {
            args.push("--pitch".to_string());
            args.push(pitch.to_string());
        } else {
            debug!("pitch {} outside {:?}, dropping", pitch, PITCH_RANGE);
        }
    }

    Ok(args)
}

/// `label=value` pairs joined by commas, insertion order.
fn render_emotions(emotions: &EmotionMap) -> String {
    emotions
        .iter()
        .map(|(label, value)| format!("{}={}", label, value))
        .collect::<Vec<_>>()
        .join(",")
}

pub(crate) fn list_narrator_args() -> Vec<String> {
    vec!["--list-narrator".to_string()]
}

pub(crate) fn list_emotion_args(narrator: &str) -> Vec<String> {
    vec!["--list-emotion".to_string(), narrator.to_string()]
}
