//! Core types for text-to-speech functionality

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A narrator voice reported by the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrator {
    /// Display name, exactly as the synthesizer prints it
    pub name: String,
    /// Emotion labels this narrator supports, in the order the
    /// synthesizer reports them
    pub emotions: Vec<String>,
}

impl Narrator {
    pub fn new(name: impl Into<String>, emotions: Vec<String>) -> Self {
        Self {
            name: name.into(),
            emotions,
        }
    }
}

/// Insertion-ordered emotion intensity map.
///
/// Emotion weights are serialized onto the command line as `label=value`
/// pairs, so their order is part of the invocation. Keys are unique:
/// inserting an existing label replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionMap(Vec<(String, u32)>);

impl EmotionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `label` to `value`, keeping the position of an existing key.
    pub fn insert(&mut self, label: impl Into<String>, value: u32) {
        let label = label.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = value,
            None => self.0.push((label, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(label, value)| (label.as_str(), *value))
    }
}

impl FromIterator<(String, u32)> for EmotionMap {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (label, value) in iter {
            map.insert(label, value);
        }
        map
    }
}

/// Options for individual synthesis requests
///
/// All fields are optional; `Default` leaves everything unset.
#[derive(Debug, Clone, Default)]
pub struct SpeechOptions {
    /// Output audio file path
    pub output_path: Option<PathBuf>,
    /// Narrator name for this request
    pub narrator: Option<String>,
    /// Emotion weights; only applied when a narrator is selected
    pub emotions: EmotionMap,
    /// Speech rate; the synthesizer accepts 50-200
    pub speed: Option<u32>,
    /// Speech pitch; the synthesizer accepts -300-300
    pub pitch: Option<i32>,
}
