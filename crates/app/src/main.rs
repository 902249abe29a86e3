use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use vpeak_tts::{EmotionMap, SpeechOptions, TtsEngine};
use vpeak_tts_voicepeak::VoicepeakEngine;

#[derive(Parser)]
#[command(
    name = "vpeak",
    about = "Command-line front end for the VOICEPEAK synthesizer"
)]
struct Cli {
    /// Path to the VOICEPEAK executable
    #[arg(long, env = "VOICEPEAK_PATH")]
    exe: PathBuf,

    /// Kill the synthesizer if a call runs longer than this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Speak a literal text string
    Say {
        text: String,
        #[command(flatten)]
        speech: SpeechArgs,
    },
    /// Speak the contents of a text file
    SayFile {
        file: PathBuf,
        #[command(flatten)]
        speech: SpeechArgs,
    },
    /// List narrator names
    Narrators {
        /// Also fetch each narrator's emotion list
        #[arg(long)]
        emotions: bool,
    },
    /// List the emotion labels of one narrator
    Emotions { narrator: String },
}

#[derive(Args)]
struct SpeechArgs {
    /// Output audio file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Narrator name
    #[arg(short, long)]
    narrator: Option<String>,

    /// Emotion weight as LABEL=VALUE; repeatable, order is kept
    #[arg(short, long = "emotion", value_name = "LABEL=VALUE")]
    emotion: Vec<String>,

    /// Speech rate (50-200)
    #[arg(long)]
    speed: Option<u32>,

    /// Speech pitch (-300 to 300)
    #[arg(long, allow_hyphen_values = true)]
    pitch: Option<i32>,
}

impl SpeechArgs {
    fn into_options(self) -> Result<SpeechOptions> {
        let mut emotions = EmotionMap::new();
        for pair in &self.emotion {
            let (label, value) = parse_emotion(pair)?;
            emotions.insert(label, value);
        }
        Ok(SpeechOptions {
            output_path: self.output,
            narrator: self.narrator,
            emotions,
            speed: self.speed,
            pitch: self.pitch,
        })
    }
}

fn parse_emotion(pair: &str) -> Result<(&str, u32)> {
    let (label, value) = pair
        .split_once('=')
        .with_context(|| format!("emotion must be LABEL=VALUE, got {:?}", pair))?;
    if label.is_empty() {
        bail!("emotion label in {:?} is empty", pair);
    }
    let value = value
        .parse()
        .with_context(|| format!("emotion value in {:?} is not an integer", pair))?;
    Ok((label, value))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut engine = VoicepeakEngine::new(cli.exe.clone())?;
    if let Some(secs) = cli.timeout {
        engine = engine.with_timeout(Duration::from_secs(secs));
    }
    tracing::debug!("using VOICEPEAK at {}", cli.exe.display());

    match cli.command {
        Command::Say { text, speech } => {
            engine.say_text(&text, &speech.into_options()?).await?;
        }
        Command::SayFile { file, speech } => {
            engine.say_text_file(&file, &speech.into_options()?).await?;
        }
        Command::Narrators { emotions: false } => {
            for name in engine.narrator_names().await? {
                println!("{}", name);
            }
        }
        Command::Narrators { emotions: true } => {
            for narrator in engine.narrators().await? {
                println!("{}: {}", narrator.name, narrator.emotions.join(", "));
            }
        }
        Command::Emotions { narrator } => {
            for emotion in engine.emotion_names(&narrator).await? {
                println!("{}", emotion);
            }
        }
    }

    Ok(())
}
