//! Tests for the VOICEPEAK engine

#[cfg(test)]
mod tests {
    use crate::command::{build_speech_args, list_emotion_args, list_narrator_args};
    use crate::{parse_name_list, VoicepeakEngine};
    use std::path::Path;
    use vpeak_tts::{SpeechOptions, TtsError};

    #[test]
    fn text_and_file_are_mutually_exclusive() {
        let err = build_speech_args(
            Some("hi"),
            Some(Path::new("a.txt")),
            &SpeechOptions::default(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, TtsError::InvalidArgument(_)));
    }

    #[test]
    fn one_text_source_is_required() {
        let err = build_speech_args(None, None, &SpeechOptions::default(), None).unwrap_err();
        assert!(matches!(err, TtsError::InvalidArgument(_)));
    }

    #[test]
    fn literal_text_builds_minimal_args() {
        let args =
            build_speech_args(Some("hello world"), None, &SpeechOptions::default(), None).unwrap();
        assert_eq!(args, ["-s", "hello world"]);
    }

    #[test]
    fn text_file_builds_minimal_args() {
        let args = build_speech_args(
            None,
            Some(Path::new("lines.txt")),
            &SpeechOptions::default(),
            None,
        )
        .unwrap();
        assert_eq!(args, ["-t", "lines.txt"]);
    }

    #[test]
    fn full_flag_order_is_stable() {
        let mut options = SpeechOptions {
            output_path: Some("out.wav".into()),
            narrator: Some("Alice".into()),
            speed: Some(120),
            pitch: Some(-20),
            ..Default::default()
        };
        options.emotions.insert("happy", 50);
        options.emotions.insert("sad", 10);

        let args = build_speech_args(Some("hi"), None, &options, None).unwrap();
        assert_eq!(
            args,
            [
                "-s", "hi", "-o", "out.wav", "-n", "Alice", "-e", "happy=50,sad=10", "--speed",
                "120", "--pitch", "-20",
            ]
        );
    }

    #[test]
    fn speed_bounds_are_inclusive() {
        for (speed, kept) in [(49, false), (50, true), (200, true), (201, false)] {
            let options = SpeechOptions {
                speed: Some(speed),
                ..Default::default()
            };
            let args = build_speech_args(Some("hi"), None, &options, None).unwrap();
            assert_eq!(
                args.contains(&"--speed".to_string()),
                kept,
                "speed {}",
                speed
            );
        }
    }

    #[test]
    fn pitch_bounds_are_inclusive() {
        for (pitch, kept) in [(-301, false), (-300, true), (300, true), (301, false)] {
            let options = SpeechOptions {
                pitch: Some(pitch),
                ..Default::default()
            };
            let args = build_speech_args(Some("hi"), None, &options, None).unwrap();
            assert_eq!(
                args.contains(&"--pitch".to_string()),
                kept,
                "pitch {}",
                pitch
            );
        }
    }

    #[test]
    fn emotions_without_narrator_are_ignored() {
        let mut options = SpeechOptions::default();
        options.emotions.insert("happy", 50);
        let args = build_speech_args(Some("hi"), None, &options, None).unwrap();
        assert_eq!(args, ["-s", "hi"]);
    }

    #[test]
    fn default_narrator_fills_unset_narrator() {
        let args =
            build_speech_args(Some("hi"), None, &SpeechOptions::default(), Some("Bob")).unwrap();
        assert_eq!(args, ["-s", "hi", "-n", "Bob"]);
    }

    #[test]
    fn explicit_narrator_beats_default() {
        let options = SpeechOptions {
            narrator: Some("Alice".into()),
            ..Default::default()
        };
        let args = build_speech_args(Some("hi"), None, &options, Some("Bob")).unwrap();
        assert_eq!(args, ["-s", "hi", "-n", "Alice"]);
    }

    #[test]
    fn listing_args_pass_the_name_verbatim() {
        assert_eq!(list_narrator_args(), ["--list-narrator"]);
        assert_eq!(
            list_emotion_args("Alice Smith"),
            ["--list-emotion", "Alice Smith"]
        );
    }

    #[test]
    fn name_list_drops_empty_lines() {
        assert_eq!(
            parse_name_list("Alice\r\nBob\r\n\r\nCarol"),
            ["Alice", "Bob", "Carol"]
        );
    }

    #[test]
    fn missing_executable_is_rejected() {
        let err = VoicepeakEngine::new("/no/such/voicepeak").unwrap_err();
        assert!(matches!(err, TtsError::ExecutableNotFound { .. }));
    }

    #[test]
    fn existing_executable_is_accepted() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let engine = VoicepeakEngine::new(file.path()).unwrap();
        assert_eq!(engine.config().exe_path, file.path());
    }

    #[cfg(unix)]
    mod fake_binary {
        use crate::command::DEFAULT_TEXT_FILE_OUTPUT;
        use crate::VoicepeakEngine;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::path::{Path, PathBuf};
        use std::time::Duration;
        use vpeak_tts::{Narrator, SpeechOptions, TtsEngine, TtsError};

        fn script(dir: &Path, body: &str) -> PathBuf {
            let path = dir.join("voicepeak");
            fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[tokio::test]
        async fn stderr_fails_the_call_even_on_exit_zero() {
            let dir = tempfile::tempdir().unwrap();
            let exe = script(dir.path(), "echo boom >&2\nexit 0\n");
            let engine = VoicepeakEngine::new(exe).unwrap();
            let err = engine
                .say_text("hi", &SpeechOptions::default())
                .await
                .unwrap_err();
            match err {
                TtsError::ToolError(text) => assert!(text.contains("boom")),
                other => panic!("unexpected error: {:?}", other),
            }
        }

        #[tokio::test]
        async fn silent_child_succeeds_regardless_of_exit_code() {
            let dir = tempfile::tempdir().unwrap();
            let exe = script(dir.path(), "echo synthesizing\nexit 7\n");
            let engine = VoicepeakEngine::new(exe).unwrap();
            engine
                .say_text("hi", &SpeechOptions::default())
                .await
                .unwrap();
        }

        #[tokio::test]
        async fn narrator_listing_makes_one_call_per_narrator() {
            let dir = tempfile::tempdir().unwrap();
            let count = dir.path().join("calls");
            let body = format!(
                "echo call >> \"{count}\"\n\
                 case \"$1\" in\n\
                 --list-narrator) printf 'A\\r\\nB\\r\\n' ;;\n\
                 --list-emotion) if [ \"$2\" = A ]; then printf 'x\\n'; else printf 'y\\nz\\n'; fi ;;\n\
                 esac\n",
                count = count.display()
            );
            let exe = script(dir.path(), &body);
            let engine = VoicepeakEngine::new(exe).unwrap();

            let narrators = engine.narrators().await.unwrap();
            assert_eq!(
                narrators,
                vec![
                    Narrator::new("A", vec!["x".into()]),
                    Narrator::new("B", vec!["y".into(), "z".into()]),
                ]
            );

            let calls = fs::read_to_string(&count).unwrap();
            assert_eq!(calls.lines().count(), 3);
        }

        #[tokio::test]
        async fn text_file_mode_defaults_the_output_path() {
            let dir = tempfile::tempdir().unwrap();
            let recorded = dir.path().join("args");
            let body = format!("printf '%s\\n' \"$@\" > \"{}\"\n", recorded.display());
            let exe = script(dir.path(), &body);
            let engine = VoicepeakEngine::new(exe).unwrap();

            engine
                .say_text_file(Path::new("script.txt"), &SpeechOptions::default())
                .await
                .unwrap();

            let args = fs::read_to_string(&recorded).unwrap();
            let args: Vec<&str> = args.lines().collect();
            assert_eq!(args, ["-t", "script.txt", "-o", DEFAULT_TEXT_FILE_OUTPUT]);
        }

        #[tokio::test]
        async fn configured_timeout_kills_a_hung_child() {
            let dir = tempfile::tempdir().unwrap();
            let exe = script(dir.path(), "sleep 10\n");
            let engine = VoicepeakEngine::new(exe)
                .unwrap()
                .with_timeout(Duration::from_millis(100));
            let err = engine
                .say_text("hi", &SpeechOptions::default())
                .await
                .unwrap_err();
            assert!(matches!(err, TtsError::Timeout(_)));
        }
    }
}
