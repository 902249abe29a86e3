//! Subprocess execution for the VOICEPEAK binary.
//!
//! The binary's exit codes are not trusted: any output on stderr fails
//! the call, carrying the captured text as the failure detail.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tracing::{debug, error};
use vpeak_tts::{TtsError, TtsResult};

/// Run the tool once and capture its stdout.
///
/// Both pipes are drained while waiting for exit, so a chatty child
/// cannot deadlock on a full pipe buffer. With a timeout set, expiry
/// drops the wait future and `kill_on_drop` reaps the child.
pub(crate) async fn run_tool(
    exe: &Path,
    args: &[String],
    timeout: Option<Duration>,
) -> TtsResult<String> {
    debug!("running {} {:?}", exe.display(), args);

    let mut command = tokio::process::Command::new(exe);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = command.spawn()?;

    let output = match timeout {
        Some(budget) => match tokio::time::timeout(budget, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => return Err(TtsError::Timeout(budget)),
        },
        None => child.wait_with_output().await?,
    };

    if !output.stderr.is_empty() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        error!("{} wrote to stderr: {}", exe.display(), stderr.trim_end());
        return Err(TtsError::ToolError(stderr));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
