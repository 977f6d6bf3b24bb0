//! Blocking subprocess execution with an optional time limit.
//!
//! When a limit is set the child is polled with `try_wait` while two helper
//! threads drain stdout and stderr, so a chatty child can never block on a
//! full pipe while we wait for it.

use std::io::Read;
use std::process::{Command, Output, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, warn};
use thiserror::Error;

/// Interval between exit-status polls when a timeout is set.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Command execution errors
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to create process: {0}")]
    ProcessCreation(#[source] std::io::Error),

    #[error("Error waiting for process: {0}")]
    Wait(#[source] std::io::Error),

    #[error("Command timed out after {:.1} seconds", .0.as_secs_f64())]
    Timeout(Duration),
}

impl CommandError {
    /// True when the program itself could not be found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CommandError::ProcessCreation(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Logs the full command line at debug level.
pub fn log_command(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|arg| arg.to_string_lossy()).collect();

    debug!("Executing command: {} {}", program, args.join(" "));
}

/// Runs `cmd` to completion and captures its output.
///
/// A non-zero exit is not an error here; callers inspect `Output::status`.
/// With `timeout` set, the child is killed once the limit elapses and
/// `CommandError::Timeout` is returned.
pub fn run_command(cmd: &mut Command, timeout: Option<Duration>) -> Result<Output, CommandError> {
    log_command(cmd);

    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(CommandError::ProcessCreation)?;

    let Some(timeout) = timeout else {
        return child.wait_with_output().map_err(CommandError::Wait);
    };

    let stdout_handle = child.stdout.take().map(drain);
    let stderr_handle = child.stderr.take().map(drain);

    let start = Instant::now();
    let status = loop {
        match child.try_wait().map_err(CommandError::Wait)? {
            Some(status) => break status,
            None if start.elapsed() >= timeout => {
                warn!(
                    "Killing {} after {:.1}s without exit",
                    cmd.get_program().to_string_lossy(),
                    timeout.as_secs_f64()
                );
                let _ = child.kill();
                let _ = child.wait();
                return Err(CommandError::Timeout(timeout));
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    };

    Ok(Output {
        status,
        stdout: collect(stdout_handle),
        stderr: collect(stderr_handle),
    })
}

fn drain<R: Read + Send + 'static>(mut reader: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        buf
    })
}

fn collect(handle: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}
