//! Background file writer.
//!
//! Producers hand lines to an unbounded channel and return at once; a single
//! worker thread drains it in order and appends each line to the file chosen by
//! the rotation policy. The queue has no bound: a producer that outruns the disk
//! grows memory instead of blocking.

use super::LogSink;
use crate::internal;
use crate::level::Priority;
use crate::rotation::FileRotationPolicy;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// How long [`DiskSink::flush`] waits for the worker by default.
pub const DEFAULT_FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

const WORKER_NAME: &str = "prettylog-disk";

enum Command {
    Line(String),
    /// Acknowledged once every earlier line has been written.
    Barrier(Sender<()>),
}

/// Appends lines to daily CSV files on a dedicated thread.
#[derive(Debug)]
pub struct DiskSink {
    /// `None` when the worker could not be spawned; records are then dropped.
    sender: Option<Sender<Command>>,
    policy: Arc<FileRotationPolicy>,
    flush_timeout: Duration,
}

impl Default for DiskSink {
    fn default() -> Self {
        Self::new(FileRotationPolicy::with_default_dir())
    }
}

impl DiskSink {
    /// Prunes expired files once, then starts the worker.
    #[must_use]
    pub fn new(policy: FileRotationPolicy) -> Self {
        policy.reconcile();
        let policy = Arc::new(policy);

        let (tx, rx) = mpsc::channel();
        let worker_policy = Arc::clone(&policy);
        let sender = match thread::Builder::new()
            .name(WORKER_NAME.to_string())
            .spawn(move || run(&rx, &worker_policy))
        {
            Ok(_) => Some(tx),
            Err(e) => {
                internal::warn(
                    "DISK",
                    &format!("Cannot start disk writer, file logging disabled: {e}"),
                );
                None
            }
        };

        Self {
            sender,
            policy,
            flush_timeout: DEFAULT_FLUSH_TIMEOUT,
        }
    }

    /// Sink writing into `dir`.
    #[must_use]
    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(FileRotationPolicy::new(dir.as_ref()))
    }

    #[must_use]
    pub const fn flush_timeout(mut self, timeout: Duration) -> Self {
        self.flush_timeout = timeout;
        self
    }

    #[must_use]
    pub fn policy(&self) -> &FileRotationPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.sender.is_some()
    }
}

impl LogSink for DiskSink {
    fn log(&self, _priority: Priority, _tag: Option<&str>, line: &str) {
        if let Some(sender) = &self.sender {
            // Only fails if the worker died; the line is dropped like any other write failure.
            let _ = sender.send(Command::Line(line.to_string()));
        }
    }

    fn flush(&self) -> Result<(), crate::Error> {
        let sender = self.sender.as_ref().ok_or(crate::Error::WorkerGone)?;
        let (ack_tx, ack_rx) = mpsc::channel();
        sender
            .send(Command::Barrier(ack_tx))
            .map_err(|_| crate::Error::WorkerGone)?;

        match ack_rx.recv_timeout(self.flush_timeout) {
            Ok(()) => Ok(()),
            Err(RecvTimeoutError::Timeout) => Err(crate::Error::FlushTimeout(self.flush_timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(crate::Error::WorkerGone),
        }
    }
}

fn run(rx: &Receiver<Command>, policy: &FileRotationPolicy) {
    while let Ok(command) = rx.recv() {
        match command {
            Command::Line(line) => {
                if let Err(e) = append(policy, &line) {
                    internal::debug("DISK", &format!("Dropped record: {e}"));
                }
            }
            Command::Barrier(ack) => {
                let _ = ack.send(());
            }
        }
    }
}

/// One open-append-close cycle per line keeps the file valid across rotation
/// and external deletion.
fn append(policy: &FileRotationPolicy, line: &str) -> io::Result<()> {
    let path = policy.current_file()?;
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');

    let written = file.write_all(buf.as_bytes());
    let flushed = file.flush();
    written.and(flushed)
}
