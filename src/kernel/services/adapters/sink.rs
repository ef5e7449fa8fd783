//! Output sink adapters.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use crate::kernel::services::ports::OutputSink;

/// In-memory field: the latest value plus a change counter and optional listeners.
#[derive(Debug, Default)]
pub struct MemorySink {
    value: String,
    changes: usize,
    listeners: Vec<Sender<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of writes since construction.
    pub fn changes(&self) -> usize {
        self.changes
    }

    /// Receives every written value.
    pub fn subscribe(&mut self) -> Receiver<String> {
        let (tx, rx) = mpsc::channel();
        self.listeners.push(tx);
        rx
    }
}

impl OutputSink for MemorySink {
    fn read(&self) -> Option<String> {
        (!self.value.is_empty()).then(|| self.value.clone())
    }

    fn write(&mut self, value: &str) -> io::Result<()> {
        self.value = value.to_string();
        self.changes += 1;
        self.listeners
            .retain(|listener| listener.send(value.to_string()).is_ok());
        Ok(())
    }
}

/// Field backed by a file on disk. A missing file reads as no seed.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for FileSink {
    fn read(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Some(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "read formula failed");
                None
            }
        }
    }

    fn write(&mut self, value: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, value)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/sink.rs"]
mod tests;
