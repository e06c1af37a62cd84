//! Text sources and sinks.
//!
//! The converter reads one buffer from a [`TextSource`] and writes the result
//! to a [`TextSink`]. Any transport works; the stock channels cover standard
//! streams, files and in-memory strings.
use std::io::{self, Read, Write};
use std::path::PathBuf;

use crate::error::{Result, ToneError};

pub trait TextSource {
    /// Short name used in error messages.
    fn name(&self) -> String;

    fn read(&mut self) -> Result<String>;
}

pub trait TextSink {
    fn name(&self) -> String;

    fn write(&mut self, text: &str) -> Result<()>;
}

fn source_error(channel: String, source: io::Error) -> ToneError {
    ToneError::SourceUnavailable { channel, source }
}

fn sink_error(channel: String, source: io::Error) -> ToneError {
    ToneError::SinkUnavailable { channel, source }
}

fn decode(channel: String, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| source_error(channel, io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Reads all of standard input.
#[derive(Debug, Default)]
pub struct StdinSource;

impl TextSource for StdinSource {
    fn name(&self) -> String {
        "stdin".to_string()
    }

    fn read(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map_err(|e| source_error(self.name(), e))?;
        decode(self.name(), bytes)
    }
}

/// Writes to standard output and flushes.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl TextSink for StdoutSink {
    fn name(&self) -> String {
        "stdout".to_string()
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| sink_error(self.name(), e))
    }
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl TextSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&mut self) -> Result<String> {
        let bytes = std::fs::read(&self.path).map_err(|e| source_error(self.name(), e))?;
        decode(self.name(), bytes)
    }
}

/// Replaces the file's contents with the converted text.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl TextSink for FileSink {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&mut self, text: &str) -> Result<()> {
        std::fs::write(&self.path, text).map_err(|e| sink_error(self.name(), e))
    }
}

/// In-memory buffer acting as both source and sink, like a clipboard:
/// reading returns the current contents, writing replaces them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryChannel {
    contents: String,
}

impl MemoryChannel {
    pub fn new<S: Into<String>>(contents: S) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn into_contents(self) -> String {
        self.contents
    }
}

impl TextSource for MemoryChannel {
    fn name(&self) -> String {
        "memory".to_string()
    }

    fn read(&mut self) -> Result<String> {
        Ok(self.contents.clone())
    }
}

impl TextSink for MemoryChannel {
    fn name(&self) -> String {
        "memory".to_string()
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.contents.clear();
        self.contents.push_str(text);
        Ok(())
    }
}
