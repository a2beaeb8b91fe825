//! Shared output destination for the writer-based backends
//!
//! A [`Sink`] is cheap to clone; clones write to the same destination, which
//! is how enriched handles share their parent's output. The destination is
//! closed when the last clone is dropped.

use crate::core::{LoggerError, OutputTarget, Result};
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

const STDOUT_NAME: &str = "stdout";

#[derive(Clone)]
pub struct Sink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    target: Arc<str>,
    is_stdout: bool,
}

impl Sink {
    pub fn stdout() -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            target: Arc::from(STDOUT_NAME),
            is_stdout: true,
        }
    }

    /// Wrap an arbitrary writer
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
            target: Arc::from("writer"),
            is_stdout: false,
        }
    }

    /// Open a file in append mode, creating it if needed
    pub fn try_open_file(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::sink_open(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            writer: Arc::new(Mutex::new(Box::new(BufWriter::new(file)))),
            target: Arc::from(path.display().to_string()),
            is_stdout: false,
        })
    }

    /// Open the configured target, falling back to stdout if a file cannot be opened
    pub fn open(target: &OutputTarget) -> Self {
        match target {
            OutputTarget::Stdout => Self::stdout(),
            OutputTarget::File(path) => Self::try_open_file(path).unwrap_or_else(|e| {
                eprintln!("[LOGGER WARNING] {}. Falling back to stdout.", e);
                Self::stdout()
            }),
        }
    }

    /// Write one record followed by a newline
    pub fn write_line(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.writer
            .lock()
            .flush()
            .map_err(|e| LoggerError::flush(&*self.target, e.to_string()))
    }

    /// Human readable description of the destination
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_stdout(&self) -> bool {
        self.is_stdout
    }

    /// Whether both handles write to the same destination
    pub fn same_destination(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

/// Lets a sink back writers that expect `io::Write`, such as a `tracing` formatter
impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.lock().write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.lock().flush()
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink").field("target", &self.target).finish()
    }
}

/// In-memory writer for capturing backend output
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for MemoryBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
