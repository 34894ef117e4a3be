//! Console Logger
//!
//! `tracing` subscriber for wasm frontends: each formatted event becomes one
//! call to the browser console method matching its level. On native targets
//! (tests, tooling) lines go to stderr instead.

use std::io::{self, Write};

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::filter::{EnvFilter, ParseError};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid log filter `{filter}`: {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: ParseError,
    },

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Install the console subscriber as the global default.
///
/// `filter` uses `EnvFilter` directive syntax, e.g. `info` or `checkout_ui=debug`.
pub fn init(filter: &str) -> Result<(), LoggerError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|source| LoggerError::InvalidFilter {
        filter: filter.to_string(),
        source,
    })?;

    // No wall clock on wasm32-unknown-unknown, and the console has no ANSI support
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .finish()
        .try_init()?;
    Ok(())
}

/// Browser console method used for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Log,
    Debug,
}

impl From<Level> for ConsoleMethod {
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            Level::DEBUG => ConsoleMethod::Log,
            _ => ConsoleMethod::Debug,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on flush or drop
#[derive(Debug)]
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(level: Level) -> Self {
        Self { method: level.into(), buffer: Vec::new() }
    }

    pub fn method(&self) -> ConsoleMethod {
        self.method
    }

    /// Drain the buffer as a single line without its trailing newline
    fn take_line(&mut self) -> Option<String> {
        let line = String::from_utf8_lossy(&self.buffer).trim_end_matches(['\r', '\n']).to_string();
        self.buffer.clear();
        if line.is_empty() { None } else { Some(line) }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = self.take_line() {
            emit(self.method, &line);
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match method {
        ConsoleMethod::Error => console::error_1(&value),
        ConsoleMethod::Warn => console::warn_1(&value),
        ConsoleMethod::Info => console::info_1(&value),
        ConsoleMethod::Log => console::log_1(&value),
        ConsoleMethod::Debug => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_method: ConsoleMethod, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_to_console_method() {
        assert_eq!(ConsoleMethod::from(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::from(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::from(Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::from(Level::DEBUG), ConsoleMethod::Log);
        assert_eq!(ConsoleMethod::from(Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn test_writes_are_joined_into_one_line() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        writer.write_all(b" WARN checkout: ").unwrap();
        writer.write_all(b"basket submission failed\n").unwrap();

        assert_eq!(writer.method(), ConsoleMethod::Warn);
        assert_eq!(writer.take_line().as_deref(), Some(" WARN checkout: basket submission failed"));
        assert!(writer.take_line().is_none());
    }

    #[test]
    fn test_blank_output_is_skipped() {
        let mut writer = ConsoleWriter::new(Level::INFO);
        writer.write_all(b"\r\n").unwrap();
        assert!(writer.take_line().is_none());
    }

    #[test]
    fn test_make_writer_defaults_to_info() {
        let writer = ConsoleMakeWriter.make_writer();
        assert_eq!(writer.method(), ConsoleMethod::Info);
    }
}
