//! Tracing setup for the browser. Events are formatted by `tracing-subscriber`
//! and each finished line is handed to the matching `console.*` method so the
//! browser devtools level filter keeps working. Never log passwords or CPF
//! values through these macros.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Parses a verbosity name or number. Accepts `error`..`trace` and `0`..`5`.
pub fn parse_log_level(value: &str) -> Option<Level> {
    let value = value.trim();
    if let Ok(parsed) = value.parse::<u8>() {
        return match parsed {
            0 => Some(Level::ERROR),
            1 => Some(Level::WARN),
            2 => Some(Level::INFO),
            3 => Some(Level::DEBUG),
            4 | 5 => Some(Level::TRACE),
            _ => None,
        };
    }

    match value.to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init(log_level: &str) {
    let level = parse_log_level(log_level).unwrap_or(Level::INFO);

    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(%level, "logging initialized");
    }
}

/// Browser console method used for a given tracing level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Log,
    Debug,
}

impl From<Level> for ConsoleMethod {
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Log,
            _ => ConsoleMethod::Debug,
        }
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::from(*meta.level()))
    }
}

/// Buffers one formatted event and flushes it to the console on drop.
struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if !line.is_empty() {
            emit(self.method, line);
        }
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
        ConsoleMethod::Log => console::log_1(&value),
        ConsoleMethod::Debug => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(method: ConsoleMethod, line: &str) {
    if matches!(method, ConsoleMethod::Error | ConsoleMethod::Warn) {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::{ConsoleMethod, parse_log_level};
    use tracing::Level;

    #[test]
    fn parse_log_level_accepts_names_and_numbers() {
        assert_eq!(parse_log_level("error"), Some(Level::ERROR));
        assert_eq!(parse_log_level(" WARN "), Some(Level::WARN));
        assert_eq!(parse_log_level("Debug"), Some(Level::DEBUG));
        assert_eq!(parse_log_level("2"), Some(Level::INFO));
        assert_eq!(parse_log_level("5"), Some(Level::TRACE));
    }

    #[test]
    fn parse_log_level_rejects_unknown_values() {
        assert_eq!(parse_log_level("verbose"), None);
        assert_eq!(parse_log_level("6"), None);
        assert_eq!(parse_log_level(""), None);
    }

    #[test]
    fn console_method_follows_level() {
        assert_eq!(ConsoleMethod::from(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::from(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::from(Level::INFO), ConsoleMethod::Log);
        assert_eq!(ConsoleMethod::from(Level::TRACE), ConsoleMethod::Debug);
    }
}
