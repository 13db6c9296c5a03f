use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Console method a record of `level` is routed to.
#[must_use]
pub const fn console_method(level: Level) -> &'static str {
    match level {
        Level::ERROR => "error",
        Level::WARN => "warn",
        Level::INFO => "info",
        Level::DEBUG => "log",
        _ => "debug",
    }
}

/// [`MakeWriter`] that hands each formatted record to the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleWriter;

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(*meta.level())
    }
}

/// Buffers one record and emits it when dropped.
#[derive(Debug)]
pub struct ConsoleLine {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleLine {
    const fn new(level: Level) -> Self {
        Self { level, buf: Vec::new() }
    }
}

impl io::Write for ConsoleLine {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        emit(self.level, line.trim_end());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use web_sys::console;

    let value = line.into();
    match console_method(level) {
        "error" => console::error_1(&value),
        "warn" => console::warn_1(&value),
        "info" => console::info_1(&value),
        "debug" => console::debug_1(&value),
        _ => console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    use std::io::Write;

    let _ = writeln!(io::stderr().lock(), "{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_levels_map_to_console_methods() {
        assert_eq!(console_method(Level::ERROR), "error");
        assert_eq!(console_method(Level::WARN), "warn");
        assert_eq!(console_method(Level::INFO), "info");
        assert_eq!(console_method(Level::DEBUG), "log");
        assert_eq!(console_method(Level::TRACE), "debug");
    }

    #[test]
    fn test_line_buffers_until_drop() {
        let mut line = ConsoleWriter.make_writer();
        line.write_all(b"hello ").unwrap();
        line.write_all(b"console\n").unwrap();
        assert_eq!(line.buf, b"hello console\n");
        assert_eq!(line.level, Level::INFO);
    }
}
