//! Execution context and output sinks.
//!
//! The runtime only needs one capability from its context: somewhere to
//! write printed output. [`SimpleContext`] provides it over an
//! [`OutputSink`], which is either stdout, an in-memory buffer (tests,
//! embedding) or a silent sink.
//!
//! # Performance
//! `OutputSink` uses enum dispatch so the common print path has no vtable
//! hop beyond the `dyn Context` boundary itself.

use std::io::{self, Write};

/// Capability handed to every method body and `print`.
pub trait Context {
    /// Stream that `print` writes to.
    fn output(&mut self) -> &mut dyn Write;
}

/// Destination for program output.
pub enum OutputSink {
    /// Writes to the process's stdout.
    Stdout(io::Stdout),
    /// Captures into memory.
    Buffer(Vec<u8>),
    /// Discards everything.
    Silent,
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(out) => out.write(buf),
            Self::Buffer(bytes) => bytes.write(buf),
            Self::Silent => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::Buffer(_) | Self::Silent => Ok(()),
        }
    }
}

/// Context backed by a single output sink.
pub struct SimpleContext {
    sink: OutputSink,
}

impl SimpleContext {
    /// Context over an explicit sink.
    pub fn with_sink(sink: OutputSink) -> Self {
        SimpleContext { sink }
    }

    /// Context that prints to stdout.
    pub fn stdout() -> Self {
        Self::with_sink(OutputSink::Stdout(io::stdout()))
    }

    /// Context that captures output for later inspection.
    pub fn buffered() -> Self {
        Self::with_sink(OutputSink::Buffer(Vec::new()))
    }

    /// Context that discards output.
    pub fn silent() -> Self {
        Self::with_sink(OutputSink::Silent)
    }

    /// Captured output so far.
    ///
    /// Empty for sinks that don't capture.
    pub fn captured(&self) -> String {
        match &self.sink {
            OutputSink::Buffer(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            OutputSink::Stdout(_) | OutputSink::Silent => String::new(),
        }
    }

    /// Drop captured output.
    pub fn clear(&mut self) {
        if let OutputSink::Buffer(bytes) = &mut self.sink {
            bytes.clear();
        }
    }
}

impl Default for SimpleContext {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Context for SimpleContext {
    fn output(&mut self) -> &mut dyn Write {
        &mut self.sink
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffered_context_captures_output() {
        let mut ctx = SimpleContext::buffered();
        write!(ctx.output(), "hello").unwrap();
        writeln!(ctx.output(), " world").unwrap();
        assert_eq!(ctx.captured(), "hello world\n");
    }

    #[test]
    fn clear_empties_buffer() {
        let mut ctx = SimpleContext::buffered();
        write!(ctx.output(), "x").unwrap();
        ctx.clear();
        assert_eq!(ctx.captured(), "");
        write!(ctx.output(), "y").unwrap();
        assert_eq!(ctx.captured(), "y");
    }

    #[test]
    fn silent_context_discards_output() {
        let mut ctx = SimpleContext::silent();
        let written = ctx.output().write(b"ignored").unwrap();
        assert_eq!(written, 7);
        ctx.output().flush().unwrap();
        assert_eq!(ctx.captured(), "");
    }

    #[test]
    fn stdout_context_captures_nothing() {
        let mut ctx = SimpleContext::default();
        ctx.clear();
        assert_eq!(ctx.captured(), "");
    }
}
