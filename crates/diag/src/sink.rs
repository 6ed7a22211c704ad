//! crates/diag/src/sink.rs
//! Streaming sink that writes composed diagnostic lines to a writer.

use std::io::{self, Write};

/// Writes fully composed diagnostic lines into an [`io::Write`] target.
///
/// The renderers in [`render`](crate::render) already terminate each line, so
/// the sink writes the bytes verbatim with a single call per line, relying on
/// the underlying stream's own thread-safety guarantees. Internal callers see
/// [`io::Error`] values from the writer; the public emitters discard them
/// because diagnostics never fail the caller.
///
/// # Examples
///
/// ```
/// use diag::sink::LineSink;
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.write_line("one\n")?;
/// sink.write_line("two\n")?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output.lines().count(), 2);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineSink<W> {
    writer: W,
}

impl<W> LineSink<W> {
    /// Creates a sink over the given writer.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> LineSink<W>
where
    W: Write,
{
    /// Writes one composed line with a single `write_all` call.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
