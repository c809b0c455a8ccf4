//! slipslope: Slippery-Slope Markdown to HTML translator
//!
//! The dialect knows two constructs: a `**` bold toggle and single-level
//! lists (`- item` and `1. item`). Everything else is copied through as is,
//! including raw HTML.
//!
//! # Design Principles
//! - No AST: output is written to the sink while scanning
//! - One pass, no backtracking: O(n) time on all inputs
//! - Bounded lookahead: every read past the end yields a sentinel byte
//! - Total: every byte sequence translates; only the sink can fail
//!
//! # Example
//! ```
//! let html = slipslope::to_html("- one\n- **two**\n\ndone");
//! assert_eq!(html, "<ul><li>one</li><li><b>two</b></li></ul>\ndone");
//! ```

pub mod cursor;
pub mod error;
pub mod line;
pub mod render;
pub mod translate;

use std::io;

pub use error::{Error, Result};
pub use line::{classify_line, LineClass, LineKind};
pub use render::{HtmlWriter, IoSink, Sink};
pub use translate::{ListKind, State, Translator};

/// Translate `input` into `sink`.
///
/// Fails only if the sink does; in-memory sinks use
/// [`Infallible`](std::convert::Infallible).
///
/// # Example
/// ```
/// let mut out: Vec<u8> = Vec::new();
/// slipslope::translate(&mut out, b"1. x\n4. y\n").unwrap();
/// assert_eq!(out, b"<ol><li>x</li><li>y</li></ol>\n");
/// ```
pub fn translate<S: Sink + ?Sized>(
    sink: &mut S,
    input: &[u8],
) -> std::result::Result<(), S::Error> {
    Translator::new(sink, input).run()?;
    Ok(())
}

/// Translate `input` into any [`io::Write`], returning the bytes written.
///
/// The writer is flushed on success.
pub fn translate_to_writer<W: io::Write>(writer: W, input: &[u8]) -> Result<u64> {
    let mut sink = Translator::new(IoSink::new(writer), input).run()?;
    sink.flush()?;
    Ok(sink.bytes_written())
}

/// Convert Slippery-Slope Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = slipslope::to_html("**bold**");
/// assert_eq!(html, "<b>bold</b>");
/// ```
pub fn to_html(input: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input.as_bytes(), &mut writer);
    writer.into_string()
}

/// Convert to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its allocation is reused.
pub fn to_html_into(input: &str, out: &mut Vec<u8>) {
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    render_to_writer(input.as_bytes(), out);
}

fn render_to_writer<S>(input: &[u8], sink: &mut S)
where
    S: Sink<Error = std::convert::Infallible>,
{
    match translate(sink, input) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
