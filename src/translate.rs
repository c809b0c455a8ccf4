//! Single-pass translator.
//!
//! A two-state machine over the input bytes:
//! - [`State::Normal`] copies bytes to the sink, toggling bold on `**` and
//!   switching to `LineFeed` on `\n`.
//! - [`State::LineFeed`] classifies the line that starts at the cursor and
//!   opens, continues, joins or closes lists before handing back to `Normal`.
//!
//! A `\n` seen in `Normal` is withheld: the next line decides whether it
//! becomes list tags, a soft join, or nothing. A blank line emits its own
//! first byte instead and hands the rest of the input back to `Normal`, so
//! the line right after it is never a list start.
//!
//! Output is written as the scan proceeds; nothing is buffered beyond the
//! two-byte lookahead of the cursor.

use log::{debug, trace};

use crate::cursor::Cursor;
use crate::line::{classify_line, LineKind};
use crate::render::Sink;

const BOLD_START: &[u8] = b"<b>";
const BOLD_END: &[u8] = b"</b>";
const ITEM_NEXT: &[u8] = b"</li><li>";

/// Translator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Copying bytes, watching for `**` and `\n`.
    Normal,
    /// At the first byte of a line.
    LineFeed,
}

/// Kind of list block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn start_tags(self) -> &'static [u8] {
        match self {
            ListKind::Unordered => b"<ul><li>",
            ListKind::Ordered => b"<ol><li>",
        }
    }

    fn end_tags(self) -> &'static [u8] {
        match self {
            ListKind::Unordered => b"</li></ul>",
            ListKind::Ordered => b"</li></ol>",
        }
    }
}

/// Translation context for one input.
///
/// Created per call, run to completion once, then dropped. All flags live
/// here, so independent translations share nothing.
///
/// # Example
/// ```
/// use slipslope::Translator;
///
/// let out = Translator::new(Vec::<u8>::new(), b"- a\n- b").run().unwrap();
/// assert_eq!(out, b"<ul><li>a</li><li>b</li></ul>");
/// ```
pub struct Translator<'a, S> {
    sink: S,
    cursor: Cursor<'a>,
    state: State,
    bold_open: bool,
    /// At most one list is open; a marker of the other kind closes it.
    open_list: Option<ListKind>,
    /// A terminator consumed by `Normal` that no line has accounted for yet.
    withheld_newline: bool,
    /// Bytes handed to the sink so far.
    written: u64,
}

impl<'a, S: Sink> Translator<'a, S> {
    /// Create a translator positioned at the start of the first line.
    pub fn new(sink: S, input: &'a [u8]) -> Self {
        Self {
            sink,
            cursor: Cursor::new(input),
            state: State::LineFeed,
            bold_open: false,
            open_list: None,
            withheld_newline: false,
            written: 0,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// Current read offset into the input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Whether an unclosed `<b>` has been emitted.
    #[inline]
    pub fn bold_open(&self) -> bool {
        self.bold_open
    }

    #[inline]
    pub fn unordered_open(&self) -> bool {
        self.open_list == Some(ListKind::Unordered)
    }

    #[inline]
    pub fn ordered_open(&self) -> bool {
        self.open_list == Some(ListKind::Ordered)
    }

    /// Total bytes emitted to the sink so far.
    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Check if the whole input has been consumed.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Run to the end of input, finalize, and hand back the sink.
    pub fn run(mut self) -> Result<S, S::Error> {
        let input_len = self.cursor.input().len();
        while !self.cursor.is_eof() {
            self.step()?;
        }
        self.finish()?;
        debug!(
            "translated {} input bytes into {} output bytes (bold left open: {})",
            input_len, self.written, self.bold_open
        );
        Ok(self.sink)
    }

    /// Perform one transition from the current state.
    ///
    /// Does nothing once the input is exhausted.
    pub fn step(&mut self) -> Result<(), S::Error> {
        if self.cursor.is_eof() {
            return Ok(());
        }
        match self.state {
            State::Normal => self.scan_normal(),
            State::LineFeed => self.start_line(),
        }
    }

    /// Copy up to the next `*` or `\n`, then handle that byte.
    fn scan_normal(&mut self) -> Result<(), S::Error> {
        let Some(pos) = self.cursor.find2(b'*', b'\n') else {
            let rest = self.cursor.remaining_slice();
            self.emit(rest)?;
            self.cursor.advance(rest.len());
            return Ok(());
        };

        if pos > 0 {
            self.emit(&self.cursor.remaining_slice()[..pos])?;
            self.cursor.advance(pos);
        }

        if self.cursor.peek() == b'\n' {
            // The terminator itself is never copied; the next line decides
            // what replaces it.
            self.cursor.bump();
            self.withheld_newline = true;
            self.state = State::LineFeed;
        } else if self.cursor.peek_ahead(1) == b'*' {
            self.toggle_bold()?;
            self.cursor.advance(2);
        } else {
            self.emit_byte(b'*')?;
            self.cursor.bump();
        }
        Ok(())
    }

    /// Classify the line at the cursor and emit its list structure.
    fn start_line(&mut self) -> Result<(), S::Error> {
        let line = classify_line(self.cursor.input(), self.cursor.offset());
        self.withheld_newline = false;
        match line.kind {
            LineKind::Blank => {
                self.close_list()?;
                self.emit_byte(self.cursor.peek())?;
                self.cursor.bump();
            }
            LineKind::Unordered => {
                self.list_item(ListKind::Unordered)?;
                self.cursor.advance(line.content_offset);
            }
            LineKind::Ordered => {
                self.list_item(ListKind::Ordered)?;
                self.cursor.advance(line.content_offset);
            }
            LineKind::Text => {
                // Continuation of a multi-line item.
                if self.open_list.is_some() {
                    self.emit_byte(b' ')?;
                }
            }
        }
        self.state = State::Normal;
        Ok(())
    }

    fn toggle_bold(&mut self) -> Result<(), S::Error> {
        let tag = if self.bold_open { BOLD_END } else { BOLD_START };
        self.bold_open = !self.bold_open;
        self.emit(tag)
    }

    /// Start a list item, opening the list (and closing one of the other
    /// kind) when needed.
    fn list_item(&mut self, kind: ListKind) -> Result<(), S::Error> {
        if self.open_list == Some(kind) {
            return self.emit(ITEM_NEXT);
        }
        self.close_list()?;
        trace!("open {:?} list at offset {}", kind, self.cursor.offset());
        self.open_list = Some(kind);
        self.emit(kind.start_tags())
    }

    fn close_list(&mut self) -> Result<(), S::Error> {
        match self.open_list.take() {
            Some(kind) => {
                trace!("close {:?} list at offset {}", kind, self.cursor.offset());
                self.emit(kind.end_tags())
            }
            None => Ok(()),
        }
    }

    /// Close open lists and emit a withheld final terminator.
    ///
    /// Bold is left as the toggles put it.
    fn finish(&mut self) -> Result<(), S::Error> {
        self.close_list()?;
        if self.withheld_newline {
            self.withheld_newline = false;
            self.emit_byte(b'\n')?;
        }
        Ok(())
    }

    #[inline]
    fn emit(&mut self, bytes: &[u8]) -> Result<(), S::Error> {
        self.sink.write_bytes(bytes)?;
        self.written += bytes.len() as u64;
        Ok(())
    }

    #[inline]
    fn emit_byte(&mut self, b: u8) -> Result<(), S::Error> {
        self.sink.write_byte(b)?;
        self.written += 1;
        Ok(())
    }
}
