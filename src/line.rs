//! Line classification.
//!
//! Decides, from the first bytes of a line, whether it is blank, starts a
//! list item, or is ordinary text, and how many bytes of prefix to skip.

use crate::cursor::Cursor;

/// What a line starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Only spaces before a line terminator or a literal passthrough `<`.
    Blank,
    /// `- ` after optional leading spaces.
    Unordered,
    /// `<digits>. ` after optional leading spaces.
    Ordered,
    /// Anything else.
    Text,
}

/// Result of classifying one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass {
    pub kind: LineKind,
    /// Bytes from the line start to the first content byte: leading spaces,
    /// plus the marker and its trailing space when a marker matched.
    pub content_offset: usize,
}

impl LineClass {
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Blank
    }

    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.kind == LineKind::Ordered
    }

    #[inline]
    pub fn is_unordered(&self) -> bool {
        self.kind == LineKind::Unordered
    }

    /// Whether a list marker was consumed.
    #[inline]
    pub fn has_marker(&self) -> bool {
        matches!(self.kind, LineKind::Unordered | LineKind::Ordered)
    }
}

/// Classify the line whose first byte is at `start`.
///
/// Tests run in priority order: blank, unordered marker, ordered marker.
/// Ordered digit runs are only counted, so `1.`, `4.` and `0000.` are all
/// the same marker.
///
/// # Example
/// ```
/// use slipslope::line::{classify_line, LineKind};
///
/// let line = classify_line(b"  12. item", 0);
/// assert_eq!(line.kind, LineKind::Ordered);
/// assert_eq!(line.content_offset, 6);
/// ```
pub fn classify_line(input: &[u8], start: usize) -> LineClass {
    let mut cursor = Cursor::new_at(input, start);
    let indent = cursor.skip_spaces();

    match cursor.peek() {
        b'\n' | b'<' => {
            return LineClass {
                kind: LineKind::Blank,
                content_offset: indent,
            };
        }
        b'-' if cursor.peek_ahead(1) == b' ' => {
            return LineClass {
                kind: LineKind::Unordered,
                content_offset: indent + 2,
            };
        }
        _ => {}
    }

    let digits = cursor.skip_digits();
    if digits > 0 && cursor.peek() == b'.' && cursor.peek_ahead(1) == b' ' {
        return LineClass {
            kind: LineKind::Ordered,
            content_offset: indent + digits + 2,
        };
    }

    LineClass {
        kind: LineKind::Text,
        content_offset: indent,
    }
}
