//! Bounded-lookahead cursor for byte scanning.
//!
//! Every read goes through [`Cursor::peek`] or its offset variants, which
//! return [`SENTINEL`] past the end of input. Marker tests can therefore be
//! written as plain equality comparisons without a bounds branch at each
//! call site.

use memchr::memchr2;

/// Byte returned by lookahead past the end of input.
///
/// Never equal to any byte the dialect assigns meaning to.
pub const SENTINEL: u8 = 0;

/// A forward-only cursor over an input byte slice.
///
/// # Example
/// ```
/// use slipslope::cursor::{Cursor, SENTINEL};
///
/// let mut cursor = Cursor::new(b"**x");
/// assert_eq!(cursor.peek(), b'*');
/// assert_eq!(cursor.peek_ahead(1), b'*');
/// cursor.advance(3);
/// assert!(cursor.is_eof());
/// assert_eq!(cursor.peek(), SENTINEL);
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over a byte slice.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Create a cursor starting at an offset.
    ///
    /// Offsets past the end are clamped to the end of input.
    #[inline]
    pub fn new_at(input: &'a [u8], offset: usize) -> Self {
        Self {
            input,
            pos: offset.min(input.len()),
        }
    }

    /// The whole input this cursor scans.
    #[inline]
    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Check if cursor is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Byte at an absolute offset, or [`SENTINEL`] if out of range.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> u8 {
        match self.input.get(offset) {
            Some(&b) => b,
            None => SENTINEL,
        }
    }

    /// Current byte, or [`SENTINEL`] at EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_at(self.pos)
    }

    /// Byte `n` positions ahead of the cursor, or [`SENTINEL`].
    #[inline]
    pub fn peek_ahead(&self, n: usize) -> u8 {
        self.peek_at(self.pos.saturating_add(n))
    }

    /// Advance by n bytes, stopping at the end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos = self.pos.saturating_add(n).min(self.input.len());
    }

    /// Advance by 1 byte.
    #[inline]
    pub fn bump(&mut self) {
        self.advance(1);
    }

    /// Skip while predicate is true, returning the number of bytes skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while !self.is_eof() && predicate(self.peek()) {
            self.bump();
        }
        self.pos - start
    }

    /// Skip spaces only (tabs are ordinary content in this dialect).
    #[inline]
    pub fn skip_spaces(&mut self) -> usize {
        self.skip_while(|b| b == b' ')
    }

    /// Skip a run of ASCII digits.
    #[inline]
    pub fn skip_digits(&mut self) -> usize {
        self.skip_while(|b| b.is_ascii_digit())
    }

    /// Get the remaining bytes as a slice.
    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Distance to the next occurrence of either byte, using memchr.
    #[inline]
    pub fn find2(&self, a: u8, b: u8) -> Option<usize> {
        memchr2(a, b, self.remaining_slice())
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}
