use std::iter::FusedIterator;

use crate::error::MalformedEncoding;
use crate::utf::utf8sequence::decode_one;

/// A read position inside a borrowed byte buffer.
///
/// The position never passes the end of the buffer. A successful decode moves
/// it past the scalar just read; a failed one leaves it on the first byte of
/// the malformed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Cursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Utf8Cursor<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Decodes the scalar at the current position and steps over it.
    pub fn decode_next(&mut self) -> Result<char, MalformedEncoding> {
        let (scalar, len) = decode_one(self.remaining())?;
        self.position += len;
        debug_assert!(self.position <= self.bytes.len());
        Ok(scalar)
    }

    pub const fn position(&self) -> usize {
        self.position
    }

    /// The bytes between the position and the end of the buffer.
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.position..]
    }

    pub const fn is_at_end(&self) -> bool {
        self.position >= self.bytes.len()
    }
}

/// Iterator over the scalars of a buffer, see [`scalars`].
#[derive(Debug, Clone)]
pub struct Scalars<'a> {
    cursor: Utf8Cursor<'a>,
    failed: bool,
}

/// Decodes `bytes` front to back.
///
/// The first malformed sequence is yielded as an error and ends the
/// iteration; there is no attempt to resynchronise on a later lead byte.
///
/// ```
/// use utf8_scalar::{scalars, MalformedEncoding};
///
/// let decoded: Vec<_> = scalars(b"ok\xFFno").collect();
/// assert_eq!(
///     decoded,
///     [Ok('o'), Ok('k'), Err(MalformedEncoding::InvalidLeadByte(0xFF))]
/// );
/// ```
pub fn scalars(bytes: &[u8]) -> Scalars<'_> {
    Scalars {
        cursor: Utf8Cursor::new(bytes),
        failed: false,
    }
}

impl Scalars<'_> {
    /// Byte offset of the next scalar, or of the malformed sequence once
    /// iteration has stopped on one.
    pub const fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl Iterator for Scalars<'_> {
    type Item = Result<char, MalformedEncoding>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.is_at_end() {
            return None;
        }
        let next = self.cursor.decode_next();
        self.failed = next.is_err();
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.cursor.remaining().len();
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Scalars<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_walks_mixed_widths() {
        let text = "aé€🦀";
        let mut cursor = Utf8Cursor::new(text.as_bytes());
        let mut offsets = vec![cursor.position()];
        while !cursor.is_at_end() {
            cursor.decode_next().unwrap();
            offsets.push(cursor.position());
        }
        assert_eq!(offsets, [0, 1, 3, 6, 10]);
        assert!(cursor.remaining().is_empty());
    }

    #[test]
    fn cursor_at_end_reports_truncation() {
        let mut cursor = Utf8Cursor::new(b"");
        assert!(cursor.is_at_end());
        assert_eq!(
            cursor.decode_next(),
            Err(MalformedEncoding::Truncated {
                needed: 1,
                available: 0
            })
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn failed_decode_keeps_position() {
        let mut cursor = Utf8Cursor::new(b"x\xED\xA0\x80y");
        assert_eq!(cursor.decode_next(), Ok('x'));
        assert_eq!(
            cursor.decode_next(),
            Err(MalformedEncoding::Surrogate(0xD800))
        );
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.remaining(), b"\xED\xA0\x80y");
    }

    #[test]
    fn scalars_stop_after_first_error() {
        let mut iter = scalars(b"a\xC0\x80b");
        assert_eq!(iter.next(), Some(Ok('a')));
        assert_eq!(
            iter.next(),
            Some(Err(MalformedEncoding::Overlong { scalar: 0, len: 2 }))
        );
        assert_eq!(iter.position(), 1);
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn position_never_passes_the_end() {
        let text = "a€🦀é".as_bytes();
        for cut in 0..=text.len() {
            let mut cursor = Utf8Cursor::new(&text[..cut]);
            while cursor.decode_next().is_ok() {
                assert!(cursor.position() <= cut);
            }
            assert!(cursor.position() <= cut);
            assert_eq!(cursor.remaining().len(), cut - cursor.position());
        }
    }

    #[test]
    fn scalars_match_str_chars() {
        let text = "Grüße, Jürgen ❤ 𝄞";
        let decoded: Result<String, _> = scalars(text.as_bytes()).collect();
        assert_eq!(decoded.unwrap(), text);
    }

    #[test]
    fn size_hint_bounds_the_count() {
        let text = "añ€𝄞";
        let iter = scalars(text.as_bytes());
        let (low, high) = iter.size_hint();
        let count = iter.count();
        assert_eq!(count, 4);
        assert!(low <= count);
        assert!(count <= high.unwrap());

        let garbage = scalars(b"\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF");
        let (low, high) = garbage.size_hint();
        assert_eq!((low, high), (1, Some(8)));
        assert_eq!(garbage.count(), 1);

        let (low, _) = scalars(b"ok\xC0\x80").size_hint();
        assert!(low <= scalars(b"ok\xC0\x80").count());
        assert_eq!(scalars(b"").size_hint(), (0, Some(0)));
    }
}
