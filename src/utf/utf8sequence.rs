use crate::error::MalformedEncoding;
use crate::utf::*;

/// One UTF-8 sequence being assembled byte by byte.
///
/// `build` classifies the lead byte, `add_point` consumes continuation bytes,
/// and `finish` applies the range checks once every announced byte is in.
pub(crate) struct Utf8Sequence {
    codepoint: u32,
    full_length: u8,
    current_length: u8,
}

impl Utf8Sequence {
    #[inline]
    pub(crate) const fn build(lead: u8) -> Result<Self, MalformedEncoding> {
        let (full_length, payload) = match lead.leading_ones() {
            0 => (1, lead),
            2 => (2, lead & 0b0001_1111),
            3 => (3, lead & 0b0000_1111),
            4 => (4, lead & 0b0000_0111),
            _ => return Err(MalformedEncoding::InvalidLeadByte(lead)),
        };
        Ok(Self {
            codepoint: payload as u32,
            full_length,
            current_length: 1,
        })
    }

    #[inline]
    pub(crate) fn add_point(&mut self, point: u8) -> Result<(), MalformedEncoding> {
        debug_assert!(!self.is_complete());
        if !is_continuation(point) {
            return Err(MalformedEncoding::InvalidContinuation {
                byte: point,
                index: self.current_len(),
            });
        }
        self.codepoint = (self.codepoint << 6) | (point & CONTINUATION_BITS) as u32;
        self.current_length += 1;
        Ok(())
    }

    #[inline]
    pub(crate) const fn is_complete(&self) -> bool {
        self.current_length == self.full_length
    }

    #[inline]
    pub(crate) fn finish(self) -> Result<char, MalformedEncoding> {
        debug_assert!(self.is_complete());
        let codepoint = self.codepoint;
        if canonical_len(codepoint).is_some_and(|len| len < self.full_len()) {
            return Err(MalformedEncoding::Overlong {
                scalar: codepoint,
                len: self.full_len(),
            });
        }
        char::from_u32(codepoint).ok_or(if SURROGATES.contains(&codepoint) {
            MalformedEncoding::Surrogate(codepoint)
        } else {
            MalformedEncoding::OutOfRange(codepoint)
        })
    }

    pub(crate) const fn full_len(&self) -> usize {
        self.full_length as usize
    }

    pub(crate) const fn current_len(&self) -> usize {
        self.current_length as usize
    }
}

/// Decodes the scalar value encoded at the start of `bytes`.
///
/// The end of the slice is the hard bound: nothing past it is read, and a
/// sequence cut short by it is reported as [`MalformedEncoding::Truncated`].
/// On success returns the scalar and the number of bytes it occupied, which
/// is always between 1 and 4. On failure no resume position is implied.
///
/// ```
/// use utf8_scalar::{decode_one, MalformedEncoding};
///
/// assert_eq!(decode_one("€uro".as_bytes()), Ok(('€', 3)));
/// assert_eq!(
///     decode_one(&[0xC0, 0x80]),
///     Err(MalformedEncoding::Overlong { scalar: 0, len: 2 })
/// );
/// ```
pub fn decode_one(bytes: &[u8]) -> Result<(char, usize), MalformedEncoding> {
    let Some((&lead, rest)) = bytes.split_first() else {
        return Err(MalformedEncoding::Truncated {
            needed: 1,
            available: 0,
        });
    };
    let mut sequence = Utf8Sequence::build(lead)?;
    let len = sequence.full_len();
    if bytes.len() < len {
        return Err(MalformedEncoding::Truncated {
            needed: len,
            available: bytes.len(),
        });
    }
    for &point in &rest[..len - 1] {
        sequence.add_point(point)?;
    }
    sequence.finish().map(|scalar| (scalar, len))
}
