pub(crate) mod utf8sequence;

use std::ops::RangeInclusive;

/// The largest Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10FFFF;

pub(crate) const SURROGATES: RangeInclusive<u32> = 0xD800..=0xDFFF;

pub(crate) const CONTINUATION_MASK: u8 = 0b1100_0000;
pub(crate) const CONTINUATION_TAG: u8 = 0b1000_0000;
pub(crate) const CONTINUATION_BITS: u8 = 0b0011_1111;

/// Whether `codepoint` is a Unicode scalar value: at most U+10FFFF and
/// outside the surrogate block.
pub const fn is_scalar_value(codepoint: u32) -> bool {
    codepoint <= MAX_SCALAR && !(codepoint >= 0xD800 && codepoint <= 0xDFFF)
}

/// Number of bytes in the shortest UTF-8 encoding of `codepoint`, or `None`
/// when it is above U+10FFFF.
pub const fn canonical_len(codepoint: u32) -> Option<usize> {
    match codepoint {
        0..=0x7F => Some(1),
        0x80..=0x7FF => Some(2),
        0x800..=0xFFFF => Some(3),
        0x10000..=MAX_SCALAR => Some(4),
        _ => None,
    }
}

#[inline]
pub(crate) const fn is_continuation(byte: u8) -> bool {
    byte & CONTINUATION_MASK == CONTINUATION_TAG
}
