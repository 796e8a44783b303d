use thiserror::Error;

/// A byte sequence that is not well-formed UTF-8.
///
/// Every variant means the same thing to a validity check: the input is
/// invalid. The variants only exist to make diagnostics readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MalformedEncoding {
    /// A continuation byte or `0xF8..=0xFF` where a sequence must start.
    #[error("invalid lead byte {0:#04x}")]
    InvalidLeadByte(u8),
    /// A byte inside a sequence that does not match `10xxxxxx`.
    #[error("invalid continuation byte {byte:#04x} at index {index}")]
    InvalidContinuation { byte: u8, index: usize },
    /// The buffer ends before the sequence announced by its lead byte does.
    #[error("truncated sequence: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },
    /// The scalar fits in fewer bytes than were used to encode it.
    #[error("overlong {len}-byte encoding of U+{scalar:04X}")]
    Overlong { scalar: u32, len: usize },
    /// Above U+10FFFF.
    #[error("code point {0:#x} is above U+10FFFF")]
    OutOfRange(u32),
    #[error("surrogate code point U+{0:04X}")]
    Surrogate(u32),
}

/// The first malformed sequence found while validating a whole buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("invalid UTF-8 after {valid_up_to} valid bytes")]
pub struct Utf8Error {
    valid_up_to: usize,
    #[source]
    error: MalformedEncoding,
}

impl Utf8Error {
    pub(crate) const fn new(valid_up_to: usize, error: MalformedEncoding) -> Self {
        Self { valid_up_to, error }
    }

    /// Length of the longest prefix that decoded cleanly.
    pub const fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }

    pub const fn error(&self) -> MalformedEncoding {
        self.error
    }
}
