use crate::cursor::Utf8Cursor;
use crate::error::Utf8Error;

/// Checks that `bytes` is well-formed UTF-8 from start to end.
///
/// The empty buffer is valid. Any malformed sequence, including one cut off
/// by the end of the buffer, makes the whole buffer invalid.
pub fn is_valid(bytes: &[u8]) -> bool {
    validate(bytes).is_ok()
}

/// Like [`is_valid`], but says where the first malformed sequence starts and
/// what is wrong with it.
///
/// ```
/// use utf8_scalar::{validate, MalformedEncoding};
///
/// let err = validate(b"caf\xC3").unwrap_err();
/// assert_eq!(err.valid_up_to(), 3);
/// assert_eq!(
///     err.error(),
///     MalformedEncoding::Truncated { needed: 2, available: 1 }
/// );
/// ```
pub fn validate(bytes: &[u8]) -> Result<(), Utf8Error> {
    let mut cursor = Utf8Cursor::new(bytes);
    while !cursor.is_at_end() {
        if let Err(error) = cursor.decode_next() {
            let valid_up_to = cursor.position();
            tracing::trace!(valid_up_to, len = bytes.len(), %error, "rejected malformed UTF-8");
            return Err(Utf8Error::new(valid_up_to, error));
        }
    }
    debug_assert_eq!(cursor.position(), bytes.len());
    Ok(())
}

/// Length of the longest prefix of `bytes` that is valid UTF-8.
pub fn valid_up_to(bytes: &[u8]) -> usize {
    match validate(bytes) {
        Ok(()) => bytes.len(),
        Err(err) => err.valid_up_to(),
    }
}
