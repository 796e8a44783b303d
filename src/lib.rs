//! Strict UTF-8 decoding and validation over borrowed byte buffers.
//!
//! [`decode_one`] reads a single scalar value, [`is_valid`] and [`validate`]
//! check a whole buffer. Overlong forms, surrogates, values above U+10FFFF,
//! stray continuation bytes and sequences cut off by the end of the buffer
//! are all rejected. Nothing here allocates or reads past the end of the
//! slice it is given.

mod cursor;
mod error;
mod utf;
mod validate;


pub use cursor::{scalars, Scalars, Utf8Cursor};
pub use error::{MalformedEncoding, Utf8Error};
pub use utf::utf8sequence::decode_one;
pub use utf::{canonical_len, is_scalar_value, MAX_SCALAR};
pub use validate::{is_valid, valid_up_to, validate};
