#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8_scalar::{decode_one, is_valid, scalars, valid_up_to, validate};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    prefix: &'a str,
    garbage: &'a [u8],
    suffix: &'a str,
}

fn check(bytes: &[u8]) {
    let expected = core::str::from_utf8(bytes);
    assert_eq!(is_valid(bytes), expected.is_ok());
    assert_eq!(
        valid_up_to(bytes),
        expected.map_or_else(|e| e.valid_up_to(), str::len)
    );

    let mut consumed = 0;
    for scalar in scalars(bytes) {
        match scalar {
            Ok(c) => consumed += c.len_utf8(),
            Err(_) => break,
        }
    }
    assert_eq!(consumed, valid_up_to(bytes));

    if let Ok((_, len)) = decode_one(bytes) {
        assert!((1..=4).contains(&len) && len <= bytes.len());
    }
}

fuzz_target!(|input: Input<'_>| {
    let mut bytes = input.prefix.as_bytes().to_vec();
    bytes.extend_from_slice(input.garbage);
    bytes.extend_from_slice(input.suffix.as_bytes());
    check(&bytes);

    if let Err(err) = validate(&bytes) {
        assert!(err.valid_up_to() >= input.prefix.len());
    }
});
