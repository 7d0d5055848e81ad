//! Tables generated by `build.rs`, and the build-time configuration.

include!(concat!(env!("OUT_DIR"), "/tables_gen.rs"));

pub const INVALID_DIGIT: u8 = 0xFF;
pub const DIGIT_SEPARATOR: u8 = 0xFE;

/// Value of an ASCII digit in `base`, `None` for bytes that are not a digit of `base`.
#[inline]
pub fn digit_value(c: u8, base: u32) -> Option<u8> {
	let value = DIGIT_VALUES[c as usize];
	if (value as u32) < base { Some(value) } else { None }
}

#[inline]
pub fn is_separator(c: u8) -> bool {
	DIGIT_VALUES[c as usize] == DIGIT_SEPARATOR
}

#[inline]
pub fn is_small_prime(n: u8) -> bool {
	SMALL_PRIMES.binary_search(&n).is_ok()
}
