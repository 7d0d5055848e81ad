//! Text parsing and rendering in bases 2 ..= 36.

use smallvec::SmallVec;

use crate::error::{assert, cold_path, Error};
use crate::limb::{Limb, Value};
use crate::ll;
use crate::tables::{self, MAX_BASE, MIN_BASE};

const LOWER_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const UPPER_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[inline]
pub fn check_base(base: u32) -> Result<(), Error> {
	assert((MIN_BASE..=MAX_BASE).contains(&base), || {
		Error::new_invalid_argument("base must be in 2 ..= 36")
	})
}

/// Splits a radix prefix off `s`.
///
/// Returns:
///     (base, rest)
/// Where:
///     base = 16 for `0x`, 2 for `0b`, 8 for `0o` or a lone leading `0`, 0 without a prefix
#[inline]
pub fn detect_base(s: &[u8]) -> (u32, &[u8]) {
	match s {
		[b'0', b'x' | b'X', rest @ ..] => (16, rest),
		[b'0', b'b' | b'B', rest @ ..] => (2, rest),
		[b'0', b'o' | b'O', rest @ ..] => (8, rest),
		[b'0', rest @ ..] if !rest.is_empty() => (8, rest),
		_ => (0, s),
	}
}

/// Parses `s` into `out`, which holds a value of `bits` bits.
///
/// Digits are accumulated with `out = out * base + digit`. `_` separators are skipped.
/// Errors:
///     InvalidArgument for an empty string, a missing or invalid digit, a base outside
///     2 ..= 36, or an explicit base that conflicts with the prefix
///     Overflow if the value needs more than `bits` bits
pub fn parse(out: &mut [Limb], bits: usize, s: &str, base: u32) -> Result<(), Error> {
	out.fill(Limb::ZERO);

	let bytes = s.as_bytes();
	if bytes.is_empty() {
		cold_path();
		return Err(Error::new_invalid_argument("parse: empty string"));
	}
	if base != 0 {
		check_base(base)?;
	}
	if bytes == b"0" {
		return Ok(());
	}

	let (detected, digits) = detect_base(bytes);
	if base != 0 && detected != 0 && base != detected {
		cold_path();
		return Err(Error::new_invalid_argument("parse: explicit base conflicts with the prefix"));
	}
	let base = match (base, detected) {
		(0, 0) => 10,
		(0, detected) => detected,
		(base, _) => base,
	};
	check_base(base)?;

	let mut seen = false;
	let mut overflow = false;
	for &c in digits {
		if tables::is_separator(c) {
			continue;
		}
		let Some(digit) = tables::digit_value(c, base) else {
			cold_path();
			return Err(Error::new_invalid_argument("parse: invalid digit"));
		};
		seen = true;
		overflow |= ll::mul_inplace_limb(out, Limb(base as Value));
		overflow |= ll::add_inplace_limb(out, Limb(digit as Value));
	}

	if !seen {
		cold_path();
		return Err(Error::new_invalid_argument("parse: no digits found"));
	}
	if overflow || ll::bit_width(out) > bits {
		cold_path();
		return Err(Error::new_overflow("parse: value does not fit"));
	}
	Ok(())
}

/// Largest power of `base` that fits a limb.
///
/// Returns:
///     (power, digits)
/// Where:
///     power = base ** digits
#[inline]
fn big_base(base: u32) -> (Limb, usize) {
	let base = base as Value;
	let mut power = base;
	let mut digits = 1;
	while let Some(next) = power.checked_mul(base) {
		power = next;
		digits += 1;
	}
	(Limb(power), digits)
}

/// Renders `limbs` in `base`. The base must be valid.
///
/// Repeatedly divides a scratch copy by the largest power of the base that fits a limb,
/// and splits each remainder into digits, least significant first.
pub fn render_unchecked(limbs: &[Limb], base: u32, upper: bool) -> String {
	debug_assert!((MIN_BASE..=MAX_BASE).contains(&base));
	let table = if upper { UPPER_DIGITS } else { LOWER_DIGITS };

	let mut work: SmallVec<[Limb; 16]> = SmallVec::from_slice(&limbs[..ll::nonzero_len(limbs)]);
	if work.is_empty() {
		return "0".to_string();
	}

	let (big, chunk_digits) = big_base(base);
	let base = base as Value;
	let mut digits: SmallVec<[u8; 128]> = SmallVec::new();
	while !work.is_empty() {
		let (_, mut rem) = ll::div_limb_inplace(&mut work, big);
		let len = ll::nonzero_len(&work);
		work.truncate(len);

		// Inner chunks keep their zeros, the most significant one stops at its top digit.
		for _ in 0..chunk_digits {
			if work.is_empty() && rem.is_zero() {
				break;
			}
			digits.push(table[(rem.0 % base) as usize]);
			rem = Limb(rem.0 / base);
		}
	}

	digits.iter().rev().map(|&c| c as char).collect()
}

/// Renders `limbs` in `base`. `InvalidArgument` error for a base outside 2 ..= 36.
pub fn render(limbs: &[Limb], base: u32, upper: bool) -> Result<String, Error> {
	check_base(base)?;
	Ok(render_unchecked(limbs, base, upper))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;
	use crate::testvec;

	fn parse_u128(bits: usize, s: &str, base: u32) -> Result<u128, Error> {
		let mut out = vec![Limb::ZERO; crate::storage::limbs_for_bits(bits)];
		parse(&mut out, bits, s, base)?;
		Ok(out.iter().rev().fold(0, |acc, limb| (acc << Limb::BITS) | limb.0 as u128))
	}

	#[test]
	fn test_detect_base() {
		assert_eq!(detect_base(b"0x1f"), (16, &b"1f"[..]));
		assert_eq!(detect_base(b"0B101"), (2, &b"101"[..]));
		assert_eq!(detect_base(b"0o17"), (8, &b"17"[..]));
		assert_eq!(detect_base(b"017"), (8, &b"17"[..]));
		assert_eq!(detect_base(b"0"), (0, &b"0"[..]));
		assert_eq!(detect_base(b"123"), (0, &b"123"[..]));
	}

	#[test]
	fn test_parse() {
		assert_eq!(parse_u128(64, "0", 0), Ok(0));
		assert_eq!(parse_u128(64, "1234", 0), Ok(1234));
		assert_eq!(parse_u128(64, "0x1F", 0), Ok(31));
		assert_eq!(parse_u128(64, "0b101", 0), Ok(5));
		assert_eq!(parse_u128(64, "0o17", 0), Ok(15));
		assert_eq!(parse_u128(64, "017", 0), Ok(15));
		assert_eq!(parse_u128(64, "0x1f", 16), Ok(31));
		assert_eq!(parse_u128(64, "zz", 36), Ok(35 * 36 + 35));
		assert_eq!(parse_u128(64, "1_000", 10), Ok(1000));
		assert_eq!(parse_u128(128, "340282366920938463463374607431768211455", 10), Ok(u128::MAX));
	}

	#[test]
	fn test_parse_errors() {
		let kind = |r: Result<u128, Error>| r.unwrap_err().kind;
		assert_eq!(kind(parse_u128(8, "", 0)), ErrorKind::InvalidArgument);
		assert_eq!(kind(parse_u128(8, "12a", 10)), ErrorKind::InvalidArgument);
		assert_eq!(kind(parse_u128(8, "0x", 0)), ErrorKind::InvalidArgument);
		assert_eq!(kind(parse_u128(8, "0x10", 10)), ErrorKind::InvalidArgument);
		assert_eq!(kind(parse_u128(8, "10", 37)), ErrorKind::InvalidArgument);
		assert_eq!(kind(parse_u128(8, "10", 1)), ErrorKind::InvalidArgument);
		assert_eq!(kind(parse_u128(8, "0", 37)), ErrorKind::InvalidArgument);
		assert_eq!(kind(parse_u128(8, "0", 1)), ErrorKind::InvalidArgument);
		assert_eq!(parse_u128(8, "0", 36), Ok(0));
		assert_eq!(kind(parse_u128(8, "256", 10)), ErrorKind::Overflow);
		assert_eq!(parse_u128(8, "255", 10), Ok(255));
	}

	#[test]
	fn test_render() {
		assert_eq!(render(&[], 10, false), Ok("0".to_string()));
		assert_eq!(render(&testvec![0, 0], 2, false), Ok("0".to_string()));
		assert_eq!(render(&testvec![255], 16, false), Ok("ff".to_string()));
		assert_eq!(render(&testvec![255], 16, true), Ok("FF".to_string()));
		assert_eq!(render(&testvec![100], 10, false), Ok("100".to_string()));
		assert_eq!(render(&testvec![35], 36, false), Ok("z".to_string()));
		assert_eq!(render(&testvec![1], 37, false).unwrap_err().kind, ErrorKind::InvalidArgument);
	}

	#[test]
	fn test_render_inner_zeros() {
		// 2**BITS has a run of zero digits in every chunk below the top
		let s = render_unchecked(&testvec![0, 1], 16, false);
		assert_eq!(s.len(), Limb::BITS / 4 + 1);
		assert!(s.starts_with('1'));
		assert!(s[1..].bytes().all(|c| c == b'0'));
	}
}
