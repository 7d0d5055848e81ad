//! Text conversion of `Uint` values.

use std::fmt;
use std::str::FromStr;

use super::Uint;
use crate::base_conv;
use crate::error::Error;
use crate::safety::Safety;
use crate::storage::StorageKind;

impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> Uint<BITS, LIMBS, S, K> {
	/// Parses `s` in `base`.
	///
	/// With `base == 0` the base comes from a `0x`, `0b`, `0o` or `0` prefix and defaults to 10.
	/// A value wider than `BITS` is an `Overflow` error in either safety mode.
	pub fn from_str_radix(s: &str, base: u32) -> Result<Self, Error> {
		let mut out = Self::new_zeroed();
		base_conv::parse(out.limbs_mut(), BITS, s, base)?;
		Ok(out)
	}

	/// Renders the value in `base`. `upper` selects upper case letter digits.
	pub fn to_string_radix(&self, base: u32, upper: bool) -> Result<String, Error> {
		base_conv::render(self.limbs(), base, upper)
	}

	pub fn to_bin(&self) -> String {
		base_conv::render_unchecked(self.limbs(), 2, false)
	}

	pub fn to_oct(&self) -> String {
		base_conv::render_unchecked(self.limbs(), 8, false)
	}

	pub fn to_dec(&self) -> String {
		base_conv::render_unchecked(self.limbs(), 10, false)
	}

	pub fn to_hex(&self, upper: bool) -> String {
		base_conv::render_unchecked(self.limbs(), 16, upper)
	}
}

impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> FromStr for Uint<BITS, LIMBS, S, K> {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		Self::from_str_radix(s, 0)
	}
}

macro_rules! impl_fmt {
	($Trait:ident, $base:expr, $upper:expr, $prefix:expr) => {
		impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> fmt::$Trait
			for Uint<BITS, LIMBS, S, K>
		{
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				let digits = base_conv::render_unchecked(self.limbs(), $base, $upper);
				f.pad_integral(true, $prefix, &digits)
			}
		}
	};
}

impl_fmt!(Display, 10, false, "");
impl_fmt!(LowerHex, 16, false, "0x");
impl_fmt!(UpperHex, 16, true, "0x");
impl_fmt!(Octal, 8, false, "0o");
impl_fmt!(Binary, 2, false, "0b");

impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> fmt::Debug for Uint<BITS, LIMBS, S, K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Uint<{}, {}>({:#x})", BITS, S::NAME, self)
	}
}
