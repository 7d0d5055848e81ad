//! Conversions between `Uint`s of any width and from/to native integers.

use arrayvec::ArrayVec;

use super::Uint;
use crate::error::{cold_path, Error};
use crate::limb::{Limb, Value};
use crate::ll;
use crate::safety::Safety;
use crate::storage::StorageKind;

/// Number of limbs in the widest native integer.
pub(crate) const NATIVE_LIMBS: usize = 128 / Limb::BITS;

/// Limbs of a native value, without high zero limbs.
pub(crate) fn native_limbs(value: u128) -> ArrayVec<Limb, NATIVE_LIMBS> {
	let mut limbs = ArrayVec::new();
	let mut value = value;
	while value != 0 {
		limbs.push(Limb(value as Value));
		value = value.checked_shr(Limb::BITS as u32).unwrap_or(0);
	}
	limbs
}

mod sealed {
	pub trait Sealed {}
}

/// Native unsigned integer types a `Uint` converts from and to.
pub trait Native: sealed::Sealed + Copy {
	const BITS: usize;

	fn to_u128(self) -> u128;
	fn from_u128_wrapping(value: u128) -> Self;
}

macro_rules! impl_native {
	($($t:ty),*) => {
		$(
			impl sealed::Sealed for $t {}

			impl Native for $t {
				const BITS: usize = <$t>::BITS as usize;

				#[inline]
				fn to_u128(self) -> u128 {
					self as u128
				}

				#[inline]
				fn from_u128_wrapping(value: u128) -> Self {
					value as $t
				}
			}
		)*
	};
}

impl_native!(u8, u16, u32, u64, u128, usize);

impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> Uint<BITS, LIMBS, S, K> {
	fn from_native_overflowing<N: Native>(value: N) -> (Self, bool) {
		let mut out = Self::new_zeroed();
		let dropped = ll::assign(out.limbs_mut(), &native_limbs(value.to_u128()));
		let excess = out.clear_excess();
		(out, dropped | excess)
	}

	/// Converts a native integer. A value wider than `BITS` is an `OutOfRange` error in
	/// checked mode and is truncated in wrapping mode.
	pub fn try_from_native<N: Native>(value: N) -> Result<Self, Error> {
		let (out, truncated) = Self::from_native_overflowing(value);
		if S::CHECKED && truncated {
			cold_path();
			return Err(Error::new_out_of_range("Uint::try_from_native()"));
		}
		Ok(out)
	}

	#[inline]
	pub fn from_native_wrapping<N: Native>(value: N) -> Self {
		Self::from_native_overflowing(value).0
	}

	/// The low 128 bits.
	fn low_u128(&self) -> u128 {
		let mut value = 0_u128;
		for (i, limb) in self.limbs().iter().take(NATIVE_LIMBS).enumerate() {
			value |= (limb.0 as u128) << (i * Limb::BITS);
		}
		value
	}

	/// Converts to a native integer. A value that needs more than `N::BITS` bits is an
	/// `OutOfRange` error in checked mode and is truncated in wrapping mode.
	pub fn to_native<N: Native>(&self) -> Result<N, Error> {
		if S::CHECKED && self.bit_width() > N::BITS {
			cold_path();
			return Err(Error::new_out_of_range("Uint::to_native()"));
		}
		Ok(N::from_u128_wrapping(self.low_u128()))
	}

	#[inline]
	pub fn to_native_wrapping<N: Native>(&self) -> N {
		N::from_u128_wrapping(self.low_u128())
	}

	/// Nearest `f64`, rounding each limb step.
	pub fn to_f64(&self) -> f64 {
		let radix = 2_f64.powi(Limb::BITS as i32);
		self.limbs().iter().rev().fold(0.0, |acc, limb| acc * radix + limb.0 as f64)
	}

	//----------------------------------------------------------------------------------------------

	fn cast_overflowing<const B2: usize, const L2: usize, T: Safety, K2: StorageKind>(
		&self,
	) -> (Uint<B2, L2, T, K2>, bool) {
		let mut out = Uint::<B2, L2, T, K2>::new_zeroed();
		let dropped = ll::assign(out.limbs_mut(), self.limbs());
		let excess = out.clear_excess();
		(out, dropped | excess)
	}

	/// Converts to another width and safety mode. Dropping set bits is an `OutOfRange` error
	/// if either side is checked.
	pub fn try_cast<const B2: usize, const L2: usize, T: Safety, K2: StorageKind>(
		&self,
	) -> Result<Uint<B2, L2, T, K2>, Error> {
		let (out, truncated) = self.cast_overflowing();
		if (S::CHECKED || T::CHECKED) && truncated {
			cold_path();
			return Err(Error::new_out_of_range("Uint::try_cast()"));
		}
		Ok(out)
	}

	#[inline]
	pub fn wrapping_cast<const B2: usize, const L2: usize, T: Safety, K2: StorageKind>(
		&self,
	) -> Uint<B2, L2, T, K2> {
		self.cast_overflowing().0
	}

	/// Assigns a value of any width. Dropping set bits is an `Overflow` error if either side
	/// is checked. The value is left truncated then.
	pub fn try_assign_from<const B2: usize, const L2: usize, T: Safety, K2: StorageKind>(
		&mut self,
		src: &Uint<B2, L2, T, K2>,
	) -> Result<(), Error> {
		let dropped = ll::assign(self.limbs_mut(), src.limbs());
		let excess = self.clear_excess();
		if (S::CHECKED || T::CHECKED) && (dropped | excess) {
			cold_path();
			return Err(Error::new_overflow("Uint::try_assign_from()"));
		}
		Ok(())
	}

	/// Right-hand side of a compound assignment, at the width of `Self`.
	pub(crate) fn assign_operand<const B2: usize, const L2: usize, T: Safety, K2: StorageKind>(
		src: &Uint<B2, L2, T, K2>,
	) -> Result<Self, Error> {
		let mut out = Self::new_zeroed();
		out.try_assign_from(src)?;
		Ok(out)
	}
}

macro_rules! impl_native_conversions {
	($($t:ty),*) => {
		$(
			impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> TryFrom<$t>
				for Uint<BITS, LIMBS, S, K>
			{
				type Error = Error;

				#[inline]
				fn try_from(value: $t) -> Result<Self, Error> {
					Self::try_from_native(value)
				}
			}

			impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind>
				TryFrom<Uint<BITS, LIMBS, S, K>> for $t
			{
				type Error = Error;

				#[inline]
				fn try_from(value: Uint<BITS, LIMBS, S, K>) -> Result<Self, Error> {
					value.to_native()
				}
			}

			impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind>
				TryFrom<&Uint<BITS, LIMBS, S, K>> for $t
			{
				type Error = Error;

				#[inline]
				fn try_from(value: &Uint<BITS, LIMBS, S, K>) -> Result<Self, Error> {
					value.to_native()
				}
			}

			impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> PartialEq<$t>
				for Uint<BITS, LIMBS, S, K>
			{
				#[inline]
				fn eq(&self, other: &$t) -> bool {
					ll::compare_equal(self.limbs(), &native_limbs(*other as u128))
				}
			}

			impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> PartialOrd<$t>
				for Uint<BITS, LIMBS, S, K>
			{
				#[inline]
				fn partial_cmp(&self, other: &$t) -> Option<std::cmp::Ordering> {
					Some(ll::compare(self.limbs(), &native_limbs(*other as u128), 0))
				}
			}
		)*
	};
}

impl_native_conversions!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_native_limbs() {
		assert!(native_limbs(0).is_empty());
		assert_eq!(native_limbs(5).as_slice(), &[Limb(5)]);
		let limbs = native_limbs(u128::MAX);
		assert_eq!(limbs.len(), NATIVE_LIMBS);
		assert!(limbs.iter().all(|limb| *limb == Limb::MAX));
	}
}
