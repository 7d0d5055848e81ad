//! The user-facing integer type.

use std::marker::PhantomData;

use crate::error::{cold_path, Error};
use crate::limb::Limb;
use crate::ll;
use crate::safety::{Checked, Safety, Wrapping};
use crate::storage::{fits_local, limbs_for_bits, LimbStore, Local, StorageKind};

mod cmp;
mod convert;
mod fmt;
mod ops;

pub use convert::Native;

/// Unsigned integer of exactly `BITS` bits.
///
/// `LIMBS` must be `limbs_for_bits(BITS)` and `K` must be the storage kind `fits_local()`
/// picks for it. Both are checked at compile time. Use `uint_type!` to get them right.
///
/// The bits of the top limb above `BITS` are always zero.
#[repr(transparent)]
pub struct Uint<const BITS: usize, const LIMBS: usize, S: Safety = Wrapping, K: StorageKind = Local> {
	limbs: K::Buf<LIMBS>,
	safety: PhantomData<S>,
}

impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> Uint<BITS, LIMBS, S, K> {
	pub const BITS: usize = BITS;
	pub const LIMBS: usize = LIMBS;
	pub const BYTES: usize = BITS.div_ceil(8);

	/// Unused bits at the top of the last limb. Always zero in a stored value.
	const EXCESS: usize = LIMBS * Limb::BITS - BITS;

	const VALID: () = {
		assert!(BITS > 0, "Uint: BITS must be positive");
		assert!(LIMBS == limbs_for_bits(BITS), "Uint: LIMBS does not match BITS");
		assert!(K::IS_LOCAL == fits_local(LIMBS), "Uint: storage kind does not match the width");
	};

	#[inline]
	pub(crate) fn new_zeroed() -> Self {
		#[allow(clippy::let_unit_value)]
		let () = Self::VALID;
		Self {
			limbs: <K::Buf<LIMBS> as LimbStore>::zeroed(),
			safety: PhantomData,
		}
	}

	#[inline]
	pub fn zero() -> Self {
		Self::new_zeroed()
	}

	#[inline]
	pub fn one() -> Self {
		let mut one = Self::new_zeroed();
		one.limbs_mut()[0] = Limb::ONE;
		one
	}

	#[inline]
	pub fn max_value() -> Self {
		let mut max = Self::new_zeroed();
		max.limbs_mut().fill(Limb::MAX);
		max.clear_excess();
		max
	}

	#[inline]
	pub fn min_value() -> Self {
		Self::new_zeroed()
	}

	/// Builds a value from little-endian limbs.
	/// In checked mode, set bits at or above `BITS` are an `Overflow` error.
	pub fn try_from_limbs(limbs: &[Limb]) -> Result<Self, Error> {
		let mut out = Self::new_zeroed();
		let dropped = ll::assign(out.limbs_mut(), limbs);
		let excess = out.clear_excess();
		out.check(dropped | excess, "Uint::try_from_limbs()")
	}

	/// Little-endian limbs of the value.
	#[inline]
	pub fn limbs(&self) -> &[Limb] {
		self.limbs.as_slice()
	}

	#[inline]
	pub(crate) fn limbs_mut(&mut self) -> &mut [Limb] {
		self.limbs.as_mut_slice()
	}

	/// Whether the limbs are stored inline.
	#[inline]
	pub const fn is_local() -> bool {
		K::IS_LOCAL
	}

	#[inline]
	pub const fn is_checked() -> bool {
		S::CHECKED
	}

	/// Clears the bits above `BITS` and reports whether any was set.
	#[inline]
	pub(crate) fn clear_excess(&mut self) -> bool {
		if BITS % Limb::BITS == 0 {
			return false;
		}
		ll::truncate_bits(self.limbs_mut(), BITS)
	}

	/// Applies the safety policy: in checked mode a reported problem becomes an `Overflow` error.
	#[inline]
	fn check(self, overflow: bool, msg: &'static str) -> Result<Self, Error> {
		if S::CHECKED && overflow {
			cold_path();
			Err(Error::new_overflow(msg))
		} else {
			Ok(self)
		}
	}

	#[inline]
	fn check_unit(overflow: bool, msg: &'static str) -> Result<(), Error> {
		if S::CHECKED && overflow {
			cold_path();
			Err(Error::new_overflow(msg))
		} else {
			Ok(())
		}
	}

	//----------------------------------------------------------------------------------------------
	// Safety views. These never copy the limbs.

	/// Views the value in another safety mode.
	#[inline]
	pub fn as_safety<T: Safety>(&self) -> &Uint<BITS, LIMBS, T, K> {
		// SAFETY: `Uint` is `repr(transparent)` over `K::Buf<LIMBS>` for every safety mode.
		unsafe { &*(self as *const Self as *const Uint<BITS, LIMBS, T, K>) }
	}

	#[inline]
	pub fn as_safety_mut<T: Safety>(&mut self) -> &mut Uint<BITS, LIMBS, T, K> {
		// SAFETY: see `as_safety()`.
		unsafe { &mut *(self as *mut Self as *mut Uint<BITS, LIMBS, T, K>) }
	}

	#[inline]
	pub fn into_safety<T: Safety>(self) -> Uint<BITS, LIMBS, T, K> {
		Uint { limbs: self.limbs, safety: PhantomData }
	}

	#[inline]
	pub fn as_checked(&self) -> &Uint<BITS, LIMBS, Checked, K> {
		self.as_safety()
	}

	#[inline]
	pub fn as_wrapping(&self) -> &Uint<BITS, LIMBS, Wrapping, K> {
		self.as_safety()
	}

	#[inline]
	pub fn as_checked_mut(&mut self) -> &mut Uint<BITS, LIMBS, Checked, K> {
		self.as_safety_mut()
	}

	#[inline]
	pub fn as_wrapping_mut(&mut self) -> &mut Uint<BITS, LIMBS, Wrapping, K> {
		self.as_safety_mut()
	}

	#[inline]
	pub fn into_checked(self) -> Uint<BITS, LIMBS, Checked, K> {
		self.into_safety()
	}

	#[inline]
	pub fn into_wrapping(self) -> Uint<BITS, LIMBS, Wrapping, K> {
		self.into_safety()
	}

	//----------------------------------------------------------------------------------------------
	// Bits

	#[inline]
	pub fn is_zero(&self) -> bool {
		ll::is_zero(self.limbs())
	}

	/// Bit `i`, `false` for `i >= BITS`.
	#[inline]
	pub fn bit(&self, i: usize) -> bool {
		ll::bit(self.limbs(), i)
	}

	/// Sets bit `i`. `OutOfRange` error for `i >= BITS` in either mode.
	pub fn try_set_bit(&mut self, i: usize, value: bool) -> Result<(), Error> {
		crate::error::assert(i < BITS, || Error::new_out_of_range("Uint::try_set_bit()"))?;
		ll::set_bit(self.limbs_mut(), i, value);
		Ok(())
	}

	/// Number of bits needed to store the value, 0 for zero.
	#[inline]
	pub fn bit_width(&self) -> usize {
		ll::bit_width(self.limbs())
	}

	#[inline]
	pub fn leading_zeros(&self) -> usize {
		ll::countl_zero(self.limbs()) - Self::EXCESS
	}

	pub fn leading_ones(&self) -> usize {
		let Some((&top, rest)) = self.limbs().split_last() else {
			return 0;
		};
		// Align the top limb's used bits with its high end.
		let top_ones = (top << Self::EXCESS).leading_ones();
		if top_ones < Limb::BITS - Self::EXCESS {
			return top_ones;
		}
		top_ones + ll::countl_one(rest)
	}

	#[inline]
	pub fn trailing_zeros(&self) -> usize {
		ll::countr_zero(self.limbs()).min(BITS)
	}

	#[inline]
	pub fn trailing_ones(&self) -> usize {
		ll::countr_one(self.limbs())
	}

	#[inline]
	pub fn count_ones(&self) -> usize {
		ll::popcount(self.limbs())
	}

	#[inline]
	pub fn count_zeros(&self) -> usize {
		BITS - self.count_ones()
	}

	#[inline]
	pub fn has_single_bit(&self) -> bool {
		ll::has_single_bit(self.limbs())
	}

	/// Largest power of two not above the value, zero for zero.
	pub fn bit_floor(&self) -> Self {
		let mut out = Self::new_zeroed();
		let width = self.bit_width();
		if width > 0 {
			ll::set_bit(out.limbs_mut(), width - 1, true);
		}
		out
	}

	/// Smallest power of two not below the value.
	/// If that is `2**BITS`, checked mode reports `Overflow` and wrapping mode returns zero.
	pub fn try_bit_ceil(&self) -> Result<Self, Error> {
		let mut out = Self::new_zeroed();
		if self.bit_width() <= 1 {
			out.limbs_mut()[0] = Limb::ONE;
			return Ok(out);
		}
		let width = if self.has_single_bit() { self.bit_width() - 1 } else { self.bit_width() };
		let overflow = width >= BITS;
		if !overflow {
			ll::set_bit(out.limbs_mut(), width, true);
		}
		out.check(overflow, "Uint::try_bit_ceil()")
	}

	/// All bits inverted.
	#[inline]
	fn inverted(&self) -> Self {
		let mut out = self.clone();
		ll::flip(out.limbs_mut());
		out.clear_excess();
		out
	}

	//----------------------------------------------------------------------------------------------
	// Addition and subtraction

	pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
		let mut out = Self::new_zeroed();
		let carry = ll::add(out.limbs_mut(), self.limbs(), rhs.limbs(), 0);
		let excess = out.clear_excess();
		(out, carry | excess)
	}

	#[inline]
	pub fn wrapping_add(&self, rhs: &Self) -> Self {
		self.overflowing_add(rhs).0
	}

	#[inline]
	pub fn try_add(&self, rhs: &Self) -> Result<Self, Error> {
		let (out, overflow) = self.overflowing_add(rhs);
		out.check(overflow, "Uint::try_add()")
	}

	pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
		let mut out = Self::new_zeroed();
		let borrow = ll::sub(out.limbs_mut(), self.limbs(), rhs.limbs(), 0);
		out.clear_excess();
		(out, borrow)
	}

	#[inline]
	pub fn wrapping_sub(&self, rhs: &Self) -> Self {
		self.overflowing_sub(rhs).0
	}

	#[inline]
	pub fn try_sub(&self, rhs: &Self) -> Result<Self, Error> {
		let (out, underflow) = self.overflowing_sub(rhs);
		out.check(underflow, "Uint::try_sub()")
	}

	/// Two's complement negation, `2**BITS - self`.
	pub fn wrapping_neg(&self) -> Self {
		let mut out = self.inverted();
		ll::increment(out.limbs_mut());
		out.clear_excess();
		out
	}

	//----------------------------------------------------------------------------------------------
	// Increment and decrement. On error the value is left wrapped.

	pub fn try_increment(&mut self) -> Result<(), Error> {
		let carry = ll::increment(self.limbs_mut());
		let excess = self.clear_excess();
		Self::check_unit(carry | excess, "Uint::try_increment()")
	}

	pub fn try_decrement(&mut self) -> Result<(), Error> {
		let borrow = ll::decrement(self.limbs_mut());
		self.clear_excess();
		Self::check_unit(borrow, "Uint::try_decrement()")
	}

	/// Increments the value and returns the previous one.
	pub fn try_post_increment(&mut self) -> Result<Self, Error> {
		let mut old = Self::new_zeroed();
		let carry = ll::post_increment(self.limbs_mut(), old.limbs_mut());
		let excess = self.clear_excess();
		Self::check_unit(carry | excess, "Uint::try_post_increment()")?;
		Ok(old)
	}

	/// Decrements the value and returns the previous one.
	pub fn try_post_decrement(&mut self) -> Result<Self, Error> {
		let mut old = Self::new_zeroed();
		let borrow = ll::post_decrement(self.limbs_mut(), old.limbs_mut());
		self.clear_excess();
		Self::check_unit(borrow, "Uint::try_post_decrement()")?;
		Ok(old)
	}

	//----------------------------------------------------------------------------------------------
	// Multiplication and division

	pub fn overflowing_mul(&self, rhs: &Self) -> (Self, bool) {
		let mut out = Self::new_zeroed();
		let overflow = ll::mul(out.limbs_mut(), self.limbs(), rhs.limbs());
		let excess = out.clear_excess();
		(out, overflow | excess)
	}

	#[inline]
	pub fn wrapping_mul(&self, rhs: &Self) -> Self {
		self.overflowing_mul(rhs).0
	}

	#[inline]
	pub fn try_mul(&self, rhs: &Self) -> Result<Self, Error> {
		let (out, overflow) = self.overflowing_mul(rhs);
		out.check(overflow, "Uint::try_mul()")
	}

	pub fn try_mul_limb(&self, rhs: Limb) -> Result<Self, Error> {
		let mut out = Self::new_zeroed();
		let overflow = ll::mul_limb(out.limbs_mut(), self.limbs(), rhs);
		let excess = out.clear_excess();
		out.check(overflow | excess, "Uint::try_mul_limb()")
	}

	/// Quotient and remainder. `DivisionByZero` error in both safety modes.
	pub fn try_div_rem(&self, rhs: &Self) -> Result<(Self, Self), Error> {
		let mut quot = Self::new_zeroed();
		let mut rem = Self::new_zeroed();
		let status = ll::div(quot.limbs_mut(), rem.limbs_mut(), self.limbs(), rhs.limbs());
		status.into_result(S::CHECKED, "Uint::try_div_rem()")?;
		Ok((quot, rem))
	}

	#[inline]
	pub fn try_div(&self, rhs: &Self) -> Result<Self, Error> {
		Ok(self.try_div_rem(rhs)?.0)
	}

	#[inline]
	pub fn try_rem(&self, rhs: &Self) -> Result<Self, Error> {
		Ok(self.try_div_rem(rhs)?.1)
	}

	/// Division by a single limb.
	pub fn try_div_rem_limb(&self, rhs: Limb) -> Result<(Self, Limb), Error> {
		let mut quot = Self::new_zeroed();
		let (status, rem) = ll::div_limb(quot.limbs_mut(), self.limbs(), rhs);
		status.into_result(S::CHECKED, "Uint::try_div_rem_limb()")?;
		Ok((quot, rem))
	}

	pub fn try_rem_limb(&self, rhs: Limb) -> Result<Limb, Error> {
		match ll::rem_limb(self.limbs(), rhs) {
			Some(rem) => Ok(rem),
			None => {
				cold_path();
				log::debug!("Uint::try_rem_limb(): division by zero");
				Err(Error::new_division_by_zero("Uint::try_rem_limb()"))
			},
		}
	}

	//----------------------------------------------------------------------------------------------
	// Shifts. Shifting by `BITS` or more gives zero.

	pub fn overflowing_shl(&self, n: usize) -> (Self, bool) {
		let mut out = Self::new_zeroed();
		let lost = ll::shl::<true>(out.limbs_mut(), self.limbs(), n);
		let excess = out.clear_excess();
		(out, lost | excess)
	}

	pub fn wrapping_shl(&self, n: usize) -> Self {
		let mut out = Self::new_zeroed();
		ll::shl::<false>(out.limbs_mut(), self.limbs(), n);
		out.clear_excess();
		out
	}

	/// Left shift. In checked mode, shifting out a set bit is an `Overflow` error.
	#[inline]
	pub fn try_shl(&self, n: usize) -> Result<Self, Error> {
		if S::CHECKED {
			let (out, overflow) = self.overflowing_shl(n);
			out.check(overflow, "Uint::try_shl()")
		} else {
			Ok(self.wrapping_shl(n))
		}
	}

	/// Right shift, never an error.
	pub fn wrapping_shr(&self, n: usize) -> Self {
		let mut out = Self::new_zeroed();
		ll::shr::<false>(out.limbs_mut(), self.limbs(), n);
		out
	}

	/// Right shift reporting whether a set bit was shifted out.
	pub fn overflowing_shr(&self, n: usize) -> (Self, bool) {
		let mut out = Self::new_zeroed();
		let lost = ll::shr::<true>(out.limbs_mut(), self.limbs(), n);
		(out, lost)
	}

	/// Right shift that must not drop set bits. Checked mode reports `Overflow` if it does.
	#[inline]
	pub fn try_shr_exact(&self, n: usize) -> Result<Self, Error> {
		let (out, lost) = self.overflowing_shr(n);
		out.check(lost, "Uint::try_shr_exact()")
	}

	/// In-place left shift.
	pub fn try_shl_assign(&mut self, n: usize) -> Result<(), Error> {
		let lost = if S::CHECKED {
			ll::shl_inplace::<true>(self.limbs_mut(), n)
		} else {
			ll::shl_inplace::<false>(self.limbs_mut(), n)
		};
		let excess = self.clear_excess();
		Self::check_unit(lost | excess, "Uint::try_shl_assign()")
	}

	/// In-place right shift, never an error.
	pub fn shr_assign_wrapping(&mut self, n: usize) {
		ll::shr_inplace::<false>(self.limbs_mut(), n);
	}

	pub fn rotate_left(&self, n: usize) -> Self {
		let n = n % BITS;
		if n == 0 {
			return self.clone();
		}
		let high = self.wrapping_shl(n);
		let low = self.wrapping_shr(BITS - n);
		let mut out = Self::new_zeroed();
		ll::or(out.limbs_mut(), high.limbs(), low.limbs());
		out
	}

	#[inline]
	pub fn rotate_right(&self, n: usize) -> Self {
		self.rotate_left(BITS - n % BITS)
	}

	//----------------------------------------------------------------------------------------------
	// Bitwise operations, used by the operator impls.

	pub(crate) fn try_bitand(&self, rhs: &Self) -> Result<Self, Error> {
		let mut out = Self::new_zeroed();
		ll::and(out.limbs_mut(), self.limbs(), rhs.limbs());
		Ok(out)
	}

	pub(crate) fn try_bitor(&self, rhs: &Self) -> Result<Self, Error> {
		let mut out = Self::new_zeroed();
		ll::or(out.limbs_mut(), self.limbs(), rhs.limbs());
		Ok(out)
	}

	pub(crate) fn try_bitxor(&self, rhs: &Self) -> Result<Self, Error> {
		let mut out = Self::new_zeroed();
		ll::xor(out.limbs_mut(), self.limbs(), rhs.limbs());
		Ok(out)
	}
}

impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> Clone for Uint<BITS, LIMBS, S, K> {
	#[inline]
	fn clone(&self) -> Self {
		Self { limbs: self.limbs.clone(), safety: PhantomData }
	}

	#[inline]
	fn clone_from(&mut self, source: &Self) {
		self.limbs.clone_from(&source.limbs);
	}
}

impl<const BITS: usize, const LIMBS: usize, S: Safety> Copy for Uint<BITS, LIMBS, S, Local> {}

impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> Default for Uint<BITS, LIMBS, S, K> {
	#[inline]
	fn default() -> Self {
		Self::zero()
	}
}
