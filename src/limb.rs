cfg_if::cfg_if! {
	if #[cfg(feature = "limb-8")] {
		pub type Value = u8;
		pub type Double = u16;
		pub type SignedDouble = i16;
	} else if #[cfg(feature = "limb-16")] {
		pub type Value = u16;
		pub type Double = u32;
		pub type SignedDouble = i32;
	} else if #[cfg(feature = "limb-32")] {
		pub type Value = u32;
		pub type Double = u64;
		pub type SignedDouble = i64;
	} else {
		pub type Value = u64;
		pub type Double = u128;
		pub type SignedDouble = i128;
	}
}

#[derive(Clone, Copy, Default, PartialEq, Debug, Eq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Limb(pub Value);

impl Limb {
	pub const BITS: usize = Value::BITS as usize;
	pub const BYTES: usize = std::mem::size_of::<Value>();

	pub const ZERO: Limb = Self(0);
	pub const ONE: Limb = Self(1);
	pub const MAX: Limb = Self(Value::MAX);

	#[inline]
	pub const fn make_double(low: Limb, high: Limb) -> Double {
		assert!(std::mem::size_of::<Double>() >= 2 * std::mem::size_of::<Value>());
		(low.0 as Double) | ((high.0 as Double) << Limb::BITS)
	}

	#[inline]
	pub const fn as_signed_double(self) -> SignedDouble {
		self.0 as SignedDouble
	}

	#[inline]
	pub const fn from_low_half(value: Double) -> Limb {
		Limb(value as Value)
	}

	/// Low limb of a signed accumulator. The bit pattern is kept, the sign is dropped.
	#[inline]
	pub const fn from_signed_low_half(value: SignedDouble) -> Limb {
		Limb(value as Value)
	}

	#[inline]
	pub const fn from_bool(value: bool) -> Limb {
		Limb(value as Value)
	}

	#[inline]
	pub const fn leading_zeros(self) -> usize {
		self.0.leading_zeros() as usize
	}

	#[inline]
	pub const fn leading_ones(self) -> usize {
		self.0.leading_ones() as usize
	}

	#[inline]
	pub const fn trailing_zeros(self) -> usize {
		self.0.trailing_zeros() as usize
	}

	#[inline]
	pub const fn trailing_ones(self) -> usize {
		self.0.trailing_ones() as usize
	}

	#[inline]
	pub const fn count_ones(self) -> usize {
		self.0.count_ones() as usize
	}

	/// Returns number of bits needed to store the value.
	/// If the value is zero, it returns 0.
	#[inline]
	pub const fn bit_width(self) -> usize {
		Self::BITS - self.0.leading_zeros() as usize
	}

	/// Mask with the lowest `n` bits set. `n` must not exceed `BITS`.
	#[inline]
	pub const fn low_mask(n: usize) -> Limb {
		if n >= Self::BITS { Self::MAX } else { Limb(((1 as Value) << n) - 1) }
	}

	#[inline]
	pub const fn overflowing_add(self, other: Limb) -> (Limb, bool) {
		let (value, overflow) = self.0.overflowing_add(other.0);
		(Limb(value), overflow)
	}

	#[inline]
	pub const fn overflowing_sub(self, other: Limb) -> (Limb, bool) {
		let (value, overflow) = self.0.overflowing_sub(other.0);
		(Limb(value), overflow)
	}

	/// Returns:
	///     (value, carry)
	/// Where:
	///     value = (a + b + carry) % 2**BITS
	///     carry = (a + b + carry) > MAX
	#[inline]
	pub const fn addc(a: Limb, b: Limb, carry: bool) -> (Limb, bool) {
		let (sum, overflow1) = a.0.overflowing_add(b.0);
		let (sum, overflow2) = sum.overflowing_add(carry as Value);
		(Limb(sum), overflow1 | overflow2)
	}

	/// Returns:
	///     (value, borrow)
	/// Where:
	///     value = (a - b - borrow) % 2**BITS
	///     borrow = (a - b - borrow) < 0
	#[inline]
	pub const fn subb(a: Limb, b: Limb, borrow: bool) -> (Limb, bool) {
		let (diff, borrow1) = a.0.overflowing_sub(b.0);
		let (diff, borrow2) = diff.overflowing_sub(borrow as Value);
		(Limb(diff), borrow1 | borrow2)
	}

	/// Returns:
	///     [low, high]
	/// Where:
	///     big_value = a * b + c + d
	///     low = big_value % 2**BITS
	///     high = big_value / 2**BITS
	#[inline]
	pub const fn mul(a: Limb, b: Limb, c: Limb, d: Limb) -> [Limb; 2] {
		let t = (a.0 as Double) * (b.0 as Double) + (c.0 as Double) + (d.0 as Double);
		[Limb(t as Value), Limb((t >> Limb::BITS) as Value)]
	}

	/// Returns:
	///     (quot, rem)
	/// Where:
	///     quot = (high * 2**BITS + low) / divisor
	///     rem = (high * 2**BITS + low) % divisor
	/// Preconditions:
	///     divisor != 0
	///     high < divisor, so the quotient fits one limb
	#[inline]
	pub const fn div_wide(high: Limb, low: Limb, divisor: Limb) -> (Limb, Limb) {
		debug_assert!(divisor.0 != 0 && high.0 < divisor.0);
		let n = Self::make_double(low, high);
		let d = divisor.0 as Double;
		(Limb((n / d) as Value), Limb((n % d) as Value))
	}

	#[inline]
	pub const fn is_zero(self) -> bool {
		self.0 == 0
	}

	#[inline]
	pub const fn is_not_zero(self) -> bool {
		self.0 != 0
	}
}

impl std::ops::Not for Limb {
	type Output = Self;

	#[inline]
	fn not(self) -> Self {
		Self(!self.0)
	}
}

impl std::ops::BitXor for Limb {
	type Output = Self;

	#[inline]
	fn bitxor(self, rhs: Self) -> Self {
		Self(self.0 ^ rhs.0)
	}
}

impl std::ops::BitAnd for Limb {
	type Output = Self;

	#[inline]
	fn bitand(self, rhs: Self) -> Self {
		Self(self.0 & rhs.0)
	}
}

impl std::ops::BitOr for Limb {
	type Output = Self;

	#[inline]
	fn bitor(self, rhs: Self) -> Self {
		Self(self.0 | rhs.0)
	}
}

impl std::ops::Shl<usize> for Limb {
	type Output = Self;

	#[inline]
	fn shl(self, rhs: usize) -> Self {
		Self(self.0 << rhs)
	}
}

impl std::ops::Shr<usize> for Limb {
	type Output = Self;

	#[inline]
	fn shr(self, rhs: usize) -> Self {
		Self(self.0 >> rhs)
	}
}

impl std::ops::Mul for Limb {
	type Output = Double;

	#[inline]
	fn mul(self, rhs: Self) -> Double {
		(self.0 as Double) * (rhs.0 as Double)
	}
}

impl std::cmp::PartialEq<Value> for Limb {
	#[inline]
	fn eq(&self, other: &Value) -> bool {
		self.0 == *other
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_addc_subb() {
		assert_eq!(Limb::addc(Limb::MAX, Limb(1), false), (Limb::ZERO, true));
		assert_eq!(Limb::addc(Limb::MAX, Limb::ZERO, true), (Limb::ZERO, true));
		assert_eq!(Limb::addc(Limb(2), Limb(3), true), (Limb(6), false));
		assert_eq!(Limb::subb(Limb::ZERO, Limb(1), false), (Limb::MAX, true));
		assert_eq!(Limb::subb(Limb(5), Limb(3), true), (Limb(1), false));
	}

	#[test]
	fn test_mul_double() {
		let [low, high] = Limb::mul(Limb::MAX, Limb::MAX, Limb::MAX, Limb::MAX);
		assert_eq!(low, Limb::MAX);
		assert_eq!(high, Limb::MAX);

		let [low, high] = Limb::mul(Limb(3), Limb(4), Limb(5), Limb::ZERO);
		assert_eq!(low, Limb(17));
		assert_eq!(high, Limb::ZERO);
	}

	#[test]
	fn test_div_wide() {
		let (q, r) = Limb::div_wide(Limb(1), Limb::ZERO, Limb(2));
		assert_eq!(q, Limb(1 << (Limb::BITS - 1)));
		assert_eq!(r, Limb::ZERO);

		let (q, r) = Limb::div_wide(Limb::ZERO, Limb(100), Limb(7));
		assert_eq!(q, Limb(14));
		assert_eq!(r, Limb(2));
	}

	#[test]
	fn test_bit_width() {
		assert_eq!(Limb::ZERO.bit_width(), 0);
		assert_eq!(Limb(1).bit_width(), 1);
		assert_eq!(Limb::MAX.bit_width(), Limb::BITS);
		assert_eq!(Limb::low_mask(0), Limb::ZERO);
		assert_eq!(Limb::low_mask(3), Limb(7));
		assert_eq!(Limb::low_mask(Limb::BITS), Limb::MAX);
	}
}
