//! Operator sugar over the `try_*` methods.
//!
//! Operators have no error channel. Whatever the `try_*` method reports turns into a panic,
//! which only happens in checked mode, plus division by zero in either mode. Combining two
//! operands gives a result that is checked if either of them is.
//!
//! Binary operators take operands of the same width. To mix widths, widen the narrower
//! operand first with `try_cast()`, or use compound assignment, which accepts any width
//! on the right:
//!
//! ```
//! use limbint::{Checked, U128, U64};
//!
//! let a = U128::<Checked>::max_value().wrapping_shr(1);
//! let b = U64::<Checked>::one();
//! let wide: U128<Checked> = b.try_cast().unwrap();
//! let sum = a + wide;
//! assert_eq!(sum, 1_u128 << 127);
//!
//! let mut c = U128::<Checked>::one();
//! c += b;
//! assert_eq!(c, 2_u32);
//! ```

use std::ops::{
	Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
	Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use super::Uint;
use crate::error::{raise, Error};
use crate::safety::Safety;
use crate::storage::StorageKind;

#[inline(always)]
#[track_caller]
fn unwrap_or_raise<T>(result: Result<T, Error>) -> T {
	match result {
		Ok(value) => value,
		Err(err) => raise(err),
	}
}

macro_rules! impl_binary_op {
	($Trait:ident, $method:ident, $TraitAssign:ident, $method_assign:ident, $try_op:ident) => {
		impl<'a, const B: usize, const L: usize, S: Safety, T: Safety, K: StorageKind>
			$Trait<&'a Uint<B, L, T, K>> for &'a Uint<B, L, S, K>
		{
			type Output = Uint<B, L, S::Or<T>, K>;

			#[inline]
			#[track_caller]
			fn $method(self, rhs: &'a Uint<B, L, T, K>) -> Self::Output {
				unwrap_or_raise(self.as_safety::<S::Or<T>>().$try_op(rhs.as_safety()))
			}
		}

		impl<const B: usize, const L: usize, S: Safety, T: Safety, K: StorageKind>
			$Trait<Uint<B, L, T, K>> for Uint<B, L, S, K>
		{
			type Output = Uint<B, L, S::Or<T>, K>;

			#[inline]
			#[track_caller]
			fn $method(self, rhs: Uint<B, L, T, K>) -> Self::Output {
				<&Self as $Trait<&Uint<B, L, T, K>>>::$method(&self, &rhs)
			}
		}

		impl<'a, const B: usize, const L: usize, S: Safety, T: Safety, K: StorageKind>
			$Trait<&'a Uint<B, L, T, K>> for Uint<B, L, S, K>
		{
			type Output = Uint<B, L, S::Or<T>, K>;

			#[inline]
			#[track_caller]
			fn $method(self, rhs: &'a Uint<B, L, T, K>) -> Self::Output {
				<&Self as $Trait<&Uint<B, L, T, K>>>::$method(&self, rhs)
			}
		}

		impl<'a, const B: usize, const L: usize, S: Safety, T: Safety, K: StorageKind>
			$Trait<Uint<B, L, T, K>> for &'a Uint<B, L, S, K>
		{
			type Output = Uint<B, L, S::Or<T>, K>;

			#[inline]
			#[track_caller]
			fn $method(self, rhs: Uint<B, L, T, K>) -> Self::Output {
				<&Uint<B, L, S, K> as $Trait<&Uint<B, L, T, K>>>::$method(self, &rhs)
			}
		}

		// The right-hand side may have any width. It is first assigned to the width of `self`,
		// which is an error in checked mode if that drops set bits.
		impl<
			'a,
			const B: usize,
			const L: usize,
			S: Safety,
			K: StorageKind,
			const B2: usize,
			const L2: usize,
			T: Safety,
			K2: StorageKind,
		> $TraitAssign<&'a Uint<B2, L2, T, K2>> for Uint<B, L, S, K>
		{
			#[inline]
			#[track_caller]
			fn $method_assign(&mut self, rhs: &'a Uint<B2, L2, T, K2>) {
				let result = Uint::<B, L, S::Or<T>, K>::assign_operand(rhs)
					.and_then(|rhs| self.as_safety::<S::Or<T>>().$try_op(&rhs));
				*self = unwrap_or_raise(result).into_safety();
			}
		}

		impl<
			const B: usize,
			const L: usize,
			S: Safety,
			K: StorageKind,
			const B2: usize,
			const L2: usize,
			T: Safety,
			K2: StorageKind,
		> $TraitAssign<Uint<B2, L2, T, K2>> for Uint<B, L, S, K>
		{
			#[inline]
			#[track_caller]
			fn $method_assign(&mut self, rhs: Uint<B2, L2, T, K2>) {
				<Self as $TraitAssign<&Uint<B2, L2, T, K2>>>::$method_assign(self, &rhs)
			}
		}
	};
}

impl_binary_op!(Add, add, AddAssign, add_assign, try_add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, try_sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, try_mul);
impl_binary_op!(Div, div, DivAssign, div_assign, try_div);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, try_rem);
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, try_bitand);
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, try_bitor);
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, try_bitxor);

//--------------------------------------------------------------------------------------------------

impl<const B: usize, const L: usize, S: Safety, K: StorageKind> Not for Uint<B, L, S, K> {
	type Output = Self;

	#[inline]
	fn not(self) -> Self {
		self.inverted()
	}
}

impl<const B: usize, const L: usize, S: Safety, K: StorageKind> Not for &Uint<B, L, S, K> {
	type Output = Uint<B, L, S, K>;

	#[inline]
	fn not(self) -> Self::Output {
		self.inverted()
	}
}

impl<const B: usize, const L: usize, S: Safety, K: StorageKind> Shl<usize> for Uint<B, L, S, K> {
	type Output = Self;

	#[inline]
	#[track_caller]
	fn shl(self, n: usize) -> Self {
		unwrap_or_raise(self.try_shl(n))
	}
}

impl<const B: usize, const L: usize, S: Safety, K: StorageKind> Shl<usize> for &Uint<B, L, S, K> {
	type Output = Uint<B, L, S, K>;

	#[inline]
	#[track_caller]
	fn shl(self, n: usize) -> Self::Output {
		unwrap_or_raise(self.try_shl(n))
	}
}

impl<const B: usize, const L: usize, S: Safety, K: StorageKind> ShlAssign<usize> for Uint<B, L, S, K> {
	#[inline]
	#[track_caller]
	fn shl_assign(&mut self, n: usize) {
		unwrap_or_raise(self.try_shl_assign(n))
	}
}

impl<const B: usize, const L: usize, S: Safety, K: StorageKind> Shr<usize> for Uint<B, L, S, K> {
	type Output = Self;

	#[inline]
	fn shr(self, n: usize) -> Self {
		self.wrapping_shr(n)
	}
}

impl<const B: usize, const L: usize, S: Safety, K: StorageKind> Shr<usize> for &Uint<B, L, S, K> {
	type Output = Uint<B, L, S, K>;

	#[inline]
	fn shr(self, n: usize) -> Self::Output {
		self.wrapping_shr(n)
	}
}

impl<const B: usize, const L: usize, S: Safety, K: StorageKind> ShrAssign<usize> for Uint<B, L, S, K> {
	#[inline]
	fn shr_assign(&mut self, n: usize) {
		self.shr_assign_wrapping(n)
	}
}
