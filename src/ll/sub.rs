use super::{is_zero, limb_at, Limb};
use crate::limb::{SignedDouble, Value};

/// Calculates:
///     out = a - (b << (shift * Limb::BITS))
///
/// Uses a signed double-width accumulator over every limb position any operand reaches.
/// Returns `true` if the exact difference is negative. The stored value is then the
/// two's complement of the magnitude, truncated to `out`.
#[inline(never)]
pub fn sub(out: &mut [Limb], a: &[Limb], b: &[Limb], shift: usize) -> bool {
	let n = out.len();
	let len = n.max(a.len()).max(b.len() + shift);

	let mut acc: SignedDouble = 0;
	for i in 0..len {
		let y = if i >= shift { limb_at(b, i - shift) } else { Limb::ZERO };
		acc += limb_at(a, i).as_signed_double() - y.as_signed_double();
		if i < n {
			out[i] = Limb::from_signed_low_half(acc);
		}
		acc >>= Limb::BITS;
	}

	acc != 0
}

/// Calculates:
///     out -= b << (shift * Limb::BITS)
///
/// Returns `true` if the exact difference is negative.
#[inline(never)]
pub fn sub_inplace(out: &mut [Limb], b: &[Limb], shift: usize) -> bool {
	let n = out.len();
	if shift >= n {
		return !is_zero(b);
	}

	let mut borrow = false;
	for i in shift..n {
		let y = limb_at(b, i - shift);
		if y.is_zero() && !borrow && i - shift >= b.len() {
			break;
		}
		(out[i], borrow) = Limb::subb(out[i], y, borrow);
	}

	// Any part of `b` past the end of `out` is larger than all of `out`.
	borrow || !is_zero(b.get(n - shift..).unwrap_or(&[]))
}

/// Calculates:
///     out -= b
///
/// Stops as soon as the borrow dies. Returns `true` on underflow.
#[inline]
pub fn sub_inplace_limb(out: &mut [Limb], b: Limb) -> bool {
	let mut borrow = b;
	for limb in out.iter_mut() {
		if borrow.is_zero() {
			return false;
		}
		let c;
		(*limb, c) = limb.overflowing_sub(borrow);
		borrow = Limb(c as Value);
	}
	borrow.is_not_zero()
}

/// Decrements `out` by one. Returns `true` if it wrapped around from zero.
#[inline]
pub fn decrement(out: &mut [Limb]) -> bool {
	sub_inplace_limb(out, Limb::ONE)
}

/// Copies the current value of `out` into `old`, then decrements `out`.
#[inline]
pub fn post_decrement(out: &mut [Limb], old: &mut [Limb]) -> bool {
	super::assign(old, out);
	decrement(out)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testvec;

	const MAX: Value = Limb::MAX.0;

	#[test]
	fn test_sub() {
		let mut r = testvec![9, 9, 9];
		assert_eq!(sub(&mut r, &testvec![5, 7, 9], &testvec![4, 5, 6], 0), false);
		assert_eq!(r, testvec![1, 2, 3]);

		let mut r = testvec![9, 9, 9];
		assert_eq!(sub(&mut r, &testvec![0, 0, 1], &testvec![1], 0), false);
		assert_eq!(r, testvec![MAX, MAX, 0]);

		let mut r = testvec![9, 9];
		assert_eq!(sub(&mut r, &testvec![0], &testvec![1], 0), true);
		assert_eq!(r, testvec![MAX, MAX]);

		let mut r = testvec![9, 9];
		assert_eq!(sub(&mut r, &testvec![3, 5], &testvec![4], 1), false);
		assert_eq!(r, testvec![3, 1]);
		assert_eq!(sub(&mut r, &testvec![3, 5], &testvec![6], 1), true);
		assert_eq!(r, testvec![3, MAX]);
	}

	#[test]
	fn test_sub_wide_operands() {
		// b is longer than the output but the difference still fits
		let mut r = testvec![9];
		assert_eq!(sub(&mut r, &testvec![5, 1], &testvec![6, 1], 0), true);
		assert_eq!(r, testvec![MAX]);

		let mut r = testvec![9];
		assert_eq!(sub(&mut r, &testvec![6, 1], &testvec![5, 1], 0), false);
		assert_eq!(r, testvec![1]);
	}

	#[test]
	fn test_sub_inplace() {
		let mut r = testvec![0, 0, 1];
		assert_eq!(sub_inplace(&mut r, &testvec![1], 0), false);
		assert_eq!(r, testvec![MAX, MAX, 0]);

		let mut r = testvec![0, 1];
		assert_eq!(sub_inplace(&mut r, &testvec![2], 1), true);
		assert_eq!(r, testvec![0, MAX]);

		let mut r = testvec![1, 2];
		assert_eq!(sub_inplace(&mut r, &testvec![0, 1], 1), true);
		assert_eq!(r, testvec![1, 2]);
	}

	#[test]
	fn test_sub_inplace_limb() {
		let mut r = testvec![0, 5];
		assert_eq!(sub_inplace_limb(&mut r, Limb(1)), false);
		assert_eq!(r, testvec![MAX, 4]);

		let mut r = testvec![1, 0];
		assert_eq!(sub_inplace_limb(&mut r, Limb(2)), true);
		assert_eq!(r, testvec![MAX, MAX]);
	}

	#[test]
	fn test_decrement() {
		let mut r = testvec![0, 1];
		let mut old = testvec![0, 0];
		assert_eq!(post_decrement(&mut r, &mut old), false);
		assert_eq!(old, testvec![0, 1]);
		assert_eq!(r, testvec![MAX, 0]);

		let mut r = testvec![0, 0];
		assert_eq!(decrement(&mut r), true);
		assert_eq!(r, testvec![MAX, MAX]);
	}
}
