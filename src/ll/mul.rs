use super::{add_inplace_limb, is_zero, limb_at, nonzero_len, Limb};
use crate::limb::Double;

/// Schoolbook multiplication.
///
/// Calculates:
///     out = a * b
///
/// Returns `true` if the product does not fit `out`.
#[inline(never)]
pub fn mul(out: &mut [Limb], a: &[Limb], b: &[Limb]) -> bool {
	out.fill(Limb::ZERO);

	let a_len = nonzero_len(a);
	let b_len = nonzero_len(b);
	if a_len == 0 || b_len == 0 {
		return false;
	}

	let n = out.len();

	// The product of the two top limbs is non-zero and lands at `a_len + b_len - 2`.
	let mut overflow = a_len + b_len - 2 >= n;

	for j in 0..b_len.min(n) {
		let y = b[j];
		if y.is_zero() {
			continue;
		}

		let limit = a_len.min(n - j);
		let mut carry = Limb::ZERO;
		for i in 0..limit {
			[out[i + j], carry] = Limb::mul(a[i], y, out[i + j], carry);
		}
		if limit < a_len {
			overflow = true;
		}

		let top = j + limit;
		if top < n {
			overflow |= add_inplace_limb(&mut out[top..], carry);
		} else {
			overflow |= carry.is_not_zero();
		}
	}

	overflow
}

/// Calculates:
///     out = a * b
///
/// Returns `true` if the product does not fit `out`.
#[inline(never)]
pub fn mul_limb(out: &mut [Limb], a: &[Limb], b: Limb) -> bool {
	if b.is_zero() {
		out.fill(Limb::ZERO);
		return false;
	}

	let n = out.len();
	let mut acc: Double = 0;
	for i in 0..n {
		acc += limb_at(a, i) * b;
		out[i] = Limb::from_low_half(acc);
		acc >>= Limb::BITS;
	}

	acc != 0 || !is_zero(a.get(n..).unwrap_or(&[]))
}

/// Calculates:
///     out *= b
///
/// Returns `true` if the product does not fit `out`.
#[inline]
pub fn mul_inplace_limb(out: &mut [Limb], b: Limb) -> bool {
	if b.is_zero() {
		out.fill(Limb::ZERO);
		return false;
	}

	let mut acc: Double = 0;
	for limb in out.iter_mut() {
		acc += *limb * b;
		*limb = Limb::from_low_half(acc);
		acc >>= Limb::BITS;
	}

	acc != 0
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::limb::Value;
	use crate::testvec;

	const MAX: Value = Limb::MAX.0;

	#[test]
	fn test_mul() {
		let mut r = testvec![9, 9, 9];
		assert_eq!(mul(&mut r, &testvec![3], &testvec![4]), false);
		assert_eq!(r, testvec![12, 0, 0]);

		let mut r = testvec![9, 9, 9, 9];
		assert_eq!(mul(&mut r, &testvec![MAX, MAX], &testvec![MAX, MAX]), false);
		assert_eq!(r, testvec![1, 0, MAX - 1, MAX]);

		let mut r = testvec![9, 9, 9];
		assert_eq!(mul(&mut r, &testvec![MAX, MAX], &testvec![MAX, MAX]), true);
		assert_eq!(r, testvec![1, 0, MAX - 1]);

		let mut r = testvec![9, 9];
		assert_eq!(mul(&mut r, &testvec![0, 0], &testvec![MAX]), false);
		assert_eq!(r, testvec![0, 0]);
	}

	#[test]
	fn test_mul_overflow_high_limbs() {
		// the products of the high limbs land past the output
		let mut r = testvec![9, 9];
		assert_eq!(mul(&mut r, &testvec![0, 1], &testvec![0, 1]), true);
		assert_eq!(r, testvec![0, 0]);

		let mut r = testvec![9, 9];
		assert_eq!(mul(&mut r, &testvec![1, 0, 0], &testvec![0, 1]), false);
		assert_eq!(r, testvec![0, 1]);

		// carry of the top partial product
		let mut r = testvec![9, 9];
		assert_eq!(mul(&mut r, &testvec![MAX, MAX], &testvec![2]), true);
		assert_eq!(r, testvec![MAX - 1, MAX]);
	}

	#[test]
	fn test_mul_limb() {
		let mut r = testvec![9, 9];
		assert_eq!(mul_limb(&mut r, &testvec![MAX], Limb(MAX)), false);
		assert_eq!(r, testvec![1, MAX - 1]);

		let mut r = testvec![9];
		assert_eq!(mul_limb(&mut r, &testvec![MAX], Limb(2)), true);
		assert_eq!(r, testvec![MAX - 1]);

		let mut r = testvec![9];
		assert_eq!(mul_limb(&mut r, &testvec![1, 1], Limb(0)), false);
		assert_eq!(r, testvec![0]);
		assert_eq!(mul_limb(&mut r, &testvec![1, 1], Limb(1)), true);
	}

	#[test]
	fn test_mul_inplace_limb() {
		let mut r = testvec![MAX, 0];
		assert_eq!(mul_inplace_limb(&mut r, Limb(3)), false);
		assert_eq!(r, testvec![MAX - 2, 2]);

		let mut r = testvec![0, MAX];
		assert_eq!(mul_inplace_limb(&mut r, Limb(2)), true);
		assert_eq!(r, testvec![0, MAX - 1]);

		assert_eq!(mul_inplace_limb(&mut r, Limb(0)), false);
		assert_eq!(r, testvec![0, 0]);
	}
}
