use super::{assign, bit_width, is_zero, set_bit, shifted_limb, Limb};
use crate::error::DivStatus;

/// r -= b << bits. Returns `true` if the exact difference is negative.
fn sub_shifted_inplace(r: &mut [Limb], b: &[Limb], bits: usize) -> bool {
	let limb_shift = bits / Limb::BITS;
	let bit_shift = bits % Limb::BITS;
	let end = b.len() + limb_shift + 1;

	let mut borrow = false;
	for i in limb_shift..r.len().min(end) {
		let y = shifted_limb(b, limb_shift, bit_shift, i);
		(r[i], borrow) = Limb::subb(r[i], y, borrow);
	}
	for i in r.len()..end {
		borrow |= shifted_limb(b, limb_shift, bit_shift, i).is_not_zero();
	}
	if !borrow {
		return false;
	}
	// The borrow has to ripple through the rest of `r` to restore it exactly.
	for limb in r.iter_mut().skip(end) {
		let b;
		(*limb, b) = Limb::subb(*limb, Limb::ZERO, true);
		if !b {
			return true;
		}
	}
	true
}

/// r += b << bits. Used to undo a failed `sub_shifted_inplace()`.
fn add_shifted_inplace(r: &mut [Limb], b: &[Limb], bits: usize) {
	let limb_shift = bits / Limb::BITS;
	let bit_shift = bits % Limb::BITS;
	let end = b.len() + limb_shift + 1;

	let mut carry = false;
	for i in limb_shift..r.len() {
		if i >= end && !carry {
			break;
		}
		let y = shifted_limb(b, limb_shift, bit_shift, i);
		(r[i], carry) = Limb::addc(r[i], y, carry);
	}
}

/// Binary long division.
///
/// Calculates:
///     q = a / b
///     r = a % b
///
/// Returns:
///     DivStatus::DivisionByZero if `b` is zero. `q` and `r` are left unchanged.
///     DivStatus::Overflow if `a` does not fit `r`, or a quotient bit lands past the end of `q`.
///     In the second case `q` holds the truncated quotient and `r` the exact remainder.
#[inline(never)]
pub fn div(q: &mut [Limb], r: &mut [Limb], a: &[Limb], b: &[Limb]) -> DivStatus {
	let bw = bit_width(b);
	if bw == 0 {
		return DivStatus::DivisionByZero;
	}

	q.fill(Limb::ZERO);
	if assign(r, a) {
		return DivStatus::Overflow;
	}

	let mut aw = bit_width(r);
	if aw < bw {
		return DivStatus::Ok;
	}

	let mut overflow = false;
	let mut shift = aw - bw;
	loop {
		if sub_shifted_inplace(r, b, shift) {
			add_shifted_inplace(r, b, shift);
			if shift == 0 {
				break;
			}
			shift -= 1;
			continue;
		}

		overflow |= !set_bit(q, shift, true);

		// Everything above `aw` is still zero, only rescan the limbs the subtraction touched.
		let touched = aw.div_ceil(Limb::BITS);
		aw = bit_width(&r[..touched]);
		if aw < bw || shift == 0 {
			break;
		}
		shift = (shift - 1).min(aw - bw);
	}

	if overflow { DivStatus::Overflow } else { DivStatus::Ok }
}

/// Division by a single limb.
///
/// Calculates:
///     q = a / b
///     return a % b
///
/// Walks `a` from the most significant limb down, dividing the running remainder and the
/// current limb as one double-width value. The partial quotient always fits one limb.
#[inline(never)]
pub fn div_limb(q: &mut [Limb], a: &[Limb], b: Limb) -> (DivStatus, Limb) {
	if b.is_zero() {
		return (DivStatus::DivisionByZero, Limb::ZERO);
	}

	let mut overflow = false;
	let mut rem = Limb::ZERO;
	for i in (0..a.len()).rev() {
		let quot;
		(quot, rem) = Limb::div_wide(rem, a[i], b);
		if let Some(out) = q.get_mut(i) {
			*out = quot;
		} else if quot.is_not_zero() {
			overflow = true;
		}
	}
	if q.len() > a.len() {
		q[a.len()..].fill(Limb::ZERO);
	}

	let status = if overflow { DivStatus::Overflow } else { DivStatus::Ok };
	(status, rem)
}

/// Calculates:
///     a /= b
///     return a % b
#[inline]
pub fn div_limb_inplace(a: &mut [Limb], b: Limb) -> (DivStatus, Limb) {
	if b.is_zero() {
		return (DivStatus::DivisionByZero, Limb::ZERO);
	}

	let mut rem = Limb::ZERO;
	for limb in a.iter_mut().rev() {
		(*limb, rem) = Limb::div_wide(rem, *limb, b);
	}
	(DivStatus::Ok, rem)
}

/// Returns `a % b`, or `None` if `b` is zero.
#[inline]
pub fn rem_limb(a: &[Limb], b: Limb) -> Option<Limb> {
	if b.is_zero() {
		return None;
	}
	if is_zero(a) {
		return Some(Limb::ZERO);
	}

	let mut rem = Limb::ZERO;
	for limb in a.iter().rev() {
		(_, rem) = Limb::div_wide(rem, *limb, b);
	}
	Some(rem)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::limb::Value;
	use crate::ll::{add_inplace, mul};
	use crate::testvec;
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	const MAX: Value = Limb::MAX.0;

	fn check_identity(a: &[Limb], b: &[Limb]) {
		let n = a.len().max(b.len());
		let mut q = vec![Limb::ZERO; n];
		let mut r = vec![Limb::ZERO; n];
		assert_eq!(div(&mut q, &mut r, a, b), DivStatus::Ok);

		// q * b + r == a, and r < b
		let mut back = vec![Limb::ZERO; n + 1];
		assert_eq!(mul(&mut back, &q, b), false);
		assert_eq!(add_inplace(&mut back, &r, 0), false);
		assert!(crate::ll::compare_equal(&back, a));
		assert_eq!(crate::ll::compare(&r, b, 0), std::cmp::Ordering::Less);
	}

	#[test]
	fn test_div_small() {
		let mut q = testvec![9, 9];
		let mut r = testvec![9, 9];
		assert_eq!(div(&mut q, &mut r, &testvec![100], &testvec![7]), DivStatus::Ok);
		assert_eq!(q, testvec![14, 0]);
		assert_eq!(r, testvec![2, 0]);

		assert_eq!(div(&mut q, &mut r, &testvec![5], &testvec![7]), DivStatus::Ok);
		assert_eq!(q, testvec![0, 0]);
		assert_eq!(r, testvec![5, 0]);

		assert_eq!(div(&mut q, &mut r, &testvec![0, 1], &testvec![2]), DivStatus::Ok);
		assert_eq!(q, testvec![1 << (Limb::BITS - 1), 0]);
		assert_eq!(r, testvec![0, 0]);
	}

	#[test]
	fn test_div_by_zero() {
		let mut q = testvec![9];
		let mut r = testvec![9];
		assert_eq!(div(&mut q, &mut r, &testvec![5], &testvec![0, 0]), DivStatus::DivisionByZero);
		assert_eq!(q, testvec![9]);
		assert_eq!(r, testvec![9]);
	}

	#[test]
	fn test_div_overflow() {
		// quotient needs two limbs
		let mut q = testvec![9];
		let mut r = testvec![9, 9];
		assert_eq!(div(&mut q, &mut r, &testvec![0, 1], &testvec![1]), DivStatus::Overflow);
		assert_eq!(r, testvec![0, 0]);

		// dividend does not fit the remainder
		let mut q = testvec![9, 9];
		let mut r = testvec![9];
		assert_eq!(div(&mut q, &mut r, &testvec![0, 1], &testvec![1]), DivStatus::Overflow);
	}

	#[test]
	fn test_div_identity() {
		check_identity(&testvec![MAX, MAX, MAX], &testvec![MAX]);
		check_identity(&testvec![MAX, MAX, MAX], &testvec![MAX, MAX]);
		check_identity(&testvec![0, 0, 1], &testvec![MAX, 1]);
		check_identity(&testvec![123, 0, 0, 7], &testvec![3, 5, 1]);
		check_identity(&testvec![1], &testvec![1]);

		let mut rng = StdRng::seed_from_u64(0);
		for _ in 0..200 {
			let an = rng.gen_range(1..=5);
			let bn = rng.gen_range(1..=an);
			let a: Vec<Limb> = (0..an).map(|_| Limb(rng.r#gen())).collect();
			let mut b: Vec<Limb> = (0..bn).map(|_| Limb(rng.r#gen())).collect();
			if is_zero(&b) {
				b[0] = Limb::ONE;
			}
			check_identity(&a, &b);
		}
	}

	#[test]
	fn test_div_limb() {
		let mut q = testvec![9, 9, 9];
		let (status, rem) = div_limb(&mut q, &testvec![MAX, MAX], Limb(MAX));
		assert_eq!(status, DivStatus::Ok);
		assert_eq!(q, testvec![1, 1, 0]);
		assert_eq!(rem, Limb::ZERO);

		let (status, rem) = div_limb(&mut q, &testvec![100], Limb(7));
		assert_eq!(status, DivStatus::Ok);
		assert_eq!(q, testvec![14, 0, 0]);
		assert_eq!(rem, Limb(2));

		let mut q = testvec![9];
		let (status, rem) = div_limb(&mut q, &testvec![3, 1], Limb(1));
		assert_eq!(status, DivStatus::Overflow);
		assert_eq!(rem, Limb::ZERO);

		let (status, _) = div_limb(&mut q, &testvec![3, 1], Limb(0));
		assert_eq!(status, DivStatus::DivisionByZero);
	}

	#[test]
	fn test_div_limb_inplace() {
		let mut a = testvec![0, 1];
		assert_eq!(div_limb_inplace(&mut a, Limb(2)), (DivStatus::Ok, Limb::ZERO));
		assert_eq!(a, testvec![1 << (Limb::BITS - 1), 0]);

		let mut a = testvec![7, 0];
		assert_eq!(div_limb_inplace(&mut a, Limb(4)), (DivStatus::Ok, Limb(3)));
		assert_eq!(a, testvec![1, 0]);
	}

	#[test]
	fn test_rem_limb() {
		assert_eq!(rem_limb(&testvec![100, 0], Limb(7)), Some(Limb(2)));
		assert_eq!(rem_limb(&[], Limb(7)), Some(Limb(0)));
		assert_eq!(rem_limb(&testvec![1], Limb(0)), None);
	}
}
