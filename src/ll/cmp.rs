use std::cmp::Ordering;

use super::{limb_at, Limb};

#[inline]
pub fn is_zero(a: &[Limb]) -> bool {
	a.iter().all(|limb| limb.is_zero())
}

/// `a == b` with the shorter operand zero-extended.
pub fn compare_equal(a: &[Limb], b: &[Limb]) -> bool {
	let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
	long[..short.len()] == *short && is_zero(&long[short.len()..])
}

/// Three-way comparison of `a` with `b` shifted left by `shift` whole limbs.
pub fn compare(a: &[Limb], b: &[Limb], shift: usize) -> Ordering {
	let len = a.len().max(b.len() + shift);
	for i in (0..len).rev() {
		let x = limb_at(a, i);
		let y = if i >= shift { limb_at(b, i - shift) } else { Limb::ZERO };
		match x.cmp(&y) {
			Ordering::Equal => continue,
			ord => return ord,
		}
	}
	Ordering::Equal
}

/// Compares `a` with a single limb.
pub fn compare_limb(a: &[Limb], b: Limb) -> Ordering {
	if a.is_empty() {
		return Limb::ZERO.cmp(&b);
	}
	if !is_zero(&a[1..]) {
		return Ordering::Greater;
	}
	a[0].cmp(&b)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testvec;

	#[test]
	fn test_compare_equal() {
		assert!(compare_equal(&[], &[]));
		assert!(compare_equal(&testvec![1, 2], &testvec![1, 2, 0, 0]));
		assert!(!compare_equal(&testvec![1, 2], &testvec![1, 2, 0, 1]));
		assert!(!compare_equal(&testvec![1, 3], &testvec![1, 2]));
		assert!(compare_equal(&testvec![0, 0], &[]));
	}

	#[test]
	fn test_compare() {
		assert_eq!(compare(&testvec![1, 2], &testvec![2, 1], 0), Ordering::Greater);
		assert_eq!(compare(&testvec![1], &testvec![0, 1], 0), Ordering::Less);
		assert_eq!(compare(&testvec![5, 0, 0], &testvec![5], 0), Ordering::Equal);

		// b is shifted by one limb
		assert_eq!(compare(&testvec![0, 7], &testvec![7], 1), Ordering::Equal);
		assert_eq!(compare(&testvec![1, 7], &testvec![7], 1), Ordering::Greater);
		assert_eq!(compare(&testvec![9], &testvec![1], 1), Ordering::Less);
		assert_eq!(compare(&testvec![9], &[], 3), Ordering::Greater);
	}

	#[test]
	fn test_compare_limb() {
		assert_eq!(compare_limb(&[], Limb(0)), Ordering::Equal);
		assert_eq!(compare_limb(&[], Limb(1)), Ordering::Less);
		assert_eq!(compare_limb(&testvec![3, 0], Limb(3)), Ordering::Equal);
		assert_eq!(compare_limb(&testvec![0, 1], Limb::MAX), Ordering::Greater);
	}
}
