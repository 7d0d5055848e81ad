//! Kernels over raw limb sequences.
//!
//! Every function accepts inputs whose lengths may differ from each other and
//! from the output. Shorter inputs are treated as zero-extended. Kernels never
//! return `Error`: overflow, underflow and truncation are reported as `bool`
//! or `DivStatus` and the caller decides what they mean.

mod add;
mod assign;
mod bits;
mod cmp;
mod div;
mod mul;
mod sub;

pub use add::*;
pub use assign::*;
pub use bits::*;
pub use cmp::*;
pub use div::*;
pub use mul::*;
pub use sub::*;

pub use crate::limb::Limb;

/// Limb `i` of `a`, or zero past its end.
#[inline(always)]
pub fn limb_at(a: &[Limb], i: usize) -> Limb {
	match a.get(i) {
		Some(limb) => *limb,
		None => Limb::ZERO,
	}
}

/// Number of limbs up to and including the highest non-zero one.
#[inline]
pub fn nonzero_len(a: &[Limb]) -> usize {
	let mut len = a.len();
	while len > 0 && a[len - 1].is_zero() {
		len -= 1;
	}
	len
}

/// Limb `i` of `a << (limb_shift * Limb::BITS + bit_shift)`.
/// `bit_shift` must be less than `Limb::BITS`.
#[inline(always)]
pub(crate) fn shifted_limb(a: &[Limb], limb_shift: usize, bit_shift: usize, i: usize) -> Limb {
	if i < limb_shift {
		return Limb::ZERO;
	}
	let j = i - limb_shift;
	let cur = limb_at(a, j);
	if bit_shift == 0 {
		return cur;
	}
	let below = if j > 0 { limb_at(a, j - 1) } else { Limb::ZERO };
	(cur << bit_shift) | (below >> (Limb::BITS - bit_shift))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testvec;

	#[test]
	fn test_nonzero_len() {
		assert_eq!(nonzero_len(&[]), 0);
		assert_eq!(nonzero_len(&testvec![0, 0]), 0);
		assert_eq!(nonzero_len(&testvec![1, 0, 2, 0]), 3);
	}

	#[test]
	fn test_shifted_limb() {
		let a = testvec![1, 1];
		assert_eq!(shifted_limb(&a, 0, 0, 1), Limb(1));
		assert_eq!(shifted_limb(&a, 1, 0, 0), Limb::ZERO);
		assert_eq!(shifted_limb(&a, 1, 0, 2), Limb(1));
		assert_eq!(shifted_limb(&a, 0, 1, 1), Limb(2));

		let a = testvec![Limb::MAX.0];
		assert_eq!(shifted_limb(&a, 0, 1, 0), Limb(Limb::MAX.0 - 1));
		assert_eq!(shifted_limb(&a, 0, 1, 1), Limb(1));
		assert_eq!(shifted_limb(&a, 0, 1, 2), Limb::ZERO);
	}
}
