use super::{is_zero, Limb};

/// Copies `src` into `dst`.
///
/// Widening zero-fills the high limbs of `dst`. Narrowing drops the high limbs of `src`
/// and returns `true` if any of them was non-zero.
#[inline]
pub fn assign(dst: &mut [Limb], src: &[Limb]) -> bool {
	if dst.len() >= src.len() {
		dst[..src.len()].copy_from_slice(src);
		dst[src.len()..].fill(Limb::ZERO);
		false
	} else {
		let (kept, dropped) = src.split_at(dst.len());
		dst.copy_from_slice(kept);
		!is_zero(dropped)
	}
}

/// Sets `dst` to the single limb `value`.
#[inline]
pub fn assign_limb(dst: &mut [Limb], value: Limb) -> bool {
	match dst.split_first_mut() {
		Some((first, rest)) => {
			*first = value;
			rest.fill(Limb::ZERO);
			false
		},
		None => value.is_not_zero(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testvec;

	#[test]
	fn test_assign() {
		let mut r = testvec![9, 9, 9];
		assert_eq!(assign(&mut r, &testvec![1, 2]), false);
		assert_eq!(r, testvec![1, 2, 0]);

		let mut r = testvec![9, 9];
		assert_eq!(assign(&mut r, &testvec![1, 2, 0]), false);
		assert_eq!(r, testvec![1, 2]);

		let mut r = testvec![9, 9];
		assert_eq!(assign(&mut r, &testvec![1, 2, 3]), true);
		assert_eq!(r, testvec![1, 2]);

		let mut r: Vec<Limb> = testvec![];
		assert_eq!(assign(&mut r, &testvec![0]), false);
	}

	#[test]
	fn test_assign_limb() {
		let mut r = testvec![9, 9];
		assert_eq!(assign_limb(&mut r, Limb(4)), false);
		assert_eq!(r, testvec![4, 0]);

		let mut r: Vec<Limb> = testvec![];
		assert_eq!(assign_limb(&mut r, Limb(4)), true);
		assert_eq!(assign_limb(&mut r, Limb(0)), false);
	}
}
