use super::{is_zero, limb_at, nonzero_len, shifted_limb, Limb};

/// Returns the number of bits needed to store the number, 0 for zero.
/// High zero limbs are allowed.
#[inline]
pub fn bit_width(a: &[Limb]) -> usize {
	let len = nonzero_len(a);
	if len == 0 { 0 } else { (len - 1) * Limb::BITS + a[len - 1].bit_width() }
}

/// Number of zero bits above the highest set bit, counting all of `a`.
#[inline]
pub fn countl_zero(a: &[Limb]) -> usize {
	a.len() * Limb::BITS - bit_width(a)
}

#[inline]
pub fn countl_one(a: &[Limb]) -> usize {
	let mut count = 0;
	for limb in a.iter().rev() {
		let ones = limb.leading_ones();
		count += ones;
		if ones < Limb::BITS {
			break;
		}
	}
	count
}

/// Number of zero bits below the lowest set bit. All bits of `a` if it is zero.
#[inline]
pub fn countr_zero(a: &[Limb]) -> usize {
	let mut count = 0;
	for limb in a.iter() {
		if limb.is_not_zero() {
			return count + limb.trailing_zeros();
		}
		count += Limb::BITS;
	}
	count
}

#[inline]
pub fn countr_one(a: &[Limb]) -> usize {
	let mut count = 0;
	for limb in a.iter() {
		let ones = limb.trailing_ones();
		count += ones;
		if ones < Limb::BITS {
			break;
		}
	}
	count
}

#[inline]
pub fn popcount(a: &[Limb]) -> usize {
	a.iter().map(|limb| limb.count_ones()).sum()
}

#[inline]
pub fn has_single_bit(a: &[Limb]) -> bool {
	popcount(a) == 1
}

/// Returns bit `i` of `a`, `false` past its end.
#[inline]
pub fn bit(a: &[Limb], i: usize) -> bool {
	((limb_at(a, i / Limb::BITS) >> (i % Limb::BITS)).0 & 1) != 0
}

/// Sets bit `i` of `a` to `value`.
/// Returns `false` if the bit is past the end of `a` and nothing was written.
#[inline]
pub fn set_bit(a: &mut [Limb], i: usize, value: bool) -> bool {
	match a.get_mut(i / Limb::BITS) {
		Some(limb) => {
			let mask = Limb::ONE << (i % Limb::BITS);
			*limb = if value { *limb | mask } else { *limb & !mask };
			true
		},
		None => false,
	}
}

/// Clears every bit of `a` at position `bits` and above.
/// Returns `true` if any of them was set.
#[inline]
pub fn truncate_bits(a: &mut [Limb], bits: usize) -> bool {
	let full = bits / Limb::BITS;
	if full >= a.len() {
		return false;
	}
	let keep = Limb::low_mask(bits % Limb::BITS);
	let (head, tail) = a[full..].split_at_mut(1);
	let excess = (head[0] & !keep).is_not_zero() || !is_zero(tail);
	head[0] = head[0] & keep;
	tail.fill(Limb::ZERO);
	excess
}

/// Calculates:
///     out = a << n
///
/// With `CHECK`, returns `true` if any set bit of `a` is shifted past the end of `out`.
/// Shifting by the full width of `out` or more clears it.
#[inline(never)]
pub fn shl<const CHECK: bool>(out: &mut [Limb], a: &[Limb], n: usize) -> bool {
	let out_bits = out.len() * Limb::BITS;
	let overflow = CHECK && {
		let width = bit_width(a);
		width != 0 && width.saturating_add(n) > out_bits
	};
	if n >= out_bits {
		out.fill(Limb::ZERO);
		return overflow;
	}

	let limb_shift = n / Limb::BITS;
	let bit_shift = n % Limb::BITS;
	for i in 0..out.len() {
		out[i] = shifted_limb(a, limb_shift, bit_shift, i);
	}
	overflow
}

/// Calculates:
///     out <<= n
#[inline(never)]
pub fn shl_inplace<const CHECK: bool>(out: &mut [Limb], n: usize) -> bool {
	let out_bits = out.len() * Limb::BITS;
	let overflow = CHECK && {
		let width = bit_width(out);
		width != 0 && width.saturating_add(n) > out_bits
	};
	if n >= out_bits {
		out.fill(Limb::ZERO);
		return overflow;
	}

	// Limb `i` only depends on limbs at or below `i`, so go from the top.
	let limb_shift = n / Limb::BITS;
	let bit_shift = n % Limb::BITS;
	for i in (0..out.len()).rev() {
		out[i] = shifted_limb(out, limb_shift, bit_shift, i);
	}
	overflow
}

/// Limb `i` of `a >> (limb_shift * Limb::BITS + bit_shift)`.
#[inline(always)]
fn shr_limb(a: &[Limb], limb_shift: usize, bit_shift: usize, i: usize) -> Limb {
	let j = i.saturating_add(limb_shift);
	let cur = limb_at(a, j);
	if bit_shift == 0 {
		return cur;
	}
	let above = limb_at(a, j.saturating_add(1));
	(cur >> bit_shift) | (above << (Limb::BITS - bit_shift))
}

/// Calculates:
///     out = a >> n
///
/// With `CHECK`, returns `true` if a set bit is shifted out at the bottom, or if the
/// result does not fit `out`.
#[inline(never)]
pub fn shr<const CHECK: bool>(out: &mut [Limb], a: &[Limb], n: usize) -> bool {
	let overflow = CHECK && {
		let lost = !is_zero(a) && countr_zero(a) < n;
		let too_wide = bit_width(a).saturating_sub(n) > out.len() * Limb::BITS;
		lost || too_wide
	};

	let limb_shift = n / Limb::BITS;
	let bit_shift = n % Limb::BITS;
	for i in 0..out.len() {
		out[i] = shr_limb(a, limb_shift, bit_shift, i);
	}
	overflow
}

/// Calculates:
///     out >>= n
#[inline(never)]
pub fn shr_inplace<const CHECK: bool>(out: &mut [Limb], n: usize) -> bool {
	let overflow = CHECK && !is_zero(out) && countr_zero(out) < n;

	// Limb `i` only depends on limbs at or above `i`, so go from the bottom.
	let limb_shift = n / Limb::BITS;
	let bit_shift = n % Limb::BITS;
	for i in 0..out.len() {
		out[i] = shr_limb(out, limb_shift, bit_shift, i);
	}
	overflow
}

/// Calculates:
///     out = a & b
#[inline]
pub fn and(out: &mut [Limb], a: &[Limb], b: &[Limb]) {
	for (i, limb) in out.iter_mut().enumerate() {
		*limb = limb_at(a, i) & limb_at(b, i);
	}
}

/// Calculates:
///     out = a | b
///
/// Returns `true` if a set bit of `a` or `b` lies past the end of `out`.
#[inline]
pub fn or(out: &mut [Limb], a: &[Limb], b: &[Limb]) -> bool {
	let n = out.len();
	for (i, limb) in out.iter_mut().enumerate() {
		*limb = limb_at(a, i) | limb_at(b, i);
	}
	!is_zero(a.get(n..).unwrap_or(&[])) || !is_zero(b.get(n..).unwrap_or(&[]))
}

/// Calculates:
///     out = a ^ b
///
/// Returns `true` if the exact result has a set bit past the end of `out`.
#[inline]
pub fn xor(out: &mut [Limb], a: &[Limb], b: &[Limb]) -> bool {
	let n = out.len();
	for (i, limb) in out.iter_mut().enumerate() {
		*limb = limb_at(a, i) ^ limb_at(b, i);
	}
	let len = a.len().max(b.len());
	(n..len).any(|i| (limb_at(a, i) ^ limb_at(b, i)).is_not_zero())
}

/// Inverts every bit of `out`.
#[inline]
pub fn flip(out: &mut [Limb]) {
	for limb in out.iter_mut() {
		*limb = !*limb;
	}
}
