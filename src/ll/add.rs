use super::{is_zero, limb_at, Limb};

/// Calculates:
///     out = a + (b << (shift * Limb::BITS))
///
/// Returns `true` if the exact sum does not fit `out`. That covers a carry out of the top
/// limb, non-zero limbs of `a` past the end of `out`, and limbs of `b` that land past the end
/// of `out` after the shift (including `b` shifted entirely out).
#[inline(never)]
pub fn add(out: &mut [Limb], a: &[Limb], b: &[Limb], shift: usize) -> bool {
	let n = out.len();
	let mut carry = false;
	for i in 0..n {
		let x = limb_at(a, i);
		let y = if i >= shift { limb_at(b, i - shift) } else { Limb::ZERO };
		(out[i], carry) = Limb::addc(x, y, carry);
	}

	let a_rest = a.get(n..).unwrap_or(&[]);
	let b_rest = b.get(n.saturating_sub(shift)..).unwrap_or(&[]);
	carry || !is_zero(a_rest) || !is_zero(b_rest)
}

/// Calculates:
///     out += b << (shift * Limb::BITS)
///
/// Returns `true` on overflow.
#[inline(never)]
pub fn add_inplace(out: &mut [Limb], b: &[Limb], shift: usize) -> bool {
	let n = out.len();
	if shift >= n {
		return !is_zero(b);
	}

	let mut carry = false;
	for i in shift..n {
		let y = limb_at(b, i - shift);
		if y.is_zero() && !carry && i - shift >= b.len() {
			break;
		}
		(out[i], carry) = Limb::addc(out[i], y, carry);
	}

	carry || !is_zero(b.get(n - shift..).unwrap_or(&[]))
}

/// Calculates:
///     out += b
///
/// Stops as soon as the carry dies. Returns `true` on overflow.
#[inline]
pub fn add_inplace_limb(out: &mut [Limb], b: Limb) -> bool {
	let mut carry = b;
	for limb in out.iter_mut() {
		if carry.is_zero() {
			return false;
		}
		let c;
		(*limb, c) = limb.overflowing_add(carry);
		carry = Limb::from_bool(c);
	}
	carry.is_not_zero()
}

/// Increments `out` by one. Returns `true` if it wrapped around to zero.
#[inline]
pub fn increment(out: &mut [Limb]) -> bool {
	add_inplace_limb(out, Limb::ONE)
}

/// Copies the current value of `out` into `old`, then increments `out`.
#[inline]
pub fn post_increment(out: &mut [Limb], old: &mut [Limb]) -> bool {
	super::assign(old, out);
	increment(out)
}
