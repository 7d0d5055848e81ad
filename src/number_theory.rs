//! Number theory on `Uint` values, built from the public `Uint` operations.

use rand::Rng;

use crate::error::Error;
use crate::limb::Limb;
use crate::random::UniformUint;
use crate::safety::Safety;
use crate::storage::StorageKind;
use crate::tables;
use crate::uint::Uint;

/// Greatest common divisor, by Stein's binary algorithm. `gcd(0, 0) == 0`.
///
/// Never fails, so the operations inside are the wrapping ones.
pub fn gcd<const B: usize, const L: usize, S: Safety, K: StorageKind>(
	a: &Uint<B, L, S, K>,
	b: &Uint<B, L, S, K>,
) -> Uint<B, L, S, K> {
	if a.is_zero() {
		return b.clone();
	}
	if b.is_zero() {
		return a.clone();
	}

	let a_zeros = a.trailing_zeros();
	let b_zeros = b.trailing_zeros();
	let shift = a_zeros.min(b_zeros);

	let mut a = a.wrapping_shr(a_zeros);
	let mut b = b.wrapping_shr(b_zeros);
	// `a` and `b` are odd here. `b` becomes even on each subtraction.
	loop {
		if a > b {
			std::mem::swap(&mut a, &mut b);
		}
		b = b.wrapping_sub(&a);
		if b.is_zero() {
			break;
		}
		let zeros = b.trailing_zeros();
		b.shr_assign_wrapping(zeros);
	}
	a.wrapping_shl(shift)
}

/// Least common multiple, `a / gcd(a, b) * b`, and 0 if either operand is 0.
///
/// In checked mode, a result that does not fit is an `Overflow` error.
pub fn lcm<const B: usize, const L: usize, S: Safety, K: StorageKind>(
	a: &Uint<B, L, S, K>,
	b: &Uint<B, L, S, K>,
) -> Result<Uint<B, L, S, K>, Error> {
	if a.is_zero() || b.is_zero() {
		return Ok(Uint::zero());
	}
	a.try_div(&gcd(a, b))?.try_mul(b)
}

/// `base ** exponent % modulus` by square-and-multiply over the exponent bits, lowest first.
///
/// Errors:
///     DivisionByZero if `modulus` is zero
///     Overflow in checked mode, if a product of two residues does not fit `B` bits
///
/// In wrapping mode such products wrap and the result is meaningless, so wrapping callers
/// must keep `modulus` below `2 ** (B / 2)`.
pub fn powm<const B: usize, const L: usize, S: Safety, K: StorageKind>(
	base: &Uint<B, L, S, K>,
	exponent: &Uint<B, L, S, K>,
	modulus: &Uint<B, L, S, K>,
) -> Result<Uint<B, L, S, K>, Error> {
	let mut base = base.try_rem(modulus)?;
	let mut acc = Uint::<B, L, S, K>::one().try_rem(modulus)?;
	for i in 0..exponent.bit_width() {
		if exponent.bit(i) {
			acc = acc.try_mul(&base)?.try_rem(modulus)?;
		}
		base = base.try_mul(&base)?.try_rem(modulus)?;
	}
	Ok(acc)
}

/// Miller-Rabin probabilistic primality test with `trials` random witnesses.
///
/// Returns `false` if `n` is certainly composite, `true` if it is probably prime. Values
/// below 256 are looked up in a table and the answer is exact.
///
/// Errors:
///     Overflow in checked mode, if `n` is too wide for `powm()` at width `B`
pub fn miller_rabin<const B: usize, const L: usize, S: Safety, K: StorageKind, R: Rng + ?Sized>(
	n: &Uint<B, L, S, K>,
	trials: usize,
	rng: &mut R,
) -> Result<bool, Error> {
	if n.bit_width() <= 8 {
		return Ok(tables::is_small_prime(n.to_native_wrapping()));
	}
	if !n.bit(0) {
		return Ok(false);
	}

	let n_minus_1 = n.wrapping_sub(&Uint::one());
	let s = n_minus_1.trailing_zeros();
	let d = n_minus_1.wrapping_shr(s);

	let two = Uint::<B, L, S, K>::one().wrapping_shl(1);
	let witnesses = UniformUint::new(&two, &n_minus_1.wrapping_sub(&Uint::one()))?;

	'trials: for trial in 0..trials {
		let a = witnesses.sample(rng);
		let mut x = powm(&a, &d, n)?;
		if x == Limb::ONE || x == n_minus_1 {
			continue;
		}
		for _ in 1..s {
			x = x.try_mul(&x)?.try_rem(n)?;
			if x == n_minus_1 {
				continue 'trials;
			}
		}
		log::trace!("miller_rabin(): {:#x} is composite, witness {:#x} in trial {}", n, a, trial);
		return Ok(false);
	}
	Ok(true)
}

/// `miller_rabin()` with the thread-local generator.
pub fn miller_rabin_default<const B: usize, const L: usize, S: Safety, K: StorageKind>(
	n: &Uint<B, L, S, K>,
	trials: usize,
) -> Result<bool, Error> {
	miller_rabin(n, trials, &mut rand::thread_rng())
}
