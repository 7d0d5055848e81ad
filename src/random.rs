//! Uniform sampling of `Uint` values.

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::error::Error;
use crate::limb::Limb;
use crate::ll;
use crate::safety::Safety;
use crate::storage::StorageKind;
use crate::uint::Uint;

fn fill_random<R: Rng + ?Sized>(limbs: &mut [Limb], rng: &mut R) {
	for limb in limbs {
		*limb = Limb(rng.r#gen());
	}
}

/// Uniform distribution over the inclusive range `lo ..= hi`.
///
/// Candidates are assembled from random limbs below the top limb of `hi - lo` plus a bounded
/// draw for the top limb, and rejected while they exceed `hi - lo`. Each draw is accepted
/// with probability above 1/2.
#[derive(Clone, Debug)]
pub struct UniformUint<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> {
	lo: Uint<BITS, LIMBS, S, K>,
	range: Uint<BITS, LIMBS, S, K>,
}

impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> UniformUint<BITS, LIMBS, S, K> {
	/// `InvalidArgument` error if `lo > hi`.
	pub fn new(lo: &Uint<BITS, LIMBS, S, K>, hi: &Uint<BITS, LIMBS, S, K>) -> Result<Self, Error> {
		crate::error::assert(lo <= hi, || {
			Error::new_invalid_argument("UniformUint::new(): empty range")
		})?;
		Ok(Self { lo: lo.clone(), range: hi.wrapping_sub(lo) })
	}

	#[inline]
	pub fn low(&self) -> &Uint<BITS, LIMBS, S, K> {
		&self.lo
	}

	#[inline]
	pub fn high(&self) -> Uint<BITS, LIMBS, S, K> {
		self.lo.wrapping_add(&self.range)
	}

	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Uint<BITS, LIMBS, S, K> {
		if self.range.is_zero() {
			return self.lo.clone();
		}

		let mut candidate = Uint::<BITS, LIMBS, S, K>::new_zeroed();
		if self.range == Uint::<BITS, LIMBS, S, K>::max_value() {
			fill_random(candidate.limbs_mut(), rng);
			candidate.clear_excess();
			return candidate;
		}

		let top = ll::nonzero_len(self.range.limbs()) - 1;
		let top_bound = self.range.limbs()[top].0;
		loop {
			let limbs = candidate.limbs_mut();
			fill_random(&mut limbs[..top], rng);
			limbs[top] = Limb(rng.gen_range(0..=top_bound));
			if candidate <= self.range {
				break;
			}
			log::trace!("UniformUint::sample(): rejected {:#x}", candidate);
		}
		self.lo.wrapping_add(&candidate)
	}

	/// Samples with the thread-local generator.
	pub fn sample_default(&self) -> Uint<BITS, LIMBS, S, K> {
		self.sample(&mut rand::thread_rng())
	}
}

impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> Distribution<Uint<BITS, LIMBS, S, K>>
	for UniformUint<BITS, LIMBS, S, K>
{
	#[inline]
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Uint<BITS, LIMBS, S, K> {
		UniformUint::sample(self, rng)
	}
}

/// Uniform over the whole domain `0 ..= 2**BITS - 1`.
impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> Distribution<Uint<BITS, LIMBS, S, K>>
	for Standard
{
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Uint<BITS, LIMBS, S, K> {
		let mut out = Uint::<BITS, LIMBS, S, K>::new_zeroed();
		fill_random(out.limbs_mut(), rng);
		out.clear_excess();
		out
	}
}

#[cfg(test)]
mod tests {
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	use super::*;
	use crate::error::ErrorKind;
	use crate::{Checked, U128, U24, U256, U8};

	#[test]
	fn test_empty_range() {
		let lo = U128::<Checked>::try_from(10_u32).unwrap();
		let hi = U128::<Checked>::try_from(9_u32).unwrap();
		assert_eq!(UniformUint::new(&lo, &hi).unwrap_err().kind, ErrorKind::InvalidArgument);
	}

	#[test]
	fn test_single_value() {
		let mut rng = StdRng::seed_from_u64(1);
		let x = U256::<Checked>::try_from(u128::MAX).unwrap();
		let dist = UniformUint::new(&x, &x).unwrap();
		for _ in 0..10 {
			assert_eq!(dist.sample(&mut rng), x);
		}
	}

	#[test]
	fn test_bounds() {
		let mut rng = StdRng::seed_from_u64(2);
		let lo = U128::<Checked>::try_from(1_000_u32).unwrap();
		let hi = U128::<Checked>::try_from((1_u128 << 70) + 5).unwrap();
		let dist = UniformUint::new(&lo, &hi).unwrap();
		assert_eq!(dist.high(), hi);
		for _ in 0..1000 {
			let x = dist.sample(&mut rng);
			assert!(x >= lo && x <= hi);
		}
	}

	#[test]
	fn test_small_range_hits_every_value() {
		let mut rng = StdRng::seed_from_u64(3);
		let lo = U24::<Checked>::try_from(100_u32).unwrap();
		let hi = U24::<Checked>::try_from(109_u32).unwrap();
		let dist = UniformUint::new(&lo, &hi).unwrap();
		let mut seen = [0_usize; 10];
		for _ in 0..2000 {
			let x: u32 = dist.sample(&mut rng).to_native().unwrap();
			seen[(x - 100) as usize] += 1;
		}
		assert!(seen.iter().all(|&n| n > 100), "{:?}", seen);
	}

	#[test]
	fn test_full_domain() {
		let mut rng = StdRng::seed_from_u64(4);
		let dist = UniformUint::new(&U8::<Checked>::zero(), &U8::<Checked>::max_value()).unwrap();
		let mut seen = [false; 256];
		for _ in 0..10_000 {
			let x: U8<Checked> = rng.sample(&dist);
			let x: u8 = x.to_native().unwrap();
			seen[x as usize] = true;
		}
		assert!(seen.iter().all(|&b| b));
	}

	#[test]
	fn test_standard() {
		let mut rng = StdRng::seed_from_u64(5);
		let mut high_bit = false;
		for _ in 0..100 {
			let x: U24 = rng.r#gen();
			assert!(x.bit_width() <= 24);
			high_bit |= x.bit(23);
		}
		assert!(high_bit);
	}
}
