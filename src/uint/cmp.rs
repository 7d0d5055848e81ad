use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::Uint;
use crate::limb::Limb;
use crate::ll;
use crate::safety::Safety;
use crate::storage::StorageKind;

// Values compare by magnitude across widths and safety modes.
impl<
	const B: usize,
	const L: usize,
	S: Safety,
	K: StorageKind,
	const B2: usize,
	const L2: usize,
	T: Safety,
	K2: StorageKind,
> PartialEq<Uint<B2, L2, T, K2>> for Uint<B, L, S, K>
{
	#[inline]
	fn eq(&self, other: &Uint<B2, L2, T, K2>) -> bool {
		ll::compare_equal(self.limbs(), other.limbs())
	}
}

impl<const B: usize, const L: usize, S: Safety, K: StorageKind> Eq for Uint<B, L, S, K> {}

impl<
	const B: usize,
	const L: usize,
	S: Safety,
	K: StorageKind,
	const B2: usize,
	const L2: usize,
	T: Safety,
	K2: StorageKind,
> PartialOrd<Uint<B2, L2, T, K2>> for Uint<B, L, S, K>
{
	#[inline]
	fn partial_cmp(&self, other: &Uint<B2, L2, T, K2>) -> Option<Ordering> {
		Some(ll::compare(self.limbs(), other.limbs(), 0))
	}
}

impl<const B: usize, const L: usize, S: Safety, K: StorageKind> Ord for Uint<B, L, S, K> {
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		ll::compare(self.limbs(), other.limbs(), 0)
	}
}

impl<const B: usize, const L: usize, S: Safety, K: StorageKind> PartialEq<Limb> for Uint<B, L, S, K> {
	#[inline]
	fn eq(&self, other: &Limb) -> bool {
		ll::compare_limb(self.limbs(), *other) == Ordering::Equal
	}
}

impl<const B: usize, const L: usize, S: Safety, K: StorageKind> PartialOrd<Limb> for Uint<B, L, S, K> {
	#[inline]
	fn partial_cmp(&self, other: &Limb) -> Option<Ordering> {
		Some(ll::compare_limb(self.limbs(), *other))
	}
}

impl<const B: usize, const L: usize, S: Safety, K: StorageKind> Hash for Uint<B, L, S, K> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.limbs().hash(state);
	}
}
