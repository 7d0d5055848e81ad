//! Placement of a fixed-length limb sequence.
//!
//! `Local` keeps the limbs inline as `[Limb; N]`. `Heap` keeps them behind one owned
//! allocation (`LimbBuf<N>`) that is made once and never resized. The kind is picked per
//! width by `fits_local()`, see the `uint_type!` macro.

use std::alloc::Layout;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use crate::error::cold_path;
use crate::limb::Limb;
use crate::tables::MAX_LOCAL_BYTES;

/// Number of limbs needed to store `bits` bits.
#[inline]
pub const fn limbs_for_bits(bits: usize) -> usize {
	bits.div_ceil(Limb::BITS)
}

/// Whether `limbs` limbs are stored inline.
#[inline]
pub const fn fits_local(limbs: usize) -> bool {
	limbs * Limb::BYTES <= MAX_LOCAL_BYTES
}

pub trait LimbStore: Clone + Send + Sync + 'static {
	fn zeroed() -> Self;
	fn as_slice(&self) -> &[Limb];
	fn as_mut_slice(&mut self) -> &mut [Limb];
}

mod sealed {
	pub trait Sealed {}
}

pub trait StorageKind: sealed::Sealed + 'static {
	const IS_LOCAL: bool;

	type Buf<const N: usize>: LimbStore;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Local;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Heap;

impl sealed::Sealed for Local {}
impl sealed::Sealed for Heap {}

impl StorageKind for Local {
	const IS_LOCAL: bool = true;

	type Buf<const N: usize> = [Limb; N];
}

impl StorageKind for Heap {
	const IS_LOCAL: bool = false;

	type Buf<const N: usize> = LimbBuf<N>;
}

/// Maps the result of `fits_local()` to a storage kind.
pub struct Select<const LOCAL: bool>;

pub trait Selector {
	type Kind: StorageKind;
}

impl Selector for Select<true> {
	type Kind = Local;
}

impl Selector for Select<false> {
	type Kind = Heap;
}

impl<const N: usize> LimbStore for [Limb; N] {
	#[inline]
	fn zeroed() -> Self {
		[Limb::ZERO; N]
	}

	#[inline]
	fn as_slice(&self) -> &[Limb] {
		self
	}

	#[inline]
	fn as_mut_slice(&mut self) -> &mut [Limb] {
		self
	}
}

//--------------------------------------------------------------------------------------------------

/// Heap buffer of exactly `N` limbs.
///
/// `clone()` allocates a fresh buffer and copies the limbs. `clone_from()` copies into the
/// existing buffer without reallocating. Moving transfers the pointer.
pub struct LimbBuf<const N: usize> {
	ptr: NonNull<Limb>,
}

// SAFETY: `LimbBuf` owns its allocation exclusively, like `Box<[Limb; N]>`.
unsafe impl<const N: usize> Send for LimbBuf<N> {}
unsafe impl<const N: usize> Sync for LimbBuf<N> {}

impl<const N: usize> LimbBuf<N> {
	fn layout() -> Layout {
		match Layout::array::<Limb>(N) {
			Ok(layout) => layout,
			Err(_) => {
				cold_path();
				panic!("LimbBuf: {} limbs exceed the address space", N)
			},
		}
	}

	#[inline(never)]
	pub fn new() -> Self {
		if N == 0 {
			return Self { ptr: NonNull::dangling() };
		}

		let layout = Self::layout();
		// SAFETY: `layout` has a non-zero size.
		let ptr = unsafe { std::alloc::alloc_zeroed(layout) };
		match NonNull::new(ptr.cast::<Limb>()) {
			Some(ptr) => Self { ptr },
			None => {
				cold_path();
				std::alloc::handle_alloc_error(layout)
			},
		}
	}
}

impl<const N: usize> Default for LimbBuf<N> {
	fn default() -> Self {
		Self::new()
	}
}

impl<const N: usize> Deref for LimbBuf<N> {
	type Target = [Limb];

	#[inline]
	fn deref(&self) -> &Self::Target {
		// SAFETY: `ptr` points to `N` initialized limbs, or is dangling with `N == 0`.
		unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), N) }
	}
}

impl<const N: usize> DerefMut for LimbBuf<N> {
	#[inline]
	fn deref_mut(&mut self) -> &mut Self::Target {
		// SAFETY: as in `deref()`, and `self` is borrowed mutably.
		unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), N) }
	}
}

impl<const N: usize> Clone for LimbBuf<N> {
	fn clone(&self) -> Self {
		let mut buf = Self::new();
		buf.copy_from_slice(self);
		buf
	}

	fn clone_from(&mut self, source: &Self) {
		self.copy_from_slice(source);
	}
}

impl<const N: usize> Drop for LimbBuf<N> {
	fn drop(&mut self) {
		if N == 0 {
			return;
		}
		// SAFETY: `ptr` was returned by `alloc_zeroed()` with the same layout.
		unsafe { std::alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), Self::layout()) };
	}
}

impl<const N: usize> LimbStore for LimbBuf<N> {
	#[inline]
	fn zeroed() -> Self {
		Self::new()
	}

	#[inline]
	fn as_slice(&self) -> &[Limb] {
		self
	}

	#[inline]
	fn as_mut_slice(&mut self) -> &mut [Limb] {
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_limbs_for_bits() {
		assert_eq!(limbs_for_bits(1), 1);
		assert_eq!(limbs_for_bits(Limb::BITS), 1);
		assert_eq!(limbs_for_bits(Limb::BITS + 1), 2);
		assert_eq!(limbs_for_bits(24), 24_usize.div_ceil(Limb::BITS));
	}

	#[test]
	fn test_fits_local() {
		assert!(fits_local(MAX_LOCAL_BYTES / Limb::BYTES));
		assert!(!fits_local(MAX_LOCAL_BYTES / Limb::BYTES + 1));
	}

	#[test]
	fn test_limb_buf() {
		let mut a = LimbBuf::<4>::new();
		assert_eq!(&a[..], &[Limb::ZERO; 4]);
		a[1] = Limb(7);

		let b = a.clone();
		assert_ne!(a.ptr, b.ptr);
		assert_eq!(&b[..], &a[..]);

		let mut c = LimbBuf::<4>::new();
		let ptr = c.ptr;
		c.clone_from(&a);
		assert_eq!(c.ptr, ptr);
		assert_eq!(c[1], Limb(7));

		let d = c;
		assert_eq!(d.ptr, ptr);
	}

	#[test]
	fn test_limb_buf_empty() {
		let a = LimbBuf::<0>::new();
		assert!(a.is_empty());
		let b = a.clone();
		assert!(b.is_empty());
	}
}
