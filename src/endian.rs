//! Fixed-width byte encoding.
//!
//! A value of `BITS` bits takes exactly `BYTES = ceil(BITS / 8)` bytes. Encoding into a
//! longer buffer writes only the first `BYTES` bytes.

use crate::error::{assert, Error};
use crate::limb::{Limb, Value};
use crate::safety::Safety;
use crate::storage::StorageKind;
use crate::uint::Uint;

impl<const BITS: usize, const LIMBS: usize, S: Safety, K: StorageKind> Uint<BITS, LIMBS, S, K> {
	/// Writes the value into `buf[..BYTES]`, least significant byte first.
	/// `OutOfRange` error if `buf` is shorter than `BYTES`.
	pub fn to_little_endian(&self, buf: &mut [u8]) -> Result<usize, Error> {
		assert(buf.len() >= Self::BYTES, || {
			Error::new_out_of_range("Uint::to_little_endian(): buffer too small")
		})?;

		let out = &mut buf[..Self::BYTES];
		for (chunk, limb) in out.chunks_mut(Limb::BYTES).zip(self.limbs()) {
			let bytes = limb.0.to_le_bytes();
			chunk.copy_from_slice(&bytes[..chunk.len()]);
		}
		Ok(Self::BYTES)
	}

	/// Writes the value into `buf[..BYTES]`, most significant byte first.
	/// `OutOfRange` error if `buf` is shorter than `BYTES`.
	pub fn to_big_endian(&self, buf: &mut [u8]) -> Result<usize, Error> {
		assert(buf.len() >= Self::BYTES, || {
			Error::new_out_of_range("Uint::to_big_endian(): buffer too small")
		})?;

		let out = &mut buf[..Self::BYTES];
		for (chunk, limb) in out.rchunks_mut(Limb::BYTES).zip(self.limbs()) {
			let bytes = limb.0.to_be_bytes();
			chunk.copy_from_slice(&bytes[Limb::BYTES - chunk.len()..]);
		}
		Ok(Self::BYTES)
	}

	/// Reads a value from `buf[..BYTES]`, least significant byte first.
	///
	/// `OutOfRange` error if `buf` is shorter than `BYTES`, or in checked mode if the top
	/// byte has bits set above `BITS`.
	pub fn from_little_endian(buf: &[u8]) -> Result<Self, Error> {
		assert(buf.len() >= Self::BYTES, || {
			Error::new_out_of_range("Uint::from_little_endian(): buffer too small")
		})?;

		let mut out = Self::new_zeroed();
		for (chunk, limb) in buf[..Self::BYTES].chunks(Limb::BYTES).zip(out.limbs_mut()) {
			let mut bytes = [0_u8; Limb::BYTES];
			bytes[..chunk.len()].copy_from_slice(chunk);
			*limb = Limb(Value::from_le_bytes(bytes));
		}
		out.finish_decode("Uint::from_little_endian(): value too large")
	}

	/// Reads a value from `buf[..BYTES]`, most significant byte first.
	///
	/// `OutOfRange` error if `buf` is shorter than `BYTES`, or in checked mode if the top
	/// byte has bits set above `BITS`.
	pub fn from_big_endian(buf: &[u8]) -> Result<Self, Error> {
		assert(buf.len() >= Self::BYTES, || {
			Error::new_out_of_range("Uint::from_big_endian(): buffer too small")
		})?;

		let mut out = Self::new_zeroed();
		for (chunk, limb) in buf[..Self::BYTES].rchunks(Limb::BYTES).zip(out.limbs_mut()) {
			let mut bytes = [0_u8; Limb::BYTES];
			bytes[Limb::BYTES - chunk.len()..].copy_from_slice(chunk);
			*limb = Limb(Value::from_be_bytes(bytes));
		}
		out.finish_decode("Uint::from_big_endian(): value too large")
	}

	fn finish_decode(mut self, msg: &'static str) -> Result<Self, Error> {
		let excess = self.clear_excess();
		if S::CHECKED && excess {
			return Err(Error::new_out_of_range(msg));
		}
		Ok(self)
	}
}
