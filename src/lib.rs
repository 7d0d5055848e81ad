//! Fixed-width unsigned integers of arbitrary precision.
//!
//! `Uint` is generic over its width in bits and over a safety mode (`Checked` or `Wrapping`).
//! Arithmetic runs on the limb kernels in `ll`, which report overflow as flags. The `Uint`
//! layer turns those flags into `Error`s in checked mode and keeps the wrapped result
//! otherwise.
//!
//! Use `uint_type!` or the predefined aliases to name a width:
//!
//! ```
//! use limbint::{Checked, U128};
//!
//! let a: U128<Checked> = "0xffff_ffff_ffff_ffff".parse().unwrap();
//! let b = a + U128::<Checked>::one();
//! assert_eq!(b.to_hex(false), "10000000000000000");
//! ```

#![allow(clippy::needless_range_loop)]

pub mod base_conv;
pub mod endian;
pub mod error;
pub mod limb;
pub mod ll;
pub mod number_theory;
pub mod random;
pub mod safety;
pub mod storage;
pub mod tables;
pub mod uint;

pub use error::{DivStatus, Error, ErrorKind};
pub use limb::Limb;
pub use number_theory::{gcd, lcm, miller_rabin, miller_rabin_default, powm};
pub use random::UniformUint;
pub use safety::{Checked, Safety, Wrapping};
pub use storage::{Heap, Local, StorageKind};
pub use uint::{Native, Uint};

#[macro_export]
macro_rules! testvec {
	($($x:expr),* $(,)?) => {
		vec![$($crate::limb::Limb($x)),*]
	};
}

/// Names the `Uint` type with `$bits` bits.
///
/// The limb count and the storage kind are derived from the width. The safety mode
/// defaults to `Wrapping`.
#[macro_export]
macro_rules! uint_type {
	($bits:expr) => {
		$crate::uint_type!($bits, $crate::safety::Wrapping)
	};
	($bits:expr, $safety:ty) => {
		$crate::uint::Uint<
			{ $bits },
			{ $crate::storage::limbs_for_bits($bits) },
			$safety,
			<$crate::storage::Select<
				{ $crate::storage::fits_local($crate::storage::limbs_for_bits($bits)) },
			> as $crate::storage::Selector>::Kind,
		>
	};
}

pub type U8<S = Wrapping> = uint_type!(8, S);
pub type U16<S = Wrapping> = uint_type!(16, S);
pub type U24<S = Wrapping> = uint_type!(24, S);
pub type U32<S = Wrapping> = uint_type!(32, S);
pub type U64<S = Wrapping> = uint_type!(64, S);
pub type U128<S = Wrapping> = uint_type!(128, S);
pub type U256<S = Wrapping> = uint_type!(256, S);
pub type U512<S = Wrapping> = uint_type!(512, S);
pub type U1024<S = Wrapping> = uint_type!(1024, S);
pub type U2048<S = Wrapping> = uint_type!(2048, S);
pub type U4096<S = Wrapping> = uint_type!(4096, S);
pub type U8192<S = Wrapping> = uint_type!(8192, S);
