//! Type-level safety modes.
//!
//! `Checked` turns overflow, truncation and lost bits into `Error`s. `Wrapping` keeps the
//! truncated result, matching native modulo 2**BITS arithmetic. Both markers are zero-sized,
//! so values that differ only in the mode share one layout.

mod sealed {
	pub trait Sealed {}
}

pub trait Safety:
	sealed::Sealed + Copy + Default + std::fmt::Debug + Eq + std::hash::Hash + Send + Sync + 'static
{
	const CHECKED: bool;
	const NAME: &'static str;

	/// Mode of a result combining `Self` with `T`: checked if either of them is.
	type Or<T: Safety>: Safety;
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Checked;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Wrapping;

impl sealed::Sealed for Checked {}
impl sealed::Sealed for Wrapping {}

impl Safety for Checked {
	const CHECKED: bool = true;
	const NAME: &'static str = "Checked";

	type Or<T: Safety> = Checked;
}

impl Safety for Wrapping {
	const CHECKED: bool = false;
	const NAME: &'static str = "Wrapping";

	type Or<T: Safety> = T;
}

#[cfg(test)]
mod tests {
	use super::*;

	fn checked<S: Safety>() -> bool {
		S::CHECKED
	}

	#[test]
	fn test_or() {
		assert!(checked::<<Checked as Safety>::Or<Wrapping>>());
		assert!(checked::<<Wrapping as Safety>::Or<Checked>>());
		assert!(checked::<<Checked as Safety>::Or<Checked>>());
		assert!(!checked::<<Wrapping as Safety>::Or<Wrapping>>());
	}
}
