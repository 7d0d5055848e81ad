#[derive(PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Error {
	pub kind: ErrorKind,
	pub message: &'static str,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, thiserror::Error)]
pub enum ErrorKind {
	/// A checked result does not fit the destination.
	#[error("overflow")]
	Overflow,

	/// Division or remainder by zero. Reported in both safety modes.
	#[error("division by zero")]
	DivisionByZero,

	/// A value does not fit a native integer or a buffer is too short.
	#[error("out of range")]
	OutOfRange,

	/// Malformed text, an invalid digit, or a base outside 2 ..= 36.
	#[error("invalid argument")]
	InvalidArgument,
}

impl std::fmt::Debug for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Error").field("kind", &self.kind).field("message", &self.message).finish()
	}
}

impl Error {
	pub fn new(kind: ErrorKind, msg: &'static str) -> Self {
		Self { kind, message: msg }
	}

	pub fn new_overflow(msg: &'static str) -> Self {
		Self::new(ErrorKind::Overflow, msg)
	}

	pub fn new_division_by_zero(msg: &'static str) -> Self {
		Self::new(ErrorKind::DivisionByZero, msg)
	}

	pub fn new_out_of_range(msg: &'static str) -> Self {
		Self::new(ErrorKind::OutOfRange, msg)
	}

	pub fn new_invalid_argument(msg: &'static str) -> Self {
		Self::new(ErrorKind::InvalidArgument, msg)
	}
}

/// Outcome of the division kernels.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum DivStatus {
	Ok,
	DivisionByZero,
	/// The quotient or the remainder does not fit its output.
	Overflow,
}

impl DivStatus {
	/// Converts a kernel status into a result.
	/// Quotient overflow is only an error when `checked` is set.
	#[inline]
	pub fn into_result(self, checked: bool, msg: &'static str) -> Result<(), Error> {
		match self {
			DivStatus::Ok => Ok(()),
			DivStatus::DivisionByZero => {
				cold_path();
				log::debug!("{}: division by zero", msg);
				Err(Error::new_division_by_zero(msg))
			},
			DivStatus::Overflow => {
				if checked {
					cold_path();
					log::debug!("{}: quotient overflow", msg);
					Err(Error::new_overflow(msg))
				} else {
					Ok(())
				}
			},
		}
	}
}

#[cold]
#[inline(always)]
pub(crate) fn cold_path() {}

#[inline(always)]
#[must_use]
pub fn assert(what: bool, err: fn() -> Error) -> Result<(), Error> {
	if what {
		Ok(())
	} else {
		cold_path();
		Err(err())
	}
}

/// Panics with `err`. Used by the operator impls, which have no error channel.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn raise(err: Error) -> ! {
	panic!("{}", err)
}
