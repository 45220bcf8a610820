use core::{
	any::Any,
	fmt::{self, Debug, Display, Formatter},
};
use std::{error::Error, panic};

/// Why [`Occupancy::try_adopt_and_replace`](`crate::Occupancy::try_adopt_and_replace`) didn't
/// produce a value.
pub enum AdoptError {
	/// The slot was already empty, so there was nothing to adopt.
	Empty,
	/// The transform panicked with this payload. The slot is now empty.
	TransformFailed(Box<dyn Any + Send>),
}

impl AdoptError {
	/// The panic payload, if this is a [`TransformFailed`](`AdoptError::TransformFailed`).
	#[must_use]
	pub fn into_payload(self) -> Option<Box<dyn Any + Send>> {
		match self {
			Self::Empty => None,
			Self::TransformFailed(payload) => Some(payload),
		}
	}

	/// The panic message, if the payload is a string.
	#[must_use]
	pub fn message(&self) -> Option<&str> {
		match self {
			Self::Empty => None,
			Self::TransformFailed(payload) => payload
				.downcast_ref::<&'static str>()
				.copied()
				.or_else(|| payload.downcast_ref::<String>().map(String::as_str)),
		}
	}

	/// Continues the transform's unwind.
	///
	/// # Panics
	///
	/// Always. [`Empty`](`AdoptError::Empty`) panics with this error's [`Display`] text.
	pub fn resume_unwind(self) -> ! {
		match self {
			Self::Empty => panic!("{self}"),
			Self::TransformFailed(payload) => panic::resume_unwind(payload),
		}
	}
}

impl Debug for AdoptError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => f.write_str("Empty"),
			Self::TransformFailed(_) => f
				.debug_tuple("TransformFailed")
				.field(&self.message().unwrap_or("(non-string payload)"))
				.finish(),
		}
	}
}

impl Display for AdoptError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => f.write_str("slot is empty"),
			Self::TransformFailed(_) => match self.message() {
				Some(message) => write!(f, "transform panicked: {message}"),
				None => f.write_str("transform panicked"),
			},
		}
	}
}

impl Error for AdoptError {}
