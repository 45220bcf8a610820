use core::any::type_name;
use std::panic::{self, AssertUnwindSafe};

use crate::{adopt_and_return, AdoptError, Adoptable, LeaveEmpty, Placeholder, Vacant};

/// A slot that is either [`Present`](`Occupancy::Present`) or [`Empty`](`Occupancy::Empty`).
///
/// Adopting an [`Occupancy`] never aborts: if the transform panics, the unwind continues and the
/// slot is left [`Empty`](`Occupancy::Empty`). Check [`is_present`](`Occupancy::is_present`) (or
/// use the [`Option`]-like accessors) before relying on the value after a caught panic.
///
/// ```
/// use std::panic::{catch_unwind, AssertUnwindSafe};
/// use commandeer::Occupancy;
///
/// let mut slot = Occupancy::new(String::from("draft"));
/// let unwound = catch_unwind(AssertUnwindSafe(|| {
/// 	slot.adopt_and_replace(|_| panic!("rejected"));
/// }));
/// assert!(unwound.is_err());
/// assert!(slot.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Occupancy<T> {
	/// Holds a value.
	Present(T),
	/// Holds nothing, either because nothing was put in yet or because a transform panicked.
	Empty,
}

impl<T> Adoptable for Occupancy<T> {
	type Placeholder = Vacant;
	type OnFailure = LeaveEmpty;
}

impl<T> Placeholder<Occupancy<T>> for Vacant {
	fn conjure() -> Occupancy<T> {
		Occupancy::Empty
	}
}

impl<T> Default for Occupancy<T> {
	fn default() -> Self {
		Self::Empty
	}
}

impl<T> From<Option<T>> for Occupancy<T> {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Empty, Self::Present)
	}
}

impl<T> From<Occupancy<T>> for Option<T> {
	fn from(value: Occupancy<T>) -> Self {
		value.into_option()
	}
}

impl<T> Occupancy<T> {
	/// Creates a [`Present`](`Occupancy::Present`) slot.
	pub fn new(value: T) -> Self {
		Self::Present(value)
	}

	/// Creates an [`Empty`](`Occupancy::Empty`) slot.
	#[must_use]
	pub fn empty() -> Self {
		Self::Empty
	}

	#[must_use]
	pub fn is_present(&self) -> bool {
		matches!(self, Self::Present(_))
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	pub fn get(&self) -> Option<&T> {
		match self {
			Self::Present(value) => Some(value),
			Self::Empty => None,
		}
	}

	pub fn get_mut(&mut self) -> Option<&mut T> {
		match self {
			Self::Present(value) => Some(value),
			Self::Empty => None,
		}
	}

	/// Takes the value out, leaving the slot [`Empty`](`Occupancy::Empty`).
	pub fn take(&mut self) -> Option<T> {
		crate::swap::loan(self, Self::Empty).into_option()
	}

	/// Puts `value` in, returning the previous value if there was one.
	pub fn insert(&mut self, value: T) -> Option<T> {
		crate::swap::loan(self, Self::Present(value)).into_option()
	}

	pub fn into_option(self) -> Option<T> {
		match self {
			Self::Present(value) => Some(value),
			Self::Empty => None,
		}
	}

	/// Replaces the value with the result of `transform`, if there is one.
	///
	/// Returns whether `transform` was called. An [`Empty`](`Occupancy::Empty`) slot stays empty.
	///
	/// # Panics
	///
	/// Iff `transform` panics, in which case the slot is left [`Empty`](`Occupancy::Empty`).
	pub fn adopt_and_replace(&mut self, transform: impl FnOnce(T) -> T) -> bool {
		adopt_and_return(self, |occupancy| match occupancy {
			Self::Present(value) => (Self::Present(transform(value)), true),
			Self::Empty => {
				tracing::debug!(slot = type_name::<T>(), "Slot is empty. Skipped transform.");
				(Self::Empty, false)
			}
		})
	}

	/// Like [`adopt_and_replace`](`Occupancy::adopt_and_replace`), but reports both failure modes
	/// as [`AdoptError`].
	///
	/// A panic in `transform` is caught and returned as [`AdoptError::TransformFailed`], with the
	/// slot left [`Empty`](`Occupancy::Empty`). Only the slot is guaranteed to be consistent
	/// afterwards: anything else `transform` captured is subject to the usual
	/// [unwind safety](`std::panic::UnwindSafe`) caveats.
	///
	/// # Errors
	///
	/// [`AdoptError::Empty`] iff the slot was empty (`transform` isn't called),
	/// [`AdoptError::TransformFailed`] iff `transform` panicked.
	pub fn try_adopt_and_replace(
		&mut self,
		transform: impl FnOnce(T) -> T,
	) -> Result<&mut T, AdoptError> {
		if self.is_empty() {
			return Err(AdoptError::Empty);
		}
		panic::catch_unwind(AssertUnwindSafe(|| self.adopt_and_replace(transform)))
			.map_err(AdoptError::TransformFailed)?;
		self.get_mut().ok_or(AdoptError::Empty)
	}
}
