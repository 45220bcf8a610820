//! What happens to a slot if its transform panics.
//!
//! Each [`Adoptable`](`crate::Adoptable`) type names exactly one [`FailurePolicy`], so the same
//! type can't be adopted under both.

use core::any::type_name;
use std::{process, thread};

use scopeguard::{guard, ScopeGuard};
use unwind_safe::try_eval;

use crate::{Occupancy, Placeholder, Vacant};

mod private {
	pub trait Sealed {}
}

/// Runs a transform while slot `T` holds a placeholder from `P`.
///
/// This trait is sealed. The implementations are [`Abort`] and [`LeaveEmpty`].
pub trait FailurePolicy<T, P: Placeholder<T>>: private::Sealed {
	/// Calls `transform` and applies this policy if it unwinds.
	fn guard<R>(transform: impl FnOnce() -> R) -> R;
}

/// Aborts the process if the transform unwinds.
///
/// Control never returns to code that could observe the placeholder.
pub enum Abort {}
impl private::Sealed for Abort {}

impl<T, P: Placeholder<T>> FailurePolicy<T, P> for Abort {
	fn guard<R>(transform: impl FnOnce() -> R) -> R {
		let bomb = guard(type_name::<T>(), |slot| {
			tracing::error!(slot, "Transform unwound while the slot held a placeholder. Aborting.");
			process::abort();
		});
		let result = transform();
		ScopeGuard::into_inner(bomb);
		result
	}
}

/// Lets the unwind continue, leaving the [`Occupancy`] slot [`Empty`](`Occupancy::Empty`).
///
/// The value that was moved into the transform is dropped by the unwind as usual.
pub enum LeaveEmpty {}
impl private::Sealed for LeaveEmpty {}

impl<T> FailurePolicy<Occupancy<T>, Vacant> for LeaveEmpty {
	fn guard<R>(transform: impl FnOnce() -> R) -> R {
		try_eval(transform).finally(|()| {
			if thread::panicking() {
				tracing::debug!(slot = type_name::<T>(), "Transform unwound. Slot left empty.");
			}
		})
	}
}
