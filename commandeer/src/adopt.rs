use core::any::type_name;
use std::collections::VecDeque;

use crate::{
	guard::{Abort, FailurePolicy},
	placeholder::{BitZero, ByDefault, Placeholder},
	swap,
};

/// Per-type configuration of [`adopt_and_replace`].
///
/// Implement this once for each type you want to adopt, usually through [`adoptable!`](`crate::adoptable`).
/// Since there can only be one implementation per type, all adoptions of a given type share the
/// same placeholder strategy and failure policy.
pub trait Adoptable: Sized {
	/// Produces the stand-in that occupies the slot during the transform.
	type Placeholder: Placeholder<Self>;
	/// Decides what happens if the transform panics.
	type OnFailure: FailurePolicy<Self, Self::Placeholder>;
}

/// Temporarily takes ownership of `*slot`, replacing it with the result of `transform`.
///
/// `transform` is called exactly once. While it runs, `slot` holds a placeholder from
/// [`T::Placeholder`](`Adoptable::Placeholder`), which is dismissed once the result is in place.
///
/// # Panics
///
/// If `transform` panics, [`T::OnFailure`](`Adoptable::OnFailure`) applies: [`Abort`] terminates
/// the process and [`LeaveEmpty`](`crate::LeaveEmpty`) resumes the unwind with an empty slot.
///
/// # Example
///
/// ```
/// let mut words = vec!["b", "a"];
/// commandeer::adopt_and_replace(&mut words, |words| {
/// 	let mut words: Vec<_> = words.into_iter().rev().collect();
/// 	words.push("c");
/// 	words
/// });
/// assert_eq!(words, ["a", "b", "c"]);
/// ```
pub fn adopt_and_replace<T: Adoptable>(slot: &mut T, transform: impl FnOnce(T) -> T) {
	adopt_and_return(slot, |value| (transform(value), ()));
}

/// Like [`adopt_and_replace`], but `transform` can also return a side result.
///
/// # Panics
///
/// See [`adopt_and_replace`].
///
/// # Example
///
/// ```
/// let mut pending = vec![3, 1, 2];
/// let total: i32 = commandeer::adopt_and_return(&mut pending, |pending| {
/// 	let total = pending.iter().sum();
/// 	(Vec::with_capacity(pending.capacity()), total)
/// });
/// assert_eq!(total, 6);
/// assert!(pending.is_empty());
/// ```
pub fn adopt_and_return<T: Adoptable, R>(
	slot: &mut T,
	transform: impl FnOnce(T) -> (T, R),
) -> R {
	let _span = tracing::trace_span!("adopt", slot = type_name::<T>()).entered();

	let adopted = swap::loan(slot, <T::Placeholder as Placeholder<T>>::conjure());
	let (result, side) =
		<T::OnFailure as FailurePolicy<T, T::Placeholder>>::guard(|| transform(adopted));
	<T::Placeholder as Placeholder<T>>::dismiss(swap::restore(slot, result));
	side
}

/// Implements [`Adoptable`].
///
/// ```
/// use commandeer::{adoptable, Abort, ByDefault};
///
/// #[derive(Default)]
/// struct Log(Vec<String>);
///
/// struct Tagged<T>(Vec<T>);
/// impl<T> Default for Tagged<T> {
/// 	fn default() -> Self {
/// 		Self(Vec::new())
/// 	}
/// }
///
/// adoptable! {
/// 	Log => ByDefault, Abort;
/// 	impl<T> Tagged<T> => ByDefault, Abort;
/// }
/// ```
#[macro_export]
macro_rules! adoptable {
	() => {};
	(impl<$($generic:ident),+$(,)?> $ty:ty => $placeholder:ty, $on_failure:ty $(; $($rest:tt)*)?) => {
		impl<$($generic),+> $crate::Adoptable for $ty {
			type Placeholder = $placeholder;
			type OnFailure = $on_failure;
		}
		$($crate::adoptable!($($rest)*);)?
	};
	($ty:ty => $placeholder:ty, $on_failure:ty $(; $($rest:tt)*)?) => {
		impl $crate::Adoptable for $ty {
			type Placeholder = $placeholder;
			type OnFailure = $on_failure;
		}
		$($crate::adoptable!($($rest)*);)?
	};
}

adoptable! {
	impl<T> Vec<T> => ByDefault, Abort;
	impl<T> VecDeque<T> => ByDefault, Abort;
	impl<T> Option<T> => ByDefault, Abort;
	String => ByDefault, Abort;
	bool => BitZero, Abort;
	char => BitZero, Abort;
	u8 => BitZero, Abort;
	u16 => BitZero, Abort;
	u32 => BitZero, Abort;
	u64 => BitZero, Abort;
	u128 => BitZero, Abort;
	usize => BitZero, Abort;
	i8 => BitZero, Abort;
	i16 => BitZero, Abort;
	i32 => BitZero, Abort;
	i64 => BitZero, Abort;
	i128 => BitZero, Abort;
	isize => BitZero, Abort;
	f32 => BitZero, Abort;
	f64 => BitZero, Abort;
}
