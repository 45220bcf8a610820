//! Stand-ins that occupy a slot while its value is on loan.
//!
//! A [`Placeholder`] strategy never becomes visible outside of an adoption: it is conjured right
//! before the slot's value moves out and dismissed right after the replacement moves in.

use core::{
	cell::Cell,
	marker::PhantomData,
	mem::{self, ManuallyDrop, MaybeUninit},
	num::{
		NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
		NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize, Wrapping,
	},
	ptr::NonNull,
	sync::atomic::{
		AtomicBool, AtomicI16, AtomicI32, AtomicI64, AtomicI8, AtomicIsize, AtomicU16, AtomicU32,
		AtomicU64, AtomicU8, AtomicUsize,
	},
};

/// Produces the temporary occupant of a slot of type `T`.
pub trait Placeholder<T> {
	/// Whether [`dismiss`](`Placeholder::dismiss`) discards placeholders without dropping them.
	const FORGOTTEN: bool = false;

	/// Creates a placeholder.
	fn conjure() -> T;

	/// Creates a placeholder directly on the heap.
	///
	/// Used by [`Indirect`]. Override this if `T` can be built in place more cheaply than by moving
	/// [`conjure`](`Placeholder::conjure`)'s result.
	#[must_use]
	fn conjure_boxed() -> Box<T> {
		Box::new(Self::conjure())
	}

	/// Gets rid of a placeholder once it was displaced from its slot again.
	fn dismiss(placeholder: T) {
		if Self::FORGOTTEN {
			mem::forget(placeholder);
		} else {
			drop(placeholder);
		}
	}
}

/// Uses [`Default::default`] as placeholder, and drops it normally afterwards.
pub enum ByDefault {}

impl<T: Default> Placeholder<T> for ByDefault {
	fn conjure() -> T {
		T::default()
	}
}

/// Types for which the all-zero bit pattern is a valid instance.
///
/// # Safety
///
/// Implementing this trait asserts that [`MaybeUninit::zeroed().assume_init()`](`MaybeUninit::zeroed`)
/// is sound for `Self`, including for every field (so no references, [`NonNull`], [`Box`], non-zero
/// integers or enums without a variant at discriminant `0`, outside of an [`Option`] that uses them
/// as niche).
///
/// The zeroed value does not need to be meaningful. [`BitZero`] forgets it without running its
/// destructor, so `Drop` impls may assume they never see it.
pub unsafe trait ZeroValid: Sized {}

macro_rules! zero_valid {
	($($ty:ty),*$(,)?) => {$(
		unsafe impl ZeroValid for $ty {}
	)*};
}

zero_valid!(
	(),
	bool,
	char,
	u8,
	u16,
	u32,
	u64,
	u128,
	usize,
	i8,
	i16,
	i32,
	i64,
	i128,
	isize,
	f32,
	f64,
	AtomicBool,
	AtomicU8,
	AtomicU16,
	AtomicU32,
	AtomicU64,
	AtomicUsize,
	AtomicI8,
	AtomicI16,
	AtomicI32,
	AtomicI64,
	AtomicIsize,
	Option<NonZeroU8>,
	Option<NonZeroU16>,
	Option<NonZeroU32>,
	Option<NonZeroU64>,
	Option<NonZeroU128>,
	Option<NonZeroUsize>,
	Option<NonZeroI8>,
	Option<NonZeroI16>,
	Option<NonZeroI32>,
	Option<NonZeroI64>,
	Option<NonZeroI128>,
	Option<NonZeroIsize>,
);

unsafe impl<T: ?Sized> ZeroValid for PhantomData<T> {}
unsafe impl<T> ZeroValid for *const T {}
unsafe impl<T> ZeroValid for *mut T {}
unsafe impl<T> ZeroValid for Option<NonNull<T>> {}
unsafe impl<T> ZeroValid for Option<&T> {}
unsafe impl<T> ZeroValid for Option<&mut T> {}
unsafe impl<T> ZeroValid for Option<Box<T>> {}
unsafe impl<T: ZeroValid> ZeroValid for Wrapping<T> {}
unsafe impl<T: ZeroValid> ZeroValid for Cell<T> {}
unsafe impl<T: ZeroValid> ZeroValid for ManuallyDrop<T> {}
unsafe impl<T: ZeroValid, const N: usize> ZeroValid for [T; N] {}

macro_rules! zero_valid_tuples {
	($($($name:ident),+);*$(;)?) => {$(
		unsafe impl<$($name: ZeroValid),+> ZeroValid for ($($name,)+) {}
	)*};
}

zero_valid_tuples!(
	A;
	A, B;
	A, B, C;
	A, B, C, D;
	A, B, C, D, E;
	A, B, C, D, E, F;
);

/// Uses the all-zero bit pattern as placeholder, and forgets it afterwards.
///
/// Only available for [`ZeroValid`] types, so it can't be picked where zero isn't a valid value.
pub enum BitZero {}

impl<T: ZeroValid> Placeholder<T> for BitZero {
	const FORGOTTEN: bool = true;

	fn conjure() -> T {
		// SAFETY: Guaranteed by `T: ZeroValid`.
		unsafe { MaybeUninit::zeroed().assume_init() }
	}

	fn conjure_boxed() -> Box<T> {
		// SAFETY: Guaranteed by `T: ZeroValid`.
		unsafe { Box::new_zeroed().assume_init() }
	}
}

/// Placeholder strategy for boxed slots (`Box<U>`).
///
/// Swapping a [`Box`] only moves its pointer, so adopting stays O(1) regardless of `U`'s size.
/// The boxed stand-in is produced by `S` through [`Placeholder::conjure_boxed`]. If `S` forgets its
/// placeholders, the allocation is freed without dropping the `U` inside.
pub struct Indirect<S = BitZero>(PhantomData<S>);

impl<U, S: Placeholder<U>> Placeholder<Box<U>> for Indirect<S> {
	fn conjure() -> Box<U> {
		S::conjure_boxed()
	}

	fn dismiss(placeholder: Box<U>) {
		if S::FORGOTTEN {
			// SAFETY: `ManuallyDrop<U>` is `repr(transparent)` over `U`.
			drop(unsafe { Box::from_raw(Box::into_raw(placeholder).cast::<ManuallyDrop<U>>()) });
		} else {
			drop(placeholder);
		}
	}
}

/// The placeholder of an [`Occupancy`](`crate::Occupancy`) is its empty variant.
pub enum Vacant {}
