//! Relocation between two same-type locations.
//!
//! None of these functions look at the values they move: no destructor runs, nothing is cloned,
//! and the cost is `size_of::<T>()` bytes of copying. Store large values behind a [`Box`] (see
//! [`Indirect`](`crate::Indirect`)) to make that a pointer's worth.

use core::mem;

/// Exchanges the contents of `a` and `b`.
pub fn exchange<T>(a: &mut T, b: &mut T) {
	mem::swap(a, b);
}

/// Moves `placeholder` into `slot`, returning what `slot` held before.
#[must_use = "the slot's former content is returned"]
pub fn loan<T>(slot: &mut T, placeholder: T) -> T {
	let mut adopted = placeholder;
	exchange(slot, &mut adopted);
	adopted
}

/// Moves `value` back into `slot`, returning the placeholder it displaced.
#[must_use = "the displaced placeholder should be dismissed through its strategy"]
pub fn restore<T>(slot: &mut T, value: T) -> T {
	let mut displaced = value;
	exchange(slot, &mut displaced);
	displaced
}
