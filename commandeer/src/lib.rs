#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![doc = include_str!("../README.md")]
//!
//! # Reentrancy Notes
//!
//! A transform can't reach the slot it was adopted from, since that slot stays mutably borrowed for
//! the whole call:
//!
//! ```compile_fail
//! let mut slot = vec![1, 2, 3];
//! commandeer::adopt_and_replace(&mut slot, |mut v| {
//! 	v.extend(slot.iter().copied());
//! 	v
//! });
//! ```
//!
//! Slots behind shared references have to be locked first, see [`shared`].

mod adopt;
pub use adopt::{adopt_and_replace, adopt_and_return, Adoptable};

mod error;
pub use error::AdoptError;

pub mod guard;
pub use guard::{Abort, FailurePolicy, LeaveEmpty};

mod occupancy;
pub use occupancy::Occupancy;

pub mod placeholder;
pub use placeholder::{BitZero, ByDefault, Indirect, Placeholder, Vacant, ZeroValid};

pub mod shared;
pub mod swap;

#[doc = include_str!("../README.md")]
mod readme {}
