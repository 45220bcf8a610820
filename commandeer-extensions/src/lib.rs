#![warn(clippy::pedantic)]
#![warn(unreachable_pub)]

//! Method syntax for [`commandeer`].
//!
//! ```
//! use commandeer_extensions::prelude::*;
//!
//! let mut names = vec!["b", "a"];
//! names.adopt(|names| names.into_iter().rev().collect());
//! assert_eq!(names, ["a", "b"]);
//! ```

pub mod prelude {
	use commandeer::{adopt_and_replace, adopt_and_return, AdoptError, Adoptable, Occupancy};
	use ext_trait::extension;

	#[extension(pub trait AdoptExt)]
	impl<T: Adoptable> T {
		/// See [`adopt_and_replace`].
		fn adopt(&mut self, transform: impl FnOnce(T) -> T) {
			adopt_and_replace(self, transform);
		}

		/// See [`adopt_and_return`].
		fn adopt_and_return<R>(&mut self, transform: impl FnOnce(T) -> (T, R)) -> R {
			adopt_and_return(self, transform)
		}

		/// Feeds `items` through a by-value `step`, all within one adoption.
		fn chain<I: IntoIterator>(&mut self, items: I, step: impl FnMut(T, I::Item) -> T) {
			adopt_and_replace(self, |value| items.into_iter().fold(value, step));
		}
	}

	#[extension(pub trait OccupancyExt)]
	impl<T> Occupancy<T> {
		/// See [`Occupancy::try_adopt_and_replace`].
		fn try_adopt(&mut self, transform: impl FnOnce(T) -> T) -> Result<&mut T, AdoptError> {
			self.try_adopt_and_replace(transform)
		}

		/// Like [`chain`](`AdoptExt::chain`), but skips empty slots and leaves the slot empty if
		/// `step` panics.
		///
		/// Returns whether there was a value to feed.
		fn chain_present<I: IntoIterator>(
			&mut self,
			items: I,
			step: impl FnMut(T, I::Item) -> T,
		) -> bool {
			self.adopt_and_replace(|value| items.into_iter().fold(value, step))
		}
	}
}
