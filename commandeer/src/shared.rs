//! Adoption through locks, for slots that are reachable through shared references.
//!
//! Adopting requires exclusive access for the whole transform. These functions hold the respective
//! lock for exactly that long. None of them are reentrant: a transform that tries to lock the same
//! lock again deadlocks (or, for locks that detect it, panics).
//!
//! Which of these are available depends on the `lock_api` and `async-lock` features.

#[cfg(feature = "lock_api")]
use crate::adopt_and_return;
#[cfg(any(feature = "lock_api", feature = "async-lock"))]
use crate::{adopt_and_replace, Adoptable};

/// Locks `mutex`, then [adopts](`adopt_and_replace`) its value.
///
/// Works with every [`lock_api`] mutex, including [`parking_lot::Mutex`](https://docs.rs/parking_lot/0.12/parking_lot/type.Mutex.html).
#[cfg(feature = "lock_api")]
pub fn adopt_locked<R: lock_api::RawMutex, T: Adoptable>(
	mutex: &lock_api::Mutex<R, T>,
	transform: impl FnOnce(T) -> T,
) {
	adopt_and_replace(&mut *mutex.lock(), transform);
}

/// Locks `mutex`, then [adopts](`adopt_and_return`) its value, returning the side result.
#[cfg(feature = "lock_api")]
pub fn adopt_locked_and_return<R: lock_api::RawMutex, T: Adoptable, U>(
	mutex: &lock_api::Mutex<R, T>,
	transform: impl FnOnce(T) -> (T, U),
) -> U {
	adopt_and_return(&mut *mutex.lock(), transform)
}

/// Write-locks `rw_lock`, then [adopts](`adopt_and_replace`) its value.
#[cfg(feature = "lock_api")]
pub fn adopt_write<R: lock_api::RawRwLock, T: Adoptable>(
	rw_lock: &lock_api::RwLock<R, T>,
	transform: impl FnOnce(T) -> T,
) {
	adopt_and_replace(&mut *rw_lock.write(), transform);
}

/// Waits for `mutex`, then [adopts](`adopt_and_replace`) its value.
///
/// Only acquiring the lock suspends. `transform` itself runs synchronously while the lock is held.
#[cfg(feature = "async-lock")]
pub async fn adopt_locked_async<T: Adoptable>(
	mutex: &async_lock::Mutex<T>,
	transform: impl FnOnce(T) -> T,
) {
	adopt_and_replace(&mut *mutex.lock().await, transform);
}

/// Blocks on `mutex`, then [adopts](`adopt_and_replace`) its value.
///
/// Don't call this from async code.
#[cfg(feature = "async-lock")]
pub fn adopt_locked_blocking<T: Adoptable>(
	mutex: &async_lock::Mutex<T>,
	transform: impl FnOnce(T) -> T,
) {
	adopt_and_replace(&mut *mutex.lock_blocking(), transform);
}
