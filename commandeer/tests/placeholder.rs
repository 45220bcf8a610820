use std::mem::size_of;

use commandeer::{adopt_and_replace, adoptable, Abort, BitZero, ByDefault, Indirect, ZeroValid};

use _validator::Validator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
	Conjured,
	Seen(&'static str),
	Dropped(&'static str),
	DroppedId(u64),
}

thread_local! {
	static EVENTS: Validator<Event> = const { Validator::new() };
}

fn push(event: Event) {
	EVENTS.with(|events| events.push(event));
}

#[track_caller]
fn expect(expected: impl IntoIterator<Item = Event>) {
	EVENTS.with(|events| events.expect(expected));
}

const SENTINEL: &str = "<placeholder>";

#[derive(Debug, PartialEq, Eq)]
struct Labelled(&'static str);

impl Default for Labelled {
	fn default() -> Self {
		push(Event::Conjured);
		Self(SENTINEL)
	}
}

impl Drop for Labelled {
	fn drop(&mut self) {
		push(Event::Dropped(self.0));
	}
}

adoptable!(Labelled => ByDefault, Abort);

#[test]
fn sentinel_never_leaks() {
	_logging::init();

	let mut slot = Labelled("first");
	for next in ["second", "third"] {
		adopt_and_replace(&mut slot, |value| {
			push(Event::Seen(value.0));
			Labelled(next)
		});
		assert_ne!(slot.0, SENTINEL);
		assert_eq!(slot.0, next);
	}

	expect([
		Event::Conjured,
		Event::Seen("first"),
		Event::Dropped("first"),
		Event::Dropped(SENTINEL),
		Event::Conjured,
		Event::Seen("second"),
		Event::Dropped("second"),
		Event::Dropped(SENTINEL),
	]);

	drop(slot);
	expect([Event::Dropped("third")]);
}

#[derive(Debug)]
struct Counted {
	id: u64,
}

impl Drop for Counted {
	fn drop(&mut self) {
		push(Event::DroppedId(self.id));
	}
}

// SAFETY: Plain `u64`. `Drop` never sees the zeroed instance.
unsafe impl ZeroValid for Counted {}
adoptable!(Counted => BitZero, Abort);

#[test]
fn bit_zero_placeholder_is_forgotten() {
	_logging::init();

	let mut slot = Counted { id: 1 };
	adopt_and_replace(&mut slot, |c| c);
	expect([]);

	adopt_and_replace(&mut slot, |old| Counted { id: old.id + 1 });
	assert_eq!(slot.id, 2);
	expect([Event::DroppedId(1)]);

	drop(slot);
	expect([Event::DroppedId(2)]);
}

struct Big([u64; 4096]);

// SAFETY: An array of `u64`.
unsafe impl ZeroValid for Big {}
adoptable!(Box<Big> => Indirect, Abort);

#[test]
fn indirection_swaps_only_the_handle() {
	_logging::init();

	assert_eq!(size_of::<Box<Big>>(), size_of::<usize>());
	assert_eq!(size_of::<Box<[u8; 1]>>(), size_of::<Box<Big>>());

	let mut slot = Box::new(Big([7; 4096]));
	let allocation: *const Big = &*slot;

	adopt_and_replace(&mut slot, |mut big| {
		big.0[0] = 1;
		big
	});

	assert!(std::ptr::eq(&*slot, allocation));
	assert_eq!(slot.0[0], 1);
	assert!(slot.0[1..].iter().all(|&n| n == 7));
}

struct Ledger {
	id: u64,
	_entries: [u32; 256],
}

impl Drop for Ledger {
	fn drop(&mut self) {
		push(Event::DroppedId(self.id));
	}
}

// SAFETY: Plain integers. `Drop` never sees the zeroed instance.
unsafe impl ZeroValid for Ledger {}
adoptable!(Box<Ledger> => Indirect<BitZero>, Abort);

#[test]
fn indirect_bit_zero_frees_without_dropping() {
	_logging::init();

	let mut slot = Box::new(Ledger {
		id: 9,
		_entries: [3; 256],
	});
	adopt_and_replace(&mut slot, |ledger| ledger);
	expect([]);

	drop(slot);
	expect([Event::DroppedId(9)]);
}

struct Journal {
	id: u64,
}

impl Default for Journal {
	fn default() -> Self {
		push(Event::Conjured);
		Self { id: 0 }
	}
}

impl Drop for Journal {
	fn drop(&mut self) {
		push(Event::DroppedId(self.id));
	}
}

adoptable!(Box<Journal> => Indirect<ByDefault>, Abort);

#[test]
fn indirect_by_default_drops_placeholder() {
	_logging::init();

	let mut slot = Box::new(Journal { id: 5 });
	let allocation: *const Journal = &*slot;
	adopt_and_replace(&mut slot, |journal| journal);

	assert!(std::ptr::eq(&*slot, allocation));
	expect([Event::Conjured, Event::DroppedId(0)]);

	drop(slot);
	expect([Event::DroppedId(5)]);
}
