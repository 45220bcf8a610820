use std::collections::VecDeque;

use commandeer::{adopt_and_replace, adopt_and_return};


#[test]
fn identity_leaves_value_unchanged() {
	_logging::init();

	let mut numbers = vec![1, 2, 3];
	adopt_and_replace(&mut numbers, |v| v);
	assert_eq!(numbers, [1, 2, 3]);

	let mut text = String::from("unchanged");
	adopt_and_replace(&mut text, |t| t);
	assert_eq!(text, "unchanged");

	let mut maybe = Some(Box::new(5));
	adopt_and_replace(&mut maybe, |m| m);
	assert_eq!(maybe, Some(Box::new(5)));

	let mut queue = VecDeque::from([1, 2]);
	adopt_and_replace(&mut queue, |q| q);
	assert_eq!(queue, [1, 2]);

	for value in [i64::MIN, -1, 0, 1, i64::MAX] {
		let mut slot = value;
		adopt_and_replace(&mut slot, |s| s);
		assert_eq!(slot, value);
	}

	let mut flag = true;
	adopt_and_replace(&mut flag, |f| f);
	assert!(flag);
}

#[test]
fn transform_is_called_exactly_once() {
	_logging::init();

	let mut calls = 0;
	let mut slot = String::from("a");
	adopt_and_replace(&mut slot, |mut s| {
		calls += 1;
		s.push('b');
		s
	});
	assert_eq!(calls, 1);
	assert_eq!(slot, "ab");
}

#[test]
fn moves_without_cloning() {
	_logging::init();

	let mut slot = String::with_capacity(64);
	slot.push_str("heap");
	let buffer = slot.as_ptr();

	adopt_and_replace(&mut slot, |mut s| {
		s.push_str(" stays put");
		s
	});

	assert_eq!(slot, "heap stays put");
	assert_eq!(slot.as_ptr(), buffer);
}

#[test]
fn side_result_is_returned() {
	_logging::init();

	let mut queue = VecDeque::from(["first", "second"]);
	let popped = adopt_and_return(&mut queue, |mut q| {
		let front = q.pop_front();
		(q, front)
	});
	assert_eq!(popped, Some("first"));
	assert_eq!(queue, ["second"]);
}

#[test]
fn consuming_transform_through_option() {
	_logging::init();

	enum State {
		Idle(String),
		Running(String, u32),
	}

	let mut state = Some(State::Idle(String::from("job")));
	adopt_and_replace(&mut state, |state| match state {
		Some(State::Idle(name)) => Some(State::Running(name, 1)),
		Some(State::Running(name, n)) => Some(State::Running(name, n + 1)),
		None => None,
	});

	match state {
		Some(State::Running(name, 1)) => assert_eq!(name, "job"),
		_ => panic!("unexpected state"),
	}
}
