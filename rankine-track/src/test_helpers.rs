// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! This module provides helper functions for testing logging output
//!
//! The aim of this module is to provide commonly-used functions that enable the
//! testing of the output that should appear from logging macros.

use std::cell::{Cell, RefCell};

use regex::Regex;

use crate::tracker::dev_null_tracker;
use crate::{Id, Track, Tracker};

/// A tracker that keeps track events.
pub struct TestTracker {
    events: RefCell<Vec<String>>,

    unique_id: Cell<u64>,
}

impl TestTracker {
    /// Create a new [`Tracker`](crate::Tracker) for the tests.
    ///
    /// This keeps the track events in memory for checking later.
    #[must_use]
    pub fn new(initial_id: u64) -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            unique_id: Cell::new(initial_id),
        }
    }

    fn add_event(&self, event: String) {
        println!("{event}");
        self.events.borrow_mut().push(event);
    }

    /// Return a copy of all events recorded since the last clear.
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

impl Track for TestTracker {
    fn unique_id(&self) -> Id {
        let id = self.unique_id.get();
        self.unique_id.set(id + 1);
        Id(id)
    }

    fn is_entity_enabled(&self, _id: Id, _level: log::Level) -> bool {
        true
    }

    fn add_entity(&self, id: Id, entity_name: &str) {
        self.add_event(format!("{id}: {entity_name} added"));
    }

    fn value(&self, id: Id, name: &str, value: f64) {
        self.add_event(format!("{id}: {name} = {value:e}"));
    }

    fn log(&self, id: Id, level: log::Level, msg: std::fmt::Arguments) {
        self.add_event(format!("{id}:{level}: {msg}"));
    }

    fn shutdown(&self) {
        // Do nothing
    }
}

/// Create a tracker for tests that do not check the logging output.
///
/// The `full_filepath` is normally `file!()` so that it is possible to enable
/// logging for a single test file by setting `RANKINE_TEST_LOG` to a regular
/// expression matching its path.
#[must_use]
pub fn create_tracker(full_filepath: &str) -> Tracker {
    match std::env::var("RANKINE_TEST_LOG") {
        Ok(pattern) if Regex::new(&pattern).is_ok_and(|re| re.is_match(full_filepath)) => {
            crate::tracker::stdout_tracker(log::Level::Trace)
        }
        _ => dev_null_tracker(),
    }
}

/// Initialise a [`TestTracker`] for tests
///
/// Returns both the concrete [`TestTracker`] (for checking events) and the
/// same object as a [`Tracker`] (for building entities).
///
/// # Examples
///
/// ```
/// use rankine_track::test_helpers;
///
/// let (test_tracker, tracker) = rankine_track::test_init!(10);
/// let top = rankine_track::entity::toplevel(&tracker, "top");
/// test_helpers::check_and_clear(&test_tracker, &["10: top added"]);
/// ```
#[macro_export]
macro_rules! test_init {
    ($start_id:expr) => {{
        let test_tracker = std::rc::Rc::new($crate::test_helpers::TestTracker::new($start_id));
        let tracker: $crate::Tracker = test_tracker.clone();
        (test_tracker, tracker)
    }};
}

/// Check and clear the recorded output
///
/// This function asserts that the events seen since the start or the last
/// time this function was called match the `expected` regular expressions, in
/// order. It then clears the recorded events.
pub fn check_and_clear(tracker: &TestTracker, expected: &[&str]) {
    let mut events = tracker.events.borrow_mut();

    println!("Checking {:?} matches {:?}", expected, *events);

    assert_eq!(expected.len(), events.len());

    for (i, (log_expect, actual)) in expected.iter().zip(events.iter()).enumerate() {
        let re = Regex::new(log_expect).unwrap();
        println!("Checking {i}: {log_expect:?} matches {actual:?}");
        assert!(re.is_match(actual));
    }

    events.clear();
}
