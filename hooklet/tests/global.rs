//! Shared-instance lifecycle and the global convenience functions.
//!
//! All assertions live in one test: the shared instance is process-wide
//! state, and the test harness runs separate `#[test]` functions on
//! parallel threads.

use hooklet::{DEFAULT_PRIORITY, Event, global};
use std::sync::{Arc, Mutex};

#[test]
fn test_shared_instance_lifecycle() {
    // Same instance for every caller.
    let a = global::shared();
    let b = global::shared();
    assert!(Arc::ptr_eq(&a, &b));

    // Registrations through the free functions land on that instance.
    global::add_filter(
        "lifecycle.title",
        |t: String, _: &mut Event| t.to_uppercase(),
        DEFAULT_PRIORITY,
    );
    global::add_filter(
        "lifecycle.title",
        |t: String, _: &mut Event| t + " | Blog",
        15,
    );
    assert!(global::has_filter("lifecycle.title"));
    assert!(a.has_filter("lifecycle.title"));

    let out = global::apply_filters("lifecycle.title", String::from("hello world")).unwrap();
    assert_eq!(out, "HELLO WORLD | BLOG");

    let seen = Arc::new(Mutex::new(0u32));
    let counter = seen.clone();
    let action_id = global::add_action(
        "lifecycle.ping",
        move |n: &u32| *counter.lock().unwrap() += n,
        DEFAULT_PRIORITY,
    );
    global::do_action("lifecycle.ping", 3u32).unwrap();
    assert_eq!(*seen.lock().unwrap(), 3);

    // Targeted and bulk removal through the free functions.
    global::remove_action("lifecycle.ping", action_id);
    assert!(!global::has_action("lifecycle.ping"));
    global::remove_all_filters("lifecycle.title");
    assert!(!global::has_filter("lifecycle.title"));

    // Reset discards the shared instance; the next call starts clean.
    global::add_filter(
        "lifecycle.stale",
        |v: u32, _: &mut Event| v + 1,
        DEFAULT_PRIORITY,
    );
    global::reset_shared();
    let fresh = global::shared();
    assert!(!Arc::ptr_eq(&a, &fresh));
    assert!(!global::has_filter("lifecycle.stale"));

    // The old handle keeps working as a private instance.
    assert!(a.has_filter("lifecycle.stale"));
    assert_eq!(a.apply_filters("lifecycle.stale", 1u32).unwrap(), 2);
}
