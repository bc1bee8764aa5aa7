//! Core dispatch tests: ordering, propagation, one-shot, and failure
//! semantics.

use hooklet::testing::{CountingListener, InvocationLog};
use hooklet::{DEFAULT_PRIORITY, DispatchError, Dispatcher, Event};
use std::sync::Arc;

#[test]
fn test_priority_order() {
    let dispatcher = Dispatcher::new();
    let log = InvocationLog::new();

    dispatcher.add_listener("ch", log.callback("low"), 5);
    dispatcher.add_listener("ch", log.callback("high"), 20);
    dispatcher.add_listener("ch", log.callback("mid"), DEFAULT_PRIORITY);

    dispatcher.dispatch(&mut Event::new("ch")).unwrap();

    assert_eq!(log.entries(), vec!["high", "mid", "low"]);
}

#[test]
fn test_equal_priority_fires_in_registration_order() {
    let dispatcher = Dispatcher::new();
    let log = InvocationLog::new();

    dispatcher.add_listener("ch", log.callback("a"), DEFAULT_PRIORITY);
    dispatcher.add_listener("ch", log.callback("b"), DEFAULT_PRIORITY);
    dispatcher.add_listener("ch", log.callback("c"), DEFAULT_PRIORITY);

    dispatcher.dispatch(&mut Event::new("ch")).unwrap();

    assert_eq!(log.entries(), vec!["a", "b", "c"]);
}

#[test]
fn test_stop_propagation_halts_current_pass_only() {
    let dispatcher = Dispatcher::new();
    let log = InvocationLog::new();

    dispatcher.add_listener("ch", log.callback("first"), 30);
    dispatcher.add_listener(
        "ch",
        |event: &mut Event| {
            event.stop_propagation();
            Ok(())
        },
        20,
    );
    dispatcher.add_listener("ch", log.callback("after-stop"), 10);

    dispatcher.dispatch(&mut Event::new("ch")).unwrap();
    assert_eq!(log.entries(), vec!["first"]);

    // A later pass starts with a fresh event and runs the full chain.
    dispatcher.dispatch(&mut Event::new("ch")).unwrap();
    assert_eq!(log.entries(), vec!["first", "first"]);
}

#[test]
fn test_once_listener_fires_exactly_once() {
    let dispatcher = Dispatcher::new();
    let counter = CountingListener::new();

    let id = dispatcher.once("ch", counter.callback(), DEFAULT_PRIORITY);

    dispatcher.dispatch(&mut Event::new("ch")).unwrap();
    assert_eq!(counter.count(), 1);

    // Absent from the registry immediately after its single invocation.
    assert!(!dispatcher.listeners("ch").iter().any(|l| l.id() == id));
    assert!(!dispatcher.has_listeners("ch"));

    dispatcher.dispatch(&mut Event::new("ch")).unwrap();
    dispatcher.dispatch(&mut Event::new("ch")).unwrap();
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_dispatch_on_empty_channel_is_noop() {
    let dispatcher = Dispatcher::new();
    let counter = CountingListener::new();

    dispatcher.add_listener("ch", counter.callback(), DEFAULT_PRIORITY);
    dispatcher.remove_all("ch");

    assert!(!dispatcher.has_listeners("ch"));
    dispatcher.dispatch(&mut Event::new("ch")).unwrap();
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_listener_error_aborts_pass() {
    let dispatcher = Dispatcher::new();
    let log = InvocationLog::new();
    let counter = CountingListener::new();

    dispatcher.add_listener("ch", log.callback("before"), 30);
    let failing = dispatcher.registry().add(
        "ch",
        |_event: &mut Event| Err("listener blew up".into()),
        20,
        true,
    );
    dispatcher.add_listener("ch", log.callback("after"), 10);
    dispatcher.add_listener("ch", counter.callback(), 10);

    let err = dispatcher.dispatch(&mut Event::new("ch")).unwrap_err();
    let DispatchError::Listener { channel, id, .. } = err;
    assert_eq!(channel, "ch");
    assert_eq!(id, failing);

    // Listeners after the failing one never ran.
    assert_eq!(log.entries(), vec!["before"]);
    assert_eq!(counter.count(), 0);

    // The failing listener's one-shot cleanup never happened.
    assert!(dispatcher.listeners("ch").iter().any(|l| l.id() == failing));
}

#[test]
fn test_listener_added_mid_pass_waits_for_next_pass() {
    let dispatcher = Arc::new(Dispatcher::new());
    let log = InvocationLog::new();

    let inner_log = log.clone();
    let inner_dispatcher = dispatcher.clone();
    dispatcher.add_listener(
        "ch",
        move |_event: &mut Event| {
            inner_dispatcher.add_listener("ch", inner_log.callback("late"), 50);
            Ok(())
        },
        20,
    );
    dispatcher.add_listener("ch", log.callback("tail"), 10);

    dispatcher.dispatch(&mut Event::new("ch")).unwrap();
    assert_eq!(log.entries(), vec!["tail"]);

    // The listener registered mid-pass fires on the next pass, at the front.
    dispatcher.dispatch(&mut Event::new("ch")).unwrap();
    assert_eq!(log.entries(), vec!["tail", "late", "tail"]);
}

#[test]
fn test_listener_removed_mid_pass_still_fires_from_snapshot() {
    let dispatcher = Arc::new(Dispatcher::new());
    let log = InvocationLog::new();

    let victim = dispatcher.add_listener("ch", log.callback("victim"), 10);
    let inner_dispatcher = dispatcher.clone();
    dispatcher.add_listener(
        "ch",
        move |_event: &mut Event| {
            inner_dispatcher.remove_listener("ch", victim);
            Ok(())
        },
        20,
    );

    dispatcher.dispatch(&mut Event::new("ch")).unwrap();
    // The pass iterates the snapshot taken at its start.
    assert_eq!(log.entries(), vec!["victim"]);

    dispatcher.dispatch(&mut Event::new("ch")).unwrap();
    assert_eq!(log.entries(), vec!["victim"]);
}

#[test]
fn test_listener_removing_itself_mid_pass() {
    let dispatcher = Arc::new(Dispatcher::new());
    let log = InvocationLog::new();

    let registry = dispatcher.clone();
    let inner_log = log.clone();
    // Self-removal without the once flag, via the id captured at add time.
    let id_slot = Arc::new(std::sync::Mutex::new(None));
    let slot = id_slot.clone();
    let record = inner_log.callback("self");
    let id = dispatcher.add_listener(
        "ch",
        move |event: &mut Event| {
            record(event)?;
            if let Some(id) = *slot.lock().unwrap() {
                registry.remove_listener("ch", id);
            }
            Ok(())
        },
        DEFAULT_PRIORITY,
    );
    *id_slot.lock().unwrap() = Some(id);

    dispatcher.dispatch(&mut Event::new("ch")).unwrap();
    dispatcher.dispatch(&mut Event::new("ch")).unwrap();

    assert_eq!(log.entries(), vec!["self"]);
    assert!(!dispatcher.has_listeners("ch"));
}

#[test]
fn test_payload_mutation_visible_to_later_listeners() {
    let dispatcher = Dispatcher::new();

    dispatcher.add_listener(
        "ch",
        |event: &mut Event| {
            event.set("seen", true);
            Ok(())
        },
        20,
    );
    dispatcher.add_listener(
        "ch",
        |event: &mut Event| {
            assert_eq!(event.get::<bool>("seen"), Some(&true));
            event.set("checked", true);
            Ok(())
        },
        10,
    );

    let mut event = Event::new("ch");
    dispatcher.dispatch(&mut event).unwrap();
    assert_eq!(event.get::<bool>("checked"), Some(&true));
}

#[test]
fn test_registration_from_multiple_threads() {
    let dispatcher = Arc::new(Dispatcher::new());
    let counter = CountingListener::new();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let dispatcher = dispatcher.clone();
            let counter = counter.clone();
            std::thread::spawn(move || {
                dispatcher.add_listener("ch", counter.callback(), i);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(dispatcher.listeners("ch").len(), 8);
    dispatcher.dispatch(&mut Event::new("ch")).unwrap();
    assert_eq!(counter.count(), 8);
}
