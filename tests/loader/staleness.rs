//! Late completions from superseded or dropped activations never land.

use catalog_loader::LoadState;

use crate::support::{let_tasks_run, scripted_loader};

#[tokio::test]
async fn reactivation_resets_to_loading() {
    let (loader, transport) = scripted_loader();
    let _first = transport.expect();
    let _second = transport.expect();

    loader.activate();
    loader.activate();

    assert_eq!(loader.current_state(), LoadState::Loading);
}

#[tokio::test]
async fn stale_failure_cannot_overwrite_newer_ready() {
    let (loader, transport) = scripted_loader();
    let first = transport.expect();
    let second = transport.expect();

    loader.activate();
    loader.activate();
    let_tasks_run().await;
    assert_eq!(transport.calls(), 2);

    second.ok(r#"{"m1": {"name": "Pizza", "price": 9.5}}"#);
    let settled = loader.settled().await;
    assert!(settled.is_ready());

    first.respond(500, "");
    let_tasks_run().await;

    assert_eq!(loader.current_state(), settled);
}

#[tokio::test]
async fn stale_success_while_newer_fetch_pending_is_ignored() {
    let (loader, transport) = scripted_loader();
    let first = transport.expect();
    let second = transport.expect();

    loader.activate();
    loader.activate();
    let_tasks_run().await;

    first.ok(r#"{"old": {"name": "Stale"}}"#);
    let_tasks_run().await;
    assert!(loader.current_state().is_loading());

    second.fail("connection reset");
    assert_eq!(loader.settled().await, LoadState::failed());
}

#[tokio::test]
async fn outcome_depends_only_on_latest_activation() {
    let (loader, transport) = scripted_loader();

    let first = transport.expect();
    loader.activate();
    let_tasks_run().await;

    let second = transport.expect();
    loader.activate();
    let_tasks_run().await;

    second.ok("{}");
    first.ok(r#"{"m1": {"name": "Pizza"}}"#);

    assert_eq!(loader.settled().await, LoadState::ready(vec![]));
    let_tasks_run().await;
    assert_eq!(loader.current_state(), LoadState::ready(vec![]));
}

#[tokio::test]
async fn completion_after_drop_is_discarded() {
    let (loader, transport) = scripted_loader();
    let watcher = loader.subscribe();
    let gate = transport.expect();

    loader.activate();
    let_tasks_run().await;
    drop(loader);

    gate.ok(r#"{"m1": {"name": "Pizza"}}"#);
    let_tasks_run().await;

    assert_eq!(transport.calls(), 1);
    assert_eq!(watcher.current(), LoadState::Loading);
}

#[tokio::test]
async fn deactivate_discards_pending_completion() {
    let (loader, transport) = scripted_loader();
    let mut watcher = loader.subscribe();
    let gate = transport.expect();

    loader.activate();
    assert_eq!(watcher.changed().await, Some(LoadState::Loading));
    loader.deactivate();

    gate.respond(500, "");
    // the fetch task holds the last sender; once it finishes the watcher closes
    assert_eq!(watcher.changed().await, None);
    assert_eq!(watcher.current(), LoadState::Loading);
}
