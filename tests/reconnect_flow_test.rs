//! Reconnect behavior driven through the session driver with a paused clock.

mod common;

use std::time::Duration;

use battlelog::controller::{
    Affordance, ControllerEvent, LineKind, Phase, ReconnectPolicy,
};
use common::Harness;
use tokio::time::Instant;

const ROOM_URL: &str = "http://localhost:42069/connect?roomid=abc";

#[tokio::test(start_paused = true)]
async fn test_backoff_grows_linearly() {
    let mut h = Harness::new();
    h.submit("abc");
    h.transport.simulate_open();
    h.pump();

    for attempt in 1..=3u64 {
        h.fail_stream();
        let start = Instant::now();
        let event = h.next().await;
        assert!(matches!(event, ControllerEvent::RetryElapsed { .. }));

        let elapsed = start.elapsed();
        let expected = Duration::from_millis(2000 * attempt);
        assert!(
            elapsed >= expected && elapsed < expected + Duration::from_millis(50),
            "attempt {} waited {:?}",
            attempt,
            elapsed
        );
        assert_eq!(h.transport.open_count(), 1 + attempt as usize);
        assert_eq!(h.driver.controller().phase(), Phase::Connecting);
    }

    assert!(h.transport.opened_urls().iter().all(|url| url == ROOM_URL));
    assert_eq!(
        h.view.texts_of(LineKind::Warning),
        vec![
            "Reconnecting (1/10)...",
            "Reconnecting (2/10)...",
            "Reconnecting (3/10)...",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_gives_up_after_ten_reconnects() {
    let mut h = Harness::new();
    h.submit("abc");

    for _ in 0..10 {
        h.fail_stream();
        h.next().await;
    }
    assert_eq!(h.transport.open_count(), 11);

    h.fail_stream();
    assert_eq!(h.driver.controller().phase(), Phase::Failed);
    assert_eq!(h.view.last_affordance(), Some(Affordance::Retry));
    assert_eq!(h.view.texts_of(LineKind::Error).len(), 1);

    // No eleventh re-dial, however long we wait
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(h.pump(), 0);
    assert_eq!(h.transport.open_count(), 11);
    assert_eq!(h.transport.live_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_successful_open_resets_attempts() {
    let mut h = Harness::new();
    h.submit("abc");
    h.fail_stream();
    h.next().await;
    h.fail_stream();
    h.next().await;
    assert_eq!(h.driver.controller().reconnect_attempts(), 2);

    h.transport.simulate_open();
    h.pump();
    assert_eq!(h.driver.controller().reconnect_attempts(), 0);

    // Next failure starts the ladder over at 2s
    h.fail_stream();
    let start = Instant::now();
    h.next().await;
    assert!(start.elapsed() < Duration::from_millis(2050));
    assert_eq!(
        h.view.texts_of(LineKind::Warning).last().map(String::as_str),
        Some("Reconnecting (1/10)...")
    );
}

#[tokio::test(start_paused = true)]
async fn test_finished_battle_never_redials() {
    let mut h = Harness::new();
    h.submit("abc");
    h.transport.simulate_open();
    h.transport.simulate_message("|win| p1");
    h.pump();

    h.fail_stream();
    assert_eq!(h.driver.controller().phase(), Phase::Ended);

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(h.pump(), 0);
    assert_eq!(h.transport.open_count(), 1);
    assert_eq!(h.view.last_affordance(), Some(Affordance::Finished));
}

#[tokio::test(start_paused = true)]
async fn test_new_room_cancels_pending_redial() {
    let mut h = Harness::new();
    h.submit("abc");
    h.fail_stream();
    assert_eq!(h.driver.controller().phase(), Phase::Retrying);

    h.submit("def");
    tokio::time::sleep(Duration::from_secs(10)).await;
    h.pump();

    assert_eq!(
        h.transport.opened_urls(),
        vec![
            ROOM_URL.to_string(),
            "http://localhost:42069/connect?roomid=def".to_string(),
        ]
    );
    assert_eq!(h.driver.controller().room(), Some("def"));
}

#[tokio::test(start_paused = true)]
async fn test_stale_stream_callbacks_are_dropped() {
    let mut h = Harness::new();
    h.submit("abc");
    let old_sink = h.transport.sink(0).unwrap();
    h.submit("def");

    // The first subscription was closed, but a late callback may still race in
    old_sink.message("Turn 99");
    old_sink.error("late");
    h.pump();

    assert!(h.view.texts_of(LineKind::Event).is_empty());
    assert_eq!(h.driver.controller().phase(), Phase::Connecting);
    assert_eq!(h.transport.live_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_manual_retry_after_exhaustion() {
    let mut h = Harness::with_policy(ReconnectPolicy::new(1, Duration::from_millis(500)));
    h.submit("abc");
    h.fail_stream();
    h.next().await;
    h.fail_stream();
    assert_eq!(h.driver.controller().phase(), Phase::Failed);

    h.submit("abc");
    assert_eq!(h.driver.controller().phase(), Phase::Connecting);
    assert_eq!(h.driver.controller().reconnect_attempts(), 0);
    assert_eq!(h.transport.open_count(), 3);
}
