//! End-to-end tests driving the runtime through its public handle.

use tokio::time::{Duration, sleep};

use courtside_core::{ControlAction, GameState, Team};
use courtside_runtime::{GameEvent, Runtime, RuntimeConfig};

fn manual_clock_config() -> RuntimeConfig {
    RuntimeConfig {
        enable_clock: false,
        ..RuntimeConfig::default()
    }
}

#[tokio::test]
async fn actions_round_trip_through_the_handle() {
    let runtime = Runtime::builder().config(manual_clock_config()).build();
    let handle = runtime.handle();

    let outcome = handle
        .execute(ControlAction::AddScore {
            team: Team::Home,
            points: 3,
        })
        .await
        .unwrap();
    assert!(outcome.changed);

    handle
        .execute(ControlAction::AddTeamFoul { team: Team::Guest })
        .await
        .unwrap();

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.home.score, 3);
    assert_eq!(state.guest.fouls, 1);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn undo_round_trips_through_the_handle() {
    let runtime = Runtime::builder().config(manual_clock_config()).build();
    let handle = runtime.handle();

    let before = handle.query_state().await.unwrap();
    handle
        .execute(ControlAction::AddScore {
            team: Team::Guest,
            points: 2,
        })
        .await
        .unwrap();

    let outcome = handle.execute(ControlAction::Undo).await.unwrap();
    assert!(outcome.changed);
    assert_eq!(handle.query_state().await.unwrap(), before);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn events_are_published_for_control_actions() {
    let runtime = Runtime::builder().config(manual_clock_config()).build();
    let handle = runtime.handle();
    let mut events = handle.subscribe_events();

    handle
        .execute(ControlAction::TogglePossession)
        .await
        .unwrap();

    match events.recv().await.unwrap() {
        GameEvent::ActionApplied { action, changed } => {
            assert!(changed);
            assert_eq!(action.as_snake_case(), "toggle_possession");
        }
        other => panic!("expected ActionApplied, got {other:?}"),
    }
    assert!(matches!(events.recv().await.unwrap(), GameEvent::StateChanged));

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn clock_worker_decrements_while_running() {
    let runtime = Runtime::builder().build();
    let handle = runtime.handle();

    handle.execute(ControlAction::ToggleClock).await.unwrap();
    sleep(Duration::from_millis(3_100)).await;

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.clock.time_left, 18 * 60 - 3);
    assert!(state.clock.is_running);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn ticks_are_noops_while_stopped() {
    let runtime = Runtime::builder().build();
    let handle = runtime.handle();

    sleep(Duration::from_secs(5)).await;

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.clock.time_left, 18 * 60);
    assert!(!state.clock.is_running);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn expiry_is_observable_on_the_event_stream() {
    let mut initial = GameState::default();
    initial.clock.time_left = 2;

    let runtime = Runtime::builder().initial_state(initial).build();
    let handle = runtime.handle();
    let mut events = handle.subscribe_events();

    handle.execute(ControlAction::ToggleClock).await.unwrap();
    sleep(Duration::from_millis(2_100)).await;

    let mut saw_expiry = false;
    while let Ok(event) = events.try_recv() {
        if matches!(event, GameEvent::ClockExpired) {
            saw_expiry = true;
        }
    }
    assert!(saw_expiry);

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.clock.time_left, 0);
    assert!(!state.clock.is_running);

    drop(handle);
    runtime.shutdown().await.unwrap();
}
