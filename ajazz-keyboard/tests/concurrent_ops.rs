//! Concurrent dispatch of the mode and sleep operations.
//!
//! Mirrors the frontend's apply flow: open once, dispatch both operations
//! as tasks, await both, close once. Both full handshakes must reach the
//! transport, each internally in-order.

use std::sync::Arc;

use ajazz_keyboard::{Ak820Pro, Direction, KeyboardError, LightingMode, RgbColor, SleepDelay};
use ajazz_transport::mock::MockTransport;
use ajazz_transport::protocol::{cmd, COMMAND_PREFIX};
use ajazz_transport::{CommandBuffer, Transport};

/// Position of the control report with the given command code.
fn find_control(log: &[CommandBuffer], code: u8) -> usize {
    log.iter()
        .position(|buf| buf[0] == COMMAND_PREFIX && buf[1] == code)
        .unwrap_or_else(|| panic!("no {} report in log", cmd::name(code)))
}

#[tokio::test(flavor = "multi_thread")]
async fn mode_and_sleep_run_concurrently_against_one_session() {
    let mock = Arc::new(MockTransport::new());
    let kb = Ak820Pro::new(Arc::clone(&mock) as Arc<dyn Transport>);

    kb.open().unwrap();

    let mode_task = kb.set_mode_task(
        LightingMode::Wave,
        RgbColor::BLUE,
        false,
        4,
        1,
        Direction::LeftToRight,
    );
    let sleep_task = kb.set_sleep_time_task(SleepDelay::TenMinutes);

    let (mode_result, sleep_result) = tokio::join!(mode_task, sleep_task);
    mode_result.expect("mode task panicked").unwrap();
    sleep_result.expect("sleep task panicked").unwrap();

    kb.close();

    let log = mock.received();
    assert_eq!(log.len(), 7, "4 mode reports + 3 sleep reports");

    // Mode handshake is contiguous and ordered
    let mode_pos = find_control(&log, cmd::MODE);
    assert_eq!(log[mode_pos - 1][1], cmd::START);
    assert_eq!(log[mode_pos + 1][0], LightingMode::Wave as u8);
    assert_eq!(log[mode_pos + 2][1], cmd::FINISH);

    // Sleep handshake is contiguous, ordered, and has no FINISH
    let sleep_pos = find_control(&log, cmd::SLEEP);
    assert_eq!(log[sleep_pos - 1][1], cmd::START);
    assert_eq!(log[sleep_pos + 1][8], SleepDelay::TenMinutes.code());
}

#[tokio::test(flavor = "multi_thread")]
async fn validation_failure_surfaces_through_the_task_handle() {
    let mock = Arc::new(MockTransport::new());
    let kb = Ak820Pro::new(Arc::clone(&mock) as Arc<dyn Transport>);
    kb.open().unwrap();

    let task = kb.set_mode_task(
        LightingMode::Static,
        RgbColor::WHITE,
        false,
        9,
        0,
        Direction::LeftToRight,
    );

    let result = task.await.expect("task must not panic");
    assert!(matches!(
        result,
        Err(KeyboardError::ParameterRange { name: "brightness", .. })
    ));
    assert_eq!(mock.sent_count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn closed_session_failure_surfaces_through_the_task_handle() {
    let mock = Arc::new(MockTransport::new());
    let kb = Ak820Pro::new(Arc::clone(&mock) as Arc<dyn Transport>);

    let task = kb.set_sleep_time_task(SleepDelay::OneMinute);
    let result = task.await.expect("task must not panic");
    assert!(matches!(result, Err(KeyboardError::Transport(_))));
    assert_eq!(mock.sent_count(), 0);
}
