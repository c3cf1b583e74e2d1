use roadcount_core::{format_elapsed, Stopwatch, StopwatchPhase, TICK_PERIOD_MS};

#[test]
fn new_stopwatch_is_idle_at_zero() {
    let stopwatch = Stopwatch::new();
    assert_eq!(stopwatch.phase(), StopwatchPhase::Idle);
    assert!(!stopwatch.is_running());
    assert_eq!(stopwatch.elapsed_ms(), 0);
}

#[test]
fn start_transitions_to_running_with_a_live_handle() {
    let mut stopwatch = Stopwatch::new();
    let handle = stopwatch.start();

    assert_eq!(stopwatch.phase(), StopwatchPhase::Running);
    assert!(handle.is_live());
}

#[test]
fn start_while_running_keeps_the_existing_schedule() {
    let mut stopwatch = Stopwatch::new();
    let first = stopwatch.start();
    let second = stopwatch.start();

    // Both handles observe the same schedule: cancelling one kills the
    // other, proving no second schedule was issued.
    second.cancel();
    assert!(!first.is_live());
}

#[test]
fn tick_advances_by_the_fixed_period_only_while_running() {
    let mut stopwatch = Stopwatch::new();

    stopwatch.tick();
    assert_eq!(stopwatch.elapsed_ms(), 0);

    stopwatch.start();
    stopwatch.tick();
    stopwatch.tick();
    stopwatch.tick();
    assert_eq!(stopwatch.elapsed_ms(), 3 * TICK_PERIOD_MS);
}

#[test]
fn reset_cancels_the_schedule_and_zeroes_elapsed() {
    let mut stopwatch = Stopwatch::new();
    let handle = stopwatch.start();
    stopwatch.tick();
    assert!(stopwatch.elapsed_ms() > 0);

    stopwatch.reset();
    assert_eq!(stopwatch.phase(), StopwatchPhase::Idle);
    assert_eq!(stopwatch.elapsed_ms(), 0);
    assert!(!handle.is_live());

    // Idempotent while idle.
    stopwatch.reset();
    assert_eq!(stopwatch.phase(), StopwatchPhase::Idle);
    assert_eq!(stopwatch.elapsed_ms(), 0);
}

#[test]
fn cancelled_schedule_drops_late_ticks() {
    let mut stopwatch = Stopwatch::new();
    let handle = stopwatch.start();
    stopwatch.tick();

    // Host-side teardown cancels the schedule while core still believes
    // it is running; late ticks must not advance time.
    handle.cancel();
    stopwatch.tick();
    stopwatch.tick();
    assert_eq!(stopwatch.elapsed_ms(), TICK_PERIOD_MS);
}

#[test]
fn dropping_the_stopwatch_cancels_its_schedule() {
    let handle = {
        let mut stopwatch = Stopwatch::new();
        stopwatch.start()
    };
    assert!(!handle.is_live());
}

#[test]
fn restart_after_reset_issues_a_fresh_schedule() {
    let mut stopwatch = Stopwatch::new();
    let first = stopwatch.start();
    stopwatch.reset();

    let second = stopwatch.start();
    assert!(!first.is_live());
    assert!(second.is_live());
    stopwatch.tick();
    assert_eq!(stopwatch.elapsed_ms(), TICK_PERIOD_MS);
}

#[test]
fn format_elapsed_matches_reference_fixed_points() {
    assert_eq!(format_elapsed(0), "00:00:00:000");
    assert_eq!(format_elapsed(1_000), "00:00:01:000");
    assert_eq!(format_elapsed(61_000), "00:01:01:000");
    assert_eq!(format_elapsed(3_661_001), "01:01:01:001");
}

#[test]
fn format_elapsed_widens_hours_past_two_digits() {
    assert_eq!(format_elapsed(360_000_000), "100:00:00:000");
    assert_eq!(format_elapsed(359_999_999), "99:59:59:999");
}
