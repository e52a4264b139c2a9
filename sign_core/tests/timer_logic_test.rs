use sign_core::gameplay::{Countdown, CountdownEvent, HoldEvent, HoldTimer, Phase, RoundEvent, RoundTimers};
use sign_core::time::{Clock, ManualClock, TickScheduler};

#[test]
fn test_hold_needs_continuous_match() {
    let mut hold = HoldTimer::new(3.0);
    assert_eq!(hold.phase(), Phase::Idle);

    assert_eq!(hold.tick(true, 0.1), Some(HoldEvent::Started));
    assert_eq!(hold.elapsed_secs(), 0.0);
    for _ in 0..20 {
        assert_eq!(hold.tick(true, 0.1), None);
    }
    assert!((hold.elapsed_secs() - 2.0).abs() < 1e-9);

    assert_eq!(hold.tick(false, 0.1), Some(HoldEvent::Interrupted));
    assert_eq!(hold.elapsed_secs(), 0.0);
    assert_eq!(hold.phase(), Phase::Detecting);
    assert_eq!(hold.percent(), 0.0);

    // Repeated misses stay quiet.
    assert_eq!(hold.tick(false, 0.1), None);
}

#[test]
fn test_hold_succeeds_exactly_once() {
    let mut hold = HoldTimer::new(3.0);
    hold.tick(true, 0.0);
    hold.tick(true, 1.5);
    assert_eq!(hold.tick(true, 1.5), Some(HoldEvent::Succeeded));
    assert_eq!(hold.phase(), Phase::Succeeded);

    assert_eq!(hold.tick(true, 1.0), None);
    assert_eq!(hold.tick(false, 1.0), None);
    assert_eq!(hold.phase(), Phase::Succeeded);
}

#[test]
fn test_hold_ignores_negative_dt() {
    let mut hold = HoldTimer::new(1.0);
    hold.tick(true, 0.0);
    hold.tick(true, -5.0);
    assert_eq!(hold.elapsed_secs(), 0.0);
}

#[test]
fn test_halted_hold_never_succeeds() {
    let mut hold = HoldTimer::new(0.5);
    hold.tick(true, 0.0);
    hold.halt();
    assert_eq!(hold.tick(true, 1.0), None);
    assert_eq!(hold.phase(), Phase::Failed);

    hold.reset();
    assert_eq!(hold.phase(), Phase::Idle);
}

#[test]
fn test_countdown_expires_on_budget_tick() {
    let mut countdown = Countdown::new(3);
    assert_eq!(countdown.tick(), CountdownEvent::Tick { remaining: 2 });
    assert_eq!(countdown.tick(), CountdownEvent::Tick { remaining: 1 });
    assert_eq!(countdown.tick(), CountdownEvent::Expired);
    assert!(countdown.is_expired());
    assert_eq!(countdown.remaining_secs(), 0);
    assert_eq!(countdown.tick(), CountdownEvent::Halted);
}

#[test]
fn test_cancelled_countdown_is_silent() {
    let mut countdown = Countdown::new(5);
    countdown.tick();
    countdown.cancel();
    assert!(countdown.is_halted());
    assert_eq!(countdown.tick(), CountdownEvent::Halted);
    assert_eq!(countdown.remaining_secs(), 4);

    countdown.reset();
    assert_eq!(countdown.remaining_secs(), 5);
    assert!(!countdown.is_halted());
}

#[test]
fn test_success_blocks_later_expiry() {
    let mut timers = RoundTimers::new(0.0, 3);
    assert_eq!(timers.on_countdown(), Some(RoundEvent::CountdownTick { remaining: 2 }));
    assert_eq!(timers.on_match(true, 0.03), Some(RoundEvent::Succeeded));

    assert_eq!(timers.on_countdown(), None);
    assert_eq!(timers.on_countdown(), None);
    assert_eq!(timers.phase(), Phase::Succeeded);
}

#[test]
fn test_expiry_blocks_later_success() {
    let mut timers = RoundTimers::new(0.0, 1);
    assert_eq!(timers.on_countdown(), Some(RoundEvent::Failed));
    assert_eq!(timers.on_match(true, 0.03), None);
    assert_eq!(timers.phase(), Phase::Failed);
    assert!(timers.is_terminal());
}

#[test]
fn test_untimed_round_has_no_countdown() {
    let mut timers = RoundTimers::new(3.0, 0);
    assert!(!timers.is_timed());
    assert_eq!(timers.on_countdown(), None);
    assert_eq!(timers.state().countdown_remaining_secs, None);
    assert_eq!(timers.on_match(true, 0.0), Some(RoundEvent::HoldStarted));
    assert_eq!(timers.on_match(false, 0.1), Some(RoundEvent::HoldInterrupted));
}

#[test]
fn test_scheduler_orders_due_ticks() {
    let mut scheduler = TickScheduler::new();
    scheduler.schedule_interval('f', 0.25, 0.0);
    scheduler.schedule_interval('c', 1.0, 0.0);

    let mut fired = Vec::new();
    for now in [0.25, 0.5, 0.75, 1.0] {
        while let Some(tick) = scheduler.next_due(now) {
            fired.push((tick.task, tick.at));
        }
    }
    assert_eq!(fired, vec![('f', 0.25), ('f', 0.5), ('f', 0.75), ('f', 1.0), ('c', 1.0)]);
    assert!(scheduler.next_due(1.0).is_none());
}

#[test]
fn test_late_pump_fires_each_task_once() {
    let mut scheduler = TickScheduler::new();
    scheduler.schedule_interval('f', 0.25, 0.0);
    scheduler.schedule_interval('c', 1.0, 0.0);

    let mut fired = Vec::new();
    while let Some(tick) = scheduler.next_due(3.6) {
        fired.push((tick.task, tick.dt));
    }
    assert_eq!(fired, vec![('f', 3.6), ('c', 3.6)]);

    // Missed intervals are skipped; the schedule stays on its grid.
    assert!(scheduler.next_due(3.7).is_none());
    let tick = scheduler.next_due(3.75).unwrap();
    assert_eq!(tick.task, 'f');
    assert_eq!(tick.at, 3.75);
    assert!((tick.dt - 0.15).abs() < 1e-9);
    assert!(scheduler.next_due(3.75).is_none());
}

#[test]
fn test_cancel_during_tie_suppresses_the_other_tick() {
    let mut scheduler = TickScheduler::new();
    let hold = scheduler.schedule_interval("hold", 1.0, 0.0);
    let countdown = scheduler.schedule_interval("countdown", 1.0, 0.0);

    let first = scheduler.next_due(1.0).unwrap();
    assert_eq!(first.id, hold);
    assert!(scheduler.cancel(countdown));
    assert!(!scheduler.is_scheduled(countdown));
    assert_eq!(scheduler.next_due(1.0), None);
    assert_eq!(scheduler.len(), 1);
}

#[test]
fn test_tick_dt_is_time_since_previous_tick() {
    let mut scheduler = TickScheduler::new();
    scheduler.schedule_interval((), 0.5, 2.0);
    assert!(scheduler.next_due(2.4).is_none());

    let tick = scheduler.next_due(2.6).unwrap();
    assert_eq!(tick.at, 2.5);
    assert!((tick.dt - 0.6).abs() < 1e-9);

    let tick = scheduler.next_due(3.0).unwrap();
    assert_eq!(tick.at, 3.0);
    assert!((tick.dt - 0.4).abs() < 1e-9);

    scheduler.cancel_all();
    assert!(scheduler.is_empty());
}

#[test]
fn test_manual_clock_shares_time() {
    let clock = ManualClock::new(1.0);
    let view = clock.clone();
    assert_eq!(clock.advance(0.5), 1.5);
    assert_eq!(view.now(), 1.5);
    view.set(10.0);
    assert_eq!(clock.now(), 10.0);
}
