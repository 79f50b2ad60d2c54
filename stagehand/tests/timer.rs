use stagehand::event::Event;
use stagehand::observer::Recorder;
use stagehand::task::Status;
use stagehand::time::{Clock, ManualClock, MonotonicClock};
use stagehand::{SchedulerBuilder, tasks};

use std::time::Duration;

#[test]
fn half_second_timer_with_tenth_second_tick() {
    let mut scheduler = SchedulerBuilder::new()
        .tick(Duration::from_millis(100))
        .clock(ManualClock::new())
        .observer(Recorder::new())
        .build();

    let id = scheduler.register(tasks::timer(Duration::from_millis(500)));

    scheduler.run_pass();
    let started = scheduler.clock().now();

    while scheduler.clock().elapsed_since(started) < Duration::from_millis(500) {
        scheduler.clock().advance(Duration::from_millis(100));
        scheduler.run_pass();

        let fired = scheduler
            .observer()
            .position(&Event::TimerFired { task: id })
            .is_some();
        let elapsed = scheduler.clock().elapsed_since(started);

        assert_eq!(fired, elapsed >= Duration::from_millis(500));
    }

    assert_eq!(scheduler.registry().status(id), Some(Status::Complete));

    scheduler.clock().advance(Duration::from_secs(1));
    scheduler.run_pass();

    let fired = scheduler
        .observer()
        .events()
        .iter()
        .filter(|e| matches!(e, Event::TimerFired { .. }))
        .count();

    assert_eq!(fired, 1);
}

#[test]
fn completion_lands_within_one_tick_of_duration() {
    let tick = Duration::from_millis(100);

    for millis in [0, 50, 100, 230, 500, 999] {
        let duration = Duration::from_millis(millis);

        let mut scheduler = SchedulerBuilder::new()
            .tick(tick)
            .clock(ManualClock::new())
            .observer(Recorder::new())
            .build();

        scheduler.register(tasks::timer(duration));

        let report = scheduler.run();

        assert!(report.elapsed >= duration, "{millis}ms fired early");
        assert!(report.elapsed < duration + tick, "{millis}ms fired late");
    }
}

#[test]
fn real_clock_waits_at_least_duration() {
    let clock = MonotonicClock::new();
    let start = clock.now();

    let mut scheduler = SchedulerBuilder::new()
        .tick(Duration::from_millis(10))
        .observer(Recorder::new())
        .build();

    scheduler.register(tasks::timer(Duration::from_millis(60)));
    scheduler.run();

    assert!(
        clock.elapsed_since(start) >= Duration::from_millis(60),
        "timer should wait at least the specified duration"
    );
    assert_eq!(
        scheduler.observer().lines(),
        ["begin waiting 0.1 seconds", "timer ready", "all tasks complete"]
    );
}

#[test]
fn start_is_taken_at_first_poll_not_registration() {
    let mut scheduler = SchedulerBuilder::new()
        .clock(ManualClock::new())
        .observer(Recorder::new())
        .build();

    let id = scheduler.register(tasks::timer(Duration::from_millis(300)));

    scheduler.clock().advance(Duration::from_secs(10));
    scheduler.run_pass();
    scheduler.run_pass();

    let task = scheduler.registry().get(id).unwrap();
    assert_eq!(task.status(), Status::Active);
    assert_eq!(task.kind(), "timer");
}
