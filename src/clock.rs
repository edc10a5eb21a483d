use std::time::{Duration, Instant};

/// One-second cadence of the elapsed-time schedule.
const SECOND: Duration = Duration::from_secs(1);

/// Events a clock poll can deliver.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ClockEvent {
    /// A movement tick is due.
    Movement,
    /// A wall-clock second has elapsed.
    Second,
}

/// Driver for the two periodic schedules: movement ticks and the
/// elapsed-seconds timer.
///
/// Deadlines exist only between `start` and `stop`. `stop` clears them
/// synchronously, so a poll issued afterwards delivers nothing even when a
/// deadline had already passed; a stale tick firing after pause or reset
/// would corrupt the session.
#[derive(Debug, Clone)]
pub struct GameClock {
    tick_interval: Duration,
    next_movement: Option<Instant>,
    next_second: Option<Instant>,
}

impl GameClock {
    /// Creates a stopped clock with the given movement tick interval.
    #[must_use]
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            next_movement: None,
            next_second: None,
        }
    }

    /// Returns true while both schedules have live deadlines.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_movement.is_some()
    }

    /// Arms both schedules, with the first deadlines one full interval out.
    pub fn start(&mut self, now: Instant) {
        self.next_movement = Some(now + self.tick_interval);
        self.next_second = Some(now + SECOND);
    }

    /// Disarms both schedules.
    pub fn stop(&mut self) {
        self.next_movement = None;
        self.next_second = None;
    }

    /// Collects every schedule that is due at `now` and re-arms it.
    ///
    /// Each schedule fires at most once per poll and reschedules relative
    /// to `now`, so a stalled host loop resumes at the normal cadence
    /// instead of delivering a burst of catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> Vec<ClockEvent> {
        let mut events = Vec::new();

        if let Some(deadline) = self.next_movement {
            if now >= deadline {
                self.next_movement = Some(now + self.tick_interval);
                events.push(ClockEvent::Movement);
            }
        }

        if let Some(deadline) = self.next_second {
            if now >= deadline {
                self.next_second = Some(now + SECOND);
                events.push(ClockEvent::Second);
            }
        }

        events
    }

    /// Returns the earliest armed deadline, for host-loop poll timeouts.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.next_movement, self.next_second) {
            (Some(movement), Some(second)) => Some(movement.min(second)),
            (Some(deadline), None) | (None, Some(deadline)) => Some(deadline),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{ClockEvent, GameClock};

    const TICK: Duration = Duration::from_millis(160);

    #[test]
    fn stopped_clock_delivers_nothing() {
        let mut clock = GameClock::new(TICK);
        let now = Instant::now();

        assert!(!clock.is_running());
        assert!(clock.poll(now + Duration::from_secs(5)).is_empty());
        assert_eq!(clock.next_deadline(), None);
    }

    #[test]
    fn movement_fires_after_one_interval() {
        let mut clock = GameClock::new(TICK);
        let now = Instant::now();
        clock.start(now);

        assert!(clock.poll(now + Duration::from_millis(100)).is_empty());
        assert_eq!(
            clock.poll(now + Duration::from_millis(160)),
            vec![ClockEvent::Movement]
        );
    }

    #[test]
    fn second_timer_fires_independently_of_movement() {
        let mut clock = GameClock::new(TICK);
        let now = Instant::now();
        clock.start(now);

        let events = clock.poll(now + Duration::from_millis(1000));
        assert!(events.contains(&ClockEvent::Movement));
        assert!(events.contains(&ClockEvent::Second));
    }

    #[test]
    fn stop_cancels_overdue_deadlines() {
        let mut clock = GameClock::new(TICK);
        let now = Instant::now();
        clock.start(now);
        clock.stop();

        // Both deadlines were long past; a stopped clock must stay silent.
        assert!(clock.poll(now + Duration::from_secs(10)).is_empty());
        assert_eq!(clock.next_deadline(), None);
    }

    #[test]
    fn restart_rearms_full_intervals() {
        let mut clock = GameClock::new(TICK);
        let now = Instant::now();
        clock.start(now);
        clock.stop();

        let resumed = now + Duration::from_millis(500);
        clock.start(resumed);

        assert!(clock.poll(resumed + Duration::from_millis(100)).is_empty());
        assert_eq!(
            clock.poll(resumed + TICK),
            vec![ClockEvent::Movement]
        );
    }

    #[test]
    fn stalled_poll_does_not_burst() {
        let mut clock = GameClock::new(TICK);
        let now = Instant::now();
        clock.start(now);

        // Three intervals pass before the host polls again; only one
        // movement event comes out and the cadence restarts from the poll.
        let late = now + TICK * 3;
        assert_eq!(clock.poll(late), vec![ClockEvent::Movement]);
        assert!(clock.poll(late + Duration::from_millis(10)).is_empty());
    }

    #[test]
    fn next_deadline_is_the_earlier_schedule() {
        let mut clock = GameClock::new(TICK);
        let now = Instant::now();
        clock.start(now);

        assert_eq!(clock.next_deadline(), Some(now + TICK));
    }
}
