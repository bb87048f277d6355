//! Runtime-owned timers.
//!
//! The event loop asks for the nearest deadline to size its poll timeout,
//! then collects whatever fell due as `UiEvent`s. Everything here is plain
//! `Instant` arithmetic, so dropping the runtime drops every timer.

use std::time::{Duration, Instant};

use crate::effects::OneShot;
use crate::events::UiEvent;
use crate::typewriter::RevealSchedule;

/// Most periodic ticks emitted for one timer per loop iteration. A loop that
/// stalled longer than this skips ahead instead of replaying every tick.
pub const MAX_CATCH_UP: u32 = 8;

#[derive(Debug, Clone, Copy)]
struct Periodic {
    interval: Duration,
    next: Instant,
}

impl Periodic {
    fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now + interval,
        }
    }

    /// Number of ticks due at `now`, advancing the next deadline.
    fn take_due(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while self.next <= now && due < MAX_CATCH_UP {
            due += 1;
            self.next += self.interval;
        }
        if self.next <= now {
            self.next = now + self.interval;
        }
        due
    }
}

#[derive(Debug, Default)]
pub struct Timers {
    reveal: Option<(u64, Periodic)>,
    boot: Option<Periodic>,
    once: Vec<(Instant, OneShot)>,
}

impl Timers {
    /// Starts the reveal timer, replacing any previous one.
    pub fn schedule_reveal(&mut self, schedule: RevealSchedule, now: Instant) {
        self.reveal = Some((schedule.epoch, Periodic::new(schedule.interval, now)));
    }

    pub fn cancel_reveal(&mut self) {
        self.reveal = None;
    }

    pub fn start_boot(&mut self, interval: Duration, now: Instant) {
        self.boot = Some(Periodic::new(interval, now));
    }

    pub fn stop_boot(&mut self) {
        self.boot = None;
    }

    pub fn schedule_once(&mut self, delay: Duration, timer: OneShot, now: Instant) {
        self.once.push((now + delay, timer));
    }

    /// The earliest pending deadline, if any timer is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        let periodic = self
            .reveal
            .map(|(_, timer)| timer.next)
            .into_iter()
            .chain(self.boot.map(|timer| timer.next));
        let once = self.once.iter().map(|(deadline, _)| *deadline);
        periodic.chain(once).min()
    }

    /// Events for every timer due at `now`.
    pub fn collect_due(&mut self, now: Instant) -> Vec<UiEvent> {
        let mut events = Vec::new();

        if let Some(boot) = &mut self.boot {
            for _ in 0..boot.take_due(now) {
                events.push(UiEvent::BootTick);
            }
        }

        if let Some((epoch, reveal)) = &mut self.reveal {
            let epoch = *epoch;
            for _ in 0..reveal.take_due(now) {
                events.push(UiEvent::RevealTick { epoch });
            }
        }

        let mut due: Vec<(Instant, OneShot)> = Vec::new();
        self.once.retain(|&(deadline, timer)| {
            if deadline <= now {
                due.push((deadline, timer));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(deadline, _)| *deadline);
        events.extend(due.into_iter().map(|(_, timer)| one_shot_event(timer)));

        events
    }
}

fn one_shot_event(timer: OneShot) -> UiEvent {
    match timer {
        OneShot::BootPrompt => UiEvent::BootPromptDue,
        OneShot::ContactReset { generation } => UiEvent::ContactResetDue { generation },
        OneShot::NoticeExpiry { id } => UiEvent::NoticeExpired { id },
    }
}
