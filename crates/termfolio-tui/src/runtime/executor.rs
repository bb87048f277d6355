//! Effect execution.
//!
//! Timer effects update the runtime's `Timers`; I/O effects go through the
//! injected capabilities. Failures are logged and swallowed: a missing
//! clipboard or audio device degrades the session, it never ends it.

use std::sync::Arc;
use std::time::Instant;

use super::inbox::UiEventSender;
use super::timers::Timers;
use crate::capabilities::Capabilities;
use crate::effects::UiEffect;
use crate::events::UiEvent;

pub struct EffectExecutor {
    caps: Capabilities,
    pub timers: Timers,
    inbox: UiEventSender,
    resume: Option<String>,
}

impl EffectExecutor {
    pub fn new(caps: Capabilities, inbox: UiEventSender, resume: Option<String>) -> Self {
        Self {
            caps,
            timers: Timers::default(),
            inbox,
            resume,
        }
    }

    /// Executes one effect. `Quit` is handled by the event loop.
    pub fn execute(&mut self, effect: UiEffect, now: Instant) {
        match effect {
            UiEffect::Quit => {}

            UiEffect::ScheduleReveal(schedule) => self.timers.schedule_reveal(schedule, now),
            UiEffect::CancelReveal => self.timers.cancel_reveal(),
            UiEffect::StartBootTimer { interval } => self.timers.start_boot(interval, now),
            UiEffect::StopBootTimer => self.timers.stop_boot(),
            UiEffect::ScheduleOnce { delay, timer } => {
                self.timers.schedule_once(delay, timer, now);
            }

            UiEffect::PlayCue(cue) => self.caps.audio.play(cue),
            UiEffect::CopyToClipboard { text } => match self.caps.clipboard.copy(&text) {
                Ok(()) => {
                    let _ = self.inbox.send(UiEvent::ClipboardCopied);
                }
                Err(err) => tracing::warn!(%err, "clipboard unavailable"),
            },
            UiEffect::OpenUrl { url } => self.spawn_open(url),
            UiEffect::OpenResume => match self.resume.clone() {
                Some(resume) => self.spawn_open(resume),
                None => tracing::warn!("no resume configured"),
            },
            UiEffect::BroadcastTheme(theme) => self.caps.notifier.theme_changed(theme),
        }
    }

    /// Opens `target` on the blocking pool; handlers like `xdg-open` can
    /// take a while to return.
    fn spawn_open(&self, target: String) {
        let opener = Arc::clone(&self.caps.opener);
        tokio::task::spawn_blocking(move || {
            if let Err(err) = opener.open(&target) {
                tracing::warn!(%err, "open failed");
            }
        });
    }
}
