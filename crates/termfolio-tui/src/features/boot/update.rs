//! Boot sequence reducer helpers.

use std::time::Duration;

use super::state::BootState;
use crate::effects::{OneShot, UiEffect};

/// Reveals the next banner line; once the banner is exhausted, stops the
/// boot timer and arms the prompt delay.
pub fn handle_boot_tick(boot: &mut BootState, prompt_delay: Duration) -> Vec<UiEffect> {
    if boot.advance() {
        return vec![];
    }
    if boot.prompt_visible {
        return vec![UiEffect::StopBootTimer];
    }
    vec![
        UiEffect::StopBootTimer,
        UiEffect::ScheduleOnce {
            delay: prompt_delay,
            timer: OneShot::BootPrompt,
        },
    ]
}

pub fn handle_prompt_due(boot: &mut BootState) {
    if boot.is_exhausted() {
        boot.prompt_visible = true;
    }
}
