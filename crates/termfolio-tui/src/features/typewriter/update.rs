//! Typewriter reducer helpers.

use super::state::{Cue, LineQueue, RevealSchedule};
use crate::effects::UiEffect;

/// Applies one reveal tick scheduled under `epoch`.
///
/// Ticks from an older epoch are dropped, so a tick that was already in
/// flight when the queue skipped or reset cannot undo that transition.
pub fn handle_reveal_tick(queue: &mut LineQueue, epoch: u64) -> Option<Cue> {
    if epoch != queue.epoch() {
        tracing::trace!(epoch, current = queue.epoch(), "stale reveal tick");
        return None;
    }
    queue.tick()
}

/// Compares the queue's wanted timer with the one the runtime is running
/// and returns the effect that reconciles them.
pub fn sync_schedule(
    queue: &LineQueue,
    scheduled: &mut Option<RevealSchedule>,
) -> Option<UiEffect> {
    let wanted = queue.schedule();
    if wanted == *scheduled {
        return None;
    }
    *scheduled = wanted;
    Some(match wanted {
        Some(schedule) => UiEffect::ScheduleReveal(schedule),
        None => UiEffect::CancelReveal,
    })
}
