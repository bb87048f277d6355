//! Typewriter feature slice: the line queue that animates command output.

mod state;
mod update;

pub use state::{
    Cue, LineQueue, MAX_ANIMATED_BACKLOG, MAX_ANIMATED_CHARS, QueueState, RenderLine,
    RevealSchedule, Speed,
};
pub use update::{handle_reveal_tick, sync_schedule};
