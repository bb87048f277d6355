//! Boot feature slice: the banner shown before the shell.

mod state;
mod update;

pub use state::{BOOT_LINES, BOOT_PROMPT, BootState};
pub use update::{handle_boot_tick, handle_prompt_due};
