//! Input feature slice: the shell prompt.

mod line_buffer;
mod render;
mod state;
mod update;

pub use line_buffer::{CursorMove, LineBuffer};
pub use render::{PROMPT_PREFIX, field_spans, prompt_line};
pub use state::InputState;
pub use update::{InputOutcome, handle_key, handle_paste};
