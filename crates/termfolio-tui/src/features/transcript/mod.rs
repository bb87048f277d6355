//! Transcript feature slice: output lines, the inline prompt and scrolling.

mod layout;
mod render;
mod state;

pub use layout::{
    Row, RowTarget, TRANSCRIPT_MARGIN, build_rows, content_width, hit_test, live_form_index,
    viewport_height,
};
pub use render::render_transcript;
pub use state::{ScrollMode, ScrollState};
