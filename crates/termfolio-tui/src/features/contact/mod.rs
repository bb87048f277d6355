//! Contact feature slice: the inline mail form opened by `email`.

mod render;
mod state;
mod update;

pub use render::{CLOSED_FORM, FormRow, form_rows};
pub use state::{ContactField, ContactFormState, ContactStatus};
pub use update::{ContactOutcome, handle_key, handle_paste, submit};
