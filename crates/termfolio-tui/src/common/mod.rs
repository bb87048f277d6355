//! Shared helpers used across feature slices.

pub mod palette;
pub mod text;

pub use palette::Palette;
pub use text::{truncate_with_ellipsis, wrap_columns};
