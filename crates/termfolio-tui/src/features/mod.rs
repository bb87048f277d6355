//! Feature slices. Each owns its state, reducer helpers and rendering.

pub mod boot;
pub mod contact;
pub mod header;
pub mod input;
pub mod transcript;
pub mod typewriter;
