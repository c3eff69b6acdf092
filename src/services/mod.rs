//! Long-running service surfaces
pub mod bot;
