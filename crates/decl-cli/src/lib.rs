//! CLI library components for the declaration converter.

pub mod commands;
pub mod logging;
