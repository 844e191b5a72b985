//! Infrastructure adapters: highlighting, warning sinks, and config.

pub mod config;
pub mod highlight;
pub mod logging;
