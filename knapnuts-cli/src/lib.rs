use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod demo;
pub mod io;

/// Start of the process, reference point for the timestamps in the log.
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
