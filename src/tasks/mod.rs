//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the REPL.
//!
//! # Tasks
//! - Cache Reaper: removes stale cache entries once per cache interval

mod reaper;

pub use reaper::spawn_reaper_task;
