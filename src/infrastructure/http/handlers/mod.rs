//! HTTP Handlers

mod ping;
mod run;

pub use ping::ping;
pub use run::run_job;
