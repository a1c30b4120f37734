//! Logging utilities.
//!
//! Centralizes logger initialization on top of the `log` facade. The
//! diagnostic channel's default sink writes through this logger under the
//! `glsk::diag` target.

mod init;

pub use init::{init_logging, LoggingConfig, LOG_ENV};
