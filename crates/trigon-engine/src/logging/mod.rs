//! Logging utilities.
//!
//! Centralizes logger initialization. The rest of the crate only speaks the
//! `log` facade; `env_logger` is an implementation detail of this module.

mod init;

pub use init::{init_logging, LoggingConfig};
