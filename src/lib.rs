//! Remote-controlled auto clicker.
//!
//! A single [`Clicker`] owns the clicking state of the process. The
//! [`server`] module exposes it over HTTP together with a small control panel.

pub mod click_log;
pub mod clicker;
pub mod config;
pub mod emitter;
pub mod error;
pub mod interval;
pub mod server;

pub use click_log::{ClickLog, ClickLogEntry};
pub use clicker::{Clicker, ClickerStatus};
pub use config::Cli;
pub use emitter::{ClickEmitter, EnigoEmitter};
pub use error::{ClickerError, EmitError};
pub use interval::{IntervalConfig, IntervalMode};
pub use server::ServerConfig;
