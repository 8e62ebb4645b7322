//! Block until filesystem paths appear or disappear.
//!
//! The `waitpath` binary is a thin wrapper over this crate: [`args::parse`]
//! turns the command line into a [`Config`], and [`wait_all`] polls every
//! path until the set reaches its target state, a deadline passes, or a
//! signal arrives.
//!
//! ```no_run
//! use std::sync::atomic::AtomicBool;
//! use waitpath::{PathWait, wait_all};
//!
//! let waits = [PathWait::new("server.pid", false)];
//! wait_all(&waits, None, &AtomicBool::new(false));
//! ```

pub mod args;
pub mod error;
pub mod logging;
pub mod signals;
pub mod wait;

pub use args::{Config, Parsed};
pub use error::UsageError;
pub use wait::{wait_all, Outcome, PathWait, POLL_INTERVAL};
