//! Tracing bridge for the levelog facade
//!
//! This crate connects the facade to the `tracing` ecosystem:
//! - `TracingLogger`: a facade backend that re-emits messages as `tracing` events
//! - `init(profile)`: single initialization point that installs a subscriber
//!   and points the facade at it
//! - `test_capture`: an in-memory subscriber layer for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use levelog_tracing::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! levelog::infof!("routed through tracing");
//! ```

pub mod adapter;
pub mod init;
pub mod test_capture;

pub use adapter::TracingLogger;
pub use init::{init, Profile};
pub use test_capture::{capture_subscriber, CapturedEvent, TestCapture, TestCaptureLayer};
