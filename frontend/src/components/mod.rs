//! UI Components for the unlocker application.
//!
//! # Layout Components
//! - [`Header`] - brand bar
//! - [`Hero`] - main title and description
//! - [`Footer`] - page footer
//!
//! # Feature Components
//! - [`DropZone`] - file intake with drag & drop and per-file validation
//! - [`PasswordInput`] - shared password field with visibility toggle
//! - [`ProcessingIndicator`] - decorative progress while a request is in flight
//! - [`NoticesHost`] - transient notification stack

mod drop_zone;
mod footer;
mod header;
mod hero;
mod notices;
mod password;
mod processing;

pub use drop_zone::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use notices::*;
pub use password::*;
pub use processing::*;
