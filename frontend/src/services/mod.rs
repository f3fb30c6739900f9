//! Backend communication and browser-side file handling.
//!
//! # Services
//!
//! - [`unlock`] - multipart upload to the unlock endpoint
//! - [`download`] - save-as trigger for the returned archive

pub mod download;
pub mod unlock;

pub use download::*;
pub use unlock::*;
