//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Selection Types** - files currently queued for unlocking
//! - **Processing Types** - the submission state machine
//! - **Notice Types** - transient user-facing notifications
//! - **Error Types** - frontend error handling

use std::fmt;

// =============================================================================
// Selection Types
// =============================================================================

/// A file the user has queued for unlocking.
///
/// Carries the plain metadata used for display and validation alongside the
/// raw browser handle that goes into the multipart request. Names are unique
/// within a selection (exact, case-sensitive match), enforced at intake.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    /// Filename as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Declared MIME type
    pub content_type: String,
    /// Browser file handle, uploaded as-is
    pub handle: web_sys::File,
}

impl SelectedFile {
    pub fn from_handle(handle: web_sys::File) -> Self {
        Self {
            name: handle.name(),
            size: handle.size() as u64,
            content_type: handle.type_(),
            handle,
        }
    }
}

// =============================================================================
// Processing Types
// =============================================================================

/// Opaque archive returned by the unlock service.
///
/// The bytes are never inspected; they are handed to the download trigger
/// verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct UnlockArtifact {
    pub bytes: Vec<u8>,
}

/// Submission state machine, owned by the top-level form.
///
/// Modeled as a sum type so impossible combinations (a stored result while a
/// request is in flight, a result alongside an error) cannot be represented.
/// Transitions happen only in the submit handler and its completion paths.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProcessingState {
    /// No request in flight, no result held.
    #[default]
    Idle,
    /// One unlock request is outstanding; submission is disabled.
    Processing,
    /// Last request succeeded; the artifact is ready for download.
    Done(UnlockArtifact),
}

impl ProcessingState {
    pub fn is_processing(&self) -> bool {
        matches!(self, ProcessingState::Processing)
    }

    pub fn artifact(&self) -> Option<&UnlockArtifact> {
        match self {
            ProcessingState::Done(artifact) => Some(artifact),
            _ => None,
        }
    }
}

/// Why a submit attempt was blocked before any network activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlock {
    /// The selection is empty.
    NoFiles,
    /// The password is empty or all whitespace.
    BlankPassword,
}

/// Checks the submit guards.
///
/// The password is trimmed for the check only; the value sent to the service
/// is the untrimmed original.
pub fn check_submit(file_count: usize, password: &str) -> Result<(), SubmitBlock> {
    if file_count == 0 {
        return Err(SubmitBlock::NoFiles);
    }
    if password.trim().is_empty() {
        return Err(SubmitBlock::BlankPassword);
    }
    Ok(())
}

/// Success notice body for a completed unlock of `count` files.
pub fn unlocked_message(count: usize) -> String {
    if count == 1 {
        "1 file has been unlocked.".to_string()
    } else {
        format!("{} files have been unlocked.", count)
    }
}

// =============================================================================
// Notice Types
// =============================================================================

/// Notice severity level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Error message
    Error,
}

impl NoticeLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice-info",
            NoticeLevel::Success => "notice-success",
            NoticeLevel::Error => "notice-error",
        }
    }
}

/// A transient notification shown in the notice stack.
///
/// Created through `push_notice`, dismissed manually or after a fixed
/// interval.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    /// Monotonic id, used as the render key and for dismissal
    pub id: usize,
    pub level: NoticeLevel,
    /// Short headline
    pub title: String,
    /// Detail line, may be empty
    pub message: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// The unlock service answered with a non-success status.
    Service(String),
    /// The request never completed (network failure, bad response body).
    Network(String),
    /// Browser API failure (DOM, blob or form construction).
    Browser(String),
}

impl AppError {
    /// Message suitable for a user-facing notice, without the
    /// category prefix `Display` adds for logs.
    pub fn detail(&self) -> &str {
        match self {
            AppError::Service(msg) | AppError::Network(msg) | AppError::Browser(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Service(msg) => write!(f, "Service error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_blocked_without_files() {
        assert_eq!(check_submit(0, "secret"), Err(SubmitBlock::NoFiles));
    }

    #[test]
    fn submit_blocked_on_blank_password() {
        assert_eq!(check_submit(3, ""), Err(SubmitBlock::BlankPassword));
        assert_eq!(check_submit(3, "   \t "), Err(SubmitBlock::BlankPassword));
    }

    #[test]
    fn empty_selection_reported_before_password() {
        assert_eq!(check_submit(0, ""), Err(SubmitBlock::NoFiles));
    }

    #[test]
    fn submit_allowed_with_files_and_password() {
        assert_eq!(check_submit(1, " hunter2 "), Ok(()));
    }

    #[test]
    fn unlocked_message_counts() {
        assert_eq!(unlocked_message(1), "1 file has been unlocked.");
        assert_eq!(unlocked_message(3), "3 files have been unlocked.");
    }

    #[test]
    fn default_state_is_idle() {
        let state = ProcessingState::default();
        assert!(!state.is_processing());
        assert!(state.artifact().is_none());
    }

    #[test]
    fn done_state_exposes_artifact() {
        let state = ProcessingState::Done(UnlockArtifact {
            bytes: vec![0x50, 0x4b],
        });
        assert_eq!(state.artifact().map(|a| a.bytes.as_slice()), Some(&[0x50, 0x4b][..]));
    }

    #[test]
    fn error_detail_strips_category() {
        let err = AppError::Service("bad password".to_string());
        assert_eq!(err.detail(), "bad password");
        assert_eq!(err.to_string(), "Service error: bad password");
    }
}
