//! Application configuration.
//!
//! Centralized configuration for the unlocker frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The unlock service that strips workbook passwords.
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Application name, shown in the header and page title.
pub const APP_NAME: &str = "Bulk Excel Unlocker";

/// Maximum size for a single file (in bytes).
///
/// 20 MiB, enforced at intake before anything is sent.
pub const MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Filename suggested for the downloaded archive.
pub const DOWNLOAD_FILENAME: &str = "unlocked_excel_files.zip";

/// Maximum notices kept on screen at once.
pub const MAX_NOTICES: usize = 6;

/// How long a notice stays up before auto-dismissing (milliseconds).
pub const NOTICE_TTL_MS: u32 = 6_000;
