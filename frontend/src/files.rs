//! File intake validation.
//!
//! Pure screening logic for candidate files, kept free of browser types so
//! it can be exercised directly in unit tests. Components project a
//! `web_sys::File` down to a [`FileMeta`] and feed it through here.

use crate::config::MAX_FILE_SIZE;

/// MIME types the unlock service accepts.
const SPREADSHEET_TYPES: &[&str] = &[
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel.sheet.macroEnabled.12",
    "application/vnd.ms-excel.sheet.binary.macroEnabled.12",
];

/// Plain-data view of a candidate file.
#[derive(Clone, Debug, PartialEq)]
pub struct FileMeta {
    /// Filename as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Declared MIME type
    pub content_type: String,
}

/// Why a candidate was turned away at intake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// A file with the same name is already selected.
    Duplicate,
    /// Declared type is not one of the accepted spreadsheet types.
    NotSpreadsheet,
    /// File is larger than [`MAX_FILE_SIZE`].
    TooLarge,
}

impl RejectReason {
    /// User-facing message for the rejection of `name`.
    pub fn message(&self, name: &str) -> String {
        match self {
            RejectReason::Duplicate => {
                format!("{} is already in your upload list.", name)
            }
            RejectReason::NotSpreadsheet => format!(
                "{} is not an Excel file. Only .xlsx and .xls files are allowed.",
                name
            ),
            RejectReason::TooLarge => {
                format!("{} exceeds the maximum file size of 20MB.", name)
            }
        }
    }
}

/// A candidate that did not make it into the selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Rejection {
    /// Index into the candidate batch
    pub index: usize,
    pub name: String,
    pub reason: RejectReason,
}

/// Outcome of screening one candidate batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Intake {
    /// Indices into the candidate batch, in input order
    pub accepted: Vec<usize>,
    pub rejected: Vec<Rejection>,
}

pub fn is_spreadsheet_type(content_type: &str) -> bool {
    SPREADSHEET_TYPES.contains(&content_type)
}

/// Validates a single candidate against the current selection names.
///
/// Checks run in order: duplicate name, declared type, size ceiling. The
/// first failure wins. A file of exactly [`MAX_FILE_SIZE`] bytes passes.
pub fn validate_candidate(meta: &FileMeta, existing_names: &[String]) -> Result<(), RejectReason> {
    if existing_names.iter().any(|n| n == &meta.name) {
        return Err(RejectReason::Duplicate);
    }
    if !is_spreadsheet_type(&meta.content_type) {
        return Err(RejectReason::NotSpreadsheet);
    }
    if meta.size > MAX_FILE_SIZE {
        return Err(RejectReason::TooLarge);
    }
    Ok(())
}

/// Screens a batch of candidates against the current selection.
///
/// Duplicates are checked against the selection as it stood before the
/// batch, so two same-named files inside one batch are both eligible.
/// Rejections carry the candidate's index and name so each one can be
/// reported individually.
pub fn screen_candidates(candidates: &[FileMeta], existing_names: &[String]) -> Intake {
    let mut intake = Intake::default();
    for (index, meta) in candidates.iter().enumerate() {
        match validate_candidate(meta, existing_names) {
            Ok(()) => intake.accepted.push(index),
            Err(reason) => intake.rejected.push(Rejection {
                index,
                name: meta.name.clone(),
                reason,
            }),
        }
    }
    intake
}

/// Removes the entry at `index`, preserving the order of the rest.
///
/// Out-of-range indices leave the list untouched.
pub fn without_index<T>(mut items: Vec<T>, index: usize) -> Vec<T> {
    if index < items.len() {
        items.remove(index);
    }
    items
}

/// Formats a byte count for display.
///
/// Base-1024 ladder with up to two decimals, trailing zeros trimmed:
/// `0` -> "0 Bytes", `1024` -> "1 KB", `1536` -> "1.5 KB".
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let mut formatted = format!("{:.2}", value);
    if formatted.contains('.') {
        formatted = formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }
    format!("{} {}", formatted, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
    const XLS: &str = "application/vnd.ms-excel";

    fn meta(name: &str, size: u64, content_type: &str) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            size,
            content_type: content_type.to_string(),
        }
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let existing = vec!["report.xlsx".to_string()];
        let candidate = meta("report.xlsx", 100, XLSX);
        assert_eq!(
            validate_candidate(&candidate, &existing),
            Err(RejectReason::Duplicate)
        );
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let existing = vec!["Report.xlsx".to_string()];
        let candidate = meta("report.xlsx", 100, XLSX);
        assert_eq!(validate_candidate(&candidate, &existing), Ok(()));
    }

    #[test]
    fn disallowed_type_is_rejected() {
        let candidate = meta("notes.txt", 100, "text/plain");
        assert_eq!(
            validate_candidate(&candidate, &[]),
            Err(RejectReason::NotSpreadsheet)
        );
    }

    #[test]
    fn all_spreadsheet_types_are_accepted() {
        for content_type in super::SPREADSHEET_TYPES {
            let candidate = meta("book.xlsx", 100, content_type);
            assert_eq!(validate_candidate(&candidate, &[]), Ok(()));
        }
    }

    #[test]
    fn oversize_file_is_rejected_and_limit_is_inclusive() {
        let at_limit = meta("big.xlsx", MAX_FILE_SIZE, XLSX);
        assert_eq!(validate_candidate(&at_limit, &[]), Ok(()));

        let over = meta("bigger.xlsx", MAX_FILE_SIZE + 1, XLSX);
        assert_eq!(validate_candidate(&over, &[]), Err(RejectReason::TooLarge));
    }

    #[test]
    fn screen_reports_each_rejection_individually() {
        let existing = vec!["a.xlsx".to_string()];
        let batch = vec![
            meta("a.xlsx", 100, XLSX),
            meta("b.xls", 100, XLS),
            meta("c.txt", 100, "text/plain"),
            meta("d.xlsx", MAX_FILE_SIZE + 1, XLSX),
        ];

        let intake = screen_candidates(&batch, &existing);
        assert_eq!(intake.accepted, vec![1]);
        assert_eq!(intake.rejected.len(), 3);
        assert_eq!(intake.rejected[0].reason, RejectReason::Duplicate);
        assert_eq!(intake.rejected[1].reason, RejectReason::NotSpreadsheet);
        assert_eq!(intake.rejected[2].reason, RejectReason::TooLarge);
        assert_eq!(intake.rejected[2].name, "d.xlsx");
    }

    #[test]
    fn batch_internal_duplicates_are_both_accepted() {
        let batch = vec![meta("same.xlsx", 1, XLSX), meta("same.xlsx", 2, XLSX)];
        let intake = screen_candidates(&batch, &[]);
        assert_eq!(intake.accepted, vec![0, 1]);
        assert!(intake.rejected.is_empty());
    }

    #[test]
    fn without_index_preserves_relative_order() {
        let items = vec!["a", "b", "c", "d"];
        assert_eq!(without_index(items.clone(), 1), vec!["a", "c", "d"]);
        assert_eq!(without_index(items.clone(), 0), vec!["b", "c", "d"]);
        assert_eq!(without_index(items.clone(), 3), vec!["a", "b", "c"]);
        assert_eq!(without_index(items, 7), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn format_file_size_fixed_points() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
    }

    #[test]
    fn format_file_size_trims_decimals() {
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1126), "1.1 KB");
    }
}
