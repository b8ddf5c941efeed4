use chrono::{DateTime, Utc};
use serde::Serialize;

/// An observed NFC badge tap. Append-only; immutable once written.
///
/// Every signal field is optional: scanners in the field emit incomplete
/// records and those are tolerated, never rejected. The compliance
/// calculator skips what it cannot use.
#[derive(Debug, Clone, Serialize)]
pub struct ScanEvent {
    pub id: i64,
    pub worker_id: Option<i64>,
    pub scan_time: Option<DateTime<Utc>>,
    /// The physical tag ID read by the scanner.
    pub scanned_tag_id: Option<String>,
    /// Free-text slot label asserted by the scanning device (e.g. "Hat").
    /// Less trustworthy than tag identity.
    pub equipment_label: Option<String>,
    pub source: String,
    pub created_at: String, // ISO 8601
}

/// Fields for recording a new scan (id and created_at assigned on insert).
#[derive(Debug, Clone)]
pub struct NewScan {
    pub worker_id: Option<i64>,
    pub scan_time: Option<DateTime<Utc>>,
    pub scanned_tag_id: Option<String>,
    pub equipment_label: Option<String>,
    pub source: String,
}
