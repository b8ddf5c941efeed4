use serde::Serialize;

/// A worker and their static equipment-tag assignments.
/// Compliance flags are derived data, never stored here (see models::status).
#[derive(Debug, Clone, Serialize)]
pub struct Worker {
    pub id: i64,
    pub name: Option<String>,
    pub position: Option<String>,

    /// Tag IDs of the physical NFC tags assigned per slot.
    /// None means the slot is not tracked for this worker.
    pub hat_tag: Option<String>,
    pub shirt_tag: Option<String>,
    pub boot_tag: Option<String>,
    pub glove_tag: Option<String>,

    pub created_at: String, // ISO 8601
}

/// Fields for enrolling a new worker (id and created_at assigned on insert).
#[derive(Debug, Clone, Default)]
pub struct NewWorker {
    pub name: Option<String>,
    pub position: Option<String>,
    pub hat_tag: Option<String>,
    pub shirt_tag: Option<String>,
    pub boot_tag: Option<String>,
    pub glove_tag: Option<String>,
}
