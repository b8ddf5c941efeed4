use crate::models::slot::EquipmentSlot;
use crate::models::worker::Worker;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-worker compliance result for one time window.
/// Computed fresh on every read; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerStatus {
    pub id: i64,
    pub name: Option<String>,
    pub position: Option<String>,

    pub hat_tag: Option<String>,
    pub shirt_tag: Option<String>,
    pub boot_tag: Option<String>,
    pub glove_tag: Option<String>,

    pub hat_status: bool,
    pub shirt_status: bool,
    pub boot_status: bool,
    pub glove_status: bool,

    /// Most recent scan attributable to this worker in the window.
    pub latest_scan: Option<DateTime<Utc>>,
}

impl WorkerStatus {
    /// Baseline status: every slot false, no scan seen.
    pub fn new(worker: &Worker) -> Self {
        Self {
            id: worker.id,
            name: worker.name.clone(),
            position: worker.position.clone(),
            hat_tag: worker.hat_tag.clone(),
            shirt_tag: worker.shirt_tag.clone(),
            boot_tag: worker.boot_tag.clone(),
            glove_tag: worker.glove_tag.clone(),
            hat_status: false,
            shirt_status: false,
            boot_status: false,
            glove_status: false,
            latest_scan: None,
        }
    }

    pub fn set_slot(&mut self, slot: EquipmentSlot) {
        match slot {
            EquipmentSlot::Hat => self.hat_status = true,
            EquipmentSlot::Shirt => self.shirt_status = true,
            EquipmentSlot::Boot => self.boot_status = true,
            EquipmentSlot::Glove => self.glove_status = true,
        }
    }

    pub fn slot(&self, slot: EquipmentSlot) -> bool {
        match slot {
            EquipmentSlot::Hat => self.hat_status,
            EquipmentSlot::Shirt => self.shirt_status,
            EquipmentSlot::Boot => self.boot_status,
            EquipmentSlot::Glove => self.glove_status,
        }
    }

    /// Track the most recent attributable scan time.
    pub fn record_scan_time(&mut self, t: DateTime<Utc>) {
        match self.latest_scan {
            Some(prev) if prev >= t => {}
            _ => self.latest_scan = Some(t),
        }
    }
}
