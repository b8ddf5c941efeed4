use crate::models::worker::Worker;
use serde::Serialize;

/// The four tracked safety-gear categories.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EquipmentSlot {
    Hat,
    Shirt,
    Boot,
    Glove,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 4] = [
        EquipmentSlot::Hat,
        EquipmentSlot::Shirt,
        EquipmentSlot::Boot,
        EquipmentSlot::Glove,
    ];

    /// Canonical label as asserted by scanning devices (case-sensitive).
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentSlot::Hat => "Hat",
            EquipmentSlot::Shirt => "Shirt",
            EquipmentSlot::Boot => "Boot",
            EquipmentSlot::Glove => "Glove",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Hat" => Some(EquipmentSlot::Hat),
            "Shirt" => Some(EquipmentSlot::Shirt),
            "Boot" => Some(EquipmentSlot::Boot),
            "Glove" => Some(EquipmentSlot::Glove),
            _ => None,
        }
    }

    /// The tag ID assigned to this slot for the given worker, if any.
    pub fn assigned_tag<'a>(&self, worker: &'a Worker) -> Option<&'a str> {
        match self {
            EquipmentSlot::Hat => worker.hat_tag.as_deref(),
            EquipmentSlot::Shirt => worker.shirt_tag.as_deref(),
            EquipmentSlot::Boot => worker.boot_tag.as_deref(),
            EquipmentSlot::Glove => worker.glove_tag.as_deref(),
        }
    }
}
