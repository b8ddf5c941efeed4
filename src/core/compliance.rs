//! Compliance calculator: joins a worker list with a window of scan events
//! and derives per-slot gear status plus the latest scan timestamp.
//!
//! Pure computation: no I/O, no mutation of inputs. Window selection (which
//! scans are "today") is the caller's job and must happen before this runs.

use crate::models::scan::ScanEvent;
use crate::models::slot::EquipmentSlot;
use crate::models::status::WorkerStatus;
use crate::models::worker::Worker;
use std::collections::HashMap;

/// How a scan is judged against a worker's equipment slots.
///
/// Early deployments trusted the label the scanning device asserted; tag
/// matching verifies the physical tag against the worker's assignment and is
/// the default. Under `Tag`, a scan that carries no tag ID but does carry a
/// label still falls back to label matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    #[default]
    Tag,
    Label,
}

impl MatchPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tag" => Some(MatchPolicy::Tag),
            "label" => Some(MatchPolicy::Label),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPolicy::Tag => "tag",
            MatchPolicy::Label => "label",
        }
    }
}

/// Compute one WorkerStatus per input worker, preserving input order.
///
/// Skip rules (silent, never an error):
/// - scan without worker_id or scan_time
/// - scan without a usable signal (no tag ID under `Tag` and no label; no
///   label under `Label`)
/// - scan whose worker_id resolves to no worker in the input list
///
/// A scan that is attributable but matches no slot (e.g. an unassigned tag)
/// still advances latest_scan.
pub fn compute(workers: &[Worker], scans: &[ScanEvent], policy: MatchPolicy) -> Vec<WorkerStatus> {
    let mut out: Vec<WorkerStatus> = workers.iter().map(WorkerStatus::new).collect();

    // worker id -> index into out, so output order stays input order
    let mut index: HashMap<i64, usize> = HashMap::with_capacity(workers.len());
    for (i, w) in workers.iter().enumerate() {
        index.insert(w.id, i);
    }

    for scan in scans {
        let Some(worker_id) = scan.worker_id else {
            continue;
        };
        let Some(scan_time) = scan.scan_time else {
            continue;
        };
        if !has_signal(scan, policy) {
            continue;
        }
        // Unknown worker: expected (test scans, removed workers), not an error
        let Some(&i) = index.get(&worker_id) else {
            continue;
        };

        let status = &mut out[i];
        status.record_scan_time(scan_time);

        for slot in EquipmentSlot::ALL {
            if matches_slot(scan, &workers[i], slot, policy) {
                status.set_slot(slot);
            }
        }
    }

    out
}

/// Whether the scan carries enough data to participate at all.
fn has_signal(scan: &ScanEvent, policy: MatchPolicy) -> bool {
    match policy {
        MatchPolicy::Tag => scan.scanned_tag_id.is_some() || scan.equipment_label.is_some(),
        MatchPolicy::Label => scan.equipment_label.is_some(),
    }
}

fn matches_slot(
    scan: &ScanEvent,
    worker: &Worker,
    slot: EquipmentSlot,
    policy: MatchPolicy,
) -> bool {
    match policy {
        MatchPolicy::Tag => match scan.scanned_tag_id.as_deref() {
            // Verify the physical tag against the worker's assignment
            Some(tag) => slot.assigned_tag(worker) == Some(tag),
            // No tag read: fall back to the device-asserted label
            None => label_matches(scan, slot),
        },
        MatchPolicy::Label => label_matches(scan, slot),
    }
}

/// Case-sensitive exact match against the slot's canonical name, regardless
/// of which tag was physically read or assigned.
fn label_matches(scan: &ScanEvent, slot: EquipmentSlot) -> bool {
    scan.equipment_label.as_deref() == Some(slot.label())
}
