use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::DbPool;
use crate::db::log::ttlog;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::scan::NewScan;
use crate::models::slot::EquipmentSlot;
use crate::ui::messages;
use chrono::Utc;

/// `record` — store one scan event.
///
/// Scans for unknown worker IDs are accepted: the reader on the gate
/// cannot know the roster, and the calculator skips them on read.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Record {
        worker_id,
        tag,
        label,
        at,
    } = cmd
    {
        let scan_time = match at {
            Some(stamp) => crate::utils::date::parse_local_stamp(stamp, cfg.offset()?)
                .ok_or_else(|| AppError::InvalidTimestamp(stamp.clone()))?,
            None => Utc::now(),
        };

        if let Some(l) = label {
            if EquipmentSlot::from_label(l).is_none() {
                messages::warning(format!(
                    "Label {l:?} matches no slot (expected Hat, Shirt, Boot or Glove)"
                ));
            }
        }

        let pool = DbPool::new(&cfg.database)?;
        if !queries::worker_exists(&pool.conn, *worker_id)? {
            messages::warning(format!(
                "Worker {worker_id} is not enrolled; scan stored anyway"
            ));
        }

        let scan = NewScan {
            worker_id: Some(*worker_id),
            scan_time: Some(scan_time),
            scanned_tag_id: tag.clone(),
            equipment_label: label.clone(),
            source: "cli".to_string(),
        };
        let id = queries::insert_scan(&pool.conn, &scan)?;
        ttlog(&pool.conn, "record", Some(&worker_id.to_string()), None)?;
        messages::success(format!("Recorded scan {id} for worker {worker_id}"));
    }
    Ok(())
}
