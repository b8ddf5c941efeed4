use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::date::{day_window_utc, parse_date, today_in};

/// `scans` — list the scan events of one calendar day, oldest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scans { date } = cmd {
        let offset = cfg.offset()?;
        let day = match date {
            Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            None => today_in(offset),
        };

        let pool = DbPool::new(&cfg.database)?;
        let (from, to) = day_window_utc(day, offset);
        let scans = queries::load_scans_between(&pool.conn, &from, &to)?;

        if scans.is_empty() {
            messages::info(format!("No scans on {day}"));
            return Ok(());
        }

        println!(
            "{:>5}  {:>8}  {:<17} {:<12} {:<8} {:<8}",
            "ID", "Worker", "Time", "Tag", "Label", "Source"
        );
        for s in &scans {
            let time = s
                .scan_time
                .map(|t| t.with_timezone(&offset).format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:>5}  {:>8}  {:<17} {:<12} {:<8} {:<8}",
                s.id,
                s.worker_id.map(|w| w.to_string()).unwrap_or_else(|| "-".to_string()),
                time,
                s.scanned_tag_id.as_deref().unwrap_or("-"),
                s.equipment_label.as_deref().unwrap_or("-"),
                s.source,
            );
        }
    }
    Ok(())
}
