use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::compliance::{self, MatchPolicy};
use crate::db::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::slot::EquipmentSlot;
use crate::models::status::WorkerStatus;
use crate::ui::messages;
use crate::utils::date::{day_window_utc, parse_date, today_in};

fn mark(status: &WorkerStatus, slot: EquipmentSlot) -> &'static str {
    if status.slot(slot) { "OK" } else { "-" }
}

/// `status` — derive and print per-worker gear status for a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { date, policy, json } = cmd {
        let offset = cfg.offset()?;
        let day = match date {
            Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            None => today_in(offset),
        };
        let policy = match policy {
            Some(p) => {
                MatchPolicy::parse(p).ok_or_else(|| AppError::InvalidPolicy(p.clone()))?
            }
            None => cfg.policy()?,
        };

        let pool = DbPool::new(&cfg.database)?;
        let workers = queries::load_workers(&pool.conn)?;
        let (from, to) = day_window_utc(day, offset);
        let scans = queries::load_scans_between(&pool.conn, &from, &to)?;
        let statuses = compliance::compute(&workers, &scans, policy);

        if *json {
            println!("{}", serde_json::to_string_pretty(&statuses)?);
            return Ok(());
        }

        if statuses.is_empty() {
            messages::info("No workers enrolled");
            return Ok(());
        }

        println!(
            "{:>4}  {:<20} {:<5} {:<6} {:<5} {:<6} {:<17}",
            "ID", "Name", "Hat", "Shirt", "Boot", "Glove", "Latest scan"
        );
        for s in &statuses {
            let latest = s
                .latest_scan
                .map(|t| t.with_timezone(&offset).format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:>4}  {:<20} {:<5} {:<6} {:<5} {:<6} {:<17}",
                s.id,
                s.name.as_deref().unwrap_or("-"),
                mark(s, EquipmentSlot::Hat),
                mark(s, EquipmentSlot::Shirt),
                mark(s, EquipmentSlot::Boot),
                mark(s, EquipmentSlot::Glove),
                latest,
            );
        }
    }
    Ok(())
}
