use crate::config::Config;
use crate::db::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages;

fn cell(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("-")
}

/// `workers` — print the enrollment roster.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let workers = queries::load_workers(&pool.conn)?;

    if workers.is_empty() {
        messages::info("No workers enrolled");
        return Ok(());
    }

    println!(
        "{:>4}  {:<20} {:<14} {:<10} {:<10} {:<10} {:<10}",
        "ID", "Name", "Position", "Hat", "Shirt", "Boot", "Glove"
    );
    for w in &workers {
        println!(
            "{:>4}  {:<20} {:<14} {:<10} {:<10} {:<10} {:<10}",
            w.id,
            cell(&w.name),
            cell(&w.position),
            cell(&w.hat_tag),
            cell(&w.shirt_tag),
            cell(&w.boot_tag),
            cell(&w.glove_tag),
        );
    }
    Ok(())
}
