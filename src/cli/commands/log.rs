use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::DbPool;
use crate::db::log::read_log;
use crate::errors::AppResult;
use crate::ui::messages;

/// `log --print` — dump the internal activity log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !print {
            messages::info("Nothing to do (use --print)");
            return Ok(());
        }
        let pool = DbPool::new(&cfg.database)?;
        let entries = read_log(&pool.conn)?;
        if entries.is_empty() {
            messages::info("Log is empty");
            return Ok(());
        }
        for e in entries {
            println!(
                "{:>5}  {}  {:<20}  {}  {}",
                e.id,
                e.date,
                e.operation,
                e.target.unwrap_or_default(),
                e.message.unwrap_or_default()
            );
        }
    }
    Ok(())
}
