use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::migrate::run_pending_migrations;
use crate::db::stats;
use crate::db::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;

/// `db` — maintenance operations on the database file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn, false)?;
            messages::success("Migrations up to date");
        }

        if *check {
            let verdict = stats::integrity_check(&pool.conn)?;
            if verdict == "ok" {
                messages::success("Integrity check passed");
            } else {
                messages::error(format!("Integrity check failed: {verdict}"));
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM")?;
            ttlog(&pool.conn, "vacuum", Some(&cfg.database), None)?;
            messages::success("Database vacuumed");
        }

        if *info {
            stats::print_db_info(&pool.conn, &cfg.database)?;
        }
    }
    Ok(())
}
