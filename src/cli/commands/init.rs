use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::{DbPool, init_db};
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages;

/// `init` — create the config directory, write the config file and bring
/// the database up to the current schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn, cli.test)?;
    ttlog(&pool.conn, "init", Some(&cfg.database), None)?;

    if !cli.test {
        messages::success(format!("Database ready at {}", cfg.database));
    } else {
        println!("initialized");
    }
    Ok(())
}
