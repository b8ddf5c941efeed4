use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::DbPool;
use crate::db::log::ttlog;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::worker::NewWorker;
use crate::ui::messages;

/// `enroll` — register a worker and their assigned equipment tags.
/// Every field is optional: a slot without an assigned tag simply never
/// matches under tag policy.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Enroll {
        name,
        position,
        hat_tag,
        shirt_tag,
        boot_tag,
        glove_tag,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let worker = NewWorker {
            name: name.clone(),
            position: position.clone(),
            hat_tag: hat_tag.clone(),
            shirt_tag: shirt_tag.clone(),
            boot_tag: boot_tag.clone(),
            glove_tag: glove_tag.clone(),
        };
        let id = queries::insert_worker(&pool.conn, &worker)?;
        ttlog(
            &pool.conn,
            "enroll",
            Some(&id.to_string()),
            name.as_deref(),
        )?;
        messages::success(format!(
            "Enrolled worker {} ({})",
            id,
            name.as_deref().unwrap_or("unnamed")
        ));
    }
    Ok(())
}
