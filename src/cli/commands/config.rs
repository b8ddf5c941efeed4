use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::process::Command as ProcessCommand;

/// `config` — print, check, migrate or edit the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: do_migrate,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("config file: {}", Config::config_file().display());
            println!("database:     {}", cfg.database);
            println!("utc_offset:   {}", cfg.utc_offset);
            println!("port:         {}", cfg.port);
            println!("match_policy: {}", cfg.match_policy);
        }

        if *check {
            let missing = migrate::missing_fields()?;
            if missing.is_empty() {
                messages::success("Configuration file is up to date");
            } else {
                messages::warning(format!(
                    "Missing keys: {} (run `gearcheck config --migrate`)",
                    missing.join(", ")
                ));
            }
        }

        if *do_migrate {
            let added = migrate::fill_missing()?;
            if added.is_empty() {
                messages::info("Nothing to migrate");
            } else {
                messages::success(format!("Added keys: {}", added.join(", ")));
            }
        }

        if *edit_config {
            let program = editor
                .clone()
                .or_else(|| std::env::var("EDITOR").ok())
                .unwrap_or_else(|| "vi".to_string());
            let status = ProcessCommand::new(&program)
                .arg(Config::config_file())
                .status()?;
            if !status.success() {
                return Err(AppError::Config(format!("editor `{program}` failed")));
            }
        }
    }
    Ok(())
}
