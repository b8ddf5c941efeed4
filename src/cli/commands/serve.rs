use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{DbPool, init_db};
use crate::errors::{AppError, AppResult};
use crate::http::{self, AppState};
use tracing_subscriber::EnvFilter;

/// Effective listen port: --port flag, then the PORT environment
/// variable, then the configured default.
fn resolve_port(flag: Option<u16>, cfg: &Config) -> u16 {
    flag.or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(cfg.port)
}

/// `serve` — run the read-only HTTP API until interrupted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { port } = cmd {
        let port = resolve_port(*port, cfg);
        let state = AppState {
            db_path: cfg.database.clone(),
            offset: cfg.offset()?,
            policy: cfg.policy()?,
        };

        // Schema must exist before the first request hits it
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn, true)?;
        drop(pool);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("gearcheck=info,tower_http=warn"));
        tracing_subscriber::fmt().with_env_filter(filter).init();

        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(async move {
            let app = http::router(state);
            let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
                .await
                .map_err(|e| AppError::Server(format!("cannot bind port {port}: {e}")))?;
            tracing::info!(port, "gearcheck API listening");
            axum::serve(listener, app)
                .await
                .map_err(|e| AppError::Server(e.to_string()))
        })?;
    }
    Ok(())
}
