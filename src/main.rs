use anyhow::Context;
use contacts::{
    config::{Config, DatabaseLocation},
    db::schema,
    server,
    state::AppState,
};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.environment.json_logs() {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }

    let conn = match &config.database {
        DatabaseLocation::File(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
            }
            schema::open(path)
                .with_context(|| format!("Failed to open database {}", path.display()))?
        }
        DatabaseLocation::InMemory => {
            tracing::warn!("Using an in-memory database, contacts will not survive a restart");
            schema::open_in_memory().context("Failed to open in-memory database")?
        }
    };

    server::start(AppState::new(conn), config.port).await
}
