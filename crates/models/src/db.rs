use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use migration::MigratorTrait;
use tracing::info;

use configs::DatabaseConfig;

// 内存库的连接一旦被回收，数据随之丢失
const MEMORY_CONN_LIFETIME: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

/// Pool options for `[database]`.
pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if is_sqlite_memory(&cfg.url) {
        // 内存 SQLite 每个连接是独立的库，连接池必须只有一个且永不过期的连接
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(MEMORY_CONN_LIFETIME)
            .max_lifetime(MEMORY_CONN_LIFETIME);
    } else {
        opt.max_connections(cfg.max_connections).min_connections(cfg.min_connections);
    }
    opt
}

/// Connect using pool settings from `[database]`.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    Ok(db)
}

/// Apply pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
    migration::Migrator::up(db, None).await?;
    info!(event = "migrations_applied", "database schema up to date");
    Ok(())
}

/// Fresh in-memory SQLite database with the schema applied.
pub async fn connect_memory() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migrate(&db).await?;
    Ok(db)
}
