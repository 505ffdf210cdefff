use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::{ProbeRecord, Result, store::ProbeStore};

/// PostgreSQL-backed probe store.
#[derive(Debug, Clone)]
pub struct PostgresProbeStore {
    pool: PgPool,
}

impl PostgresProbeStore {
    /// Creates a probe store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a probe store with a lazy pool: no connection is attempted
    /// until first use, so an unreachable database at startup surfaces
    /// through the connection monitor instead of failing the process.
    pub fn connect_lazy(url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new().max_connections(5).connect_lazy(url)?;
        Ok(Self { pool })
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }
}

#[async_trait]
impl ProbeStore for PostgresProbeStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn prepare(&self) -> Result<()> {
        self.run_migrations().await?;
        Ok(())
    }

    async fn insert_probe(&self, record: &ProbeRecord) -> Result<()> {
        sqlx::query("INSERT INTO probes (id, source, created_at) VALUES ($1, $2, $3)")
            .bind(record.id)
            .bind(&record.source)
            .bind(record.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
