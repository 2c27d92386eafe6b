use crate::config::parameter;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Error, PgPool};

pub struct Database {
    pool: PgPool,
}

#[async_trait]
pub trait DatabaseTrait {
    async fn init() -> Result<Self, Error>
    where
        Self: Sized;
    fn get_pool(&self) -> &PgPool;
    /// 关闭连接池，等待借出的连接归还
    async fn close(&self);
}

#[async_trait]
impl DatabaseTrait for Database {
    async fn init() -> Result<Self, Error> {
        let database_url = parameter::get("DATABASE_URL");
        let max_connections: u32 = parameter::get_or("DB_MAX_CONNECTIONS", 10);
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .max_lifetime(std::time::Duration::from_secs(6 * 60 * 60))
            .connect(&database_url)
            .await?;
        tracing::info!("database pool ready | max_connections: {}", max_connections);

        Ok(Self { pool })
    }

    fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}

impl Database {
    /// 测试里直接用已有的连接池
    #[cfg(test)]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}
