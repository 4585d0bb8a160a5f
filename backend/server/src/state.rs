use std::sync::Arc;

use tracing::info;

use super::{
    config::{Config, StoreBackend},
    database::{RedisStore, init_redis},
    error::AppError,
    store::{MemoryStore, Store},
};

pub struct State {
    pub config: Config,
    pub store: Store,
}

impl State {
    pub async fn new() -> Result<Arc<Self>, AppError> {
        let config = Config::load();

        let store = match config.store_backend {
            StoreBackend::Memory => {
                info!("Using in-memory sheet, rows are lost on restart");
                Store::Memory(MemoryStore::new())
            }
            StoreBackend::Redis => {
                let connection = init_redis(&config.redis_url).await?;
                Store::Redis(RedisStore::new(connection, config.sheet_key.clone()))
            }
        };

        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: Store) -> Arc<Self> {
        Arc::new(Self { config, store })
    }
}
