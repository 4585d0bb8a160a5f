//! # Redis
//!
//! Durable sheet backend.
//!
//! ## Layout
//! - One Redis list per sheet, key from `SHEET_KEY`
//! - Each element is a JSON encoded [`Row`]
//! - Index 0 is the header row
//!
//! ## Header Bootstrap
//! A Lua script checks `LLEN` and pushes the header and the data row in one
//! call. Redis runs scripts atomically, so concurrent first writers cannot both
//! see an empty list.
use std::time::Duration;

use redis::{
    AsyncCommands, Client, Script,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use tracing::info;

use crate::{
    error::AppError,
    store::{Appended, Row, SheetStore},
};

const APPEND_SCRIPT: &str = r#"
local header_written = 0
if redis.call('LLEN', KEYS[1]) == 0 then
    redis.call('RPUSH', KEYS[1], ARGV[1])
    header_written = 1
end
local len = redis.call('RPUSH', KEYS[1], ARGV[2])
return {header_written, len}
"#;

pub struct RedisStore {
    connection: ConnectionManager,
    key: String,
    append_script: Script,
}

impl RedisStore {
    pub fn new(connection: ConnectionManager, key: impl Into<String>) -> Self {
        Self {
            connection,
            key: key.into(),
            append_script: Script::new(APPEND_SCRIPT),
        }
    }
}

impl SheetStore for RedisStore {
    async fn append(&self, header: Row, row: Row) -> Result<Appended, AppError> {
        let mut connection = self.connection.clone();

        let (header_written, len): (i64, i64) = self
            .append_script
            .key(&self.key)
            .arg(serde_json::to_string(&header)?)
            .arg(serde_json::to_string(&row)?)
            .invoke_async(&mut connection)
            .await?;

        Ok(Appended {
            header_written: header_written == 1,
            row_number: len as usize,
        })
    }

    async fn rows(&self) -> Result<Vec<Row>, AppError> {
        let mut connection = self.connection.clone();

        let raw: Vec<String> = connection.lrange(&self.key, 0, -1).await?;

        raw.iter()
            .map(|entry| serde_json::from_str(entry).map_err(AppError::from))
            .collect()
    }
}

pub async fn init_redis(redis_url: &str) -> Result<ConnectionManager, AppError> {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(500));

    let client = Client::open(redis_url)?;
    let connection_manager = client.get_connection_manager_with_config(config).await?;

    info!("Connected to Redis");

    Ok(connection_manager)
}
