//! # Sheet Store
//!
//! Append-only, row-oriented persistence for submissions.
//!
//! Row 1 is the bold header row and only exists once something has been
//! written. Checking for an empty sheet and writing the header happen under one
//! guard in every backend, so two simultaneous first submissions still leave a
//! single header row.
use std::future::Future;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{database::RedisStore, error::AppError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<String>,
    #[serde(default)]
    pub bold: bool,
}

impl Row {
    pub fn plain(cells: Vec<String>) -> Self {
        Self { cells, bold: false }
    }

    pub fn header(cells: &[&str]) -> Self {
        Self {
            cells: cells.iter().map(|cell| cell.to_string()).collect(),
            bold: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appended {
    pub header_written: bool,
    /// 1-based, counting the header.
    pub row_number: usize,
}

pub trait SheetStore: Send + Sync {
    /// Appends `row`, writing `header` first if the sheet is empty.
    fn append(
        &self,
        header: Row,
        row: Row,
    ) -> impl Future<Output = Result<Appended, AppError>> + Send;

    fn rows(&self) -> impl Future<Output = Result<Vec<Row>, AppError>> + Send;
}

#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Row>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SheetStore for MemoryStore {
    async fn append(&self, header: Row, row: Row) -> Result<Appended, AppError> {
        let mut rows = self.rows.lock().await;

        let header_written = rows.is_empty();
        if header_written {
            rows.push(header);
        }

        rows.push(row);

        Ok(Appended {
            header_written,
            row_number: rows.len(),
        })
    }

    async fn rows(&self) -> Result<Vec<Row>, AppError> {
        Ok(self.rows.lock().await.clone())
    }
}

/// Backend picked at startup from `STORE_BACKEND`.
pub enum Store {
    Memory(MemoryStore),
    Redis(RedisStore),
}

impl SheetStore for Store {
    async fn append(&self, header: Row, row: Row) -> Result<Appended, AppError> {
        match self {
            Store::Memory(store) => store.append(header, row).await,
            Store::Redis(store) => store.append(header, row).await,
        }
    }

    async fn rows(&self) -> Result<Vec<Row>, AppError> {
        match self {
            Store::Memory(store) => store.rows().await,
            Store::Redis(store) => store.rows().await,
        }
    }
}
