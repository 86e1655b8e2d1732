//! Adapters for services outside the process.

pub mod row_store;

pub use row_store::{ErrorInfo, QueryResponse, RowStoreClient, RowStoreError};
