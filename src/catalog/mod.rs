//! Table schemas: column names and declared types.

mod schema;

pub use schema::{Column, DataType, TableSchema};
