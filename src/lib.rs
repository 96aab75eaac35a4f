//! BrineDB - an embedded table store with a B+Tree primary index.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          BrineDB                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │                 Shell (shell/)                       │   │
//! │  │     line commands → Database / Table calls           │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! │                            ↓                                │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │           Table registry (database/)                 │   │
//! │  │        named tables + snapshot save/load             │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! │                ↓                          ↓                 │
//! │  ┌──────────────────────────┐  ┌──────────────────────┐   │
//! │  │  Record store (table/)   │  │  Storage (storage/)  │   │
//! │  │  schema-checked rows     │  │  binary snapshot     │   │
//! │  │  + first-column index    │  │  format + codec      │   │
//! │  └──────────────────────────┘  └──────────────────────┘   │
//! │                ↓                                            │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │              Index (index/btree/)                    │   │
//! │  │   order-m B+Tree: splits, borrow/merge rebalance,    │   │
//! │  │   linked leaves for range scans                      │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The index is a lookup accelerator only: snapshots persist schemas and
//! rows, and every load rebuilds the index by replaying the rows.
//!
//! # Modules
//! - [`common`] - Shared primitives (Error, Result, config)
//! - [`index`] - The B+Tree index
//! - [`catalog`] - Column and schema definitions
//! - [`table`] - Schema-validated record store
//! - [`database`] - Table registry and persistence entry points
//! - [`storage`] - Binary snapshot format
//! - [`shell`] - Line-oriented command interpreter
//!
//! # Quick Start
//! ```
//! use brinedb::{Column, Database, DataType, Row, TableSchema, Value};
//!
//! let mut db = Database::new();
//! db.create_table(TableSchema::new(
//!     "person",
//!     vec![
//!         Column::new("id", DataType::Integer),
//!         Column::new("name", DataType::Text),
//!     ],
//! ))
//! .unwrap();
//!
//! let person = db.table_mut("person").unwrap();
//! person
//!     .insert(Row::from([
//!         ("id".to_string(), Value::Integer(1)),
//!         ("name".to_string(), Value::Text("Alice".to_string())),
//!     ]))
//!     .unwrap();
//!
//! // Resolved through the B+Tree index on the first column.
//! let row = person.find_by_key(&Value::Integer(1)).unwrap();
//! assert_eq!(row.get("name"), Some(&Value::Text("Alice".to_string())));
//! ```

pub mod catalog;
pub mod common;
pub mod database;
pub mod index;
pub mod shell;
pub mod storage;
pub mod table;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_ORDER;
pub use common::{Error, Result};

pub use catalog::{Column, DataType, TableSchema};
pub use database::Database;
pub use index::BPlusTree;
pub use table::{Row, Table, Value};
