//! The record store: rows validated against a schema, plus at most one
//! B+Tree index over the first column.
//!
//! The row list is the authoritative store and is strictly append-only;
//! the index is a lookup accelerator that is rebuilt from the rows
//! whenever a table is reloaded from disk, never persisted itself.

use std::collections::HashMap;
use std::fmt;

use crate::catalog::{DataType, TableSchema};
use crate::common::{Error, Result};
use crate::index::BPlusTree;

/// A runtime column value.
///
/// The three variants mirror the wire types: a 4-byte signed integer, a
/// 4-byte IEEE-754 float, and a length-prefixed UTF-8 string.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i32),
    Float(f32),
    Text(String),
}

impl Value {
    /// The declared type this value satisfies.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Integer(_) => DataType::Integer,
            Value::Float(_) => DataType::Float,
            Value::Text(_) => DataType::Text,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A row maps column names to values.
pub type Row = HashMap<String, Value>;

/// The table's optional index, fixed at creation time.
///
/// A tagged variant rather than nullable fields: a table provably has
/// either no index, an integer-keyed one, or a text-keyed one, never two.
#[derive(Debug)]
enum TableIndex {
    None,
    Integer(BPlusTree<i32, Row>),
    Text(BPlusTree<String, Row>),
}

/// A schema-validated, append-only collection of rows.
///
/// At creation the declared type of the FIRST schema column decides the
/// index: integer and text columns get a [`BPlusTree`] keyed by that
/// column (whole rows as values); a float first column, or an empty
/// schema, means no index and every lookup scans.
#[derive(Debug)]
pub struct Table {
    schema: TableSchema,
    rows: Vec<Row>,
    index: TableIndex,
}

impl Table {
    pub fn new(schema: TableSchema) -> Self {
        let index = match schema.columns().first().map(|c| c.ty) {
            Some(DataType::Integer) => TableIndex::Integer(BPlusTree::new()),
            Some(DataType::Text) => TableIndex::Text(BPlusTree::new()),
            _ => TableIndex::None,
        };
        Self {
            schema,
            rows: Vec::new(),
            index,
        }
    }

    #[inline]
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// The authoritative row list, in insertion order.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    pub fn is_indexed(&self) -> bool {
        !matches!(self.index, TableIndex::None)
    }

    /// Validate a row against the schema, append it, and upsert it into
    /// the index when one exists.
    ///
    /// Validation requires every declared column to be present with a
    /// value of the declared type. Fields beyond the declared columns are
    /// tolerated; they simply never reach disk.
    ///
    /// # Errors
    /// `Error::MissingColumn` or `Error::TypeMismatch` on validation
    /// failure; the table is unchanged in that case.
    pub fn insert(&mut self, row: Row) -> Result<()> {
        for col in self.schema.columns() {
            let value = row
                .get(col.name.as_str())
                .ok_or_else(|| Error::MissingColumn(col.name.clone()))?;
            if value.data_type() != col.ty {
                return Err(Error::TypeMismatch(col.name.clone()));
            }
        }

        match &mut self.index {
            TableIndex::None => {}
            TableIndex::Integer(tree) => {
                let first = &self.schema.columns()[0].name;
                let key = match row.get(first.as_str()) {
                    Some(Value::Integer(k)) => *k,
                    _ => unreachable!("validated row lost its integer key column"),
                };
                tree.insert(key, row.clone());
            }
            TableIndex::Text(tree) => {
                let first = &self.schema.columns()[0].name;
                let key = match row.get(first.as_str()) {
                    Some(Value::Text(k)) => k.clone(),
                    _ => unreachable!("validated row lost its text key column"),
                };
                tree.insert(key, row.clone());
            }
        }

        self.rows.push(row);
        Ok(())
    }

    /// Look up a row by its first-column value.
    ///
    /// Queries the index first when one exists. An index hit is still
    /// re-resolved against the authoritative row list by equality before
    /// being returned; an index miss, a key of the wrong type, or an
    /// unindexed table all fall back to a linear scan. Rows sharing a key
    /// resolve to the most recently inserted one on the index path.
    pub fn find_by_key(&self, key: &Value) -> Option<&Row> {
        let cached = match (&self.index, key) {
            (TableIndex::Integer(tree), Value::Integer(k)) => tree.find(k),
            (TableIndex::Text(tree), Value::Text(k)) => tree.find(k),
            _ => None,
        };
        if let Some(cached) = cached {
            if let Some(row) = self.rows.iter().find(|r| *r == cached) {
                return Some(row);
            }
        }
        self.scan_by_key(key)
    }

    /// Every row whose `column` equals `value`, by linear scan.
    pub fn scan_where(&self, column: &str, value: &Value) -> Vec<&Row> {
        self.rows
            .iter()
            .filter(|r| r.get(column) == Some(value))
            .collect()
    }

    fn scan_by_key(&self, key: &Value) -> Option<&Row> {
        let first = self.schema.columns().first()?;
        self.rows
            .iter()
            .find(|r| r.get(first.name.as_str()) == Some(key))
    }
}
