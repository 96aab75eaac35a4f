//! The table registry.
//!
//! A [`Database`] owns every [`Table`] by name and is the unit of
//! persistence: `save` writes the whole registry as one snapshot and
//! `load` reads one back, rebuilding each table's index along the way.

use std::collections::HashMap;
use std::path::Path;

use crate::catalog::TableSchema;
use crate::common::{Error, Result};
use crate::storage;
use crate::table::Table;

/// A named collection of tables.
#[derive(Default)]
pub struct Database {
    tables: HashMap<String, Table>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new table built from `schema`.
    ///
    /// # Errors
    /// `Error::TableExists` when the name is already taken; the existing
    /// table is untouched.
    pub fn create_table(&mut self, schema: TableSchema) -> Result<()> {
        let name = schema.name().to_string();
        if self.tables.contains_key(&name) {
            return Err(Error::TableExists(name));
        }
        self.tables.insert(name, Table::new(schema));
        Ok(())
    }

    /// # Errors
    /// `Error::TableNotFound` when no table has this name.
    pub fn table(&self, name: &str) -> Result<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| Error::TableNotFound(name.to_string()))
    }

    /// # Errors
    /// `Error::TableNotFound` when no table has this name.
    pub fn table_mut(&mut self, name: &str) -> Result<&mut Table> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| Error::TableNotFound(name.to_string()))
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    #[inline]
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Snapshot the whole database to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        storage::save(self, path)
    }

    /// Restore a database from a snapshot at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        storage::load(path)
    }
}
