//! Snapshot reader and writer.
//!
//! # File Layout
//! ```text
//! ┌───────┬─────────┬─────────────┬──────────────────────────────────┐
//! │ magic │ version │ table count │ table … table                    │
//! │ BRNE  │ u8      │ u32         │                                  │
//! └───────┴─────────┴─────────────┴──────────────────────────────────┘
//! table:  name, column count (u16), columns (name + type tag),
//!         row count (u32), rows
//! row:    each declared column in schema order:
//!         int as u32 | float as f32 bits | text as u16-prefixed UTF-8
//! ```
//!
//! Only schemas and rows are written. Indexes are rebuilt during load by
//! replaying every row through [`Table::insert`], so a snapshot carries
//! no index state at all.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::catalog::{Column, DataType, TableSchema};
use crate::common::config::{FILE_MAGIC, FILE_VERSION};
use crate::common::{Error, Result};
use crate::database::Database;
use crate::storage::codec;
use crate::table::{Row, Table, Value};

/// Write the whole database to `path`, replacing any existing file.
pub fn save(db: &Database, path: impl AsRef<Path>) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    w.write_all(&FILE_MAGIC)?;
    codec::write_u8(&mut w, FILE_VERSION)?;

    codec::write_u32(&mut w, db.table_count() as u32)?;
    for table in db.tables() {
        write_table(&mut w, table)?;
    }
    w.flush()?;
    Ok(())
}

/// Read a database back from `path`, rebuilding each table's index.
///
/// # Errors
/// `Error::BadMagic` and `Error::UnsupportedVersion` for foreign or
/// future files, `Error::Corrupt` for structural damage past the header,
/// `Error::Io` when the file is unreadable or truncated.
pub fn load(path: impl AsRef<Path>) -> Result<Database> {
    let mut r = BufReader::new(File::open(path)?);

    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != FILE_MAGIC {
        return Err(Error::BadMagic);
    }
    let version = codec::read_u8(&mut r)?;
    if version != FILE_VERSION {
        return Err(Error::UnsupportedVersion(version));
    }

    let mut db = Database::new();
    let table_count = codec::read_u32(&mut r)?;
    for _ in 0..table_count {
        read_table(&mut r, &mut db)?;
    }
    Ok(db)
}

fn write_table<W: Write>(w: &mut W, table: &Table) -> Result<()> {
    let schema = table.schema();
    codec::write_string(w, schema.name())?;

    codec::write_u16(w, schema.columns().len() as u16)?;
    for col in schema.columns() {
        codec::write_string(w, &col.name)?;
        codec::write_u8(w, col.ty.tag())?;
    }

    codec::write_u32(w, table.rows().len() as u32)?;
    for row in table.rows() {
        for col in schema.columns() {
            let value = row
                .get(col.name.as_str())
                .expect("validated row missing a declared column");
            match (col.ty, value) {
                (DataType::Integer, Value::Integer(i)) => codec::write_u32(w, *i as u32)?,
                (DataType::Float, Value::Float(x)) => codec::write_f32(w, *x)?,
                (DataType::Text, Value::Text(s)) => codec::write_string(w, s)?,
                _ => unreachable!("validated row value drifted from its declared type"),
            }
        }
    }
    Ok(())
}

fn read_table<R: Read>(r: &mut R, db: &mut Database) -> Result<()> {
    let name = codec::read_string(r)?;

    let column_count = codec::read_u16(r)?;
    let mut columns = Vec::with_capacity(column_count as usize);
    for _ in 0..column_count {
        let col_name = codec::read_string(r)?;
        let tag = codec::read_u8(r)?;
        let ty = DataType::from_tag(tag)
            .ok_or_else(|| Error::Corrupt(format!("unknown column type tag {tag}")))?;
        columns.push(Column::new(col_name, ty));
    }

    db.create_table(TableSchema::new(name.clone(), columns.clone()))?;
    let table = db.table_mut(&name)?;

    let row_count = codec::read_u32(r)?;
    for _ in 0..row_count {
        let mut row = Row::new();
        for col in &columns {
            let value = match col.ty {
                DataType::Integer => Value::Integer(codec::read_u32(r)? as i32),
                DataType::Float => Value::Float(codec::read_f32(r)?),
                DataType::Text => Value::Text(codec::read_string(r)?),
            };
            row.insert(col.name.clone(), value);
        }
        table.insert(row)?;
    }
    Ok(())
}
