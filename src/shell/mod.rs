//! The interactive shell: a line-oriented front end over [`Database`].
//!
//! Commands:
//! ```text
//! create <file>                          start a fresh database at <file>
//! load <file>                            load a database from <file>
//! create_table <table> <col>:<type>...   types: int, text, float
//! insert <table> <col>=<val>...
//! select <table> [where <col>=<val>]
//! help
//! exit
//! ```
//!
//! The shell reads from any `BufRead` and writes to any `Write`, so the
//! whole loop is testable without a terminal. Command failures are
//! reported to the output sink and the loop keeps going; only `exit` or
//! end of input stops it.
//!
//! `create` and `load` bind the shell to a file path, and every
//! successful `create_table` or `insert` rewrites that file, so the
//! on-disk snapshot always matches the last mutation.

mod command;

pub use command::{parse_command, Command};

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::catalog::{Column, DataType, TableSchema};
use crate::common::{Error, Result};
use crate::database::Database;
use crate::table::{Row, Value};

/// Shell state: the live database plus the file it is bound to, if any.
pub struct Shell {
    db: Database,
    path: Option<PathBuf>,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            db: Database::new(),
            path: None,
        }
    }

    /// The database the shell is operating on.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Run the read-eval-print loop until `exit` or end of input.
    pub fn run(&mut self, mut input: impl BufRead, mut out: impl Write) -> Result<()> {
        writeln!(out, "BrineDB shell. Type 'help' for commands.")?;
        let mut line = String::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match self.execute_line(trimmed, &mut out) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => writeln!(out, "error: {err}")?,
            }
        }
        Ok(())
    }

    /// Execute a single command line. Returns `Ok(false)` when the loop
    /// should stop.
    pub fn execute_line(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(true);
        };
        let args: Vec<&str> = parts.collect();

        match parse_command(word) {
            Command::Create => self.cmd_create(&args, out)?,
            Command::Load => self.cmd_load(&args, out)?,
            Command::CreateTable => self.cmd_create_table(&args, out)?,
            Command::Insert => self.cmd_insert(&args, out)?,
            Command::Select => self.cmd_select(&args, out)?,
            Command::Help => self.cmd_help(out)?,
            Command::Exit => return Ok(false),
            Command::Invalid => {
                writeln!(out, "unknown command '{word}'; type 'help'")?;
            }
        }
        Ok(true)
    }

    fn cmd_create(&mut self, args: &[&str], out: &mut impl Write) -> Result<()> {
        let [file] = args else {
            writeln!(out, "usage: create <file>")?;
            return Ok(());
        };
        self.db = Database::new();
        self.db.save(file)?;
        self.path = Some(PathBuf::from(file));
        writeln!(out, "created database '{file}'")?;
        Ok(())
    }

    fn cmd_load(&mut self, args: &[&str], out: &mut impl Write) -> Result<()> {
        let [file] = args else {
            writeln!(out, "usage: load <file>")?;
            return Ok(());
        };
        self.db = Database::load(file)?;
        self.path = Some(PathBuf::from(file));
        writeln!(
            out,
            "loaded {} table(s) from '{file}'",
            self.db.table_count()
        )?;
        Ok(())
    }

    fn cmd_create_table(&mut self, args: &[&str], out: &mut impl Write) -> Result<()> {
        let [name, specs @ ..] = args else {
            writeln!(out, "usage: create_table <table> <col>:<type>...")?;
            return Ok(());
        };
        if specs.is_empty() {
            writeln!(out, "usage: create_table <table> <col>:<type>...")?;
            return Ok(());
        }

        let mut columns = Vec::with_capacity(specs.len());
        for spec in specs {
            let Some((col, ty_word)) = spec.split_once(':') else {
                writeln!(out, "bad column spec '{spec}'; expected <col>:<type>")?;
                return Ok(());
            };
            let Some(ty) = DataType::from_keyword(ty_word) else {
                writeln!(out, "unknown type '{ty_word}'; expected int, text or float")?;
                return Ok(());
            };
            columns.push(Column::new(col, ty));
        }

        self.db.create_table(TableSchema::new(*name, columns))?;
        self.autosave()?;
        writeln!(out, "table '{name}' created")?;
        Ok(())
    }

    fn cmd_insert(&mut self, args: &[&str], out: &mut impl Write) -> Result<()> {
        let [name, pairs @ ..] = args else {
            writeln!(out, "usage: insert <table> <col>=<val>...")?;
            return Ok(());
        };

        let schema = self.db.table(name)?.schema().clone();
        let mut row = Row::new();
        for pair in pairs {
            let Some((col, raw)) = pair.split_once('=') else {
                writeln!(out, "bad value '{pair}'; expected <col>=<val>")?;
                return Ok(());
            };
            let Some(column) = schema.column(col) else {
                writeln!(out, "unknown column '{col}' in table '{name}'")?;
                return Ok(());
            };
            row.insert(col.to_string(), parse_value(raw, column.ty, col)?);
        }

        self.db.table_mut(name)?.insert(row)?;
        self.autosave()?;
        writeln!(out, "1 row inserted into '{name}'")?;
        Ok(())
    }

    fn cmd_select(&mut self, args: &[&str], out: &mut impl Write) -> Result<()> {
        match args {
            [name] => {
                let table = self.db.table(name)?;
                for row in table.rows() {
                    writeln!(out, "{}", format_row(table.schema(), row))?;
                }
                writeln!(out, "{} row(s)", table.rows().len())?;
            }
            [name, kw, pair] if *kw == "where" => {
                let Some((col, raw)) = pair.split_once('=') else {
                    writeln!(out, "bad filter '{pair}'; expected <col>=<val>")?;
                    return Ok(());
                };
                let table = self.db.table(name)?;
                let Some(column) = table.schema().column(col) else {
                    writeln!(out, "unknown column '{col}' in table '{name}'")?;
                    return Ok(());
                };
                let value = parse_value(raw, column.ty, col)?;

                let first_column = table.schema().columns().first().map(|c| c.name.as_str());
                if first_column == Some(col) {
                    // The key column: resolved through the index when the
                    // table has one.
                    match table.find_by_key(&value) {
                        Some(row) => {
                            writeln!(out, "{}", format_row(table.schema(), row))?;
                            writeln!(out, "1 row(s)")?;
                        }
                        None => writeln!(out, "0 row(s)")?,
                    }
                } else {
                    let matches = table.scan_where(col, &value);
                    for row in &matches {
                        writeln!(out, "{}", format_row(table.schema(), row))?;
                    }
                    writeln!(out, "{} row(s)", matches.len())?;
                }
            }
            _ => {
                writeln!(out, "usage: select <table> [where <col>=<val>]")?;
            }
        }
        Ok(())
    }

    fn cmd_help(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "commands:")?;
        writeln!(out, "  create <file>                          start a fresh database at <file>")?;
        writeln!(out, "  load <file>                            load a database from <file>")?;
        writeln!(out, "  create_table <table> <col>:<type>...   types: int, text, float")?;
        writeln!(out, "  insert <table> <col>=<val>...")?;
        writeln!(out, "  select <table> [where <col>=<val>]")?;
        writeln!(out, "  help")?;
        writeln!(out, "  exit")?;
        Ok(())
    }

    /// Rewrite the bound snapshot file after a successful mutation.
    fn autosave(&self) -> Result<()> {
        if let Some(path) = &self.path {
            self.db.save(path)?;
        }
        Ok(())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a raw token against a declared column type.
fn parse_value(raw: &str, ty: DataType, col: &str) -> Result<Value> {
    match ty {
        DataType::Integer => raw
            .parse::<i32>()
            .map(Value::Integer)
            .map_err(|_| Error::TypeMismatch(col.to_string())),
        DataType::Float => raw
            .parse::<f32>()
            .map(Value::Float)
            .map_err(|_| Error::TypeMismatch(col.to_string())),
        DataType::Text => Ok(Value::Text(raw.to_string())),
    }
}

/// Render a row with its columns in schema order.
fn format_row(schema: &TableSchema, row: &Row) -> String {
    let fields: Vec<String> = schema
        .columns()
        .iter()
        .map(|col| match row.get(col.name.as_str()) {
            Some(value) => format!("{}: {}", col.name, value),
            None => format!("{}: <missing>", col.name),
        })
        .collect();
    fields.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Feed a script through a fresh shell and return everything it wrote.
    fn run_session(script: &str) -> String {
        let mut shell = Shell::new();
        let mut out = Vec::new();
        shell.run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_help_lists_commands() {
        let out = run_session("help\nexit\n");
        assert!(out.contains("create_table"));
        assert!(out.contains("select"));
    }

    #[test]
    fn test_unknown_command_reported() {
        let out = run_session("drop everything\nexit\n");
        assert!(out.contains("unknown command 'drop'"));
    }

    #[test]
    fn test_create_table_insert_select() {
        let out = run_session(
            "create_table person id:int name:text salary:float\n\
             insert person id=1 name=Alice salary=1000.5\n\
             insert person id=2 name=Marina salary=2000\n\
             select person\n\
             exit\n",
        );
        assert!(out.contains("table 'person' created"));
        assert!(out.contains("id: 1, name: Alice, salary: 1000.5"));
        assert!(out.contains("id: 2, name: Marina, salary: 2000"));
        assert!(out.contains("2 row(s)"));
    }

    #[test]
    fn test_select_where_key_column() {
        let out = run_session(
            "create_table person id:int name:text\n\
             insert person id=1 name=Alice\n\
             insert person id=2 name=Marina\n\
             select person where id=2\n\
             select person where id=42\n\
             exit\n",
        );
        assert!(out.contains("id: 2, name: Marina"));
        assert!(out.contains("1 row(s)"));
        assert!(out.contains("0 row(s)"));
    }

    #[test]
    fn test_select_where_secondary_column() {
        let out = run_session(
            "create_table person id:int dept:text\n\
             insert person id=1 dept=ops\n\
             insert person id=2 dept=ops\n\
             insert person id=3 dept=lab\n\
             select person where dept=ops\n\
             exit\n",
        );
        assert!(out.contains("id: 1, dept: ops"));
        assert!(out.contains("id: 2, dept: ops"));
        assert!(out.contains("2 row(s)"));
    }

    #[test]
    fn test_bad_value_reported_and_loop_continues() {
        let out = run_session(
            "create_table person id:int\n\
             insert person id=notanumber\n\
             insert person id=7\n\
             select person\n\
             exit\n",
        );
        assert!(out.contains("error: type mismatch for column 'id'"));
        assert!(out.contains("id: 7"));
        assert!(out.contains("1 row(s)"));
    }

    #[test]
    fn test_missing_table_reported() {
        let out = run_session("select ghost\nexit\n");
        assert!(out.contains("error: table 'ghost' does not exist"));
    }

    #[test]
    fn test_duplicate_table_reported() {
        let out = run_session(
            "create_table t id:int\n\
             create_table t id:int\n\
             exit\n",
        );
        assert!(out.contains("error: table 't' already exists"));
    }

    #[test]
    fn test_exit_stops_processing() {
        let out = run_session("exit\nhelp\n");
        assert!(!out.contains("commands:"));
    }

    #[test]
    fn test_eof_ends_loop() {
        // No exit command: the loop must end at end of input.
        let out = run_session("create_table t id:int\n");
        assert!(out.contains("table 't' created"));
    }

    #[test]
    fn test_create_and_load_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.brine");
        let path = path.to_str().unwrap();

        let script = format!(
            "create {path}\n\
             create_table person id:int name:text\n\
             insert person id=9 name=Nori\n\
             exit\n"
        );
        let mut shell = Shell::new();
        let mut out = Vec::new();
        shell.run(Cursor::new(script), &mut out).unwrap();

        // A second shell picks the data back up from disk.
        let script = format!("load {path}\nselect person where id=9\nexit\n");
        let mut shell = Shell::new();
        let mut out = Vec::new();
        shell.run(Cursor::new(script), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("loaded 1 table(s)"));
        assert!(out.contains("id: 9, name: Nori"));
    }
}
