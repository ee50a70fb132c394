//! TableStore — flat tabular storage behind the roster and the logs
//!
//! Every read rescans the whole table; there is no cache and no index.
//! Two backends:
//! - [`CsvTable`]: a CSV file read and appended through polars
//! - [`MemoryTable`]: rows kept in memory, for tests and embedding
//!
//! # Example
//!
//! ```rust,no_run
//! use attendance_ledger::{schema, AttendanceConfig};
//! use attendance_ledger::store::{CsvTable, TableStore};
//!
//! fn main() -> attendance_ledger::Result<()> {
//!     let config = AttendanceConfig::new("/data/attendance");
//!     let validated = CsvTable::open(&config, schema::validated_table())?;
//!
//!     let rows = validated.read_all()?;
//!     println!("{} validated rows", rows.len());
//!     Ok(())
//! }
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use polars::prelude::*;
use tracing::{debug, info};

use crate::config::AttendanceConfig;
use crate::error::{AttendanceError, Result};
use crate::schema::TableDefinition;

/// One table row, fields in the table's column order
pub type Row = Vec<String>;

/// Storage abstraction shared by the roster and both attendance logs
pub trait TableStore: Send + Sync {
    /// Table name, used in logs and errors
    fn name(&self) -> &str;

    /// Column layout; every row carries exactly one field per column
    fn columns(&self) -> &'static [&'static str];

    /// Read every row in insertion order
    fn read_all(&self) -> Result<Vec<Row>>;

    /// Append one row at the end of the table
    fn append(&self, row: Row) -> Result<()>;
}

fn check_width(table: &str, columns: &[&str], row: &Row) -> Result<()> {
    if row.len() != columns.len() {
        return Err(AttendanceError::RowWidth {
            table: table.to_string(),
            expected: columns.len(),
            actual: row.len(),
        });
    }
    Ok(())
}

// ─── CSV Backend ───

/// CSV file table
///
/// Columns are located by header name, both when reading and when appending,
/// so an externally provisioned file may order them freely or carry extra
/// columns (appended rows leave those empty). All fields are read as strings;
/// empty fields come back as `""`.
#[derive(Debug, Clone)]
pub struct CsvTable {
    name: String,
    path: PathBuf,
    columns: &'static [&'static str],
}

impl CsvTable {
    pub fn new(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        columns: &'static [&'static str],
    ) -> Self {
        Self {
            name: name.into(),
            path: path.as_ref().to_path_buf(),
            columns,
        }
    }

    /// Open the table described by `def` under the configured directory
    ///
    /// Bootstrapped tables get their header written when the file is absent
    /// or empty; other tables must already exist.
    pub fn open(config: &AttendanceConfig, def: TableDefinition) -> Result<Self> {
        let table = Self::new(def.name, config.table_path(def.name), def.columns);

        if def.bootstrap {
            table.ensure_header()?;
        } else if !table.path.is_file() {
            return Err(AttendanceError::TableNotFound {
                table: table.name.clone(),
                path: table.path.clone(),
            });
        }

        Ok(table)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the header row if the file is absent or blank (idempotent)
    ///
    /// A file holding only whitespace counts as blank and is overwritten.
    /// Returns `true` when the header was written.
    pub fn ensure_header(&self) -> Result<bool> {
        if self.has_content()? {
            debug!(table = %self.name, "Table already exists");
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let columns = self
            .columns
            .iter()
            .map(|name| Column::new((*name).into(), Vec::<&str>::new()))
            .collect();
        let mut frame = DataFrame::new(columns)?;

        let mut file = File::create(&self.path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut frame)?;

        info!(table = %self.name, path = %self.path.display(), "Created table");
        Ok(true)
    }

    /// Whether the file exists and holds anything besides whitespace
    fn has_content(&self) -> Result<bool> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(bytes.iter().any(|b| !b.is_ascii_whitespace())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn missing_column(&self, column: &str) -> AttendanceError {
        AttendanceError::MissingColumn {
            table: self.name.clone(),
            column: column.to_string(),
        }
    }

    /// Column names from the file's header row, in file order
    fn header(&self) -> Result<Vec<String>> {
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_n_rows(Some(1))
            .with_infer_schema_length(Some(0))
            .try_into_reader_with_file_path(Some(self.path.clone()))?
            .finish()?;

        Ok(frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect())
    }

    /// Whether the file's last byte is a line terminator
    fn ends_with_newline(&self) -> Result<bool> {
        let mut file = File::open(&self.path)?;
        if file.seek(SeekFrom::End(0))? == 0 {
            return Ok(true);
        }
        file.seek(SeekFrom::End(-1))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)?;
        Ok(last[0] == b'\n')
    }
}

impl TableStore for CsvTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    fn read_all(&self) -> Result<Vec<Row>> {
        if !self.has_content()? {
            if !self.path.exists() {
                return Err(AttendanceError::TableNotFound {
                    table: self.name.clone(),
                    path: self.path.clone(),
                });
            }
            return Ok(Vec::new());
        }

        // Schema inference disabled: every column is read as a string.
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .try_into_reader_with_file_path(Some(self.path.clone()))?
            .finish()?;

        let mut fields: Vec<Vec<Option<&str>>> = Vec::with_capacity(self.columns.len());
        for name in self.columns {
            let column = frame
                .column(name)
                .map_err(|_| self.missing_column(name))?;
            fields.push(column.as_materialized_series().str()?.into_iter().collect());
        }

        let rows: Vec<Row> = (0..frame.height())
            .map(|i| {
                fields
                    .iter()
                    .map(|column| column[i].unwrap_or("").to_string())
                    .collect()
            })
            .collect();

        debug!(table = %self.name, rows = rows.len(), "Scanned table");
        Ok(rows)
    }

    fn append(&self, row: Row) -> Result<()> {
        check_width(&self.name, self.columns, &row)?;
        self.ensure_header()?;

        // Lay the row out in the file's own column order.
        let header = self.header()?;
        if let Some(missing) = self
            .columns
            .iter()
            .find(|column| !header.iter().any(|name| name == *column))
        {
            return Err(self.missing_column(missing));
        }

        let columns = header
            .iter()
            .map(|name| {
                let value: Option<&str> = self
                    .columns
                    .iter()
                    .position(|column| column == name)
                    .map(|i| row[i].as_str());
                Column::new(name.as_str().into(), [value])
            })
            .collect();
        let mut frame = DataFrame::new(columns)?;

        let needs_newline = !self.ends_with_newline()?;
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        if needs_newline {
            file.write_all(b"\n")?;
        }
        CsvWriter::new(&mut file)
            .include_header(false)
            .finish(&mut frame)?;

        debug!(table = %self.name, "Appended row");
        Ok(())
    }
}

// ─── In-Memory Backend ───

/// In-memory table with the same append-only contract as [`CsvTable`]
#[derive(Debug)]
pub struct MemoryTable {
    name: String,
    columns: &'static [&'static str],
    rows: RwLock<Vec<Row>>,
}

impl MemoryTable {
    pub fn new(def: TableDefinition) -> Self {
        Self {
            name: def.name.to_string(),
            columns: def.columns,
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Seed a table with initial rows (e.g. a test roster)
    pub fn with_rows(def: TableDefinition, rows: Vec<Row>) -> Result<Self> {
        for row in &rows {
            check_width(def.name, def.columns, row)?;
        }
        Ok(Self {
            name: def.name.to_string(),
            columns: def.columns,
            rows: RwLock::new(rows),
        })
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

impl TableStore for MemoryTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    fn read_all(&self) -> Result<Vec<Row>> {
        Ok(self.rows.read().clone())
    }

    fn append(&self, row: Row) -> Result<()> {
        check_width(&self.name, self.columns, &row)?;
        self.rows.write().push(row);
        Ok(())
    }
}
