use eyre::{Error, WrapErr};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// A report cell, optionally emphasized.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cell {
    pub value: String,
    pub bold: bool,
}

impl Cell {
    pub fn plain(value: impl Into<String>) -> Self {
        Cell {
            value: value.into(),
            bold: false,
        }
    }

    pub fn bold(value: impl Into<String>) -> Self {
        Cell {
            value: value.into(),
            bold: true,
        }
    }
}

/// Named tables of string cells.
pub trait Workbook {
    /// Read every row of `table`, header included. `None` means that the
    /// table does not exist.
    fn read_table(&self, table: &str) -> Result<Option<Vec<Vec<String>>>, Error>;

    /// Create `table`, or replace its whole content.
    fn write_table(&mut self, table: &str, rows: &[Vec<Cell>]) -> Result<(), Error>;
}

/// A directory holding one `<table>.csv` file per table. CSV has no
/// styling, so bold cells are written as `**value**`. The markup is not
/// escaped: a plain cell whose value already reads `**x**` cannot be told
/// apart from a bold `x` once written.
pub struct CsvWorkbook {
    dir: PathBuf,
}

impl CsvWorkbook {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        CsvWorkbook { dir: dir.into() }
    }

    pub fn path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{table}.csv"))
    }

    fn render(cell: &Cell) -> String {
        if cell.bold && !cell.value.is_empty() {
            format!("**{}**", cell.value)
        } else {
            cell.value.clone()
        }
    }

    fn read_file(path: &Path) -> Result<Vec<Vec<String>>, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;
        reader
            .records()
            .map(|record| -> Result<Vec<String>, Error> {
                Ok(record?.iter().map(String::from).collect())
            })
            .collect()
    }
}

impl Workbook for CsvWorkbook {
    fn read_table(&self, table: &str) -> Result<Option<Vec<Vec<String>>>, Error> {
        let path = self.path(table);
        if !path.exists() {
            debug!(table, path = %path.display(), "table file not found");
            return Ok(None);
        }
        let rows = Self::read_file(&path)
            .wrap_err_with(|| format!("cannot read table {table:?} from {}", path.display()))?;
        trace!(table, rows = rows.len(), "table read");
        Ok(Some(rows))
    }

    fn write_table(&mut self, table: &str, rows: &[Vec<Cell>]) -> Result<(), Error> {
        let path = self.path(table);
        let write = || -> Result<(), Error> {
            let mut writer = csv::WriterBuilder::new()
                .flexible(true)
                .from_path(&path)?;
            for row in rows {
                writer.write_record(row.iter().map(Self::render))?;
            }
            writer.flush()?;
            Ok(())
        };
        write().wrap_err_with(|| format!("cannot write table {table:?} to {}", path.display()))?;
        debug!(table, rows = rows.len(), path = %path.display(), "table written");
        Ok(())
    }
}

#[cfg(test)]
pub use self::memory::MemoryWorkbook;

#[cfg(test)]
mod memory {
    use super::*;
    use std::collections::HashMap;

    /// In-memory workbook keeping the styled cells of written tables.
    #[derive(Default)]
    pub struct MemoryWorkbook {
        pub tables: HashMap<String, Vec<Vec<Cell>>>,
    }

    impl MemoryWorkbook {
        pub fn with_table(mut self, table: &str, rows: &[&[&str]]) -> Self {
            self.tables.insert(
                table.to_owned(),
                rows.iter()
                    .map(|row| row.iter().map(|&v| Cell::plain(v)).collect())
                    .collect(),
            );
            self
        }
    }

    impl Workbook for MemoryWorkbook {
        fn read_table(&self, table: &str) -> Result<Option<Vec<Vec<String>>>, Error> {
            Ok(self.tables.get(table).map(|rows| {
                rows.iter()
                    .map(|row| row.iter().map(|c| c.value.clone()).collect())
                    .collect()
            }))
        }

        fn write_table(&mut self, table: &str, rows: &[Vec<Cell>]) -> Result<(), Error> {
            self.tables.insert(table.to_owned(), rows.to_vec());
            Ok(())
        }
    }
}
