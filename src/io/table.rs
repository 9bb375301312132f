use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{CodonUsageError, Result};
use crate::usage::{CodonUsageTable, COLUMNS};

/// Writes `table` as delimited text: one header line with the column names,
/// then one line per row. The header is written even when the table is empty.
pub fn write_table<W: Write>(table: &CodonUsageTable, out: W, delimiter: u8) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(out);
    wtr.write_record(COLUMNS)?;
    for row in table.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_table_to_path(table: &CodonUsageTable, path: impl AsRef<Path>, delimiter: u8) -> Result<()> {
    let path = path.as_ref();
    let fh = File::create(path).map_err(|e| CodonUsageError::io(path, e))?;
    write_table(table, std::io::BufWriter::new(fh), delimiter)
}
