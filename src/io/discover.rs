use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{CodonUsageError, Result};
use crate::io::fasta::{read_fasta_file, CdsRecord, DEFAULT_HEADER_SEPARATOR};

/// File name suffixes picked up from the input directory.
pub const FASTA_SUFFIXES: [&str; 2] = [".fasta", ".cds.fasta"];

/// Options for reading a FASTA directory.
#[derive(Debug, Clone, Copy)]
pub struct ReaderOpt {
    pub separator: char,
}

impl Default for ReaderOpt {
    fn default() -> Self {
        Self { separator: DEFAULT_HEADER_SEPARATOR }
    }
}

/// Fails with `NotFound` / `NotADirectory` before anything is opened.
pub fn check_input_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(CodonUsageError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(CodonUsageError::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}

fn matches_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| FASTA_SUFFIXES.iter().any(|s| name.ends_with(s)))
        .unwrap_or(false)
}

/// Lists the FASTA files directly inside `dir`, sorted by path.
///
/// A file matching several suffixes is listed once.
pub fn find_fasta_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    check_input_dir(dir)?;

    let mut files = BTreeSet::new();
    let entries = std::fs::read_dir(dir).map_err(|e| CodonUsageError::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| CodonUsageError::io(dir, e))?.path();
        if !matches_suffix(&path) {
            continue;
        }
        if path.is_file() {
            files.insert(path);
        } else {
            warn!("{} is not a regular file, skipped", path.display());
        }
    }
    Ok(files.into_iter().collect())
}

/// Reads all records of all FASTA files in `dir` with the default `@` separator.
pub fn load_fasta_directory(dir: impl AsRef<Path>) -> Result<Vec<CdsRecord>> {
    load_fasta_directory_with_opt(dir, ReaderOpt::default())
}

/// Reads all records of all FASTA files in `dir`.
///
/// Files are visited in lexicographic path order and records keep their order
/// within each file. The first unreadable file aborts the whole load.
pub fn load_fasta_directory_with_opt(dir: impl AsRef<Path>, opt: ReaderOpt) -> Result<Vec<CdsRecord>> {
    let dir = dir.as_ref();
    let files = find_fasta_files(dir)?;
    info!("found {} FASTA files in {}", files.len(), dir.display());

    let mut records = Vec::new();
    for path in &files {
        let mut recs = read_fasta_file(path, opt.separator)?;
        records.append(&mut recs);
    }
    debug!("loaded {} records", records.len());
    Ok(records)
}
