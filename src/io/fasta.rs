use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{CodonUsageError, Result};

/// Separator between species name and record id in a header line.
pub const DEFAULT_HEADER_SEPARATOR: char = '@';

/// One CDS entry of a FASTA file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdsRecord {
    pub species: String,
    pub record_id: String,
    /// Sequence lines joined without separators, as found in the file.
    pub sequence: String,
}

/// Splits a header line (leading '>' included) into `(species, record_id)`.
///
/// Only the first separator splits; later ones stay in the record id. Without
/// a separator both halves are the whole trimmed header text.
pub fn parse_header(line: &str, separator: char) -> Result<(String, String)> {
    let text = line
        .strip_prefix('>')
        .ok_or_else(|| CodonUsageError::MalformedHeader(line.to_string()))?
        .trim();

    match text.split_once(separator) {
        Some((species, record_id)) => Ok((species.trim().to_string(), record_id.trim().to_string())),
        None => Ok((text.to_string(), text.to_string())),
    }
}

pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    peek_header: Option<String>,
    separator: char,
    source: PathBuf,
    skipped: usize,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_separator(reader, DEFAULT_HEADER_SEPARATOR)
    }

    pub fn with_separator(reader: R, separator: char) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
            peek_header: None,
            separator,
            source: PathBuf::from("-"),
            skipped: 0,
        }
    }

    /// Number of headers dropped so far because no sequence line followed them.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Reads one trimmed line into `self.buf`. Returns false at EOF.
    fn read_trimmed(&mut self) -> Result<bool> {
        self.buf.clear();
        let n = self
            .reader
            .read_line(&mut self.buf)
            .map_err(|e| CodonUsageError::io(&self.source, e))?;
        if n == 0 {
            self.done = true;
            return Ok(false);
        }
        let trimmed = self.buf.trim();
        if trimmed.len() != self.buf.len() {
            self.buf = trimmed.to_string();
        }
        Ok(true)
    }

    pub fn next_record(&mut self) -> Result<Option<CdsRecord>> {
        loop {
            // Find header line; sequence lines before the first header are dropped
            let header = if let Some(h) = self.peek_header.take() {
                h
            } else {
                loop {
                    if self.done || !self.read_trimmed()? {
                        return Ok(None);
                    }
                    if self.buf.starts_with('>') {
                        break self.buf.clone();
                    }
                }
            };
            let (species, record_id) = parse_header(&header, self.separator)?;

            let mut sequence = String::new();
            while self.read_trimmed()? {
                if self.buf.is_empty() {
                    continue;
                }
                if self.buf.starts_with('>') {
                    self.peek_header = Some(self.buf.clone());
                    break;
                }
                sequence.push_str(&self.buf);
            }

            if sequence.is_empty() {
                debug!("{}: header {:?} has no sequence, skipped", self.source.display(), header);
                self.skipped += 1;
                continue;
            }

            return Ok(Some(CdsRecord { species, record_id, sequence }));
        }
    }
}

impl FastaReader<BufReader<File>> {
    pub fn from_path(path: impl AsRef<Path>, separator: char) -> Result<Self> {
        let path = path.as_ref();
        let fh = File::open(path).map_err(|e| CodonUsageError::io(path, e))?;
        let mut reader = Self::with_separator(BufReader::new(fh), separator);
        reader.source = path.to_path_buf();
        Ok(reader)
    }
}

/// Reads every record of one FASTA file, in file order.
pub fn read_fasta_file(path: impl AsRef<Path>, separator: char) -> Result<Vec<CdsRecord>> {
    let path = path.as_ref();
    let mut reader = FastaReader::from_path(path, separator)?;
    let mut records = Vec::new();
    while let Some(rec) = reader.next_record()? {
        records.push(rec);
    }
    debug!(
        "{}: {} records ({} empty headers skipped)",
        path.display(),
        records.len(),
        reader.skipped()
    );
    Ok(records)
}
