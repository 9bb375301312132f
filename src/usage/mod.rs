//! 密码子使用统计：按物种汇总 64 个密码子的计数与频率。

pub mod counts;

use log::debug;
use serde::Serialize;

use crate::io::fasta::CdsRecord;
use crate::util::codon::CANONICAL_CODONS;

pub use counts::{total_codons, CodonCounts, SpeciesCodonCounts};

/// Column names of the usage table, in output order.
pub const COLUMNS: [&str; 6] = ["species", "codon", "count", "total_codons", "freq_fraction", "freq_percent"];

/// One (species, codon) row. Field order matches `COLUMNS`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodonUsageRow {
    pub species: String,
    pub codon: &'static str,
    pub count: u64,
    pub total_codons: u64,
    pub freq_fraction: f64,
    pub freq_percent: f64,
}

/// Usage table: 64 rows per species, species in first-seen order, codons in
/// canonical order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodonUsageTable {
    rows: Vec<CodonUsageRow>,
}

impl CodonUsageTable {
    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn rows(&self) -> &[CodonUsageRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct species in table order.
    pub fn species(&self) -> Vec<&str> {
        // each species occupies one contiguous block of 64 rows
        self.rows
            .chunks(CANONICAL_CODONS.len())
            .filter_map(|block| block.first())
            .map(|r| r.species.as_str())
            .collect()
    }

    pub fn rows_for<'a>(&'a self, species: &'a str) -> impl Iterator<Item = &'a CodonUsageRow> + 'a {
        self.rows.iter().filter(move |r| r.species == species)
    }
}

/// Rounds to 3 decimal places, ties to even.
#[inline]
fn round3(x: f64) -> f64 {
    (x * 1000.0).round_ties_even() / 1000.0
}

/// Builds the usage table from already-counted species.
pub fn usage_table(counts: &SpeciesCodonCounts) -> CodonUsageTable {
    let mut rows = Vec::with_capacity(counts.len() * CANONICAL_CODONS.len());
    for (species, table) in counts.iter() {
        let total = total_codons(table);
        if total == 0 {
            debug!("species {:?} has no valid codons", species);
        }
        for (&codon, &count) in CANONICAL_CODONS.iter().zip(table.iter()) {
            let freq_fraction = if total > 0 { count as f64 / total as f64 } else { 0.0 };
            rows.push(CodonUsageRow {
                species: species.to_string(),
                codon,
                count,
                total_codons: total,
                freq_fraction,
                freq_percent: round3(freq_fraction * 100.0),
            });
        }
    }
    CodonUsageTable { rows }
}

/// Counts codons per species over all `records` and normalizes to frequencies.
///
/// Empty input gives an empty table; the column set is still `COLUMNS`.
pub fn compute_codon_usage(records: &[CdsRecord]) -> CodonUsageTable {
    if records.is_empty() {
        return CodonUsageTable::default();
    }
    usage_table(&SpeciesCodonCounts::from_records(records))
}
