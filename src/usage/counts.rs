use std::collections::HashMap;

use crate::io::fasta::CdsRecord;
use crate::util::codon::{codon_index, codons, normalize_to_rna, NUM_CODONS};

/// Counts for the 64 canonical codons, indexed like `CANONICAL_CODONS`.
pub type CodonCounts = [u64; NUM_CODONS];

/// Per-species codon counts, species kept in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct SpeciesCodonCounts {
    species: Vec<String>,
    slots: HashMap<String, usize>,
    counts: Vec<CodonCounts>,
}

impl SpeciesCodonCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every record of `records`.
    ///
    /// All species are registered first, so a species whose sequences hold no
    /// valid codon still gets a zero-filled row.
    pub fn from_records(records: &[CdsRecord]) -> Self {
        let mut out = Self::new();
        for rec in records {
            out.register(&rec.species);
        }
        for rec in records {
            let slot = out.slots[&rec.species];
            out.add_sequence(slot, &rec.sequence);
        }
        out
    }

    /// Returns the slot of `species`, adding a zero-filled one if new.
    pub fn register(&mut self, species: &str) -> usize {
        if let Some(&slot) = self.slots.get(species) {
            return slot;
        }
        let slot = self.species.len();
        self.species.push(species.to_string());
        self.slots.insert(species.to_string(), slot);
        self.counts.push([0; NUM_CODONS]);
        slot
    }

    /// Normalizes `sequence` to RNA and adds its valid codons to `slot`.
    /// Returns how many codons were counted.
    pub fn add_sequence(&mut self, slot: usize, sequence: &str) -> u64 {
        let rna = normalize_to_rna(sequence);
        let table = &mut self.counts[slot];
        let mut added = 0;
        for codon in codons(&rna) {
            if let Some(i) = codon_index(codon) {
                table[i] += 1;
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn get(&self, species: &str) -> Option<&CodonCounts> {
        self.slots.get(species).map(|&slot| &self.counts[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CodonCounts)> {
        self.species.iter().map(String::as_str).zip(self.counts.iter())
    }
}

pub fn total_codons(counts: &CodonCounts) -> u64 {
    counts.iter().sum()
}
