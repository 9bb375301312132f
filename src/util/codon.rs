/// RNA alphabet in canonical order.
pub const RNA_ALPHABET: [u8; 4] = [b'U', b'C', b'A', b'G'];

pub const NUM_CODONS: usize = 64;

/// All 64 codons, nested over `U, C, A, G` for positions 1, 2, 3.
/// Output rows follow this order.
#[rustfmt::skip]
pub const CANONICAL_CODONS: [&str; NUM_CODONS] = [
    "UUU", "UUC", "UUA", "UUG", "UCU", "UCC", "UCA", "UCG",
    "UAU", "UAC", "UAA", "UAG", "UGU", "UGC", "UGA", "UGG",
    "CUU", "CUC", "CUA", "CUG", "CCU", "CCC", "CCA", "CCG",
    "CAU", "CAC", "CAA", "CAG", "CGU", "CGC", "CGA", "CGG",
    "AUU", "AUC", "AUA", "AUG", "ACU", "ACC", "ACA", "ACG",
    "AAU", "AAC", "AAA", "AAG", "AGU", "AGC", "AGA", "AGG",
    "GUU", "GUC", "GUA", "GUG", "GCU", "GCC", "GCA", "GCG",
    "GAU", "GAC", "GAA", "GAG", "GGU", "GGC", "GGA", "GGG",
];

const INVALID: u8 = 4;

/// ASCII -> position in `RNA_ALPHABET`; anything else is `INVALID`.
/// Only upper-case RNA letters are valid: sequences are normalized first.
const BASE_INDEX: [u8; 256] = {
    let mut tbl = [INVALID; 256];
    let mut i = 0;
    while i < RNA_ALPHABET.len() {
        tbl[RNA_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    tbl
};

/// Index of a codon in `CANONICAL_CODONS`, or `None` if it is not a full
/// triplet over `{U,C,A,G}`.
#[inline]
pub fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let mut idx = 0usize;
    for &b in codon {
        let i = BASE_INDEX[b as usize];
        if i == INVALID {
            return None;
        }
        idx = idx * 4 + i as usize;
    }
    Some(idx)
}

/// Upper-cases the sequence and transcribes `T` to `U`.
///
/// One byte per input character; non-ASCII characters become `N` so the
/// reading frame still follows character positions.
pub fn normalize_to_rna(seq: &str) -> Vec<u8> {
    seq.chars()
        .map(|c| {
            if !c.is_ascii() {
                return b'N';
            }
            match c.to_ascii_uppercase() as u8 {
                b'T' => b'U',
                b => b,
            }
        })
        .collect()
}

/// Consecutive non-overlapping triplets from position 0; a trailing
/// fragment of 1 or 2 bases is dropped.
#[inline]
pub fn codons(seq: &[u8]) -> std::slice::ChunksExact<'_, u8> {
    seq.chunks_exact(3)
}
