use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use codon_usage::io::fasta::{CdsRecord, FastaReader};
use codon_usage::usage::{compute_codon_usage, SpeciesCodonCounts};
use codon_usage::util::codon;

fn make_sequence(len: usize, seed: u32) -> String {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = seed;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    String::from_utf8(seq).unwrap()
}

fn make_records(n_species: usize, per_species: usize, len: usize) -> Vec<CdsRecord> {
    let mut records = Vec::with_capacity(n_species * per_species);
    for r in 0..per_species {
        for s in 0..n_species {
            records.push(CdsRecord {
                species: format!("sp{}", s),
                record_id: format!("rec{}", r),
                sequence: make_sequence(len, (s * per_species + r) as u32),
            });
        }
    }
    records
}

fn make_fasta(records: &[CdsRecord]) -> Vec<u8> {
    let mut out = String::new();
    for rec in records {
        out.push_str(&format!(">{}@{}\n", rec.species, rec.record_id));
        for line in rec.sequence.as_bytes().chunks(60) {
            out.push_str(std::str::from_utf8(line).unwrap());
            out.push('\n');
        }
    }
    out.into_bytes()
}

fn bench_parse_fasta(c: &mut Criterion) {
    let data = make_fasta(&make_records(10, 50, 1_500));

    c.bench_function("parse_fasta_500x1500bp", |b| {
        b.iter(|| {
            let mut reader = FastaReader::new(Cursor::new(black_box(&data[..])));
            let mut n = 0usize;
            while let Some(rec) = reader.next_record().unwrap() {
                n += rec.sequence.len();
            }
            black_box(n)
        })
    });
}

fn bench_normalize(c: &mut Criterion) {
    let seq = make_sequence(10_000, 42);

    c.bench_function("normalize_to_rna_10k", |b| {
        b.iter(|| black_box(codon::normalize_to_rna(black_box(&seq))))
    });
}

fn bench_count_codons(c: &mut Criterion) {
    let records = make_records(10, 50, 1_500);

    c.bench_function("count_codons_500x1500bp", |b| {
        b.iter(|| black_box(SpeciesCodonCounts::from_records(black_box(&records))))
    });
}

fn bench_usage_table(c: &mut Criterion) {
    let records = make_records(100, 5, 900);

    c.bench_function("codon_usage_100_species", |b| {
        b.iter(|| black_box(compute_codon_usage(black_box(&records))))
    });
}

criterion_group!(benches, bench_parse_fasta, bench_normalize, bench_count_codons, bench_usage_table);
criterion_main!(benches);
