pub mod discover;
pub mod fasta;
pub mod table;

pub use discover::{load_fasta_directory, load_fasta_directory_with_opt, ReaderOpt};
pub use fasta::{parse_header, CdsRecord, FastaReader};
