pub mod codon;
