use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use codon_usage::io::{table, ReaderOpt};

#[derive(Parser, Debug)]
#[command(
    name = "codon-usage",
    author,
    version,
    about = "Per-species codon usage from a directory of CDS FASTA files",
    arg_required_else_help = true
)]
struct Cli {
    /// Directory containing .fasta / .cds.fasta files
    input_dir: PathBuf,
    /// Output table path
    #[arg(default_value = "codon_usage.csv")]
    output: PathBuf,
    /// Separator between species name and record id in headers
    #[arg(short, long, default_value_t = '@')]
    separator: char,
    /// Output field delimiter (single ASCII character)
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter, conflicts_with = "tsv")]
    delimiter: u8,
    /// Write tab-separated output
    #[arg(long)]
    tsv: bool,
    /// Logging level
    #[arg(short = 'L', long = "level", default_value_t = log::Level::Info)]
    level: log::Level,
}

fn parse_delimiter(s: &str) -> std::result::Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character, got {:?}", s)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    simple_logger::init_with_level(cli.level).context("cannot initialize logger")?;

    info!("reading FASTA files from: {}", cli.input_dir.display());

    let start = Instant::now();
    let opt = ReaderOpt { separator: cli.separator };
    let usage = codon_usage::analyze_directory_with_opt(&cli.input_dir, opt)
        .with_context(|| format!("cannot analyze '{}'", cli.input_dir.display()))?;
    let elapsed_analysis = start.elapsed();
    info!(
        "parsed {} rows of codon usage ({} species) in {:.2?}",
        usage.len(),
        usage.species().len(),
        elapsed_analysis
    );

    let delimiter = if cli.tsv { b'\t' } else { cli.delimiter };
    let start_write = Instant::now();
    table::write_table_to_path(&usage, &cli.output, delimiter)
        .with_context(|| format!("cannot write table to '{}'", cli.output.display()))?;
    let elapsed_write = start_write.elapsed();

    info!("wrote table to: {}", cli.output.display());
    info!("write time: {:.2?}", elapsed_write);
    info!("total time (analysis + write): {:.2?}", elapsed_analysis + elapsed_write);
    Ok(())
}
