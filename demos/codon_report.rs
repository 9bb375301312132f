//! 演示如何在 library 模式下使用 codon-usage 统计密码子使用情况。
//!
//! 运行方式：
//! ```bash
//! cargo run --example codon_report -- <fasta_dir>
//! ```
//! 不带参数时使用内置的两条示例序列。

use codon_usage::io::{self, table, CdsRecord};
use codon_usage::usage::{self, SpeciesCodonCounts};
use codon_usage::util::codon::CANONICAL_CODONS;

fn main() -> codon_usage::Result<()> {
    // 1. 读取序列：命令行给出目录则扫描目录，否则使用内置示例
    let records = match std::env::args().nth(1) {
        Some(dir) => io::load_fasta_directory(dir)?,
        None => vec![
            CdsRecord {
                species: "gam2".to_string(),
                record_id: "rec1".to_string(),
                sequence: "ATGCCGACTTGGTAA".to_string(),
            },
            CdsRecord {
                species: "gam5".to_string(),
                record_id: "rec2".to_string(),
                sequence: "ATGNNNCCGTGA".to_string(),
            },
        ],
    };
    println!("记录数: {}", records.len());

    // 2. 按物种计数
    let counts = SpeciesCodonCounts::from_records(&records);
    for (species, table) in counts.iter() {
        let total = usage::total_codons(table);
        let top = table
            .iter()
            .enumerate()
            .max_by_key(|&(_, &n)| n)
            .filter(|&(_, &n)| n > 0)
            .map(|(i, _)| CANONICAL_CODONS[i]);
        println!("  {}: {} 个密码子, 最常见 {}", species, total, top.unwrap_or("-"));
    }

    // 3. 频率表
    let usage = usage::usage_table(&counts);
    println!("\n结果表: {} 行, {} 个物种", usage.len(), usage.species().len());

    // 4. 输出前几行
    let mut buf = Vec::new();
    table::write_table(&usage, &mut buf, b'\t')?;
    for line in String::from_utf8_lossy(&buf).lines().take(6) {
        println!("  {}", line);
    }

    println!("\n完成！");
    Ok(())
}
