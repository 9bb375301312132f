//! # codon-usage
//!
//! 按物种统计 CDS 序列密码子使用情况的工具库。
//!
//! 本 crate 读取一个目录下的 FASTA 文件，根据序列头解析物种名，
//! 统计每个物种全部 CDS 中 64 个 RNA 密码子的出现次数与频率：
//!
//! - **序列读取**：扫描 `.fasta` / `.cds.fasta` 文件，头部按 `@` 拆分为物种名与记录 ID
//! - **标准化**：转大写，`T` 转写为 `U`
//! - **分段与过滤**：从 0 位起按三联体切分，丢弃末尾不足 3 个碱基的片段和含非 `UCAG` 字符的密码子
//! - **汇总**：每个物种固定输出 64 行（计数、总数、频率、百分比）
//!
//! ## 快速示例
//!
//! ```rust,no_run
//! use codon_usage::io::table;
//!
//! let usage = codon_usage::analyze_directory("data/cds")?;
//! println!("{} species, {} rows", usage.species().len(), usage.len());
//! table::write_table_to_path(&usage, "codon_usage.csv", b',')?;
//! # Ok::<(), codon_usage::CodonUsageError>(())
//! ```
//!
//! ## 模块说明
//!
//! - [`io`]：FASTA 解析、目录扫描、结果表写出
//! - [`usage`]：按物种的密码子计数与频率表
//! - [`util`]：标准密码子表与 RNA 标准化工具函数

pub mod error;
pub mod io;
pub mod usage;
pub mod util;

use std::path::Path;

pub use error::{CodonUsageError, Result};
pub use usage::{compute_codon_usage, CodonUsageRow, CodonUsageTable};

/// Reads every FASTA file in `dir` and returns its per-species codon usage.
pub fn analyze_directory(dir: impl AsRef<Path>) -> Result<CodonUsageTable> {
    analyze_directory_with_opt(dir, io::ReaderOpt::default())
}

pub fn analyze_directory_with_opt(dir: impl AsRef<Path>, opt: io::ReaderOpt) -> Result<CodonUsageTable> {
    let records = io::load_fasta_directory_with_opt(dir, opt)?;
    Ok(compute_codon_usage(&records))
}
