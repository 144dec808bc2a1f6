//! # batch 子命令 CLI 定义
//!
//! 批量传播事例 CSV 文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input: event CSV file or directory of event files (columns: energy_gev,cos_zenith[,depth_m])
    pub input: PathBuf,

    /// Output directory (defaults to the directory of each input file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Glob pattern for input files (directory mode, comma-separated)
    #[arg(long, default_value = "*.csv")]
    pub pattern: String,

    /// Vertical depth in metres for events without depth_m (defaults to --overburden)
    #[arg(short, long)]
    pub depth: Option<f64>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Recurse into subdirectories
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
