//! # table 子命令 CLI 定义
//!
//! 查看、校验和导出阻止本领表。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/table.rs`

use clap::Args;
use std::path::PathBuf;

/// table 子命令参数
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Print every table row
    #[arg(long, default_value_t = false)]
    pub rows: bool,

    /// Check energy -> range -> energy round trips at knots and mid-points
    #[arg(long, default_value_t = false)]
    pub validate: bool,

    /// Relative tolerance for --validate
    #[arg(long, default_value_t = 1e-3)]
    pub tolerance: f64,

    /// Write the table in use to this CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}
