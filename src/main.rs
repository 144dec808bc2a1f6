//! # murange 命令行入口
//!
//! ## 子命令
//! - `range` / `energy` - 射程与能量互换
//! - `propagate` - 垂直或斜穿后的剩余能量
//! - `flux` - 地表通量权重
//! - `min-energy` - 到达探测器所需的最小地表能量
//! - `scan` - 参数扫描，导出 CSV/XY 或绘图
//! - `batch` - 并行传播事例文件
//! - `table` - 查看、校验、导出数据表
//!
//! 日志级别默认 warn，`-v` 为 info，`-vv` 为 debug，`RUST_LOG` 优先。

use clap::Parser;
use murange::cli::Cli;
use murange::utils::output;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    if let Err(e) = murange::commands::run(cli) {
        output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
