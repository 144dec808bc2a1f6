//! # 美化输出工具
//!
//! 状态消息写到 stderr，计算结果（数值、表格）写到 stdout，
//! 方便把结果重定向或接入管道。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

const RULE_WIDTH: usize = 60;

/// 打印成功消息
pub fn print_success(msg: &str) {
    eprintln!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    eprintln!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    eprintln!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印一行 `名称  数值`，写到 stdout
pub fn print_value(name: &str, value: &str) {
    println!("    {:<28} {}", name.dimmed(), value.bold());
}

/// 打印标题栏
pub fn print_header(title: &str) {
    eprintln!("\n{}", "─".repeat(RULE_WIDTH).dimmed());
    eprintln!("  {}", title.cyan().bold());
    eprintln!("{}\n", "─".repeat(RULE_WIDTH).dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    eprintln!("{}", "─".repeat(RULE_WIDTH).dimmed());
}
