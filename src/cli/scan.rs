//! # scan 子命令 CLI 定义
//!
//! 在能量或 cosθ 网格上扫描模型，导出数据或绘图。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use clap::{Args, ValueEnum};
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// 扫描的物理量
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ScanQuantity {
    /// Range in rock versus kinetic energy
    Range,
    /// Surface flux weight versus energy at fixed zenith angle
    Flux,
    /// Minimum surface energy versus cos(zenith) for the overburden
    MinEnergy,
    /// Residual energy after the overburden versus surface energy
    Residual,
}

impl ScanQuantity {
    /// 默认网格
    pub fn default_grid(&self) -> &'static str {
        match self {
            ScanQuantity::MinEnergy => "0.1:1",
            _ => "0.01:10000",
        }
    }

    /// 横轴是否为能量（对数网格）
    pub fn is_energy_axis(&self) -> bool {
        !matches!(self, ScanQuantity::MinEnergy)
    }
}

impl std::fmt::Display for ScanQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanQuantity::Range => write!(f, "range"),
            ScanQuantity::Flux => write!(f, "flux"),
            ScanQuantity::MinEnergy => write!(f, "min-energy"),
            ScanQuantity::Residual => write!(f, "residual"),
        }
    }
}

/// 扫描输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ScanOutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file
    Csv,
    /// XY data file
    Xy,
}

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Quantity to scan
    #[arg(value_enum)]
    pub quantity: ScanQuantity,

    /// Output file
    #[arg(short, long, default_value = "scan.csv")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ScanOutputFormat>,

    /// Grid as "from:to" (energies in GeV, or cos(zenith) for min-energy)
    #[arg(short, long)]
    pub grid: Option<String>,

    /// Number of grid points
    #[arg(short, long, default_value_t = 100)]
    pub points: usize,

    /// Cosine of the zenith angle (flux and residual scans)
    #[arg(short, long, default_value_t = 1.0)]
    pub cos_zenith: f64,

    /// Vertical depth in metres for residual and min-energy scans (defaults to --overburden)
    #[arg(short, long)]
    pub depth: Option<f64>,

    /// Number of rows to print
    #[arg(long, default_value_t = 10)]
    pub show: usize,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot
    #[arg(long)]
    pub title: Option<String>,
}

static GRID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?[0-9]*\.?[0-9]+(?:[eE][+-]?[0-9]+)?)\s*(?::|\.\.)\s*([+-]?[0-9]*\.?[0-9]+(?:[eE][+-]?[0-9]+)?)\s*$")
        .expect("grid regex is valid")
});

/// 解析 "from:to" 或 "from..to" 形式的网格范围
pub fn parse_grid(input: &str) -> Result<(f64, f64), String> {
    let caps = GRID_RE.captures(input).ok_or_else(|| {
        format!(
            "Invalid grid '{}'. Use 'from:to', e.g. 0.01:10000 or 1e-2..1e4",
            input
        )
    })?;

    let from: f64 = caps[1]
        .parse()
        .map_err(|_| format!("Invalid grid start in '{}'", input))?;
    let to: f64 = caps[2]
        .parse()
        .map_err(|_| format!("Invalid grid end in '{}'", input))?;

    if to <= from {
        return Err(format!("Invalid grid '{}': start must be below end", input));
    }
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid() {
        assert_eq!(parse_grid("0.01:10000"), Ok((0.01, 10000.0)));
        assert_eq!(parse_grid("1e-2..1e4"), Ok((0.01, 10000.0)));
        assert_eq!(parse_grid(" 0.1 : 1 "), Ok((0.1, 1.0)));
        assert!(parse_grid("10:1").is_err());
        assert!(parse_grid("5-90").is_err());
        assert!(parse_grid("abc").is_err());
    }
}
