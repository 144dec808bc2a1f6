//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `range` / `energy`: 射程与能量互换
//! - `propagate`: 垂直或斜穿传播
//! - `flux`: 地表通量权重
//! - `min-energy`: 到达探测器的最小地表能量
//! - `scan`: 参数扫描、导出与绘图
//! - `batch`: 批量传播事例文件
//! - `table`: 数据表查看与校验
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: model, query, scan, batch, table

pub mod batch;
pub mod model;
pub mod query;
pub mod scan;
pub mod table;

use clap::{Parser, Subcommand};

/// murange - 宇宙线 μ 子射程与通量工具
#[derive(Parser)]
#[command(name = "murange")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Cosmic-ray muon range, energy-loss and flux toolkit for standard rock", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub model: model::ModelArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Range in rock (m) for muon kinetic energies (GeV)
    Range(query::RangeArgs),

    /// Muon kinetic energy (GeV) for ranges in rock (m)
    Energy(query::EnergyArgs),

    /// Residual energy after a vertical or slant path through rock
    Propagate(query::PropagateArgs),

    /// Relative surface muon flux weight
    Flux(query::FluxArgs),

    /// Minimum surface energy to reach the detector through the overburden
    MinEnergy(query::MinEnergyArgs),

    /// Scan a quantity over a grid and export or plot it
    Scan(scan::ScanArgs),

    /// Propagate event CSV files in parallel
    Batch(batch::BatchArgs),

    /// Inspect, validate or export the stopping-power table
    Table(table::TableArgs),
}
