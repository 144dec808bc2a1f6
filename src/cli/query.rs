//! # 单点查询子命令 CLI 定义
//!
//! `range`, `energy`, `propagate`, `flux`, `min-energy`
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/query.rs`

use clap::Args;

/// range 子命令参数
#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Muon kinetic energies in GeV
    #[arg(required = true, num_args = 1..)]
    pub energies: Vec<f64>,
}

/// energy 子命令参数
#[derive(Args, Debug)]
pub struct EnergyArgs {
    /// Ranges in metres of rock
    #[arg(required = true, num_args = 1..)]
    pub ranges: Vec<f64>,
}

/// propagate 子命令参数
#[derive(Args, Debug)]
pub struct PropagateArgs {
    /// Kinetic energy at the surface in GeV
    #[arg(short, long)]
    pub energy: f64,

    /// Vertical depth in metres (defaults to --overburden)
    #[arg(short, long)]
    pub depth: Option<f64>,

    /// Cosine of the zenith angle; vertical propagation if omitted
    #[arg(short, long, allow_negative_numbers = true)]
    pub cos_zenith: Option<f64>,
}

/// flux 子命令参数
#[derive(Args, Debug)]
pub struct FluxArgs {
    /// Cosine of the zenith angle
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub cos_zenith: f64,

    /// Muon energies in GeV
    #[arg(short, long, required = true, num_args = 1..)]
    pub energy: Vec<f64>,
}

/// min-energy 子命令参数
#[derive(Args, Debug)]
pub struct MinEnergyArgs {
    /// Cosines of the zenith angle
    #[arg(short, long, required = true, num_args = 1.., allow_negative_numbers = true)]
    pub cos_zenith: Vec<f64>,
}
