//! # 全局模型参数
//!
//! 所有子命令共享的数据表 / 岩石 / 天顶角修正参数，
//! 每个参数都可以通过 `MURANGE_*` 环境变量设置。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 展开到顶层命令
//! - 构造 `models/config.rs` 的 ModelConfig

use crate::error::Result;
use crate::models::config::{DEFAULT_OVERBURDEN_M, STANDARD_ROCK_DENSITY};
use crate::models::{DomainPolicy, FluxParameters, ModelConfig, ZenithCorrection};
use crate::parsers;
use crate::physics::RangeEnergyModel;

use clap::Args;
use std::path::PathBuf;

/// 模型参数
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Stopping-power table CSV (kinetic_energy_mev,csda_range_gcm2); built-in standard rock if omitted
    #[arg(long, global = true, env = "MURANGE_TABLE")]
    pub table: Option<PathBuf>,

    /// Rock density in g/cm³
    #[arg(long, global = true, env = "MURANGE_ROCK_DENSITY", default_value_t = STANDARD_ROCK_DENSITY)]
    pub rock_density: f64,

    /// Vertical overburden in metres used when no depth is given
    #[arg(long, global = true, env = "MURANGE_OVERBURDEN", default_value_t = DEFAULT_OVERBURDEN_M)]
    pub overburden: f64,

    /// Zenith correction parameter P1
    #[arg(long, global = true, env = "MURANGE_P1", default_value_t = 0.102573, allow_negative_numbers = true)]
    pub p1: f64,

    /// Zenith correction parameter P2
    #[arg(long, global = true, env = "MURANGE_P2", default_value_t = -0.068287, allow_negative_numbers = true)]
    pub p2: f64,

    /// Zenith correction parameter P3
    #[arg(long, global = true, env = "MURANGE_P3", default_value_t = 0.958633, allow_negative_numbers = true)]
    pub p3: f64,

    /// Zenith correction parameter P4
    #[arg(long, global = true, env = "MURANGE_P4", default_value_t = 0.0407253, allow_negative_numbers = true)]
    pub p4: f64,

    /// Zenith correction parameter P5
    #[arg(long, global = true, env = "MURANGE_P5", default_value_t = 0.817285, allow_negative_numbers = true)]
    pub p5: f64,

    /// Log a warning whenever an energy or range falls outside the tabulated domain
    #[arg(long, global = true, env = "MURANGE_WARN_DOMAIN", default_value_t = false)]
    pub warn_domain: bool,
}

impl ModelArgs {
    /// 转换为模型配置
    pub fn to_config(&self) -> ModelConfig {
        ModelConfig {
            rock_density: self.rock_density,
            overburden_m: self.overburden,
            zenith: ZenithCorrection {
                p1: self.p1,
                p2: self.p2,
                p3: self.p3,
                p4: self.p4,
                p5: self.p5,
            },
            flux: FluxParameters::default(),
            domain_policy: if self.warn_domain {
                DomainPolicy::Warn
            } else {
                DomainPolicy::Silent
            },
        }
    }

    /// 加载数据表并构造模型
    pub fn build_model(&self) -> Result<RangeEnergyModel> {
        let table = parsers::load_table(self.table.as_deref())?;
        RangeEnergyModel::new(table, self.to_config())
    }
}
