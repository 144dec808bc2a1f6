//! # 模型配置
//!
//! 岩石密度、天顶角修正参数和通量参数化常数。
//! 默认值即标准岩石 + DayaBay 参数化。
//!
//! ## 依赖关系
//! - 被 `physics/` 使用
//! - 由 `cli/mod.rs` 的全局参数构造

use crate::error::{MuRangeError, Result};

use serde::{Deserialize, Serialize};

/// 标准岩石密度 (g/cm³)
pub const STANDARD_ROCK_DENSITY: f64 = 2.65;

/// 默认覆盖层厚度 (m)
pub const DEFAULT_OVERBURDEN_M: f64 = 85.0;

/// 超出数据表定义域时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DomainPolicy {
    /// 直接使用样条外推
    #[default]
    Silent,
    /// 外推结果不变，但输出警告日志
    Warn,
}

/// 有效 cos(天顶角) 修正的五个参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZenithCorrection {
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
    pub p4: f64,
    pub p5: f64,
}

impl Default for ZenithCorrection {
    fn default() -> Self {
        Self {
            p1: 0.102573,
            p2: -0.068287,
            p3: 0.958633,
            p4: 0.0407253,
            p5: 0.817285,
        }
    }
}

/// 地表 μ 子微分通量参数化 (Gaisser 形式，DayaBay 修正)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluxParameters {
    /// 归一化系数
    pub normalization: f64,
    /// 谱指数
    pub spectral_index: f64,
    /// π 介子临界能量 (GeV)
    pub pion_critical_gev: f64,
    /// K 介子临界能量 (GeV)
    pub kaon_critical_gev: f64,
    /// 临界能量项前的系数
    pub critical_factor: f64,
    /// K 介子分支权重
    pub kaon_weight: f64,
    /// 低能修正能标 (GeV)
    pub low_energy_scale_gev: f64,
    /// 低能修正中 cosθ* 的指数
    pub low_energy_exponent: f64,
}

impl Default for FluxParameters {
    fn default() -> Self {
        Self {
            normalization: 0.14,
            spectral_index: 2.7,
            pion_critical_gev: 115.0,
            kaon_critical_gev: 850.0,
            critical_factor: 1.1,
            kaon_weight: 0.054,
            low_energy_scale_gev: 3.64,
            low_energy_exponent: 1.29,
        }
    }
}

/// 模型配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// 岩石密度 (g/cm³)
    pub rock_density: f64,
    /// 默认覆盖层厚度 (m)
    pub overburden_m: f64,
    /// 天顶角修正
    pub zenith: ZenithCorrection,
    /// 通量参数化
    pub flux: FluxParameters,
    /// 定义域外的处理方式
    pub domain_policy: DomainPolicy,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            rock_density: STANDARD_ROCK_DENSITY,
            overburden_m: DEFAULT_OVERBURDEN_M,
            zenith: ZenithCorrection::default(),
            flux: FluxParameters::default(),
            domain_policy: DomainPolicy::Silent,
        }
    }
}

impl ModelConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if !(self.rock_density.is_finite() && self.rock_density > 0.0) {
            return Err(MuRangeError::InvalidArgument(format!(
                "rock density must be positive, got {}",
                self.rock_density
            )));
        }
        if !(self.overburden_m.is_finite() && self.overburden_m >= 0.0) {
            return Err(MuRangeError::InvalidArgument(format!(
                "overburden must be non-negative, got {}",
                self.overburden_m
            )));
        }
        let z = &self.zenith;
        // 归一化分母，保证 cosθ = 1 时修正值为 1
        let norm = 1.0 + z.p1 * z.p1 + z.p2 + z.p4;
        if !(norm.is_finite() && norm > 0.0) {
            return Err(MuRangeError::InvalidArgument(format!(
                "zenith correction normalisation 1 + P1² + P2 + P4 = {} must be positive",
                norm
            )));
        }
        Ok(())
    }
}
