//! # 事例数据模型
//!
//! 批量传播的输入 / 输出记录，通过 `serde` 直接与 CSV 列对应。
//!
//! ## 依赖关系
//! - 被 `parsers/events.rs` 和 `commands/batch.rs` 使用

use serde::{Deserialize, Serialize};

/// 输入事例：地表能量与入射方向
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// 地表动能 (GeV)
    pub energy_gev: f64,
    /// cos(天顶角)
    pub cos_zenith: f64,
    /// 垂直深度 (m)，缺省时使用配置中的覆盖层厚度
    #[serde(default)]
    pub depth_m: Option<f64>,
}

/// 传播状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropagationStatus {
    /// 到达探测器
    Ok,
    /// 在岩石中停止
    Stopped,
    /// 天顶角不合法
    InvalidAngle,
}

impl std::fmt::Display for PropagationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropagationStatus::Ok => write!(f, "ok"),
            PropagationStatus::Stopped => write!(f, "stopped"),
            PropagationStatus::InvalidAngle => write!(f, "invalid-angle"),
        }
    }
}

/// 输出事例
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropagatedEvent {
    pub energy_gev: f64,
    pub cos_zenith: f64,
    pub depth_m: f64,
    /// 斜穿深度 (m)
    pub slant_depth_m: f64,
    /// 探测器处剩余动能 (GeV)
    pub residual_energy_gev: f64,
    /// 地表相对通量权重
    pub flux_weight: f64,
    pub status: PropagationStatus,
}

impl PropagatedEvent {
    /// 输出 CSV 列名，与字段顺序一致
    pub const HEADER: [&'static str; 7] = [
        "energy_gev",
        "cos_zenith",
        "depth_m",
        "slant_depth_m",
        "residual_energy_gev",
        "flux_weight",
        "status",
    ];
}
