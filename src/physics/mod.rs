//! # μ 子传播物理模块
//!
//! 提供射程-能量换算、岩石中的能量损失和地表通量计算。
//!
//! ## 子模块
//! - `spline`: 自然三次样条（对数-对数空间）
//! - `flux`: 天顶角修正与微分通量
//! - `model`: 射程-能量模型
//! - `scan`: 参数扫描
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/` 和 `parsers/`

pub mod export;
pub mod flux;
pub mod model;
pub mod plot;
pub mod scan;
pub mod spline;

pub use model::{RangeEnergyModel, RoundTripResidual};
pub use scan::ScanCurve;
pub use spline::{LogLogSpline, NaturalCubicSpline};
