//! # 数据模型模块
//!
//! 定义阻止本领表、模型配置、单位换算和事例记录。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`physics/` 和 `commands/` 使用
//! - 子模块: table, config, units, event

pub mod config;
pub mod event;
pub mod table;
pub mod units;

pub use config::{DomainPolicy, FluxParameters, ModelConfig, ZenithCorrection};
pub use event::{EventRecord, PropagatedEvent, PropagationStatus};
pub use table::{StoppingPowerTable, TableRow};
