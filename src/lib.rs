//! # murange - 宇宙线 μ 子射程与通量工具箱
//!
//! 标准岩石中 μ 子的射程-能量换算、穿过覆盖层后的剩余能量，
//! 以及地表通量权重，用于地下探测器的蒙特卡罗模拟。
//!
//! ## 模块结构
//! ```text
//! lib.rs
//!   ├── physics/    (样条、射程-能量模型、通量、扫描与绘图)
//!   ├── models/     (数据表、配置、事例、单位)
//!   ├── parsers/    (数据表与事例 CSV)
//!   ├── batch/      (文件收集与并行处理)
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── utils/      (终端输出与进度条)
//!   └── error.rs    (错误处理)
//! ```
//!
//! ## 用法
//! ```no_run
//! use murange::physics::RangeEnergyModel;
//!
//! let model = RangeEnergyModel::standard_rock()?;
//! let range_m = model.range_from_energy(100.0);
//! let residual_gev = model.propagate_slant(1000.0, 85.0, 0.8)?;
//! # Ok::<(), murange::error::MuRangeError>(())
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod parsers;
pub mod physics;
pub mod utils;

pub use error::{MuRangeError, Result};
pub use physics::RangeEnergyModel;
