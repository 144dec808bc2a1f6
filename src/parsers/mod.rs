//! # 解析器模块
//!
//! 读写阻止本领表和事例 CSV 文件。
//!
//! ## 依赖关系
//! - 被 `physics/` 和 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: table, events

pub mod events;
pub mod table;

use crate::error::Result;
use crate::models::StoppingPowerTable;
use std::path::Path;

/// 加载数据表：给定路径时读文件，否则使用内置标准岩石表
pub fn load_table(path: Option<&Path>) -> Result<StoppingPowerTable> {
    match path {
        Some(p) => table::parse_table_file(p),
        None => table::builtin_table(),
    }
}
