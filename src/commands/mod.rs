//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `physics/`, `utils/`
//! - 子模块: query, scan, batch, table

pub mod batch;
pub mod query;
pub mod scan;
pub mod table;

use crate::cli::{Cli, Commands};
use crate::error::Result;

/// 构建模型并执行命令
pub fn run(cli: Cli) -> Result<()> {
    let model = cli.model.build_model()?;

    match cli.command {
        Commands::Range(args) => query::execute_range(args, &model),
        Commands::Energy(args) => query::execute_energy(args, &model),
        Commands::Propagate(args) => query::execute_propagate(args, &model),
        Commands::Flux(args) => query::execute_flux(args, &model),
        Commands::MinEnergy(args) => query::execute_min_energy(args, &model),
        Commands::Scan(args) => scan::execute(args, &model),
        Commands::Batch(args) => batch::execute(args, &model),
        Commands::Table(args) => table::execute(args, &model),
    }
}
