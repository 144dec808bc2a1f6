//! # batch 命令实现
//!
//! 读取事例 CSV，逐事例计算斜穿后的剩余能量和地表通量权重。
//!
//! ## 功能
//! - 支持单文件和批量目录处理
//! - 文件级并行（rayon）
//! - 非法角度不会中断整批：事例标记为 `invalid-angle`，剩余能量记为 0
//! - 指定输出目录时按输入的相对路径镜像子目录，同名文件互不覆盖
//! - 统计落在数据表范围外（样条外推）的事例
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的 BatchArgs
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `parsers/events.rs` 读写事例

use crate::batch::collector::OUTPUT_SUFFIX;
use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::batch::BatchArgs;
use crate::error::{MuRangeError, Result};
use crate::models::{EventRecord, PropagatedEvent, PropagationStatus};
use crate::parsers::events;
use crate::physics::RangeEnergyModel;
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};

/// 单文件统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EventSummary {
    pub total: usize,
    pub reached: usize,
    pub stopped: usize,
    pub invalid: usize,
    /// 初始或剩余能量超出数据表范围的事例数
    pub extrapolated: usize,
}

/// 执行 batch 命令
pub fn execute(args: BatchArgs, model: &RangeEnergyModel) -> Result<()> {
    output::print_header("Batch Muon Propagation");

    if !args.input.exists() {
        return Err(MuRangeError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        return Err(MuRangeError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }

    output::print_info(&format!("Found {} event files", files.len()));

    if let Some(dir) = &args.output {
        fs::create_dir_all(dir).map_err(|e| MuRangeError::FileWriteError {
            path: dir.display().to_string(),
            source: e,
        })?;
    }

    let default_depth = args.depth.unwrap_or(model.config().overburden_m);
    output::print_info(&format!("Default vertical depth: {} m", default_depth));

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!("Using {} parallel jobs", runner.jobs()));

    let result = runner.run(files, |file| {
        let output_file = output_path(file, &args.input, args.output.as_deref());
        if output_file.exists() && !args.overwrite {
            return ProcessResult::Skipped(format!(
                "Output exists, skipping: {}",
                output_file.display()
            ));
        }
        match process_file(file, &output_file, model, default_depth) {
            Ok(summary) => {
                if summary.extrapolated > 0 {
                    log::warn!(
                        "{}: {} events outside the tabulated energy domain, values extrapolated",
                        file.display(),
                        summary.extrapolated
                    );
                }
                ProcessResult::Success(format!(
                    "{} -> {} ({} events: {} reached, {} stopped, {} invalid, {} extrapolated)",
                    file.display(),
                    output_file.display(),
                    summary.total,
                    summary.reached,
                    summary.stopped,
                    summary.invalid,
                    summary.extrapolated
                ))
            }
            Err(e) => ProcessResult::Failed(file.display().to_string(), e.to_string()),
        }
    });

    for msg in &result.messages {
        output::print_success(msg);
    }
    for msg in &result.skips {
        output::print_skip(msg);
    }

    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 输出文件路径：`<stem>_propagated.csv`
///
/// 无输出目录时写在输入文件旁；有输出目录时保留输入相对 `root` 的子目录。
pub fn output_path(input: &Path, root: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("events");
    let name = format!("{}{}.csv", stem, OUTPUT_SUFFIX);

    match output_dir {
        Some(dir) => {
            let sub_dir = input
                .strip_prefix(root)
                .ok()
                .and_then(Path::parent)
                .unwrap_or_else(|| Path::new(""));
            dir.join(sub_dir).join(name)
        }
        None => input.with_file_name(name),
    }
}

/// 处理单个事例文件
pub fn process_file(
    input: &Path,
    output: &Path,
    model: &RangeEnergyModel,
    default_depth_m: f64,
) -> Result<EventSummary> {
    let records = events::read_events_file(input)?;
    let propagated: Vec<PropagatedEvent> = records
        .iter()
        .map(|r| propagate_event(model, r, default_depth_m))
        .collect();

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| MuRangeError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }
    events::write_propagated_file(&propagated, output)?;
    Ok(summarize(model, &propagated))
}

/// 传播单个事例
pub fn propagate_event(
    model: &RangeEnergyModel,
    record: &EventRecord,
    default_depth_m: f64,
) -> PropagatedEvent {
    let depth_m = record.depth_m.unwrap_or(default_depth_m);

    let (residual, status, slant_depth_m, flux_weight) =
        match model.propagate_slant(record.energy_gev, depth_m, record.cos_zenith) {
            Ok(e) => {
                let status = if e > 0.0 {
                    PropagationStatus::Ok
                } else {
                    PropagationStatus::Stopped
                };
                (
                    e,
                    status,
                    depth_m / record.cos_zenith,
                    model.differential_flux(record.cos_zenith, record.energy_gev),
                )
            }
            Err(_) => (0.0, PropagationStatus::InvalidAngle, f64::NAN, 0.0),
        };

    PropagatedEvent {
        energy_gev: record.energy_gev,
        cos_zenith: record.cos_zenith,
        depth_m,
        slant_depth_m,
        residual_energy_gev: residual,
        flux_weight,
        status,
    }
}

/// 初始能量或到达探测器时的剩余能量落在表外
fn is_extrapolated(model: &RangeEnergyModel, event: &PropagatedEvent) -> bool {
    !model.in_energy_domain(event.energy_gev)
        || (event.status == PropagationStatus::Ok
            && !model.in_energy_domain(event.residual_energy_gev))
}

fn summarize(model: &RangeEnergyModel, events: &[PropagatedEvent]) -> EventSummary {
    events.iter().fold(
        EventSummary {
            total: events.len(),
            ..EventSummary::default()
        },
        |mut s, e| {
            match e.status {
                PropagationStatus::Ok => s.reached += 1,
                PropagationStatus::Stopped => s.stopped += 1,
                PropagationStatus::InvalidAngle => s.invalid += 1,
            }
            if is_extrapolated(model, e) {
                s.extrapolated += 1;
            }
            s
        },
    )
}
