//! # 扫描数据导出
//!
//! 导出扫描曲线到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: 带列名的两列数据
//! - XY: `#` 注释头 + 制表符分隔的两列数据
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `physics/scan.rs` 的 ScanCurve
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{MuRangeError, Result};
use crate::physics::ScanCurve;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 导出为 CSV
pub fn to_csv(curve: &ScanCurve, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record([curve.x_label.as_str(), curve.y_label.as_str()])?;

    for (x, y) in &curve.points {
        wtr.write_record(&[format!("{:.6e}", x), format!("{:.6e}", y)])?;
    }

    wtr.flush().map_err(|e| MuRangeError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出为 XY
pub fn to_xy(curve: &ScanCurve, output_path: &Path) -> Result<()> {
    let write_err = |e: std::io::Error| MuRangeError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# {}", curve.name).map_err(write_err)?;
    writeln!(out, "# Columns: {}, {}", curve.x_label, curve.y_label).map_err(write_err)?;
    writeln!(out, "#").map_err(write_err)?;

    for (x, y) in &curve.points {
        writeln!(out, "{:.6e}\t{:.6e}", x, y).map_err(write_err)?;
    }

    out.flush().map_err(write_err)?;
    Ok(())
}
