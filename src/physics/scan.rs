//! # 参数扫描
//!
//! 在能量或 cosθ 网格上并行求值模型，生成可导出 / 绘图的曲线。
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `physics/model.rs` 的 RangeEnergyModel
//! - 使用 `rayon` 并行求值

use crate::error::{MuRangeError, Result};
use crate::physics::RangeEnergyModel;

use rayon::prelude::*;

/// 扫描结果曲线
#[derive(Debug, Clone)]
pub struct ScanCurve {
    /// 曲线名称
    pub name: String,
    /// 横轴列名（含单位）
    pub x_label: String,
    /// 纵轴列名（含单位）
    pub y_label: String,
    /// 数据点，按 x 递增
    pub points: Vec<(f64, f64)>,
    /// 绘图时横轴取对数
    pub log_x: bool,
    /// 绘图时纵轴取对数
    pub log_y: bool,
}

/// 对数等间距网格
pub fn log_grid(from: f64, to: f64, points: usize) -> Result<Vec<f64>> {
    if !(from > 0.0 && to > from) {
        return Err(MuRangeError::InvalidRange(format!(
            "{}..{} (log grid needs 0 < from < to)",
            from, to
        )));
    }
    let (lo, hi) = (from.ln(), to.ln());
    Ok(linear_grid(lo, hi, points)?
        .into_iter()
        .map(f64::exp)
        .collect())
}

/// 线性等间距网格（含两端点）
pub fn linear_grid(from: f64, to: f64, points: usize) -> Result<Vec<f64>> {
    if points < 2 {
        return Err(MuRangeError::InvalidArgument(format!(
            "a scan needs at least 2 points, got {}",
            points
        )));
    }
    if !(to > from) {
        return Err(MuRangeError::InvalidRange(format!(
            "{}..{} (must have from < to)",
            from, to
        )));
    }
    let step = (to - from) / (points - 1) as f64;
    Ok((0..points)
        .map(|i| if i == points - 1 { to } else { from + i as f64 * step })
        .collect())
}

/// 射程随能量变化
pub fn scan_range(model: &RangeEnergyModel, energies_gev: &[f64]) -> ScanCurve {
    let points = energies_gev
        .par_iter()
        .map(|&e| (e, model.range_from_energy(e)))
        .collect();

    ScanCurve {
        name: "Muon range in rock".to_string(),
        x_label: "energy_gev".to_string(),
        y_label: "range_m".to_string(),
        points,
        log_x: true,
        log_y: true,
    }
}

/// 给定方向的地表通量谱
pub fn scan_flux(model: &RangeEnergyModel, cos_zenith: f64, energies_gev: &[f64]) -> ScanCurve {
    let points = energies_gev
        .par_iter()
        .map(|&e| (e, model.differential_flux(cos_zenith, e)))
        .collect();

    ScanCurve {
        name: format!("Surface muon flux (cos θ = {:.3})", cos_zenith),
        x_label: "energy_gev".to_string(),
        y_label: "flux_weight".to_string(),
        points,
        log_x: true,
        log_y: true,
    }
}

/// 最小地表能量随 cosθ 变化
pub fn scan_min_energy(
    model: &RangeEnergyModel,
    overburden_m: f64,
    cos_values: &[f64],
) -> ScanCurve {
    let points = cos_values
        .par_iter()
        .map(|&c| (c, model.minimum_energy_for_overburden(c, overburden_m)))
        .collect();

    ScanCurve {
        name: format!("Minimum surface energy ({:.1} m overburden)", overburden_m),
        x_label: "cos_zenith".to_string(),
        y_label: "min_energy_gev".to_string(),
        points,
        log_x: false,
        log_y: true,
    }
}

/// 穿过覆盖层后的剩余能量随地表能量变化
pub fn scan_residual(
    model: &RangeEnergyModel,
    depth_m: f64,
    cos_zenith: f64,
    energies_gev: &[f64],
) -> Result<ScanCurve> {
    if !(cos_zenith > 0.0 && cos_zenith <= 1.0) {
        return Err(MuRangeError::InvalidAngle { cos_zenith });
    }

    let points = energies_gev
        .par_iter()
        .map(|&e| (e, model.propagate_slant_or_stopped(e, depth_m, cos_zenith)))
        .collect();

    Ok(ScanCurve {
        name: format!(
            "Residual energy after {:.1} m (cos θ = {:.3})",
            depth_m, cos_zenith
        ),
        x_label: "energy_gev".to_string(),
        y_label: "residual_energy_gev".to_string(),
        points,
        log_x: true,
        log_y: true,
    })
}
