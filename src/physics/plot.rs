//! # 扫描曲线绘图
//!
//! 使用 `plotters` 库把扫描曲线画成 PNG / SVG。
//! 对数轴以 log10 坐标绘制，坐标轴标题注明。
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `physics/scan.rs` 的 ScanCurve

use crate::error::{MuRangeError, Result};
use crate::physics::ScanCurve;

use plotters::prelude::*;
use std::path::Path;

/// 生成曲线图
pub fn generate_scan_plot(
    curve: &ScanCurve,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_curve(&root, curve, title)?;
        root.present()
            .map_err(|e| MuRangeError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_curve(&root, curve, title)?;
        root.present()
            .map_err(|e| MuRangeError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 对数轴变换后的绘图数据，丢弃对数轴上的非正值
fn plot_points(curve: &ScanCurve) -> Vec<(f64, f64)> {
    let axis = |v: f64, log: bool| if log { v.log10() } else { v };
    curve
        .points
        .iter()
        .filter(|(x, y)| (!curve.log_x || *x > 0.0) && (!curve.log_y || *y > 0.0))
        .map(|&(x, y)| (axis(x, curve.log_x), axis(y, curve.log_y)))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect()
}

fn axis_desc(label: &str, log: bool) -> String {
    if log {
        format!("log10({})", label)
    } else {
        label.to_string()
    }
}

/// 绘图核心逻辑
fn draw_curve<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curve: &ScanCurve,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| MuRangeError::Other(format!("{:?}", e)))?;

    let data = plot_points(curve);
    if data.len() < 2 {
        return Err(MuRangeError::Other(format!(
            "not enough plottable points in '{}'",
            curve.name
        )));
    }

    let (x_min, x_max) = bounds(data.iter().map(|(x, _)| *x));
    let (y_min, y_max) = bounds(data.iter().map(|(_, y)| *y));
    let y_pad = 0.05 * (y_max - y_min).max(1e-12);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, (y_min - y_pad)..(y_max + y_pad))
        .map_err(|e| MuRangeError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc(axis_desc(&curve.x_label, curve.log_x))
        .y_desc(axis_desc(&curve.y_label, curve.log_y))
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| MuRangeError::Other(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(data, line_color.stroke_width(2)))
        .map_err(|e| MuRangeError::Other(format!("{:?}", e)))?;

    Ok(())
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    }
}
