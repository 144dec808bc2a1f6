//! # scan 命令实现
//!
//! 在网格上求值模型，打印前几行并导出 CSV / XY 或绘制 PNG / SVG。
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的 ScanArgs
//! - 使用 `physics/scan.rs`, `physics/export.rs`, `physics/plot.rs`

use crate::cli::scan::{parse_grid, ScanArgs, ScanOutputFormat, ScanQuantity};
use crate::error::{MuRangeError, Result};
use crate::physics::{self, RangeEnergyModel, ScanCurve};
use crate::utils::output;

use std::path::Path;

/// 执行 scan 命令
pub fn execute(args: ScanArgs, model: &RangeEnergyModel) -> Result<()> {
    output::print_header(&format!("Scanning {}", args.quantity));

    let curve = build_curve(&args, model)?;
    output::print_success(&format!(
        "Evaluated {} points of '{}'",
        curve.points.len(),
        curve.name
    ));

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));

    match format {
        ScanOutputFormat::Png | ScanOutputFormat::Svg => {
            let title = args.title.clone().unwrap_or_else(|| curve.name.clone());
            physics::plot::generate_scan_plot(
                &curve,
                &args.output,
                &title,
                args.width,
                args.height,
                format == ScanOutputFormat::Svg,
            )?;
        }
        ScanOutputFormat::Csv => physics::export::to_csv(&curve, &args.output)?,
        ScanOutputFormat::Xy => physics::export::to_xy(&curve, &args.output)?,
    }

    print_scan_table(&curve, args.show);
    output::print_success(&format!("Scan saved to '{}'", args.output.display()));
    Ok(())
}

/// 根据参数构造扫描曲线
pub fn build_curve(args: &ScanArgs, model: &RangeEnergyModel) -> Result<ScanCurve> {
    let grid_spec = args
        .grid
        .as_deref()
        .unwrap_or_else(|| args.quantity.default_grid());
    let (from, to) = parse_grid(grid_spec).map_err(MuRangeError::InvalidRange)?;

    let grid = if args.quantity.is_energy_axis() {
        physics::scan::log_grid(from, to, args.points)?
    } else {
        if from <= 0.0 || to > 1.0 {
            return Err(MuRangeError::InvalidRange(format!(
                "{} (cos(zenith) grid must lie in (0, 1])",
                grid_spec
            )));
        }
        physics::scan::linear_grid(from, to, args.points)?
    };

    let (e_min, e_max) = model.energy_domain_gev();
    if args.quantity.is_energy_axis() && (from < e_min || to > e_max) {
        output::print_warning(&format!(
            "Grid {}..{} GeV extends beyond the table domain {:.3e}..{:.3e} GeV; values there are extrapolated",
            from, to, e_min, e_max
        ));
    }

    let depth = args.depth.unwrap_or(model.config().overburden_m);

    let curve = match args.quantity {
        ScanQuantity::Range => physics::scan::scan_range(model, &grid),
        ScanQuantity::Flux => {
            if !(args.cos_zenith > 0.0 && args.cos_zenith <= 1.0) {
                return Err(MuRangeError::InvalidAngle {
                    cos_zenith: args.cos_zenith,
                });
            }
            physics::scan::scan_flux(model, args.cos_zenith, &grid)
        }
        ScanQuantity::MinEnergy => {
            physics::scan::scan_min_energy(model, depth, &grid)
        }
        ScanQuantity::Residual => {
            physics::scan::scan_residual(model, depth, args.cos_zenith, &grid)?
        }
    };

    Ok(curve)
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> ScanOutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("png") => ScanOutputFormat::Png,
        Some("svg") => ScanOutputFormat::Svg,
        Some("xy") | Some("dat") | Some("txt") => ScanOutputFormat::Xy,
        _ => ScanOutputFormat::Csv,
    }
}

/// 打印扫描结果的前几行
fn print_scan_table(curve: &ScanCurve, count: usize) {
    use tabled::{builder::Builder, Table};

    if count == 0 || curve.points.is_empty() {
        return;
    }

    let mut builder = Builder::default();
    builder.push_record([curve.x_label.clone(), curve.y_label.clone()]);

    let step = (curve.points.len() / count).max(1);
    for (x, y) in curve.points.iter().step_by(step).take(count) {
        builder.push_record([format!("{:.4e}", x), format!("{:.4e}", y)]);
    }

    let table: Table = builder.build();
    output::print_header(&format!("{} (every {} point(s))", curve.name, step));
    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(quantity: ScanQuantity, grid: Option<&str>) -> ScanArgs {
        ScanArgs {
            quantity,
            output: PathBuf::from("scan.csv"),
            format: None,
            grid: grid.map(str::to_string),
            points: 20,
            cos_zenith: 1.0,
            depth: None,
            show: 0,
            width: 800,
            height: 600,
            title: None,
        }
    }

    #[test]
    fn test_guess_format() {
        assert_eq!(
            guess_format_from_extension(Path::new("a.SVG")),
            ScanOutputFormat::Svg
        );
        assert_eq!(
            guess_format_from_extension(Path::new("a.xy")),
            ScanOutputFormat::Xy
        );
        assert_eq!(
            guess_format_from_extension(Path::new("a")),
            ScanOutputFormat::Csv
        );
    }

    #[test]
    fn test_build_min_energy_curve() {
        let model = RangeEnergyModel::standard_rock().unwrap();
        let curve = build_curve(&args(ScanQuantity::MinEnergy, None), &model).unwrap();
        assert_eq!(curve.points.len(), 20);
        assert_eq!(curve.points[0].0, 0.1);
        assert_eq!(curve.points[19].0, 1.0);
    }

    #[test]
    fn test_rejects_bad_cos_grid() {
        let model = RangeEnergyModel::standard_rock().unwrap();
        assert!(build_curve(&args(ScanQuantity::MinEnergy, Some("0:1")), &model).is_err());
        assert!(build_curve(&args(ScanQuantity::MinEnergy, Some("0.5:2")), &model).is_err());
    }

    #[test]
    fn test_build_flux_curve() {
        let model = RangeEnergyModel::standard_rock().unwrap();
        let curve = build_curve(&args(ScanQuantity::Flux, Some("1:1000")), &model).unwrap();
        assert!(curve.points.iter().all(|(_, f)| *f > 0.0));
    }
}
