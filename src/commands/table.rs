//! # table 命令实现
//!
//! 显示当前使用的阻止本领表，可选往返校验和导出。
//!
//! ## 依赖关系
//! - 使用 `cli/table.rs` 定义的 TableArgs
//! - 使用 `parsers/table.rs` 导出表
//! - 使用 `physics/model.rs` 的往返残差

use crate::cli::table::TableArgs;
use crate::error::{MuRangeError, Result};
use crate::models::units::gcm2_to_meters;
use crate::parsers::table::write_table_with_comment;
use crate::physics::{RangeEnergyModel, RoundTripResidual};
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct RowView {
    #[tabled(rename = "T (MeV)")]
    energy_mev: String,
    #[tabled(rename = "CSDA (g/cm²)")]
    range_gcm2: String,
    #[tabled(rename = "Range (m)")]
    range_m: String,
}

#[derive(Tabled)]
struct ResidualView {
    #[tabled(rename = "E (GeV)")]
    energy: String,
    #[tabled(rename = "E' (GeV)")]
    round_trip: String,
    #[tabled(rename = "Rel. error")]
    error: String,
    #[tabled(rename = "Point")]
    kind: String,
}

/// 执行 table 命令
pub fn execute(args: TableArgs, model: &RangeEnergyModel) -> Result<()> {
    output::print_header("Stopping-Power Table");

    let table = model.table();
    let density = model.config().rock_density;
    let (e_min, e_max) = model.energy_domain_gev();
    let (r_min, r_max) = model.range_domain_m();

    output::print_value("Rows", &table.len().to_string());
    output::print_value("Rock density", &format!("{} g/cm³", density));
    output::print_value("Energy domain", &format!("{:.4e} .. {:.4e} GeV", e_min, e_max));
    output::print_value("Range domain", &format!("{:.4e} .. {:.4e} m", r_min, r_max));

    if args.rows {
        let rows: Vec<RowView> = table
            .rows()
            .map(|r| RowView {
                energy_mev: format!("{:.4e}", r.kinetic_energy_mev),
                range_gcm2: format!("{:.4e}", r.csda_range_gcm2),
                range_m: format!("{:.4e}", gcm2_to_meters(r.csda_range_gcm2, density)),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if let Some(path) = &args.export {
        let comment = format!(
            "Muon CSDA range table, {} rows\nEnergy domain {:.4e} .. {:.4e} MeV",
            table.len(),
            table.energy_domain_mev().0,
            table.energy_domain_mev().1
        );
        write_table_with_comment(table, &comment, path)?;
        output::print_success(&format!("Table written to {}", path.display()));
    }

    if args.validate {
        validate(model, args.tolerance)?;
    }

    Ok(())
}

/// 往返校验，超出容差的点视为失败
pub fn validate(model: &RangeEnergyModel, tolerance: f64) -> Result<()> {
    if !(tolerance > 0.0) {
        return Err(MuRangeError::InvalidArgument(format!(
            "tolerance must be positive, got {}",
            tolerance
        )));
    }

    output::print_separator();
    output::print_info("Energy -> range -> energy round trip");

    let residuals = model.round_trip_residuals();
    let worst = worst_residual(&residuals);
    let failures: Vec<&RoundTripResidual> = residuals
        .iter()
        .filter(|r| r.relative_error > tolerance)
        .collect();

    if !failures.is_empty() {
        let view: Vec<ResidualView> = failures.iter().map(|r| residual_view(r)).collect();
        println!("{}", Table::new(view));
    }

    if let Some(w) = worst {
        output::print_value(
            "Worst relative error",
            &format!("{:.3e} at {:.4e} GeV", w.relative_error, w.energy_gev),
        );
    }

    if failures.is_empty() {
        output::print_success(&format!(
            "{} points within tolerance {:.1e}",
            residuals.len(),
            tolerance
        ));
        Ok(())
    } else {
        Err(MuRangeError::Other(format!(
            "{} of {} round-trip points exceed tolerance {:.1e}",
            failures.len(),
            residuals.len(),
            tolerance
        )))
    }
}

fn worst_residual(residuals: &[RoundTripResidual]) -> Option<&RoundTripResidual> {
    residuals
        .iter()
        .max_by(|a, b| a.relative_error.total_cmp(&b.relative_error))
}

fn residual_view(r: &RoundTripResidual) -> ResidualView {
    ResidualView {
        energy: format!("{:.4e}", r.energy_gev),
        round_trip: format!("{:.4e}", r.round_trip_gev),
        error: format!("{:.3e}", r.relative_error),
        kind: if r.is_knot { "knot" } else { "mid" }.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::table::parse_table_file;

    #[test]
    fn test_validate_builtin_table() {
        let model = RangeEnergyModel::standard_rock().unwrap();
        assert!(validate(&model, 1e-3).is_ok());
        assert!(validate(&model, 1e-9).is_err());
        assert!(validate(&model, 0.0).is_err());
    }

    #[test]
    fn test_export_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rock.csv");
        let model = RangeEnergyModel::standard_rock().unwrap();

        let args = TableArgs {
            rows: false,
            validate: false,
            tolerance: 1e-3,
            export: Some(path.clone()),
        };
        execute(args, &model).unwrap();

        let reloaded = parse_table_file(&path).unwrap();
        assert_eq!(reloaded.len(), model.table().len());
        assert_eq!(reloaded.energies_mev(), model.table().energies_mev());
    }
}
