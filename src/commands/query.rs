//! # 单点查询命令实现
//!
//! `range`, `energy`, `propagate`, `flux`, `min-energy` 的求值与表格输出。
//!
//! ## 依赖关系
//! - 使用 `cli/query.rs` 定义的参数
//! - 使用 `physics/model.rs` 的 RangeEnergyModel
//! - 使用 `utils/output.rs`

use crate::cli::query::{EnergyArgs, FluxArgs, MinEnergyArgs, PropagateArgs, RangeArgs};
use crate::error::{MuRangeError, Result};
use crate::models::units::meters_to_gcm2;
use crate::physics::RangeEnergyModel;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 查询结果表格中的一行
#[derive(Tabled)]
struct QueryRow {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Result")]
    result: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// 执行 range 命令
pub fn execute_range(args: RangeArgs, model: &RangeEnergyModel) -> Result<()> {
    output::print_header("Muon Range in Rock");

    let rows = args
        .energies
        .iter()
        .map(|&e| {
            if !(e > 0.0) {
                return Err(MuRangeError::InvalidEnergy(e));
            }
            let range = model.range_from_energy(e);
            Ok(QueryRow {
                input: format!("{} GeV", e),
                result: format!(
                    "{:.4} m ({:.4e} g/cm²)",
                    range,
                    meters_to_gcm2(range, model.config().rock_density)
                ),
                note: domain_note(model.in_energy_domain(e)),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    println!("{}", Table::new(&rows));
    Ok(())
}

/// 执行 energy 命令
pub fn execute_energy(args: EnergyArgs, model: &RangeEnergyModel) -> Result<()> {
    output::print_header("Muon Energy for Range");

    let rows = args
        .ranges
        .iter()
        .map(|&r| {
            if !(r > 0.0) {
                return Err(MuRangeError::InvalidArgument(format!(
                    "range must be positive, got {}",
                    r
                )));
            }
            Ok(QueryRow {
                input: format!("{} m", r),
                result: format!("{:.6} GeV", model.energy_from_range(r)),
                note: domain_note(model.in_range_domain(r)),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    println!("{}", Table::new(&rows));
    Ok(())
}

/// 执行 propagate 命令
pub fn execute_propagate(args: PropagateArgs, model: &RangeEnergyModel) -> Result<()> {
    output::print_header("Muon Propagation Through Rock");

    if !(args.energy > 0.0) {
        return Err(MuRangeError::InvalidEnergy(args.energy));
    }
    let depth = args.depth.unwrap_or(model.config().overburden_m);

    output::print_value("Surface energy", &format!("{} GeV", args.energy));
    output::print_value("Vertical depth", &format!("{} m", depth));
    output::print_value(
        "Full range",
        &format!("{:.4} m", model.range_from_energy(args.energy)),
    );

    let residual = match args.cos_zenith {
        None => model.propagate(args.energy, depth),
        Some(cos) => {
            output::print_value("cos(zenith)", &format!("{}", cos));
            match model.propagate_slant(args.energy, depth, cos) {
                Ok(e) => {
                    output::print_value("Slant depth", &format!("{:.4} m", depth / cos));
                    e
                }
                Err(e @ MuRangeError::InvalidAngle { .. }) => {
                    output::print_warning(&format!("{}; muon treated as stopped", e));
                    0.0
                }
                Err(e) => return Err(e),
            }
        }
    };

    output::print_value("Residual energy", &format!("{:.6} GeV", residual));
    println!();
    if residual > 0.0 {
        output::print_success("Muon reaches the detector");
    } else {
        output::print_info("Muon stops in the rock");
    }
    Ok(())
}

/// 执行 flux 命令
pub fn execute_flux(args: FluxArgs, model: &RangeEnergyModel) -> Result<()> {
    output::print_header("Surface Muon Flux Weight");

    check_cos_zenith(args.cos_zenith)?;
    output::print_value("cos(zenith)", &format!("{}", args.cos_zenith));
    output::print_value(
        "Corrected cos(zenith)",
        &format!("{:.6}", model.corrected_cos_zenith(args.cos_zenith)),
    );
    println!();

    let rows = args
        .energy
        .iter()
        .map(|&e| {
            if !(e > 0.0) {
                return Err(MuRangeError::InvalidEnergy(e));
            }
            Ok(QueryRow {
                input: format!("{} GeV", e),
                result: format!("{:.6e}", model.differential_flux(args.cos_zenith, e)),
                note: String::new(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    println!("{}", Table::new(&rows));
    Ok(())
}

/// 执行 min-energy 命令
pub fn execute_min_energy(args: MinEnergyArgs, model: &RangeEnergyModel) -> Result<()> {
    output::print_header(&format!(
        "Minimum Surface Energy ({} m overburden)",
        model.config().overburden_m
    ));

    let rows = args
        .cos_zenith
        .iter()
        .map(|&c| {
            check_cos_zenith(c)?;
            let slant = model.config().overburden_m / c;
            Ok(QueryRow {
                input: format!("cos θ = {}", c),
                result: format!("{:.4} GeV", model.minimum_energy_for_depth(c)),
                note: domain_note(model.in_range_domain(slant)),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    println!("{}", Table::new(&rows));
    Ok(())
}

fn check_cos_zenith(cos_zenith: f64) -> Result<()> {
    if cos_zenith > 0.0 && cos_zenith <= 1.0 {
        Ok(())
    } else {
        Err(MuRangeError::InvalidAngle { cos_zenith })
    }
}

fn domain_note(in_domain: bool) -> String {
    if in_domain {
        String::new()
    } else {
        "extrapolated".to_string()
    }
}
