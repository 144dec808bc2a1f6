//! # 单位换算
//!
//! 内部统一使用 MeV 和 g/cm²，换算只发生在公共接口边界。
//!
//! ## 依赖关系
//! - 被 `physics/model.rs` 使用
//! - 无外部模块依赖

/// 每 GeV 的 MeV 数
pub const MEV_PER_GEV: f64 = 1000.0;

/// 每米的厘米数
pub const CM_PER_M: f64 = 100.0;

/// GeV → MeV
#[inline]
pub fn gev_to_mev(energy_gev: f64) -> f64 {
    energy_gev * MEV_PER_GEV
}

/// MeV → GeV
#[inline]
pub fn mev_to_gev(energy_mev: f64) -> f64 {
    energy_mev / MEV_PER_GEV
}

/// 路径长度 (m) → 面密度 (g/cm²)，`density` 单位 g/cm³
#[inline]
pub fn meters_to_gcm2(length_m: f64, density: f64) -> f64 {
    length_m * CM_PER_M * density
}

/// 面密度 (g/cm²) → 路径长度 (m)
#[inline]
pub fn gcm2_to_meters(column_gcm2: f64, density: f64) -> f64 {
    column_gcm2 / (density * CM_PER_M)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_conversion() {
        assert_eq!(gev_to_mev(2.5), 2500.0);
        assert_eq!(mev_to_gev(2500.0), 2.5);
    }

    #[test]
    fn test_column_density_conversion() {
        // 1 m of standard rock = 265 g/cm²
        assert!((meters_to_gcm2(1.0, 2.65) - 265.0).abs() < 1e-12);
        assert!((gcm2_to_meters(265.0, 2.65) - 1.0).abs() < 1e-12);
    }
}
