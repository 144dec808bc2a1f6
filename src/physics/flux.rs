//! # 地表宇宙线 μ 子通量
//!
//! ## 公式
//! 有效天顶角（考虑地球曲率）：
//! cosθ* = sqrt((c² + P1² + P2·c^P3 + P4·c^P5) / (1 + P1² + P2 + P4))
//!
//! 微分通量（Gaisser 参数化，DayaBay 低能修正）：
//! dN/dE ∝ 0.14 · [E(1 + 3.64/(E·cosθ*^1.29))]^-2.7
//!         · [1/(1 + 1.1E·cosθ*/115) + 0.054/(1 + 1.1E·cosθ*/850)]
//!
//! 结果是蒙特卡罗重要性抽样用的相对权重，未归一化。
//!
//! ## 依赖关系
//! - 被 `physics/model.rs` 调用
//! - 使用 `models/config.rs` 中的参数

use crate::models::{FluxParameters, ZenithCorrection};

/// 有效 cos(天顶角)，在 c = 1 处恰为 1
pub fn corrected_cos_zenith(cos_zenith: f64, params: &ZenithCorrection) -> f64 {
    let c = cos_zenith;
    let numerator = c * c + params.p1 * params.p1 + params.p2 * c.powf(params.p3)
        + params.p4 * c.powf(params.p5);
    let denominator = 1.0 + params.p1 * params.p1 + params.p2 + params.p4;
    (numerator / denominator).sqrt()
}

/// 地表 μ 子相对微分通量
pub fn differential_flux(
    cos_zenith: f64,
    energy_gev: f64,
    zenith: &ZenithCorrection,
    flux: &FluxParameters,
) -> f64 {
    let cos_star = corrected_cos_zenith(cos_zenith, zenith);
    let e = energy_gev;

    let b1 = flux.critical_factor * e * cos_star / flux.pion_critical_gev;
    let b2 = flux.critical_factor * e * cos_star / flux.kaon_critical_gev;
    let b3 = e * cos_star.powf(flux.low_energy_exponent);

    let a1 = e * (1.0 + flux.low_energy_scale_gev / b3);
    let a2 = 1.0 / (1.0 + b1) + flux.kaon_weight / (1.0 + b2);

    flux.normalization * a1.powf(-flux.spectral_index) * a2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_correction_is_unity() {
        let params = ZenithCorrection::default();
        assert!((corrected_cos_zenith(1.0, &params) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_correction_near_horizon_stays_positive() {
        // 地球曲率使近水平方向的有效 cosθ 不趋于零
        let params = ZenithCorrection::default();
        let c = corrected_cos_zenith(1e-6, &params);
        assert!(c > 0.1 && c < 0.11, "got {c}");
        assert!((corrected_cos_zenith(0.5, &params) - 0.5028).abs() < 1e-3);
    }

    #[test]
    fn test_flux_reference_values() {
        let zenith = ZenithCorrection::default();
        let flux = FluxParameters::default();
        let f = differential_flux(1.0, 10.0, &zenith, &flux);
        assert!((f / 1.1671e-4 - 1.0).abs() < 1e-3, "got {f}");
        let f = differential_flux(0.5, 100.0, &zenith, &flux);
        assert!((f / 3.2191e-7 - 1.0).abs() < 1e-3, "got {f}");
    }

    #[test]
    fn test_flux_falls_with_energy() {
        let zenith = ZenithCorrection::default();
        let flux = FluxParameters::default();
        let low = differential_flux(1.0, 10.0, &zenith, &flux);
        let high = differential_flux(1.0, 1000.0, &zenith, &flux);
        assert!(high < low);
    }
}
