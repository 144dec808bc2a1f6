//! # μ 子射程-能量模型
//!
//! 由阻止本领表构造两条对数-对数样条（能量→射程、射程→能量），
//! 在其上实现垂直 / 斜穿传播、通量权重和最小地表能量。
//!
//! ## 单位
//! - 公共接口：动能 GeV，长度 m
//! - 内部：MeV 与 g/cm²，换算见 `models/units.rs`
//!
//! ## 并发
//! 构造后不可变，可在 rayon 线程间按引用共享，无需加锁。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `physics/scan.rs` 调用
//! - 使用 `physics/spline.rs`, `physics/flux.rs`
//! - 使用 `models/` 中的表、配置和单位换算

use crate::error::{MuRangeError, Result};
use crate::models::units::{gcm2_to_meters, gev_to_mev, meters_to_gcm2, mev_to_gev};
use crate::models::{DomainPolicy, ModelConfig, StoppingPowerTable};
use crate::parsers;
use crate::physics::flux;
use crate::physics::spline::LogLogSpline;

/// 往返校验中的单点结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundTripResidual {
    /// 输入动能 (GeV)
    pub energy_gev: f64,
    /// 能量→射程→能量后的结果 (GeV)
    pub round_trip_gev: f64,
    /// 相对误差
    pub relative_error: f64,
    /// 是否为数据表节点（否则为相邻节点的几何中点）
    pub is_knot: bool,
}

/// μ 子射程-能量模型
#[derive(Debug, Clone)]
pub struct RangeEnergyModel {
    table: StoppingPowerTable,
    energy_to_range: LogLogSpline,
    range_to_energy: LogLogSpline,
    config: ModelConfig,
}

impl RangeEnergyModel {
    /// 由数据表和配置构造
    pub fn new(table: StoppingPowerTable, config: ModelConfig) -> Result<Self> {
        config.validate()?;

        let energy_to_range = LogLogSpline::fit(table.energies_mev(), table.ranges_gcm2())?;
        let range_to_energy = LogLogSpline::fit(table.ranges_gcm2(), table.energies_mev())?;

        log::debug!(
            "built range/energy splines from {} rows, E = {:?} MeV",
            table.len(),
            table.energy_domain_mev()
        );

        Ok(Self {
            table,
            energy_to_range,
            range_to_energy,
            config,
        })
    }

    /// 内置标准岩石数据表 + 默认配置
    pub fn standard_rock() -> Result<Self> {
        Self::new(parsers::table::builtin_table()?, ModelConfig::default())
    }

    /// 替换定义域处理方式
    pub fn with_domain_policy(mut self, policy: DomainPolicy) -> Self {
        self.config.domain_policy = policy;
        self
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn table(&self) -> &StoppingPowerTable {
        &self.table
    }

    /// 数据表能量定义域 (GeV)
    pub fn energy_domain_gev(&self) -> (f64, f64) {
        let (lo, hi) = self.energy_to_range.domain();
        (mev_to_gev(lo), mev_to_gev(hi))
    }

    /// 数据表射程定义域 (m)
    pub fn range_domain_m(&self) -> (f64, f64) {
        let (lo, hi) = self.range_to_energy.domain();
        let rho = self.config.rock_density;
        (gcm2_to_meters(lo, rho), gcm2_to_meters(hi, rho))
    }

    pub fn in_energy_domain(&self, kinetic_energy_gev: f64) -> bool {
        self.energy_to_range.contains(gev_to_mev(kinetic_energy_gev))
    }

    pub fn in_range_domain(&self, range_m: f64) -> bool {
        self.range_to_energy
            .contains(meters_to_gcm2(range_m, self.config.rock_density))
    }

    // ─────────────────────────────────────────────────────────────
    // 射程 / 能量换算
    // ─────────────────────────────────────────────────────────────

    /// 动能 (GeV) → 标准岩石中的射程 (m)
    ///
    /// 要求 `kinetic_energy_gev > 0`。表外直接使用样条外推。
    pub fn range_from_energy(&self, kinetic_energy_gev: f64) -> f64 {
        let energy_mev = gev_to_mev(kinetic_energy_gev);
        self.check_domain("kinetic energy [MeV]", energy_mev, &self.energy_to_range);
        let range_gcm2 = self.energy_to_range.eval(energy_mev);
        gcm2_to_meters(range_gcm2, self.config.rock_density)
    }

    /// 射程 (m) → 动能 (GeV)
    pub fn energy_from_range(&self, range_m: f64) -> f64 {
        let range_gcm2 = meters_to_gcm2(range_m, self.config.rock_density);
        self.check_domain("range [g/cm²]", range_gcm2, &self.range_to_energy);
        mev_to_gev(self.range_to_energy.eval(range_gcm2))
    }

    /// 只接受表内能量的 `range_from_energy`
    pub fn checked_range_from_energy(&self, kinetic_energy_gev: f64) -> Result<f64> {
        if !(kinetic_energy_gev > 0.0) {
            return Err(MuRangeError::InvalidEnergy(kinetic_energy_gev));
        }
        if !self.in_energy_domain(kinetic_energy_gev) {
            let (min, max) = self.energy_domain_gev();
            return Err(MuRangeError::OutOfDomain {
                quantity: "kinetic energy [GeV]",
                value: kinetic_energy_gev,
                min,
                max,
            });
        }
        Ok(self.range_from_energy(kinetic_energy_gev))
    }

    /// 只接受表内射程的 `energy_from_range`
    pub fn checked_energy_from_range(&self, range_m: f64) -> Result<f64> {
        if !self.in_range_domain(range_m) {
            let (min, max) = self.range_domain_m();
            return Err(MuRangeError::OutOfDomain {
                quantity: "range [m]",
                value: range_m,
                min,
                max,
            });
        }
        Ok(self.energy_from_range(range_m))
    }

    // ─────────────────────────────────────────────────────────────
    // 传播
    // ─────────────────────────────────────────────────────────────

    /// 垂直穿过 `depth_m` 岩石后的剩余动能 (GeV)，停止时返回 0
    pub fn propagate(&self, start_energy_gev: f64, depth_m: f64) -> f64 {
        let full_range = self.range_from_energy(start_energy_gev);
        if full_range <= depth_m {
            return 0.0;
        }
        self.energy_from_range(full_range - depth_m)
    }

    /// 以天顶角穿过垂直深度 `depth_m` 后的剩余动能 (GeV)
    ///
    /// `cos_zenith` 必须在 (0, 1] 内，否则返回 `InvalidAngle`。
    /// 合法输入下停止的 μ 子返回 `Ok(0.0)`。
    pub fn propagate_slant(
        &self,
        start_energy_gev: f64,
        depth_m: f64,
        cos_zenith: f64,
    ) -> Result<f64> {
        if !(cos_zenith > 0.0 && cos_zenith <= 1.0) {
            log::warn!(
                "invalid zenith angle: cos(zenith) = {} is outside (0, 1], treating muon as stopped",
                cos_zenith
            );
            return Err(MuRangeError::InvalidAngle { cos_zenith });
        }

        let slant_depth = depth_m / cos_zenith;
        let full_range = self.range_from_energy(start_energy_gev);
        if full_range <= slant_depth {
            return Ok(0.0);
        }
        Ok(self.energy_from_range(full_range - slant_depth))
    }

    /// 与 `propagate_slant` 相同，但非法角度按停止处理返回 0
    ///
    /// 供大批量蒙特卡罗抽样使用，单个坏样本不会中断整批。
    pub fn propagate_slant_or_stopped(
        &self,
        start_energy_gev: f64,
        depth_m: f64,
        cos_zenith: f64,
    ) -> f64 {
        self.propagate_slant(start_energy_gev, depth_m, cos_zenith)
            .unwrap_or(0.0)
    }

    // ─────────────────────────────────────────────────────────────
    // 通量与阈值
    // ─────────────────────────────────────────────────────────────

    /// 考虑地球曲率的有效 cos(天顶角)
    pub fn corrected_cos_zenith(&self, cos_zenith: f64) -> f64 {
        flux::corrected_cos_zenith(cos_zenith, &self.config.zenith)
    }

    /// 地表相对微分通量权重
    pub fn differential_flux(&self, cos_zenith: f64, muon_energy_gev: f64) -> f64 {
        flux::differential_flux(
            cos_zenith,
            muon_energy_gev,
            &self.config.zenith,
            &self.config.flux,
        )
    }

    /// 穿过配置的覆盖层（默认 85 m）到达探测器所需的最小地表能量 (GeV)
    pub fn minimum_energy_for_depth(&self, cos_zenith: f64) -> f64 {
        self.minimum_energy_for_overburden(cos_zenith, self.config.overburden_m)
    }

    /// 穿过给定覆盖层所需的最小地表能量 (GeV)
    pub fn minimum_energy_for_overburden(&self, cos_zenith: f64, overburden_m: f64) -> f64 {
        self.energy_from_range(overburden_m / cos_zenith)
    }

    // ─────────────────────────────────────────────────────────────
    // 校验
    // ─────────────────────────────────────────────────────────────

    /// 在表节点及相邻节点几何中点上做能量→射程→能量往返
    pub fn round_trip_residuals(&self) -> Vec<RoundTripResidual> {
        let energies = self.table.energies_mev();
        let mut points = Vec::with_capacity(2 * energies.len());

        for (i, &e) in energies.iter().enumerate() {
            points.push((mev_to_gev(e), true));
            if let Some(&next) = energies.get(i + 1) {
                points.push((mev_to_gev((e * next).sqrt()), false));
            }
        }

        points
            .into_iter()
            .map(|(energy_gev, is_knot)| {
                let round_trip_gev = self.energy_from_range(self.range_from_energy(energy_gev));
                RoundTripResidual {
                    energy_gev,
                    round_trip_gev,
                    relative_error: (round_trip_gev - energy_gev).abs() / energy_gev,
                    is_knot,
                }
            })
            .collect()
    }

    fn check_domain(&self, quantity: &str, value: f64, spline: &LogLogSpline) {
        if self.config.domain_policy == DomainPolicy::Warn && !spline.contains(value) {
            let (min, max) = spline.domain();
            log::warn!(
                "{} = {:.6e} outside tabulated domain [{:.4e}, {:.4e}], using spline extrapolation",
                quantity,
                value,
                min,
                max
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> RangeEnergyModel {
        RangeEnergyModel::standard_rock().unwrap()
    }

    #[test]
    fn test_reproduces_table_knots() {
        let m = model();
        // 10 GeV -> 4933.8 g/cm², 100 GeV -> 41163 g/cm²
        let r10 = 4.9338e3 / 265.0;
        let r100 = 4.1163e4 / 265.0;
        assert!((m.range_from_energy(10.0) / r10 - 1.0).abs() < 1e-9);
        assert!((m.range_from_energy(100.0) / r100 - 1.0).abs() < 1e-9);
        assert!(m.range_from_energy(100.0) > m.range_from_energy(10.0));
    }

    #[test]
    fn test_round_trip_within_table() {
        let m = model();
        for residual in m.round_trip_residuals() {
            assert!(
                residual.relative_error < 1e-3,
                "E = {} GeV: round trip {}",
                residual.energy_gev,
                residual.round_trip_gev
            );
        }
    }

    #[test]
    fn test_propagate_stops_beyond_range() {
        let m = model();
        let full = m.range_from_energy(100.0);
        assert_eq!(m.propagate(100.0, full + 1.0), 0.0);
        assert_eq!(m.propagate(100.0, full), 0.0);
        assert!(m.propagate(100.0, full - 1.0) > 0.0);
    }

    #[test]
    fn test_propagate_known_value() {
        // 10 GeV μ 子穿过 10 m 标准岩石剩余约 4.38 GeV
        let m = model();
        let residual = m.propagate(10.0, 10.0);
        assert!((residual - 4.3786).abs() < 0.01, "got {residual}");
    }

    #[test]
    fn test_slant_reduces_to_vertical() {
        let m = model();
        for (e, d) in [(10.0, 5.0), (100.0, 85.0), (1000.0, 300.0)] {
            let vertical = m.propagate(e, d);
            let slant = m.propagate_slant(e, d, 1.0).unwrap();
            assert!((vertical - slant).abs() <= 1e-12 * vertical.max(1.0));
        }
    }

    #[test]
    fn test_slant_loses_more_energy() {
        let m = model();
        let vertical = m.propagate(1000.0, 85.0);
        let slant = m.propagate_slant(1000.0, 85.0, 0.5).unwrap();
        assert!(slant < vertical);
    }

    #[test]
    fn test_invalid_angle() {
        let m = model();
        for cos in [0.0, -0.3, 1.5, f64::NAN] {
            assert!(matches!(
                m.propagate_slant(100.0, 10.0, cos),
                Err(MuRangeError::InvalidAngle { .. })
            ));
            assert_eq!(m.propagate_slant_or_stopped(100.0, 10.0, cos), 0.0);
        }
    }

    #[test]
    fn test_minimum_energy_for_depth() {
        let m = model();
        let vertical = m.minimum_energy_for_depth(1.0);
        assert!((vertical - 51.46).abs() < 0.1, "got {vertical}");
        // 斜穿路径更长，阈值更高
        assert!(m.minimum_energy_for_depth(0.5) > vertical);
        assert!(
            (m.minimum_energy_for_overburden(1.0, 85.0) - vertical).abs() < 1e-12,
            "default overburden is 85 m"
        );
        // 刚好达到阈值的 μ 子在 85 m 处停止
        assert!(m.propagate(vertical * 0.999, 85.0) == 0.0);
        assert!(m.propagate(vertical * 1.001, 85.0) > 0.0);
    }

    #[test]
    fn test_flux_matches_free_function() {
        let m = model();
        assert_eq!(
            m.differential_flux(0.7, 50.0),
            flux::differential_flux(0.7, 50.0, &m.config().zenith, &m.config().flux)
        );
        assert!((m.corrected_cos_zenith(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_checked_conversions() {
        let m = model();
        let (e_min, e_max) = m.energy_domain_gev();
        assert!((e_min - 0.01).abs() < 1e-12);
        assert!((e_max - 1e4).abs() < 1e-9);

        assert!(m.checked_range_from_energy(10.0).is_ok());
        assert!(matches!(
            m.checked_range_from_energy(1e5),
            Err(MuRangeError::OutOfDomain { .. })
        ));
        assert!(matches!(
            m.checked_range_from_energy(-1.0),
            Err(MuRangeError::InvalidEnergy(_))
        ));

        let (r_min, r_max) = m.range_domain_m();
        assert!(m.checked_energy_from_range((r_min * r_max).sqrt()).is_ok());
        assert!(m.checked_energy_from_range(r_max * 2.0).is_err());
    }

    #[test]
    fn test_warn_policy_keeps_numeric_result() {
        let silent = model();
        let warn = model().with_domain_policy(DomainPolicy::Warn);
        assert_eq!(warn.config().domain_policy, DomainPolicy::Warn);
        for e in [1e-3, 5.0, 5e4] {
            assert_eq!(silent.range_from_energy(e), warn.range_from_energy(e));
        }
    }

    #[test]
    fn test_rock_density_scales_range() {
        let config = ModelConfig {
            rock_density: 5.3,
            ..ModelConfig::default()
        };
        let dense =
            RangeEnergyModel::new(parsers::table::builtin_table().unwrap(), config).unwrap();
        let standard = model();
        let ratio = standard.range_from_energy(100.0) / dense.range_from_energy(100.0);
        assert!((ratio - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_model_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RangeEnergyModel>();
    }
}
