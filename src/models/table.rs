//! # 阻止本领表数据模型
//!
//! 标准岩石中 μ 子的 (动能 MeV, CSDA 射程 g/cm²) 数据表。
//! 构造时完成全部校验，之后不可变。
//!
//! ## 依赖关系
//! - 被 `parsers/table.rs` 构造
//! - 被 `physics/model.rs` 用于样条拟合

use crate::error::{MuRangeError, Result};

use serde::{Deserialize, Serialize};

/// 数据表中的一行
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// 动能 (MeV)
    pub kinetic_energy_mev: f64,
    /// CSDA 射程 (g/cm²)
    pub csda_range_gcm2: f64,
}

/// 标准岩石阻止本领表
#[derive(Debug, Clone)]
pub struct StoppingPowerTable {
    energies_mev: Vec<f64>,
    ranges_gcm2: Vec<f64>,
}

impl StoppingPowerTable {
    /// 从数据行构造并校验
    ///
    /// 要求至少两行，能量与射程都严格递增且为有限正数
    /// （对数空间拟合和反函数样条都依赖这一点）。
    pub fn from_rows(rows: &[TableRow]) -> Result<Self> {
        if rows.len() < 2 {
            return Err(MuRangeError::MalformedTable(format!(
                "need at least 2 rows, got {}",
                rows.len()
            )));
        }

        for (i, row) in rows.iter().enumerate() {
            let valid = |v: f64| v.is_finite() && v > 0.0;
            if !valid(row.kinetic_energy_mev) || !valid(row.csda_range_gcm2) {
                return Err(MuRangeError::MalformedTable(format!(
                    "row {}: values must be finite and positive (E = {}, R = {})",
                    i + 1,
                    row.kinetic_energy_mev,
                    row.csda_range_gcm2
                )));
            }
        }

        for (i, pair) in rows.windows(2).enumerate() {
            if pair[1].kinetic_energy_mev <= pair[0].kinetic_energy_mev {
                return Err(MuRangeError::MalformedTable(format!(
                    "energies not strictly increasing at row {} ({} -> {} MeV)",
                    i + 2,
                    pair[0].kinetic_energy_mev,
                    pair[1].kinetic_energy_mev
                )));
            }
            if pair[1].csda_range_gcm2 <= pair[0].csda_range_gcm2 {
                return Err(MuRangeError::MalformedTable(format!(
                    "ranges not strictly increasing at row {} ({} -> {} g/cm²)",
                    i + 2,
                    pair[0].csda_range_gcm2,
                    pair[1].csda_range_gcm2
                )));
            }
        }

        Ok(Self {
            energies_mev: rows.iter().map(|r| r.kinetic_energy_mev).collect(),
            ranges_gcm2: rows.iter().map(|r| r.csda_range_gcm2).collect(),
        })
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.energies_mev.len()
    }

    /// 校验保证至少两行
    pub fn is_empty(&self) -> bool {
        self.energies_mev.is_empty()
    }

    /// 能量列 (MeV)
    pub fn energies_mev(&self) -> &[f64] {
        &self.energies_mev
    }

    /// 射程列 (g/cm²)
    pub fn ranges_gcm2(&self) -> &[f64] {
        &self.ranges_gcm2
    }

    /// 能量定义域 (MeV)
    pub fn energy_domain_mev(&self) -> (f64, f64) {
        (self.energies_mev[0], self.energies_mev[self.len() - 1])
    }

    /// 射程定义域 (g/cm²)
    pub fn range_domain_gcm2(&self) -> (f64, f64) {
        (self.ranges_gcm2[0], self.ranges_gcm2[self.len() - 1])
    }

    /// 逐行迭代
    pub fn rows(&self) -> impl Iterator<Item = TableRow> + '_ {
        self.energies_mev
            .iter()
            .zip(&self.ranges_gcm2)
            .map(|(&e, &r)| TableRow {
                kinetic_energy_mev: e,
                csda_range_gcm2: r,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(e: f64, r: f64) -> TableRow {
        TableRow {
            kinetic_energy_mev: e,
            csda_range_gcm2: r,
        }
    }

    #[test]
    fn test_valid_table() {
        let table =
            StoppingPowerTable::from_rows(&[row(10.0, 0.85), row(100.0, 37.0), row(1e3, 554.0)])
                .unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.energy_domain_mev(), (10.0, 1e3));
        assert_eq!(table.range_domain_gcm2(), (0.85, 554.0));
        assert_eq!(table.rows().nth(1), Some(row(100.0, 37.0)));
    }

    #[test]
    fn test_too_short_table() {
        let err = StoppingPowerTable::from_rows(&[row(10.0, 0.85)]).unwrap_err();
        assert!(matches!(err, MuRangeError::MalformedTable(_)));
    }

    #[test]
    fn test_non_monotonic_energy() {
        let err = StoppingPowerTable::from_rows(&[row(10.0, 0.85), row(10.0, 1.0)]).unwrap_err();
        assert!(err.to_string().contains("energies not strictly increasing"));
    }

    #[test]
    fn test_non_monotonic_range() {
        let err =
            StoppingPowerTable::from_rows(&[row(10.0, 2.0), row(20.0, 1.0)]).unwrap_err();
        assert!(err.to_string().contains("ranges not strictly increasing"));
    }

    #[test]
    fn test_non_positive_values() {
        assert!(StoppingPowerTable::from_rows(&[row(0.0, 1.0), row(1.0, 2.0)]).is_err());
        assert!(StoppingPowerTable::from_rows(&[row(1.0, f64::NAN), row(2.0, 2.0)]).is_err());
    }
}
