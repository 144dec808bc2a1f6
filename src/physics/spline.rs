//! # 自然三次样条
//!
//! 在节点上插值、端点二阶导数为零的分段三次多项式。
//! `LogLogSpline` 在 (ln x, ln y) 空间中拟合，适合幂律型的射程-能量关系。
//!
//! ## 算法
//! 1. 由节点间距构造二阶导数 M 的三对角方程组
//! 2. Thomas 算法求解（M₀ = Mₙ₋₁ = 0）
//! 3. 二分查找所在区间，按 Horner 形式求值
//!
//! 节点范围外使用端点区间的三次多项式直接外推，不做截断。
//!
//! ## 依赖关系
//! - 被 `physics/model.rs` 使用
//! - 无外部模块依赖

use crate::error::{MuRangeError, Result};

/// 自然三次样条
#[derive(Debug, Clone)]
pub struct NaturalCubicSpline {
    /// 节点横坐标（严格递增）
    x: Vec<f64>,
    /// 节点纵坐标
    y: Vec<f64>,
    /// 节点处的二阶导数
    m: Vec<f64>,
}

impl NaturalCubicSpline {
    /// 拟合样条
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(MuRangeError::MalformedTable(format!(
                "abscissa and ordinate lengths differ ({} vs {})",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(MuRangeError::MalformedTable(format!(
                "a cubic spline needs at least 2 knots, got {}",
                x.len()
            )));
        }
        if x.windows(2).any(|w| !(w[1] > w[0])) {
            return Err(MuRangeError::MalformedTable(
                "spline knots must be strictly increasing".to_string(),
            ));
        }
        if x.iter().chain(y).any(|v| !v.is_finite()) {
            return Err(MuRangeError::MalformedTable(
                "spline knots must be finite".to_string(),
            ));
        }

        let m = second_derivatives(x, y);

        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            m,
        })
    }

    /// 在 t 处求值
    pub fn eval(&self, t: f64) -> f64 {
        let i = self.segment(t);
        let h = self.x[i + 1] - self.x[i];
        let dx = t - self.x[i];

        let (y0, y1) = (self.y[i], self.y[i + 1]);
        let (m0, m1) = (self.m[i], self.m[i + 1]);

        // 区间 i 上的 y0 + b·dx + c·dx² + d·dx³
        let b = (y1 - y0) / h - h * (2.0 * m0 + m1) / 6.0;
        let c = m0 / 2.0;
        let d = (m1 - m0) / (6.0 * h);

        y0 + dx * (b + dx * (c + dx * d))
    }

    /// 节点范围
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// 节点处的二阶导数
    pub fn second_derivatives(&self) -> &[f64] {
        &self.m
    }

    /// 所在区间下标，范围外取端点区间
    fn segment(&self, t: f64) -> usize {
        let n = self.x.len();
        let hi = self.x.partition_point(|&v| v <= t);
        hi.clamp(1, n - 1) - 1
    }
}

/// 求解自然边界条件下的二阶导数
fn second_derivatives(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    if n < 3 {
        return vec![0.0; n];
    }

    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();

    let mut sub = vec![0.0; n];
    let mut diag = vec![1.0; n];
    let mut sup = vec![0.0; n];
    let mut rhs = vec![0.0; n];

    for i in 1..n - 1 {
        sub[i] = h[i - 1];
        diag[i] = 2.0 * (h[i - 1] + h[i]);
        sup[i] = h[i];
        rhs[i] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
    }

    thomas_solve(&sub, &diag, &sup, &rhs)
}

/// Thomas 算法求解三对角方程组 Ax = d
///
/// - `a`: 下对角线（a[0] 不使用）
/// - `b`: 主对角线
/// - `c`: 上对角线（c[n-1] 不使用）
/// - `d`: 右端项
///
/// 样条方程组严格对角占优，主元不会为零。
pub fn thomas_solve(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> Vec<f64> {
    let n = d.len();
    if n == 0 {
        return Vec::new();
    }

    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    c_prime[0] = c[0] / b[0];
    d_prime[0] = d[0] / b[0];

    for i in 1..n {
        let den = b[i] - a[i] * c_prime[i - 1];
        if i < n - 1 {
            c_prime[i] = c[i] / den;
        }
        d_prime[i] = (d[i] - a[i] * d_prime[i - 1]) / den;
    }

    let mut x = vec![0.0; n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }

    x
}

/// 对数-对数空间中的自然三次样条
#[derive(Debug, Clone)]
pub struct LogLogSpline {
    inner: NaturalCubicSpline,
    /// 原始 (非对数) 节点范围
    domain: (f64, f64),
}

impl LogLogSpline {
    /// 拟合 ln(y) 对 ln(x) 的样条，要求 x, y 全部为正
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.iter().chain(y).any(|&v| !(v > 0.0)) {
            return Err(MuRangeError::MalformedTable(
                "log-log spline needs strictly positive values".to_string(),
            ));
        }

        let ln_x: Vec<f64> = x.iter().map(|v| v.ln()).collect();
        let ln_y: Vec<f64> = y.iter().map(|v| v.ln()).collect();
        let inner = NaturalCubicSpline::fit(&ln_x, &ln_y)?;

        Ok(Self {
            inner,
            domain: (x[0], x[x.len() - 1]),
        })
    }

    /// 在 x 处求 ln(y)
    pub fn eval_ln(&self, x: f64) -> f64 {
        self.inner.eval(x.ln())
    }

    /// 在 x 处求 y
    pub fn eval(&self, x: f64) -> f64 {
        self.eval_ln(x).exp()
    }

    /// 原始节点范围
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// x 是否落在节点范围内
    pub fn contains(&self, x: f64) -> bool {
        x >= self.domain.0 && x <= self.domain.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thomas_simple_tridiag() {
        // [ 2 -1  0] [x0]   [1]
        // [-1  2 -1] [x1] = [0]
        // [ 0 -1  2] [x2]   [1]
        let a = vec![0.0, -1.0, -1.0];
        let b = vec![2.0, 2.0, 2.0];
        let c = vec![-1.0, -1.0, 0.0];
        let d = vec![1.0, 0.0, 1.0];
        let x = thomas_solve(&a, &b, &c, &d);
        for xi in x {
            assert!((xi - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_spline_at_knot_points() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![1.0, 4.0, 9.0, 16.0, 25.0];
        let spline = NaturalCubicSpline::fit(&x, &y).unwrap();

        for (&xi, &yi) in x.iter().zip(y.iter()) {
            assert!(
                (spline.eval(xi) - yi).abs() < 1e-10,
                "at x={xi}: got {} expected {yi}",
                spline.eval(xi)
            );
        }
    }

    #[test]
    fn test_natural_boundary() {
        let x = vec![0.0, 1.0, 2.5, 3.0, 4.0];
        let y = vec![0.0, 1.0, -1.0, 2.0, 0.5];
        let spline = NaturalCubicSpline::fit(&x, &y).unwrap();
        let m = spline.second_derivatives();
        assert_eq!(m[0], 0.0);
        assert_eq!(m[m.len() - 1], 0.0);
    }

    #[test]
    fn test_linear_data_is_exact() {
        // 线性数据的二阶导数为零，插值和外推都应精确
        let x = vec![0.0, 1.0, 3.0, 4.0];
        let y = vec![1.0, 3.0, 7.0, 9.0];
        let spline = NaturalCubicSpline::fit(&x, &y).unwrap();
        for t in [-2.0, 0.5, 2.0, 3.7, 10.0] {
            assert!((spline.eval(t) - (2.0 * t + 1.0)).abs() < 1e-10);
        }
    }

    #[test]
    fn test_two_knots() {
        let spline = NaturalCubicSpline::fit(&[0.0, 2.0], &[1.0, 5.0]).unwrap();
        assert!((spline.eval(1.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_knots() {
        assert!(NaturalCubicSpline::fit(&[1.0], &[1.0]).is_err());
        assert!(NaturalCubicSpline::fit(&[1.0, 1.0], &[1.0, 2.0]).is_err());
        assert!(NaturalCubicSpline::fit(&[1.0, 2.0], &[1.0]).is_err());
        assert!(LogLogSpline::fit(&[0.0, 1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_loglog_power_law() {
        // y = 3 x² 在对数空间中是直线
        let x = vec![1.0, 10.0, 100.0, 1000.0];
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v * v).collect();
        let spline = LogLogSpline::fit(&x, &y).unwrap();
        for t in [2.0, 50.0, 700.0] {
            let expected = 3.0 * t * t;
            assert!(((spline.eval(t) - expected) / expected).abs() < 1e-10);
        }
        assert!(spline.contains(50.0));
        assert!(!spline.contains(0.5));
        assert_eq!(spline.domain(), (1.0, 1000.0));
    }
}
