use aneurysm_types::Point3d;
use nalgebra::{DMatrix, DVector};

use crate::error::GeometryError;

/// `count` evenly spaced values over `[0, 1]`, both ends included.
pub fn linspace(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { 1.0 } else { i as f64 / last })
                .collect()
        }
    }
}

/// Interpolating cubic spline with not-a-knot end conditions.
///
/// Stored as knot values plus second derivatives at the knots. Two knots give
/// a line and three a single parabola. Evaluation outside the knot range
/// extends the end polynomials.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    knots: Vec<f64>,
    values: Vec<f64>,
    second: Vec<f64>,
}

impl CubicSpline {
    pub fn fit(knots: &[f64], values: &[f64]) -> Result<Self, GeometryError> {
        let n = knots.len();
        if n != values.len() {
            return Err(GeometryError::SampleMismatch {
                knots: n,
                values: values.len(),
            });
        }
        if n < 2 {
            return Err(GeometryError::TooFewKnots { provided: n });
        }
        if let Some(i) = (1..n).find(|&i| knots[i] <= knots[i - 1]) {
            return Err(GeometryError::NonIncreasingAbscissa { index: i });
        }

        let h: Vec<f64> = knots.windows(2).map(|w| w[1] - w[0]).collect();
        let slopes: Vec<f64> = (0..n - 1).map(|i| (values[i + 1] - values[i]) / h[i]).collect();

        let second = match n {
            2 => vec![0.0; 2],
            3 => vec![2.0 * (slopes[1] - slopes[0]) / (h[0] + h[1]); 3],
            _ => solve_not_a_knot(&h, &slopes)?,
        };

        Ok(Self {
            knots: knots.to_vec(),
            values: values.to_vec(),
            second,
        })
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let i = self.segment(x);
        let (x0, x1) = (self.knots[i], self.knots[i + 1]);
        let (y0, y1) = (self.values[i], self.values[i + 1]);
        let (m0, m1) = (self.second[i], self.second[i + 1]);
        let h = x1 - x0;
        let a = x1 - x;
        let b = x - x0;
        m0 * a * a * a / (6.0 * h)
            + m1 * b * b * b / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * a
            + (y1 / h - m1 * h / 6.0) * b
    }

    /// Segment whose polynomial covers `x`; end segments extend outward.
    fn segment(&self, x: f64) -> usize {
        let last = self.knots.len() - 2;
        self.knots.partition_point(|&k| k <= x).saturating_sub(1).min(last)
    }
}

/// Second derivatives for `n >= 4` knots.
///
/// Interior rows enforce C2 continuity; the first and last rows force the
/// third derivative to match across the second and second-to-last knots.
fn solve_not_a_knot(h: &[f64], slopes: &[f64]) -> Result<Vec<f64>, GeometryError> {
    let n = h.len() + 1;
    let mut a = DMatrix::<f64>::zeros(n, n);
    let mut rhs = DVector::<f64>::zeros(n);

    a[(0, 0)] = h[1];
    a[(0, 1)] = -(h[0] + h[1]);
    a[(0, 2)] = h[0];

    for i in 1..n - 1 {
        a[(i, i - 1)] = h[i - 1];
        a[(i, i)] = 2.0 * (h[i - 1] + h[i]);
        a[(i, i + 1)] = h[i];
        rhs[i] = 6.0 * (slopes[i] - slopes[i - 1]);
    }

    a[(n - 1, n - 3)] = h[n - 2];
    a[(n - 1, n - 2)] = -(h[n - 3] + h[n - 2]);
    a[(n - 1, n - 1)] = h[n - 3];

    let m = a.lu().solve(&rhs).ok_or(GeometryError::SingularSystem)?;
    Ok(m.iter().copied().collect())
}

/// A 3-D curve made of one cubic spline per axis over a shared parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineCurve {
    x: CubicSpline,
    y: CubicSpline,
    z: CubicSpline,
}

impl SplineCurve {
    /// Fit through `points` at uniform parameters `t = linspace(0, 1)`.
    pub fn through(points: &[Point3d]) -> Result<Self, GeometryError> {
        let t = linspace(points.len());
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        let zs: Vec<f64> = points.iter().map(|p| p.z).collect();
        Ok(Self {
            x: CubicSpline::fit(&t, &xs)?,
            y: CubicSpline::fit(&t, &ys)?,
            z: CubicSpline::fit(&t, &zs)?,
        })
    }

    pub fn point_at(&self, t: f64) -> Point3d {
        Point3d::new(self.x.evaluate(t), self.y.evaluate(t), self.z.evaluate(t))
    }

    /// `count` points at uniform parameters over `[0, 1]`.
    pub fn sample(&self, count: usize) -> Vec<Point3d> {
        linspace(count).into_iter().map(|t| self.point_at(t)).collect()
    }

    /// Arc length approximated by a polyline through `segments + 1` samples.
    pub fn arc_length(&self, segments: usize) -> f64 {
        self.sample(segments.max(1) + 1)
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linspace_endpoints() {
        assert_eq!(linspace(5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(1), vec![0.0]);
        assert!(linspace(0).is_empty());
    }

    #[test]
    fn spline_interpolates_knots() {
        let x = [0.0, 1.0, 2.5, 3.0, 4.0, 6.0];
        let y = [1.0, -2.0, 0.5, 4.0, 3.0, -1.0];
        let s = CubicSpline::fit(&x, &y).unwrap();
        for (xi, yi) in x.iter().zip(&y) {
            assert_abs_diff_eq!(s.evaluate(*xi), *yi, epsilon = 1e-10);
        }
    }

    #[test]
    fn spline_reproduces_cubic_exactly() {
        // Not-a-knot reproduces any cubic polynomial.
        let f = |x: f64| 0.5 * x * x * x - 2.0 * x * x + x - 3.0;
        let x = [0.0, 0.7, 1.5, 2.0, 3.1, 4.0];
        let y: Vec<f64> = x.iter().map(|&v| f(v)).collect();
        let s = CubicSpline::fit(&x, &y).unwrap();
        for q in [0.3, 1.1, 2.6, 3.5, 4.5, -0.5] {
            assert_abs_diff_eq!(s.evaluate(q), f(q), epsilon = 1e-8);
        }
    }

    #[test]
    fn three_knots_give_parabola() {
        let f = |x: f64| 3.0 * x * x - x + 2.0;
        let x = [0.0, 1.0, 3.0];
        let y: Vec<f64> = x.iter().map(|&v| f(v)).collect();
        let s = CubicSpline::fit(&x, &y).unwrap();
        for q in [0.5, 2.0, 2.9, 4.0] {
            assert_abs_diff_eq!(s.evaluate(q), f(q), epsilon = 1e-10);
        }
    }

    #[test]
    fn two_knots_give_line() {
        let s = CubicSpline::fit(&[0.0, 2.0], &[1.0, 5.0]).unwrap();
        assert_abs_diff_eq!(s.evaluate(1.0), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.evaluate(3.0), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_non_increasing_knots() {
        let err = CubicSpline::fit(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(err, GeometryError::NonIncreasingAbscissa { index: 2 });
    }

    #[test]
    fn rejects_single_knot() {
        let err = CubicSpline::fit(&[0.0], &[1.0]).unwrap_err();
        assert_eq!(err, GeometryError::TooFewKnots { provided: 1 });
    }

    #[test]
    fn straight_curve_arc_length() {
        let points: Vec<Point3d> = (0..5).map(|i| Point3d::new(0.0, 0.0, i as f64 * 10.0)).collect();
        let curve = SplineCurve::through(&points).unwrap();
        assert_abs_diff_eq!(curve.arc_length(64), 40.0, epsilon = 1e-9);
    }
}
