use crate::models::Point;
use crate::{Error, Result};

/// Edge cost between two coordinates.
pub trait Metric {
    fn distance(&self, a: Point, b: Point) -> f64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Euclidean;

impl Metric for Euclidean {
    #[inline]
    fn distance(&self, a: Point, b: Point) -> f64 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl Metric for Manhattan {
    #[inline]
    fn distance(&self, a: Point, b: Point) -> f64 {
        (a.x - b.x).abs() + (a.y - b.y).abs()
    }
}

/// Symmetric, non-negative n x n cost table, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    // Flattened for cache locality
    data: Vec<f64>,
}

impl DistanceMatrix {
    pub fn from_points(points: &[Point]) -> Result<Self> {
        Self::from_points_with(points, &Euclidean)
    }

    pub fn from_points_with<M: Metric + ?Sized>(points: &[Point], metric: &M) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::invalid_input("at least one coordinate is required"));
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(Error::invalid_input(format!(
                "coordinate {index} is not finite"
            )));
        }

        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance(points[i], points[j]);
                if !d.is_finite() || d < 0.0 {
                    return Err(Error::invalid_input(format!(
                        "distance between {i} and {j} is {d}"
                    )));
                }
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Ok(Self { n, data })
    }

    /// Builds a matrix from explicit rows, rejecting anything that is not a
    /// square, finite, non-negative table with a zero diagonal that is
    /// symmetric within `tolerance`.
    pub fn from_rows(rows: &[Vec<f64>], tolerance: f64) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(Error::invalid_input("distance matrix is empty"));
        }
        if let Some(bad) = rows.iter().position(|row| row.len() != n) {
            return Err(Error::invalid_input(format!(
                "row {bad} has {} entries, expected {n}",
                rows[bad].len()
            )));
        }

        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            for (j, &d) in row.iter().enumerate() {
                if !d.is_finite() || d < 0.0 {
                    return Err(Error::invalid_input(format!(
                        "entry ({i}, {j}) is {d}; distances must be finite and non-negative"
                    )));
                }
                if i == j && d != 0.0 {
                    return Err(Error::invalid_input(format!(
                        "diagonal entry {i} is {d}, expected 0"
                    )));
                }
                data.push(d);
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (data[i * n + j], data[j * n + i]);
                if (a - b).abs() > tolerance {
                    return Err(Error::invalid_input(format!(
                        "matrix is asymmetric at ({i}, {j}): {a} vs {b}"
                    )));
                }
            }
        }

        Ok(Self { n, data })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Unchecked lookup; callers index with cities they already validated.
    #[inline(always)]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.n + to]
    }

    pub fn try_get(&self, from: usize, to: usize) -> Result<f64> {
        self.check_index(from)?;
        self.check_index(to)?;
        Ok(self.get(from, to))
    }

    pub fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.n {
            return Err(Error::IndexOutOfRange {
                index,
                cities: self.n,
            });
        }
        Ok(())
    }

    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.n..(from + 1) * self.n]
    }
}
