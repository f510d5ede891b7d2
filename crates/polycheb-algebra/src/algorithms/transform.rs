//! Transform-domain multiplication.
//!
//! Both operands are evaluated on a tensor grid of Chebyshev–Gauss–Lobatto
//! nodes with `2·degree + 1` points per variable, which interpolates the
//! untruncated product exactly. The pointwise product is transformed back
//! axis by axis and only the coefficients of total degree `<= degree` are
//! kept, which reproduces the truncated product of the direct path.

use polycheb_index::MultiIndexTable;
use polycheb_scalar::dct::{coefficients_to_values, values_to_coefficients};
use polycheb_scalar::Scalar;

/// Grids larger than this fall back to direct multiplication.
pub const MAX_GRID_POINTS: usize = 1 << 24;

/// Tensor grid layout for one shape.
#[derive(Debug)]
pub(crate) struct TransformGrid {
    nvar: usize,
    /// Nodes per axis.
    points: usize,
    /// Total grid points, `points^nvar`.
    size: usize,
    /// Tensor offset of every coefficient of the shape.
    offsets: Vec<usize>,
}

impl TransformGrid {
    /// Builds the grid for `index`, or `None` if it exceeds
    /// [`MAX_GRID_POINTS`].
    pub(crate) fn new(index: &MultiIndexTable) -> Option<Self> {
        let nvar = index.nvar();
        let points = 2 * index.degree() + 1;
        let size = u32::try_from(nvar)
            .ok()
            .and_then(|n| points.checked_pow(n))
            .filter(|&size| size <= MAX_GRID_POINTS);

        let Some(size) = size else {
            tracing::warn!(
                nvar,
                degree = index.degree(),
                "transform grid exceeds {MAX_GRID_POINTS} points, using direct multiplication"
            );
            return None;
        };

        let offsets = index
            .iter()
            .map(|tuple| {
                let mut offset = 0;
                let mut stride = 1;
                for &e in tuple {
                    offset += usize::from(e) * stride;
                    stride *= points;
                }
                offset
            })
            .collect();

        tracing::debug!(nvar, degree = index.degree(), points, size, "built transform grid");

        Some(Self {
            nvar,
            points,
            size,
            offsets,
        })
    }

    /// Scatters coefficients onto the tensor and evaluates at every node.
    fn to_values<T: Scalar>(&self, coeffs: &[T]) -> Vec<T> {
        let mut data = vec![T::zero(); self.size];
        for (c, &offset) in coeffs.iter().zip(&self.offsets) {
            data[offset] = c.clone();
        }
        self.apply_axes(&mut data, coefficients_to_values::<T>);
        data
    }

    /// Transforms node values back and gathers the shape's coefficients.
    fn to_coefficients<T: Scalar>(&self, mut data: Vec<T>) -> Vec<T> {
        self.apply_axes(&mut data, values_to_coefficients::<T>);
        self.offsets.iter().map(|&o| data[o].clone()).collect()
    }

    /// Applies a one-dimensional transform along every axis in turn.
    fn apply_axes<T: Scalar>(&self, data: &mut [T], transform: impl Fn(&[T]) -> Vec<T>) {
        let n = self.points;
        let mut line = Vec::with_capacity(n);
        let mut stride = 1;

        for _ in 0..self.nvar {
            let block = stride * n;
            for outer in (0..self.size).step_by(block) {
                for inner in 0..stride {
                    let base = outer + inner;
                    line.clear();
                    line.extend((0..n).map(|j| data[base + j * stride].clone()));
                    for (j, value) in transform(&line).into_iter().enumerate() {
                        data[base + j * stride] = value;
                    }
                }
            }
            stride = block;
        }
    }
}

/// Multiplies two coefficient vectors on the grid's shape.
pub(crate) fn transform_product<T: Scalar>(grid: &TransformGrid, a: &[T], b: &[T]) -> Vec<T> {
    let values_a = grid.to_values(a);
    let values_b = grid.to_values(b);

    let product = values_a
        .into_iter()
        .zip(values_b)
        .map(|(x, y)| x * y)
        .collect();

    grid.to_coefficients(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_t1_times_t2() {
        let index = MultiIndexTable::new(1, 4).unwrap();
        let grid = TransformGrid::new(&index).unwrap();

        let t1 = [0.0, 1.0, 0.0, 0.0, 0.0];
        let t2 = [0.0, 0.0, 1.0, 0.0, 0.0];
        let product = transform_product(&grid, &t1, &t2);

        let expected = [0.0, 0.5, 0.0, 0.5, 0.0];
        for (p, e) in product.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(p, e, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_bivariate_truncation() {
        // (x + y)² = x² + 2xy + y² = 1 + ½ T2(x) + 2 T1(x)T1(y) + ½ T2(y),
        // with every degree-2 term dropped at degree 1
        let index = MultiIndexTable::new(2, 1).unwrap();
        let grid = TransformGrid::new(&index).unwrap();

        let p = [0.0, 1.0, 1.0];
        let product = transform_product(&grid, &p, &p);

        assert_abs_diff_eq!(product[0], 1.0, epsilon = 1e-14);
        assert_abs_diff_eq!(product[1], 0.0, epsilon = 1e-14);
        assert_abs_diff_eq!(product[2], 0.0, epsilon = 1e-14);
    }

    #[test]
    fn test_constant_shape() {
        let index = MultiIndexTable::new(3, 0).unwrap();
        let grid = TransformGrid::new(&index).unwrap();

        assert_eq!(transform_product(&grid, &[3.0], &[-2.0]), vec![-6.0]);
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        let index = MultiIndexTable::new(8, 10).unwrap();
        assert!(TransformGrid::new(&index).is_none());
    }
}
