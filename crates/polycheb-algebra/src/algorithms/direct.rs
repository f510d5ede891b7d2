//! Direct multiplication: O(N²) accumulation over coefficient pairs.

use polycheb_scalar::Scalar;

use crate::product::ProductTable;

/// Multiplies two coefficient vectors of the table's shape, truncating the
/// product to the shape's degree.
pub(crate) fn direct_product<T: Scalar>(table: &ProductTable, a: &[T], b: &[T]) -> Vec<T> {
    let n = table.len();
    debug_assert_eq!(a.len(), n);
    debug_assert_eq!(b.len(), n);

    let half = T::from_f64(0.5);
    let mut weights = vec![T::one()];
    let mut result = vec![T::zero(); n];

    for (i, ai) in a.iter().enumerate() {
        if ai.is_zero() {
            continue;
        }
        for (j, bj) in b.iter().enumerate() {
            if bj.is_zero() {
                continue;
            }

            let (terms, halvings) = table.pair(i, j);
            let h = usize::from(halvings);
            while weights.len() <= h {
                let next = weights[weights.len() - 1].clone() * half.clone();
                weights.push(next);
            }

            let w = ai.clone() * bj.clone() * weights[h].clone();
            for &k in terms {
                let k = k as usize;
                result[k] = result[k].clone() + w.clone();
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use polycheb_index::MultiIndexTable;

    #[test]
    fn test_t1_times_t2() {
        let index = MultiIndexTable::new(1, 4).unwrap();
        let table = ProductTable::new(&index);

        let t1 = [0.0, 1.0, 0.0, 0.0, 0.0];
        let t2 = [0.0, 0.0, 1.0, 0.0, 0.0];

        // T1 · T2 = ½ (T3 + T1)
        assert_eq!(direct_product(&table, &t1, &t2), vec![0.0, 0.5, 0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_square_of_linear() {
        // (1 + x)² = 1 + 2x + x² = 1.5 + 2 T1 + 0.5 T2
        let index = MultiIndexTable::new(1, 2).unwrap();
        let table = ProductTable::new(&index);

        let p = [1.0, 1.0, 0.0];
        assert_eq!(direct_product(&table, &p, &p), vec![1.5, 2.0, 0.5]);
    }

    #[test]
    fn test_bivariate() {
        // (x + y)(x - y) = x² - y² = ½ T2(x) - ½ T2(y)
        let index = MultiIndexTable::new(2, 2).unwrap();
        let table = ProductTable::new(&index);

        let sum = [0.0, 1.0, 1.0, 0.0, 0.0, 0.0];
        let diff = [0.0, 1.0, -1.0, 0.0, 0.0, 0.0];
        assert_eq!(
            direct_product(&table, &sum, &diff),
            vec![0.0, 0.0, 0.0, 0.5, 0.0, -0.5]
        );
    }
}
