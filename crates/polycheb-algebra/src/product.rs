//! Chebyshev product table.
//!
//! In one variable `T_a · T_b = ½ (T_{a+b} + T_{|a-b|})`, collapsing to the
//! single term `T_{a+b}` when either exponent is zero. A multivariate basis
//! function is a tensor product, so the product of two of them expands into
//! `2^m` terms with common weight `2^-m`, where `m` counts the variables in
//! which both exponents are nonzero. Terms whose total degree exceeds the
//! truncation degree are dropped.

use polycheb_index::MultiIndexTable;

/// Precomputed decomposition of every basis-function product of a shape.
///
/// Pairs are stored once (`i <= j`) in compressed rows.
#[derive(Debug)]
pub struct ProductTable {
    len: usize,
    /// Row `slot` spans `terms[offsets[slot]..offsets[slot + 1]]`.
    offsets: Vec<usize>,
    terms: Vec<u32>,
    /// Number of halvings applied to each pair.
    halvings: Vec<u8>,
}

impl ProductTable {
    /// Builds the table for the shape described by `index`. O(N²) pairs.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn new(index: &MultiIndexTable) -> Self {
        let len = index.len();
        let nvar = index.nvar();
        let degree = index.degree();
        let pairs = len * (len + 1) / 2;

        let mut offsets = Vec::with_capacity(pairs + 1);
        let mut terms = Vec::new();
        let mut halvings = Vec::with_capacity(pairs);
        let mut split = Vec::with_capacity(nvar);
        let mut tuple = vec![0u16; nvar];

        offsets.push(0);
        for j in 0..len {
            let b = index.exponents(j);
            for i in 0..=j {
                let a = index.exponents(i);

                split.clear();
                split.extend((0..nvar).filter(|&v| a[v] != 0 && b[v] != 0));
                debug_assert!(split.len() < 64);

                for mask in 0u64..(1u64 << split.len()) {
                    let mut total = 0usize;
                    let mut bit = 0;
                    for v in 0..nvar {
                        let e = if bit < split.len() && split[bit] == v {
                            let low = (mask >> bit) & 1 == 1;
                            bit += 1;
                            if low {
                                a[v].abs_diff(b[v])
                            } else {
                                a[v] + b[v]
                            }
                        } else {
                            a[v] + b[v]
                        };
                        tuple[v] = e;
                        total += usize::from(e);
                    }

                    if total <= degree {
                        if let Some(k) = index.index_of(&tuple) {
                            terms.push(k as u32);
                        }
                    }
                }

                offsets.push(terms.len());
                halvings.push(split.len() as u8);
            }
        }

        tracing::debug!(
            nvar,
            degree,
            pairs,
            terms = terms.len(),
            "built Chebyshev product table"
        );

        Self {
            len,
            offsets,
            terms,
            halvings,
        }
    }

    /// Returns the result indices of `T_i · T_j` and the number of halvings
    /// of their common weight. Symmetric in `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn pair(&self, i: usize, j: usize) -> (&[u32], u8) {
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        assert!(hi < self.len, "basis index {hi} out of range");
        let slot = hi * (hi + 1) / 2 + lo;
        (
            &self.terms[self.offsets[slot]..self.offsets[slot + 1]],
            self.halvings[slot],
        )
    }

    /// Returns the number of basis functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a shape has at least the constant basis function.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total number of stored terms.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(terms: &[u32]) -> Vec<u32> {
        let mut v = terms.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_univariate_identity() {
        let index = MultiIndexTable::new(1, 4).unwrap();
        let table = ProductTable::new(&index);

        // T1 · T2 = ½ (T3 + T1)
        let (terms, halvings) = table.pair(1, 2);
        assert_eq!(sorted(terms), vec![1, 3]);
        assert_eq!(halvings, 1);

        // T2 · T2 = ½ (T4 + T0)
        let (terms, halvings) = table.pair(2, 2);
        assert_eq!(sorted(terms), vec![0, 4]);
        assert_eq!(halvings, 1);
    }

    #[test]
    fn test_constant_is_identity() {
        let index = MultiIndexTable::new(2, 3).unwrap();
        let table = ProductTable::new(&index);

        for k in 0..index.len() {
            let (terms, halvings) = table.pair(0, k);
            assert_eq!(terms, &[k as u32]);
            assert_eq!(halvings, 0);
        }
    }

    #[test]
    fn test_truncation_drops_high_terms() {
        let index = MultiIndexTable::new(1, 4).unwrap();
        let table = ProductTable::new(&index);

        // T2 · T3 = ½ (T5 + T1), T5 is beyond degree 4
        let (terms, halvings) = table.pair(3, 2);
        assert_eq!(terms, &[1]);
        assert_eq!(halvings, 1);
    }

    #[test]
    fn test_tensor_products() {
        let index = MultiIndexTable::new(2, 2).unwrap();
        let table = ProductTable::new(&index);

        // x1 · x2 = T1(x1) T1(x2), no halving
        let (terms, halvings) = table.pair(1, 2);
        assert_eq!(terms, &[index.index_of(&[1, 1]).unwrap() as u32]);
        assert_eq!(halvings, 0);

        // x1 · x1 = ½ (T2(x1) + 1)
        let (terms, halvings) = table.pair(1, 1);
        assert_eq!(
            sorted(terms),
            vec![0, index.index_of(&[2, 0]).unwrap() as u32]
        );
        assert_eq!(halvings, 1);
    }

    #[test]
    fn test_symmetric_lookup() {
        let index = MultiIndexTable::new(3, 3).unwrap();
        let table = ProductTable::new(&index);

        for i in 0..index.len() {
            for j in 0..index.len() {
                assert_eq!(table.pair(i, j), table.pair(j, i));
            }
        }
    }
}
