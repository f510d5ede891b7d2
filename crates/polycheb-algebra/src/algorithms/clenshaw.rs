//! The Clenshaw recurrence.
//!
//! For a series `Σ c_k T_k(x)` the backward recurrence
//!
//! ```text
//! b_k = c_k + 2x·b_{k+1} - b_{k+2}
//! f   = c_0 + x·b_1 - b_2
//! ```
//!
//! only needs additions, subtractions and multiplication by `x`. Keeping the
//! value type generic lets the same code evaluate at a point (scalars) and
//! substitute an expansion for `x` (composition).

use std::ops::{Add, Sub};
use std::sync::Arc;

use polycheb_index::MultiIndexTable;

use crate::error::Result;

/// Sums a univariate Chebyshev series.
///
/// `times_x` multiplies an accumulator by the argument. An empty series sums
/// to `zero`.
pub(crate) fn clenshaw<V, F>(coeffs: Vec<V>, zero: &V, mut times_x: F) -> V
where
    V: Clone + Add<Output = V> + Sub<Output = V>,
    F: FnMut(&V) -> V,
{
    let mut rest = coeffs.into_iter();
    let Some(c0) = rest.next() else {
        return zero.clone();
    };
    let Some(top) = rest.next_back() else {
        return c0;
    };

    let mut b1 = top;
    let mut b2 = zero.clone();
    for ck in rest.rev() {
        let tx = times_x(&b1);
        let bk = ck + tx.clone() + tx - b2;
        b2 = std::mem::replace(&mut b1, bk);
    }

    c0 + times_x(&b1) - b2
}

/// Sums a multivariate Chebyshev series laid out by `index`.
///
/// The last variable is reduced first: coefficients sharing the same prefix
/// form a univariate series in that variable, whose sums are coefficients
/// of the `(nvar - 1, degree)` layout. `times(v, b)` multiplies `b` by
/// variable `v` (zero-based).
pub(crate) fn nested_clenshaw<V, F>(
    index: &Arc<MultiIndexTable>,
    coeffs: Vec<V>,
    zero: &V,
    mut times: F,
) -> Result<V>
where
    V: Clone + Add<Output = V> + Sub<Output = V>,
    F: FnMut(usize, &V) -> V,
{
    debug_assert_eq!(coeffs.len(), index.len());

    let mut table = Arc::clone(index);
    let mut current = coeffs;

    while table.nvar() > 1 {
        let var = table.nvar() - 1;
        let sub = MultiIndexTable::shared(var, table.degree())?;

        let mut groups: Vec<Vec<V>> = (0..sub.len())
            .map(|p| Vec::with_capacity(sub.remaining_degree(p) + 1))
            .collect();

        // Within a prefix the last exponent grows with the total degree,
        // so table order already sorts each group.
        for (i, c) in current.into_iter().enumerate() {
            if let Some(p) = table.prefix_index(i) {
                debug_assert_eq!(groups[p].len(), table.last_exponent(i));
                groups[p].push(c);
            }
        }

        current = groups
            .into_iter()
            .map(|group| clenshaw(group, zero, |b| times(var, b)))
            .collect();
        table = sub;
    }

    Ok(clenshaw(current, zero, |b| times(0, b)))
}
