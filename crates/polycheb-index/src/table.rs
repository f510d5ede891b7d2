//! The multi-index table and its process-wide cache.

use std::ops::Range;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::IndexError;

/// Maximum admissible total degree.
pub const MAX_DEGREE: usize = 100;

/// Hashable exponent tuple.
type TupleKey = SmallVec<[u16; 8]>;

/// Tables shared by every expansion of the same `(nvar, degree)`.
static SHARED: LazyLock<RwLock<FxHashMap<(usize, usize), Arc<MultiIndexTable>>>> =
    LazyLock::new(|| RwLock::new(FxHashMap::default()));

/// Bijection between exponent tuples of bounded total degree and flat
/// coefficient positions.
///
/// Immutable once built. Use [`MultiIndexTable::shared`] to obtain the
/// process-wide instance for a shape instead of rebuilding it.
#[derive(Debug)]
pub struct MultiIndexTable {
    nvar: usize,
    degree: usize,
    /// Exponent tuples, row-major (`len * nvar` entries).
    exponents: Vec<u16>,
    /// Total degree of each tuple.
    totals: Vec<u16>,
    /// `degree_offsets[d]` is the first index of total degree `d`.
    degree_offsets: Vec<usize>,
    lookup: FxHashMap<TupleKey, u32>,
    /// Index of `tuple[..nvar - 1]` in the `(nvar - 1, degree)` table.
    prefixes: Vec<u32>,
}

impl MultiIndexTable {
    /// Returns the number of tuples in `nvar` variables with total degree at
    /// most `degree`, i.e. `binomial(degree + nvar, nvar)`.
    ///
    /// Returns `None` if the count overflows.
    #[must_use]
    pub fn count(nvar: usize, degree: usize) -> Option<usize> {
        let k = nvar.min(degree) as u128;
        let n = nvar.checked_add(degree)? as u128;

        let mut acc: u128 = 1;
        for i in 1..=k {
            acc = acc.checked_mul(n - k + i)? / i;
        }
        usize::try_from(acc).ok()
    }

    /// Builds the table for `(nvar, degree)`.
    ///
    /// # Errors
    ///
    /// - [`IndexError::NoVariables`] if `nvar == 0`
    /// - [`IndexError::DegreeOutOfRange`] if `degree > MAX_DEGREE`
    /// - [`IndexError::TableTooLarge`] if the entry count does not fit `u32`
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(nvar: usize, degree: usize) -> Result<Self, IndexError> {
        let len = Self::validate(nvar, degree)?;

        let mut exponents = Vec::with_capacity(len * nvar);
        let mut totals = Vec::with_capacity(len);
        let mut degree_offsets = Vec::with_capacity(degree + 2);

        let mut prefix = Vec::with_capacity(nvar);
        for d in 0..=degree {
            degree_offsets.push(totals.len());
            let before = exponents.len();
            enumerate_degree(nvar, d, &mut prefix, &mut exponents);
            let added = (exponents.len() - before) / nvar;
            totals.extend(std::iter::repeat(d as u16).take(added));
        }
        degree_offsets.push(totals.len());
        debug_assert_eq!(totals.len(), len);

        let lookup: FxHashMap<TupleKey, u32> = exponents
            .chunks_exact(nvar)
            .enumerate()
            .map(|(i, tuple)| (TupleKey::from_slice(tuple), i as u32))
            .collect();

        let prefixes = if nvar > 1 {
            let sub = Self::shared(nvar - 1, degree)?;
            exponents
                .chunks_exact(nvar)
                .map(|tuple| {
                    sub.index_of(&tuple[..nvar - 1])
                        .expect("prefix of an admissible tuple is admissible") as u32
                })
                .collect()
        } else {
            Vec::new()
        };

        tracing::debug!(nvar, degree, len, "built multi-index table");

        Ok(Self {
            nvar,
            degree,
            exponents,
            totals,
            degree_offsets,
            lookup,
            prefixes,
        })
    }

    /// Returns the shared table for `(nvar, degree)`, building it on first use.
    ///
    /// The table is built without holding the cache lock; if two callers race
    /// on first use, the first inserted table wins and both receive it.
    ///
    /// # Errors
    ///
    /// Same as [`MultiIndexTable::new`].
    pub fn shared(nvar: usize, degree: usize) -> Result<Arc<Self>, IndexError> {
        let key = (nvar, degree);
        {
            let tables = SHARED.read();
            if let Some(table) = tables.get(&key) {
                return Ok(Arc::clone(table));
            }
        }

        let table = Arc::new(Self::new(nvar, degree)?);
        let mut tables = SHARED.write();
        Ok(Arc::clone(tables.entry(key).or_insert(table)))
    }

    fn validate(nvar: usize, degree: usize) -> Result<usize, IndexError> {
        if nvar == 0 {
            return Err(IndexError::NoVariables);
        }
        if degree > MAX_DEGREE {
            return Err(IndexError::DegreeOutOfRange {
                degree,
                max: MAX_DEGREE,
            });
        }
        match Self::count(nvar, degree) {
            Some(len) if u32::try_from(len).is_ok() && len.checked_mul(nvar).is_some() => Ok(len),
            _ => Err(IndexError::TableTooLarge { nvar, degree }),
        }
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn nvar(&self) -> usize {
        self.nvar
    }

    /// Returns the truncation degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Always false: every table contains at least the constant tuple.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Returns the exponent tuple at flat index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn exponents(&self, i: usize) -> &[u16] {
        &self.exponents[i * self.nvar..(i + 1) * self.nvar]
    }

    /// Returns the flat index of an exponent tuple, if admissible.
    #[must_use]
    pub fn index_of(&self, tuple: &[u16]) -> Option<usize> {
        if tuple.len() != self.nvar {
            return None;
        }
        self.lookup.get(tuple).map(|&i| i as usize)
    }

    /// Returns the total degree of the tuple at `i`.
    #[must_use]
    pub fn total_degree(&self, i: usize) -> usize {
        usize::from(self.totals[i])
    }

    /// Returns how much degree is left for further variables at `i`.
    ///
    /// Bounds the inner loops of the nested recurrences.
    #[must_use]
    pub fn remaining_degree(&self, i: usize) -> usize {
        self.degree - self.total_degree(i)
    }

    /// Returns the indices whose total degree is exactly `d`.
    ///
    /// Empty for `d > self.degree()`.
    #[must_use]
    pub fn degree_range(&self, d: usize) -> Range<usize> {
        if d > self.degree {
            return self.len()..self.len();
        }
        self.degree_offsets[d]..self.degree_offsets[d + 1]
    }

    /// Returns the index of `exponents(i)[..nvar - 1]` in the
    /// `(nvar - 1, degree)` table, or `None` for a univariate table.
    #[must_use]
    pub fn prefix_index(&self, i: usize) -> Option<usize> {
        self.prefixes.get(i).map(|&p| p as usize)
    }

    /// Returns the exponent of the last variable at `i`.
    #[must_use]
    pub fn last_exponent(&self, i: usize) -> usize {
        usize::from(self.exponents[(i + 1) * self.nvar - 1])
    }

    /// Iterates over all exponent tuples in table order.
    pub fn iter(&self) -> impl Iterator<Item = &[u16]> + '_ {
        self.exponents.chunks_exact(self.nvar)
    }
}

/// Appends every tuple of total degree `d` in descending lexicographic order.
#[allow(clippy::cast_possible_truncation)]
fn enumerate_degree(nvar: usize, d: usize, prefix: &mut Vec<u16>, out: &mut Vec<u16>) {
    if prefix.len() + 1 == nvar {
        out.extend_from_slice(prefix);
        out.push(d as u16);
        return;
    }

    for e in (0..=d).rev() {
        prefix.push(e as u16);
        enumerate_degree(nvar, d - e, prefix, out);
        prefix.pop();
    }
}
