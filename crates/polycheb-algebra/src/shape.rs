//! Shared per-shape context.
//!
//! Every expansion with the same `(nvar, degree)` points at one `Shape`,
//! which owns the multi-index table and lazily builds the product table and
//! transform grid the first time a multiplication needs them.

use std::sync::{Arc, LazyLock, OnceLock};

use parking_lot::RwLock;
use polycheb_index::MultiIndexTable;
use rustc_hash::FxHashMap;

use crate::algorithms::transform::TransformGrid;
use crate::error::Result;
use crate::product::ProductTable;

static SHAPES: LazyLock<RwLock<FxHashMap<(usize, usize), Arc<Shape>>>> =
    LazyLock::new(|| RwLock::new(FxHashMap::default()));

/// The `(nvar, degree)` context shared by expansions of one size.
pub struct Shape {
    index: Arc<MultiIndexTable>,
    products: OnceLock<ProductTable>,
    grid: OnceLock<Option<TransformGrid>>,
}

impl Shape {
    /// Returns the shared shape for `(nvar, degree)`.
    ///
    /// # Errors
    ///
    /// Returns [`ChebyshevError::Index`](crate::ChebyshevError::Index) if the
    /// shape is not admissible.
    pub fn shared(nvar: usize, degree: usize) -> Result<Arc<Self>> {
        let key = (nvar, degree);
        {
            let shapes = SHAPES.read();
            if let Some(shape) = shapes.get(&key) {
                return Ok(Arc::clone(shape));
            }
        }

        let shape = Arc::new(Self {
            index: MultiIndexTable::shared(nvar, degree)?,
            products: OnceLock::new(),
            grid: OnceLock::new(),
        });
        let mut shapes = SHAPES.write();
        Ok(Arc::clone(shapes.entry(key).or_insert(shape)))
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn nvar(&self) -> usize {
        self.index.nvar()
    }

    /// Returns the truncation degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.index.degree()
    }

    /// Returns the number of coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always false.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the multi-index table.
    #[must_use]
    pub fn index(&self) -> &Arc<MultiIndexTable> {
        &self.index
    }

    /// Returns the product table, building it on first use.
    pub fn products(&self) -> &ProductTable {
        self.products.get_or_init(|| ProductTable::new(&self.index))
    }

    /// Returns the transform grid, or `None` if it would be too large.
    pub(crate) fn transform_grid(&self) -> Option<&TransformGrid> {
        self.grid
            .get_or_init(|| TransformGrid::new(&self.index))
            .as_ref()
    }

    /// Returns true if both shapes describe the same `(nvar, degree)`.
    #[must_use]
    pub fn same_as(&self, other: &Shape) -> bool {
        self.nvar() == other.nvar() && self.degree() == other.degree()
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shape")
            .field("nvar", &self.nvar())
            .field("degree", &self.degree())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
