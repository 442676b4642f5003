//! Boundary matrices: sparse column-oriented matrices over Z/2Z
//!
//! Column j of a boundary matrix holds the row indices of the boundary
//! faces of simplex j. The storage scheme is a strategy: anything
//! implementing [`Representation`] can back a [`BoundaryMatrix`]. Two
//! representations are provided, one over sorted vectors and one over
//! ordered sets; both support the column addition (symmetric difference,
//! i.e. addition over Z/2Z) that reduction is built on.
//!
//! ## Dualization
//!
//! [`BoundaryMatrix::dualize`] produces the anti-transpose of the matrix:
//! entry (i, j) maps to (n-1-j, n-1-i). Reducing the anti-transpose
//! computes persistent cohomology, which yields the same pairing as
//! homology once indices are mapped back. A dualized matrix reports
//! per-column dimensions complemented against the top dimension, which is
//! what the pairing extraction's creator filter relies on.

/// Column storage strategy for a boundary matrix.
///
/// Row indices within a column are kept sorted ascending; `maximum_index`
/// returns the largest one (the "low" of the column).
pub trait Representation: Clone {
    fn with_columns(columns: usize) -> Self;

    fn num_columns(&self) -> usize;

    /// Replace column `column` with the given sorted row indices.
    fn set_column(&mut self, column: usize, rows: Vec<usize>);

    /// Row indices of a column, sorted ascending.
    fn column(&self, column: usize) -> Vec<usize>;

    /// Largest row index of a column, or None if the column is empty.
    fn maximum_index(&self, column: usize) -> Option<usize>;

    /// Add column `source` into column `target` over Z/2Z
    /// (symmetric difference of the row index sets).
    fn add_columns(&mut self, source: usize, target: usize);

    fn clear_column(&mut self, column: usize);

    fn is_empty_column(&self, column: usize) -> bool;
}

/// Sorted-vector columns: the default representation.
#[derive(Debug, Clone)]
pub struct VectorRepresentation {
    columns: Vec<Vec<usize>>,
}

impl Representation for VectorRepresentation {
    fn with_columns(columns: usize) -> Self {
        Self {
            columns: vec![Vec::new(); columns],
        }
    }

    fn num_columns(&self) -> usize {
        self.columns.len()
    }

    fn set_column(&mut self, column: usize, rows: Vec<usize>) {
        debug_assert!(rows.windows(2).all(|w| w[0] < w[1]));
        self.columns[column] = rows;
    }

    fn column(&self, column: usize) -> Vec<usize> {
        self.columns[column].clone()
    }

    fn maximum_index(&self, column: usize) -> Option<usize> {
        self.columns[column].last().copied()
    }

    fn add_columns(&mut self, source: usize, target: usize) {
        let source_rows = self.columns[source].clone();
        let target_rows = &self.columns[target];

        // Symmetric difference of two sorted sequences
        let mut sum = Vec::with_capacity(source_rows.len() + target_rows.len());
        let (mut a, mut b) = (0, 0);
        while a < source_rows.len() && b < target_rows.len() {
            match source_rows[a].cmp(&target_rows[b]) {
                std::cmp::Ordering::Less => {
                    sum.push(source_rows[a]);
                    a += 1;
                }
                std::cmp::Ordering::Greater => {
                    sum.push(target_rows[b]);
                    b += 1;
                }
                std::cmp::Ordering::Equal => {
                    a += 1;
                    b += 1;
                }
            }
        }
        sum.extend_from_slice(&source_rows[a..]);
        sum.extend_from_slice(&target_rows[b..]);

        self.columns[target] = sum;
    }

    fn clear_column(&mut self, column: usize) {
        self.columns[column].clear();
    }

    fn is_empty_column(&self, column: usize) -> bool {
        self.columns[column].is_empty()
    }
}

/// Ordered-set columns backed by `BTreeSet`.
#[derive(Debug, Clone)]
pub struct SetRepresentation {
    columns: Vec<std::collections::BTreeSet<usize>>,
}

impl Representation for SetRepresentation {
    fn with_columns(columns: usize) -> Self {
        Self {
            columns: vec![std::collections::BTreeSet::new(); columns],
        }
    }

    fn num_columns(&self) -> usize {
        self.columns.len()
    }

    fn set_column(&mut self, column: usize, rows: Vec<usize>) {
        self.columns[column] = rows.into_iter().collect();
    }

    fn column(&self, column: usize) -> Vec<usize> {
        self.columns[column].iter().copied().collect()
    }

    fn maximum_index(&self, column: usize) -> Option<usize> {
        self.columns[column].iter().next_back().copied()
    }

    fn add_columns(&mut self, source: usize, target: usize) {
        let source_rows = self.columns[source].clone();
        let target_rows = &mut self.columns[target];
        for row in source_rows {
            if !target_rows.remove(&row) {
                target_rows.insert(row);
            }
        }
    }

    fn clear_column(&mut self, column: usize) {
        self.columns[column].clear();
    }

    fn is_empty_column(&self, column: usize) -> bool {
        self.columns[column].is_empty()
    }
}

/// A sparse boundary matrix with per-column simplex dimensions.
///
/// The column count is fixed at construction. Row indices in column j are
/// always strictly smaller than j: the boundary relation respects the
/// filtration order.
#[derive(Debug, Clone)]
pub struct BoundaryMatrix<R: Representation = VectorRepresentation> {
    columns: R,
    dimensions: Vec<usize>,
    /// Top simplex dimension present in the matrix
    dimension: usize,
    dualized: bool,
}

impl<R: Representation> BoundaryMatrix<R> {
    pub fn new(num_columns: usize) -> Self {
        Self {
            columns: R::with_columns(num_columns),
            dimensions: vec![0; num_columns],
            dimension: 0,
            dualized: false,
        }
    }

    pub fn num_columns(&self) -> usize {
        self.columns.num_columns()
    }

    pub fn is_dualized(&self) -> bool {
        self.dualized
    }

    /// Top simplex dimension of the matrix. Unaffected by dualization.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Dimension associated with a column. For a dualized matrix this is
    /// the complemented value (top dimension minus the stored one), so a
    /// column whose reported dimension is 0 corresponds to a simplex of
    /// top dimension in the primal matrix.
    pub fn column_dimension(&self, column: usize) -> usize {
        if self.dualized {
            self.dimension - self.dimensions[column]
        } else {
            self.dimensions[column]
        }
    }

    /// Set column `column` to the given row indices (sorted ascending),
    /// recording the dimension of the simplex the column belongs to.
    pub fn set_column(&mut self, column: usize, rows: Vec<usize>, dimension: usize) {
        debug_assert!(
            rows.iter().all(|&row| row < column),
            "row indices must precede their column"
        );
        self.columns.set_column(column, rows);
        self.dimensions[column] = dimension;
        self.dimension = self.dimension.max(dimension);
    }

    pub fn column(&self, column: usize) -> Vec<usize> {
        self.columns.column(column)
    }

    /// The "low" of a column: its maximal row index, if any.
    pub fn maximum_index(&self, column: usize) -> Option<usize> {
        self.columns.maximum_index(column)
    }

    pub fn add_columns(&mut self, source: usize, target: usize) {
        self.columns.add_columns(source, target);
    }

    pub fn clear_column(&mut self, column: usize) {
        self.columns.clear_column(column);
    }

    pub fn is_empty_column(&self, column: usize) -> bool {
        self.columns.is_empty_column(column)
    }

    /// Anti-transpose: entry (i, j) maps to (n-1-j, n-1-i). Toggles the
    /// dualized flag; applying dualize twice restores the original matrix.
    pub fn dualize(&self) -> Self {
        let n = self.num_columns();

        let mut rows: Vec<Vec<usize>> = vec![Vec::new(); n];
        for j in 0..n {
            for i in self.columns.column(j) {
                rows[n - 1 - i].push(n - 1 - j);
            }
        }

        let mut dual = Self::new(n);
        for (column, mut column_rows) in rows.into_iter().enumerate() {
            column_rows.sort_unstable();
            dual.columns.set_column(column, column_rows);
        }

        dual.dimensions = self.dimensions.iter().rev().copied().collect();
        dual.dimension = self.dimension;
        dual.dualized = !self.dualized;
        dual
    }
}
