//! Dense adjacency-matrix representation of simple undirected graphs.
//!
//! The matrix is the interchange type between graph providers and the
//! sampler: symmetric, zero diagonal, entries restricted to 0/1. Both
//! invariants are enforced at construction so downstream code never
//! re-validates.

use crate::error::MatrixError;

/// A simple undirected graph stored as a dense symmetric boolean matrix.
///
/// Vertices are indexed `0..order`. The diagonal is always zero and
/// `has_edge(u, v) == has_edge(v, u)` for every pair; constructors reject
/// inputs violating either invariant.
///
/// # Examples
/// ```
/// use ramita_core::AdjacencyMatrix;
///
/// let triangle = AdjacencyMatrix::from_edges(3, [(0, 1), (1, 2), (2, 0)])?;
/// assert_eq!(triangle.order(), 3);
/// assert_eq!(triangle.edge_count(), 3);
/// assert!(triangle.has_edge(2, 1));
/// # Ok::<(), ramita_core::MatrixError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdjacencyMatrix {
    order: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Creates an all-zero matrix on `order` vertices.
    pub(crate) fn zeroed(order: usize) -> Self {
        Self {
            order,
            cells: vec![false; order.saturating_mul(order)],
        }
    }

    /// Builds a matrix from explicit 0/1 rows.
    ///
    /// # Errors
    /// Returns [`MatrixError::Empty`] for zero rows, [`MatrixError::NotSquare`]
    /// when a row length differs from the row count,
    /// [`MatrixError::InvalidEntry`] for values other than 0 or 1,
    /// [`MatrixError::SelfLoop`] for a set diagonal entry, and
    /// [`MatrixError::Asymmetric`] when `(i, j)` and `(j, i)` disagree.
    ///
    /// # Examples
    /// ```
    /// use ramita_core::AdjacencyMatrix;
    ///
    /// let graph = AdjacencyMatrix::try_from_rows(&[
    ///     vec![0, 1],
    ///     vec![1, 0],
    /// ])?;
    /// assert_eq!(graph.edge_count(), 1);
    /// # Ok::<(), ramita_core::MatrixError>(())
    /// ```
    pub fn try_from_rows(rows: &[Vec<u8>]) -> Result<Self, MatrixError> {
        let order = rows.len();
        if order == 0 {
            return Err(MatrixError::Empty);
        }
        for (row, values) in rows.iter().enumerate() {
            if values.len() != order {
                return Err(MatrixError::NotSquare {
                    row,
                    len: values.len(),
                    order,
                });
            }
        }

        let mut matrix = Self::zeroed(order);
        for (row, values) in rows.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                match value {
                    0 => {}
                    1 => {
                        if row == column {
                            return Err(MatrixError::SelfLoop { vertex: row });
                        }
                        matrix.cells[row * order + column] = true;
                    }
                    other => {
                        return Err(MatrixError::InvalidEntry {
                            row,
                            column,
                            value: other,
                        });
                    }
                }
            }
        }

        for row in 0..order {
            for column in (row + 1)..order {
                if matrix.cells[row * order + column] != matrix.cells[column * order + row] {
                    return Err(MatrixError::Asymmetric { row, column });
                }
            }
        }

        Ok(matrix)
    }

    /// Builds a matrix on `order` vertices from an undirected edge list.
    ///
    /// Duplicate edges are tolerated; either endpoint order is accepted.
    ///
    /// # Errors
    /// Returns [`MatrixError::Empty`] when `order == 0`,
    /// [`MatrixError::SelfLoop`] when an edge joins a vertex to itself, and
    /// [`MatrixError::VertexOutOfBounds`] when an endpoint is `>= order`.
    ///
    /// # Examples
    /// ```
    /// use ramita_core::AdjacencyMatrix;
    ///
    /// let path = AdjacencyMatrix::from_edges(3, [(0, 1), (1, 2)])?;
    /// assert_eq!(path.edge_count(), 2);
    /// assert!(!path.has_edge(0, 2));
    /// # Ok::<(), ramita_core::MatrixError>(())
    /// ```
    pub fn from_edges(
        order: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, MatrixError> {
        if order == 0 {
            return Err(MatrixError::Empty);
        }
        let mut matrix = Self::zeroed(order);
        for (u, v) in edges {
            if u == v {
                return Err(MatrixError::SelfLoop { vertex: u });
            }
            for vertex in [u, v] {
                if vertex >= order {
                    return Err(MatrixError::VertexOutOfBounds { vertex, order });
                }
            }
            matrix.set_edge(u, v);
        }
        Ok(matrix)
    }

    /// Marks the undirected edge `(u, v)` in both orientations.
    ///
    /// Callers guarantee `u != v` and both endpoints in bounds.
    pub(crate) fn set_edge(&mut self, u: usize, v: usize) {
        debug_assert_ne!(u, v);
        self.cells[u * self.order + v] = true;
        self.cells[v * self.order + u] = true;
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Returns whether the undirected edge `(u, v)` is present.
    ///
    /// Out-of-range indices report no edge.
    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        if u >= self.order || v >= self.order {
            return false;
        }
        self.cells[u * self.order + v]
    }

    /// Counts the undirected edges represented by the matrix.
    ///
    /// The matrix is symmetric with a zero diagonal, so this is the number of
    /// set entries halved.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count() / 2
    }

    /// Iterates over the neighbours of `vertex` in ascending order.
    ///
    /// # Panics
    /// Panics when `vertex >= order`.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        let row = vertex * self.order;
        self.cells[row..row + self.order]
            .iter()
            .enumerate()
            .filter_map(|(column, &cell)| cell.then_some(column))
    }

    /// Returns whether every vertex is reachable from vertex 0.
    ///
    /// # Examples
    /// ```
    /// use ramita_core::AdjacencyMatrix;
    ///
    /// let split = AdjacencyMatrix::from_edges(4, [(0, 1), (2, 3)])?;
    /// assert!(!split.is_connected());
    /// # Ok::<(), ramita_core::MatrixError>(())
    /// ```
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.first_unreachable().is_none()
    }

    /// Returns the lowest-numbered vertex not reachable from vertex 0.
    pub(crate) fn first_unreachable(&self) -> Option<usize> {
        let mut reached = vec![false; self.order];
        let mut frontier = vec![0usize];
        reached[0] = true;
        while let Some(vertex) = frontier.pop() {
            for neighbour in self.neighbors(vertex) {
                if !reached[neighbour] {
                    reached[neighbour] = true;
                    frontier.push(neighbour);
                }
            }
        }
        reached.iter().position(|&seen| !seen)
    }

    /// Exports the matrix as 0/1 rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<u8>> {
        (0..self.order)
            .map(|row| {
                self.cells[row * self.order..(row + 1) * self.order]
                    .iter()
                    .map(|&cell| u8::from(cell))
                    .collect()
            })
            .collect()
    }
}
