//! Knuth's Dancing Links (DLX) structure and Algorithm X.
//!
//! A binary matrix is turned into a torus of circular doubly-linked lists:
//! every 1-entry is a node that sits in one horizontal ring (its row) and one
//! vertical ring (its column). Each column has a header node carrying the
//! number of live entries, and a root node anchors the ring of headers.
//! Covering a column unlinks it together with every row that intersects it;
//! uncovering relinks everything from the pointers the removed nodes still
//! hold, so backtracking costs nothing beyond the removal itself.
//!
//! The nodes live in a single arena and link to each other by index.
//!
//! # Example
//! ```
//! use dancing_cover::Dlx;
//!
//! // Knuth's example from "Dancing Links": 7 columns, 6 rows.
//! let matrix = [
//!     [0, 0, 1, 0, 1, 1, 0],
//!     [1, 0, 0, 1, 0, 0, 1],
//!     [0, 1, 1, 0, 0, 1, 0],
//!     [1, 0, 0, 1, 0, 0, 0],
//!     [0, 1, 0, 0, 0, 0, 1],
//!     [0, 0, 0, 1, 1, 0, 1],
//! ];
//!
//! let mut dlx = Dlx::new(&matrix).unwrap();
//! let solutions = dlx.solve_all();
//! assert_eq!(solutions, vec![vec![3, 0, 4]]);
//! ```

mod cover;
mod iter;
mod linker;
mod search;

pub use iter::Solutions;
pub use search::SearchSummary;

/// Arena index of the root node.
pub(crate) const ROOT: usize = 0;

/// Each dancing-links node links up/down/left/right in a circular list.
///
/// Headers and the root are nodes too; they carry no row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    column: usize, // header of the column this node belongs to
    row: Option<usize>,
}

impl Node {
    /// A node with no neighbours other than itself.
    fn detached(idx: usize, column: usize, row: Option<usize>) -> Self {
        Node {
            left: idx,
            right: idx,
            up: idx,
            down: idx,
            column,
            row,
        }
    }
}

/// Each column header tracks how many live nodes (rows) cover this column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Column {
    size: usize,
}

/// A Dancing Links solver for exact cover.
///
/// Built once from a matrix with [`Dlx::new`] and then searched any number of
/// times; every search leaves the structure exactly as it found it.
#[derive(Clone, Debug)]
pub struct Dlx {
    /// Root at 0, headers at 1..=num_cols, data nodes after that.
    nodes: Vec<Node>,
    /// Indexed like `nodes`; only the header entries are meaningful.
    cols: Vec<Column>,
    num_rows: usize,
    num_cols: usize,
    /// Data nodes of the rows chosen so far, in selection order.
    solution: Vec<usize>,
}

impl Dlx {
    /// Number of rows of the source matrix.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns of the source matrix.
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Number of 1-entries in the source matrix.
    pub fn num_ones(&self) -> usize {
        self.nodes.len() - 1 - self.num_cols
    }

    /// Live entry count of matrix column `col`, or `None` if out of range.
    ///
    /// Outside of a search every column is live and this is simply the number
    /// of 1-entries in the column.
    pub fn column_size(&self, col: usize) -> Option<usize> {
        (col < self.num_cols).then(|| self.cols[col + 1].size)
    }

    /// Matrix columns currently linked into the root ring, left to right.
    pub fn active_columns(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.num_cols);
        let mut c = self.nodes[ROOT].right;
        while c != ROOT {
            out.push(c - 1);
            c = self.nodes[c].right;
        }
        out
    }

    fn header_of(&self, node: usize) -> usize {
        self.nodes[node].column
    }

    fn row_of(&self, node: usize) -> usize {
        match self.nodes[node].row {
            Some(r) => r,
            None => unreachable!("node {node} is a header, not a matrix entry"),
        }
    }

    /// Row indices of the current solution path.
    fn path_rows(&self) -> Vec<usize> {
        self.solution.iter().map(|&n| self.row_of(n)).collect()
    }

    fn is_solved(&self) -> bool {
        self.nodes[ROOT].right == ROOT
    }
}
