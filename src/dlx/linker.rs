use log::debug;

use super::{Column, Dlx, Node, ROOT};
use crate::error::Result;
use crate::matrix::{dimensions, Bit};

impl Dlx {
    /// Constructs the dancing-links structure from a binary matrix:
    /// * `matrix[r][c] == 1` (or `true`) means row r covers column c.
    ///
    /// The matrix must have at least one row and one column, every row must
    /// have the same width and every entry must be 0 or 1; otherwise a
    /// [`DlxError::MalformedMatrix`](crate::DlxError::MalformedMatrix) is
    /// returned and nothing is built. A column without any 1-entry is
    /// accepted; it simply makes the problem unsolvable.
    ///
    /// # Example
    /// ```
    /// use dancing_cover::{Dlx, DlxError, Malformation};
    ///
    /// let dlx = Dlx::new(&[vec![true, false], vec![false, true]]).unwrap();
    /// assert_eq!(dlx.num_ones(), 2);
    ///
    /// let err = Dlx::new(&[vec![1, 0], vec![1]]).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     DlxError::MalformedMatrix(Malformation::RaggedRow { row: 1, expected: 2, found: 1 })
    /// );
    /// ```
    pub fn new<R, T>(matrix: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: Bit,
    {
        let (rows, cols) = dimensions(matrix)?;
        let ones: usize = matrix
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .filter(|v| v.to_bit() == Some(true))
                    .count()
            })
            .sum();

        let mut dlx = Dlx {
            nodes: Vec::with_capacity(1 + cols + ones),
            cols: Vec::with_capacity(1 + cols),
            num_rows: rows,
            num_cols: cols,
            solution: Vec::with_capacity(cols),
        };

        // Root, then the headers in a left-right ring around it.
        dlx.nodes.push(Node {
            left: cols,
            right: 1,
            ..Node::detached(ROOT, ROOT, None)
        });
        dlx.cols.push(Column { size: 0 });
        for c in 1..=cols {
            dlx.nodes.push(Node {
                left: c - 1,
                right: if c == cols { ROOT } else { c + 1 },
                ..Node::detached(c, c, None)
            });
            dlx.cols.push(Column { size: 0 });
        }

        for (r, row) in matrix.iter().enumerate() {
            let mut first_in_row: Option<usize> = None;
            for (c, v) in row.as_ref().iter().enumerate() {
                if v.to_bit() == Some(true) {
                    let node = dlx.append(c + 1, r);
                    match first_in_row {
                        Some(first) => dlx.link_into_row(first, node),
                        None => first_in_row = Some(node),
                    }
                }
            }
        }

        debug!(
            "linked {}x{} matrix into {} nodes ({} ones)",
            rows,
            cols,
            dlx.nodes.len(),
            ones
        );
        Ok(dlx)
    }

    /// Pushes a data node for `row` at the bottom of the column headed by
    /// `header`, directly above the header.
    fn append(&mut self, header: usize, row: usize) -> usize {
        let idx = self.nodes.len();
        let up = self.nodes[header].up;
        self.nodes.push(Node {
            up,
            down: header,
            ..Node::detached(idx, header, Some(row))
        });
        self.nodes[up].down = idx;
        self.nodes[header].up = idx;
        self.cols[header].size += 1;
        idx
    }

    /// Inserts `node` to the left of `first`, i.e. at the end of its row ring.
    fn link_into_row(&mut self, first: usize, node: usize) {
        let last = self.nodes[first].left;
        self.nodes[node].left = last;
        self.nodes[node].right = first;
        self.nodes[last].right = node;
        self.nodes[first].left = node;
    }
}
