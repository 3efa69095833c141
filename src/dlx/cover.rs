use super::{Dlx, ROOT};

impl Dlx {
    /// Chooses the live column with the fewest rows (minimum remaining
    /// values), preferring the leftmost one on ties.
    ///
    /// Must only be called while at least one column is uncovered.
    pub(crate) fn select_column(&self) -> usize {
        let mut c = self.nodes[ROOT].right;
        debug_assert_ne!(c, ROOT, "select_column on a fully covered matrix");

        let mut best = c;
        let mut best_size = self.cols[c].size;
        c = self.nodes[c].right;
        // A zero-size column can't be beaten.
        while c != ROOT && best_size > 0 {
            if self.cols[c].size < best_size {
                best = c;
                best_size = self.cols[c].size;
            }
            c = self.nodes[c].right;
        }
        best
    }

    /// Removes the column headed by `col` from the header ring, and every row
    /// that has an entry in it from all the other columns.
    ///
    /// The removed nodes keep their own links so that [`uncover`](Self::uncover)
    /// can put them back.
    pub(crate) fn cover(&mut self, col: usize) {
        debug_assert!(col != ROOT && col <= self.num_cols, "{col} is not a header");

        let left_col = self.nodes[col].left;
        let right_col = self.nodes[col].right;
        self.nodes[left_col].right = right_col;
        self.nodes[right_col].left = left_col;

        let mut row_node = self.nodes[col].down;
        while row_node != col {
            let mut node = self.nodes[row_node].right;
            while node != row_node {
                let up = self.nodes[node].up;
                let down = self.nodes[node].down;
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                self.cols[self.nodes[node].column].size -= 1;
                node = self.nodes[node].right;
            }
            row_node = self.nodes[row_node].down;
        }
    }

    /// Undoes the most recent [`cover`](Self::cover), which must have been
    /// applied to `col`.
    ///
    /// Walks everything in the exact reverse order of `cover`: rows bottom to
    /// top, each row right to left, and relinks the header last.
    pub(crate) fn uncover(&mut self, col: usize) {
        debug_assert!(col != ROOT && col <= self.num_cols, "{col} is not a header");
        debug_assert_eq!(
            self.nodes[self.nodes[col].left].right,
            self.nodes[col].right,
            "uncover({col}) does not match the most recent cover"
        );

        let mut row_node = self.nodes[col].up;
        while row_node != col {
            let mut node = self.nodes[row_node].left;
            while node != row_node {
                let up = self.nodes[node].up;
                let down = self.nodes[node].down;
                self.nodes[up].down = node;
                self.nodes[down].up = node;
                self.cols[self.nodes[node].column].size += 1;
                node = self.nodes[node].left;
            }
            row_node = self.nodes[row_node].up;
        }

        let left_col = self.nodes[col].left;
        let right_col = self.nodes[col].right;
        self.nodes[left_col].right = col;
        self.nodes[right_col].left = col;
    }

    /// Covers the column of every other node in `row_node`'s row, left to
    /// right starting just after `row_node`.
    pub(crate) fn cover_row(&mut self, row_node: usize) {
        let mut node = self.nodes[row_node].right;
        while node != row_node {
            self.cover(self.header_of(node));
            node = self.nodes[node].right;
        }
    }

    /// Reverses [`cover_row`](Self::cover_row), right to left.
    pub(crate) fn uncover_row(&mut self, row_node: usize) {
        let mut node = self.nodes[row_node].left;
        while node != row_node {
            self.uncover(self.header_of(node));
            node = self.nodes[node].left;
        }
    }

    /// Walks every live ring and checks the link and count invariants.
    ///
    /// Returns a description of the first broken invariant, if any. Rows are
    /// checked through their live entries only: a row that is still
    /// reachable from a live column must be linked into a live column at
    /// every one of its entries.
    #[cfg(test)]
    pub(crate) fn integrity_violation(&self) -> Option<String> {
        let n = &self.nodes;
        let mut header = n[ROOT].right;
        let mut prev = ROOT;
        let mut seen = 0;
        while header != ROOT {
            if n[header].left != prev {
                return Some(format!("header {header}: left is {}, expected {prev}", n[header].left));
            }
            if n[header].column != header || n[header].row.is_some() {
                return Some(format!("node {header} in the root ring is not a header"));
            }
            seen += 1;
            if seen > self.num_cols {
                return Some("root ring does not close".to_string());
            }

            let mut count = 0;
            let mut node = n[header].down;
            while node != header {
                if n[n[node].down].up != node || n[n[node].up].down != node {
                    return Some(format!("node {node}: vertical links broken"));
                }
                if n[node].column != header {
                    return Some(format!("node {node} sits in the wrong column ring"));
                }
                count += 1;
                if count > self.num_rows {
                    return Some(format!("column ring of header {header} does not close"));
                }

                let mut mate = n[node].right;
                while mate != node {
                    if n[n[mate].right].left != mate || n[n[mate].left].right != mate {
                        return Some(format!("node {mate}: horizontal links broken"));
                    }
                    if n[n[mate].down].up != mate || n[n[mate].up].down != mate {
                        return Some(format!("node {mate}: live row entry is unlinked"));
                    }
                    if !self.is_live_header(n[mate].column) {
                        return Some(format!("node {mate}: live row touches a covered column"));
                    }
                    mate = n[mate].right;
                }
                node = n[node].down;
            }
            if n[header].up == header && n[header].down != header {
                return Some(format!("header {header}: up/down disagree on emptiness"));
            }
            if count != self.cols[header].size {
                return Some(format!(
                    "header {header}: size is {}, ring holds {count}",
                    self.cols[header].size
                ));
            }

            prev = header;
            header = n[header].right;
        }
        if n[ROOT].left != prev {
            return Some(format!("root: left is {}, expected {prev}", n[ROOT].left));
        }
        None
    }

    #[cfg(test)]
    fn is_live_header(&self, header: usize) -> bool {
        let mut c = self.nodes[ROOT].right;
        while c != ROOT {
            if c == header {
                return true;
            }
            c = self.nodes[c].right;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Column, Node};
    use super::*;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::generate::seeded_matrix;

    fn snapshot(dlx: &Dlx) -> (Vec<Node>, Vec<Column>) {
        (dlx.nodes.clone(), dlx.cols.clone())
    }

    fn assert_intact(dlx: &Dlx) {
        if let Some(msg) = dlx.integrity_violation() {
            panic!("{msg}");
        }
    }

    /// Live sizes recomputed from the matrix: a row is live while it has no
    /// entry in a covered column.
    fn expected_sizes(m: &[Vec<bool>], covered: &[usize]) -> Vec<(usize, usize)> {
        let live_rows: Vec<&Vec<bool>> = m
            .iter()
            .filter(|row| covered.iter().all(|&h| !row[h - 1]))
            .collect();
        (1..=m[0].len())
            .filter(|h| !covered.contains(h))
            .map(|h| (h, live_rows.iter().filter(|row| row[h - 1]).count()))
            .collect()
    }

    #[test]
    fn test_select_column_prefers_smallest_then_leftmost() {
        // Sizes: 2, 1, 3, 1
        let m = [[1, 0, 1, 0], [1, 1, 1, 0], [0, 0, 1, 1]];
        let dlx = Dlx::new(&m).unwrap();
        assert_eq!(dlx.select_column(), 2);
    }

    #[test]
    fn test_select_column_stops_at_empty_column() {
        let m = [[1, 1, 0, 0], [1, 1, 0, 1]];
        let dlx = Dlx::new(&m).unwrap();
        assert_eq!(dlx.select_column(), 3);
    }

    #[test]
    fn test_cover_removes_intersecting_rows() {
        // Rows 0 and 2 intersect column 0.
        let m = [[1, 0, 1], [0, 1, 1], [1, 1, 0]];
        let mut dlx = Dlx::new(&m).unwrap();
        dlx.cover(1);
        assert_eq!(dlx.active_columns(), vec![1, 2]);
        assert_eq!(dlx.cols[2].size, 1);
        assert_eq!(dlx.cols[3].size, 1);
        assert_intact(&dlx);

        dlx.uncover(1);
        assert_eq!(dlx.active_columns(), vec![0, 1, 2]);
        assert_eq!(dlx.cols[2].size, 2);
        assert_eq!(dlx.cols[3].size, 2);
        assert_intact(&dlx);
    }

    #[test]
    fn test_round_trip_every_column() {
        let m = seeded_matrix(11, 12, 7, 0.4);
        let mut dlx = Dlx::new(&m).unwrap();
        let before = snapshot(&dlx);
        for col in 1..=dlx.num_cols {
            dlx.cover(col);
            assert_intact(&dlx);
            dlx.uncover(col);
            assert_eq!(snapshot(&dlx), before, "column {col}");
        }
    }

    #[test]
    fn test_round_trip_empty_column() {
        let m = [[1, 0, 1], [1, 0, 0]];
        let mut dlx = Dlx::new(&m).unwrap();
        let before = snapshot(&dlx);
        dlx.cover(2);
        assert_eq!(dlx.active_columns(), vec![0, 2]);
        assert_eq!(dlx.cols[1].size, 2);
        dlx.uncover(2);
        assert_eq!(snapshot(&dlx), before);
    }

    #[test]
    fn test_row_cover_round_trip() {
        let m = [[1, 1, 0, 1], [0, 1, 1, 0], [1, 0, 1, 1], [0, 0, 0, 1]];
        let mut dlx = Dlx::new(&m).unwrap();
        let before = snapshot(&dlx);

        // Choose the first entry of column 0 the way the search does.
        dlx.cover(1);
        let row_node = dlx.nodes[1].down;
        dlx.cover_row(row_node);
        assert_eq!(dlx.active_columns(), vec![2]);
        assert_intact(&dlx);
        dlx.uncover_row(row_node);
        dlx.uncover(1);
        assert_eq!(snapshot(&dlx), before);
    }

    #[test]
    fn test_random_nested_covers_conserve_counts() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xD1C5);
        for round in 0..40 {
            let rows = rng.gen_range(1..15);
            let cols = rng.gen_range(1..9);
            let m = seeded_matrix(round, rows, cols, 0.35);
            let mut dlx = Dlx::new(&m).unwrap();
            let pristine = snapshot(&dlx);

            let mut stack: Vec<(usize, (Vec<Node>, Vec<Column>))> = vec![];
            for _ in 0..60 {
                let live: Vec<usize> = dlx.active_columns().iter().map(|c| c + 1).collect();
                let push = stack.is_empty() || (!live.is_empty() && rng.gen_bool(0.55));
                if push {
                    let col = *live.choose(&mut rng).unwrap();
                    let state = snapshot(&dlx);
                    dlx.cover(col);
                    stack.push((col, state));
                } else {
                    let (col, state) = stack.pop().unwrap();
                    dlx.uncover(col);
                    assert_eq!(snapshot(&dlx), state, "round {round}: uncover({col})");
                }

                assert_intact(&dlx);
                let covered: Vec<usize> = stack.iter().map(|(c, _)| *c).collect();
                for (h, size) in expected_sizes(&m, &covered) {
                    assert_eq!(dlx.cols[h].size, size, "round {round}: header {h}");
                }
            }

            while let Some((col, _)) = stack.pop() {
                dlx.uncover(col);
            }
            assert_eq!(snapshot(&dlx), pristine);
        }
    }

    #[test]
    fn test_integrity_detects_corruption() {
        let m = [[1, 1], [0, 1]];
        let mut dlx = Dlx::new(&m).unwrap();
        assert!(dlx.integrity_violation().is_none());
        dlx.cols[2].size += 1;
        assert!(dlx.integrity_violation().is_some());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not match the most recent cover")]
    fn test_uncover_out_of_order_panics() {
        let m = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];
        let mut dlx = Dlx::new(&m).unwrap();
        dlx.cover(1);
        dlx.cover(2);
        dlx.uncover(1);
    }
}
