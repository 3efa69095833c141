use std::ops::ControlFlow;

use log::{debug, trace};

use super::Dlx;
use crate::config::SearchConfig;

/// What a finished (or stopped) search did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchSummary {
    /// Number of solutions visited.
    pub solutions: usize,
    /// Number of search tree nodes entered, the root included.
    pub nodes: usize,
    /// Deepest level reached; level 0 is the initial call.
    pub max_depth: usize,
    /// `true` if the whole search tree was explored, `false` if the search
    /// was stopped by the visitor or a solution limit.
    pub exhausted: bool,
}

impl SearchSummary {
    /// Whether at least one exact cover was found.
    pub fn found(&self) -> bool {
        self.solutions > 0
    }
}

struct Visitor<F> {
    visit: F,
    limit: Option<usize>,
    summary: SearchSummary,
    rows: Vec<usize>,
}

impl Dlx {
    /// Runs Algorithm X, calling `visit` with the row indices of every exact
    /// cover, in the order the rows were selected.
    ///
    /// Returning [`ControlFlow::Break`] from `visit` stops the search; the
    /// structure is restored either way.
    ///
    /// Rows without any 1-entry cover nothing and are never part of a
    /// reported solution.
    ///
    /// # Panics
    ///
    /// Panics if a [`Solutions`](crate::Solutions) iterator was leaked
    /// mid-search, leaving columns covered.
    ///
    /// # Example
    /// ```
    /// use std::ops::ControlFlow;
    /// use dancing_cover::Dlx;
    ///
    /// let mut dlx = Dlx::new(&[[1], [1], [1]]).unwrap();
    /// let mut seen = vec![];
    /// let summary = dlx.solve(|rows| {
    ///     seen.push(rows.to_vec());
    ///     ControlFlow::Continue(())
    /// });
    /// assert_eq!(seen, vec![vec![0], vec![1], vec![2]]);
    /// assert_eq!(summary.solutions, 3);
    /// assert!(summary.exhausted);
    /// ```
    pub fn solve<F>(&mut self, visit: F) -> SearchSummary
    where
        F: FnMut(&[usize]) -> ControlFlow<()>,
    {
        self.solve_with(&SearchConfig::default(), visit)
    }

    /// Like [`solve`](Self::solve), but honours the mode and solution limit
    /// of `config`.
    pub fn solve_with<F>(&mut self, config: &SearchConfig, visit: F) -> SearchSummary
    where
        F: FnMut(&[usize]) -> ControlFlow<()>,
    {
        self.assert_restored();
        let limit = config.solution_limit();
        if limit == Some(0) {
            return SearchSummary::default();
        }

        let mut visitor = Visitor {
            visit,
            limit,
            summary: SearchSummary::default(),
            rows: Vec::with_capacity(self.num_cols),
        };
        let flow = self.search(0, &mut visitor);

        let mut summary = visitor.summary;
        summary.exhausted = flow.is_continue();
        debug_assert!(self.solution.is_empty());
        debug_assert_eq!(self.active_columns().len(), self.num_cols);
        debug!(
            "search finished: {} solutions, {} nodes, depth {}, exhausted: {}",
            summary.solutions, summary.nodes, summary.max_depth, summary.exhausted
        );
        summary
    }

    /// Solve the exact cover problem, returning ALL solutions (each solution is a list of row indices).
    pub fn solve_all(&mut self) -> Vec<Vec<usize>> {
        let mut solutions = Vec::new();
        self.solve(|rows| {
            solutions.push(rows.to_vec());
            ControlFlow::Continue(())
        });
        solutions
    }

    /// Returns the first solution Algorithm X finds, if any.
    pub fn solve_first(&mut self) -> Option<Vec<usize>> {
        let mut first = None;
        self.solve_with(&SearchConfig::first_solution(), |rows| {
            first = Some(rows.to_vec());
            ControlFlow::Break(())
        });
        first
    }

    /// Counts all solutions without collecting them.
    pub fn count_solutions(&mut self) -> usize {
        self.solve(|_| ControlFlow::Continue(())).solutions
    }

    /// Whether the matrix has an exact cover at all.
    pub fn has_solution(&mut self) -> bool {
        self.solve_first().is_some()
    }

    pub(crate) fn assert_restored(&self) {
        assert!(
            self.solution.is_empty(),
            "search started on a partially covered structure (leaked Solutions iterator?)"
        );
    }

    fn search<F>(&mut self, k: usize, visitor: &mut Visitor<F>) -> ControlFlow<()>
    where
        F: FnMut(&[usize]) -> ControlFlow<()>,
    {
        visitor.summary.nodes += 1;
        visitor.summary.max_depth = visitor.summary.max_depth.max(k);

        // If root is its own right, no columns remain => found a solution
        if self.is_solved() {
            return self.emit(visitor);
        }

        // Choose the column with fewest rows (heuristic)
        let col = self.select_column();
        self.cover(col);

        // An empty column never enters the loop: dead end.
        let mut flow = ControlFlow::Continue(());
        let mut row_node = self.nodes[col].down;
        while row_node != col {
            self.solution.push(row_node);
            self.cover_row(row_node);

            flow = self.search(k + 1, visitor);

            self.solution.pop();
            self.uncover_row(row_node);
            if flow.is_break() {
                break;
            }
            row_node = self.nodes[row_node].down;
        }

        self.uncover(col);
        flow
    }

    fn emit<F>(&self, visitor: &mut Visitor<F>) -> ControlFlow<()>
    where
        F: FnMut(&[usize]) -> ControlFlow<()>,
    {
        visitor.rows.clear();
        visitor
            .rows
            .extend(self.solution.iter().map(|&n| self.row_of(n)));
        visitor.summary.solutions += 1;
        trace!("solution {}: rows {:?}", visitor.summary.solutions, visitor.rows);

        let flow = (visitor.visit)(&visitor.rows);
        if flow.is_break() {
            trace!("search stopped by visitor");
            return flow;
        }
        match visitor.limit {
            Some(limit) if visitor.summary.solutions >= limit => {
                trace!("solution limit {limit} reached");
                ControlFlow::Break(())
            }
            _ => ControlFlow::Continue(()),
        }
    }
}
