use std::iter::FusedIterator;

use log::trace;

use super::Dlx;

/// One level of the search: the covered column being branched on and the
/// row currently tried in it (the header itself before the first row).
#[derive(Clone, Copy, Debug)]
struct Frame {
    column: usize,
    row: usize,
}

/// An iterator yielding the solutions of a [`Dlx`] one at a time.
///
/// Runs Algorithm X with an explicit stack of frames instead of recursion and
/// yields solutions in the same order as [`Dlx::solve`]. Between calls to
/// `next` the structure stays partially covered; dropping the iterator undoes
/// every outstanding cover, so stopping early is always safe.
///
/// # Example
/// ```
/// use dancing_cover::Dlx;
///
/// let mut dlx = Dlx::new(&[[1, 0], [0, 1], [1, 1]]).unwrap();
/// let mut solutions = dlx.solutions();
/// assert_eq!(solutions.next(), Some(vec![0, 1]));
/// drop(solutions);
///
/// assert_eq!(dlx.solutions().count(), 2);
/// ```
pub struct Solutions<'a> {
    dlx: &'a mut Dlx,
    frames: Vec<Frame>,
    started: bool,
}

impl Dlx {
    /// Lazily enumerates every exact cover.
    ///
    /// # Panics
    ///
    /// Panics if an earlier `Solutions` was leaked (e.g. with
    /// [`std::mem::forget`]) after yielding a solution, since the structure
    /// was then never uncovered.
    pub fn solutions(&mut self) -> Solutions<'_> {
        self.assert_restored();
        let capacity = self.num_cols;
        Solutions {
            dlx: self,
            frames: Vec::with_capacity(capacity),
            started: false,
        }
    }
}

impl Solutions<'_> {
    /// Selects and covers the next column and opens a frame for it.
    fn descend(&mut self) {
        let column = self.dlx.select_column();
        self.dlx.cover(column);
        self.frames.push(Frame {
            column,
            row: column,
        });
    }
}

impl Iterator for Solutions<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            self.descend();
        }

        while let Some(&Frame { column, row }) = self.frames.last() {
            // Leaving the row tried last time, if any.
            if row != column {
                self.dlx.solution.pop();
                self.dlx.uncover_row(row);
            }

            let next = self.dlx.nodes[row].down;
            if next == column {
                self.dlx.uncover(column);
                self.frames.pop();
                continue;
            }

            if let Some(top) = self.frames.last_mut() {
                top.row = next;
            }
            self.dlx.solution.push(next);
            self.dlx.cover_row(next);

            if self.dlx.is_solved() {
                let rows = self.dlx.path_rows();
                trace!("solution at depth {}: rows {:?}", self.frames.len(), rows);
                return Some(rows);
            }
            self.descend();
        }
        None
    }
}

impl FusedIterator for Solutions<'_> {}

impl Drop for Solutions<'_> {
    fn drop(&mut self) {
        while let Some(Frame { column, row }) = self.frames.pop() {
            if row != column {
                self.dlx.solution.pop();
                self.dlx.uncover_row(row);
            }
            self.dlx.uncover(column);
        }
        debug_assert!(self.dlx.solution.is_empty());
    }
}
