/// Whether a search enumerates every exact cover or stops at the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Visit every solution.
    #[default]
    Exhaustive,
    /// Stop as soon as one solution has been visited.
    FirstSolution,
}

/// Configuration options for a dancing links search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchConfig {
    /// Enumeration mode
    pub mode: SearchMode,
    /// Stop after this many solutions, if set
    pub max_solutions: Option<usize>,
}

impl SearchConfig {
    /// Exhaustive enumeration with no limit.
    pub fn exhaustive() -> Self {
        Self::default()
    }

    /// Stop after the first solution.
    pub fn first_solution() -> Self {
        Self {
            mode: SearchMode::FirstSolution,
            max_solutions: None,
        }
    }

    pub fn with_limit(mut self, max_solutions: usize) -> Self {
        self.max_solutions = Some(max_solutions);
        self
    }

    /// The number of solutions after which the search stops, if any.
    ///
    /// `FirstSolution` behaves like a limit of one; combined with an explicit
    /// limit, the smaller bound wins.
    pub fn solution_limit(&self) -> Option<usize> {
        match (self.mode, self.max_solutions) {
            (SearchMode::Exhaustive, limit) => limit,
            (SearchMode::FirstSolution, Some(limit)) => Some(limit.min(1)),
            (SearchMode::FirstSolution, None) => Some(1),
        }
    }
}
