use thiserror::Error;

/// Ways in which an input matrix can fail to describe an exact cover problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Malformation {
    #[error("matrix has no rows")]
    NoRows,
    #[error("matrix has no columns")]
    NoColumns,
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("entry at row {row}, column {column} is neither 0 nor 1")]
    InvalidEntry { row: usize, column: usize },
}

/// Errors reported by the dancing links solver.
///
/// Only construction can fail. Searching a well-formed structure never
/// returns an error; an empty result is reported through
/// [`SearchSummary::found`](crate::SearchSummary::found).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DlxError {
    #[error("malformed matrix: {0}")]
    MalformedMatrix(#[from] Malformation),
}

impl DlxError {
    pub fn ragged_row(row: usize, expected: usize, found: usize) -> Self {
        Self::MalformedMatrix(Malformation::RaggedRow {
            row,
            expected,
            found,
        })
    }

    pub fn invalid_entry(row: usize, column: usize) -> Self {
        Self::MalformedMatrix(Malformation::InvalidEntry { row, column })
    }

    /// Returns the underlying defect when this is a malformed-matrix error.
    pub fn malformation(&self) -> Option<Malformation> {
        match self {
            Self::MalformedMatrix(m) => Some(*m),
        }
    }
}

pub type Result<T> = std::result::Result<T, DlxError>;
