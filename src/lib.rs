//! Exact cover solving with Knuth's Dancing Links.
//!
//! Given a binary matrix, an *exact cover* is a set of rows such that every
//! column has a 1 in exactly one of them. [`Dlx`] links the 1-entries of the
//! matrix into circular doubly-linked lists and runs Algorithm X over them,
//! enumerating every exact cover by backtracking.
//!
//! ```
//! use std::ops::ControlFlow;
//! use dancing_cover::{Dlx, SearchConfig};
//!
//! let matrix = [
//!     [1, 0, 0],
//!     [0, 1, 1],
//!     [1, 1, 0],
//!     [0, 0, 1],
//! ];
//! let mut dlx = Dlx::new(&matrix)?;
//!
//! // Every solution, as row indices in the order they were chosen.
//! assert_eq!(dlx.solve_all(), vec![vec![0, 1], vec![2, 3]]);
//!
//! // Or stream them and stop whenever you like.
//! let summary = dlx.solve_with(&SearchConfig::first_solution(), |rows| {
//!     println!("rows {rows:?}");
//!     ControlFlow::Continue(())
//! });
//! assert!(summary.found());
//! # Ok::<(), dancing_cover::DlxError>(())
//! ```
//!
//! A matrix with no exact cover is not an error: the search simply visits
//! nothing and [`SearchSummary::found`] is `false`. Only a malformed matrix
//! (empty, ragged, or with entries other than 0 and 1) is rejected.

pub mod config;
pub mod dlx;
pub mod error;
pub mod generate;
pub mod matrix;

pub use config::{SearchConfig, SearchMode};
pub use dlx::{Dlx, SearchSummary, Solutions};
pub use error::{DlxError, Malformation, Result};
pub use matrix::{is_exact_cover, select_rows, Bit};
