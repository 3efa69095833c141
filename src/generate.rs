//! Random binary matrices for exercising the solver.
//!
//! These are inputs for tests, benchmarks and experiments; the solver itself
//! never generates anything.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generates a `rows x cols` matrix whose entries are 1 with probability `density`.
///
/// `density` is clamped to `[0, 1]`; NaN counts as 0.
///
/// # Example
/// ```
/// use dancing_cover::generate::random_matrix;
///
/// let m = random_matrix(&mut rand::thread_rng(), 20, 6, 0.5);
/// assert_eq!(m.len(), 20);
/// assert!(m.iter().all(|row| row.len() == 6));
/// ```
pub fn random_matrix<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    density: f64,
) -> Vec<Vec<bool>> {
    let p = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_bool(p)).collect())
        .collect()
}

/// Same as [`random_matrix`] but reproducible: equal seeds give equal matrices.
pub fn seeded_matrix(seed: u64, rows: usize, cols: usize, density: f64) -> Vec<Vec<bool>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_matrix(&mut rng, rows, cols, density)
}

/// Generates a matrix that is guaranteed to have at least one exact cover.
///
/// The columns are split into random disjoint blocks, one row per block, which
/// together form a planted solution. `extra_rows` random rows are then added
/// and all rows are shuffled. Returns the matrix and the planted row indices
/// in ascending order.
pub fn planted_matrix<R: Rng + ?Sized>(
    rng: &mut R,
    cols: usize,
    extra_rows: usize,
    density: f64,
) -> (Vec<Vec<bool>>, Vec<usize>) {
    use rand::seq::SliceRandom;

    let mut order: Vec<usize> = (0..cols).collect();
    order.shuffle(rng);

    let mut rows: Vec<(bool, Vec<bool>)> = Vec::new();
    let mut start = 0;
    while start < cols {
        let len = rng.gen_range(1..=cols - start);
        let mut row = vec![false; cols];
        for &c in &order[start..start + len] {
            row[c] = true;
        }
        rows.push((true, row));
        start += len;
    }
    for row in random_matrix(rng, extra_rows, cols, density) {
        rows.push((false, row));
    }
    rows.shuffle(rng);

    let planted = rows
        .iter()
        .enumerate()
        .filter(|(_, (p, _))| *p)
        .map(|(i, _)| i)
        .collect();
    (rows.into_iter().map(|(_, row)| row).collect(), planted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::is_exact_cover;

    #[test]
    fn test_seeded_is_reproducible() {
        let a = seeded_matrix(7, 30, 9, 0.4);
        let b = seeded_matrix(7, 30, 9, 0.4);
        assert_eq!(a, b);
        assert_eq!(a.len(), 30);
        assert!(a.iter().all(|row| row.len() == 9));
    }

    #[test]
    fn test_density_extremes() {
        let zeros = seeded_matrix(1, 5, 5, 0.0);
        assert!(zeros.iter().flatten().all(|&v| !v));
        let ones = seeded_matrix(1, 5, 5, 2.0);
        assert!(ones.iter().flatten().all(|&v| v));
        let nan = seeded_matrix(1, 2, 2, f64::NAN);
        assert_eq!(nan, vec![vec![false; 2]; 2]);
    }

    #[test]
    fn test_planted_solution_is_a_cover() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..20 {
            let (m, planted) = planted_matrix(&mut rng, 8, 10, 0.3);
            assert!(m.len() >= 10);
            assert!(is_exact_cover(&m, &planted));
        }
    }
}
