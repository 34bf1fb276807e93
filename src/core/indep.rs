//! Maximum independent set lower bound, spec.md §4.12.
//!
//! Grounded in `abc/src/misc/espresso/indep.c`. `sm_maximal_independent_set`
//! greedily builds a set of pairwise row-disjoint rows, picking each row's
//! least-weight column; the sum of those weights lower-bounds any cover.

use super::sparse::SparseMatrix;

/// Result of the greedy independent-set search: the rows picked and the
/// summed weight of their cheapest columns.
#[derive(Debug, Clone, Default)]
pub struct IndependentSet {
    pub rows: Vec<usize>,
    pub cost: u64,
}

/// `sm_maximal_independent_set(A, w)`: repeatedly pick the active row that
/// intersects the fewest other active rows (by shared columns), add its
/// least-weight column to the independent set, and remove every row that
/// shares a column with it.
pub fn maximal_independent_set(a: &SparseMatrix) -> IndependentSet {
    let row_id_map: Vec<usize> = a.active_rows().collect();
    let mut blocked = vec![false; row_id_map.len()];
    let mut result = IndependentSet::default();

    loop {
        let candidates: Vec<usize> = row_id_map
            .iter()
            .copied()
            .filter(|&r| !blocked[index_of(&row_id_map, r)])
            .collect();
        if candidates.is_empty() {
            break;
        }
        let best_row = *candidates
            .iter()
            .min_by_key(|&&r| intersection_count(a, r, &candidates))
            .unwrap();
        let cols = a.row_cols(best_row);
        let active_cols: Vec<usize> = cols.into_iter().filter(|&c| a.col_active(c)).collect();
        if active_cols.is_empty() {
            let idx = index_of(&row_id_map, best_row);
            blocked[idx] = true;
            continue;
        }
        let cheapest = *active_cols
            .iter()
            .min_by_key(|&&c| a.col_weight(c))
            .unwrap();
        result.rows.push(best_row);
        result.cost += a.col_weight(cheapest) as u64;

        for &r in &row_id_map {
            if intersects_via_any_col(a, r, &active_cols) {
                let idx = index_of(&row_id_map, r);
                blocked[idx] = true;
            }
        }
        let idx = index_of(&row_id_map, best_row);
        blocked[idx] = true;
        if blocked.iter().all(|&b| b) {
            break;
        }
    }
    result
}

fn index_of(ids: &[usize], row: usize) -> usize {
    ids.iter().position(|&r| r == row).unwrap()
}

fn intersection_count(a: &SparseMatrix, row: usize, candidates: &[usize]) -> usize {
    let cols = a.row_cols(row);
    candidates
        .iter()
        .filter(|&&other| other != row && a.row_cols(other).iter().any(|c| cols.contains(c)))
        .count()
}

fn intersects_via_any_col(a: &SparseMatrix, row: usize, cols: &[usize]) -> bool {
    let row_cols = a.row_cols(row);
    cols.iter().any(|c| row_cols.contains(c))
}
