//! Minimum cover (MC), spec.md §4.11.
//!
//! Grounded in `abc/src/misc/espresso/mincov.c`. Branch-and-bound unate
//! covering over a [`SparseMatrix`], with essential-column extraction,
//! column/row dominance, an independent-set lower bound (`super::indep`),
//! and block partitioning. `mincov.c` also special-cases Gimpel's
//! reduction (`gimpel.c`) as a fast path ahead of branching; this port
//! omits it and relies on branch-and-bound alone, which is still exact,
//! just without that shortcut.

use super::indep;
use super::sparse::SparseMatrix;

#[derive(Debug, Clone, Default)]
pub struct Solution {
    pub cols: Vec<usize>,
    pub cost: u64,
}

/// `sm_minimum_cover(A, heuristic)`: solve the set-covering problem. When
/// `heuristic` is true, the first feasible branch is accepted instead of
/// exploring both (spec.md §4.11 step 8, `no_branching`).
pub fn minimum_cover(a: &SparseMatrix, heuristic: bool) -> Solution {
    if a.is_empty() {
        return Solution::default();
    }
    let upper: u64 = 1 + a.active_cols().map(|c| a.col_weight(c) as u64).sum::<u64>();
    let mut working = a.clone();
    let mut best: Option<Solution> = None;
    mincov_recurse(&mut working, 0, upper, heuristic, &mut best);
    best.unwrap_or_default()
}

fn mincov_recurse(
    a: &mut SparseMatrix,
    lb_in: u64,
    bound: u64,
    heuristic: bool,
    best: &mut Option<Solution>,
) -> Option<Solution> {
    let mut selected: Vec<usize> = Vec::new();
    let mut cost = 0u64;

    loop {
        let mut changed = false;
        changed |= remove_dominated_columns(a);
        let essential = collect_essential_columns(a);
        for col in essential {
            if !a.col_active(col) {
                continue;
            }
            selected.push(col);
            cost += a.col_weight(col) as u64;
            a.delete_rows_covered_by(col);
            a.deactivate_col(col);
            changed = true;
        }
        changed |= remove_dominated_rows(a);
        if cost >= bound {
            return None;
        }
        if !changed {
            break;
        }
    }

    if a.is_empty() {
        let sol = Solution {
            cols: selected,
            cost,
        };
        record_if_better(best, &sol);
        return Some(sol);
    }

    let indep_set = indep::maximal_independent_set(a);
    let lb_new = lb_in.max(cost + indep_set.cost);
    if lb_new >= bound {
        return None;
    }

    if a.is_empty() {
        let sol = Solution {
            cols: selected,
            cost,
        };
        record_if_better(best, &sol);
        return Some(sol);
    }

    if let Some((rows_l, rows_r)) = block_partition(a) {
        let mut block_a = restrict_to_rows(a, &rows_l);
        let mut block_b = restrict_to_rows(a, &rows_r);
        let sol_a = mincov_recurse(&mut block_a, 0, bound, heuristic, &mut None)?;
        let remaining_bound = bound.saturating_sub(sol_a.cost + cost);
        let sol_b = mincov_recurse(&mut block_b, 0, remaining_bound + 1, heuristic, &mut None)?;
        selected.extend(sol_a.cols);
        selected.extend(sol_b.cols);
        cost += sol_a.cost + sol_b.cost;
        let sol = Solution {
            cols: selected,
            cost,
        };
        record_if_better(best, &sol);
        return Some(sol);
    }

    let branch_col = select_branch_column(a, &indep_set)?;

    let mut accept = a.clone();
    let covered_rows = accept.col_rows(branch_col);
    for row in covered_rows {
        accept.deactivate_row(row);
    }
    accept.deactivate_col(branch_col);
    let accept_sol = mincov_recurse(
        &mut accept,
        lb_new,
        bound,
        heuristic,
        &mut None,
    );
    let accept_full = accept_sol.map(|s| Solution {
        cost: s.cost + cost + a.col_weight(branch_col) as u64,
        cols: selected
            .iter()
            .copied()
            .chain(std::iter::once(branch_col))
            .chain(s.cols)
            .collect(),
    });
    if let Some(ref s) = accept_full {
        record_if_better(best, s);
    }

    if heuristic {
        return accept_full;
    }

    let mut reject = a.clone();
    reject.deactivate_col(branch_col);
    let reject_bound = accept_full.as_ref().map(|s| s.cost).unwrap_or(bound);
    let reject_sol = mincov_recurse(&mut reject, lb_new, reject_bound, heuristic, &mut None);
    let reject_full = reject_sol.map(|s| Solution {
        cost: s.cost + cost,
        cols: selected.iter().copied().chain(s.cols).collect(),
    });
    if let Some(ref s) = reject_full {
        record_if_better(best, s);
    }

    match (accept_full, reject_full) {
        (Some(a), Some(b)) => Some(if a.cost <= b.cost { a } else { b }),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

fn record_if_better(best: &mut Option<Solution>, candidate: &Solution) {
    let better = match best {
        None => true,
        Some(b) => candidate.cost < b.cost,
    };
    if better {
        *best = Some(candidate.clone());
    }
}

/// Essential columns: the unique column covering a length-1 row.
fn collect_essential_columns(a: &SparseMatrix) -> Vec<usize> {
    let mut cols = Vec::new();
    for row in a.active_rows() {
        if a.row_active_len(row) == 1 {
            if let Some(&col) = a.row_cols(row).iter().find(|&&c| a.col_active(c)) {
                if !cols.contains(&col) {
                    cols.push(col);
                }
            }
        }
    }
    cols
}

/// `sm_col_dominance`: a column dominates another of equal-or-higher
/// weight when its row set is a superset; the dominated (more expensive,
/// less coverage) column is removed.
fn remove_dominated_columns(a: &mut SparseMatrix) -> bool {
    let cols: Vec<usize> = a.active_cols().collect();
    let mut removed = false;
    for &c1 in &cols {
        if !a.col_active(c1) {
            continue;
        }
        let rows1: std::collections::HashSet<usize> = a
            .col_rows(c1)
            .into_iter()
            .filter(|&r| a.row_active(r))
            .collect();
        for &c2 in &cols {
            if c1 == c2 || !a.col_active(c2) {
                continue;
            }
            let rows2: std::collections::HashSet<usize> = a
                .col_rows(c2)
                .into_iter()
                .filter(|&r| a.row_active(r))
                .collect();
            if rows2.is_subset(&rows1) && a.col_weight(c1) <= a.col_weight(c2) && rows1 != rows2 {
                a.deactivate_col(c2);
                removed = true;
            }
        }
    }
    removed
}

/// `sm_row_dominance`: a row whose column set is a superset of another
/// row's is redundant to cover separately (covering the subset row covers
/// it too).
fn remove_dominated_rows(a: &mut SparseMatrix) -> bool {
    let rows: Vec<usize> = a.active_rows().collect();
    let mut removed = false;
    for &r1 in &rows {
        if !a.row_active(r1) {
            continue;
        }
        let cols1: std::collections::HashSet<usize> = a
            .row_cols(r1)
            .into_iter()
            .filter(|&c| a.col_active(c))
            .collect();
        for &r2 in &rows {
            if r1 == r2 || !a.row_active(r2) {
                continue;
            }
            let cols2: std::collections::HashSet<usize> = a
                .row_cols(r2)
                .into_iter()
                .filter(|&c| a.col_active(c))
                .collect();
            if cols1.is_subset(&cols2) && cols1 != cols2 {
                a.deactivate_row(r2);
                removed = true;
            }
        }
    }
    removed
}

/// `sm_block_partition`: split the matrix into two blocks with no shared
/// column, if the row set decomposes that way.
fn block_partition(a: &SparseMatrix) -> Option<(Vec<usize>, Vec<usize>)> {
    let rows: Vec<usize> = a.active_rows().collect();
    if rows.len() < 2 {
        return None;
    }
    let mut seed = vec![rows[0]];
    let mut seed_cols: std::collections::HashSet<usize> =
        a.row_cols(rows[0]).into_iter().filter(|&c| a.col_active(c)).collect();
    let mut changed = true;
    while changed {
        changed = false;
        for &r in &rows {
            if seed.contains(&r) {
                continue;
            }
            let cols: std::collections::HashSet<usize> =
                a.row_cols(r).into_iter().filter(|&c| a.col_active(c)).collect();
            if !cols.is_disjoint(&seed_cols) {
                seed.push(r);
                seed_cols.extend(cols);
                changed = true;
            }
        }
    }
    if seed.len() == rows.len() {
        return None;
    }
    let rest: Vec<usize> = rows.into_iter().filter(|r| !seed.contains(r)).collect();
    Some((seed, rest))
}

fn restrict_to_rows(a: &SparseMatrix, rows: &[usize]) -> SparseMatrix {
    let row_set: std::collections::HashSet<usize> = rows.iter().copied().collect();
    let cols: Vec<usize> = a.active_cols().collect();
    let max_col = cols.iter().copied().max().map(|c| c + 1).unwrap_or(0);
    let mut sm = SparseMatrix::new(rows.len(), max_col);
    for &c in &cols {
        sm.set_col_weight(c, a.col_weight(c));
    }
    for (local_row, &r) in rows.iter().enumerate() {
        if !row_set.contains(&r) {
            continue;
        }
        for c in a.row_cols(r) {
            if a.col_active(c) {
                sm.insert(local_row, c);
            }
        }
    }
    sm
}

/// `select_column`: among columns touched by the independent-set rows,
/// maximize `(Σ 1/(|row|-1)) / weight`.
fn select_branch_column(a: &SparseMatrix, indep_set: &indep::IndependentSet) -> Option<usize> {
    let candidate_rows = if indep_set.rows.is_empty() {
        a.active_rows().collect::<Vec<_>>()
    } else {
        indep_set.rows.clone()
    };
    let mut scores: std::collections::HashMap<usize, f64> = std::collections::HashMap::new();
    for &row in &candidate_rows {
        let len = a.row_active_len(row).max(2);
        let contribution = 1.0 / (len as f64 - 1.0);
        for col in a.row_cols(row) {
            if a.col_active(col) {
                *scores.entry(col).or_insert(0.0) += contribution;
            }
        }
    }
    scores
        .into_iter()
        .map(|(c, s)| (c, s / a.col_weight(c).max(1) as f64))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}
