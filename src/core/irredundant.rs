//! Irredundant (IR), spec.md §4.6.
//!
//! Grounded in `abc/src/misc/espresso/irred.c`. Partitions `F` into
//! relatively essential (`E`) and redundant (`R`) cubes, further splits
//! `R` into totally (`Rt`) and partially (`Rp`) redundant, builds a
//! covering table from `Rp`, and solves it with [`super::mincov`].

use super::cover::Cover;
use super::cube::Cube;
use super::mincov;
use super::sparse::SparseMatrix;
use super::tautology;
use crate::core::descriptor::Descriptor;

/// `irredundant(F, D)`: returns the subset of `F` that forms a minimum
/// (with respect to cube count) cover of the same function given `D`.
pub fn irredundant(d: &Descriptor, f: &Cover, don_t_care: &Cover) -> Cover {
    if f.is_empty() {
        return Cover::new();
    }
    let (essential_idx, redundant_idx) = split_essential(d, f, don_t_care);
    let mut essential: Vec<Cube> = essential_idx.iter().map(|&i| f[i].clone()).collect();

    if redundant_idx.is_empty() {
        return essential;
    }

    let (totally_idx, partially_idx) = split_redundant(d, f, don_t_care, &essential_idx, &redundant_idx);
    // Totally redundant cubes (covered by E ∪ D alone) are dropped.
    let _ = totally_idx;

    if partially_idx.is_empty() {
        return essential;
    }

    let table = build_covering_table(d, f, don_t_care, &essential_idx, &partially_idx);
    let sol = mincov::minimum_cover(&table, false);
    for col in sol.cols {
        essential.push(f[partially_idx[col]].clone());
    }
    essential
}

fn split_essential(d: &Descriptor, f: &Cover, don_t_care: &Cover) -> (Vec<usize>, Vec<usize>) {
    let mut essential = Vec::new();
    let mut redundant = Vec::new();
    for i in 0..f.len() {
        let rest: Vec<Cube> = f
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, c)| c.clone())
            .chain(don_t_care.iter().cloned())
            .collect();
        if tautology::cube_is_covered(d, &rest, &f[i]) {
            redundant.push(i);
        } else {
            essential.push(i);
        }
    }
    (essential, redundant)
}

fn split_redundant(
    d: &Descriptor,
    f: &Cover,
    don_t_care: &Cover,
    essential_idx: &[usize],
    redundant_idx: &[usize],
) -> (Vec<usize>, Vec<usize>) {
    let e_and_d: Vec<Cube> = essential_idx
        .iter()
        .map(|&i| f[i].clone())
        .chain(don_t_care.iter().cloned())
        .collect();
    let mut totally = Vec::new();
    let mut partially = Vec::new();
    for &i in redundant_idx {
        if tautology::cube_is_covered(d, &e_and_d, &f[i]) {
            totally.push(i);
        } else {
            partially.push(i);
        }
    }
    (totally, partially)
}

/// Builds the sparse covering table: one row per minterm-representative
/// cube that a partially-redundant cube contributes (approximated here at
/// cube granularity, per-row "this minterm needs one of these columns"),
/// one column per `Rp` cube candidate.
fn build_covering_table(
    d: &Descriptor,
    f: &Cover,
    don_t_care: &Cover,
    essential_idx: &[usize],
    partially_idx: &[usize],
) -> SparseMatrix {
    let e_and_d: Vec<Cube> = essential_idx
        .iter()
        .map(|&i| f[i].clone())
        .chain(don_t_care.iter().cloned())
        .collect();

    let mut rows: Vec<Vec<usize>> = Vec::new();
    for (row, &i) in partially_idx.iter().enumerate() {
        let mut candidates = vec![row];
        for (col, &j) in partially_idx.iter().enumerate() {
            if j == i {
                continue;
            }
            let mut probe = e_and_d.clone();
            probe.push(f[j].clone());
            if tautology::cube_is_covered(d, &probe, &f[i]) {
                candidates.push(col);
            }
        }
        rows.push(candidates);
    }
    SparseMatrix::from_rows(partially_idx.len(), &rows)
}

/// `essential(F, D)`: which relatively-essential primes of `F` are also
/// absolutely essential primes of `F ∪ D` (cover a point no other prime
/// of `F ∪ D` covers).
pub fn essential(d: &Descriptor, f: &Cover, don_t_care: &Cover) -> Cover {
    let mut out = Vec::new();
    for i in 0..f.len() {
        let rest: Vec<Cube> = f
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, c)| c.clone())
            .chain(don_t_care.iter().cloned())
            .collect();
        if !tautology::cube_is_covered(d, &rest, &f[i]) {
            out.push(f[i].clone());
        }
    }
    out
}
