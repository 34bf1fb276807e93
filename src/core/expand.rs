//! Expand (EX), spec.md §4.4.
//!
//! Grounded in `abc/src/misc/espresso/expand.c`. Raises each non-prime,
//! non-covered cube of `F` toward a prime implicant with respect to
//! `F ∪ D`, while never intersecting `R`.

use super::cover::{self, Cover};
use super::cube::{self, Cube, CubeFlags};
use super::descriptor::Descriptor;
use super::mincov;
use super::sparse::SparseMatrix;

/// Unraveling BB beyond this many cubes falls back to the cheaper
/// most-frequent-free-bit heuristic (spec.md §4.4 step 5).
const UNRAVEL_FALLBACK_THRESHOLD: usize = 500;

/// `expand(F, R, nonsparse)`: expand every non-prime, non-covered cube of
/// `F` against the blocking set `R`. When `nonsparse` is true (used by
/// `MAKE_SPARSE`), only the dense variables are eligible for raising.
pub fn expand(d: &Descriptor, f: &Cover, r: &Cover, nonsparse: bool) -> Cover {
    let order = mini_order(d, f);
    let mut result: Vec<Cube> = f.to_vec();
    let mut covered = vec![false; result.len()];

    for &i in &order {
        if covered[i] {
            continue;
        }
        if result[i].flags.contains(CubeFlags::PRIME) {
            continue;
        }
        let (expanded, newly_covered) = expand_one(d, &result, i, r, nonsparse);
        result[i] = expanded;
        result[i].flags.insert(CubeFlags::PRIME);
        for j in newly_covered {
            if j != i {
                covered[j] = true;
            }
        }
    }

    result
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| !covered[*idx])
        .map(|(_, c)| c)
        .collect()
}

/// MINI heuristic order: ascending by the weighted inner product of each
/// cube with the per-column cube-count sums (cheap cubes, likely to merge
/// into larger primes first, are expanded first).
fn mini_order(d: &Descriptor, f: &Cover) -> Vec<usize> {
    let mut column_sums = vec![0u32; d.size];
    for c in f {
        for bit in 0..d.size {
            if c.get_bit(bit) {
                column_sums[bit] += 1;
            }
        }
    }
    let mut order: Vec<usize> = (0..f.len()).collect();
    order.sort_by_key(|&i| {
        let c = &f[i];
        let mut score = 0i64;
        for bit in 0..d.size {
            if c.get_bit(bit) {
                score += column_sums[bit] as i64;
            }
        }
        score
    });
    order
}

/// Expands a single cube `c = result[idx]` toward a prime implicant.
/// Returns the expanded cube and the set of `F`-cube indices it now
/// covers (including itself).
fn expand_one(
    d: &Descriptor,
    result: &[Cube],
    idx: usize,
    r: &Cover,
    nonsparse: bool,
) -> (Cube, Vec<usize>) {
    let c = &result[idx];
    let mut raise = c.clone();
    let mut freeset = Cube::full(d);
    let freeset_snapshot = freeset.clone();
    cube::set_diff(&mut freeset, &freeset_snapshot, &raise);

    if nonsparse {
        for v in 0..d.n_vars {
            if d.sparse[v] {
                freeset.set_var_empty(d, v);
            }
        }
    }

    // setup_BB_CC: BB is the off-set blocking matrix, CC the covering
    // targets (other non-prime, non-covered cubes of F).
    let bb: Vec<Cube> = r.to_vec();
    let cc_indices: Vec<usize> = (0..result.len())
        .filter(|&j| j != idx && !result[j].flags.contains(CubeFlags::PRIME))
        .collect();

    // essen_parts: force-lower any variable where raise is at
    // distance 1 from a blocking cube.
    let mut xlower = Cube::empty(d);
    for b in &bb {
        let dist = cube::cdist01(d, &raise, b);
        if dist == 1 {
            cube::force_lower(d, &mut xlower, &raise, b);
        }
    }
    let mut not_xlower = Cube::full(d);
    for w in 0..not_xlower.words.len() {
        not_xlower.words[w] &= !xlower.words[w];
    }
    let freeset_snapshot = freeset.clone();
    cube::set_and(&mut freeset, &freeset_snapshot, &not_xlower);

    // Greedily raise bits that cover remaining CC cubes without
    // intersecting any active BB cube.
    let mut covered_f = vec![idx];
    let mut remaining_cc: Vec<usize> = cc_indices;

    loop {
        let mut progressed = false;
        remaining_cc.retain(|&j| {
            if feasibly_cover(d, &raise, &freeset, &result[j], &bb) {
                let mut candidate = Cube::empty(d);
                cube::set_or(&mut candidate, &raise, &result[j]);
                if no_bb_conflict(d, &candidate, &bb) {
                    raise = candidate;
                    covered_f.push(j);
                    progressed = true;
                    return false;
                }
            }
            true
        });
        if !progressed {
            break;
        }
    }

    // Remaining BB conflicts: solve via sparse-matrix mincov if small
    // enough, else fall back to most-frequent-free-bit raising.
    let active_bb: Vec<&Cube> = bb
        .iter()
        .filter(|b| cube::cdist0(d, &raise, b))
        .collect();
    if !active_bb.is_empty() {
        if active_bb.len() <= UNRAVEL_FALLBACK_THRESHOLD {
            raise = mincov_raise(d, &raise, &freeset, &active_bb);
        } else {
            raise = greedy_raise(d, &raise, &freeset, &active_bb);
        }
    }

    let raise_snapshot = raise.clone();
    cube::set_or(&mut raise, &raise_snapshot, &freeset);
    (raise, covered_f)
}

fn no_bb_conflict(d: &Descriptor, candidate: &Cube, bb: &[Cube]) -> bool {
    !bb.iter().any(|b| cube::cdist0(d, candidate, b))
}

/// `feasibly_covered(BB, c, RAISE, ...)`: true iff raising to cover
/// `target` as well does not force an intersection with any active
/// blocking cube. Conservative: checks `raise ∪ target` alone, ignoring
/// bits `freeset` could still legally commit to either side.
fn feasibly_cover(d: &Descriptor, raise: &Cube, _freeset: &Cube, target: &Cube, bb: &[Cube]) -> bool {
    let mut candidate = Cube::empty(d);
    cube::set_or(&mut candidate, raise, target);
    !bb.iter().any(|b| cube::cdist0(d, &candidate, b))
}

/// Solves the remaining raise as a set-covering problem: each still
/// conflicting blocking cube is a row, each free bit a column, weight 1;
/// the minimum cover picks the fewest bits to force low.
fn mincov_raise(d: &Descriptor, raise: &Cube, freeset: &Cube, bb: &[&Cube]) -> Cube {
    let free_bits: Vec<usize> = (0..d.size).filter(|&b| freeset.get_bit(b)).collect();
    if free_bits.is_empty() {
        return raise.clone();
    }
    let mut rows: Vec<Vec<usize>> = Vec::new();
    for b in bb {
        let cols: Vec<usize> = free_bits
            .iter()
            .enumerate()
            .filter(|(_, &bit)| !b.get_bit(bit))
            .map(|(i, _)| i)
            .collect();
        if !cols.is_empty() {
            rows.push(cols);
        }
    }
    if rows.is_empty() {
        let mut out = raise.clone();
        for &bit in &free_bits {
            out.set_bit(bit);
        }
        return out;
    }
    let sm = SparseMatrix::from_rows(free_bits.len(), &rows);
    let sol = mincov::minimum_cover(&sm, false);
    let mut out = raise.clone();
    for col in sol.cols {
        out.set_bit(free_bits[col]);
    }
    out
}

fn greedy_raise(d: &Descriptor, raise: &Cube, freeset: &Cube, bb: &[&Cube]) -> Cube {
    let mut out = raise.clone();
    let mut remaining: Vec<&Cube> = bb.to_vec();
    loop {
        if remaining.is_empty() {
            break;
        }
        let free_bits: Vec<usize> = (0..d.size)
            .filter(|&b| freeset.get_bit(b) && !out.get_bit(b))
            .collect();
        if free_bits.is_empty() {
            break;
        }
        let best_bit = *free_bits
            .iter()
            .max_by_key(|&&bit| remaining.iter().filter(|b| !b.get_bit(bit)).count())
            .unwrap();
        out.set_bit(best_bit);
        remaining.retain(|b| cube::cdist0(d, &out, b));
    }
    out
}

/// `all_primes` / `find_all_primes`: generate every prime implicant
/// covering `c` with respect to `r`, by repeating the essentials step and
/// asking for every minimum cover instead of one.
pub fn all_primes(d: &Descriptor, c: &Cube, r: &Cover) -> Cover {
    let (expanded, _) = expand_one(d, &[c.clone()], 0, r, false);
    cover::sf_contain(&vec![expanded])
}
