//! Unate recursive paradigm (RD), spec.md §4.2.
//!
//! The generic Shannon-style recursion shared by complement, tautology,
//! SCCC and prime-consensus. Grounded in `abc/src/misc/espresso/cofactor.c`
//! (`massive_count`, `binate_split_select`) and `essen.c`'s shared special
//! cases. Each caller supplies its own leaf/merge behavior; this module
//! only owns variable selection and cofactoring.

use super::cube::{self, Cube};
use super::cubelist::{self, CubeList};
use super::descriptor::Descriptor;

/// Per-variable zero counts gathered by [`massive_count`].
#[derive(Debug, Clone)]
pub struct ColumnCounts {
    pub var_zeros: Vec<u32>,
    pub parts_active: Vec<u32>,
    pub is_unate: Vec<bool>,
}

/// `massive_count(T)`: one pass over the cube list counting, per variable,
/// how many cubes are 0 at each part position (relative to the list's
/// cofactor). Derives `var_zeros`, `parts_active` (binate iff ≥ 2) and
/// `is_unate` per variable.
pub fn massive_count(d: &Descriptor, list: &CubeList) -> ColumnCounts {
    let mut part_zero_counts = vec![0u32; d.size];
    for c in &list.cubes {
        for bit in 0..d.size {
            if !c.get_bit(bit) {
                part_zero_counts[bit] += 1;
            }
        }
    }
    let mut var_zeros = vec![0u32; d.n_vars];
    let mut parts_active = vec![0u32; d.n_vars];
    let mut is_unate = vec![true; d.n_vars];
    for v in 0..d.n_vars {
        let mut zeros = 0u32;
        let mut active_parts = 0u32;
        for bit in d.first_part[v]..=d.last_part[v] {
            if part_zero_counts[bit] > 0 {
                active_parts += 1;
                zeros += part_zero_counts[bit];
            }
        }
        var_zeros[v] = zeros;
        parts_active[v] = active_parts;
        is_unate[v] = active_parts <= 1;
    }
    ColumnCounts {
        var_zeros,
        parts_active,
        is_unate,
    }
}

/// Number of binate (non-unate) variables.
pub fn vars_active(counts: &ColumnCounts) -> usize {
    counts.parts_active.iter().filter(|&&p| p >= 2).count()
}

/// `binate_split_select`: choose the splitting variable among the binate
/// ones, maximizing `parts_active`, then `var_zeros`, then balance across
/// parts (approximated here by minimizing the spread between the largest
/// and smallest per-part zero count, computed on demand).
pub fn choose_split_var(d: &Descriptor, list: &CubeList, counts: &ColumnCounts) -> Option<usize> {
    let mut best: Option<usize> = None;
    for v in 0..d.n_vars {
        if counts.parts_active[v] < 2 {
            continue;
        }
        let better = match best {
            None => true,
            Some(b) => {
                (counts.parts_active[v], counts.var_zeros[v])
                    .cmp(&(counts.parts_active[b], counts.var_zeros[b]))
                    == std::cmp::Ordering::Greater
                    || ((counts.parts_active[v], counts.var_zeros[v])
                        == (counts.parts_active[b], counts.var_zeros[b])
                        && balance_score(d, list, v) < balance_score(d, list, b))
            }
        };
        if better {
            best = Some(v);
        }
    }
    best
}

/// Smaller is more balanced: spread between the most- and least-zeroed
/// part of a variable.
fn balance_score(d: &Descriptor, list: &CubeList, var: usize) -> u32 {
    let mut counts = Vec::new();
    for bit in d.first_part[var]..=d.last_part[var] {
        let zeros = list.cubes.iter().filter(|c| !c.get_bit(bit)).count() as u32;
        counts.push(zeros);
    }
    let max = *counts.iter().max().unwrap_or(&0);
    let min = *counts.iter().min().unwrap_or(&0);
    max - min
}

/// Splits `var`'s parts roughly in half for the left/right cofactor cubes.
/// `cl`/`cr` are full everywhere except `var`, where each carries a
/// disjoint, non-empty subset of `var`'s parts whose union is all of
/// `var`'s parts.
pub fn binate_split_select(d: &Descriptor, var: usize) -> (Cube, Cube) {
    let mut cl = Cube::full(d);
    let mut cr = Cube::full(d);
    cl.set_var_empty(d, var);
    cr.set_var_empty(d, var);
    let parts: Vec<usize> = (d.first_part[var]..=d.last_part[var]).collect();
    let half = (parts.len() + 1) / 2;
    for (i, &bit) in parts.iter().enumerate() {
        if i < half {
            cl.set_bit(bit);
        } else {
            cr.set_bit(bit);
        }
    }
    (cl, cr)
}

/// Left/right cofactors of `list` on the chosen splitting variable.
pub fn split(d: &Descriptor, list: &CubeList, var: usize) -> (CubeList, CubeList, Cube, Cube) {
    let (cl, cr) = binate_split_select(d, var);
    let left = cubelist::scofactor(d, &list.cubes, &cl, var);
    let right = cubelist::scofactor(d, &list.cubes, &cr, var);
    (left, right, cl, cr)
}

/// `cubelist_partition`: disjoint-component decomposition. Returns `None`
/// if the list does not decompose (one component spans all cubes).
pub fn cubelist_partition(d: &Descriptor, list: &CubeList) -> Option<(Vec<Cube>, Vec<Cube>)> {
    if list.cubes.len() < 2 {
        return None;
    }
    let mut seed_idx = vec![0usize];
    let mut in_seed = vec![false; list.cubes.len()];
    in_seed[0] = true;
    let mut changed = true;
    while changed {
        changed = false;
        for j in 0..list.cubes.len() {
            if in_seed[j] {
                continue;
            }
            let shares = seed_idx
                .iter()
                .any(|&i| cube::ccommon(d, &list.cubes[i], &list.cubes[j], &list.cofactor));
            if shares {
                seed_idx.push(j);
                in_seed[j] = true;
                changed = true;
            }
        }
    }
    if seed_idx.len() == list.cubes.len() {
        return None;
    }
    let a: Vec<Cube> = (0..list.cubes.len())
        .filter(|i| in_seed[*i])
        .map(|i| list.cubes[i].clone())
        .collect();
    let b: Vec<Cube> = (0..list.cubes.len())
        .filter(|i| !in_seed[*i])
        .map(|i| list.cubes[i].clone())
        .collect();
    Some((a, b))
}
