//! Cover (set family) and cover-level cube-algebra operations.
//!
//! Grounded in `abc/src/misc/espresso/cvrm.c` / `cvrmisc.c` (sf_sort,
//! sf_contain, rm_equal, rm_contain, union/merge) and spec.md §4.1's
//! cover-level operation list. A `Cover` here is simply an owned
//! `Vec<Cube>` — the C arena/free-list machinery (spec.md §9 design note)
//! is replaced by normal Rust ownership.

use super::cube::{self, Cube, CubeFlags};
use super::descriptor::Descriptor;
use std::cmp::Ordering;

/// A sum of cubes (spec.md §3 "Cover"). Plain `Vec<Cube>` plus the handful
/// of cover-level operations the algorithm relies on.
pub type Cover = Vec<Cube>;

/// `sfSort`: sorted copy of `a`, writing each cube's `tag_size` from
/// `setOrd` first so comparators can reuse it.
pub fn sf_sort<F>(a: &Cover, mut cmp: F) -> Cover
where
    F: FnMut(&Cube, &Cube) -> Ordering,
{
    let mut out = a.clone();
    for c in out.iter_mut() {
        c.tag_size = cube::set_ord(c) as i32;
    }
    out.sort_by(|x, y| cmp(x, y));
    out
}

/// `sfContain`: drop cubes contained in (implied by) a strictly larger kept
/// cube, and exact duplicates. Result ordered large-to-small.
pub fn sf_contain(a: &Cover) -> Cover {
    let sorted = sf_sort(a, cube::descend);
    let mut kept: Vec<Cube> = Vec::with_capacity(sorted.len());
    for c in sorted {
        let dup_or_contained = kept
            .iter()
            .any(|k| cube::setp_equal(k, &c) || (k.tag_size > c.tag_size && cube::setp_implies(&c, k)));
        if !dup_or_contained {
            kept.push(c);
        }
    }
    kept
}

/// `sfRevContain`: dual of `sfContain`, ordered small-to-large.
pub fn sf_rev_contain(a: &Cover) -> Cover {
    let mut out = sf_contain(a);
    out.reverse();
    out
}

/// `rmEqual`: drop exact duplicate cubes.
pub fn rm_equal(a: &Cover) -> Cover {
    let mut out: Cover = Vec::with_capacity(a.len());
    for c in a {
        if !out.iter().any(|k| cube::setp_equal(k, c)) {
            out.push(c.clone());
        }
    }
    out
}

/// `rmContain`: drop cubes implied by a different cube in the cover.
pub fn rm_contain(a: &Cover) -> Cover {
    let mut out: Cover = Vec::with_capacity(a.len());
    for (i, c) in a.iter().enumerate() {
        let dominated = a.iter().enumerate().any(|(j, k)| {
            i != j && cube::setp_implies(c, k) && !(cube::setp_implies(k, c) && j < i)
        });
        if !dominated {
            out.push(c.clone());
        }
    }
    rm_equal(&out)
}

/// `rm2Contain`: containment check between two covers; drop cubes of `a`
/// implied by some cube of `b`.
pub fn rm2_contain(a: &Cover, b: &Cover) -> Cover {
    a.iter()
        .filter(|c| !b.iter().any(|k| cube::setp_implies(c, k)))
        .cloned()
        .collect()
}

/// `sfUnion`: concatenation (as sets of cubes, order-independent).
pub fn sf_union(a: &Cover, b: &Cover) -> Cover {
    let mut out = a.clone();
    out.extend(b.iter().cloned());
    out
}

/// `sfAppend`: in-place union.
pub fn sf_append(a: &mut Cover, b: Cover) {
    a.extend(b);
}

/// `sfJoin`: cartesian AND of every pair from `a` and `b`, dropping empty
/// products.
pub fn sf_join(d: &Descriptor, a: &Cover, b: &Cover) -> Cover {
    let mut out = Cover::new();
    for x in a {
        for y in b {
            let mut r = Cube::empty(d);
            cube::set_and(&mut r, x, y);
            if !cube::setp_empty(&r) {
                out.push(r);
            }
        }
    }
    out
}

/// `sfMerge`: union then remove exact duplicates and contained cubes.
pub fn sf_merge(a: &Cover, b: &Cover) -> Cover {
    sf_contain(&sf_union(a, b))
}

/// `sfInactive`: keep only cubes with the ACTIVE flag.
pub fn sf_inactive(a: &Cover) -> Cover {
    a.iter()
        .filter(|c| c.flags.contains(CubeFlags::ACTIVE))
        .cloned()
        .collect()
}

/// `sfActive`: same as `sfInactive`; kept as a distinct name for call-site
/// clarity matching the spec's naming (both select by the ACTIVE tag).
pub fn sf_active(a: &Cover) -> Cover {
    sf_inactive(a)
}

/// `d1Merge(A, var)`: cubes that agree outside `var` are OR'd together
/// (distance-1 merge restricted to one variable).
pub fn d1_merge(d: &Descriptor, a: &Cover, var: usize) -> Cover {
    let mut out: Cover = Vec::new();
    let mut used = vec![false; a.len()];
    for i in 0..a.len() {
        if used[i] {
            continue;
        }
        let mut merged = a[i].clone();
        used[i] = true;
        let mut changed = true;
        while changed {
            changed = false;
            for j in 0..a.len() {
                if used[j] {
                    continue;
                }
                if agrees_outside(d, &merged, &a[j], var) {
                    let mut r = Cube::empty(d);
                    cube::set_or(&mut r, &merged, &a[j]);
                    merged = r;
                    used[j] = true;
                    changed = true;
                }
            }
        }
        out.push(merged);
    }
    out
}

fn agrees_outside(d: &Descriptor, a: &Cube, b: &Cube, var: usize) -> bool {
    for v in 0..d.n_vars {
        if v == var {
            continue;
        }
        for w in d.first_word[v]..=d.last_word[v] {
            if a.words[w] != b.words[w] {
                return false;
            }
        }
    }
    true
}

/// `unravel_range(A, lo, hi)`: explode each cube into its cartesian
/// expansion over the multi-valued variables in `[lo..hi]`. Returns `None`
/// if the expansion would exceed 1,000,000 cubes (spec.md §4.1 / §7.1
/// fatal precondition).
pub fn unravel_range(d: &Descriptor, a: &Cover, lo: usize, hi: usize) -> Option<Cover> {
    const MAX_UNRAVEL: usize = 1_000_000;
    let mut out = Cover::new();
    for c in a {
        let mut pieces: Vec<Cube> = vec![c.clone()];
        for v in lo..=hi.min(d.n_vars.saturating_sub(1)) {
            let mut next = Vec::new();
            for p in &pieces {
                for bit in d.first_part[v]..=d.last_part[v] {
                    if p.get_bit(bit) {
                        let mut q = p.clone();
                        q.set_var_empty(d, v);
                        q.set_bit(bit);
                        next.push(q);
                    }
                }
            }
            pieces = next;
            if pieces.len().saturating_mul(out.len() + 1) > MAX_UNRAVEL || pieces.len() > MAX_UNRAVEL
            {
                return None;
            }
        }
        out.extend(pieces);
        if out.len() > MAX_UNRAVEL {
            return None;
        }
    }
    Some(out)
}

/// Total literal/cube cost tuple (spec.md §3 "Cost tuple").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cost {
    pub cubes: usize,
    pub in_lits: usize,
    pub out_lits: usize,
    pub mv_lits: usize,
    pub total: usize,
    pub primes: usize,
}

/// Number of 1-bits in variable `var`'s range of `c` (cvrmisc.c's ones
/// count, used for the output part: each set bit is a distinct output
/// function this cube feeds, so more bits set costs more, the opposite of
/// the don't-care convention used for inputs).
fn var_ones(c: &Cube, d: &Descriptor, var: usize) -> usize {
    (d.first_part[var]..=d.last_part[var])
        .filter(|&b| c.get_bit(b))
        .count()
}

/// Number of 0-bits in variable `var`'s range of `c`.
fn var_zeros(c: &Cube, d: &Descriptor, var: usize) -> usize {
    d.part_size[var] - var_ones(c, d, var)
}

pub fn cover_cost(d: &Descriptor, a: &Cover) -> Cost {
    let mut cost = Cost {
        cubes: a.len(),
        ..Default::default()
    };
    for c in a {
        if c.flags.contains(CubeFlags::PRIME) {
            cost.primes += 1;
        }
        for v in 0..d.n_vars {
            if Some(v) == d.output {
                // Output part (cvrmisc.c): literal count is the number of
                // set bits, one per output function this cube feeds.
                cost.out_lits += var_ones(c, d, v);
            } else if d.is_binary(v) {
                // Binary inputs: a zero bit marks an excluded value, so a
                // don't-care (no zero bits) costs nothing.
                cost.in_lits += var_zeros(c, d, v);
            } else if d.sparse[v] {
                cost.mv_lits += var_ones(c, d, v);
            } else {
                cost.mv_lits += var_zeros(c, d, v);
            }
        }
    }
    cost.total = cost.in_lits + cost.out_lits + cost.mv_lits;
    cost
}
