//! Unate cover (UC), spec.md §4.7.
//!
//! Grounded in `abc/src/misc/espresso/unate.c`. Operates on the
//! "positional cube" representation of a unate set family: each cube's
//! active (non-full) parts become a bit set over a flat column index
//! space, with no notion of variable polarity conflict (by construction,
//! a unate family never splits).

use super::cover::Cover;
use super::cube::{self, Cube};
use super::descriptor::Descriptor;

/// A unate family in positional-cube form: one bit set per cube over the
/// flat column space (`map_cover_to_unate`'s target representation).
#[derive(Debug, Clone, Default)]
pub struct UnateFamily {
    pub rows: Vec<std::collections::BTreeSet<usize>>,
    pub n_cols: usize,
}

/// `map_cover_to_unate(A)`: translate a cover into positional-cube form,
/// one column per (variable, part) pair across the whole descriptor.
pub fn map_cover_to_unate(d: &Descriptor, a: &Cover) -> UnateFamily {
    let mut rows = Vec::with_capacity(a.len());
    for c in a {
        let mut set = std::collections::BTreeSet::new();
        for bit in 0..d.size {
            if !c.get_bit(bit) {
                set.insert(bit);
            }
        }
        rows.push(set);
    }
    UnateFamily {
        rows,
        n_cols: d.size,
    }
}

/// `map_unate_to_cover(A)`: translate positional-cube form back into a
/// cover (inverse of `map_cover_to_unate`).
pub fn map_unate_to_cover(d: &Descriptor, u: &UnateFamily) -> Cover {
    u.rows
        .iter()
        .map(|set| {
            let mut c = Cube::full(d);
            for &bit in set {
                c.clear_bit(bit);
            }
            c
        })
        .collect()
}

/// `unate_compl(A)`: Boolean complement of a positive unate set family,
/// computed directly (no Shannon split needed): the complement is the
/// family of all minimal "hitting sets" — one cube per column, covering
/// every row.
pub fn unate_compl(u: &UnateFamily) -> UnateFamily {
    if u.rows.is_empty() {
        return UnateFamily {
            rows: vec![std::collections::BTreeSet::new()],
            n_cols: u.n_cols,
        };
    }
    let mut result: Vec<std::collections::BTreeSet<usize>> = vec![std::collections::BTreeSet::new()];
    for row in &u.rows {
        let mut next = Vec::new();
        for base in &result {
            for &col in row {
                let mut candidate = base.clone();
                candidate.insert(col);
                next.push(candidate);
            }
        }
        next.sort();
        next.dedup();
        // drop any set that contains another (keep minimal hitting sets)
        let snapshot = next.clone();
        next.retain(|s| !snapshot.iter().any(|other| other != s && other.is_subset(s)));
        result = next;
    }
    UnateFamily {
        rows: result,
        n_cols: u.n_cols,
    }
}

/// `unate_intersect(A, B, largest_only)`: the family of sets that are
/// contained in some member of `A` and some member of `B`; when
/// `largest_only` is set, keep only the maximum-cardinality results.
pub fn unate_intersect(a: &UnateFamily, b: &UnateFamily, largest_only: bool) -> UnateFamily {
    let mut out: Vec<std::collections::BTreeSet<usize>> = Vec::new();
    for ra in &a.rows {
        for rb in &b.rows {
            let inter: std::collections::BTreeSet<usize> = ra.intersection(rb).copied().collect();
            if !out.contains(&inter) {
                out.push(inter);
            }
        }
    }
    if largest_only {
        if let Some(max_len) = out.iter().map(|s| s.len()).max() {
            out.retain(|s| s.len() == max_len);
        }
    }
    UnateFamily {
        rows: out,
        n_cols: a.n_cols.max(b.n_cols),
    }
}

/// `exact_minimum_cover(T)`: enumerate minimal covers of the unate family
/// `T` via repeated `unate_intersect`, and return one representative
/// minimum-size cover.
pub fn exact_minimum_cover(t: &UnateFamily) -> std::collections::BTreeSet<usize> {
    let complements = unate_compl(t);
    complements
        .rows
        .iter()
        .min_by_key(|s| s.len())
        .cloned()
        .unwrap_or_default()
}
