//! Gasp (GA), spec.md §4.8.
//!
//! Grounded in `abc/src/misc/espresso/gasp.c`. LAST-GASP and SUPER-GASP
//! perturb a locally-optimal cover by reducing every cube without
//! replacement, re-expanding the reduced cubes, and running irredundant,
//! looking for primes that only appear once every cube is simultaneously
//! reduced.

use super::cover::{self, Cost, Cover};
use super::cube::Cube;
use super::descriptor::Descriptor;
use super::expand;
use super::irredundant;
use super::reduce;

/// Reduces every cube of `f` against `f ∪ d \ {cube}` without ever
/// substituting a cube's reduction back in before the next cube is
/// processed ("reduce without replacement"), unlike [`reduce::reduce`]
/// which commits each reduction immediately.
fn reduce_without_replacement(d: &Descriptor, f: &Cover, don_t_care: &Cover) -> Cover {
    let mut reduced = Vec::with_capacity(f.len());
    for (i, p) in f.iter().enumerate() {
        let rest: Vec<Cube> = f
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, c)| c.clone())
            .chain(don_t_care.iter().cloned())
            .collect();
        let cofactored = super::cubelist::cofactor(d, &rest, p);
        let complement_cube = reduce::sccc(d, &cofactored);
        if super::cube::setp_empty(&complement_cube) {
            continue;
        }
        let mut r = Cube::empty(d);
        super::cube::set_and(&mut r, p, &complement_cube);
        reduced.push(r);
    }
    reduced
}

/// LAST-GASP: reduce without replacement, expand the reduced cubes,
/// run irredundant. Returns the new cover if its cost improved, else the
/// original `f` unchanged.
pub fn last_gasp(d: &Descriptor, f: &Cover, don_t_care: &Cover, r: &Cover, cost: &mut Cost) -> Cover {
    let reduced = reduce_without_replacement(d, f, don_t_care);
    if reduced.is_empty() {
        return f.clone();
    }
    let expanded = expand::expand(d, &reduced, r, false);
    let combined = cover::sf_merge(f, &expanded);
    let candidate = irredundant::irredundant(d, &combined, don_t_care);
    let candidate_cost = cover::cover_cost(d, &candidate);
    if candidate_cost.total < cost.total || candidate_cost.cubes < cost.cubes {
        *cost = candidate_cost;
        candidate
    } else {
        f.clone()
    }
}

/// SUPER-GASP: reduce without replacement, then for each reduced cube
/// enumerate *all* primes covering it (via `all_primes`) instead of just
/// expanding it once, add them all to `F`, and run irredundant.
pub fn super_gasp(d: &Descriptor, f: &Cover, don_t_care: &Cover, r: &Cover, cost: &mut Cost) -> Cover {
    let reduced = reduce_without_replacement(d, f, don_t_care);
    if reduced.is_empty() {
        return f.clone();
    }
    let mut all_new = Vec::new();
    for p in &reduced {
        all_new.extend(expand::all_primes(d, p, r));
    }
    let combined = cover::sf_merge(f, &all_new);
    let candidate = irredundant::irredundant(d, &combined, don_t_care);
    let candidate_cost = cover::cover_cost(d, &candidate);
    if candidate_cost.total < cost.total || candidate_cost.cubes < cost.cubes {
        *cost = candidate_cost;
        candidate
    } else {
        f.clone()
    }
}
