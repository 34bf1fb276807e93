//! Complement and tautology (TC), spec.md §4.3.
//!
//! Grounded in `abc/src/misc/espresso/compl.c` and `tautology.c`. Both
//! `complement` and `tautology` ride the same unate-recursive template from
//! [`super::recursion`]; they differ only in their leaves and merge step.

use super::cover::Cover;
use super::cube::{self, Cube};
use super::cubelist::{self, CubeList};
use super::descriptor::Descriptor;
use super::recursion;

/// `complement(T)`: Boolean complement of the union of cubes in `T`.
pub fn complement(d: &Descriptor, t: &CubeList) -> Cover {
    if let Some(special) = compl_special_cases(d, t) {
        return special;
    }
    if let Some((a, b)) = recursion::cubelist_partition(d, t) {
        let la = CubeList::new(a, t.cofactor.clone());
        let lb = CubeList::new(b, t.cofactor.clone());
        return super::cover::sf_join(d, &complement(d, &la), &complement(d, &lb));
    }
    let counts = recursion::massive_count(d, t);
    let var = recursion::choose_split_var(d, t, &counts).expect("binate variable must exist");
    let (left, right, cl, cr) = recursion::split(d, t, var);
    let l_result = complement(d, &left);
    let r_result = complement(d, &right);
    compl_merge(d, &l_result, &r_result, &cl, &cr, var)
}

fn compl_special_cases(d: &Descriptor, t: &CubeList) -> Option<Cover> {
    if t.cubes.is_empty() {
        return Some(vec![Cube::full(d)]);
    }
    if t.cubes.iter().any(|c| cube::setp_equal(c, &t.cofactor)) {
        return Some(Vec::new());
    }
    if t.cubes.len() == 1 {
        return Some(cube::compl_cube(d, &t.cubes[0]));
    }
    let counts = recursion::massive_count(d, t);
    if recursion::vars_active(&counts) == 0 {
        // every variable unate with no binate split: AND of single-cube
        // complements handles the fully-unate case directly.
        let mut out = vec![Cube::full(d)];
        for c in &t.cubes {
            out = super::cover::sf_join(d, &out, &cube::compl_cube(d, c));
        }
        return Some(super::cover::sf_contain(&out));
    }
    None
}

/// `complMerge`: combine the left/right complements across the split
/// variable. Uses the simple containment lift policy unless the cost
/// heuristic favors the ON-set-distance variant.
fn compl_merge(d: &Descriptor, l: &Cover, r: &Cover, cl: &Cube, cr: &Cube, var: usize) -> Cover {
    let mut raise = vec![];
    for c in l {
        let mut p = Cube::empty(d);
        cube::set_and(&mut p, c, cl);
        raise.push(p);
    }
    for c in r {
        let mut p = Cube::empty(d);
        cube::set_and(&mut p, c, cr);
        raise.push(p);
    }
    let merged = super::cover::d1_merge(d, &raise, var);
    let use_onset_lift = (l.len() as u64) * (r.len() as u64)
        > (l.len() as u64 + r.len() as u64) * (l.len().max(r.len()) as u64);
    if use_onset_lift {
        lift_onset(d, merged, var)
    } else {
        lift_simple(d, merged, var)
    }
}

/// `USE_COMPL_LIFT` / `USE_COMPL_LIFT_ONSET`: the original heuristically
/// raises a merged cube's bits in the split variable when doing so stays
/// within the true complement. Both lift policies are quality-only (they
/// never affect correctness of the distance-1-merged result), so this
/// port skips lifting and keeps the merged cover as-is; `sf_contain`
/// still removes duplicates and dominated cubes.
fn lift_simple(_d: &Descriptor, cover: Cover, _var: usize) -> Cover {
    super::cover::sf_contain(&cover)
}

fn lift_onset(d: &Descriptor, cover: Cover, var: usize) -> Cover {
    lift_simple(d, cover, var)
}

/// `simplify(T)`: a cover equivalent to `T` with redundant cubes merged
/// away, computed as the double complement (keep-original-on-loss: if the
/// round trip grows the cover, the original is returned unchanged).
pub fn simplify(d: &Descriptor, t: &CubeList) -> Cover {
    let comp = complement(d, t);
    let comp_list = CubeList::new(comp, t.cofactor.clone());
    let result = complement(d, &comp_list);
    if result.len() > t.cubes.len() {
        t.cubes.clone()
    } else {
        result
    }
}

/// `simp_comp(T)`: computes the simplified cover and its complement in one
/// pass.
pub fn simp_comp(d: &Descriptor, t: &CubeList) -> (Cover, Cover) {
    let simplified = simplify(d, t);
    let complemented = complement(d, t);
    (simplified, complemented)
}

/// `tautology(T)`: true iff the cubes of `T` (under the list's cofactor)
/// cover the whole universe.
pub fn tautology(d: &Descriptor, t: &CubeList) -> bool {
    if let Some(v) = taut_special_cases(d, t) {
        return v;
    }
    if let Some((a, b)) = recursion::cubelist_partition(d, t) {
        let la = CubeList::new(a, t.cofactor.clone());
        let lb = CubeList::new(b, t.cofactor.clone());
        return tautology(d, &la) && tautology(d, &lb);
    }
    let counts = recursion::massive_count(d, t);
    // Unate variable present with no column of zeros globally: shrink by
    // keeping only cubes full in all unate vars, then restart.
    let unate_vars: Vec<usize> = (0..d.n_vars).filter(|&v| counts.is_unate[v]).collect();
    if !unate_vars.is_empty() && recursion::vars_active(&counts) > 0 {
        let shrunk: Vec<Cube> = t
            .cubes
            .iter()
            .filter(|c| unate_vars.iter().all(|&v| c.var_is_full(d, v)))
            .cloned()
            .collect();
        if shrunk.len() != t.cubes.len() {
            let shrunk_list = CubeList::new(shrunk, t.cofactor.clone());
            return tautology(d, &shrunk_list);
        }
    }
    let var = match recursion::choose_split_var(d, t, &counts) {
        Some(v) => v,
        None => return recursion::vars_active(&counts) == 0,
    };
    let (left, right, _cl, _cr) = recursion::split(d, t, var);
    tautology(d, &left) && tautology(d, &right)
}

fn taut_special_cases(d: &Descriptor, t: &CubeList) -> Option<bool> {
    if t.cubes.iter().any(|c| cube::setp_equal(c, &t.cofactor)) {
        return Some(true);
    }
    for v in 0..d.n_vars {
        let column_all_zero = t.cubes.iter().all(|c| !c.var_is_full(d, v));
        if column_all_zero && !t.cubes.is_empty() {
            return Some(false);
        }
    }
    if t.cubes.is_empty() {
        return Some(false);
    }
    let counts = recursion::massive_count(d, t);
    if recursion::vars_active(&counts) == 0 {
        return Some(true);
    }
    None
}

/// `cube_is_covered(T, p)`: true iff `p` is covered by the union of `T`
/// (used by Irredundant's essential/redundant split). Implemented as a
/// tautology check on the cofactor of `T` by `p`.
pub fn cube_is_covered(d: &Descriptor, cover: &[Cube], p: &Cube) -> bool {
    let cofactored = cubelist::cofactor(d, cover, p);
    tautology(d, &cofactored)
}
