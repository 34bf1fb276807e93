//! Reduce (RE), spec.md §4.5.
//!
//! Grounded in `abc/src/misc/espresso/reduce.c`. `reduce` replaces each
//! cube with its maximal reduction against the rest of the cover; `sccc`
//! (smallest cube containing the complement) rides the same unate
//! recursion as tautology/complement.

use super::cover::Cover;
use super::cube::{self, Cube};
use super::cubelist::{self, CubeList};
use super::descriptor::Descriptor;
use super::recursion;

/// Alternates between the two cube orderings described in spec.md §4.5
/// across successive calls to [`reduce`]. Mirrors the original's boolean
/// toggle in module state (spec.md §5 "Ordering guarantees").
#[derive(Debug, Default)]
pub struct ReduceOrderToggle(std::cell::Cell<bool>);

impl ReduceOrderToggle {
    pub fn new() -> Self {
        ReduceOrderToggle(std::cell::Cell::new(false))
    }

    fn next_order(&self) -> bool {
        let cur = self.0.get();
        self.0.set(!cur);
        cur
    }
}

/// `reduce(F, D)`: replace each cube of `F` with its maximal reduction
/// against `F ∪ D \ {p}`. A cube whose SCCC is empty is redundant and
/// dropped.
pub fn reduce(d: &Descriptor, f: &Cover, don_t_care: &Cover, toggle: &ReduceOrderToggle) -> Cover {
    let order_by_mini = toggle.next_order();
    let mut order: Vec<usize> = (0..f.len()).collect();
    if order_by_mini {
        order.sort_by_key(|&i| std::cmp::Reverse(cube::set_ord(&f[i])));
    } else {
        order.sort_by_key(|&i| cube::set_ord(&f[i]));
    }

    let mut working: Vec<Option<Cube>> = f.iter().cloned().map(Some).collect();
    for &i in &order {
        let p = working[i].clone().expect("cube present");
        let mut rest: Vec<Cube> = working
            .iter()
            .enumerate()
            .filter(|(j, c)| *j != i && c.is_some())
            .map(|(_, c)| c.clone().unwrap())
            .collect();
        rest.extend(don_t_care.iter().cloned());
        let cofactored = cubelist::cofactor(d, &rest, &p);
        let complement_cube = sccc(d, &cofactored);
        if cube::setp_empty(&complement_cube) {
            working[i] = None;
            continue;
        }
        let mut reduced = Cube::empty(d);
        cube::set_and(&mut reduced, &p, &complement_cube);
        working[i] = Some(reduced);
    }
    working.into_iter().flatten().collect()
}

/// `sccc(T)`: smallest cube containing the complement of the cover
/// represented by `T`.
pub fn sccc(d: &Descriptor, t: &CubeList) -> Cube {
    if let Some(special) = sccc_special_cases(d, t) {
        return special;
    }
    if let Some((a, b)) = recursion::cubelist_partition(d, t) {
        let la = CubeList::new(a, t.cofactor.clone());
        let lb = CubeList::new(b, t.cofactor.clone());
        let mut r = Cube::empty(d);
        cube::set_and(&mut r, &sccc(d, &la), &sccc(d, &lb));
        return r;
    }
    let counts = recursion::massive_count(d, t);
    // `sccc_special_cases` already handles the fully-unate case, so a
    // binate variable always exists here.
    let var = recursion::choose_split_var(d, t, &counts).expect("binate variable must exist");
    let (left, right, cl, cr) = recursion::split(d, t, var);
    let sl = sccc(d, &left);
    let sr = sccc(d, &right);
    let mut al = Cube::empty(d);
    cube::set_and(&mut al, &sl, &cl);
    let mut ar = Cube::empty(d);
    cube::set_and(&mut ar, &sr, &cr);
    let mut r = Cube::empty(d);
    cube::set_or(&mut r, &al, &ar);
    r
}

fn sccc_special_cases(d: &Descriptor, t: &CubeList) -> Option<Cube> {
    if t.cubes.is_empty() {
        return Some(Cube::full(d));
    }
    if t.cubes.iter().any(|c| cube::setp_equal(c, &t.cofactor)) {
        return Some(Cube::empty(d));
    }
    let counts = recursion::massive_count(d, t);
    if recursion::vars_active(&counts) == 0 || t.cubes.len() == 1 {
        return Some(sccc_unate(d, t));
    }
    for v in 0..d.n_vars {
        let column_all_zero = t.cubes.iter().all(|c| !c.var_is_full(d, v));
        if column_all_zero {
            // factoring the all-zero column out: every cube restricts v
            // identically to "full outside v only", so the SCCC must be
            // full in v; recur on the remaining cover with v excluded
            // by cofactoring on a cube that is full in v alone.
            let mut probe = Cube::full(d);
            probe.set_var_empty(d, v);
            let restricted = cubelist::cofactor(d, &t.cubes, &probe);
            let mut inner = sccc(d, &restricted);
            inner.set_var_full(d, v);
            return Some(inner);
        }
    }
    None
}

/// `sccc_cube`: AND of per-cube complements via `cactive`; returns
/// `fullset` unless the cube has exactly one active (restricting)
/// variable, in which case the complement in that single variable is
/// returned.
fn sccc_unate(d: &Descriptor, t: &CubeList) -> Cube {
    let mut result = Cube::full(d);
    for c in &t.cubes {
        let piece = match c.cactive(d) {
            Some(v) => complement_single_var(d, c, v),
            None => Cube::full(d),
        };
        let mut r = Cube::empty(d);
        cube::set_and(&mut r, &result, &piece);
        result = r;
    }
    result
}

fn complement_single_var(d: &Descriptor, c: &Cube, var: usize) -> Cube {
    let mut out = Cube::full(d);
    for w in d.first_word[var]..=d.last_word[var] {
        let mask = cube::var_word_mask(d, var, w);
        out.words[w] = (out.words[w] & !mask) | (!c.words[w] & mask);
    }
    out
}
