//! Cube lists and cofactoring (spec.md §4.2).
//!
//! Grounded in `abc/src/misc/espresso/cofactor.c`. The C original threads a
//! cofactor cube through the cube list via a sentinel first slot; spec.md §9
//! calls that out explicitly as a convention to drop. Here a `CubeList` owns
//! its cubes and keeps the cofactor alongside them instead of inside them.

use super::cube::{self, Cube};
use super::descriptor::Descriptor;

/// A cover paired with the cube it was cofactored against (spec.md §4.2
/// "Cube list"). The cofactor is `Cube::full` for the top-level call.
#[derive(Debug, Clone)]
pub struct CubeList {
    pub cubes: Vec<Cube>,
    pub cofactor: Cube,
}

impl CubeList {
    pub fn new(cubes: Vec<Cube>, cofactor: Cube) -> Self {
        CubeList { cubes, cofactor }
    }

    pub fn top_level(d: &Descriptor, cubes: Vec<Cube>) -> Self {
        CubeList {
            cubes,
            cofactor: Cube::full(d),
        }
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }
}

/// `cofactor(A, c)`: the cofactor of cover `A` with respect to cube `c`.
/// Each cube of `A` that intersects `c` contributes its quotient with `c`
/// (full in every variable where `c` is full, otherwise the intersection);
/// cubes disjoint from `c` drop out entirely.
pub fn cofactor(d: &Descriptor, a: &[Cube], c: &Cube) -> CubeList {
    let mut out = Vec::with_capacity(a.len());
    for cube_a in a {
        if let Some(q) = cube_quotient(d, cube_a, c) {
            out.push(q);
        }
    }
    CubeList::new(out, c.clone())
}

fn cube_quotient(d: &Descriptor, a: &Cube, c: &Cube) -> Option<Cube> {
    let mut r = Cube::empty(d);
    for v in 0..d.n_vars {
        for w in d.first_word[v]..=d.last_word[v] {
            r.words[w] = a.words[w];
        }
        if !c.var_is_full(d, v) {
            let mut intersects = false;
            for w in d.first_word[v]..=d.last_word[v] {
                if a.words[w] & c.words[w] != 0 {
                    intersects = true;
                }
            }
            if !intersects {
                return None;
            }
        }
    }
    Some(r)
}

/// `scofactor(A, c, var)`: cofactor restricted to a single splitting
/// variable (used by the binate-select step of the recursive paradigm) —
/// only variable `var` of `c` is used to filter/quotient `A`.
pub fn scofactor(d: &Descriptor, a: &[Cube], c: &Cube, var: usize) -> CubeList {
    let mut out = Vec::with_capacity(a.len());
    for cube_a in a {
        let mut intersects = false;
        for w in d.first_word[var]..=d.last_word[var] {
            if cube_a.words[w] & c.words[w] != 0 {
                intersects = true;
                break;
            }
        }
        if !intersects {
            continue;
        }
        let mut r = cube_a.clone();
        if !c.var_is_full(d, var) {
            for w in d.first_word[var]..=d.last_word[var] {
                r.words[w] &= c.words[w];
            }
        }
        out.push(r);
    }
    CubeList::new(out, c.clone())
}

/// `massive_count(A)`: total literal count across the cover, the simplest
/// proxy for recursion cost used to pick a splitting variable (spec.md
/// §4.3's `RD` template uses a count like this to decide when to stop
/// recursing and fall back to a direct base-case computation).
pub fn massive_count(a: &[Cube]) -> u32 {
    a.iter().map(cube::set_ord).sum()
}
