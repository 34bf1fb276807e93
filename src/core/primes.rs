//! Prime generator (PG), spec.md §4.10.
//!
//! Grounded in `abc/src/misc/espresso/primes.c`. `primes_consensus` rides
//! the same recursion as [`super::tautology::complement`] but its merge
//! step emits consensus cubes across the split instead of De Morgan
//! cubes.

use super::cover::{self, Cover};
use super::cube;
use super::cubelist::CubeList;
use super::descriptor::Descriptor;
use super::recursion;

/// Cubes are flushed through `sf_contain` once the consensus buffer
/// reaches this size, bounding peak memory during generation.
const CONSENSUS_FLUSH_THRESHOLD: usize = 500;

/// `primes_consensus(T)`: generate all prime implicants of the function
/// represented by `T` via pairwise consensus across the unate-recursive
/// split.
pub fn primes_consensus(d: &Descriptor, t: &CubeList) -> Cover {
    if t.cubes.len() <= 1 {
        return t.cubes.clone();
    }
    let counts = recursion::massive_count(d, t);
    if recursion::vars_active(&counts) == 0 {
        return cover::sf_contain(&t.cubes);
    }
    if let Some((a, b)) = recursion::cubelist_partition(d, t) {
        let la = CubeList::new(a, t.cofactor.clone());
        let lb = CubeList::new(b, t.cofactor.clone());
        return cover::sf_join(d, &primes_consensus(d, &la), &primes_consensus(d, &lb));
    }
    let var = recursion::choose_split_var(d, t, &counts).expect("binate variable must exist");
    let (left, right, cl, cr) = recursion::split(d, t, var);
    let pl = primes_consensus(d, &left);
    let pr = primes_consensus(d, &right);
    consensus_merge(d, &pl, &pr, &cl, &cr)
}

fn consensus_merge(d: &Descriptor, pl: &Cover, pr: &Cover, cl: &cube::Cube, cr: &cube::Cube) -> Cover {
    let tl: Vec<cube::Cube> = pl
        .iter()
        .map(|c| {
            let mut r = cube::Cube::empty(d);
            cube::set_and(&mut r, c, cl);
            r
        })
        .collect();
    let tr: Vec<cube::Cube> = pr
        .iter()
        .map(|c| {
            let mut r = cube::Cube::empty(d);
            cube::set_and(&mut r, c, cr);
            r
        })
        .collect();

    let mut buffer: Vec<cube::Cube> = Vec::new();
    let mut result: Cover = Vec::new();
    for a in &tl {
        for b in &tr {
            if cube::cdist01(d, a, b) == 1 {
                let mut r = cube::Cube::empty(d);
                cube::consensus(d, &mut r, a, b);
                buffer.push(r);
                if buffer.len() >= CONSENSUS_FLUSH_THRESHOLD {
                    result = cover::sf_union(&result, &buffer);
                    result = cover::sf_contain(&result);
                    buffer.clear();
                }
            }
        }
    }
    if !buffer.is_empty() {
        result = cover::sf_union(&result, &buffer);
    }
    let joined = cover::sf_contain(&cover::sf_join(d, &tl, &tr));
    cover::sf_contain(&cover::sf_union(&result, &joined))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cube::Cube;

    fn d() -> Descriptor {
        Descriptor::new(2, &[1], Some(2))
    }

    #[test]
    fn primes_of_single_cube_is_itself() {
        let d = d();
        let c = Cube::full(&d);
        let list = CubeList::top_level(&d, vec![c.clone()]);
        let primes = primes_consensus(&d, &list);
        assert_eq!(primes, vec![c]);
    }

    #[test]
    fn primes_of_distance_one_pair_includes_consensus() {
        let d = d();
        let mut a = Cube::full(&d);
        a.clear_bit(1); // var0 = 0
        let mut b = Cube::full(&d);
        b.clear_bit(0); // var0 = 1
        let list = CubeList::top_level(&d, vec![a, b]);
        let primes = primes_consensus(&d, &list);
        // consensus should produce a cube full in var0 (don't care)
        assert!(primes.iter().any(|c| c.var_is_full(&d, 0)));
    }
}
