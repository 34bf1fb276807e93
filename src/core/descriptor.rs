//! Cube universe descriptor.
//!
//! Grounded in `espresso.h`'s `cube` struct (`abc/src/misc/espresso/espresso.h`)
//! and spec.md §3 "Cube universe descriptor". Unlike the C original, the
//! descriptor here is an explicit, owned value passed by reference to every
//! primitive instead of thread-local global state (spec.md §9 design note).

use std::sync::Arc;

/// Bits per packed word. The binate "any-binary-variable-null" trick in
/// [`crate::core::cube::cdist0`] depends on this being 32 so the `DISJOINT`
/// mask lines up with 2-bit-per-binary-variable packing.
pub const BITS_PER_WORD: usize = 32;

/// Selects the 0-literal bit of every binary variable packed two-per-word.
pub const DISJOINT: u32 = 0x5555_5555;

#[inline]
pub fn which_word(bit: usize) -> usize {
    bit / BITS_PER_WORD
}

#[inline]
pub fn which_bit(bit: usize) -> usize {
    bit % BITS_PER_WORD
}

/// A cube universe descriptor: the layout that every cube of a minimization
/// run shares. Built once, read-only for the duration of the run (spec.md §3
/// invariant). Cubes from two descriptors must never mix; nothing in this
/// crate enforces that across `Arc<Descriptor>` boundaries beyond documenting
/// it, matching the C original's lack of a runtime check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub n_vars: usize,
    pub n_binary: usize,
    pub part_size: Vec<usize>,
    pub first_part: Vec<usize>,
    pub last_part: Vec<usize>,
    pub first_word: Vec<usize>,
    pub last_word: Vec<usize>,
    /// Total bits per cube (`size` in spec.md §3).
    pub size: usize,
    /// Words needed to hold `size` bits.
    pub num_words: usize,
    /// Index of the output (multi-valued) variable, if any.
    pub output: Option<usize>,
    /// MAKE_SPARSE eligibility per variable.
    pub sparse: Vec<bool>,
    /// Number of words fully covered by binary variables (see `cdist0`).
    pub binary_whole_words: usize,
}

impl Descriptor {
    /// Build a descriptor from per-variable part sizes. Binary variables
    /// (the first `n_binary` of them) always have `part_size == 2`; the
    /// caller supplies sizes for the remaining (possibly multi-valued)
    /// variables via `mv_part_sizes`. `output` names the index (within
    /// the full variable list) of the output pseudo-variable, if any.
    pub fn new(n_binary: usize, mv_part_sizes: &[usize], output: Option<usize>) -> Self {
        let n_vars = n_binary + mv_part_sizes.len();
        let mut part_size = Vec::with_capacity(n_vars);
        part_size.extend(std::iter::repeat(2).take(n_binary));
        part_size.extend_from_slice(mv_part_sizes);

        let mut first_part = Vec::with_capacity(n_vars);
        let mut last_part = Vec::with_capacity(n_vars);
        let mut first_word = Vec::with_capacity(n_vars);
        let mut last_word = Vec::with_capacity(n_vars);

        let mut bit = 0usize;
        for &ps in &part_size {
            first_part.push(bit);
            last_part.push(bit + ps - 1);
            first_word.push(which_word(bit));
            last_word.push(which_word(bit + ps - 1));
            bit += ps;
        }
        let size = bit;
        // Whole words fully covered by binary variables (BITS_PER_WORD/2 of
        // them per word); the `cdist0` packed-binate trick (spec.md §6) may
        // only be applied to these, since a word straddling the
        // binary/multi-valued boundary would mix real literal pairs with
        // bits from an unrelated multi-valued variable.
        let binary_whole_words = n_binary / (BITS_PER_WORD / 2);
        let num_words = if size == 0 { 1 } else { which_word(size - 1) + 1 };

        Descriptor {
            n_vars,
            n_binary,
            part_size,
            first_part,
            last_part,
            first_word,
            last_word,
            size,
            num_words,
            output,
            sparse: vec![false; n_vars],
            binary_whole_words,
        }
    }

    /// Convenience constructor for the common case this crate's high-level
    /// `Cover` API builds: `n_binary` two-valued inputs followed by one
    /// multi-valued output pseudo-variable with `n_outputs` positional bits
    /// (spec.md §6: "Output part bits follow the multi-valued block, one bit
    /// per output function").
    pub fn with_output(n_binary: usize, n_outputs: usize) -> Arc<Self> {
        let output_index = n_binary;
        Arc::new(Self::new(n_binary, &[n_outputs.max(1)], Some(output_index)))
    }

    #[inline]
    pub fn is_binary(&self, var: usize) -> bool {
        var < self.n_binary
    }

    #[inline]
    pub fn num_words_for(size: usize) -> usize {
        if size == 0 {
            1
        } else {
            which_word(size - 1) + 1
        }
    }
}
