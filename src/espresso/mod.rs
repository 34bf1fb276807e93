//! Direct access to the native Espresso-II minimization engine
//!
//! This module provides low-level access to the minimization algorithm
//! through the descriptor/cover types in [`crate::core`], without the
//! cube/label bookkeeping the high-level [`Cover`](crate::Cover) API adds.
//!
//! # When to Use This Module
//!
//! Use this low-level module when you need:
//! - **Access to intermediate covers** - Get ON-set (F), don't-care (D), and OFF-set (R) separately
//! - **Custom don't-care/off-sets** - Provide your own D and R covers to `minimize()`
//! - **Explicit instance control** - Hold onto an `Espresso` configured for one set of dimensions
//!   while another, differently-dimensioned `Espresso` is also in scope
//!
//! **For most use cases, prefer the higher-level APIs:**
//! - [`BoolExpr`](crate::BoolExpr) for boolean expressions
//! - [`Cover`](crate::Cover) for covers with dynamic dimensions
//! - [`PLAReader`](crate::PLAReader) trait for reading PLA files
//!
//! **Note:** Algorithm tuning via [`EspressoConfig`] works with **both**
//! the high-level [`Cover::minimize_with_config()`](crate::cover::Minimizable::minimize_with_config) and
//! low-level [`Espresso::new()`] - configuration is not a reason to use this module.
//!
//! # No Dimension Locking
//!
//! Unlike an implementation backed by a single global C cube structure, each
//! [`Espresso`] instance owns its own [`Descriptor`](crate::core::Descriptor)
//! by `Arc`. Distinct instances with different numbers of inputs/outputs may
//! coexist freely on one thread, or across threads, with no shared mutable
//! state and no ordering constraint between their creation and destruction.
//!
//! ```rust
//! use espresso_min::espresso::{Espresso, EspressoCover};
//! use espresso_min::EspressoConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! // Two instances with different dimensions, alive at the same time.
//! let esp2 = Espresso::new(2, 1, &EspressoConfig::default());
//! let esp3 = Espresso::new(3, 1, &EspressoConfig::default());
//!
//! let cubes2 = [(&[0u8, 1][..], &[1u8][..])];
//! let f2 = EspressoCover::from_cubes(&cubes2, 2, 1)?;
//! let cubes3 = [(&[0u8, 1, 2][..], &[1u8][..])];
//! let f3 = EspressoCover::from_cubes(&cubes3, 3, 1)?;
//!
//! let _ = esp2.minimize(&f2, None, None)?;
//! let _ = esp3.minimize(&f3, None, None)?;
//! # Ok(())
//! # }
//! ```

pub mod error;

pub use error::{CubeError, MinimizationError};

use crate::core::cover::Cost;
use crate::core::descriptor::Descriptor;
use crate::core::espresso_core::{self, Options, PhaseCost};
use crate::core::{self, Cube as CoreCube};
use std::sync::Arc;

// Re-export for convenience when using the espresso module directly
pub use crate::cover::{Cube, CubeType};

/// Cube/literal counts captured after each schedule phase of one
/// `minimize`/`minimize_exact` call, in place of the classic `-v` debug
/// trace (SPEC_FULL.md §2.4).
#[derive(Debug, Clone)]
pub struct MinimizeStats {
    pub phases: Vec<(&'static str, Cost)>,
}

impl MinimizeStats {
    /// The cost recorded immediately before minimization began.
    pub fn initial(&self) -> Option<Cost> {
        self.phases.first().map(|(_, c)| *c)
    }

    /// The cost of the returned result.
    pub fn final_cost(&self) -> Option<Cost> {
        self.phases.last().map(|(_, c)| *c)
    }
}

impl From<Vec<PhaseCost>> for MinimizeStats {
    fn from(raw: Vec<PhaseCost>) -> Self {
        MinimizeStats {
            phases: raw.into_iter().map(|p| (p.phase, p.cost)).collect(),
        }
    }
}

/// Algorithm-tuning configuration for [`Espresso`]
///
/// A plain data struct: no instance it configures shares mutable state with
/// any other, so there is nothing to validate at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct EspressoConfig {
    /// Perform only one EXPAND/IRREDUNDANT pass instead of iterating the
    /// REDUCE/EXPAND/IRREDUNDANT/GASP loop to a fixed point.
    ///
    /// **Default:** `false`
    pub single_expand: bool,

    /// Extract absolutely essential primes before the REDUCE/EXPAND loop and
    /// add them back unconditionally at the end.
    ///
    /// **Default:** `true`
    pub remove_essential: bool,

    /// Use SUPER_GASP (enumerate all primes per reduced cube) instead of
    /// LAST_GASP (expand once) in the perturbation step.
    ///
    /// **Default:** `false`
    pub use_super_gasp: bool,

    /// Explode multi-valued ON-set cubes into single-value cubes before the
    /// first EXPAND (spec.md §4.9 step "UNWRAP").
    ///
    /// **Default:** `true`
    pub unwrap_onset: bool,

    /// Recompute the ON-set via double complementation before minimizing,
    /// dropping any redundancy already present in the input cover.
    ///
    /// **Default:** `false`
    pub recompute_onset: bool,

    /// Skip the MAKE_SPARSE pass that drops redundant output bits from
    /// multi-valued-output cubes.
    ///
    /// **Default:** `false`
    pub skip_make_sparse: bool,
}

impl Default for EspressoConfig {
    fn default() -> Self {
        EspressoConfig {
            single_expand: false,
            remove_essential: true,
            use_super_gasp: false,
            unwrap_onset: true,
            recompute_onset: false,
            skip_make_sparse: false,
        }
    }
}

impl EspressoConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<&EspressoConfig> for Options {
    fn from(c: &EspressoConfig) -> Self {
        Options {
            single_expand: c.single_expand,
            remove_essential: c.remove_essential,
            use_super_gasp: c.use_super_gasp,
            unwrap_onset: c.unwrap_onset,
            recompute_onset: c.recompute_onset,
            skip_make_sparse: c.skip_make_sparse,
        }
    }
}

/// A cover (set family) tied to one fixed dimension: `num_inputs` binary
/// variables plus one multi-valued output variable of `num_outputs` bits.
///
/// Holds the descriptor that every cube in it was built against, so it can
/// be minimized without the caller re-deriving the variable layout.
#[derive(Debug, Clone)]
pub struct EspressoCover {
    cubes: core::Cover,
    descriptor: Arc<Descriptor>,
}

impl EspressoCover {
    /// Build cover from cube data
    ///
    /// Creates a cover from a list of cubes represented as `(inputs, outputs)` pairs.
    ///
    /// # Cube Encoding
    ///
    /// **Input values** (for binary variables):
    /// - `0` = Variable must be 0 (low)
    /// - `1` = Variable must be 1 (high)
    /// - `2` = Don't care (can be either 0 or 1)
    ///
    /// **Output values** (for multi-valued variables):
    /// - `0` = Output is 0 (off)
    /// - `1` = Output is 1 (on)
    ///
    /// # Examples
    ///
    /// ```
    /// use espresso_min::espresso::EspressoCover;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // XOR function: output is 1 when inputs differ
    /// let cubes = [
    ///     (&[0, 1][..], &[1][..]),  // Input: 01, Output: 1
    ///     (&[1, 0][..], &[1][..]),  // Input: 10, Output: 1
    /// ];
    /// let cover = EspressoCover::from_cubes(&cubes, 2, 1)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_cubes<A, B>(
        cubes: &[(A, B)],
        num_inputs: usize,
        num_outputs: usize,
    ) -> Result<Self, MinimizationError>
    where
        A: AsRef<[u8]>,
        B: AsRef<[u8]>,
    {
        let descriptor = Descriptor::with_output(num_inputs, num_outputs);
        let mut out = Vec::new();
        for (inputs, outputs) in cubes {
            let inputs = inputs.as_ref();
            let outputs = outputs.as_ref();
            let mut c = CoreCube::full(&descriptor);
            for (var, &val) in inputs.iter().enumerate() {
                match val {
                    0 => c.clear_bit(descriptor.first_part[var] + 1),
                    1 => c.clear_bit(descriptor.first_part[var]),
                    2 => {}
                    _ => {
                        return Err(CubeError::InvalidValue {
                            value: val,
                            position: var,
                        }
                        .into())
                    }
                }
            }
            if let Some(output_var) = descriptor.output {
                let output_first = descriptor.first_part[output_var];
                c.set_var_empty(&descriptor, output_var);
                for (i, &val) in outputs.iter().enumerate() {
                    if val != 0 {
                        c.set_bit(output_first + i);
                    }
                }
            }
            out.push(c);
        }
        Ok(EspressoCover {
            cubes: out,
            descriptor,
        })
    }

    /// Convert this cover to typed Cubes
    ///
    /// # Examples
    ///
    /// ```
    /// use espresso_min::espresso::{EspressoCover, CubeType};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let cubes = [
    ///     (&[0, 1][..], &[1][..]),  // 01 -> 1
    ///     (&[1, 2][..], &[1][..]),  // 1X -> 1 (don't care)
    /// ];
    /// let cover = EspressoCover::from_cubes(&cubes, 2, 1)?;
    /// let extracted = cover.to_cubes(2, 1, CubeType::F);
    /// assert_eq!(extracted.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_cubes(&self, num_inputs: usize, num_outputs: usize, cube_type: CubeType) -> Vec<Cube> {
        self.cubes
            .iter()
            .map(|c| {
                let mut inputs = Vec::with_capacity(num_inputs);
                for var in 0..num_inputs {
                    let lo = c.get_bit(self.descriptor.first_part[var]);
                    let hi = c.get_bit(self.descriptor.first_part[var] + 1);
                    inputs.push(match (lo, hi) {
                        (true, false) => Some(false),
                        (false, true) => Some(true),
                        _ => None,
                    });
                }
                let mut outputs = Vec::with_capacity(num_outputs);
                if let Some(output_var) = self.descriptor.output {
                    let output_first = self.descriptor.first_part[output_var];
                    for i in 0..num_outputs {
                        outputs.push(c.get_bit(output_first + i));
                    }
                } else {
                    outputs.resize(num_outputs, false);
                }
                Cube::new(&inputs, &outputs, cube_type)
            })
            .collect()
    }

    /// Minimize this cover using the Espresso algorithm
    ///
    /// Convenience method equivalent to constructing an [`Espresso`] for
    /// this cover's dimensions and calling [`Espresso::minimize`].
    pub fn minimize(
        &self,
        d: Option<&EspressoCover>,
        r: Option<&EspressoCover>,
    ) -> Result<(EspressoCover, EspressoCover, EspressoCover, MinimizeStats), MinimizationError> {
        let esp = Espresso {
            descriptor: Arc::clone(&self.descriptor),
            config: EspressoConfig::default(),
        };
        esp.minimize(self, d, r)
    }

    /// Minimize this cover using exact minimization
    pub fn minimize_exact(
        &self,
        d: Option<&EspressoCover>,
        r: Option<&EspressoCover>,
    ) -> Result<(EspressoCover, EspressoCover, EspressoCover), MinimizationError> {
        let esp = Espresso {
            descriptor: Arc::clone(&self.descriptor),
            config: EspressoConfig::default(),
        };
        esp.minimize_exact(self, d, r)
    }
}

/// A minimizer configured for one fixed set of dimensions
///
/// Owns its descriptor and configuration by value; creating, using, and
/// dropping one instance has no effect on any other.
#[derive(Debug, Clone)]
pub struct Espresso {
    descriptor: Arc<Descriptor>,
    config: EspressoConfig,
}

impl Espresso {
    /// Create a new Espresso instance with custom configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use espresso_min::espresso::Espresso;
    /// use espresso_min::EspressoConfig;
    ///
    /// let mut config = EspressoConfig::default();
    /// config.single_expand = true;
    /// let esp = Espresso::new(3, 1, &config);
    /// assert_eq!(esp.num_inputs(), 3);
    /// ```
    pub fn new(num_inputs: usize, num_outputs: usize, config: &EspressoConfig) -> Self {
        Espresso {
            descriptor: Descriptor::with_output(num_inputs, num_outputs),
            config: config.clone(),
        }
    }

    /// Get the number of inputs for this Espresso instance
    pub fn num_inputs(&self) -> usize {
        self.descriptor.n_binary
    }

    /// Get the number of outputs for this Espresso instance
    pub fn num_outputs(&self) -> usize {
        self.descriptor
            .output
            .map(|v| self.descriptor.part_size[v])
            .unwrap_or(0)
    }

    /// Get the configuration of this Espresso instance
    pub fn config(&self) -> &EspressoConfig {
        &self.config
    }

    fn default_d_r(
        &self,
        f: &EspressoCover,
        d: Option<&EspressoCover>,
        r: Option<&EspressoCover>,
    ) -> (core::Cover, core::Cover) {
        let d_cubes = d.map(|c| c.cubes.clone()).unwrap_or_default();
        let r_cubes = r.map(|c| c.cubes.clone()).unwrap_or_else(|| {
            let list = crate::core::CubeList::top_level(&self.descriptor, f.cubes.clone());
            crate::core::tautology::complement(&self.descriptor, &list)
        });
        (d_cubes, r_cubes)
    }

    /// Minimize a boolean function using the Espresso algorithm
    ///
    /// Takes the ON-set (F), optional don't-care set (D), and optional OFF-set (R),
    /// and returns minimized versions of all three covers plus a phase-by-phase
    /// cost trace.
    ///
    /// # Examples
    ///
    /// ```
    /// use espresso_min::espresso::{Espresso, EspressoCover, CubeType};
    /// use espresso_min::EspressoConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let esp = Espresso::new(2, 1, &EspressoConfig::default());
    /// let cubes = [(&[0, 1][..], &[1][..]), (&[1, 0][..], &[1][..])];
    /// let f = EspressoCover::from_cubes(&cubes, 2, 1)?;
    ///
    /// let (minimized, _d, _r, _stats) = esp.minimize(&f, None, None)?;
    /// println!("Result: {} cubes", minimized.to_cubes(2, 1, CubeType::F).len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn minimize(
        &self,
        f: &EspressoCover,
        d: Option<&EspressoCover>,
        r: Option<&EspressoCover>,
    ) -> Result<(EspressoCover, EspressoCover, EspressoCover, MinimizeStats), MinimizationError> {
        let (d_cubes, r_cubes) = self.default_d_r(f, d, r);
        let opts: Options = (&self.config).into();
        let mut phases = Vec::new();
        let result = espresso_core::espresso_instrumented(
            &self.descriptor,
            &f.cubes,
            &d_cubes,
            &r_cubes,
            &opts,
            &mut phases,
        )?;
        Ok((
            EspressoCover {
                cubes: result,
                descriptor: Arc::clone(&self.descriptor),
            },
            EspressoCover {
                cubes: d_cubes,
                descriptor: Arc::clone(&self.descriptor),
            },
            EspressoCover {
                cubes: r_cubes,
                descriptor: Arc::clone(&self.descriptor),
            },
            phases.into(),
        ))
    }

    /// Minimize a boolean function using exact minimization
    ///
    /// Guarantees a minimum-cube-count result by solving the unate covering
    /// problem, unlike the heuristic [`Espresso::minimize`].
    ///
    /// # Examples
    ///
    /// ```
    /// use espresso_min::espresso::{Espresso, EspressoCover, CubeType};
    /// use espresso_min::EspressoConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let esp = Espresso::new(2, 1, &EspressoConfig::default());
    /// let cubes = [(&[0, 1][..], &[1][..]), (&[1, 0][..], &[1][..])];
    /// let f = EspressoCover::from_cubes(&cubes, 2, 1)?;
    ///
    /// let (minimized, _d, _r) = esp.minimize_exact(&f, None, None)?;
    /// println!("Exact result: {} cubes", minimized.to_cubes(2, 1, CubeType::F).len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn minimize_exact(
        &self,
        f: &EspressoCover,
        d: Option<&EspressoCover>,
        r: Option<&EspressoCover>,
    ) -> Result<(EspressoCover, EspressoCover, EspressoCover), MinimizationError> {
        let (d_cubes, r_cubes) = self.default_d_r(f, d, r);
        let result = espresso_core::minimize_exact(&self.descriptor, &f.cubes, &d_cubes, &r_cubes, true)?;
        Ok((
            EspressoCover {
                cubes: result,
                descriptor: Arc::clone(&self.descriptor),
            },
            EspressoCover {
                cubes: d_cubes,
                descriptor: Arc::clone(&self.descriptor),
            },
            EspressoCover {
                cubes: r_cubes,
                descriptor: Arc::clone(&self.descriptor),
            },
        ))
    }
}
