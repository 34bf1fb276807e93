//! # Espresso Logic Minimizer
//!
//! A native Rust port of the Espresso heuristic two-level logic minimizer
//! (Espresso-II), a classic tool from UC Berkeley for minimizing Boolean
//! functions.
//!
//! ## Overview
//!
//! Espresso takes a Boolean function represented as a sum-of-products (cover) and
//! produces a minimal or near-minimal equivalent representation. It's particularly
//! useful for:
//!
//! - Digital logic synthesis
//! - PLA (Programmable Logic Array) minimization
//! - Boolean function simplification
//! - Logic optimization in CAD tools
//!
//! ## API Levels
//!
//! This crate provides **two API levels** to suit different needs:
//!
//! ### High-Level API (Recommended)
//!
//! The high-level API provides easy-to-use abstractions with automatic resource management:
//!
//! - **[`BoolExpr`]** - Boolean expressions with parsing, operators, and the `expr!` macro
//! - **[`Cover`]** - Dynamic covers with automatic dimension management
//! - **[`PLAReader`]** and **[`PLAWriter`]** traits - File I/O for PLA format
//!
//! ### Low-Level API (Advanced)
//!
//! The low-level [`espresso`] module provides direct access to the minimization
//! engine without `Cover`'s label/dimension bookkeeping:
//!
//! - **[`espresso::Espresso`]** - A minimizer configured for one fixed set of dimensions
//! - **[`espresso::EspressoCover`]** - A cover tied to that same fixed dimension
//!
//! **When to use:**
//! - **Access to intermediate covers** - Get ON-set (F), don't-care (D), and OFF-set (R) separately
//! - **Custom don't-care/off-sets** - Provide your own D and R covers to `minimize()`
//! - **Explicit instance control** - Hold onto an `Espresso` configured for one set of
//!   dimensions while another, differently-dimensioned `Espresso` is also in scope
//!
//! **Note:** Algorithm configuration via [`EspressoConfig`] works with **both** APIs -
//! it's not a reason to use the low-level API. Distinct [`espresso::Espresso`] instances
//! never share state, regardless of their dimensions, so there are no constraints on
//! mixing instances of different sizes on one thread or across threads.
//!
//! See the [`espresso`] module documentation for detailed usage.
//!
//! ## Three Ways to Use the High-Level API
//!
//! ### 1. Boolean Expressions (Recommended for most use cases)
//!
//! The `expr!` macro provides three convenient styles:
//!
//! ```
//! use espresso_min::{BoolExpr, expr, Minimizable};
//!
//! # fn main() -> std::io::Result<()> {
//! // Style 1: String literals (most concise - no declarations!)
//! let xor = expr!("a" * !"b" + !"a" * "b");
//! println!("{}", xor);  // Output: a * ~b + ~a * b (minimal parentheses!)
//!
//! // Style 2: Existing BoolExpr variables
//! let a = BoolExpr::variable("a");
//! let b = BoolExpr::variable("b");
//! let c = BoolExpr::variable("c");
//! let redundant = expr!(a * b + a * b * c);
//!
//! // Minimize it (returns a new minimized expression)
//! let minimized = redundant.minimize()?;
//! println!("Minimized: {}", minimized);  // Output: a * b
//!
//! // Check logical equivalence (create new instance for comparison)
//! let redundant2 = expr!(a * b + a * b * c);
//! assert!(redundant2.equivalent_to(&minimized));
//! # Ok(())
//! # }
//! ```
//!
//! Parse expressions from strings:
//!
//! ```
//! use espresso_min::{BoolExpr, Minimizable};
//!
//! # fn main() -> std::io::Result<()> {
//! // Parse using standard operators: +, *, ~, ! (or & and |)
//! let expr = BoolExpr::parse("a * b + ~a * ~b")?;
//!
//! // All expressions ARE BDDs internally
//! println!("BDD nodes: {}", expr.node_count());
//!
//! // Minimize
//! let minimized = expr.minimize()?;
//! # Ok(())
//! # }
//! ```
//!
//! #### Using Cover with Expressions
//!
//! For advanced use cases, the `Cover` type provides direct access to the cover
//! representation and supports adding expressions:
//!
//! ```
//! use espresso_min::{BoolExpr, Cover, CoverType, Minimizable};
//!
//! # fn main() -> std::io::Result<()> {
//! let a = BoolExpr::variable("a");
//! let b = BoolExpr::variable("b");
//! let expr = a.and(&b).or(&a.and(&b.not()));
//!
//! // Create cover and add expression
//! let mut cover = Cover::new(CoverType::F);
//! cover.add_expr(&expr, "output")?;
//!
//! // Access cover properties
//! println!("Input variables: {:?}", cover.input_labels());
//! println!("Number of cubes: {}", cover.num_cubes());
//!
//! // Minimize the cover
//! cover = cover.minimize()?;
//!
//! // Convert back to expression
//! let minimized = cover.to_expr("output")?;
//! println!("Minimized: {}", minimized);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Manual Cube Construction
//!
//! Build covers by manually adding cubes (dimensions grow automatically):
//!
//! ```
//! use espresso_min::{Cover, CoverType, Minimizable};
//!
//! # fn main() -> std::io::Result<()> {
//! // Create a cover (dimensions grow automatically)
//! let mut cover = Cover::new(CoverType::F);
//!
//! // Build the ON-set (truth table)
//! cover.add_cube(&[Some(false), Some(true)], &[Some(true)]);  // 01 -> 1
//! cover.add_cube(&[Some(true), Some(false)], &[Some(true)]);  // 10 -> 1
//!
//! // Minimize (returns new instance)
//! cover = cover.minimize()?;
//!
//! // Iterate over minimized cubes
//! for (inputs, outputs) in cover.cubes_iter() {
//!     println!("Cube: {:?} -> {:?}", inputs, outputs);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. PLA Files (Dynamic dimensions from files)
//!
//! Load and minimize PLA files:
//!
//! ```
//! use espresso_min::{Cover, CoverType, Minimizable, PLAReader, PLAWriter};
//! # use std::io::Write;
//!
//! # fn main() -> std::io::Result<()> {
//! # let mut temp = tempfile::NamedTempFile::new()?;
//! # temp.write_all(b".i 2\n.o 1\n.p 1\n01 1\n.e\n")?;
//! # temp.flush()?;
//! # let input_path = temp.path();
//! // Read from PLA file (PLAReader trait)
//! let mut cover = Cover::from_pla_file(input_path)?;
//!
//! // Minimize
//! cover = cover.minimize()?;
//!
//! # let output_file = tempfile::NamedTempFile::new()?;
//! # let output_path = output_file.path();
//! // Write to PLA file (PLAWriter trait)
//! cover.to_pla_file(output_path, CoverType::F)?;
//!
//! // Or write directly to any Write implementation
//! use std::io::{Write, BufReader};
//! let mut buffer = Vec::new();
//! cover.write_pla(&mut buffer, CoverType::F)?;
//!
//! // Similarly, you can read from any BufRead implementation
//! let reader = BufReader::new(buffer.as_slice());
//! let cover2 = Cover::from_pla_reader(reader)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Cover Types
//!
//! The library supports different cover types for representing Boolean functions:
//!
//! - **F Type** - ON-set only (specifies where output is 1)
//! - **FD Type** - ON-set + Don't-cares (most flexible)
//! - **FR Type** - ON-set + OFF-set (specifies both 1s and 0s)
//! - **FDR Type** - ON-set + Don't-cares + OFF-set (complete specification)
//!
//! ```
//! use espresso_min::{Cover, CoverType};
//!
//! # fn main() -> std::io::Result<()> {
//! // F type (ON-set only)
//! let mut f_cover = Cover::new(CoverType::F);
//! f_cover.add_cube(&[Some(true), Some(true)], &[Some(true)]);
//!
//! // FD type (ON-set + Don't-cares)
//! let mut fd_cover = Cover::new(CoverType::FD);
//! fd_cover.add_cube(&[Some(true), Some(true)], &[Some(true)]);  // ON
//! fd_cover.add_cube(&[Some(false), Some(false)], &[None]);      // Don't-care
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety and Concurrency
//!
//! Every [`Cover`] and every [`espresso::Espresso`] instance owns its data outright;
//! nothing in this crate holds global or thread-local mutable state. Minimizing on
//! several threads concurrently, including with different dimensions on each thread,
//! needs no synchronization:
//!
//! ```
//! use espresso_min::{Cover, CoverType, Minimizable};
//! use std::thread;
//!
//! # fn main() -> std::io::Result<()> {
//! let handles: Vec<_> = (0..4).map(|_| {
//!     thread::spawn(move || {
//!         let mut cover = Cover::new(CoverType::F);
//!         cover.add_cube(&[Some(false), Some(true)], &[Some(true)]);
//!         cover.add_cube(&[Some(true), Some(false)], &[Some(true)]);
//!         cover = cover.minimize()?;
//!         Ok(cover.num_cubes())
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     let result: std::io::Result<usize> = handle.join().unwrap();
//!     println!("Result: {} cubes", result?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Using the Low-Level API (Advanced)
//!
//! For direct access to the ON/don't-care/OFF-set covers, use the [`espresso`]
//! module directly:
//!
//! ```
//! use espresso_min::espresso::{Espresso, EspressoCover, CubeType};
//! use espresso_min::EspressoConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Explicit instance creation with custom config
//! let mut config = EspressoConfig::default();
//! config.single_expand = true;  // Faster, lower-quality mode
//! let esp = Espresso::new(2, 1, &config);
//!
//! // Create cover with raw cube data
//! let cubes = [
//!     (&[0, 1][..], &[1][..]),  // 01 -> 1
//!     (&[1, 0][..], &[1][..]),  // 10 -> 1
//! ];
//! let cover = EspressoCover::from_cubes(&cubes, 2, 1)?;
//!
//! // Minimize and get all three covers (F, D, R) plus a per-phase cost trace
//! let (f_result, d_result, r_result, stats) = esp.minimize(&cover, None, None)?;
//!
//! println!("ON-set: {} cubes", f_result.to_cubes(2, 1, CubeType::F).len());
//! println!("Don't-care: {} cubes", d_result.to_cubes(2, 1, CubeType::F).len());
//! println!("OFF-set: {} cubes", r_result.to_cubes(2, 1, CubeType::F).len());
//! println!("schedule phases recorded: {}", stats.phases.len());
//! # Ok(())
//! # }
//! ```
//!
//! See the [`espresso`] module documentation for more on the low-level API, including
//! how distinct instances with different dimensions coexist freely.

// Public modules
pub mod core;
pub mod cover;
pub mod error;
pub mod espresso;
pub mod expression;
pub mod pla;

// Re-export high-level public API
pub use cover::{Cover, CoverType, Cube, CubeType, Dnf, Minimizable};
pub use error::{
    AddExprError, CoverError, CubeError, ExpressionParseError, MinimizationError, PLAError,
    PLAReadError, PLAWriteError, ParseBoolExprError, ToExprError,
};
pub use espresso::EspressoConfig;
pub use expression::{Bdd, BoolExpr, ExprNode};
pub use pla::{PLAReader, PLAWriter};

// Re-export procedural macro
pub use espresso_min_macros::expr;
