//! Example: Minimizing an XOR function
//!
//! This example shows how to minimize a 2-input XOR function
//! which is a classic example in Boolean logic.

use espresso_min::{Cover, CoverType, Minimizable};

fn main() -> std::io::Result<()> {
    println!("=== XOR Function Minimization ===\n");

    // XOR truth table:
    // A B | F
    // ----+---
    // 0 0 | 0
    // 0 1 | 1  <- ON-set
    // 1 0 | 1  <- ON-set
    // 1 1 | 0

    println!("Minimizing 2-input XOR function: F = A ⊕ B");
    println!("Truth table:");
    println!("  A B | F");
    println!("  ----+---");
    println!("  0 0 | 0");
    println!("  0 1 | 1");
    println!("  1 0 | 1");
    println!("  1 1 | 0");
    println!();

    let mut cover = Cover::new(CoverType::F);
    cover.add_cube(&[Some(false), Some(true)], &[Some(true)]); // 01 -> 1
    cover.add_cube(&[Some(true), Some(false)], &[Some(true)]); // 10 -> 1

    println!("Input cover has {} cubes", cover.num_cubes());

    println!("\nMinimizing...");
    let minimized = cover.minimize()?;

    println!("Minimized cover has {} cubes", minimized.num_cubes());
    println!("\nNote: XOR cannot be reduced to a single product term,");
    println!("so the minimized form should still have 2 cubes.");
    Ok(())
}
