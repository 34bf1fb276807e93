//! Boolean expression types with operator overloading and parsing support
//!
//! This module provides a boolean expression representation that can be constructed
//! programmatically using operator overloading or parsed from strings. Expressions
//! can be minimized using the Espresso algorithm by implementing the Cover trait.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::ops::{Add, Mul, Not};
use std::sync::Arc;

pub(crate) mod bdd;
mod fold;
mod manager;
mod parser;

pub use bdd::Bdd;
pub use fold::ExprNode;

/// Inner representation of a boolean expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BoolExprInner {
    /// A named variable
    Variable(Arc<str>),
    /// Logical AND of two expressions
    And(BoolExpr, BoolExpr),
    /// Logical OR of two expressions
    Or(BoolExpr, BoolExpr),
    /// Logical NOT of an expression
    Not(BoolExpr),
    /// A constant value (true or false)
    Constant(bool),
}

/// A boolean expression that can be manipulated programmatically
///
/// Uses `Arc` internally for efficient cloning. Provides a fluent method-based API
/// and an `expr!` macro for clean syntax.
///
/// # Examples
///
/// # Examples
///
/// ## Method-based API
/// ```
/// use espresso_min::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let expr = a.and(&b).or(&a.not().and(&b.not()));
/// ```
///
/// ## Using operator overloading (requires explicit &)
/// ```  
/// use espresso_min::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let expr = &a * &b + &(&a).not() * &(&b).not();
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BoolExpr {
    inner: Arc<BoolExprInner>,
}

impl BoolExpr {
    /// Create a variable expression with the given name
    pub fn variable(name: &str) -> Self {
        BoolExpr {
            inner: Arc::new(BoolExprInner::Variable(Arc::from(name))),
        }
    }

    /// Create a constant expression (true or false)
    pub fn constant(value: bool) -> Self {
        BoolExpr {
            inner: Arc::new(BoolExprInner::Constant(value)),
        }
    }

    /// Parse a boolean expression from a string
    ///
    /// Supports standard boolean operators:
    /// - `+` for OR
    /// - `*` for AND  
    /// - `~` or `!` for NOT
    /// - Parentheses for grouping
    /// - Constants: `0`, `1`, `true`, `false`
    pub fn parse(input: &str) -> Result<Self, crate::error::ParseBoolExprError> {
        parser::parse(input).map_err(crate::error::ParseBoolExprError::Parse)
    }

    /// Collect all variables used in this expression in alphabetical order
    ///
    /// Returns a `BTreeSet` which maintains variables in sorted order.
    /// This ordering is used when converting to covers for minimization.
    pub fn collect_variables(&self) -> BTreeSet<Arc<str>> {
        let mut vars = BTreeSet::new();
        self.collect_variables_impl(&mut vars);
        vars
    }

    fn collect_variables_impl(&self, vars: &mut BTreeSet<Arc<str>>) {
        match self.inner.as_ref() {
            BoolExprInner::Variable(name) => {
                vars.insert(Arc::clone(name));
            }
            BoolExprInner::And(left, right) | BoolExprInner::Or(left, right) => {
                left.collect_variables_impl(vars);
                right.collect_variables_impl(vars);
            }
            BoolExprInner::Not(expr) => {
                expr.collect_variables_impl(vars);
            }
            BoolExprInner::Constant(_) => {}
        }
    }

    /// Logical AND: create a new expression that is the conjunction of this and another
    pub fn and(&self, other: &BoolExpr) -> BoolExpr {
        BoolExpr {
            inner: Arc::new(BoolExprInner::And(self.clone(), other.clone())),
        }
    }

    /// Logical OR: create a new expression that is the disjunction of this and another
    pub fn or(&self, other: &BoolExpr) -> BoolExpr {
        BoolExpr {
            inner: Arc::new(BoolExprInner::Or(self.clone(), other.clone())),
        }
    }

    /// Logical NOT: create a new expression that is the negation of this one
    pub fn not(&self) -> BoolExpr {
        BoolExpr {
            inner: Arc::new(BoolExprInner::Not(self.clone())),
        }
    }

    /// Get a reference to the inner expression (internal use)
    pub(crate) fn inner(&self) -> &BoolExprInner {
        &self.inner
    }

    /// Convert to the canonical BDD form used for equivalence checks and
    /// DNF extraction.
    pub fn to_bdd(&self) -> Bdd {
        Bdd::from(self)
    }

    /// Number of distinct nodes in this expression's BDD representation.
    ///
    /// Two logically equivalent but syntactically different expressions can
    /// have different node counts only if they differ in variable order of
    /// first appearance; the BDD itself is otherwise canonical.
    pub fn node_count(&self) -> usize {
        self.to_bdd().node_count()
    }

    /// Whether this expression and `other` compute the same boolean function.
    ///
    /// Both sides convert to their canonical [`Bdd`] form, so the comparison
    /// is independent of how each expression was built.
    ///
    /// ```
    /// use espresso_min::BoolExpr;
    ///
    /// let a = BoolExpr::variable("a");
    /// let b = BoolExpr::variable("b");
    /// assert!(a.and(&b).equivalent_to(&b.and(&a)));
    /// ```
    pub fn equivalent_to(&self, other: &BoolExpr) -> bool {
        self.to_bdd() == other.to_bdd()
    }

    /// Evaluate the expression under a variable assignment.
    ///
    /// Variables absent from `assignment` are treated as `false`.
    ///
    /// ```
    /// use espresso_min::BoolExpr;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let a = BoolExpr::variable("a");
    /// let b = BoolExpr::variable("b");
    /// let expr = a.and(&b);
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("a"), true);
    /// assignment.insert(Arc::from("b"), true);
    /// assert_eq!(expr.evaluate(&assignment), true);
    ///
    /// assignment.insert(Arc::from("b"), false);
    /// assert_eq!(expr.evaluate(&assignment), false);
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        evaluate_inner(self.inner(), assignment)
    }

    /// Minimize this boolean expression using Espresso
    ///
    /// This is a convenience method that routes through [`crate::cover::Dnf`]
    /// and the underlying minimizer, returning a new, simplified expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use espresso_min::{BoolExpr, expr, Minimizable};
    ///
    /// # fn main() -> std::io::Result<()> {
    /// let a = BoolExpr::variable("a");
    /// let b = BoolExpr::variable("b");
    /// let c = BoolExpr::variable("c");
    ///
    /// // Redundant expression
    /// let expr = expr!(a * b + a * b * c);
    ///
    /// // Minimize it
    /// let minimized = expr.minimize()?;
    ///
    /// // minimized should be simpler (just a * b)
    /// # Ok(())
    /// # }
    /// ```
    pub fn minimize(&self) -> std::io::Result<BoolExpr> {
        use crate::Minimizable;
        Ok(Minimizable::minimize(self)?)
    }
}


fn evaluate_inner(inner: &BoolExprInner, assignment: &HashMap<Arc<str>, bool>) -> bool {
    match inner {
        BoolExprInner::Variable(name) => assignment.get(name.as_ref()).copied().unwrap_or(false),
        BoolExprInner::Constant(value) => *value,
        BoolExprInner::Not(expr) => !evaluate_inner(expr.inner(), assignment),
        BoolExprInner::And(left, right) => {
            evaluate_inner(left.inner(), assignment) && evaluate_inner(right.inner(), assignment)
        }
        BoolExprInner::Or(left, right) => {
            evaluate_inner(left.inner(), assignment) || evaluate_inner(right.inner(), assignment)
        }
    }
}

/// Context for formatting expressions with minimal parentheses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None,
    And,
    Or,
    Not,
}

fn fmt_with_context(f: &mut fmt::Formatter<'_>, inner: &BoolExprInner, ctx: OpContext) -> fmt::Result {
    match inner {
        BoolExprInner::Variable(name) => write!(f, "{}", name),
        BoolExprInner::Constant(val) => write!(f, "{}", if *val { "1" } else { "0" }),

        BoolExprInner::And(left, right) => {
            let needs_parens = ctx == OpContext::Not;
            if needs_parens {
                write!(f, "(")?;
            }
            fmt_with_context(f, left.inner(), OpContext::And)?;
            write!(f, " * ")?;
            fmt_with_context(f, right.inner(), OpContext::And)?;
            if needs_parens {
                write!(f, ")")?;
            }
            Ok(())
        }

        BoolExprInner::Or(left, right) => {
            let needs_parens = ctx == OpContext::And || ctx == OpContext::Not;
            if needs_parens {
                write!(f, "(")?;
            }
            fmt_with_context(f, left.inner(), OpContext::Or)?;
            write!(f, " + ")?;
            fmt_with_context(f, right.inner(), OpContext::Or)?;
            if needs_parens {
                write!(f, ")")?;
            }
            Ok(())
        }

        BoolExprInner::Not(expr) => {
            write!(f, "~")?;
            match expr.inner() {
                BoolExprInner::Variable(_) | BoolExprInner::Constant(_) | BoolExprInner::Not(_) => {
                    fmt_with_context(f, expr.inner(), OpContext::Not)
                }
                _ => {
                    write!(f, "(")?;
                    fmt_with_context(f, expr.inner(), OpContext::None)?;
                    write!(f, ")")
                }
            }
        }
    }
}

/// Debug formatting for boolean expressions
///
/// Formats expressions with minimal parentheses based on operator precedence.
/// Uses standard boolean algebra notation: `*` for AND, `+` for OR, `~` for NOT.
///
/// ```
/// use espresso_min::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let c = BoolExpr::variable("c");
/// let expr = a.and(&b).or(&c);
///
/// println!("{:?}", expr);  // Outputs: a * b + c (no unnecessary parentheses)
/// ```
impl fmt::Debug for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_context(f, self.inner(), OpContext::None)
    }
}

/// Display formatting for boolean expressions
///
/// Delegates to the `Debug` implementation. Use `{}` or `{:?}` interchangeably.
impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// Operator overloading
// Implemented for both owned and borrowed types
// The expr! macro wraps expressions to enable clean `a * b + !a * !b` syntax

/// Logical AND operator for references: `&a * &b`
impl Mul for &BoolExpr {
    type Output = BoolExpr;

    fn mul(self, rhs: &BoolExpr) -> BoolExpr {
        self.and(rhs)
    }
}

/// Logical AND operator: `a * b` (delegates to reference version)
impl Mul for BoolExpr {
    type Output = BoolExpr;

    fn mul(self, rhs: BoolExpr) -> BoolExpr {
        self.and(&rhs)
    }
}

/// Logical OR operator for references: `&a + &b`
impl Add for &BoolExpr {
    type Output = BoolExpr;

    fn add(self, rhs: &BoolExpr) -> BoolExpr {
        self.or(rhs)
    }
}

/// Logical OR operator: `a + b` (delegates to reference version)
impl Add for BoolExpr {
    type Output = BoolExpr;

    fn add(self, rhs: BoolExpr) -> BoolExpr {
        self.or(&rhs)
    }
}

/// Logical NOT operator for references: `!&a`
impl Not for &BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::not(self)
    }
}

/// Logical NOT operator: `!a` (delegates to reference version)
impl Not for BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::not(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_creation() {
        let a = BoolExpr::variable("a");
        let b = BoolExpr::variable("b");
        let a2 = BoolExpr::variable("a");

        // Variables are compared by structure
        assert_eq!(a, a2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_constant_creation() {
        let t = BoolExpr::constant(true);
        let f = BoolExpr::constant(false);

        assert_eq!(t, BoolExpr::constant(true));
        assert_ne!(t, f);
    }

    #[test]
    fn test_method_api() {
        let a = BoolExpr::variable("a");
        let b = BoolExpr::variable("b");

        // Test AND method - no clones in user code!
        let and_expr = a.and(&b);
        match and_expr.inner() {
            BoolExprInner::And(_, _) => {}
            _ => panic!("Expected And expression"),
        }

        // Test OR method - can still use a and b
        let or_expr = a.or(&b);
        match or_expr.inner() {
            BoolExprInner::Or(_, _) => {}
            _ => panic!("Expected Or expression"),
        }

        // Test NOT method
        let not_expr = a.not();
        match not_expr.inner() {
            BoolExprInner::Not(_) => {}
            _ => panic!("Expected Not expression"),
        }
    }

    #[test]
    fn test_complex_expression() {
        let a = BoolExpr::variable("a");
        let b = BoolExpr::variable("b");
        let c = BoolExpr::variable("c");

        // Build complex expression: (a AND b) OR (NOT a AND c)
        let expr = a.and(&b).or(&a.not().and(&c));

        match expr.inner() {
            BoolExprInner::Or(_, _) => {}
            _ => panic!("Expected Or at top level"),
        }
    }

    #[test]
    fn test_collect_variables() {
        let a = BoolExpr::variable("a");
        let b = BoolExpr::variable("b");
        let c = BoolExpr::variable("c");

        // Using method API
        let expr = a.and(&b).or(&c);
        let vars = expr.collect_variables();

        assert_eq!(vars.len(), 3);
        let var_names: Vec<String> = vars.iter().map(|s| s.to_string()).collect();
        assert_eq!(var_names, vec!["a", "b", "c"]); // Should be alphabetical
    }
}
