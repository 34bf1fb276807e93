//! Tree folds over [`BoolExpr`] for custom analyses without exposing
//! [`BoolExprInner`] itself.

use super::{BoolExpr, BoolExprInner};

/// One level of expression structure, yielded by [`BoolExpr::fold`] and
/// [`BoolExpr::fold_with_context`].
///
/// - With `fold`, `T` is the accumulated result from child nodes (bottom-up).
/// - With `fold_with_context`, `T` is always `()`; context flows top-down instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    Variable(&'a str),
    And(T, T),
    Or(T, T),
    Not(T),
    Constant(bool),
}

impl BoolExpr {
    /// Fold the expression tree depth-first from leaves to root.
    ///
    /// ```
    /// use espresso_min::{BoolExpr, ExprNode};
    ///
    /// let a = BoolExpr::variable("a");
    /// let b = BoolExpr::variable("b");
    /// let expr = a.and(&b);
    ///
    /// let op_count = expr.fold(|node| match node {
    ///     ExprNode::Variable(_) | ExprNode::Constant(_) => 0,
    ///     ExprNode::And(l, r) | ExprNode::Or(l, r) => l + r + 1,
    ///     ExprNode::Not(inner) => inner + 1,
    /// });
    ///
    /// assert_eq!(op_count, 1);
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(ExprNode<T>) -> T + Copy,
    {
        fold_inner(self.inner(), &f)
    }

    /// Fold with a context value threaded top-down instead of results
    /// bottom-up. Useful for operations like De Morgan expansion where a
    /// pending negation needs to be pushed into child nodes.
    ///
    /// ```
    /// use espresso_min::{BoolExpr, ExprNode};
    ///
    /// let a = BoolExpr::variable("a");
    /// let b = BoolExpr::variable("b");
    /// let expr = a.and(&b).not();
    ///
    /// let max_depth = expr.fold_with_context(0, |node, depth, recurse_left, recurse_right| match node {
    ///     ExprNode::Variable(_) | ExprNode::Constant(_) => depth,
    ///     ExprNode::Not(_) => recurse_left(depth + 1),
    ///     ExprNode::And(_, _) | ExprNode::Or(_, _) => {
    ///         recurse_left(depth + 1).max(recurse_right(depth + 1))
    ///     }
    /// });
    /// assert_eq!(max_depth, 2);
    /// ```
    pub fn fold_with_context<C, T, F>(&self, context: C, f: F) -> T
    where
        C: Copy,
        F: Fn(ExprNode<()>, C, &dyn Fn(C) -> T, &dyn Fn(C) -> T) -> T + Copy,
    {
        fold_with_context_inner(self.inner(), context, &f)
    }
}

fn fold_inner<T, F>(inner: &BoolExprInner, f: &F) -> T
where
    F: Fn(ExprNode<T>) -> T,
{
    match inner {
        BoolExprInner::Variable(name) => f(ExprNode::Variable(name)),
        BoolExprInner::Constant(value) => f(ExprNode::Constant(*value)),
        BoolExprInner::Not(expr) => {
            let result = fold_inner(expr.inner(), f);
            f(ExprNode::Not(result))
        }
        BoolExprInner::And(left, right) => {
            let l = fold_inner(left.inner(), f);
            let r = fold_inner(right.inner(), f);
            f(ExprNode::And(l, r))
        }
        BoolExprInner::Or(left, right) => {
            let l = fold_inner(left.inner(), f);
            let r = fold_inner(right.inner(), f);
            f(ExprNode::Or(l, r))
        }
    }
}

fn fold_with_context_inner<C, T, F>(inner: &BoolExprInner, context: C, f: &F) -> T
where
    C: Copy,
    F: Fn(ExprNode<()>, C, &dyn Fn(C) -> T, &dyn Fn(C) -> T) -> T,
{
    match inner {
        BoolExprInner::Variable(name) => f(ExprNode::Variable(name), context, &|_| unreachable!(), &|_| unreachable!()),
        BoolExprInner::Constant(value) => f(ExprNode::Constant(*value), context, &|_| unreachable!(), &|_| unreachable!()),
        BoolExprInner::Not(expr) => {
            let recurse = |ctx: C| fold_with_context_inner(expr.inner(), ctx, f);
            f(ExprNode::Not(()), context, &recurse, &|_| unreachable!())
        }
        BoolExprInner::And(left, right) => {
            let recurse_left = |ctx: C| fold_with_context_inner(left.inner(), ctx, f);
            let recurse_right = |ctx: C| fold_with_context_inner(right.inner(), ctx, f);
            f(ExprNode::And((), ()), context, &recurse_left, &recurse_right)
        }
        BoolExprInner::Or(left, right) => {
            let recurse_left = |ctx: C| fold_with_context_inner(left.inner(), ctx, f);
            let recurse_right = |ctx: C| fold_with_context_inner(right.inner(), ctx, f);
            f(ExprNode::Or((), ()), context, &recurse_left, &recurse_right)
        }
    }
}
