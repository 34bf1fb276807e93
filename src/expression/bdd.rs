//! Reduced, ordered binary decision diagrams used as the canonical form for
//! [`BoolExpr`] equivalence checking and DNF extraction.
//!
//! Grounded on the ROBDD construction in `manager.rs`: every `Bdd` owns its
//! node table outright, so two BDDs built independently (e.g. `Bdd::variable`
//! called twice) are merged on demand via [`BddManager::import`] rather than
//! sharing a process-wide table.

use super::manager::{BddManager, NodeId, FALSE_NODE, TRUE_NODE};
use super::{BoolExpr, BoolExprInner};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, RwLock};

/// A binary decision diagram over named boolean variables.
///
/// Two `Bdd`s compare equal exactly when they represent the same boolean
/// function, regardless of which expression built them or which order their
/// variables were first introduced in.
pub struct Bdd {
    manager: Arc<RwLock<BddManager>>,
    root: NodeId,
}

impl Bdd {
    /// The constant `true` or `false` function.
    pub fn constant(value: bool) -> Self {
        Bdd {
            manager: Arc::new(RwLock::new(BddManager::new())),
            root: if value { TRUE_NODE } else { FALSE_NODE },
        }
    }

    /// A single named variable.
    pub fn variable(name: &str) -> Self {
        let mut manager = BddManager::new();
        let var = manager.get_or_create_var(name);
        let root = manager.make_node(var, FALSE_NODE, TRUE_NODE);
        Bdd {
            manager: Arc::new(RwLock::new(manager)),
            root,
        }
    }

    /// Logical negation.
    pub fn not(&self) -> Self {
        let mut manager = self.manager.write().unwrap();
        let root = manager.ite(self.root, FALSE_NODE, TRUE_NODE);
        drop(manager);
        Bdd {
            manager: Arc::clone(&self.manager),
            root,
        }
    }

    /// Logical AND.
    pub fn and(&self, other: &Bdd) -> Self {
        self.combine(other, |manager, f, g| manager.ite(f, g, FALSE_NODE))
    }

    /// Logical OR.
    pub fn or(&self, other: &Bdd) -> Self {
        self.combine(other, |manager, f, g| manager.ite(f, TRUE_NODE, g))
    }

    fn combine(&self, other: &Bdd, op: impl FnOnce(&mut BddManager, NodeId, NodeId) -> NodeId) -> Self {
        let mut manager = self.manager.write().unwrap();
        let other_root = if Arc::ptr_eq(&self.manager, &other.manager) {
            other.root
        } else {
            let other_manager = other.manager.read().unwrap();
            let mut cache = HashMap::new();
            manager.import(&other_manager, other.root, &mut cache)
        };
        let root = op(&mut manager, self.root, other_root);
        drop(manager);
        Bdd {
            manager: Arc::clone(&self.manager),
            root,
        }
    }

    /// Number of distinct decision/terminal nodes reachable from the root.
    pub fn node_count(&self) -> usize {
        let manager = self.manager.read().unwrap();
        let mut visited = HashSet::new();
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            if let Some(super::manager::BddNode::Decision { low, high, .. }) = manager.get_node(node) {
                stack.push(*low);
                stack.push(*high);
            }
        }
        visited.len()
    }

    pub(crate) fn is_true(&self) -> bool {
        self.root == TRUE_NODE
    }

    pub(crate) fn is_false(&self) -> bool {
        self.root == FALSE_NODE
    }

    /// Extract the sum-of-products cubes (one map per root-to-true path).
    pub fn to_cubes(&self) -> Vec<BTreeMap<Arc<str>, bool>> {
        let manager = self.manager.read().unwrap();
        let mut cubes = Vec::new();
        let mut path = BTreeMap::new();
        collect_cubes(&manager, self.root, &mut path, &mut cubes);
        cubes
    }
}

fn collect_cubes(
    manager: &BddManager,
    node: NodeId,
    path: &mut BTreeMap<Arc<str>, bool>,
    out: &mut Vec<BTreeMap<Arc<str>, bool>>,
) {
    match manager.get_node(node).expect("dangling BDD node id") {
        super::manager::BddNode::Terminal(true) => out.push(path.clone()),
        super::manager::BddNode::Terminal(false) => {}
        super::manager::BddNode::Decision { var, low, high } => {
            let name = Arc::clone(manager.var_name(*var).expect("unregistered variable id"));
            path.insert(Arc::clone(&name), false);
            collect_cubes(manager, *low, path, out);
            path.insert(Arc::clone(&name), true);
            collect_cubes(manager, *high, path, out);
            path.remove(&name);
        }
    }
}

fn build(manager: &mut BddManager, inner: &BoolExprInner) -> NodeId {
    match inner {
        BoolExprInner::Constant(value) => {
            if *value {
                TRUE_NODE
            } else {
                FALSE_NODE
            }
        }
        BoolExprInner::Variable(name) => {
            let var = manager.get_or_create_var(name);
            manager.make_node(var, FALSE_NODE, TRUE_NODE)
        }
        BoolExprInner::Not(expr) => {
            let inner = build(manager, expr.inner());
            manager.ite(inner, FALSE_NODE, TRUE_NODE)
        }
        BoolExprInner::And(left, right) => {
            let l = build(manager, left.inner());
            let r = build(manager, right.inner());
            manager.ite(l, r, FALSE_NODE)
        }
        BoolExprInner::Or(left, right) => {
            let l = build(manager, left.inner());
            let r = build(manager, right.inner());
            manager.ite(l, TRUE_NODE, r)
        }
    }
}

impl From<&BoolExpr> for Bdd {
    fn from(expr: &BoolExpr) -> Self {
        let mut manager = BddManager::new();
        let root = build(&mut manager, expr.inner());
        Bdd {
            manager: Arc::new(RwLock::new(manager)),
            root,
        }
    }
}

impl From<BoolExpr> for Bdd {
    fn from(expr: BoolExpr) -> Self {
        Bdd::from(&expr)
    }
}

impl PartialEq for Bdd {
    fn eq(&self, other: &Bdd) -> bool {
        if Arc::ptr_eq(&self.manager, &other.manager) {
            return self.root == other.root;
        }
        let mut manager = self.manager.read().unwrap().clone();
        let other_manager = other.manager.read().unwrap();
        let mut cache = HashMap::new();
        let imported = manager.import(&other_manager, other.root, &mut cache);
        imported == self.root
    }
}

impl Eq for Bdd {}

impl Clone for Bdd {
    fn clone(&self) -> Self {
        Bdd {
            manager: Arc::clone(&self.manager),
            root: self.root,
        }
    }
}

impl std::fmt::Debug for Bdd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bdd(nodes={})", self.node_count())
    }
}
