//! BDD node table: hash-consed decision nodes plus an ITE operation cache.
//!
//! Each [`super::bdd::Bdd`] owns one of these outright (no global singleton) so
//! BDDs never share mutable state across instances; combining two BDDs built
//! from different managers goes through [`BddManager::import`] to re-insert
//! the foreign node graph into the local table first.

use std::collections::HashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

pub(super) type NodeId = usize;
pub(super) type VarId = usize;

pub(super) const FALSE_NODE: NodeId = 0;
pub(super) const TRUE_NODE: NodeId = 1;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(super) enum BddNode {
    Terminal(bool),
    Decision {
        var: VarId,
        low: NodeId,
        high: NodeId,
    },
}

#[derive(Debug, Clone)]
pub(super) struct BddManager {
    nodes: Vec<BddNode>,
    unique_table: HashMap<(VarId, NodeId, NodeId), NodeId>,
    var_to_id: BTreeMap<Arc<str>, VarId>,
    id_to_var: Vec<Arc<str>>,
    ite_cache: HashMap<(NodeId, NodeId, NodeId), NodeId>,
}

impl BddManager {
    pub(super) fn new() -> Self {
        BddManager {
            nodes: vec![BddNode::Terminal(false), BddNode::Terminal(true)],
            unique_table: HashMap::new(),
            var_to_id: BTreeMap::new(),
            id_to_var: Vec::new(),
            ite_cache: HashMap::new(),
        }
    }

    pub(super) fn get_or_create_var(&mut self, name: &str) -> VarId {
        if let Some(&id) = self.var_to_id.get(name) {
            return id;
        }
        let key: Arc<str> = Arc::from(name);
        let id = self.id_to_var.len();
        self.var_to_id.insert(Arc::clone(&key), id);
        self.id_to_var.push(key);
        id
    }

    pub(super) fn var_name(&self, id: VarId) -> Option<&Arc<str>> {
        self.id_to_var.get(id)
    }

    pub(super) fn make_node(&mut self, var: VarId, low: NodeId, high: NodeId) -> NodeId {
        if low == high {
            return low;
        }
        let key = (var, low, high);
        if let Some(&existing) = self.unique_table.get(&key) {
            return existing;
        }
        let node_id = self.nodes.len();
        self.nodes.push(BddNode::Decision { var, low, high });
        self.unique_table.insert(key, node_id);
        node_id
    }

    pub(super) fn get_node(&self, id: NodeId) -> Option<&BddNode> {
        self.nodes.get(id)
    }

    /// If-then-else (Shannon expansion); every other boolean op is expressed via this.
    pub(super) fn ite(&mut self, f: NodeId, g: NodeId, h: NodeId) -> NodeId {
        if f == TRUE_NODE {
            return g;
        }
        if f == FALSE_NODE {
            return h;
        }
        if g == TRUE_NODE && h == FALSE_NODE {
            return f;
        }
        if g == h {
            return g;
        }

        let cache_key = (f, g, h);
        if let Some(&result) = self.ite_cache.get(&cache_key) {
            return result;
        }

        let f_node = self.get_node(f).expect("dangling BDD node id in ite()");
        let g_node = self.get_node(g).expect("dangling BDD node id in ite()");
        let h_node = self.get_node(h).expect("dangling BDD node id in ite()");

        let f_var = Self::node_var(f_node);
        let g_var = Self::node_var(g_node);
        let h_var = Self::node_var(h_node);
        let top_var = f_var.min(g_var).min(h_var);

        let (f_low, f_high) = Self::cofactors(f_node, f_var, top_var, f);
        let (g_low, g_high) = Self::cofactors(g_node, g_var, top_var, g);
        let (h_low, h_high) = Self::cofactors(h_node, h_var, top_var, h);

        let low = self.ite(f_low, g_low, h_low);
        let high = self.ite(f_high, g_high, h_high);

        let result = self.make_node(top_var, low, high);
        self.ite_cache.insert(cache_key, result);
        result
    }

    fn node_var(node: &BddNode) -> VarId {
        match node {
            BddNode::Terminal(_) => usize::MAX,
            BddNode::Decision { var, .. } => *var,
        }
    }

    fn cofactors(node: &BddNode, node_var: VarId, split_var: VarId, node_id: NodeId) -> (NodeId, NodeId) {
        if node_var == split_var {
            match node {
                BddNode::Decision { low, high, .. } => (*low, *high),
                BddNode::Terminal(_) => unreachable!("terminals never match a real split variable"),
            }
        } else {
            (node_id, node_id)
        }
    }

    /// Re-inserts `node` (and everything under it) from `other` into `self`,
    /// mapping variables by name so two managers that each built the same
    /// variable independently still unify to one id.
    pub(super) fn import(&mut self, other: &BddManager, node: NodeId, cache: &mut HashMap<NodeId, NodeId>) -> NodeId {
        if let Some(&mapped) = cache.get(&node) {
            return mapped;
        }
        let mapped = match other.get_node(node).expect("dangling BDD node id in import()") {
            BddNode::Terminal(true) => TRUE_NODE,
            BddNode::Terminal(false) => FALSE_NODE,
            BddNode::Decision { var, low, high } => {
                let name = Arc::clone(
                    other
                        .var_name(*var)
                        .expect("decision node references an unregistered variable"),
                );
                let our_var = self.get_or_create_var(&name);
                let low = *low;
                let high = *high;
                let low = self.import(other, low, cache);
                let high = self.import(other, high, cache);
                self.make_node(our_var, low, high)
            }
        };
        cache.insert(node, mapped);
        mapped
    }
}
