//! Equation trees and their random construction.
//!
//! ## Construction rule
//!
//! Each call knows the remaining `depth` and how many nodes the tree already
//! holds. A node becomes an operation when fewer than two nodes exist so far
//! (so no problem is ever a bare number), or when `depth > 0` and a fair coin
//! says so. Otherwise it is a number leaf.
//!
//! The running count threads left-to-right through binary nodes: the right
//! child sees every node the left child created. Each recursive call returns
//! `(subtree, node_count)` so the count never needs a second walk.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::practice_engine::{
    models::{Arity, Operation, Requirements},
    numbers::generate_number,
};

/// Fewer nodes than this in the tree so far forces an operation.
const MIN_NODES_BEFORE_LEAF: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EquationNode {
    Number {
        value: f64,
    },
    Unary {
        op: Operation,
        operand: Box<EquationNode>,
    },
    Binary {
        op: Operation,
        left: Box<EquationNode>,
        right: Box<EquationNode>,
    },
}

impl EquationNode {
    pub fn number(value: f64) -> Self {
        EquationNode::Number { value }
    }

    pub fn unary(op: Operation, operand: EquationNode) -> Self {
        debug_assert_eq!(op.arity(), Arity::Unary, "{op:?} is not unary");
        EquationNode::Unary { op, operand: Box::new(operand) }
    }

    pub fn binary(op: Operation, left: EquationNode, right: EquationNode) -> Self {
        debug_assert_eq!(op.arity(), Arity::Binary, "{op:?} is not binary");
        EquationNode::Binary { op, left: Box::new(left), right: Box::new(right) }
    }

    /// The operation tag, or `None` for a number leaf.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            EquationNode::Number { .. } => None,
            EquationNode::Unary { op, .. } | EquationNode::Binary { op, .. } => Some(*op),
        }
    }

    /// Children in evaluation order.
    pub fn children(&self) -> Vec<&EquationNode> {
        match self {
            EquationNode::Number { .. } => Vec::new(),
            EquationNode::Unary { operand, .. } => vec![&**operand],
            EquationNode::Binary { left, right, .. } => vec![&**left, &**right],
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Number of operation layers on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            EquationNode::Number { .. } => 0,
            _ => 1 + self.children().iter().map(|c| c.depth()).max().unwrap_or(0),
        }
    }

    /// Every operation tag in the tree, pre-order.
    pub fn operations(&self) -> Vec<Operation> {
        let mut out = Vec::new();
        self.collect_operations(&mut out);
        out
    }

    fn collect_operations(&self, out: &mut Vec<Operation>) {
        if let Some(op) = self.operation() {
            out.push(op);
        }
        for child in self.children() {
            child.collect_operations(out);
        }
    }

    /// Every number leaf, left to right.
    pub fn leaves(&self) -> Vec<f64> {
        match self {
            EquationNode::Number { value } => vec![*value],
            _ => self.children().iter().flat_map(|c| c.leaves()).collect(),
        }
    }
}

/// Build a random equation tree for `requirements`.
///
/// Assumes a non-empty operation set; validate at the boundary.
pub fn build_tree<R: Rng>(rng: &mut R, requirements: &Requirements) -> EquationNode {
    let start_depth = requirements.steps as i32 - 1;
    let (tree, count) = build_subtree(rng, requirements, start_depth, 0);
    trace!(nodes = count, "equation tree built");
    tree
}

/// Returns the subtree and how many nodes it contains.
fn build_subtree<R: Rng>(
    rng: &mut R,
    requirements: &Requirements,
    depth: i32,
    nodes_created: usize,
) -> (EquationNode, usize) {
    let need_more_nodes = nodes_created < MIN_NODES_BEFORE_LEAF;
    // The coin is only flipped when the node is not already forced.
    let make_operation = need_more_nodes || (depth > 0 && rng.gen_bool(0.5));

    if !make_operation {
        let value = generate_number(rng, requirements.magnitude, requirements.significant_figures);
        return (EquationNode::number(value), 1);
    }

    let op = requirements.operations[rng.gen_range(0..requirements.operations.len())];
    trace!(%op, depth, nodes_created, "operation node");

    match op.arity() {
        Arity::Unary => {
            let (operand, n) = build_subtree(rng, requirements, depth - 1, nodes_created + 1);
            (EquationNode::unary(op, operand), 1 + n)
        }
        Arity::Binary => {
            let (left, n_left) = build_subtree(rng, requirements, depth - 1, nodes_created + 1);
            let (right, n_right) =
                build_subtree(rng, requirements, depth - 1, nodes_created + 1 + n_left);
            (EquationNode::binary(op, left, right), 1 + n_left + n_right)
        }
    }
}
