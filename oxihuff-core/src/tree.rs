//! Huffman tree construction.
//!
//! Nodes live in an arena and refer to their children by index. Leaves are
//! created first, in ascending symbol order, and internal nodes are appended
//! as they are formed, so a node's index doubles as its creation sequence.
//!
//! # Tie-break
//!
//! The working set is ordered by `(weight, index)`. Among nodes of equal
//! weight the one created first is removed first. The first node removed in a
//! round becomes the left child (path bit `0`), the second the right child
//! (path bit `1`). The tree shape is therefore a pure function of the
//! frequency table.

use crate::error::{HuffError, Result};
use crate::symbol::Symbol;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

/// Count occurrences of each symbol in one pass.
pub fn count_frequencies<S: Symbol>(symbols: impl IntoIterator<Item = S>) -> BTreeMap<S, u64> {
    let mut frequencies = BTreeMap::new();
    for symbol in symbols {
        *frequencies.entry(symbol).or_insert(0) += 1;
    }
    frequencies
}

/// A node in the Huffman tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<S> {
    /// A leaf holding one symbol.
    Leaf {
        /// The symbol.
        symbol: S,
        /// Occurrence count.
        weight: u64,
    },
    /// An internal node with exactly two children.
    Internal {
        /// Sum of the children's weights.
        weight: u64,
        /// Arena index of the left (`0`) child.
        left: usize,
        /// Arena index of the right (`1`) child.
        right: usize,
    },
}

impl<S> Node<S> {
    /// Weight of the subtree rooted here.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// A Huffman tree built from a frequency table.
#[derive(Debug, Clone)]
pub struct HuffmanTree<S> {
    nodes: Vec<Node<S>>,
    root: usize,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Build a tree from symbol frequencies.
    ///
    /// Fails with [`HuffError::EmptyInput`] when the table is empty. A table
    /// with one symbol yields a single-leaf tree.
    pub fn build(frequencies: &BTreeMap<S, u64>) -> Result<Self> {
        let leaf_count = frequencies.len();
        let mut nodes = Vec::with_capacity((2 * leaf_count).saturating_sub(1));
        let mut heap = BinaryHeap::with_capacity(leaf_count);

        for (&symbol, &weight) in frequencies {
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(Node::Leaf { symbol, weight });
        }

        let root = loop {
            let Some(Reverse((left_weight, left))) = heap.pop() else {
                return Err(HuffError::EmptyInput);
            };
            let Some(Reverse((right_weight, right))) = heap.pop() else {
                break left;
            };

            let weight = left_weight + right_weight;
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(Node::Internal {
                weight,
                left,
                right,
            });
        };

        Ok(Self { nodes, root })
    }

    /// Count symbols and build the tree in one step.
    pub fn from_symbols(symbols: impl IntoIterator<Item = S>) -> Result<Self> {
        Self::build(&count_frequencies(symbols))
    }
}

impl<S> HuffmanTree<S> {
    /// Arena index of the root.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Node at `index`.
    pub fn node(&self, index: usize) -> &Node<S> {
        &self.nodes[index]
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> &[Node<S>] {
        &self.nodes
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Total weight (number of coded symbols).
    pub fn total_weight(&self) -> u64 {
        self.nodes[self.root].weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_frequencies() {
        let freqs = count_frequencies("aaabbc".chars());
        assert_eq!(freqs.get(&'a'), Some(&3));
        assert_eq!(freqs.get(&'b'), Some(&2));
        assert_eq!(freqs.get(&'c'), Some(&1));
        assert_eq!(freqs.len(), 3);
    }

    #[test]
    fn test_empty_table() {
        let freqs: BTreeMap<u8, u64> = BTreeMap::new();
        assert!(matches!(
            HuffmanTree::build(&freqs),
            Err(HuffError::EmptyInput)
        ));
    }

    #[test]
    fn test_single_symbol_tree() {
        let tree = HuffmanTree::from_symbols(b"zzzz".iter().copied()).unwrap();
        assert_eq!(tree.nodes().len(), 1);
        assert_eq!(
            *tree.node(tree.root()),
            Node::Leaf {
                symbol: b'z',
                weight: 4
            }
        );
    }

    #[test]
    fn test_internal_nodes_have_two_children() {
        let tree = HuffmanTree::from_symbols("abracadabra".chars()).unwrap();
        assert_eq!(tree.leaf_count(), 5);
        assert_eq!(tree.nodes().len(), 2 * 5 - 1);
        assert_eq!(tree.total_weight(), 11);

        for node in tree.nodes() {
            if let Node::Internal {
                weight,
                left,
                right,
            } = *node
            {
                assert_ne!(left, right);
                assert_eq!(weight, tree.node(left).weight() + tree.node(right).weight());
            }
        }
    }

    #[test]
    fn test_tie_break_prefers_earlier_nodes() {
        // a:3 b:2 c:1 -> (c, b) merge first, then (a, cb)
        let tree = HuffmanTree::from_symbols("aaabbc".chars()).unwrap();
        let Node::Internal { left, right, .. } = *tree.node(tree.root()) else {
            panic!("root must be internal");
        };
        assert_eq!(*tree.node(left), Node::Leaf { symbol: 'a', weight: 3 });
        let Node::Internal {
            left: cl,
            right: cr,
            ..
        } = *tree.node(right)
        else {
            panic!("right child must be internal");
        };
        assert_eq!(*tree.node(cl), Node::Leaf { symbol: 'c', weight: 1 });
        assert_eq!(*tree.node(cr), Node::Leaf { symbol: 'b', weight: 2 });
    }

    #[test]
    fn test_equal_weights_are_deterministic() {
        let a = HuffmanTree::from_symbols(b"dcbadcba".iter().copied()).unwrap();
        let b = HuffmanTree::from_symbols(b"abcdabcd".iter().copied()).unwrap();
        assert_eq!(a.nodes(), b.nodes());
        assert_eq!(a.root(), b.root());
    }
}
