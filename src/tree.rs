//! Huffman tree construction from a frequency table.
//!
//! The tree is a transient build artifact: it exists only long enough to
//! derive a codebook, then is dropped. Nodes live in an arena (`Vec`)
//! addressed by index, so teardown is a single allocation free and
//! traversal never recurses.
//!
//! # Determinism
//!
//! The compressor and decompressor each rebuild the tree independently
//! from the same frequency table, so construction must be bit-for-bit
//! deterministic. The priority queue orders nodes by `(weight, seq)`,
//! where `seq` is an insertion sequence number: leaves are seeded in
//! table index order, and every merged node takes the next number. Among
//! equal weights the earliest-inserted node is extracted first, and the
//! first node extracted in a merge becomes the left (0-bit) child.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::frequency::FrequencyTable;

/// Index of a node within the tree's arena.
pub(crate) type NodeId = usize;

#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    /// Terminal node carrying the byte value it encodes
    Leaf(u8),
    /// Interior node with exactly two children
    Internal { left: NodeId, right: NodeId },
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Sum of descendant leaf counts
    pub weight: u64,
    pub kind: NodeKind,
}

/// Binary prefix-code tree over the byte alphabet.
///
/// # Invariants
/// - With N present symbols, exactly N leaves and N-1 internal nodes
/// - Single-owner: the arena owns every node; no external references
#[derive(Debug)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build a tree by greedy merge of the two lightest nodes.
    ///
    /// Returns `None` when the table has no present symbols (empty
    /// input); a single present symbol yields a lone leaf as root.
    pub fn build(table: &FrequencyTable) -> Option<Self> {
        let mut nodes: Vec<Node> = Vec::with_capacity(table.distinct().saturating_mul(2));
        let mut heap = BinaryHeap::with_capacity(table.distinct());

        for (seq, (byte, weight)) in table.symbols().enumerate() {
            let id = nodes.len();
            nodes.push(Node {
                weight,
                kind: NodeKind::Leaf(byte),
            });
            heap.push(Reverse((weight, seq as u32, id)));
        }

        let mut next_seq = heap.len() as u32;
        while heap.len() > 1 {
            let (Some(Reverse((lw, _, left))), Some(Reverse((rw, _, right)))) =
                (heap.pop(), heap.pop())
            else {
                break;
            };

            // Decoder-side tables are attacker-controlled and may carry
            // counts near u64::MAX; saturate instead of overflowing.
            let weight = lw.saturating_add(rw);
            let id = nodes.len();
            nodes.push(Node {
                weight,
                kind: NodeKind::Internal { left, right },
            });
            heap.push(Reverse((weight, next_seq, id)));
            next_seq += 1;
        }

        let Reverse((_, _, root)) = heap.pop()?;
        Some(Self { nodes, root })
    }

    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Number of leaves (present symbols).
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Leaf(_)))
            .count()
    }

    /// Total number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Weight of the root (equals the counted input length).
    pub fn total_weight(&self) -> u64 {
        self.nodes[self.root].weight
    }
}
