//! Circuit puzzle: rotate path nodes between a source and a target.
//!
//! `verify` does not trace a connection through the grid; any arrangement is
//! accepted and awards [`AWARD`]. Nodes carry only a rotation, with no pipe
//! shape to trace against.

use std::time::Duration;

pub const GRID_SIZE: usize = 3;
pub const AWARD: u64 = 50;
pub const FEEDBACK: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Source,
    Path,
    Target,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// Degrees, one of 0/90/180/270. Always 0 for source and target.
    pub rotation: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogicCircuit {
    nodes: Vec<Node>,
}

impl Default for LogicCircuit {
    fn default() -> Self {
        let last = GRID_SIZE * GRID_SIZE - 1;
        let nodes = (0..=last)
            .map(|i| Node {
                kind: match i {
                    0 => NodeKind::Source,
                    i if i == last => NodeKind::Target,
                    _ => NodeKind::Path,
                },
                rotation: 0,
            })
            .collect();
        Self { nodes }
    }
}

impl LogicCircuit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Turns a path node by 90 degrees. Returns false for other nodes.
    pub fn rotate(&mut self, index: usize) -> bool {
        match self.nodes.get_mut(index) {
            Some(node) if node.kind == NodeKind::Path => {
                node.rotation = (node.rotation + 90) % 360;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            node.rotation = 0;
        }
    }

    pub fn verify(&self) -> u64 {
        AWARD
    }
}
