use crate::{Network, NetworkError, Node};
use rustc_hash::FxHashSet;

/// Builds a consistent [`Network`] from nodes listed in ring order.
///
/// Each node is linked to the one added after it and the last node is linked
/// back to the first. Every workstation is registered. The ring entry is the
/// first node unless another one is named with [`entry`](Self::entry).
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    nodes: Vec<Node>,
    entry: Option<String>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends `node` to the ring.
    pub fn node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn relay(self, name: impl Into<String>) -> Self {
        self.node(Node::relay(name))
    }

    pub fn workstation(self, name: impl Into<String>) -> Self {
        self.node(Node::workstation(name))
    }

    pub fn printer(self, name: impl Into<String>) -> Self {
        self.node(Node::printer(name))
    }

    /// Starts the ring at the node with the given name.
    pub fn entry(mut self, name: impl Into<String>) -> Self {
        self.entry = Some(name.into());
        self
    }

    /// Links the nodes into a ring.
    ///
    /// Fails if there are no nodes, if two nodes share a name, if the entry
    /// is not one of the nodes, or if the ring is not consistent (for example
    /// because it has no printer or no workstation).
    pub fn build(self) -> Result<Network, NetworkError> {
        if self.nodes.is_empty() {
            return Err(NetworkError::EmptyRing);
        }

        let mut network = Network::new();
        let mut names = FxHashSet::default();
        let mut ids = Vec::with_capacity(self.nodes.len());
        for node in self.nodes {
            if !names.insert(node.name().to_string()) {
                return Err(NetworkError::DuplicateName(node.name().to_string()));
            }
            let is_workstation = node.is_workstation();
            let id = network.add_node(node);
            if is_workstation {
                network.register_workstation(id)?;
            }
            ids.push(id);
        }

        for (from, to) in ids.iter().zip(ids.iter().cycle().skip(1)) {
            network.link(*from, *to)?;
        }

        let entry = match self.entry {
            Some(name) => network
                .node_named(&name)
                .ok_or(NetworkError::UnknownEntry(name))?,
            None => ids[0],
        };
        network.set_ring_entry(entry)?;

        if !network.consistent_network() {
            return Err(NetworkError::Inconsistent);
        }
        Ok(network)
    }
}
