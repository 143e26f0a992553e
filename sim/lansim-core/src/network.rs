//! Contains the [`Network`] and the token ring protocols.

use crate::{
    logging::{accounting_event, outcome_event, request_event},
    render,
    report::{write_best_effort, Report},
    Node, NodeId, Packet,
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::Display;
use thiserror::Error as ThisError;

/// The message carried by broadcast packets.
const BROADCAST_MESSAGE: &str = "BROADCAST";

/// A Local Area Network with a token ring architecture.
///
/// Packets are passed from one node to the next until they reach their
/// destination or travel the whole ring. The network owns every node in an
/// arena; nodes refer to their successor by [`NodeId`]. Workstations that may
/// issue requests are registered by name.
///
/// A network made with [`Network::new`] is empty and therefore not
/// [consistent](Network::consistent_network). Requests are only accepted on a
/// consistent network. [`NetworkBuilder`](crate::NetworkBuilder) is the
/// convenient way to get one.
#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: Vec<Node>,
    ring_entry: Option<NodeId>,
    workstations: FxHashMap<String, NodeId>,
}

/// Caller errors. The request was not carried out.
#[derive(Debug, ThisError, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("The network is not a consistent token ring")]
    Inconsistent,
    #[error("No workstation named '{0}' is registered")]
    UnknownWorkstation(String),
    #[error("Node {0} does not belong to this network")]
    UnknownNode(NodeId),
    #[error("More than one node is named '{0}'")]
    DuplicateName(String),
    #[error("The ring entry '{0}' is not on the ring")]
    UnknownEntry(String),
    #[error("A ring needs at least one node")]
    EmptyRing,
}

/// How a print request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintOutcome {
    /// The destination is a printer and printed the document.
    Delivered,
    /// The destination exists but is not a printer.
    NotAPrinter,
    /// The packet travelled the whole ring without meeting the destination.
    DestinationNotFound,
}

impl PrintOutcome {
    pub fn is_delivered(self) -> bool {
        self == PrintOutcome::Delivered
    }
}

impl Network {
    /// Creates an empty network.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds an unlinked node to the arena and returns its id.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId::new(self.nodes.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Finds the first node in the arena with the given name.
    pub fn node_named(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.name() == name)
            .map(NodeId::new)
    }

    /// All nodes in the arena, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index), node))
    }

    /// The number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Makes `to` the successor of `from`, replacing any previous link.
    pub fn link(&mut self, from: NodeId, to: NodeId) -> Result<(), NetworkError> {
        self.node_at(to)?;
        self.nodes
            .get_mut(from.index())
            .ok_or(NetworkError::UnknownNode(from))?
            .set_next(to);
        Ok(())
    }

    /// Chooses the node where broadcasts start and renderings begin.
    pub fn set_ring_entry(&mut self, entry: NodeId) -> Result<(), NetworkError> {
        self.node_at(entry)?;
        self.ring_entry = Some(entry);
        Ok(())
    }

    pub fn ring_entry(&self) -> Option<NodeId> {
        self.ring_entry
    }

    /// Registers the node as a workstation under its own name.
    ///
    /// The kind of the node is not checked here; registering anything but a
    /// workstation makes the network inconsistent.
    pub fn register_workstation(&mut self, id: NodeId) -> Result<(), NetworkError> {
        let name = self.node_at(id)?.name().to_string();
        self.workstations.insert(name, id);
        Ok(())
    }

    /// The names of all registered workstations, in no particular order.
    pub fn workstations(&self) -> impl Iterator<Item = &str> {
        self.workstations.keys().map(String::as_str)
    }

    /// Whether a workstation with the given name is registered.
    pub fn has_workstation(&self, name: &str) -> bool {
        self.workstations
            .get(name)
            .and_then(|id| self.node(*id))
            .map_or(false, Node::is_workstation)
    }

    /// Walks the ring starting at `start`, see [`RingWalk`].
    pub fn ring_from(&self, start: NodeId) -> RingWalk<'_> {
        RingWalk {
            network: self,
            start,
            current: Some(start),
            remaining: self.nodes.len(),
        }
    }

    /// Whether the network is a consistent token ring:
    ///
    /// - at least one workstation is registered and a ring entry is set
    /// - every registered workstation is a workstation node
    /// - the ring starting at the entry is circular and returns to the entry
    /// - the ring contains at least one printer
    /// - every workstation on the ring is registered and vice versa
    pub fn consistent_network(&self) -> bool {
        if self.workstations.is_empty() {
            return false;
        }
        let Some(entry) = self.ring_entry else {
            return false;
        };

        if !self
            .workstations
            .values()
            .all(|id| self.node(*id).map_or(false, Node::is_workstation))
        {
            return false;
        }

        let mut encountered = FxHashSet::default();
        let mut printers_found = 0;
        let mut workstations_found = 0;
        let mut current = entry;
        loop {
            let Some(node) = self.node(current) else {
                return false;
            };
            if !encountered.insert(node.name()) {
                break;
            }
            if node.is_workstation() {
                if !self.workstations.contains_key(node.name()) {
                    return false;
                }
                workstations_found += 1;
            }
            if node.is_printer() {
                printers_found += 1;
            }
            let Some(next) = node.next() else {
                return false;
            };
            current = next;
        }

        // The walk stopped on a repeated name; it must be the entry itself.
        current == entry && printers_found > 0 && workstations_found == self.workstations.len()
    }

    /// Sends a broadcast packet around the ring, starting at the ring entry.
    ///
    /// Every node accepts the packet and passes it on, until the packet is
    /// back at the entry. Returns the number of nodes that received it.
    pub fn request_broadcast(&self, report: &mut dyn Report) -> Result<usize, NetworkError> {
        let entry = self.checked_entry()?;
        write_best_effort(report, "Broadcast Request\n");

        let entry_name = self.node_at(entry)?.name();
        let packet = Packet::new(BROADCAST_MESSAGE, entry_name, entry_name);
        request_event("broadcast", packet.origin(), packet.destination());

        let mut current = entry;
        let mut visited = 0;
        loop {
            let node = self.node_at(current)?;
            write_best_effort(
                report,
                &format!("\tNode '{}' accepts broadcast packet.\n", node.name()),
            );
            node.pass_on(report);
            visited += 1;
            current = self.successor(current)?;
            if packet.is_at_destination(self.node_at(current)?) {
                break;
            }
        }

        write_best_effort(report, ">>> Broadcast travelled whole token ring.\n\n");
        outcome_event("broadcast", "Delivered", visited);
        Ok(visited)
    }

    /// Asks `workstation` to print `document` on `printer`.
    ///
    /// The packet travels from the workstation until it either reaches
    /// `printer` or comes back to the workstation after a full lap.
    pub fn request_workstation_prints_document(
        &self,
        workstation: &str,
        document: &str,
        printer: &str,
        report: &mut dyn Report,
    ) -> Result<PrintOutcome, NetworkError> {
        self.checked_entry()?;
        let start = self.registered_workstation(workstation)?;

        write_best_effort(
            report,
            &format!("'{workstation}' requests printing of '{document}' on '{printer}' ...\n"),
        );
        let packet = Packet::new(document, workstation, printer);
        request_event("print", packet.origin(), packet.destination());

        self.node_at(start)?.pass_on(report);
        let mut current = self.successor(start)?;
        let mut hops = 1;
        let outcome = loop {
            let node = self.node_at(current)?;
            if packet.is_at_destination(node) {
                let printed = node.handle_document(self, &packet, report);
                break if printed {
                    PrintOutcome::Delivered
                } else {
                    PrintOutcome::NotAPrinter
                };
            }
            if packet.is_at_origin(node) {
                write_best_effort(
                    report,
                    ">>> Destination not found, print job cancelled.\n\n",
                );
                break PrintOutcome::DestinationNotFound;
            }
            node.pass_on(report);
            hops += 1;
            current = self.successor(current)?;
        };

        outcome_event("print", &format!("{outcome:?}"), hops);
        Ok(outcome)
    }

    /// Writes the accounting record of a delivered document.
    pub fn record_accounting(&self, report: &mut dyn Report, author: &str, title: &str) {
        accounting_event(author, title);
        write_best_effort(
            report,
            &format!("\tAccounting -- author = '{author}' -- title = '{title}'\n"),
        );
    }

    fn node_at(&self, id: NodeId) -> Result<&Node, NetworkError> {
        self.node(id).ok_or(NetworkError::UnknownNode(id))
    }

    /// Unlinked nodes never pass the consistency check.
    fn successor(&self, id: NodeId) -> Result<NodeId, NetworkError> {
        self.node_at(id)?.next().ok_or(NetworkError::Inconsistent)
    }

    /// The ring entry of a consistent network.
    fn checked_entry(&self) -> Result<NodeId, NetworkError> {
        match self.ring_entry {
            Some(entry) if self.consistent_network() => Ok(entry),
            _ => Err(NetworkError::Inconsistent),
        }
    }

    fn registered_workstation(&self, name: &str) -> Result<NodeId, NetworkError> {
        match self.workstations.get(name) {
            Some(id) if self.has_workstation(name) => Ok(*id),
            _ => Err(NetworkError::UnknownWorkstation(name.to_string())),
        }
    }
}

impl Display for Network {
    /// The plain text rendering of the ring, starting at the ring entry.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render::render_from_entry(self, render::print_on))
    }
}

/// Iterator over the nodes of a ring, in ring order.
///
/// Stops when the walk returns to the start node, reaches an unlinked node,
/// or has yielded as many nodes as the arena holds. It therefore terminates
/// on rings that are not consistent.
#[derive(Debug, Clone)]
pub struct RingWalk<'a> {
    network: &'a Network,
    start: NodeId,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for RingWalk<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.current?;
        let node = self.network.node(id)?;
        self.remaining -= 1;
        self.current = node.next().filter(|next| *next != self.start);
        Some((id, node))
    }
}
