//! Elements of the token ring.

use crate::{
    logging::hop_event,
    printer,
    report::{write_best_effort, Report},
    Network, Packet,
};
use std::fmt::Display;

/// The position of a [`Node`] in its [`Network`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Gets the underlying arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The capabilities of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Only passes packets on.
    Relay,
    /// Can issue print requests.
    WorkStation,
    /// Accepts print jobs.
    Printer,
}

impl NodeKind {
    /// The label used in human-readable descriptions.
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Relay => "Node",
            NodeKind::WorkStation => "Workstation",
            NodeKind::Printer => "Printer",
        }
    }

    /// The element name used in XML descriptions.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Relay => "node",
            NodeKind::WorkStation => "workstation",
            NodeKind::Printer => "printer",
        }
    }
}

/// A single node in the token ring.
///
/// A node knows its successor by [`NodeId`]. Nodes are linked by the
/// [`Network`] that owns them, see [`Network::link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    kind: NodeKind,
    next: Option<NodeId>,
}

impl Node {
    /// Creates an unlinked node.
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            next: None,
        }
    }

    pub fn relay(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Relay)
    }

    pub fn workstation(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::WorkStation)
    }

    pub fn printer(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Printer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The successor of this node, if it has been linked.
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    pub(crate) fn set_next(&mut self, next: NodeId) {
        self.next = Some(next);
    }

    pub fn is_workstation(&self) -> bool {
        self.kind == NodeKind::WorkStation
    }

    pub fn is_printer(&self) -> bool {
        self.kind == NodeKind::Printer
    }

    /// Records that this node handed a packet to its successor.
    pub fn pass_on(&self, report: &mut dyn Report) {
        hop_event(&self.name);
        write_best_effort(report, &format!("\tNode '{}' passes packet on.\n", self.name));
    }

    /// Appends the XML element describing this node, e.g. `<printer>Andy</printer>`.
    pub fn describe_short(&self, buf: &mut String) {
        let tag = self.kind.tag();
        buf.push('<');
        buf.push_str(tag);
        buf.push('>');
        buf.push_str(&self.name);
        buf.push_str("</");
        buf.push_str(tag);
        buf.push('>');
    }

    /// Appends the one-line description of this node, e.g. `Printer Andy [Printer]`.
    pub fn describe_long(&self, buf: &mut String) {
        let label = self.kind.label();
        buf.push_str(label);
        buf.push(' ');
        buf.push_str(&self.name);
        buf.push_str(" [");
        buf.push_str(label);
        buf.push(']');
    }

    /// Tries to print the document carried by `packet`.
    ///
    /// Only printers accept documents. Every other node cancels the job and
    /// returns `false`.
    pub fn handle_document(
        &self,
        network: &Network,
        packet: &Packet,
        report: &mut dyn Report,
    ) -> bool {
        match self.kind {
            NodeKind::Printer => printer::print_document(network, packet, report),
            NodeKind::Relay | NodeKind::WorkStation => {
                write_best_effort(
                    report,
                    ">>> Destination is not a printer, print job cancelled.\n\n",
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_unlinked() {
        let node = Node::relay("n");
        assert_eq!(node.name(), "n");
        assert_eq!(node.kind(), NodeKind::Relay);
        assert_eq!(node.next(), None);
    }

    #[test]
    fn descriptions() {
        let cases = [
            (Node::relay("n1"), "Node n1 [Node]", "<node>n1</node>"),
            (
                Node::workstation("Filip"),
                "Workstation Filip [Workstation]",
                "<workstation>Filip</workstation>",
            ),
            (
                Node::printer("Andy"),
                "Printer Andy [Printer]",
                "<printer>Andy</printer>",
            ),
        ];
        for (node, long, short) in cases {
            let mut buf = String::new();
            node.describe_long(&mut buf);
            assert_eq!(buf, long);
            buf.clear();
            node.describe_short(&mut buf);
            assert_eq!(buf, short);
        }
    }

    #[test]
    fn pass_on_line() {
        let mut report = String::new();
        Node::workstation("Hans").pass_on(&mut report);
        assert_eq!(report, "\tNode 'Hans' passes packet on.\n");
    }

    #[test]
    fn non_printers_reject_documents() {
        let network = Network::new();
        let packet = Packet::new("Hello World", "Filip", "Hans");
        for node in [Node::workstation("Hans"), Node::relay("Hans")] {
            let mut report = String::new();
            assert!(!node.handle_document(&network, &packet, &mut report));
            assert_eq!(
                report,
                ">>> Destination is not a printer, print job cancelled.\n\n"
            );
        }
    }
}
