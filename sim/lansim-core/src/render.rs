//! Printable representations of a ring.
//!
//! Every renderer walks the ring from a start node with [`RingWalk`], so it
//! terminates even when the ring is broken.
//!
//! [`RingWalk`]: crate::RingWalk

use crate::{Network, NodeId};

/// Appends the plain text representation of the ring starting at `start`.
///
/// Every node is followed by `" -> "` and the text ends with `" ... "`.
pub fn print_on(network: &Network, start: NodeId, buf: &mut String) {
    for (_, node) in network.ring_from(start) {
        node.describe_long(buf);
        buf.push_str(" -> ");
    }
    buf.push_str(" ... ");
}

/// Appends an HTML page listing the ring starting at `start`.
pub fn print_html_on(network: &Network, start: NodeId, buf: &mut String) {
    buf.push_str(
        "<HTML>\n<HEAD>\n<TITLE>LAN Simulation</TITLE>\n</HEAD>\n<BODY>\n<H1>LAN SIMULATION</H1>",
    );
    buf.push_str("\n\n<UL>");
    for (_, node) in network.ring_from(start) {
        buf.push_str("\n\t<LI> ");
        node.describe_long(buf);
        buf.push_str(" </LI>");
    }
    buf.push_str("\n\t<LI>...</LI>\n</UL>\n\n</BODY>\n</HTML>\n");
}

/// Appends an XML document listing the ring starting at `start`.
pub fn print_xml_on(network: &Network, start: NodeId, buf: &mut String) {
    buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\n<network>");
    for (_, node) in network.ring_from(start) {
        buf.push_str("\n\t");
        node.describe_short(buf);
    }
    buf.push_str("\n</network>");
}

/// Renders from the ring entry with one of the functions above. An empty
/// string when the network has no entry.
pub fn render_from_entry(network: &Network, printer: fn(&Network, NodeId, &mut String)) -> String {
    let mut buf = String::new();
    if let Some(entry) = network.ring_entry() {
        printer(network, entry, &mut buf);
    }
    buf
}
