use crate::Node;

/// A message travelling over the token ring.
///
/// Packets are created fresh for every request and are not modified while
/// they travel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Packet {
    message: String,
    origin: String,
    destination: String,
}

impl Packet {
    /// Creates a packet sent by `origin` to `destination`.
    pub fn new(
        message: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Creates a packet without a known origin.
    pub fn addressed(message: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(message, "", destination)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Whether `node` is the node this packet is addressed to.
    pub fn is_at_destination(&self, node: &Node) -> bool {
        self.destination == node.name()
    }

    /// Whether `node` is the node that sent this packet.
    pub fn is_at_origin(&self, node: &Node) -> bool {
        self.origin == node.name()
    }
}
