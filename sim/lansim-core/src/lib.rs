//! Simulation of a logical token ring Local Area Network.
//!
//! A LAN is modelled as a closed loop of named nodes. Packets are handed from
//! one node to the next until they reach their destination or travel the
//! whole ring. Two requests are supported: broadcasting a message to every
//! node and routing a print job from a workstation to a printer.
//!
//! # Organization
//! - [`Packet`] is the message in flight
//! - [`Node`] is a ring element, one of the [`NodeKind`]s
//! - [`Network`] owns the nodes and implements the protocols
//! - [`Report`] is the sink that receives the human-readable trace
//! - [`render`] turns a ring into text, HTML or XML
//!
//! # Ownership
//!
//! The ring is cyclic, so nodes do not own each other. A [`Network`] keeps
//! every node in an arena and nodes refer to their successor by [`NodeId`].
//!
//! ```
//! use lansim_core::{NetworkBuilder, PrintOutcome};
//!
//! let network = NetworkBuilder::new()
//!     .workstation("Filip")
//!     .relay("n1")
//!     .workstation("Hans")
//!     .printer("Andy")
//!     .build()
//!     .unwrap();
//!
//! let mut report = String::new();
//! let outcome = network
//!     .request_workstation_prints_document("Filip", "Hello World", "Andy", &mut report)
//!     .unwrap();
//! assert_eq!(outcome, PrintOutcome::Delivered);
//! ```

mod logging;

pub mod packet;
pub use packet::Packet;

pub mod node;
pub use node::{Node, NodeId, NodeKind};

pub mod printer;
pub use printer::{Document, DocumentKind};

pub mod network;
pub use network::{Network, NetworkError, PrintOutcome, RingWalk};

mod builder;
pub use builder::NetworkBuilder;

pub mod report;
pub use report::{FailingReport, IoReport, Report, ReportError};

pub mod render;
