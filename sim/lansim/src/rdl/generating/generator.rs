//! Main generator file for rdl
//! Turns a parsed [Lan] into a [Network]

use crate::rdl::parsing::parsing_data::*;
use lansim_core::{NetworkBuilder, NetworkError, Node, NodeKind};
use thiserror::Error as ThisError;

/// Errors found while turning a parse into a network.
#[derive(Debug, ThisError, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Node {position} ({dectype:?}) has no name")]
    MissingName { position: usize, dectype: DecType },
    #[error("Unknown option '{option}' on {dectype:?}")]
    UnknownOption { dectype: DecType, option: String },
    #[error("Invalid ring: {0}")]
    Network(#[from] NetworkError),
}

/// Core Generator builds the network described by a parse.
///
/// Nodes are linked in declaration order and the last node is linked back to
/// the first. All workstations are registered.
pub fn core_generator(lan: &Lan) -> Result<lansim_core::Network, GenerateError> {
    let ring = &lan.ring;
    let mut builder = NetworkBuilder::new();

    for (option, value) in &ring.options {
        match option.to_ascii_lowercase().as_str() {
            "entry" => builder = builder.entry(value.clone()),
            _ => {
                return Err(GenerateError::UnknownOption {
                    dectype: ring.dectype,
                    option: option.clone(),
                })
            }
        }
    }

    for (position, decl) in ring.nodes.iter().enumerate() {
        builder = builder.node(node_generator(position, decl)?);
    }

    Ok(builder.build()?)
}

fn node_generator(position: usize, decl: &NodeDecl) -> Result<Node, GenerateError> {
    let mut name = None;
    for (option, value) in &decl.options {
        match option.to_ascii_lowercase().as_str() {
            "name" => name = Some(value.clone()),
            _ => {
                return Err(GenerateError::UnknownOption {
                    dectype: decl.dectype,
                    option: option.clone(),
                })
            }
        }
    }

    let name = name.ok_or(GenerateError::MissingName {
        position,
        dectype: decl.dectype,
    })?;
    let kind = match decl.dectype {
        DecType::Workstation => NodeKind::WorkStation,
        DecType::Printer => NodeKind::Printer,
        _ => NodeKind::Relay,
    };
    Ok(Node::new(name, kind))
}
