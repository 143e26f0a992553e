//! Types needed for parsing.

use nom::{error::VerboseError, IResult};
use std::collections::HashMap;

/// DecType is the core type of each parse-able item.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DecType {
    Template,
    Ring,
    Workstation,
    Node,
    Printer,
}

impl DecType {
    /// Whether this type declares a member of a ring.
    pub fn is_node(self) -> bool {
        matches!(self, DecType::Workstation | DecType::Node | DecType::Printer)
    }
}

pub type Res<T, U> = IResult<T, U, VerboseError<T>>;
pub type Params = HashMap<String, String>;
pub type NodeDecls = Vec<NodeDecl>;

/// NodeDecl Struct.
/// Holds a single node of a [Ring], in ring order.
///
///
/// Contains: [DecType] and [Params]
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NodeDecl {
    pub dectype: DecType,
    pub options: Params,
}

/// Ring Struct.
/// Holds core ring info before turning it into a network
///
///
/// Contains: [DecType], [Params], and [NodeDecls]
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Ring {
    pub dectype: DecType,
    pub options: Params,
    pub nodes: NodeDecls,
}

/// Lan Struct.
/// Used to store the core parsed file.
///
///
/// Contains: the [Ring]
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Lan {
    pub ring: Ring,
}
