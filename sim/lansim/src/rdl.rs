//! The Ring Description Language (RDL).
//!
//! An RDL file describes one token ring. Declarations are written in
//! brackets, children are indented by one tab (or four spaces) and nodes are
//! listed in ring order:
//!
//! ```text
//! [Ring entry='Filip']
//!     [Workstation name='Filip']
//!     [Node name='n1']
//!     [Workstation name='Hans']
//!     [Printer name='Andy']
//! ```
//!
//! The last node is linked back to the first. `entry` is optional and
//! defaults to the first node. `[Template name='...']` lines before the ring
//! are ignored.
mod generating;
pub mod parsing;
pub use generating::{core_generator, GenerateError};
pub use parsing::{core_parser, parse_file};

use lansim_core::Network;
use std::path::Path;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError, Clone, PartialEq, Eq)]
pub enum RdlError {
    #[error("{0}")]
    Parse(String),
    #[error("{0}")]
    Generate(#[from] GenerateError),
}

/// Parses `source` and builds the network it describes.
pub fn generate_network(source: &str) -> Result<Network, RdlError> {
    let lan = core_parser(source).map_err(RdlError::Parse)?;
    Ok(core_generator(&lan)?)
}

/// Reads the RDL file at `file_path` and builds the network it describes.
pub fn load_network(file_path: impl AsRef<Path>) -> Result<Network, RdlError> {
    let lan = parse_file(file_path).map_err(RdlError::Parse)?;
    Ok(core_generator(&lan)?)
}
