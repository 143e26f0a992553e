//! Mod file for parsing: allows use across Lansim

pub mod parsing_data;
mod parser;
mod parser_util;
mod ring_parser;
pub use parser::{core_parser, parse_file};
pub use parser_util::{general_error, general_parser, num_tabs_to_string};
pub use parsing_data::*;
