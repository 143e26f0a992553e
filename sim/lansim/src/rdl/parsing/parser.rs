use super::parser_util::general_parser;
use super::parsing_data::*;
use super::ring_parser::ring_parser;
use std::fs;
use std::path::Path;

/// This is the core parsing logic that runs through our input.
///
/// Takes in the contents of an RDL file.
/// Returns the resulting lan, or an error message.
pub fn core_parser(source: &str) -> Result<Lan, String> {
    let s = source.replace('\r', "").replace("    ", "\t");
    let mut ring: Option<Ring> = None;

    let num_tabs = 0;
    let mut remaining_string = s;
    let mut line_num = 1;

    // loops until we run out of input
    while !remaining_string.is_empty() {
        let (dectype, options, rem) = general_parser(&remaining_string, &mut line_num)?;
        remaining_string = rem;

        // the only types that won't result in an error are Templates and the Ring
        match dectype {
            DecType::Template => {}
            DecType::Ring => {
                if ring.is_some() {
                    return Err(format!(
                        "Line {}: Only one Ring can be declared.\n",
                        line_num - 1
                    ));
                }
                let (parsed, rem) = ring_parser(
                    dectype,
                    options,
                    remaining_string,
                    num_tabs + 1,
                    &mut line_num,
                )?;
                remaining_string = rem;
                ring = Some(parsed);
            }
            _ => {
                return Err(format!(
                    "Line {}: Cannot declare {:?} here.\n",
                    line_num - 1,
                    dectype
                ));
            }
        }
    }

    match ring {
        Some(ring) => Ok(Lan { ring }),
        None => Err("No Ring declared.\n".to_string()),
    }
}

/// Reads and parses the RDL file at `file_path`.
pub fn parse_file(file_path: impl AsRef<Path>) -> Result<Lan, String> {
    let file_path = file_path.as_ref();
    let source = fs::read_to_string(file_path)
        .map_err(|e| format!("Unable to read {}: {e}", file_path.display()))?;
    core_parser(&source).map_err(|e| format!("Errors at {}:\n\n{e}", file_path.display()))
}
