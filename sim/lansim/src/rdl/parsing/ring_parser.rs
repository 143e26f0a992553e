//! Contains all methods relevant to parsing a [Ring] and its nodes
use super::parser_util::{general_error, general_parser, leading_tabs, num_tabs_to_string};
use super::parsing_data::*;

/// Parses a single [Ring]. Takes in a [DecType], [Params], remaining string, current number of tabs, and the current line number.
/// Returns either an error String, or a tuple containing [Ring] and the remaining string.
///
/// Every line inside of the ring must be a node declaration at exactly `num_tabs` tabs.
pub fn ring_parser(
    dec: DecType,
    args: Params,
    s0: String,
    num_tabs: i32,
    line_num: &mut i32,
) -> Result<(Ring, String), String> {
    let mut nodes = NodeDecls::new();
    let mut remaining_string = s0;
    // save the beginning of this declarations line num
    let ring_line_num = *line_num - 1;

    let mut t = leading_tabs(&remaining_string);
    // a ring needs at least one node at the next indentation level
    if t != num_tabs {
        return Err(general_error(
            num_tabs,
            ring_line_num,
            dec,
            format!(
                "{}Line {:?}: expected {} tabs and got {} tabs instead.\n",
                num_tabs_to_string(num_tabs + 1),
                *line_num,
                num_tabs,
                t
            ),
        ));
    }

    while !remaining_string.is_empty() {
        // save the line num at the beginning of this line
        let cur_line_num = *line_num;
        let (dectype, options, rem) =
            general_parser(&remaining_string[num_tabs as usize..], line_num).map_err(|e| {
                general_error(
                    num_tabs,
                    ring_line_num,
                    dec,
                    format!("{}{}", num_tabs_to_string(num_tabs + 1), e),
                )
            })?;

        // error if the type inside isn't a node
        if !dectype.is_node() {
            return Err(general_error(
                num_tabs,
                ring_line_num,
                dec,
                format!(
                    "{}Line {:?}: expected type Workstation, Node or Printer and got type {:?} instead.\n",
                    num_tabs_to_string(num_tabs + 1),
                    cur_line_num,
                    dectype
                ),
            ));
        }
        nodes.push(NodeDecl { dectype, options });
        remaining_string = rem;

        // see how many tabs are on the next line and respond accordingly
        t = leading_tabs(&remaining_string);
        match t {
            // next line doesn't have enough tabs thus the ring is finished
            t if t < num_tabs => break,
            // next line has too many tabs meaning there is something trying to be declared inside of a node (which can't happen)
            t if t > num_tabs => {
                return Err(general_error(
                    num_tabs,
                    ring_line_num,
                    dec,
                    format!(
                        "{}Line {:?}: Invalid tab count. Expected {} tabs, got {} tabs.\n",
                        num_tabs_to_string(num_tabs + 1),
                        line_num,
                        num_tabs,
                        t
                    ),
                ))
            }
            _ => (),
        }
    }

    Ok((
        Ring {
            dectype: dec,
            options: args,
            nodes,
        },
        remaining_string,
    ))
}
