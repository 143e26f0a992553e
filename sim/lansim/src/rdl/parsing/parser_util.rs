use super::parsing_data::*;
use nom::{
    branch::alt,
    bytes::complete::{escaped, tag, tag_no_case, take_until, take_while1},
    character::{
        complete::{char, none_of},
        is_newline, is_space,
    },
    combinator::value,
    error::context,
    multi::many0,
    sequence::{delimited, preceded, separated_pair},
};

use std::collections::HashMap;

/// General parsing for any line of our RDL.
///
///
/// Takes in a string and the current line number of the file we are looking it.
/// Returns either an error string or a tuple containing the DecType it got, the Params it got inside of that DecType, and the remaining string after parsing.
pub fn general_parser(s: &str, line_num: &mut i32) -> Result<(DecType, Params, String), String> {
    // grab everything between brackets '[' and ']'
    let (remaining_string, parsed_string) = section(s).map_err(|e| {
        format!(
            "Line {:?}: expected a declaration in brackets due to {}\n",
            *line_num, e
        )
    })?;

    // parse what was inside of the section to get the type and remaining string
    let (rest, dectype) = get_type(parsed_string).map_err(|e| {
        format!(
            "Line {:?}: unknown declaration '{}' due to {}\n",
            *line_num, parsed_string, e
        )
    })?;

    let (extra, parsed_args) = arguments(rest).map_err(|e| {
        format!(
            "Line {:?}: unable to parse arguments at '{}' due to {}\n",
            *line_num, rest, e
        )
    })?;
    if !extra.is_empty() {
        return Err(format!(
            "Line {:?}: extra argument at '{}'\n",
            *line_num, extra
        ));
    }

    let mut args: HashMap<String, String> = HashMap::new();
    for arg in &parsed_args {
        // makes sure that each argument is a unique one, otherwise error
        if args.contains_key(arg.0) {
            return Err(format!(
                "Line {:?}: duplicate argument '{}'='{}'\n",
                *line_num, arg.0, arg.1
            ));
        }

        args.insert(arg.0.to_string(), arg.1.to_string());
    }

    // get rid of any new lines
    let num_new_line = remaining_string.chars().take_while(|c| c == &'\n').count();
    *line_num += num_new_line as i32;

    Ok((dectype, args, remaining_string[num_new_line..].to_string()))
}

/// Converts a number of tabs into a string with that many tabs in it.
pub fn num_tabs_to_string(num_tabs: i32) -> String {
    "\t".repeat((num_tabs - 1).max(0) as usize)
}

/// Formats a general error message and returns that String.
pub fn general_error(num_tabs: i32, line_num: i32, dec: DecType, msg: String) -> String {
    format!(
        "{}Line {:?}: Unable to parse inside of {:?} due to: \n{}",
        num_tabs_to_string(num_tabs),
        line_num,
        dec,
        msg
    )
}

/// Counts the tabs at the beginning of the string.
pub fn leading_tabs(s: &str) -> i32 {
    s.chars().take_while(|c| c == &'\t').count() as i32
}

/// Grabs the type from the beginning of each section in [general_parser].
/// For example, would turn "Printer name='Andy'" into having a dec type and the remainder of the string
fn get_type(input: &str) -> Res<&str, DecType> {
    context(
        "dectype",
        alt((
            value(DecType::Template, tag_no_case("Template")),
            value(DecType::Ring, tag_no_case("Ring")),
            value(DecType::Workstation, tag_no_case("Workstation")),
            value(DecType::Node, tag_no_case("Node")),
            value(DecType::Printer, tag_no_case("Printer")),
        )),
    )(input)
}

/// Grabs everything between brackets "[]" in [general_parser].
fn section(input: &str) -> Res<&str, &str> {
    context("section", delimited(char('['), take_until("]"), char(']')))(input)
}

/// Breaks down the arguments of our input for the [general_parser].
/// For example, turns "name='Andy' kind='laser'" into a vector of ("name", "Andy") and ("kind", "laser")
fn arguments(input: &str) -> Res<&str, Vec<(&str, &str)>> {
    context(
        "arguments",
        many0(separated_pair(
            preceded(take_while1(check_space_or_newline), take_until("=")),
            char('='),
            delimited(
                tag("'"),
                alt((escaped(none_of("\\\'"), '\\', tag("'")), tag(""))),
                tag("'"),
            ),
        )),
    )(input)
}

fn check_space_or_newline(chr: char) -> bool {
    is_space(chr as u8) || is_newline(chr as u8)
}
