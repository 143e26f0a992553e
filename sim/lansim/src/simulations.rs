//! Prebuilt networks and scenarios for testing, benchmarking, and examples.

use lansim_core::{render, Network, NetworkBuilder, NetworkError};

const ASCII_BANNER: &str =
    "---------------------------------ASCII------------------------------------------\n";
const HTML_BANNER: &str =
    "---------------------------------HTML------------------------------------------\n";
const XML_BANNER: &str =
    "---------------------------------XML------------------------------------------\n";
const BROADCAST_BANNER: &str =
    "---------------------------------SCENARIO: Broadcast Success -----------------\n";

/// The print requests of the reference scenario, all issued by Filip:
/// (banner, document, printer).
const PRINT_SCENARIOS: [(&str, &str, &str); 6] = [
    (
        "---------------------------------SCENARIO: Print Success --------------------------\n",
        "Hello World",
        "Andy",
    ),
    (
        "---------------------------------SCENARIO: PrintFailure (UnkownPrinter) ------------\n",
        "Hello World",
        "UnknownPrinter",
    ),
    (
        "---------------------------------SCENARIO: PrintFailure (print on Workstation) -----\n",
        "Hello World",
        "Hans",
    ),
    (
        "---------------------------------SCENARIO: PrintFailure (print on Node) -----\n",
        "Hello World",
        "n1",
    ),
    (
        "---------------------------------SCENARIO: Print Success Postscript-----------------\n",
        "!PS Hello World in postscript",
        "Andy",
    ),
    (
        "---------------------------------SCENARIO: Print Failure Postscript-----------------\n",
        "!PS Hello World in postscript",
        "Hans",
    ),
];

/// Returns a network that may serve as starting point for various experiments.
///
/// ```text
/// Workstation Filip [Workstation] -> Node n1 [Node] -> Workstation Hans [Workstation]
/// -> Printer Andy [Printer] -> ...
/// ```
pub fn default_example() -> Result<Network, NetworkError> {
    NetworkBuilder::new()
        .workstation("Filip")
        .relay("n1")
        .workstation("Hans")
        .printer("Andy")
        .build()
}

/// Runs the reference scenario on `network` and returns everything it wrote.
///
/// The scenario renders the ring as text, HTML and XML, lets workstation
/// Filip send six print requests and finishes with a broadcast. On the
/// [default network](default_example) it exercises every outcome of a
/// request.
pub fn reference_scenario(network: &Network) -> Result<String, NetworkError> {
    let entry = network.ring_entry().ok_or(NetworkError::Inconsistent)?;
    let mut out = String::new();

    banner(&mut out, ASCII_BANNER);
    render::print_on(network, entry, &mut out);
    banner(&mut out, HTML_BANNER);
    render::print_html_on(network, entry, &mut out);
    banner(&mut out, XML_BANNER);
    render::print_xml_on(network, entry, &mut out);

    for (line, document, printer) in PRINT_SCENARIOS {
        banner(&mut out, line);
        network.request_workstation_prints_document("Filip", document, printer, &mut out)?;
    }

    banner(&mut out, BROADCAST_BANNER);
    network.request_broadcast(&mut out)?;
    Ok(out)
}

/// Every banner but the first is preceded by an empty line.
fn banner(out: &mut String, line: &str) {
    if !out.is_empty() {
        out.push_str("\n\n");
    }
    out.push_str(line);
}
