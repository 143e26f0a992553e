use clap::Parser;
use lansim::cli::{execute, Args, CliError};
use lansim::rdl::RdlError;
use lansim_core::NetworkError;

fn run(args: &[&str]) -> (Result<bool, CliError>, String) {
    let args = Args::try_parse_from(args).unwrap();
    let mut report = String::new();
    let result = execute(&args, &mut report);
    (result, report)
}

const OFFICE_RING: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/rings/office.ring");

#[test]
fn show_default_network() {
    let (result, report) = run(&["lansim", "show"]);
    assert!(result.unwrap());
    assert_eq!(
        report,
        "Workstation Filip [Workstation] -> Node n1 [Node] -> Workstation Hans [Workstation] -> Printer Andy [Printer] ->  ... \n"
    );
}

#[test]
fn show_ring_file_as_xml() {
    let (result, report) = run(&["lansim", "--ring", OFFICE_RING, "show", "--format", "xml"]);
    assert!(result.unwrap());
    assert_eq!(
        report,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\n<network>\n\
         \t<workstation>reception</workstation>\n\
         \t<printer>laser</printer>\n\
         \t<node>hub</node>\n\
         \t<workstation>accounting</workstation>\n\
         \t<printer>inkjet</printer>\n\
         </network>\n"
    );
}

#[test]
fn print_success_and_failure() {
    let (result, report) = run(&["lansim", "print", "--from", "Filip", "--to", "Andy", "Hello World"]);
    assert!(result.unwrap());
    assert!(report.ends_with(">>> ASCII Print job delivered.\n\n"));

    let (result, report) = run(&["lansim", "print", "--from", "Filip", "--to", "Hans", "Hello World"]);
    assert!(!result.unwrap());
    assert!(report.ends_with(">>> Destination is not a printer, print job cancelled.\n\n"));
}

#[test]
fn print_from_unknown_workstation() {
    let (result, report) = run(&["lansim", "print", "--from", "Andy", "--to", "Andy", "doc"]);
    assert!(matches!(
        result,
        Err(CliError::Network(NetworkError::UnknownWorkstation(name))) if name == "Andy"
    ));
    assert!(report.is_empty());
}

#[test]
fn broadcast_on_ring_file() {
    let (result, report) = run(&["lansim", "--ring", OFFICE_RING, "broadcast"]);
    assert!(result.unwrap());
    assert!(report.starts_with("Broadcast Request\n\tNode 'reception' accepts broadcast packet.\n"));
    assert_eq!(report.matches("accepts broadcast packet").count(), 5);
}

#[test]
fn scenario_matches_reference_output() {
    let (result, report) = run(&["lansim", "scenario"]);
    assert!(result.unwrap());
    assert_eq!(report, include_str!("golden/reference_scenario.txt"));
}

#[test]
fn invalid_ring_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/rings/two_rings.ring");
    let (result, _) = run(&["lansim", "--ring", path, "show"]);
    match result {
        Err(CliError::Rdl(RdlError::Parse(msg))) => {
            assert!(msg.contains("Only one Ring can be declared."), "{msg}")
        }
        other => panic!("unexpected result {other:?}"),
    }
}
