//! Session bookkeeping: reports, history and snapshots.

use satchel_foundation::{ErrorKind, ItemRegistry};
use satchel_parser::CmdErr;
use satchel_runtime::{Outcome, RuntimeConfig, Session, parse_item_list};

const ITEMS: &str = "\
# items for the session tests
MaterialA
MaterialB
WeaponA
ArrowA
";

const SCRIPT: &str = "\
initialize 5 arrowa[equip]
init gamedata
frobnicate
shoot arrow
get 2 materiala
get 3 mysterybox
!sort material";

fn session() -> Session {
    Session::with_registry(parse_item_list(ITEMS))
}

#[test]
fn report_sorts_lines_by_outcome() {
    let mut session = session();
    let report = session.run_script(SCRIPT, Some("inline"));

    assert_eq!(report.steps.len(), 7);
    assert!(!report.halted);
    assert!(!report.is_clean());
    assert_eq!(report.executed(), 4);

    let skipped: Vec<(usize, CmdErr)> = report
        .skipped()
        .map(|step| (step.line_number, step.cmd_err()))
        .collect();
    assert_eq!(skipped, [(3, CmdErr::Ast), (6, CmdErr::Guess)]);

    let failures: Vec<usize> = report.failures().map(|step| step.line_number).collect();
    assert_eq!(failures, [4]);
}

#[test]
fn failed_step_explains_itself() {
    let mut session = session();
    let report = session.run_script(SCRIPT, Some("inline"));
    let failure = report.failures().next().unwrap();
    assert_eq!(failure.cmd_err(), CmdErr::Execute);

    let Outcome::Failed(error) = &failure.outcome else {
        panic!("expected a failure");
    };
    assert!(matches!(error.kind, ErrorKind::IndexOutOfBounds { .. }));
    let context = error.context.as_ref().unwrap();
    assert_eq!(context.command.as_deref(), Some("shoot arrow"));
    assert_eq!(failure.messages().len(), 1);
}

#[test]
fn snapshots_track_each_step() {
    let mut session = session().with_config(RuntimeConfig::recording());
    let report = session.run_script("get materiala\nget 2 materialb", None);
    let sizes: Vec<usize> = report
        .steps
        .iter()
        .map(|step| step.snapshot.as_ref().unwrap().pouch().slots().len())
        .collect();
    assert_eq!(sizes, [1, 2]);
    assert_eq!(report.final_snapshot(), Some(session.state()));
}

#[test]
fn history_spans_scripts_and_lines() {
    let mut session = session();
    session.run_script("get materiala\nget materialb", None);
    session.run_line("get weapona");
    let lines: Vec<&str> = session.history().iter().map(|s| s.line.as_str()).collect();
    assert_eq!(lines, ["get materiala", "get materialb", "get weapona"]);
    assert_eq!(session.history()[2].line_number, 3);
}

#[test]
fn parse_uses_the_session_registry() {
    let closed = session();
    assert_eq!(closed.parse("get materialz").cmd_err(), CmdErr::Guess);
    let open = Session::new();
    assert_eq!(open.parse("get materialz").cmd_err(), CmdErr::None);
}

#[test]
fn script_files_are_named_in_reports() {
    let path = std::env::temp_dir().join("satchel_integration_script.txt");
    std::fs::write(&path, "get 2 materiala\n").unwrap();

    let mut session = session();
    let report = session.run_file(&path).unwrap();
    assert_eq!(report.source, Some(path.display().to_string()));
    assert!(report.is_clean());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn registry_from_names_matches_item_list() {
    let listed = parse_item_list(ITEMS);
    let named = ItemRegistry::from_names(["MaterialA", "MaterialB", "WeaponA", "ArrowA"]);
    assert_eq!(listed.len(), named.len());
    for item in named.iter() {
        assert!(listed.lookup(&item.id).is_some());
    }
}
