//! Satchel CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use satchel_foundation::ItemRegistry;
use tracing_subscriber::EnvFilter;

use satchel_runtime::{
    Repl, RuntimeConfig, ScriptReport, Session, load_from_file, load_item_list, save_to_file,
};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    items: Option<PathBuf>,
    load: Option<PathBuf>,
    save: Option<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    dump: bool,
    halt_on_error: bool,
    trace: bool,
    verbosity: u8,
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v` when set.
fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A second install (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--dump" => config.dump = true,
            "--halt-on-error" => config.halt_on_error = true,
            "--trace" => config.trace = true,
            "--items" => config.items = Some(path_arg(&mut args, "--items")?),
            "--load" => config.load = Some(path_arg(&mut args, "--load")?),
            "--save" => config.save = Some(path_arg(&mut args, "--save")?),
            flags if flags.starts_with("-v") && flags[1..].chars().all(|c| c == 'v') => {
                let count = u8::try_from(flags.len() - 1).unwrap_or(u8::MAX);
                config.verbosity = config.verbosity.saturating_add(count);
            }
            "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn path_arg(
    args: &mut impl Iterator<Item = String>,
    option: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    args.next()
        .map(PathBuf::from)
        .ok_or_else(|| format!("{option} requires a path").into())
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if config.show_version {
        println!("satchel {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    init_logger(config.verbosity);

    let registry = match &config.items {
        Some(path) => load_item_list(path)?,
        None => ItemRegistry::new(),
    };
    let runtime = RuntimeConfig::default()
        .with_halt_on_error(config.halt_on_error)
        .with_trace_commands(config.trace)
        .with_record_snapshots(false);
    let mut session = Session::with_registry(registry).with_config(runtime);
    if let Some(path) = &config.load {
        session.set_state(load_from_file(path)?);
    }

    let mut halted = false;
    for file in &config.files {
        let report = session.run_file(file)?;
        print_report(&report);
        if report.halted {
            halted = true;
            break;
        }
    }

    if config.dump {
        dump_state(&session);
    }

    if let Some(path) = &config.save {
        save_to_file(session.state(), path)?;
    }

    if config.batch_mode || halted {
        return Ok(if halted {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    let mut repl = Repl::new()?.with_session(session);
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }
    repl.run()?;
    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &ScriptReport) {
    let source = report.source.as_deref().unwrap_or("<input>");
    for step in report.steps.iter().filter(|s| !s.outcome.is_executed()) {
        eprintln!(
            "\x1b[33m{source}:{}\x1b[0m {}: {}",
            step.line_number,
            step.cmd_err(),
            step.line.trim()
        );
        for message in step.messages() {
            eprintln!("    {message}");
        }
    }
}

fn dump_state(session: &Session) {
    let state = session.state();
    println!("\x1b[1;36m=== Game Data ===\x1b[0m");
    for line in state.game_data().dump() {
        println!("  {line}");
    }
    println!("\x1b[1;36m=== Pouch ===\x1b[0m");
    println!("Broken slots: {}", state.pouch().offset());
    for slot in state.pouch().displayed_slots(session.config().icon_animated) {
        println!("  {slot}");
    }
    println!();
}

fn print_help() {
    println!(
        "\x1b[1mSatchel\x1b[0m - Inventory simulator

\x1b[1mUSAGE:\x1b[0m
    satchel [OPTIONS] [SCRIPTS...]

\x1b[1mARGUMENTS:\x1b[0m
    [SCRIPTS...]    Scripts to run before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Run scripts and exit (no REPL)
    --items FILE       Item names, one per line (default: accept any name)
    --load PATH        Start from a saved state
    --save PATH        Write the state after running scripts
    --dump             Print game data and pouch after running scripts
    --halt-on-error    Stop a script at the first failing command
    --trace            Log every command as it runs
    -v, --verbose      More log output (repeat for more)

\x1b[1mEXAMPLES:\x1b[0m
    satchel                              Start interactive REPL
    satchel --items items.txt run.txt    Run run.txt, then start REPL
    satchel -b --dump run.txt            Run run.txt, print state, exit

\x1b[1mREPL COMMANDS:\x1b[0m
    :help                Show REPL commands
    :pouch               Show the visible inventory
    :dump [save]         Show game data or a save
    Ctrl+D               Exit REPL"
    );
}
