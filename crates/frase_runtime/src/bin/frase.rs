//! frase CLI entry point.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use frase_parser::Tracer;
use frase_runtime::display::format_analysis;
use frase_runtime::report::input_lines;
use frase_runtime::{BatchReport, Error, Repl, Result, explain_steps};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    trace: bool,
    json: bool,
    summary: bool,
    tree: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--trace" => config.trace = true,
            "--json" => config.json = true,
            "--summary" => config.summary = true,
            "--tree" => config.tree = true,
            arg if arg.starts_with('-') => {
                return Err(Error::usage(format!("unknown option: {arg}")));
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    if config.json && config.tree {
        return Err(Error::usage("--json and --tree cannot be combined"));
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<()> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("frase {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if config.trace {
        eprintln!("\x1b[33mDerivation tracing enabled (--trace)\x1b[0m\n");
    }

    // Gather batch input: files, or stdin in batch mode with no files
    let mut corpus = String::new();
    for file in &config.files {
        corpus.push_str(&fs::read_to_string(file)?);
        corpus.push('\n');
    }
    if config.batch_mode && config.files.is_empty() {
        io::stdin().read_to_string(&mut corpus)?;
    }

    if !corpus.is_empty() {
        run_batch(&config, &corpus)?;
    }

    if config.batch_mode {
        return Ok(());
    }

    let mut repl = Repl::new()?.with_tracing(config.trace);
    // If files were analyzed, suppress banner since context is established
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()
}

fn run_batch(config: &CliConfig, corpus: &str) -> Result<()> {
    let mut tracer = if config.trace {
        Tracer::to_stderr()
    } else {
        Tracer::disabled()
    };

    let lines = input_lines(corpus);
    let report = BatchReport::run(lines.iter().copied(), &mut tracer);

    if config.json {
        println!("{}", report.to_json_lines()?);
        if config.summary {
            println!("{}", serde_json::to_string(&report.summary())?);
        }
        return Ok(());
    }

    for entry in report.entries() {
        if config.tree {
            println!("{}", explain_steps(entry.analysis.source()));
        } else {
            println!("{}", format_analysis(&entry.analysis));
        }
    }

    if config.summary {
        println!("\n\x1b[1;36m=== Summary ===\x1b[0m\n{}", report.summary());
    }

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mfrase\x1b[0m - Spanish subject-verb-object sentence recognizer

\x1b[1mUSAGE:\x1b[0m
    frase [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files with one sentence per line to analyze before starting the REPL
                  (blank lines and lines starting with # are skipped)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Analyze files (or stdin) and exit (no REPL)
    --json             Print one JSON object per sentence
    --summary          Print aggregate counts and timings
    --tree             Print the step-by-step analysis with derivation tree

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace            Print derivation trace to stderr

\x1b[1mEXAMPLES:\x1b[0m
    frase                            Start interactive REPL
    frase corpus.txt                 Analyze corpus.txt, then start REPL
    frase -b --summary corpus.txt    Analyze corpus.txt, print summary, exit
    echo 'el perro come un hueso' | frase -b --tree

\x1b[1mREPL COMMANDS:\x1b[0m
    :help                Show commands
    :grammar             Show the grammar
    :vocab               Show the vocabulary
    :examples            Run the built-in examples
    :tree <sentence>     Step-by-step analysis with derivation tree
    :trace on|off        Toggle derivation tracing
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
