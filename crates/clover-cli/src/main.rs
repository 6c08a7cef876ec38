//! Clover CLI - command-line interface for the Clover programming language.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process;

use clover::{CompileOptions, Driver, RunOptions, SourceBuffer};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What the command line asked for.
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Version,
    Interactive,
    Compile {
        options: CompileOptions,
        files: Vec<PathBuf>,
    },
    Run(RunOptions),
}

#[derive(Debug, PartialEq)]
struct Cli {
    command: Command,
    log_level: LevelFilter,
    /// Names passed to `-f` that aren't runtime flags.
    unknown_flags: Vec<String>,
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        print_usage();
        process::exit(1);
    }

    let cli = match parse_args(args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {}. use -h to get help", e);
            process::exit(1);
        }
    };

    init_logging(cli.log_level);
    for flag in &cli.unknown_flags {
        warn!("invalid flag: '{}'", flag);
    }

    if let Err(e) = execute(cli.command) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: Vec<String>) -> Result<Cli, String> {
    let mut compile_mode = false;
    let mut interactive = false;
    let mut options = CompileOptions::default();
    let mut run = RunOptions::default();
    let mut unknown_flags = Vec::new();
    let mut log_level = LevelFilter::WARN;
    let mut positional = Vec::new();
    let mut end_of_options = false;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if end_of_options || arg.len() < 2 || !arg.starts_with('-') {
            positional.push(arg);
            continue;
        }

        match arg.as_str() {
            "-h" | "--help" => return Ok(Cli::immediate(Command::Help)),
            "-v" | "--version" => return Ok(Cli::immediate(Command::Version)),
            "-c" => compile_mode = true,
            "-d" => options.debug_symbols = true,
            "-t" | "--tokens" => options.dump_tokens = true,
            "-i" | "--interactive" => interactive = true,
            "-f" => {
                let list = value_for(&arg, iter.next())?;
                unknown_flags.extend(run.flags.apply(&list));
            }
            "-m" => options.manifest = Some(PathBuf::from(value_for(&arg, iter.next())?)),
            "-o" => options.output = Some(PathBuf::from(value_for(&arg, iter.next())?)),
            "--log" => {
                let level = value_for(&arg, iter.next())?;
                log_level = level
                    .parse()
                    .map_err(|_| format!("invalid log level: '{}'", level))?;
            }
            "--" => end_of_options = true,
            _ => return Err(format!("invalid option: '{}'", arg)),
        }
    }

    if !compile_mode {
        for (option, used) in [
            ("-d", options.debug_symbols),
            ("-m", options.manifest.is_some()),
            ("-o", options.output.is_some()),
        ] {
            if used {
                return Err(format!("'{}' can only be used in combination with '-c'", option));
            }
        }
    }

    let command = if interactive {
        Command::Interactive
    } else if compile_mode {
        Command::Compile {
            options,
            files: positional.into_iter().map(PathBuf::from).collect(),
        }
    } else {
        let mut positional = positional.into_iter();
        let file = positional.next().ok_or("missing input file")?;
        run.file = PathBuf::from(file);
        run.args = positional.collect();
        Command::Run(run)
    };

    Ok(Cli {
        command,
        log_level,
        unknown_flags,
    })
}

impl Cli {
    fn immediate(command: Command) -> Self {
        Self {
            command,
            log_level: LevelFilter::WARN,
            unknown_flags: Vec::new(),
        }
    }
}

fn value_for(option: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("missing argument for option '{}'", option))
}

/// Install a stderr log subscriber at `level`.
fn init_logging(level: LevelFilter) {
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(io::stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(layer).init();
}

fn execute(command: Command) -> Result<(), String> {
    match command {
        Command::Help => print_usage(),
        Command::Version => print_version(),
        Command::Interactive => start_repl()?,
        Command::Compile { options, files } => {
            debug!(mode = "compile", ?options, ?files, "options");
            if let Err(e) = clover::compile(&files, options) {
                if !e.is_reported() {
                    eprintln!("error: {}", e);
                }
                return Err("compilation failed".to_string());
            }
        }
        Command::Run(options) => {
            debug!(
                mode = "run",
                jit = options.flags.jit,
                optimize = options.flags.optimize,
                file = %options.file.display(),
                args = ?options.args,
                "options"
            );
            clover::run(&options).map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}

fn print_usage() {
    println!(
        r#"Clover v{}

Usage:
  clover [-f flag1,-flag2...] <file> [--] [args...]
  clover -c [-d] [-t] [-m <manifest>] [-o <output>] [--] file...
  clover -i

Run options:
  -f FLAGS          Set runtime flags

Flags:
  - jit             Toggle Just-in-Time compiler
  - optimize        Toggle host specific optimizations

Compile options:
  -c                Compile program
  -d                Enable debug symbols
  -t, --tokens      Print the tokens of every file
  -m MANIFEST       Set manifest file
  -o FILE           Set output file name

General options:
  -i, --interactive Start the token inspector
  --log LEVEL       Log level: off, error, warn, info, debug, trace
  -h, --help        Displays this message and exits
  -v, --version     Displays program version and exits
"#,
        VERSION
    );
}

fn print_version() {
    println!(
        r#"clover {}

This is free software, and you are welcome to redistribute it
under the terms of the GNU Lesser General Public License 3.0.
This program comes with ABSOLUTELY NO WARRANTY!

License: <https://www.gnu.org/licenses/lgpl-3.0.html>"#,
        VERSION
    );
}

fn start_repl() -> Result<(), String> {
    println!("Clover v{} token inspector - Type 'exit' or Ctrl+D to quit", VERSION);
    println!();

    let mut rl = DefaultEditor::new().map_err(|e| format!("failed to create editor: {}", e))?;

    let options = CompileOptions {
        dump_tokens: true,
        ..CompileOptions::default()
    };
    let mut driver = Driver::new(options);

    loop {
        match rl.readline(">>> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "exit" || trimmed == "quit" {
                    println!("Goodbye!");
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(trimmed).ok(); // Ignore history errors

                let source = SourceBuffer::new("<repl>", line);
                // Lexical errors were already printed by the driver.
                if let Err(e) = driver.lex(&source) {
                    if !e.is_reported() {
                        eprintln!("error: {}", e);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(e) => {
                return Err(format!("readline error: {}", e));
            }
        }
    }

    Ok(())
}
