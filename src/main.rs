use std::{
    fs::File,
    io::{self, BufReader, IsTerminal},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use intcalc::repl::{Mode, OnError, Repl, Summary};

const PROMPT: &str = "calc> ";

/// intcalc evaluates integer arithmetic expressions, one line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every line of this file instead of reading standard input.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Stops at the first line that fails instead of moving on.
    #[arg(short, long)]
    exit_on_error: bool,

    /// Prints the tokens of each line instead of evaluating it.
    #[arg(short, long)]
    tokens: bool,

    /// A single expression to evaluate.
    expression: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let mut repl = Repl::new();
    if args.exit_on_error {
        repl = repl.on_error(OnError::Exit);
    }
    if args.tokens {
        repl = repl.mode(Mode::Tokens);
    }

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let result = if let Some(expression) = &args.expression {
        repl.run_expression(expression, &mut out, &mut err)
    } else if let Some(path) = &args.file {
        let Ok(file) = File::open(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        repl.run(BufReader::new(file), &mut out, &mut err)
    } else {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            repl = repl.prompt(PROMPT);
        }
        repl.run(stdin.lock(), &mut out, &mut err)
    };

    match result {
        Ok(Summary { failed: 0, .. }) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
