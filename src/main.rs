use std::{fs, io};

use calclang::{eval_line, repl::read_eval_print_loop};
use clap::Parser;

/// calclang is a minimal interactive calculator for nested call expressions
/// such as `add(2, mul(4, 6))`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calclang to look at a file instead of an expression, evaluating
    /// it line by line.
    #[arg(short, long)]
    file: bool,

    /// A single expression to evaluate. When omitted, calclang starts the
    /// interactive loop on standard input.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        if let Err(e) = read_eval_print_loop(stdin.lock(), &mut stdout) {
            eprintln!("{e}");
        }
        return;
    };

    let source = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        match eval_line(line) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
