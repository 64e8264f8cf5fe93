//! Word Ladder CLI
//!
//! Computes the shortest single-letter substitution ladder between two words
//! over a whitespace-separated dictionary file.

use std::process;
use std::time::Instant;

use word_ladder::{Dictionary, LadderError, LadderResult, LadderSolver};

const USAGE_TEXT: &str = include_str!("text/usage.txt");

struct Args {
    source: String,
    target: String,
    dictionary_path: String,
}

fn parse_args() -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut dictionary_path = String::from("dictionary.txt");
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE_TEXT);
                process::exit(0);
            }
            "--dictionary" | "-d" => match args.next() {
                Some(path) => dictionary_path = path,
                None => return Err("expected a path after --dictionary".to_string()),
            },
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() != 2 {
        return Err(format!(
            "expected 2 arguments <source> <target>; received: {} arguments",
            positional.len()
        ));
    }

    let mut positional = positional.into_iter();
    Ok(Args {
        source: positional.next().unwrap_or_default(),
        target: positional.next().unwrap_or_default(),
        dictionary_path,
    })
}

fn fatal(err: &LadderError) -> ! {
    eprintln!("ERROR: {}", err);
    process::exit(1);
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("ERROR: {}", message);
            eprintln!();
            eprintln!("{}", USAGE_TEXT);
            process::exit(1);
        }
    };

    // Unequal lengths are a usage error, caught before any file I/O.
    if args.source.len() != args.target.len() {
        fatal(&LadderError::UnequalLengths {
            source_len: args.source.len(),
            target_len: args.target.len(),
        });
    }

    let start_time = Instant::now();

    let dictionary = match Dictionary::load_from_path(&args.dictionary_path, args.source.len()) {
        Ok(dictionary) => dictionary,
        Err(err) => fatal(&err),
    };

    let solver = LadderSolver::new(&dictionary);
    let result = match solver.solve(&args.source, &args.target) {
        Ok(result) => result,
        Err(err) => fatal(&err),
    };

    let elapsed = start_time.elapsed();

    match result {
        LadderResult::Found(steps) => {
            println!("{}->{} found in: {} steps", args.source, args.target, steps);
        }
        LadderResult::Unreachable => {
            println!("{}->{} no such path exists.", args.source, args.target);
        }
    }
    println!("Elapsed time: {:.2?}", elapsed);
}
