//! Motif CLI
//!
//! Reduces infix arithmetic by pattern-driven rewriting and prints each step.

use motifc::commands::{eval, parse_eval_args, tokens};

fn main() {
    motifc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    tracing::debug!(command = %args[1], "dispatching");
    match args[1].as_str() {
        "eval" => {
            let (expr, options) = match parse_eval_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!("Usage: motif eval <expr> [--max-steps=<n>] [--quiet]");
                    std::process::exit(1);
                }
            };
            match eval(&expr, &options) {
                Ok(lines) => {
                    for line in lines {
                        println!("{line}");
                    }
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "tokens" => {
            if args.len() < 3 {
                eprintln!("Usage: motif tokens <expr>");
                std::process::exit(1);
            }
            match tokens(&args[2..].join(" ")) {
                Ok(lines) => {
                    for line in lines {
                        println!("{line}");
                    }
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Motif - pattern-driven rewriting");
    println!();
    println!("Usage: motif <command> [args]");
    println!();
    println!("Commands:");
    println!("  eval <expr>     Reduce an arithmetic expression, printing each step");
    println!("  tokens <expr>   Show the tokens an expression splits into");
    println!("  help            Show this message");
    println!();
    println!("Options for eval:");
    println!("  --max-steps=<n>   Abort after n rewrites (default 10000)");
    println!("  -q, --quiet       Print only the result");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=motif_rewrite=debug) for tracing output.");
}
