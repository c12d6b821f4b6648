//! Quill CLI

use quillc::commands::{lex_file, parse_lex_options};

fn main() {
    quillc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: quill lex <file.js> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --module          Scan as module code (rejects HTML-like comments)");
                eprintln!("  --raw             Also print raw literal text");
                eprintln!("  --no-separators   Reject numeric separators");
                eprintln!("  --no-hashbang     Treat a leading #! as an error");
                std::process::exit(1);
            }
            match parse_lex_options(&args[3..]) {
                Ok(options) => lex_file(&args[2], &options),
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Quill {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Quill JavaScript scanner");
    println!();
    println!("Usage: quill <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.js>        Print the token stream of a file");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --module            Scan as module code");
    println!("  --raw               Also print raw literal text");
    println!("  --no-separators     Reject numeric separators");
    println!("  --no-hashbang       Treat a leading #! as an error");
    println!();
    println!("Set RUST_LOG=quill_lexer=trace to trace the scanner.");
}
