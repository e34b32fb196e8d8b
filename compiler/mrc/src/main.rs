//! MetaReal Compiler CLI

use mr_lexer::LexConfig;
use mrc::commands::lex_file;
use mrc::{init_tracing, repl, VERSION};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        println!("MetaReal Compiler version {VERSION}");
        println!();
        let stdin = std::io::stdin();
        if let Err(e) = repl::run(stdin.lock(), std::io::stdout(), &LexConfig::default()) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
        return;
    };

    match command.as_str() {
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: mrc lex <file.mr>");
                std::process::exit(1);
            };
            lex_file(path);
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => println!("mrc {VERSION}"),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("MetaReal Compiler");
    println!();
    println!("Usage: mrc [command]");
    println!();
    println!("Commands:");
    println!("  lex <file.mr>        Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("With no command, mrc starts an interactive prompt that");
    println!("tokenizes each line it reads.");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>    Enable tracing (e.g. mr_lexer=debug)");
    println!("  MR_LOG_TREE=1        Print traces as an indented tree");
}
