//! pseudoc CLI - pseudocode transpiler and runner

use std::env;
use std::fs;
use std::process::ExitCode;

use pseudoc::errors::print_error;
use pseudoc::render::{ast_to_json, render_ast};
use pseudoc::{CodeGenerator, ConsoleLog, JavaScriptGenerator, Lexer, Parser};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("pseudoc - Pseudocode Transpiler");
        println!("Version {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage: pseudoc <command> [options]");
        println!();
        println!("Commands:");
        println!("  parse <file>           Parse and dump the AST");
        println!("  compile <file> [-o <output>]");
        println!("                         Generate JavaScript");
        println!("  run <file> [--input <json>] [--export-ast <output>]");
        println!("                         Translate, execute, and print results");
        println!();
        return ExitCode::SUCCESS;
    }

    let command = &args[1];

    match command.as_str() {
        "parse" => {
            if args.len() < 3 {
                eprintln!("Error: missing file argument");
                return ExitCode::FAILURE;
            }

            let filename = &args[2];
            let source = match fs::read_to_string(filename) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error reading file '{}': {}", filename, e);
                    return ExitCode::FAILURE;
                }
            };

            let tokens = match Lexer::new(&source).tokenize() {
                Ok(tokens) => tokens,
                Err(e) => {
                    print_error(&source, &e);
                    return ExitCode::FAILURE;
                }
            };

            match Parser::new(tokens).parse() {
                Ok(program) => {
                    print!("{}", render_ast(&program));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    print_error(&source, &e);
                    ExitCode::FAILURE
                }
            }
        }
        "compile" => {
            if args.len() < 3 {
                eprintln!("Error: missing file argument");
                return ExitCode::FAILURE;
            }

            let filename = &args[2];

            let mut output = None;
            let mut i = 3;
            while i < args.len() {
                match args[i].as_str() {
                    "-o" | "--output" => {
                        if i + 1 < args.len() {
                            output = Some(args[i + 1].clone());
                            i += 2;
                        } else {
                            eprintln!("Error: -o requires an output path");
                            return ExitCode::FAILURE;
                        }
                    }
                    _ => {
                        eprintln!("Unknown option: {}", args[i]);
                        return ExitCode::FAILURE;
                    }
                }
            }

            let source = match fs::read_to_string(filename) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error reading file '{}': {}", filename, e);
                    return ExitCode::FAILURE;
                }
            };

            let tokens = match Lexer::new(&source).tokenize() {
                Ok(tokens) => tokens,
                Err(e) => {
                    print_error(&source, &e);
                    return ExitCode::FAILURE;
                }
            };

            let program = match Parser::new(tokens).parse() {
                Ok(program) => program,
                Err(e) => {
                    print_error(&source, &e);
                    return ExitCode::FAILURE;
                }
            };

            let mut generator = JavaScriptGenerator::new();
            let code = match generator.generate(&program) {
                Ok(code) => code,
                Err(e) => {
                    print_error(&source, &e);
                    return ExitCode::FAILURE;
                }
            };

            let output_path = output.unwrap_or_else(|| {
                let stem = std::path::Path::new(filename)
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("output");
                format!("{}.{}", stem, generator.file_extension())
            });

            match fs::write(&output_path, &code) {
                Ok(_) => {
                    println!("Generated: {} ({} bytes)", output_path, code.len());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error writing '{}': {}", output_path, e);
                    ExitCode::FAILURE
                }
            }
        }
        "run" => {
            if args.len() < 3 {
                eprintln!("Error: missing file argument");
                return ExitCode::FAILURE;
            }

            let filename = &args[2];

            let mut input_data = None;
            let mut export_ast = None;
            let mut i = 3;
            while i < args.len() {
                match args[i].as_str() {
                    "--input" => {
                        if i + 1 < args.len() {
                            input_data = Some(args[i + 1].clone());
                            i += 2;
                        } else {
                            eprintln!("Error: --input requires a JSON argument");
                            return ExitCode::FAILURE;
                        }
                    }
                    "--export-ast" => {
                        if i + 1 < args.len() {
                            export_ast = Some(args[i + 1].clone());
                            i += 2;
                        } else {
                            eprintln!("Error: --export-ast requires an output path");
                            return ExitCode::FAILURE;
                        }
                    }
                    _ => {
                        eprintln!("Unknown option: {}", args[i]);
                        return ExitCode::FAILURE;
                    }
                }
            }

            let source = match fs::read_to_string(filename) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error reading file '{}': {}", filename, e);
                    return ExitCode::FAILURE;
                }
            };

            let mut console = ConsoleLog::new();
            let result = pseudoc::run(&source, input_data.as_deref(), &mut console);

            for entry in console.entries() {
                eprintln!("[{}] {}", entry.severity, entry.message);
            }

            match result {
                Ok(output) => {
                    println!("{}", output.result_text);

                    if let Some(path) = export_ast {
                        let json = match ast_to_json(&output.ast) {
                            Ok(json) => json,
                            Err(e) => {
                                print_error(&source, &e);
                                return ExitCode::FAILURE;
                            }
                        };
                        if let Err(e) = fs::write(&path, json) {
                            eprintln!("Error writing '{}': {}", path, e);
                            return ExitCode::FAILURE;
                        }
                        eprintln!("AST exported to {}", path);
                    }

                    ExitCode::SUCCESS
                }
                Err(e) => {
                    print_error(&source, &e);
                    ExitCode::FAILURE
                }
            }
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            eprintln!("Run 'pseudoc' without arguments for usage information");
            ExitCode::FAILURE
        }
    }
}
