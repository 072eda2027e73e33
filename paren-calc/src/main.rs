use std::fs;
use clap::{Parser, Subcommand};
use log::{info, warn, LevelFilter};

use paren_calc::backends::{interpreter, BackendType, CodeGenerator, StackMachine};
use paren_calc::error::CompileError;
use paren_calc::{parser, Driver};

const DEMO_PROGRAM: &str = include_str!("../programs/demo.calc");

#[derive(Parser)]
#[command(name = "paren-calc")]
#[command(about = "Code generator and interpreter for parenthesized arithmetic", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code for and evaluate every expression
    Run {
        /// Source file (the built-in demo program when omitted)
        input: Option<String>,

        /// Inline source instead of a file
        #[arg(short, long, conflicts_with = "input")]
        expr: Option<String>,

        /// Backend to run, repeatable (all of them by default)
        #[arg(short, long)]
        backend: Vec<String>,

        /// Show each parsed tree
        #[arg(long)]
        show_tree: bool,

        /// Execute the generated code on the stack machine as well
        #[arg(long)]
        execute: bool,
    },

    /// Show tokens and trees without running any backend
    Parse {
        /// Source file (the built-in demo program when omitted)
        input: Option<String>,

        /// Inline source instead of a file
        #[arg(short, long, conflicts_with = "input")]
        expr: Option<String>,
    },

    /// List the available backends
    Backends,
}

fn load_source(input: Option<String>, expr: Option<String>) -> Result<String, CompileError> {
    match (input, expr) {
        (_, Some(expr)) => Ok(expr),
        (Some(path), None) => {
            info!("reading {}", path);
            Ok(fs::read_to_string(&path)?)
        }
        (None, None) => Ok(DEMO_PROGRAM.to_string()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { input, expr, backend, show_tree, execute } => {
            let source = load_source(input, expr)?;

            let backends = if backend.is_empty() {
                BackendType::all()
            } else {
                backend
                    .iter()
                    .map(|name| BackendType::from_name(name))
                    .collect::<Result<Vec<_>, _>>()?
            };

            println!("\tProgram: {}\n", source);

            let mut driver = Driver::with_backends(&source, &backends);
            let mut generator = CodeGenerator::new();
            let mut machine = StackMachine::new();

            while let Some(output) = driver.next_output()? {
                if show_tree {
                    println!("=== TREE ===");
                    println!("{} (depth {})", output.expression, output.expression.depth());
                    println!("{:#?}", output.expression);
                }

                for record in &output.records {
                    println!("{}", record);
                }

                if execute {
                    let code = generator.generate(&output.expression);
                    let expected = interpreter::evaluate(&output.expression);
                    for printed in machine.execute(&code)? {
                        println!("{} (stack machine)", printed);
                        if printed.value != expected {
                            warn!("stack machine printed {}, interpreter gave {}", printed.value, expected);
                        }
                    }
                }
            }

            println!("\n\tEnd");
        }
        Commands::Parse { input, expr } => {
            let source = load_source(input, expr)?;

            println!("=== SOURCE ===");
            println!("{}", source);
            println!("=== TOKENS ===");

            for token in parser::tokenize(&source) {
                println!("{:>4}: {}", token.line, token);
            }

            println!("=== TREES ===");
            match parser::parse(&source) {
                Ok(expressions) => {
                    for expression in &expressions {
                        println!("{:#?}", expression);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                }
            }
        }
        Commands::Backends => {
            println!("Available backends:");
            for backend in BackendType::all() {
                println!("  {:8} - {}", backend.name(), backend.description());
            }
        }
    }

    Ok(())
}
