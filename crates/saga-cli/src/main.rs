//! SAGA command line.
//!
//! `saga compile` runs the whole pipeline over script files and prints
//! what the store ends up holding; `saga codes` dumps the standard
//! symbol definitions file that the engine's tables generate.

use anyhow::Context;
use clap::{Parser, Subcommand};
use saga_compiler::{disassemble, parse_codes, write_codes, Compiler};
use saga_types::{CompileError, DEFAULT_BEHAVIOR};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "saga", about = "SAGA script compiler and inspector", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile script files and print their disassembly.
    Compile {
        /// Symbol definitions file; defaults to the built-in table.
        #[arg(long)]
        codes: Option<PathBuf>,
        /// Script files, compiled in registration order. The first
        /// becomes the default behavior substituted for missing files.
        #[arg(required = true)]
        scripts: Vec<PathBuf>,
        /// Emit listings as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the standard symbol definitions file.
    Codes,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Codes => {
            print!("{}", write_codes(&saga_vm::standard_symbols()));
            Ok(())
        }
        Command::Compile {
            codes,
            scripts,
            json,
        } => compile(codes, scripts, json),
    }
}

fn compile(codes: Option<PathBuf>, scripts: Vec<PathBuf>, json: bool) -> anyhow::Result<()> {
    let symbols = match &codes {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_codes(&text)
        }
        None => saga_vm::standard_symbols(),
    };

    let mut compiler = Compiler::new(symbols);
    let mut behaviors = Vec::new();
    let mut failed = 0usize;

    for path in &scripts {
        match compiler.compile_file(path) {
            Ok((id, diagnostics)) => {
                for diagnostic in &diagnostics.entries {
                    eprintln!("warning: {diagnostic}");
                }
                behaviors.push(id);
            }
            Err(CompileError::MissingScript { path }) => {
                eprintln!("warning: {path} missing, using the default behavior");
                behaviors.push(DEFAULT_BEHAVIOR);
            }
            Err(err) => {
                eprintln!("error: {err}");
                failed += 1;
            }
        }
    }

    for id in behaviors {
        let listing = disassemble(compiler.store(), compiler.symbols(), id);
        if json {
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            print!("{listing}");
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} script(s) failed to load");
    }
    Ok(())
}
