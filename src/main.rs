//! AP typing command line
//!
//! Runs one calculator per invocation, or an interactive prompt when no
//! subcommand is given.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};

use ap_typing::ap::{all_relations, derive_shadow_types};
use ap_typing::commands::{CommandError, CommandRegistry};
use ap_typing::format::{OutputFormat, TextFormatter};
use ap_typing::utils::init_tracing;

#[derive(Parser)]
#[command(author, version, about = "AP shadow types, intertype relations and triads")]
struct Cli {
    /// Output format
    #[arg(long, short, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Debug logging, and the skip log for shadow types
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Runs the interactive prompt when omitted
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand)]
enum CliCommand {
    /// List shadow types for an AP type and subtype
    Shadow {
        /// Any permutation of VLFE, e.g. VFEL
        ap_type: String,
        /// Four digits 0-4, e.g. 1340
        subtype: String,
    },

    /// Show the relation between two AP types
    Intertype { ap_type1: String, ap_type2: String },

    /// List all 17 intertype relations of an AP type
    Intertypes { ap_type: String },

    /// Triads for an Enneagram trifix (e.g. 925) or EI archetype (e.g. SPI SY-CY-UN)
    Triads {
        #[arg(required = true, num_args = 1..)]
        input: Vec<String>,
    },

    /// Coverage statistics over a list of AP types
    Stats {
        #[arg(required = true, num_args = 1..)]
        ap_types: Vec<String>,
    },
}

impl CliCommand {
    fn invocation(self) -> (&'static str, Vec<String>) {
        match self {
            CliCommand::Shadow { ap_type, subtype } => ("shadow", vec![ap_type, subtype]),
            CliCommand::Intertype { ap_type1, ap_type2 } => ("intertype", vec![ap_type1, ap_type2]),
            CliCommand::Intertypes { ap_type } => ("intertypes", vec![ap_type]),
            CliCommand::Triads { input } => ("triads", input),
            CliCommand::Stats { ap_types } => ("stats", ap_types),
        }
    }
}

fn run_command(
    registry: &CommandRegistry,
    command: CliCommand,
    format: OutputFormat,
    verbose: bool,
) -> Result<String, CommandError> {
    match (command, format) {
        (CliCommand::Intertypes { ap_type }, OutputFormat::Text) => {
            Ok(TextFormatter::intertypes_table(&all_relations(&ap_type)?))
        }
        (CliCommand::Shadow { ap_type, subtype }, OutputFormat::Text) if verbose => {
            Ok(TextFormatter::shadow_verbose(&derive_shadow_types(&ap_type, &subtype)?))
        }
        (command, format) => {
            let (name, args) = command.invocation();
            Ok(registry.execute(name, &args)?.render(format))
        }
    }
}

fn run_interactive(registry: &CommandRegistry) -> Result<()> {
    println!("Commands (q to quit):\n{}\n", registry.help_text());

    let stdin = io::stdin();
    loop {
        print!("ap> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.to_lowercase().as_str() {
            "quit" | "exit" | "q" => break,
            "help" => {
                println!("{}\n", registry.help_text());
                continue;
            }
            _ => {}
        }

        match registry.dispatch_line(line) {
            Ok(output) => println!("{}\n", output.summary),
            Err(e) => println!("Error: {}\n", e),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(if cli.verbose { "ap_typing=debug" } else { "ap_typing=warn" });

    let registry = CommandRegistry::with_defaults();
    let Some(command) = cli.command else {
        return run_interactive(&registry);
    };

    match run_command(&registry, command, cli.format, cli.verbose) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
