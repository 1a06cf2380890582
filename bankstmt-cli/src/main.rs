use anyhow::Result;
use bankstmt_ingest::{detect_bank, parse_statement};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bankstmt", version, about = "Bank statement PDF to transaction ledger")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a statement PDF into a canonical transaction ledger (JSON)
    Parse {
        /// Path to the statement PDF
        file: PathBuf,

        /// Password for protected statements
        #[arg(long)]
        password: Option<String>,

        /// Issuer id (skips detection), e.g. "enbd" or "rakbank"
        #[arg(long)]
        bank: Option<String>,
    },

    /// Detect the issuing bank from the first pages of a statement PDF
    Detect {
        /// Path to the statement PDF
        file: PathBuf,

        /// Password for protected statements
        #[arg(long)]
        password: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Parse { file, password, bank } => {
            match parse_statement(&file, password.as_deref(), bank.as_deref()) {
                Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
                Err(e) => {
                    // same tagged shape an HTTP front-end would forward
                    println!("{}", serde_json::json!({ "error": e.to_string() }));
                    std::process::exit(1);
                }
            }
        }

        Command::Detect { file, password } => match detect_bank(&file, password.as_deref()) {
            Some(bank) => println!("{}", bank.id()),
            None => println!("unknown"),
        },
    }

    Ok(())
}
