//! CLI tool for credit card checks.
//!
//! # Usage
//!
//! ```bash
//! # Validate a card number
//! cardcheck validate "4111 1111 1111 1111"
//!
//! # Same, as JSON
//! cardcheck validate 371449635398431 --output json
//!
//! # Group digits for display
//! cardcheck format 371449635398431
//!
//! # Validate one number per line from a file (or stdin)
//! cardcheck batch numbers.txt --parallel
//!
//! # Generate test card numbers
//! cardcheck generate --network amex --count 5
//! ```
//!
//! Exit codes for `validate`: 0 valid, 1 checksum failed, 2 input rejected.

use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use cardcheck::batch::{validate_batch, validate_batch_parallel, BatchSummary};
use cardcheck::{
    format, generate, mask, network, normalize, passes_luhn, validate_card, CardNetwork,
    ValidationError, ValidationResult,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(author, version, about = "Credit card number checker")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a credit card number
    Validate {
        /// Card number (any separators allowed)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Group a card number for display
    Format {
        /// Card number to format
        card_number: String,

        /// Separator to use
        #[arg(short, long, default_value = " ")]
        separator: String,
    },

    /// Detect the card network from a (partial) number
    Detect {
        /// Card number or prefix
        card_number: String,
    },

    /// Check the Luhn checksum only, ignoring length
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Mask a card number down to its last 4 digits
    Mask {
        /// Card number to mask
        card_number: String,
    },

    /// Generate test card numbers (for testing only)
    Generate {
        /// Network to generate for
        #[arg(short, long, default_value = "visa")]
        network: NetworkArg,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Output grouped with spaces
        #[arg(short, long)]
        formatted: bool,
    },

    /// Validate one card number per line
    Batch {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Validate across all cores
        #[arg(short, long)]
        parallel: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum NetworkArg {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Jcb,
    DinersClub,
    Unknown,
}

impl From<NetworkArg> for CardNetwork {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Visa => CardNetwork::Visa,
            NetworkArg::Mastercard => CardNetwork::Mastercard,
            NetworkArg::Amex => CardNetwork::AmericanExpress,
            NetworkArg::Discover => CardNetwork::Discover,
            NetworkArg::Jcb => CardNetwork::Jcb,
            NetworkArg::DinersClub => CardNetwork::DinersClub,
            NetworkArg::Unknown => CardNetwork::Unknown,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "cardcheck=debug,info" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate {
            card_number,
            output,
        } => cmd_validate(&card_number, output),
        Commands::Format {
            card_number,
            separator,
        } => {
            let digits = normalize(&card_number);
            println!("{}", format::format_with_separator(&digits, &separator));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Detect { card_number } => {
            let digits = normalize(&card_number);
            if digits.is_empty() {
                eprintln!("Error: no digits provided");
                return Ok(ExitCode::from(2));
            }
            println!("Detected Network: {}", network::classify(&digits).name());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Luhn { card_number } => {
            if passes_luhn(&card_number) {
                println!("Luhn check: PASS");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("Luhn check: FAIL");
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Mask { card_number } => {
            println!("{}", mask::mask_string(&card_number));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Generate {
            network,
            count,
            formatted,
        } => {
            for card in generate::generate_cards(network.into(), count) {
                if formatted {
                    println!("{}", format::format_card_number(&card));
                } else {
                    println!("{}", card);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Batch {
            file,
            parallel,
            output,
        } => cmd_batch(file, parallel, output),
    }
}

/// Exit status for `validate`: 0 valid, 1 checksum failed, 2 input rejected.
fn validate_status(outcome: &Result<ValidationResult, ValidationError>) -> u8 {
    match outcome {
        Ok(result) if result.is_valid() => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

fn cmd_validate(card_number: &str, output: OutputFormat) -> anyhow::Result<ExitCode> {
    let outcome = validate_card(card_number);
    let status = validate_status(&outcome);

    match &outcome {
        Ok(result) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: {}", if result.is_valid() { "yes" } else { "no" });
                    println!("Network: {}", result.card_type().name());
                    println!("Formatted: {}", result.formatted());
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
            }
        }
        Err(e) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: no");
                    println!("Error: {}", e);
                }
                OutputFormat::Json => {
                    let body = json!({ "error": e.kind(), "message": e.to_string() });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
            }
        }
    }

    Ok(ExitCode::from(status))
}

fn cmd_batch(file: Option<PathBuf>, parallel: bool, output: OutputFormat) -> anyhow::Result<ExitCode> {
    let reader: Box<dyn BufRead> = match &file {
        Some(path) => Box::new(BufReader::new(
            std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let lines = reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("reading card numbers")?;
    let lines: Vec<String> = lines.into_iter().filter(|l| !l.trim().is_empty()).collect();

    tracing::info!(count = lines.len(), parallel, "validating batch");

    let results = if parallel {
        validate_batch_parallel(&lines)
    } else {
        validate_batch(&lines)
    };
    let summary = BatchSummary::from_results(&results);

    match output {
        OutputFormat::Text => {
            for (line, result) in results.iter().enumerate() {
                match result {
                    Ok(r) => println!(
                        "{:>5}  {:<15}  {:<7}  {}",
                        line + 1,
                        r.card_type().id(),
                        if r.is_valid() { "valid" } else { "invalid" },
                        r.masked()
                    ),
                    Err(e) => println!("{:>5}  error: {}", line + 1, e),
                }
            }
            println!(
                "total {}, valid {}, invalid {}, errors {}",
                summary.total, summary.valid, summary.invalid, summary.errors
            );
        }
        OutputFormat::Json => {
            let entries: Vec<_> = results
                .iter()
                .map(|r| match r {
                    Ok(r) => json!({
                        "isValid": r.is_valid(),
                        "cardType": r.card_type(),
                        "masked": r.masked(),
                    }),
                    Err(e) => json!({ "error": e.kind(), "message": e.to_string() }),
                })
                .collect();
            let body = json!({ "results": entries, "summary": &summary });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(if summary.valid == summary.total {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
