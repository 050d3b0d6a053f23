//! Violation lookup CLI
//!
//! Runs one lookup against the food-safety registries and prints the result.
//!
//! # Usage
//!
//! ```bash
//! violation_cli --name "파란김치"
//! violation_cli --name "파란김치" --address "서울특별시 강남구 테헤란로 152" -o json
//! ```

use clap::{Parser, ValueEnum};
use colored::Colorize;
use food_violation_lookup::config::API_KEY_ENV;
use food_violation_lookup::{
    BusinessQuery, LookupError, LookupOutcome, RegistryConfig, ViolationLookup,
};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "violation_cli")]
#[command(version = "0.1.0")]
#[command(about = "Check a food-service business for recorded hygiene violations")]
struct Cli {
    /// Business name as registered
    #[arg(long, short)]
    name: String,

    /// Address of the place, e.g. from a map search ("시/도 시/군/구 ...")
    #[arg(long, short)]
    address: Option<String>,

    /// Output format
    #[arg(long, short = 'o', default_value = "pretty", value_enum)]
    format: OutputFormat,

    /// Food-safety open API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = registry_config(cli.api_key.clone(), |name| std::env::var(name).ok())?;
    let lookup = ViolationLookup::from_config(config)?;

    let mut query = BusinessQuery::new(cli.name.clone());
    if let Some(address) = cli.address.clone() {
        query = query.with_address(address);
    }

    let outcome = lookup.lookup(&query).await?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome.into_records())?);
        }
        OutputFormat::Pretty => print_pretty(&cli.name, &outcome),
    }
    Ok(())
}

/// Registry config with the key taken from the command line (or its env
/// fallback) and everything else from `var`. No key is a configuration error.
fn registry_config(
    api_key: Option<String>,
    var: impl Fn(&str) -> Option<String>,
) -> Result<RegistryConfig, LookupError> {
    RegistryConfig::from_vars(|name| {
        if name == API_KEY_ENV {
            api_key.clone()
        } else {
            var(name)
        }
    })
}

fn print_pretty(name: &str, outcome: &LookupOutcome) {
    match outcome {
        LookupOutcome::NotFound => {
            println!("{} No record on file for {}", "✓".green(), name);
        }
        LookupOutcome::Violations(records) if records.is_empty() => {
            println!("{} {} is licensed with no violations on file", "✓".green(), name);
        }
        LookupOutcome::Violations(records) => {
            println!(
                "{} {} violation(s) on file for {}",
                "✗".red().bold(),
                records.len(),
                name
            );
            for record in records {
                let date = record
                    .decided_on()
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| record.decision_date.clone());
                println!();
                println!("  {}  {}", date.bold(), record.disposition_content);
                println!("    violation: {}", record.violation_content);
                println!("    basis:     {}", record.legal_basis);
                println!("    location:  {}", record.address);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_configuration_error() {
        let err = registry_config(None, |_| None).unwrap_err();
        assert!(matches!(err, LookupError::Configuration(_)));
    }

    #[test]
    fn test_blank_api_key_is_configuration_error() {
        let err = registry_config(Some("   ".into()), |_| None).unwrap_err();
        assert!(matches!(err, LookupError::Configuration(_)));
    }

    #[test]
    fn test_api_key_argument_wins_over_env_lookup() {
        let config = registry_config(Some("cli-key".into()), |name| {
            (name == API_KEY_ENV).then(|| "env-key".to_string())
        })
        .unwrap();
        assert_eq!(config.api_key, "cli-key");
    }

    #[test]
    fn test_cli_parses_without_api_key() {
        let cli = Cli::try_parse_from(["violation_cli", "--name", "Blue Kimchi"]).unwrap();
        assert_eq!(cli.name, "Blue Kimchi");
    }
}
