use anyhow::Context;
use clap::{Parser, ValueEnum};
use clinic_core::{
    config::{reference_date_from_env_value, reject_policy_from_env_value},
    constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE},
    report::write_report,
    Clinic, ClinicConfig, RejectPolicy, ReportFormat,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Rank patients by abnormal vital signs")]
struct Cli {
    /// Input file of PATIENT and RECORD entries (prompted for if omitted)
    #[arg(long, env = "CLINIC_INPUT")]
    input: Option<PathBuf>,
    /// Report destination (prompted for if omitted)
    #[arg(long, env = "CLINIC_OUTPUT")]
    output: Option<PathBuf>,
    /// Abort on the first rejected entry instead of skipping it
    #[arg(long)]
    strict: bool,
    /// Compute ages as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    as_of: Option<String>,
    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

/// Ask for a path on stdin; an empty answer takes `default`.
fn prompt_path(label: &str, default: &str) -> anyhow::Result<PathBuf> {
    print!("Enter path to {label} file (default: {default}): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim();

    Ok(PathBuf::from(if answer.is_empty() { default } else { answer }))
}

/// Resolve configuration once: flags first, then `CLINIC_*` environment variables.
fn resolve_config(cli: &Cli) -> anyhow::Result<ClinicConfig> {
    let reject_policy = if cli.strict {
        RejectPolicy::Strict
    } else {
        reject_policy_from_env_value(std::env::var("CLINIC_REJECT_POLICY").ok())?
    };
    let as_of = cli
        .as_of
        .clone()
        .or_else(|| std::env::var("CLINIC_AS_OF").ok());
    let reference_date = reference_date_from_env_value(as_of)?;
    tracing::debug!(
        "reject policy {:?}, reference date {:?}",
        reject_policy,
        reference_date
    );

    Ok(ClinicConfig::new(reject_policy, reference_date))
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_core=info".parse()?)
                .add_directive("clinic=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;

    let input = match cli.input.clone() {
        Some(path) => path,
        None => prompt_path("input", DEFAULT_INPUT_FILE)?,
    };
    let output = match cli.output.clone() {
        Some(path) => path,
        None => prompt_path("output", DEFAULT_OUTPUT_FILE)?,
    };

    let started = Instant::now();

    println!("\n(1/3) Reading and processing data...");
    let clinic = Clinic::from_file(cfg, &input)
        .with_context(|| format!("processing {}", input.display()))?;

    println!("(2/3) Writing report...");
    let report = clinic.generate_report_as(cli.format.into())?;
    write_report(&output, &report).with_context(|| format!("writing {}", output.display()))?;

    println!(
        "(3/3) Report written to {} successfully in {} ms",
        output.display(),
        started.elapsed().as_millis()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "clinic",
            "--input",
            "in.txt",
            "--output",
            "out.json",
            "--strict",
            "--as-of",
            "2025-06-01",
            "--format",
            "json",
        ])
        .expect("valid arguments");

        assert_eq!(cli.input, Some(PathBuf::from("in.txt")));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert!(matches!(cli.format, Format::Json));

        let cfg = resolve_config(&cli).expect("config");
        assert_eq!(cfg.reject_policy(), RejectPolicy::Strict);
        assert!(matches!(
            cfg.reference_date(),
            clinic_core::ReferenceDate::Fixed(_)
        ));
        assert_eq!(cfg.today().to_string(), "2025-06-01");
    }

    #[test]
    fn rejects_bad_as_of_date() {
        let cli = Cli::try_parse_from(["clinic", "--as-of", "June 1st"]).expect("parses as text");
        assert!(resolve_config(&cli).is_err());
    }
}
