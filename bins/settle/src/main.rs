//! Tripsplit settlement harness.
//!
//! Reads an already-fetched trip record (JSON) from a file or stdin, runs the
//! settlement engine, and prints the snapshot.
//!
//! Usage: tripsplit [--summary] [PATH]

use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tripsplit_core::trip::{ParticipantRole, TripRecord};
use tripsplit_core::{SnapshotAssembler, TripSnapshot};
use tripsplit_shared::config::{LogFormat, LoggingConfig};
use tripsplit_shared::{AppConfig, AppError};

/// Output mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Json,
    Summary,
}

#[derive(Debug)]
struct Args {
    output: Output,
    path: Option<String>,
}

fn print_usage() {
    println!("tripsplit [--summary] [PATH]");
    println!("  reads a trip record as JSON from PATH (or stdin) and prints its settlement");
    println!("options:");
    println!("  --summary   print a readable summary instead of JSON");
    println!("  --help      show this message");
}

fn parse_args(raw: &[String]) -> Result<Option<Args>, AppError> {
    let mut output = Output::Json;
    let mut path = None;

    for arg in raw {
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--summary" => output = Output::Summary,
            flag if flag.starts_with("--") => {
                return Err(AppError::Input(format!("unknown option: {flag}")));
            }
            value if path.is_none() => path = Some(value.to_string()),
            extra => return Err(AppError::Input(format!("unexpected argument: {extra}"))),
        }
    }

    Ok(Some(Args { output, path }))
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn read_record(path: Option<&str>) -> anyhow::Result<TripRecord> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| AppError::Input(e.to_string()))
            .with_context(|| format!("reading {path}"))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| AppError::Input(e.to_string()))
                .context("reading stdin")?;
            buf
        }
    };

    let record: TripRecord = serde_json::from_str(&raw)
        .map_err(|e| AppError::Input(e.to_string()))
        .context("parsing trip record")?;
    Ok(record)
}

fn write_summary(out: &mut impl Write, snapshot: &TripSnapshot) -> io::Result<()> {
    let currency = snapshot.currency;
    let budget = &snapshot.budget_report;

    writeln!(out, "Trip: {}", snapshot.trip_name)?;
    if budget.is_tracked {
        writeln!(
            out,
            "Budget: {} {currency} | Spent: {} {currency} ({}%)",
            budget.budget, budget.total_spend, budget.utilization_percent
        )?;
        if budget.is_over_budget {
            writeln!(out, "Over budget by {} {currency}", budget.overrun)?;
        } else {
            writeln!(out, "Remaining: {} {currency}", budget.remaining)?;
        }
    } else {
        writeln!(out, "Spent: {} {currency} (no budget set)", budget.total_spend)?;
    }

    let settlement = &snapshot.settlement;
    if !settlement.is_applicable {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(
        out,
        "Average cost per person ({} people): {} {currency}",
        settlement.member_count, settlement.share
    )?;
    for line in &settlement.lines {
        let marker = if line.participant.role == ParticipantRole::Organizer {
            " *"
        } else {
            ""
        };
        let sign = if line.balance.is_positive() { "+" } else { "" };
        writeln!(
            out,
            "  {}{marker} (paid {}): {sign}{} {currency} [{:?}]",
            line.participant.user.nickname, line.total_paid, line.balance, line.status
        )?;
    }

    let unattributed = snapshot.ledger.unattributed_total();
    if unattributed.is_positive() {
        writeln!(
            out,
            "  {unattributed} {currency} was paid by people no longer on the trip"
        )?;
    }

    Ok(())
}

fn run(args: &Args, config: &AppConfig) -> anyhow::Result<()> {
    let record = read_record(args.path.as_deref())?;
    let snapshot = SnapshotAssembler::from_config(&config.settlement)
        .assemble_record(&record)
        .map_err(AppError::from)
        .context("computing settlement")?;

    info!(
        trip_id = %snapshot.trip_id,
        participants = snapshot.ledger.participant_count(),
        "Settlement computed"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.output {
        Output::Json => {
            serde_json::to_writer_pretty(&mut out, &snapshot)
                .map_err(|e| AppError::Internal(e.to_string()))?;
            writeln!(out).map_err(|e| AppError::Internal(e.to_string()))?;
        }
        Output::Summary => {
            write_summary(&mut out, &snapshot).map_err(|e| AppError::Internal(e.to_string()))?;
        }
    }

    Ok(())
}

fn error_exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<AppError>().map_or(70, AppError::exit_code)
}

fn to_exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return to_exit_code(err.exit_code());
        }
    };

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("{err}");
            return to_exit_code(err.exit_code());
        }
    };

    init_tracing(&config.logging);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "Settlement failed");
            eprintln!("error: {err:#}");
            to_exit_code(error_exit_code(&err))
        }
    }
}
