use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    process::ExitCode,
    time::Instant,
};

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::debug;

use bytes2human::{
    bytes::{format, parse},
    cli::Args,
    config::{Config, Mode},
    filter::filter_records,
    output::{errors::print_errors, summary::print_summary},
    stats::ConvertStats,
    utils::logging::setup_logging,
};

fn main() -> anyhow::Result<ExitCode> {
    setup_logging();

    let config: Config = Args::parse().try_into()?;
    let mut errors = Vec::new();

    let failed = match config.mode {
        Mode::Parse(values) => {
            let mut out = io::stdout().lock();
            for value in values {
                match parse(&value) {
                    Ok(bytes) => writeln!(out, "{bytes}")?,
                    Err(err) => errors.push(anyhow!(err)),
                }
            }
            !errors.is_empty()
        }
        Mode::Format(values) => {
            let mut out = io::stdout().lock();
            for value in values {
                match format(&value) {
                    Ok(human) => writeln!(out, "{human}")?,
                    Err(err) => errors.push(anyhow!(err)),
                }
            }
            !errors.is_empty()
        }
        Mode::Filter {
            converter,
            input,
            summary,
        } => {
            let start = Instant::now();
            let source = input
                .as_ref()
                .map_or_else(|| String::from("<stdin>"), |p| p.display().to_string());

            let reader: Box<dyn BufRead> = match &input {
                Some(path) => Box::new(BufReader::new(
                    File::open(path).with_context(|| format!("cannot open '{source}'"))?,
                )),
                None => Box::new(io::stdin().lock()),
            };
            let writer = BufWriter::new(io::stdout().lock());

            debug!(
                conversions = ?converter.conversions(),
                policy = ?converter.failure_policy(),
                source = %source,
                "filtering records"
            );

            let mut stats = ConvertStats::default();
            filter_records(reader, writer, &converter, &mut stats, &mut errors)?;

            if summary {
                print_summary(&source, &stats, start.elapsed());
            }
            stats.rejected_records > 0
        }
    };

    if !config.quiet && !errors.is_empty() {
        print_errors(&errors);
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
