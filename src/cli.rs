use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    config::{Config, Mode},
    convert::{Converter, FailurePolicy},
    errors::ConfigError,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(name = "quiet", long = "quiet", short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert human-readable sizes (e.g. "2.5 GB", "10MiB") to byte counts
    Parse {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Convert byte counts to human-readable sizes
    Format {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Convert fields of newline-delimited JSON records
    Filter {
        #[arg(
            name = "convert",
            long = "convert",
            short = 'c',
            value_name = "FIELD=DIRECTION",
            required = true
        )]
        convert: Vec<String>,
        #[arg(name = "strict", long = "strict", alias = "abort")]
        strict: bool,
        #[arg(name = "summary", long = "summary", short = 's')]
        summary: bool,
        /// Input file; reads stdin when omitted or "-"
        input: Option<PathBuf>,
    },
}

impl TryInto<Config> for Args {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Config, Self::Error> {
        let mode = match self.command {
            Command::Parse { values } => Mode::Parse(values),
            Command::Format { values } => Mode::Format(values),
            Command::Filter {
                convert,
                strict,
                summary,
                input,
            } => {
                let mappings = convert
                    .iter()
                    .map(|s| parse_mapping(s))
                    .collect::<Result<Vec<_>, _>>()?;

                let on_failure = if strict {
                    FailurePolicy::Abort
                } else {
                    FailurePolicy::Skip
                };

                Mode::Filter {
                    converter: Converter::new(mappings)?.with_failure_policy(on_failure),
                    input: input.filter(|p| p.as_os_str() != "-"),
                    summary,
                }
            }
        };

        Ok(Config {
            mode,
            quiet: self.quiet,
        })
    }
}

fn parse_mapping(s: &str) -> Result<(&str, &str), ConfigError> {
    match s.split_once('=') {
        Some((field, direction)) if !field.trim().is_empty() => {
            Ok((field.trim(), direction.trim()))
        }
        _ => Err(ConfigError::InvalidMapping(s.to_string())),
    }
}
