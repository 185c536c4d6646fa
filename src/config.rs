use std::{ffi::OsString, path::PathBuf};

use anyhow::anyhow;
use clap::Parser;

use crate::{cli::Args, convert::Converter};

pub struct Config {
    pub mode: Mode,
    pub quiet: bool,
}

impl Config {
    pub fn parse<I, T>(itr: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Args::try_parse_from(itr) {
            Ok(args) => Ok(args.try_into()?),
            Err(err) => Err(anyhow!("error parsing arguments into Config: {}", err)),
        }
    }
}

pub enum Mode {
    Parse(Vec<String>),
    Format(Vec<String>),
    Filter {
        converter: Converter,
        input: Option<PathBuf>,
        summary: bool,
    },
}
