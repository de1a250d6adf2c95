//! CLI helpers.

pub(crate) mod error;
mod output;
mod stderr_logger;

use core::fmt;
use std::ffi::OsString;
use std::io::Write;

use anyhow::{anyhow, bail, Result};

pub use self::error::{error_context, LineCol};
pub use self::output::{Output, OutputKind};

static STDERR_LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Compare answers against the expected ones.
pub fn check_expected<T>(value: &T, expected: &T) -> Result<()>
where
    T: fmt::Debug + PartialEq,
{
    if value != expected {
        bail!("{value:?} (value) != {expected:?} (expected)");
    }

    Ok(())
}

/// Input options.
#[derive(Default, Debug)]
pub struct Opts {
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
}

impl Opts {
    /// Parse CLI options from the process arguments and install the logger
    /// they ask for.
    pub fn parse() -> Result<Self> {
        let opts = Self::from_args(std::env::args_os().skip(1))?;

        if !opts.json {
            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Warn
            });

            log::set_logger(&STDERR_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse CLI options from the given arguments, not including the program
    /// name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();

        for arg in args {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    /// Construct the output sink selected by these options.
    pub fn output<O>(&self, out: O) -> Output<O>
    where
        O: Write,
    {
        Output::new(
            out,
            if self.json {
                OutputKind::Json
            } else {
                OutputKind::Normal
            },
        )
    }
}
