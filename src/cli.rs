//! Command line options for the `sensor_sweep` binary.

use std::ffi::OsString;

use anyhow::{bail, Context, Result};
use log::LevelFilter;

pub const DEFAULT_ROW: i64 = 2_000_000;
pub const DEFAULT_SIZE: i64 = 4_000_000;

#[derive(Debug, PartialEq, Eq)]
pub struct Opts {
    /// Row to count excluded columns on.
    pub row: i64,
    /// Upper bound of the square searched for the gap.
    pub size: i64,
    /// Spread the gap search over the rayon pool.
    pub parallel: bool,
    verbose: bool,
    quiet: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Opts {
            row: DEFAULT_ROW,
            size: DEFAULT_SIZE,
            parallel: false,
            verbose: false,
            quiet: false,
        }
    }
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        Self::parse_from(std::env::args_os().skip(1))
    }

    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--row" => {
                    opts.row = number(it.next(), "--row")?;
                }
                "--size" => {
                    opts.size = number(it.next(), "--size")?;
                }
                "--parallel" => {
                    opts.parallel = true;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "-q" | "--quiet" => {
                    opts.quiet = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        if let Some(extra) = it.next() {
            bail!("unexpected trailing argument: {}", extra.to_string_lossy());
        }

        Ok(opts)
    }

    pub fn log_level(&self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => LevelFilter::Error,
            (false, true) => LevelFilter::Debug,
            (false, false) => LevelFilter::Info,
        }
    }
}

fn number(value: Option<OsString>, flag: &str) -> Result<i64> {
    let value = value.with_context(|| format!("missing argument to `{flag}`"))?;
    let value = value
        .to_str()
        .with_context(|| format!("missing string argument to `{flag}`"))?;
    value
        .parse()
        .with_context(|| format!("bad argument to `{flag}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Opts> {
        Opts::parse_from(args.iter().map(OsString::from))
    }

    #[test]
    fn test_defaults() {
        let opts = parse(&[]).unwrap();
        assert_eq!(opts, Opts::default());
        assert_eq!(opts.row, 2_000_000);
        assert_eq!(opts.size, 4_000_000);
        assert_eq!(opts.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let opts = parse(&["--row", "10", "--size", "20", "--parallel", "-V"]).unwrap();
        assert_eq!(opts.row, 10);
        assert_eq!(opts.size, 20);
        assert!(opts.parallel);
        assert_eq!(opts.log_level(), LevelFilter::Debug);

        let opts = parse(&["--row", "-3", "--quiet", "--verbose"]).unwrap();
        assert_eq!(opts.row, -3);
        assert_eq!(opts.log_level(), LevelFilter::Error);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(parse(&["--row"]).is_err());
        assert!(parse(&["--size", "lots"]).is_err());
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(parse(&["--", "extra"]).is_err());
        assert!(parse(&["--"]).is_ok());
    }
}
