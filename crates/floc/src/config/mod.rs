//! Command-line configuration.
//!
//! Arguments are matched by hand, `--name=value` style. The probe used by
//! `inspect` defaults to the `FLO_PROBE` environment variable, then `none`.

use std::fmt;
use std::str::FromStr;

use flo_types::MAX_DEPTH;
use thiserror::Error;

/// Environment variable naming the default probe.
pub const PROBE_ENV: &str = "FLO_PROBE";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown probe '{0}', expected 'none' or 'system'")]
    UnknownProbe(String),

    #[error("invalid depth '{0}', expected 0 to {}", MAX_DEPTH)]
    InvalidDepth(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unknown option '{option}' for '{command}'")]
    UnknownOption { command: &'static str, option: String },
}

/// Which usable-size probe `inspect` builds its records with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProbeChoice {
    /// Report nothing; pointers come back `dynamic`.
    #[default]
    None,
    /// Ask the system allocator.
    System,
}

impl ProbeChoice {
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ProbeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProbeChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "system" => Ok(Self::System),
            other => Err(ConfigError::UnknownProbe(other.to_string())),
        }
    }
}

/// A parsed invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// List registered signatures, optionally only those of one depth.
    Table { depth: Option<u8> },
    /// Build records for the sample values.
    Inspect { probe: ProbeChoice },
    Help,
}

/// Parse the arguments after the program name.
///
/// `env_probe` is the value of [`PROBE_ENV`], if set; an explicit `--probe`
/// wins over it.
pub fn parse_command(args: &[String], env_probe: Option<&str>) -> Result<Command, ConfigError> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    match command.as_str() {
        "table" => {
            let mut depth = None;
            for arg in rest {
                if let Some(value) = arg.strip_prefix("--depth=") {
                    depth = Some(parse_depth(value)?);
                } else {
                    return Err(unknown_option("table", arg));
                }
            }
            Ok(Command::Table { depth })
        }
        "inspect" => {
            let mut explicit: Option<ProbeChoice> = None;
            for arg in rest {
                if let Some(value) = arg.strip_prefix("--probe=") {
                    explicit = Some(value.parse()?);
                } else {
                    return Err(unknown_option("inspect", arg));
                }
            }
            // The environment is only consulted, and only validated, when no
            // `--probe` was given.
            let probe = match explicit {
                Some(probe) => probe,
                None => env_probe
                    .map(str::parse::<ProbeChoice>)
                    .transpose()?
                    .unwrap_or_default(),
            };
            Ok(Command::Inspect { probe })
        }
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(ConfigError::UnknownCommand(other.to_string())),
    }
}

fn parse_depth(value: &str) -> Result<u8, ConfigError> {
    match value.parse::<u8>() {
        Ok(depth) if depth <= MAX_DEPTH => Ok(depth),
        _ => Err(ConfigError::InvalidDepth(value.to_string())),
    }
}

fn unknown_option(command: &'static str, option: &str) -> ConfigError {
    ConfigError::UnknownOption {
        command,
        option: option.to_string(),
    }
}

#[cfg(test)]
mod tests;
