//! crates/logging/src/config.rs
//! Verbosity configuration combining info and debug levels.

use super::levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};
use thiserror::Error;

/// Failure to parse an info or debug flag token.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FlagParseError {
    /// The token was empty.
    #[error("empty flag token")]
    Empty,
    /// The flag name is not known for the requested category.
    #[error("unknown {category} flag: {name}")]
    UnknownFlag {
        /// Either `info` or `debug`.
        category: &'static str,
        /// The unrecognised flag name.
        name: String,
    },
    /// The trailing level could not be parsed.
    #[error("invalid level in flag: {token}")]
    InvalidLevel {
        /// The complete token that failed to parse.
        token: String,
    },
}

/// Combined verbosity configuration for info and debug flags.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VerbosityConfig {
    /// Info flag levels.
    pub info: InfoLevels,
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a verbose level (0-4).
    ///
    /// Levels above 4 behave like 4.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        match level {
            0 => {}
            1 => {
                config.info.flist = 1;
                config.info.skip = 1;
                config.info.symsafe = 1;
            }
            2 => {
                config.info.set_all(1);
                config.info.flist = 2;
                config.debug.flist = 1;
                config.debug.dup = 1;
            }
            3 => {
                config.info.set_all(2);
                config.debug.set_all(1);
                config.debug.flist = 2;
            }
            _ => {
                config.info.set_all(2);
                config.debug.set_all(3);
            }
        }

        config
    }

    /// Apply a single info flag token (e.g., "skip2", "flist", "ALL").
    pub fn apply_info_flag(&mut self, token: &str) -> Result<(), FlagParseError> {
        let (name, level) = parse_flag_token(token)?;

        if let Some(level) = all_or_none(name, level) {
            self.info.set_all(level);
            return Ok(());
        }

        let flag = InfoFlag::from_name(name).ok_or_else(|| FlagParseError::UnknownFlag {
            category: "info",
            name: name.to_owned(),
        })?;
        self.info.set(flag, level);
        Ok(())
    }

    /// Apply a single debug flag token (e.g., "dup2", "io").
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), FlagParseError> {
        let (name, level) = parse_flag_token(token)?;

        if let Some(level) = all_or_none(name, level) {
            self.debug.set_all(level);
            return Ok(());
        }

        let flag = DebugFlag::from_name(name).ok_or_else(|| FlagParseError::UnknownFlag {
            category: "debug",
            name: name.to_owned(),
        })?;
        self.debug.set(flag, level);
        Ok(())
    }

    /// Apply a comma separated list of info flag tokens.
    pub fn apply_info_flags(&mut self, list: &str) -> Result<(), FlagParseError> {
        for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            self.apply_info_flag(token)?;
        }
        Ok(())
    }

    /// Apply a comma separated list of debug flag tokens.
    pub fn apply_debug_flags(&mut self, list: &str) -> Result<(), FlagParseError> {
        for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            self.apply_debug_flag(token)?;
        }
        Ok(())
    }

    /// Default `tracing` filter directive matching this configuration.
    ///
    /// Warnings are always let through; info and debug output follow the
    /// highest configured level in the respective category.
    #[must_use]
    pub fn tracing_directive(&self) -> &'static str {
        if self.debug.max() > 0 {
            "treewalk=debug"
        } else if self.info.max() > 0 {
            "treewalk=info"
        } else {
            "treewalk=warn"
        }
    }
}

fn all_or_none(name: &str, level: u8) -> Option<u8> {
    if name.eq_ignore_ascii_case("all") {
        Some(level)
    } else if name.eq_ignore_ascii_case("none") {
        Some(0)
    } else {
        None
    }
}

/// Parse a flag token like "skip2" into ("skip", 2) or "flist" into ("flist", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), FlagParseError> {
    if token.is_empty() {
        return Err(FlagParseError::Empty);
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(pos) => {
            let (name, level) = token.split_at(pos);
            let level = level
                .parse::<u8>()
                .map_err(|_| FlagParseError::InvalidLevel {
                    token: token.to_owned(),
                })?;
            Ok((name, level))
        }
        None => Ok((token, 1)),
    }
}
