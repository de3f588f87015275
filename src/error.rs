//! Error types.
//!
//! There are no recoverable failures inside the widget itself: missing
//! optional configuration falls back to defaults and a request for the
//! currently-active state is a logged no-op. Loading a config file is the
//! one fallible surface.

use thiserror::Error;

/// Errors raised while loading a bar configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A numeric field is outside its allowed range.
    #[error("invalid value for `{field}`: {value}")]
    InvalidValue {
        /// The offending field name.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A color has a component outside `[0, 1]`.
    #[error("color `{field}` has components outside [0, 1]")]
    InvalidColor {
        /// The offending field name.
        field: &'static str,
    },
}
