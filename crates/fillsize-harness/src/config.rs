#![forbid(unsafe_code)]

//! Harness configuration read from `FILLSIZE_*` environment variables.

use std::fmt;

use fillsize_core::{Axis, AxisParseError};
use fillsize_layout::{SizingError, SizingRequest};

pub const ENV_ITEMS: &str = "FILLSIZE_ITEMS";
pub const ENV_TOTAL: &str = "FILLSIZE_TOTAL";
pub const ENV_AXIS: &str = "FILLSIZE_AXIS";
pub const ENV_CROSS: &str = "FILLSIZE_CROSS";
pub const ENV_LOG_JSON: &str = "FILLSIZE_LOG_JSON";

const DEFAULT_ITEMS: usize = 4;
const DEFAULT_TOTAL: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub request: SizingRequest,
    pub cross: u32,
    pub log_json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessConfigError {
    InvalidNumber { var: &'static str, value: String },
    InvalidAxis(AxisParseError),
    InvalidRequest(SizingError),
}

impl fmt::Display for HarnessConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { var, value } => {
                write!(f, "{var}={value:?} is not a non-negative integer")
            }
            Self::InvalidAxis(err) => write!(f, "{ENV_AXIS}: {err}"),
            Self::InvalidRequest(err) => write!(f, "invalid sizing request: {err}"),
        }
    }
}

impl std::error::Error for HarnessConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidNumber { .. } => None,
            Self::InvalidAxis(err) => Some(err),
            Self::InvalidRequest(err) => Some(err),
        }
    }
}

impl HarnessConfig {
    pub fn from_env() -> Result<Self, HarnessConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from an arbitrary variable lookup. Unset or blank
    /// variables fall back to their defaults; malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HarnessConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let items = parse_number(ENV_ITEMS, get(ENV_ITEMS))?.unwrap_or(DEFAULT_ITEMS);
        let total = parse_number(ENV_TOTAL, get(ENV_TOTAL))?.unwrap_or(DEFAULT_TOTAL);
        let cross = parse_number(ENV_CROSS, get(ENV_CROSS))?.unwrap_or(0);
        let axis = get(ENV_AXIS)
            .map(|value| value.parse::<Axis>())
            .transpose()
            .map_err(HarnessConfigError::InvalidAxis)?
            .unwrap_or_default();
        let log_json = get(ENV_LOG_JSON)
            .is_some_and(|v| v.trim() == "1" || v.trim().eq_ignore_ascii_case("true"));

        let request =
            SizingRequest::new(items, total, axis).map_err(HarnessConfigError::InvalidRequest)?;
        Ok(Self {
            request,
            cross,
            log_json,
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    var: &'static str,
    value: Option<String>,
) -> Result<Option<T>, HarnessConfigError> {
    value
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| HarnessConfigError::InvalidNumber { var, value })
        })
        .transpose()
}
