// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::str::FromStr;

use anyhow::anyhow;
use tracing::Level;

/// A log level name accepted in configuration: `error`, `warn`, `info`, `debug` or `trace`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidLogLevel(Level);

impl FromStr for ValidLogLevel {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_str(s.trim())
            .map(ValidLogLevel)
            .map_err(|_| anyhow!("invalid log level '{s}' (expected error, warn, info, debug or trace)"))
    }
}

impl From<ValidLogLevel> for Level {
    fn from(value: ValidLogLevel) -> Self {
        value.0
    }
}
