// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path};
use crate::validation::ValidLogLevel;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::{env, io, path::PathBuf};
use tracing::Level;

pub const DEFAULT_CONFIG_NAME: &str = "labd.config.yaml";
pub const ENV_PREFIX: &str = "LABD_";

/// A named sequence used by the demo
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SequenceInput {
    pub identifier: String,
    pub data: String,
}

/// A point mutation used by the demo
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MutationInput {
    pub position: usize,
    pub residue: char,
}

/// Inputs for `labd demo`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Coefficient lists, highest degree first
    pub polynomials: Vec<Vec<i64>>,
    /// Point every demo polynomial is evaluated at
    pub eval_point: i64,
    pub dna: SequenceInput,
    pub mutation: MutationInput,
    pub motif: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            polynomials: vec![vec![4, 0, 0, 0], vec![7, -5, -2, 7, -19], vec![21]],
            eval_point: 2,
            dna: SequenceInput {
                identifier: "sekwencja1".to_string(),
                data: "ATACCCGATGCGATATCGAAAATAGATCTCA".to_string(),
            },
            mutation: MutationInput {
                position: 2,
                residue: 'A',
            },
            motif: "GAT".to_string(),
        }
    }
}

/// The application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Log level used when no `-v`/`--quiet` flag is given
    log_level: Option<String>,
    demo: DemoConfig,
    /// The file this configuration was read from, if any
    #[serde(skip)]
    config_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn log_level(&self) -> Result<Option<Level>> {
        self.log_level
            .as_deref()
            .map(|s| s.parse::<ValidLogLevel>().map(Into::into))
            .transpose()
    }

    pub fn demo(&self) -> &DemoConfig {
        &self.demo
    }

    pub fn config_file(&self) -> Option<&PathBuf> {
        self.config_file.as_ref()
    }

    fn validate(&self) -> Result<()> {
        self.log_level().context("Invalid `log_level` in configuration")?;
        Ok(())
    }
}

/// Build the configuration from defaults, the resolved YAML file (when it exists) and
/// `LABD_*` environment variables, in that order of precedence.
pub fn load_config(cli_file: Option<String>) -> Result<AppConfig> {
    let explicit = cli_file.is_some();
    let resolved_config_path = resolve_config_path(
        find_in_parent,
        env::current_dir()?,
        OsDirs::config_dir(),
        DEFAULT_CONFIG_NAME,
        cli_file.map(PathBuf::from),
    );

    let file_exists = resolved_config_path.exists();
    if explicit && !file_exists {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} does not exist", resolved_config_path.display()),
        ))
        .context("Configuration file not found");
    }

    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    if file_exists {
        figment = figment.merge(Yaml::file(&resolved_config_path));
    }

    let mut config: AppConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .context("Could not parse configuration")?;

    config.config_file = file_exists.then_some(resolved_config_path);
    config.validate()?;
    Ok(config)
}

pub struct OsDirs;
impl OsDirs {
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("labd")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn isolate(jail: &mut Jail) {
        let home = jail.directory().to_string_lossy().to_string();
        jail.set_env("HOME", &home);
        jail.set_env("XDG_CONFIG_HOME", format!("{home}/.config"));
    }

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|jail| {
            isolate(jail);

            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(config.demo(), &DemoConfig::default());
            assert_eq!(config.log_level().map_err(|e| e.to_string())?, None);
            assert!(config.config_file().is_none());
            Ok(())
        });
    }

    #[test]
    fn test_yaml_in_cwd() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                DEFAULT_CONFIG_NAME,
                r#"
log_level: debug
demo:
  polynomials:
    - [1, 2, 1]
  eval_point: 3
  motif: "cga"
"#,
            )?;

            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(
                config.log_level().map_err(|e| e.to_string())?,
                Some(Level::DEBUG)
            );
            assert_eq!(config.demo().polynomials, vec![vec![1, 2, 1]]);
            assert_eq!(config.demo().eval_point, 3);
            assert_eq!(config.demo().motif, "cga");
            // untouched sections keep their defaults
            assert_eq!(config.demo().mutation, DemoConfig::default().mutation);
            assert!(config.config_file().is_some());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "custom.yaml",
                r#"
log_level: info
demo:
  dna:
    identifier: "Strand"
    data: "acgt"
  mutation:
    position: 1
    residue: "T"
"#,
            )?;
            jail.set_env("LABD_LOG_LEVEL", "trace");
            jail.set_env("LABD_DEMO__EVAL_POINT", "-4");

            let config = load_config(Some("custom.yaml".to_string())).map_err(|e| e.to_string())?;
            assert_eq!(
                config.log_level().map_err(|e| e.to_string())?,
                Some(Level::TRACE)
            );
            assert_eq!(config.demo().eval_point, -4);
            assert_eq!(config.demo().dna.data, "acgt");
            assert_eq!(
                config.demo().mutation,
                MutationInput {
                    position: 1,
                    residue: 'T'
                }
            );
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_not_found() {
        Jail::expect_with(|jail| {
            isolate(jail);

            let Err(err) = load_config(Some("/nope/labd.yaml".to_string())) else {
                return Err("error expected".to_string().into());
            };
            let Some(e) = err.downcast_ref::<io::Error>() else {
                return Err("io error expected".to_string().into());
            };
            assert_eq!(e.kind(), io::ErrorKind::NotFound);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_log_level() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(DEFAULT_CONFIG_NAME, "log_level: loud\n")?;

            assert!(load_config(None).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_unknown_field_rejected() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(DEFAULT_CONFIG_NAME, "colour: blue\n")?;

            assert!(load_config(None).is_err());
            Ok(())
        });
    }
}
