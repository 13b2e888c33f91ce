// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::telemetry::setup_tracing;
use crate::poly::PolyCommands;
use crate::seq::SeqCommands;
use crate::{demo, poly, seq};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use labd_config::{load_config, AppConfig};
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "labd")]
#[command(about = "Integer polynomial arithmetic and DNA/RNA/protein sequence tools", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `labd -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    /// Flags win over the configured level; with neither, only warnings are shown.
    pub fn log_level(&self, configured: Option<Level>) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => configured.unwrap_or(Level::WARN),
            1 => Level::INFO,  // -v
            2 => Level::DEBUG, // -vv
            _ => Level::TRACE, // -vvv
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        let config = self.load_config()?;

        setup_tracing(self.log_level(config.log_level()?));
        info!("Config loaded from: {:?}", config.config_file());

        match self.command {
            Commands::Poly { command } => poly::execute(command)?,
            Commands::Seq { command } => seq::execute(command)?,
            Commands::Demo => demo::execute(config.demo())?,
        }

        Ok(())
    }

    pub fn load_config(&self) -> Result<AppConfig> {
        load_config(self.config.clone())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Polynomial operations
    Poly {
        #[command(subcommand)]
        command: PolyCommands,
    },

    /// DNA, RNA and protein sequence operations
    Seq {
        #[command(subcommand)]
        command: SeqCommands,
    },

    /// Run the polynomial and sequence walkthrough using the configured inputs
    Demo,
}
