// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # roulette-state
//!
//! Reads raffle or participation snapshots as JSON (from a file or stdin)
//! and prints the resolved views as JSON on stdout. Logs go to stderr.
//!
//! ```text
//! roulette-state raffle raffle.json --participating
//! curl -s $API/roulettes/ | roulette-state list --now 2025-01-01T00:00:00Z
//! roulette-state participations mine.json --filter won --pretty
//! ```

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use roulette_api::{
    ParticipationView, RaffleView, resolve_participation_views, resolve_raffle_views,
};
use roulette_domain::{ParticipationState, format_timestamp, parse_timestamp};
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let output = args.run()?;
    println!("{output}");
    Ok(())
}

/// Roulette State - resolve raffle and participation lifecycle states
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Evaluation instant (ISO 8601). Defaults to the current time.
    #[arg(long, global = true)]
    now: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(&self) -> Result<String> {
        let now = resolve_now(self.now.as_deref())?;
        info!(
            now = format_timestamp(now).as_deref().unwrap_or("-"),
            "Resolving snapshots"
        );

        let input = read_input(self.command.input())?;
        self.command.execute(&input, now, self.pretty)
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Resolve a single raffle snapshot
    #[command(visible_alias = "r")]
    Raffle {
        /// JSON file to read; stdin when omitted or `-`
        input: Option<PathBuf>,

        /// The current user already participates in this raffle
        #[arg(long)]
        participating: bool,
    },

    /// Resolve a single participation snapshot
    #[command(visible_alias = "p")]
    Participation {
        /// JSON file to read; stdin when omitted or `-`
        input: Option<PathBuf>,
    },

    /// Resolve a raffle list response (bare array or paginated envelope)
    #[command(visible_alias = "l")]
    List {
        /// JSON file to read; stdin when omitted or `-`
        input: Option<PathBuf>,

        /// Id of a raffle the current user already participates in (repeatable)
        #[arg(long = "participating-id")]
        participating_ids: Vec<String>,
    },

    /// Resolve a participation list response with per-state counts
    Participations {
        /// JSON file to read; stdin when omitted or `-`
        input: Option<PathBuf>,

        /// Keep only participations in this state (won, active, completed)
        #[arg(long)]
        filter: Option<String>,
    },
}

impl Command {
    fn input(&self) -> Option<&Path> {
        match self {
            Self::Raffle { input, .. }
            | Self::Participation { input }
            | Self::List { input, .. }
            | Self::Participations { input, .. } => input.as_deref(),
        }
    }

    fn execute(&self, input: &Value, now: OffsetDateTime, pretty: bool) -> Result<String> {
        match self {
            Self::Raffle { participating, .. } => {
                render(&RaffleView::from_value(input, now, *participating), pretty)
            }
            Self::Participation { .. } => render(&ParticipationView::from_value(input, now), pretty),
            Self::List {
                participating_ids, ..
            } => {
                let participating: HashSet<String> = participating_ids.iter().cloned().collect();
                render(&resolve_raffle_views(input, now, &participating), pretty)
            }
            Self::Participations { filter, .. } => {
                let filter = filter
                    .as_deref()
                    .map(ParticipationState::from_str)
                    .transpose()
                    .wrap_err("invalid --filter value")?;
                render(&resolve_participation_views(input, now, filter), pretty)
            }
        }
    }
}

/// Captures the evaluation instant once for the whole run.
fn resolve_now(raw: Option<&str>) -> Result<OffsetDateTime> {
    match raw {
        Some(raw) => parse_timestamp(raw).ok_or_else(|| eyre!("invalid --now timestamp: '{raw}'")),
        None => Ok(OffsetDateTime::now_utc()),
    }
}

fn read_input(path: Option<&Path>) -> Result<Value> {
    let raw = match path {
        Some(path) if path.as_os_str() != "-" => {
            debug!(path = %path.display(), "Reading snapshot file");
            std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?
        }
        _ => {
            debug!("Reading snapshot from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("failed to read stdin")?;
            buffer
        }
    };

    serde_json::from_str(&raw).wrap_err("input is not valid JSON")
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.wrap_err("failed to encode output")
}
