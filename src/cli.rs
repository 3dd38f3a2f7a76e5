use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Printable monthly planner page generator.
#[derive(Parser)]
#[command(
    name = "planner",
    version,
    about = "Printable monthly planner page generator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render a planner page to SVG.
    Render(RenderArgs),
    /// Print the resolved page parameters as JSON.
    Params(PageArgs),
    /// List the days of a month with localized weekday names.
    Days(DaysArgs),
    /// List the localized month names of a year.
    Months(MonthsArgs),
    /// List the page size presets.
    Presets,
}

/// Sources of page parameters, applied in order: `--params`, `--config`,
/// then the individual overrides.
#[derive(clap::Args)]
pub struct PageArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to a parameter JSON object as stored by the editor.
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Override calendar year.
    #[arg(long)]
    pub year: Option<i32>,

    /// Override month (1-12).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Override language tag, e.g. "de-DE".
    #[arg(long)]
    pub lang: Option<String>,

    /// Override page size preset (A5, A4, A3, A2).
    #[arg(long)]
    pub page: Option<String>,

    /// Override comma-separated section names.
    #[arg(long)]
    pub sections: Option<String>,
}

/// Arguments for the `render` subcommand.
#[derive(clap::Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Output SVG path. Defaults to `planner-{year}-{month}.svg`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep editing helpers (drag hints, fade handle) in the output.
    #[arg(long)]
    pub interactive: bool,
}

/// Arguments for the `days` subcommand.
#[derive(clap::Args)]
pub struct DaysArgs {
    /// Calendar year. Defaults to the current year.
    #[arg(long)]
    pub year: Option<i32>,

    /// Month (1-12). Defaults to the current month.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Language tag for weekday names.
    #[arg(long, default_value = "en-US")]
    pub lang: String,
}

/// Arguments for the `months` subcommand.
#[derive(clap::Args)]
pub struct MonthsArgs {
    /// Calendar year. Defaults to the current year.
    #[arg(long)]
    pub year: Option<i32>,

    /// Language tag for month names.
    #[arg(long, default_value = "en-US")]
    pub lang: String,
}
