//! Gridiron CLI: rank, percentile, scatter and radar commands.
//!
//! Commands:
//! - `rank`: composite leaderboard from a season CSV
//! - `percentile`: one metric normalized for every team that has it
//! - `scatter`: two metrics on oriented axes with mean-split quadrants
//! - `radar`: one team's percentile on every metric
//!
//! Every command reads the same CSV (see `input.rs`), optionally narrowed to
//! one conference, and prints a text table or `--json`.

mod input;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gridiron_core::{
    percentile_column, radar_profile, rank_population, scatter, AxisScale, AxisSpec,
    EngineConfig, MetricCategory, PercentileMode, Population, RadarProfile, RankingColumn,
    RankingTable, Scatter, SortDirection,
};

#[derive(Parser)]
#[command(
    name = "gridiron",
    about = "Gridiron CLI: percentile and composite rankings for college football team metrics"
)]
struct Cli {
    /// Debug logging (overridden by RUST_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Season CSV: team,conference,offense,defense,special_teams,sos_rank.
    #[arg(long, short)]
    input: PathBuf,

    /// Engine config TOML (weights, tie_break, neutral_fill).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only consider teams from this conference.
    #[arg(long)]
    conference: Option<String>,

    /// Print JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Composite leaderboard, rank 1 first.
    Rank {
        #[command(flatten)]
        input: InputArgs,

        /// Re-order the printed table by this column. Ranks are unchanged.
        #[arg(long, value_enum, default_value_t = ColumnArg::Rank)]
        sort_by: ColumnArg,

        /// Sort the chosen column descending.
        #[arg(long, default_value_t = false)]
        desc: bool,
    },
    /// Percentile of one metric for every team that has it.
    Percentile {
        #[command(flatten)]
        input: InputArgs,

        /// offense, defense, special_teams or sos.
        #[arg(long, short)]
        metric: MetricCategory,

        #[arg(long, value_enum, default_value_t = ModeArg::Dense)]
        mode: ModeArg,
    },
    /// Two metrics on oriented axes, split into quadrants at the means.
    Scatter {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, short)]
        x: MetricCategory,

        #[arg(long, short)]
        y: MetricCategory,

        #[arg(long, value_enum, default_value_t = ScaleArg::Raw)]
        scale: ScaleArg,

        /// Flip the x axis from its default orientation.
        #[arg(long, default_value_t = false)]
        flip_x: bool,

        /// Flip the y axis from its default orientation.
        #[arg(long, default_value_t = false)]
        flip_y: bool,
    },
    /// One team's percentile on every metric.
    Radar {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, short)]
        team: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Dense,
    Count,
}

impl From<ModeArg> for PercentileMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Dense => PercentileMode::DenseRank,
            ModeArg::Count => PercentileMode::Count,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ScaleArg {
    Raw,
    Percentile,
}

impl From<ScaleArg> for AxisScale {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::Raw => AxisScale::Raw,
            ScaleArg::Percentile => AxisScale::Percentile,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ColumnArg {
    Rank,
    Team,
    Composite,
    Offense,
    Defense,
    SpecialTeams,
    Sos,
}

impl From<ColumnArg> for RankingColumn {
    fn from(arg: ColumnArg) -> Self {
        match arg {
            ColumnArg::Rank => RankingColumn::Rank,
            ColumnArg::Team => RankingColumn::Team,
            ColumnArg::Composite => RankingColumn::Composite,
            ColumnArg::Offense => RankingColumn::Offense,
            ColumnArg::Defense => RankingColumn::Defense,
            ColumnArg::SpecialTeams => RankingColumn::SpecialTeams,
            ColumnArg::Sos => RankingColumn::StrengthOfSchedule,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Rank {
            input,
            sort_by,
            desc,
        } => run_rank(&input, sort_by.into(), desc),
        Commands::Percentile {
            input,
            metric,
            mode,
        } => run_percentile(&input, metric, mode.into()),
        Commands::Scatter {
            input,
            x,
            y,
            scale,
            flip_x,
            flip_y,
        } => {
            let x_axis = AxisSpec::new(x).with_scale(scale.into());
            let y_axis = AxisSpec::new(y).with_scale(scale.into());
            run_scatter(
                &input,
                x_axis.with_invert(x_axis.invert ^ flip_x),
                y_axis.with_invert(y_axis.invert ^ flip_y),
            )
        }
        Commands::Radar { input, team } => run_radar(&input, &team),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load config and records, then apply the conference filter.
fn load(args: &InputArgs) -> Result<(EngineConfig, Population)> {
    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    let records = input::load_records(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;
    let population = Population::new(records);

    let population = match &args.conference {
        Some(conf) => {
            let filtered = population.filter_conference(conf);
            if filtered.is_empty() {
                bail!("no teams with metrics in conference '{conf}'");
            }
            filtered
        }
        None => population,
    };

    Ok((config, population))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_rank(args: &InputArgs, sort_by: RankingColumn, desc: bool) -> Result<()> {
    let (config, population) = load(args)?;
    let table = rank_population(&population, &config);

    if args.json {
        return print_json(table.rows());
    }

    let direction = if desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    print_ranking(&table, sort_by, direction);
    Ok(())
}

fn run_percentile(args: &InputArgs, metric: MetricCategory, mode: PercentileMode) -> Result<()> {
    let (config, population) = load(args)?;
    let mut rows = percentile_column(&population, metric, mode, config.tie_break);
    rows.sort_by(|a, b| {
        b.percentile
            .partial_cmp(&a.percentile)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.team.cmp(&b.team))
    });

    if args.json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("No team has {metric} data.");
        return Ok(());
    }

    let direction = if metric.is_higher_better() {
        "higher is better"
    } else {
        "lower is better"
    };
    println!("{metric} ({direction}), {} teams", rows.len());
    println!("{:<24} {:>10} {:>10}", "Team", "Value", "Pctl");
    println!("{}", "-".repeat(46));
    for row in &rows {
        println!(
            "{:<24} {:>10.3} {:>10.1}",
            row.team, row.value, row.percentile
        );
    }
    Ok(())
}

fn run_scatter(args: &InputArgs, x_axis: AxisSpec, y_axis: AxisSpec) -> Result<()> {
    let (_, population) = load(args)?;
    let plot = scatter(&population, x_axis, y_axis);

    if args.json {
        return print_json(&plot);
    }
    print_scatter(&plot);
    Ok(())
}

fn run_radar(args: &InputArgs, team: &str) -> Result<()> {
    let (_, population) = load(args)?;
    let Some(profile) = radar_profile(&population, team) else {
        bail!("team '{team}' not found (or has no metrics)");
    };

    if args.json {
        return print_json(&profile);
    }
    print_radar(&profile);
    Ok(())
}

// ─── Table output ────────────────────────────────────────────────────

fn fmt_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn print_ranking(table: &RankingTable, sort_by: RankingColumn, direction: SortDirection) {
    if table.is_empty() {
        println!("No teams to rank.");
        return;
    }

    println!(
        "{:>4}  {:<24} {:<12} {:>9} {:>7} {:>7} {:>7} {:>5}",
        "Rank", "Team", "Conference", "Composite", "Off", "Def", "ST", "SOS"
    );
    println!("{}", "-".repeat(84));
    for row in table.sorted_by(sort_by, direction) {
        let st = if row.neutral_filled.contains(&MetricCategory::SpecialTeams) {
            format!("{:.1}*", row.special_teams_percentile)
        } else {
            format!("{:.1}", row.special_teams_percentile)
        };
        println!(
            "{:>4}  {:<24} {:<12} {:>9.2} {:>7.1} {:>7.1} {:>7} {:>5}",
            row.rank,
            row.team,
            row.conference.as_deref().unwrap_or("-"),
            row.composite_score,
            row.offense_percentile,
            row.defense_percentile,
            st,
            fmt_opt(row.strength_of_schedule_rank),
        );
    }

    if table.rows().iter().any(|r| !r.neutral_filled.is_empty()) {
        println!();
        println!("* no data, neutral-filled");
    }
}

fn print_scatter(plot: &Scatter) {
    let Some(split) = plot.split else {
        println!(
            "No team has both {} and {} data.",
            plot.x_axis.metric, plot.y_axis.metric
        );
        return;
    };

    println!(
        "x: {}{}  y: {}{}",
        plot.x_axis.metric,
        if plot.x_axis.invert { " (inverted)" } else { "" },
        plot.y_axis.metric,
        if plot.y_axis.invert { " (inverted)" } else { "" },
    );
    println!("Means: x {:.3}, y {:.3}", split.x_mean, split.y_mean);
    println!();
    println!(
        "{:<24} {:>9} {:>9} {:>7} {:>7}  {}",
        "Team", "Raw X", "Raw Y", "X", "Y", "Quadrant"
    );
    println!("{}", "-".repeat(74));
    for p in &plot.points {
        println!(
            "{:<24} {:>9.3} {:>9.3} {:>7.3} {:>7.3}  {}",
            p.team, p.raw_x, p.raw_y, p.x, p.y, p.quadrant
        );
    }
}

fn print_radar(profile: &RadarProfile) {
    println!("=== {} ===", profile.team);
    for spoke in &profile.spokes {
        println!(
            "{:<14} value {:>8}  pctl {:>6}",
            spoke.metric.label(),
            spoke.value.map_or_else(|| "-".to_string(), |v| format!("{v:.3}")),
            spoke
                .percentile
                .map_or_else(|| "-".to_string(), |p| format!("{p:.1}")),
        );
    }
}
