//! boulderboard - leaderboards and awards for a bouldering league.
//!
//! Loads a roster table and a results table (local files or URLs), computes
//! standings for one competition or the whole season, and prints them as
//! text tables or JSON.

mod config;
mod render;
mod source;

use std::io;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use boulderboard_core::{
    search_ranked, sort_ranked, CompFilter, Division, LeaderboardColumn, Scoreboard, Standings,
};
use config::Config;
use source::{load_dataset, Source};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    Climbers,
    Teams,
    Divisions,
    Awards,
    All,
}

#[derive(Debug, Parser)]
#[command(name = "boulderboard", version, about)]
struct Args {
    /// Roster table: a CSV path or an http(s) URL
    #[arg(long, env = "BOULDERBOARD_ROSTER")]
    roster: Option<String>,

    /// Results table: a CSV path or an http(s) URL
    #[arg(long, env = "BOULDERBOARD_RESULTS")]
    results: Option<String>,

    /// Competition to show, or "all" for the season
    #[arg(long, env = "BOULDERBOARD_COMP")]
    comp: Option<String>,

    #[arg(long, value_enum, default_value_t = View::All)]
    view: View,

    /// Re-sort leaderboards by rank, name, team, points or attempts
    #[arg(long, default_value_t = LeaderboardColumn::Rank)]
    sort: LeaderboardColumn,

    /// Sort descending instead of ascending
    #[arg(long)]
    desc: bool,

    /// Only show rows whose name, team or division contains this text
    #[arg(long, default_value = "")]
    search: String,

    /// Print the standings as JSON
    #[arg(long)]
    json: bool,

    /// List competitions in the results table and exit
    #[arg(long)]
    list_comps: bool,

    /// Remember the sources and competition for next time
    #[arg(long)]
    save_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize the tracing subscriber for logging
fn init_tracing(verbose: bool) {
    // RUST_LOG controls the level unless --verbose is given
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_tracing(args.verbose);

    let config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring unreadable config");
        Config::default()
    });
    let settings = config.resolve(args.roster.clone(), args.results.clone(), args.comp.clone());

    if args.save_config {
        settings.to_config().save()?;
        info!(path = %Config::config_path()?.display(), "Saved config");
    }

    let (Some(roster), Some(results)) = (&settings.roster_source, &settings.results_source) else {
        bail!("Both a roster and a results source are required (--roster, --results)");
    };

    let dataset = load_dataset(&Source::parse(roster), &Source::parse(results)).await?;

    if args.list_comps {
        print!("{}", render::competition_list(&dataset.competitions()));
        return Ok(());
    }

    let scoreboard = Scoreboard::new(dataset, settings.comp);
    if let CompFilter::Comp(id) = scoreboard.filter() {
        if !scoreboard.dataset().has_competition(id) {
            warn!(comp = %id, "No results for this competition");
        }
    }

    let standings = scoreboard.standings();
    info!(
        filter = %standings.filter,
        in_divisions = standings.divisions.total_climbers(),
        teams = standings.teams.len(),
        "Standings ready"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(standings)?);
    } else {
        print!("{}", render_views(standings, &args));
    }

    Ok(())
}

fn render_views(standings: &Standings, args: &Args) -> String {
    let ascending = !args.desc;
    let show = |view: View| args.view == view || args.view == View::All;
    let mut sections: Vec<String> = Vec::new();

    if show(View::Climbers) {
        let mut rows = search_ranked(standings.climber_leaderboard(), &args.search);
        sort_ranked(&mut rows, args.sort, ascending);
        sections.push(render::leaderboard_table(
            &format!("Climbers ({})", standings.filter),
            &rows,
        ));
    }

    if show(View::Teams) {
        let mut rows = search_ranked(standings.team_leaderboard(), &args.search);
        sort_ranked(&mut rows, args.sort, ascending);
        sections.push(render::leaderboard_table(&format!("Teams ({})", standings.filter), &rows));
    }

    if show(View::Divisions) {
        for division in Division::ALL {
            let mut rows = search_ranked(standings.division_leaderboard(division), &args.search);
            sort_ranked(&mut rows, args.sort, ascending);
            sections.push(render::leaderboard_table(&division.to_string(), &rows));
        }
    }

    if show(View::Awards) {
        sections.push(render::awards_list(&standings.fun_stats.summaries()));
    }

    sections.join("\n")
}
