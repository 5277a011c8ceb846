use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod analysis;
mod config;
mod criteria;
mod import;
mod models;
mod report;
mod roster;
mod seed;
mod stats;
mod views;

use analysis::{AnalysisJob, AnalysisKind, AnalysisOutcome};
use criteria::{apply, Criteria, Selection};
use models::{InjuryStatus, NewPlayer, Player, RecoveryStatus, Severity, SwingStatus};
use roster::Roster;
use views::{PlayerFilters, PlayerSort, ReportFilters, ReportSort, SwingFilters, SwingSort};

#[derive(Parser)]
#[command(name = "swingai")]
#[command(about = "Cricket coaching records: medical reports, roster and swing analysis")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List medical reports
    Reports {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        severity: Selection<Severity>,
        #[arg(long, default_value = "all")]
        status: Selection<RecoveryStatus>,
        #[arg(long, default_value = "dateReported")]
        sort: ReportSort,
        /// Load reports from a CSV file instead of the built-in set
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// List the team roster
    Roster {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        injury: Selection<InjuryStatus>,
        #[arg(long, default_value = "roster")]
        sort: PlayerSort,
        #[arg(long)]
        json: bool,
    },
    /// List recent swings
    Swings {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        status: Selection<SwingStatus>,
        #[arg(long, default_value = "date")]
        sort: SwingSort,
        #[arg(long)]
        json: bool,
    },
    /// Show one player's profile
    Player {
        #[arg(long)]
        id: u32,
        #[arg(long)]
        json: bool,
    },
    /// Add a player and print the resulting roster
    AddPlayer {
        #[arg(long)]
        name: String,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        batting_style: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Remove a player and print the resulting roster
    RemovePlayer {
        #[arg(long)]
        id: u32,
    },
    /// Print dashboard statistics
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Run the simulated video analysis
    Analyze {
        #[arg(long, default_value = "swing")]
        kind: AnalysisKind,
        /// Overrides SWINGAI_ANALYSIS_DELAY_MS
        #[arg(long)]
        delay_ms: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Generate a markdown coaching report
    Report {
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_roster(players: &[&Player]) {
    for player in players {
        println!(
            "- #{} {} ({}, {}) rating {} [{}]",
            player.id,
            player.name,
            player.role,
            player.batting_style,
            stats::overall_rating(player),
            player.injury_status
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = config::Settings::from_env()?;

    match cli.command {
        Commands::Reports {
            search,
            severity,
            status,
            sort,
            csv,
            json,
        } => {
            let reports = match csv {
                Some(path) => import::import_reports(&path)?,
                None => seed::medical_reports()?,
            };
            let criteria = Criteria::new(search, ReportFilters { severity, status }, sort);
            let selected = apply(&reports, &criteria);

            if json {
                return print_json(&selected);
            }
            if selected.is_empty() {
                println!("No reports found. Try adjusting your filters.");
                return Ok(());
            }
            for report in selected {
                println!(
                    "- #{} {}: {} ({}) [{} / {}] reported {}, back {} ({}%)",
                    report.id,
                    report.player,
                    report.injury_type,
                    report.body_part,
                    report.severity,
                    report.status,
                    report.date_reported,
                    report.expected_return,
                    stats::recovery_progress(report)
                );
            }
        }
        Commands::Roster {
            search,
            injury,
            sort,
            json,
        } => {
            let players = seed::players()?;
            let criteria = Criteria::new(search, PlayerFilters { injury }, sort);
            let selected = apply(&players, &criteria);

            if json {
                return print_json(&selected);
            }
            if selected.is_empty() {
                println!("No players found.");
                return Ok(());
            }
            print_roster(&selected);
        }
        Commands::Swings {
            search,
            status,
            sort,
            json,
        } => {
            let swings = seed::recent_swings()?;
            let criteria = Criteria::new(search, SwingFilters { status }, sort);
            let selected = apply(&swings, &criteria);

            if json {
                return print_json(&selected);
            }
            for swing in selected {
                println!(
                    "- #{} {} {}: {} scored {} ({})",
                    swing.id, swing.date, swing.player, swing.shot_type, swing.score, swing.status
                );
            }
        }
        Commands::Player { id, json } => {
            let roster = Roster::new(seed::players()?);
            let player = roster
                .get(id)
                .with_context(|| format!("no player with id {id}"))?;
            let reports = seed::medical_reports()?;
            let history: Vec<_> = reports.iter().filter(|r| r.player_id == player.id).collect();
            let axes = stats::profile_axes(player);

            if json {
                return print_json(&serde_json::json!({
                    "player": player,
                    "overallRating": stats::overall_rating(player),
                    "axes": axes
                        .iter()
                        .map(|(subject, value)| {
                            serde_json::json!({ "subject": subject, "value": value })
                        })
                        .collect::<Vec<_>>(),
                    "medicalReports": history,
                }));
            }

            println!(
                "{} (#{}) {}, {}, age {}",
                player.name, player.id, player.role, player.batting_style, player.age
            );
            println!(
                "Joined {}, {} matches, overall rating {} [{}]",
                player.join_date,
                player.matches_played,
                stats::overall_rating(player),
                player.injury_status
            );
            for (subject, value) in axes {
                println!("- {subject}: {value}");
            }
            for report in history {
                println!(
                    "Medical: {} ({} / {}) reported {}",
                    report.injury_type, report.severity, report.status, report.date_reported
                );
            }
        }
        Commands::AddPlayer {
            name,
            role,
            batting_style,
            age,
            email,
            phone,
        } => {
            let mut roster = Roster::new(seed::players()?);
            let added = roster.add(NewPlayer {
                name: Some(name),
                role,
                batting_style,
                age,
                email,
                phone,
            });
            println!("Added {} as #{}.", added.name, added.id);
            print_roster(&roster.players().iter().collect::<Vec<_>>());
        }
        Commands::RemovePlayer { id } => {
            let mut roster = Roster::new(seed::players()?);
            let removed = roster
                .remove(id)
                .with_context(|| format!("no player with id {id}"))?;
            println!("Removed {} from the roster.", removed.name);
            print_roster(&roster.players().iter().collect::<Vec<_>>());
        }
        Commands::Summary { json } => {
            let reports = seed::medical_reports()?;
            let players = seed::players()?;
            let swings = seed::recent_swings()?;
            let report_stats = stats::report_stats(&reports);
            let roster_stats = stats::roster_stats(&players);
            let squad = stats::squad_averages(&players);
            let swing_stats = stats::swing_stats(&swings);

            if json {
                return print_json(&serde_json::json!({
                    "medical": report_stats,
                    "roster": roster_stats,
                    "squad": squad,
                    "swings": swing_stats,
                }));
            }

            println!(
                "Medical: {} total, {} active, {} recovering, {} cleared",
                report_stats.total,
                report_stats.active,
                report_stats.recovering,
                report_stats.cleared
            );
            println!(
                "Roster: {} players, {} fit, avg bat speed {}, avg consistency {}",
                roster_stats.total_players,
                roster_stats.fit_players,
                stats::display_value(roster_stats.avg_bat_speed),
                stats::display_value(roster_stats.avg_consistency)
            );
            println!(
                "Squad averages: bat speed {} km/h, consistency {}/100, form {}/100",
                stats::display_value(squad.bat_speed),
                stats::display_value(squad.consistency),
                stats::display_value(squad.form)
            );
            println!(
                "Swings: {} recorded, avg score {}, best {}",
                swing_stats.total,
                stats::display_value(swing_stats.avg_score),
                stats::display_value(swing_stats.best_score)
            );
        }
        Commands::Analyze {
            kind,
            delay_ms,
            json,
        } => {
            let delay = delay_ms.map_or(settings.analysis_delay, Duration::from_millis);
            let cancel = CancellationToken::new();

            let interrupt = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("interrupt received, cancelling analysis");
                    interrupt.cancel();
                }
            });

            println!("Analyzing {kind}...");
            match AnalysisJob::new(kind, delay).run(cancel).await {
                AnalysisOutcome::Complete(result) => {
                    if json {
                        return print_json(&result);
                    }
                    println!("Overall score {}/100", result.overall_score());
                    for (axis, value) in result.metric_axes() {
                        println!("- {axis}: {value}");
                    }
                }
                AnalysisOutcome::Cancelled => {
                    println!("Analysis cancelled.");
                }
            }
        }
        Commands::Report { out } => {
            let report = report::build_report(
                &seed::medical_reports()?,
                &seed::players()?,
                &seed::recent_swings()?,
                settings.report_limit,
            );
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
