use analytics::AnalyticsEngine;
use analytics::rating::{max_rating_color, rating_color, tier_for_rating};
use analyzer::RankedRow;
use api_client::CodeforcesClient;
use clap::{Parser, Subcommand};
use comfy_table::{Cell, Color, Table, presets::UTF8_FULL};
use configuration::{FailurePolicy, Settings, SortKey};
use core_types::ProfileRecord;
use engine::{LeaderboardEngine, fetch_profile, generate_leaderboard};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Instant;

/// The main entry point for the leaderboard application.
#[tokio::main]
async fn main() {
    // A missing .env file is fine; it only ever carries LEADERBOARD_* overrides.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "Run failed.");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Ranks Codeforces users by their public profile statistics.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to `cf_handles.*` in the working directory).
    #[arg(long, short, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every configured handle and write the ranked CSV.
    Generate(GenerateArgs),
    /// Fetch and display a single handle's profile.
    Profile(ProfileArgs),
}

#[derive(Parser)]
struct GenerateArgs {
    /// Output file (overrides `report.output_file`).
    #[arg(long, short)]
    output: Option<String>,

    /// Column to rank by, descending (overrides `report.sort_by`).
    #[arg(long, value_enum)]
    sort_by: Option<SortKey>,

    /// Number of handles fetched at once (overrides `run.max_concurrency`).
    #[arg(long)]
    concurrency: Option<usize>,

    /// Skip handles that fail instead of aborting the whole run.
    #[arg(long)]
    keep_going: bool,
}

impl GenerateArgs {
    fn apply(&self, settings: &mut Settings) {
        if let Some(output) = &self.output {
            settings.report.output_file = output.clone();
        }
        if let Some(sort_by) = self.sort_by {
            settings.report.sort_by = sort_by;
        }
        if let Some(concurrency) = self.concurrency {
            settings.run.max_concurrency = concurrency;
        }
        if self.keep_going {
            settings.run.failure_policy = FailurePolicy::Isolate;
        }
    }
}

#[derive(Parser)]
struct ProfileArgs {
    /// The Codeforces handle to look up (e.g., "tourist").
    handle: String,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = configuration::load_settings(cli.config.as_deref())?;
    let _log_guard = configuration::init_tracing(&settings.logging)?;

    match cli.command {
        Commands::Generate(args) => handle_generate(args, settings).await,
        Commands::Profile(args) => handle_profile(args, settings).await,
    }
}

// ==============================================================================
// Generate Command Logic
// ==============================================================================

/// Handles the orchestration of a full leaderboard run.
async fn handle_generate(args: GenerateArgs, mut settings: Settings) -> anyhow::Result<()> {
    args.apply(&mut settings);
    // Fail before any network activity if the handle list is empty.
    settings.validate()?;

    println!("Generating Leaderboard...");
    println!("This may take a while. Please wait...");
    let started = Instant::now();

    let api_client = Arc::new(CodeforcesClient::new(&settings.api)?);

    // Set up the progress bar
    let progress_bar = ProgressBar::new(0);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let engine = LeaderboardEngine::from_settings(api_client, &settings).with_progress(progress_bar);
    let summary = generate_leaderboard(&engine, &settings).await?;

    println!("Saved to {}", summary.output_path.display());
    println!("{}", leaderboard_table(&summary.ranked));

    if !summary.failures.is_empty() {
        eprintln!("{} handle(s) skipped:", summary.failures.len());
        for failure in &summary.failures {
            eprintln!("  {}: {}", failure.handle, failure.error);
        }
    }

    println!("Time taken: {:.3}s", started.elapsed().as_secs_f64());
    Ok(())
}

fn rating_cell(text: impl ToString, rating: i64) -> Cell {
    let (r, g, b) = tier_for_rating(rating).rgb();
    Cell::new(text.to_string()).fg(Color::Rgb { r, g, b })
}

/// Renders the ranked rows with handles and ratings in their tier colours.
fn leaderboard_table(rows: &[RankedRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Sl. No.",
        "Name",
        "Username",
        "Rank",
        "Contest Rating",
        "Contests Joined",
        "Problems Solved",
        "Member Since",
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.serial),
            Cell::new(&row.name),
            rating_cell(&row.username, row.rating),
            rating_cell(&row.rank, row.rating),
            rating_cell(&row.contest_rating, row.max_rating),
            Cell::new(row.contests_joined),
            Cell::new(row.problems_solved),
            Cell::new(&row.member_since),
        ]);
    }
    table
}

// ==============================================================================
// Profile Command Logic
// ==============================================================================

async fn handle_profile(args: ProfileArgs, settings: Settings) -> anyhow::Result<()> {
    let api_client = CodeforcesClient::new(&settings.api)?;
    let analytics = AnalyticsEngine::new();

    let profile = fetch_profile(&api_client, &analytics, args.handle.trim()).await?;
    let member_since = analytics.member_since(profile.registration_time)?;

    println!("{}", profile_table(&profile, &member_since));
    Ok(())
}

fn profile_table(profile: &ProfileRecord, member_since: &str) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Field", "Value"]);

    let rows: Vec<(&str, Cell)> = vec![
        ("Name", Cell::new(&profile.name)),
        ("Username", rating_cell(&profile.handle, profile.rating)),
        ("Rank", rating_cell(&profile.rank, profile.rating)),
        ("Location", Cell::new(&profile.location)),
        ("Organization", Cell::new(&profile.organization)),
        ("Rating", rating_cell(profile.rating, profile.rating)),
        ("Rating Color", Cell::new(rating_color(profile))),
        ("Contest Rating", rating_cell(profile.contest_rating(), profile.max_rating)),
        ("Max Rating Color", Cell::new(max_rating_color(profile))),
        ("Contribution", Cell::new(profile.contribution)),
        ("Contests Joined", Cell::new(profile.contests)),
        ("Problems Solved", Cell::new(profile.problems_solved())),
        ("Member Since", Cell::new(member_since)),
    ];
    for (field, value) in rows {
        table.add_row(vec![Cell::new(field), value]);
    }
    table
}
