//! TripBudget CLI and plan API entry point.
//!
//! Parses CLI arguments, loads configuration, then renders a plan on the
//! console or starts the API server.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tripbudget::config::TripBudgetConfig;
use tripbudget::models::{
    BudgetMode, Category, Currency, MAX_TRAVELERS, MAX_TRIP_DAYS, TravelPlan, TripParameters,
    WeightSet,
};
use tripbudget::planner::TripPlanner;
use tripbudget::{report, web};

#[derive(Parser)]
#[command(name = "tripbudget", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Machine-readable JSON output where supported.
    #[arg(long, global = true)]
    json: bool,

    /// Path to the configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a budget allocation and draft itinerary for a trip.
    Plan(PlanArgs),

    /// Start the plan API server.
    Serve {
        /// Port to listen on (defaults to the configured port).
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Args)]
struct PlanArgs {
    /// Destination label.
    #[arg(long)]
    destination: Option<String>,

    /// First day of the trip (YYYY-MM-DD, defaults to today).
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Trip length in days (1-60, out-of-range values are clamped).
    #[arg(long, value_parser = parse_day_count)]
    days: Option<u32>,

    /// Number of travelers (1-20, out-of-range values are clamped).
    #[arg(long, value_parser = parse_traveler_count)]
    travelers: Option<u32>,

    /// Display currency.
    #[arg(long, value_enum)]
    currency: Option<Currency>,

    /// Budget amount, total for the group unless --per-person is given.
    #[arg(long)]
    budget: Option<f64>,

    /// Interpret the budget amount as per person.
    #[arg(long)]
    per_person: bool,

    /// Accommodation weight (0-100).
    #[arg(long)]
    accommodation: Option<f64>,

    /// Food weight (0-100).
    #[arg(long)]
    food: Option<f64>,

    /// Transport weight (0-100).
    #[arg(long)]
    transport: Option<f64>,

    /// Activities weight (0-100).
    #[arg(long)]
    activities: Option<f64>,

    /// Shopping weight (0-100).
    #[arg(long)]
    shopping: Option<f64>,

    /// Seed for a reproducible itinerary.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the plan as JSON to this file.
    #[arg(long)]
    json_out: Option<PathBuf>,

    /// Write the plan document to this file.
    #[arg(long)]
    report_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TripBudgetConfig::load_from_path(cli.config.clone())?;
    init_tracing(cli.verbose, &config.logging.level);

    match &cli.command {
        Commands::Plan(args) => run_plan(args, &config, cli.json)?,
        Commands::Serve { port } => web::run(port.unwrap_or(config.server.port)).await?,
    }

    Ok(())
}

/// Set up tracing on stderr so JSON output on stdout stays clean
fn init_tracing(verbose: u8, configured_level: &str) {
    let filter = match verbose {
        0 => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured_level))
        }
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_plan(args: &PlanArgs, config: &TripBudgetConfig, json_output: bool) -> Result<()> {
    let travelers = args.travelers.unwrap_or(config.defaults.travelers);
    let budget_mode = if args.per_person {
        BudgetMode::PerPerson
    } else {
        config.defaults.budget_mode
    };
    let entered_budget = args.budget.unwrap_or(config.defaults.budget);

    let params = TripParameters {
        destination: args
            .destination
            .clone()
            .unwrap_or_else(|| config.defaults.destination.clone()),
        start: args.start.unwrap_or_else(|| Local::now().date_naive()),
        days: args.days.unwrap_or(config.defaults.days),
        travelers,
        currency: args.currency.unwrap_or(config.defaults.currency),
        total_budget: budget_mode.resolve_total(entered_budget, travelers),
    };
    let weights = build_weights(args, config);

    let plan = match args.seed {
        Some(seed) => {
            TripPlanner::build_plan(&params, &weights, &mut SmallRng::seed_from_u64(seed))?
        }
        None => TripPlanner::build_plan(&params, &weights, &mut rand::rng())?,
    };

    if json_output {
        println!("{}", report::to_json_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }

    // export failures are informational, the plan output above stays valid
    if let Some(path) = &args.json_out {
        match report::write_json(&plan, path) {
            Ok(()) => info!("Plan JSON written to {}", path.display()),
            Err(e) => eprintln!("{}", e.user_message()),
        }
    }
    if let Some(path) = &args.report_out {
        match report::write_report(&plan, path) {
            Ok(()) => info!("Plan document written to {}", path.display()),
            Err(e) => eprintln!("{}", e.user_message()),
        }
    }

    Ok(())
}

/// Merge weight flags over the configured defaults
fn build_weights(args: &PlanArgs, config: &TripBudgetConfig) -> WeightSet {
    let defaults = &config.weights;
    WeightSet::from([
        (
            Category::Accommodation,
            args.accommodation
                .unwrap_or(f64::from(defaults.accommodation)),
        ),
        (Category::Food, args.food.unwrap_or(f64::from(defaults.food))),
        (
            Category::Transport,
            args.transport.unwrap_or(f64::from(defaults.transport)),
        ),
        (
            Category::Activities,
            args.activities.unwrap_or(f64::from(defaults.activities)),
        ),
        (
            Category::Shopping,
            args.shopping.unwrap_or(f64::from(defaults.shopping)),
        ),
    ])
}

fn print_plan(plan: &TravelPlan) {
    println!("Travel Budget Planner");
    println!();
    println!("Destination: {}", plan.destination);
    println!("Dates: {} → {}", plan.start, plan.end_date());
    println!("Days: {}  Travelers: {}", plan.days, plan.travelers);
    println!();

    println!("Budget Allocation");
    println!("{}", report::allocation_table(plan));
    println!();

    println!("Key Numbers");
    println!(
        "Total Budget: {}",
        plan.currency.format_amount(plan.total_budget)
    );
    println!(
        "Per Person / Day: {}",
        plan.currency.format_amount(plan.per_person_per_day)
    );
    println!();

    println!("Per-Day Breakdown");
    println!("{}", report::per_day_table(plan));
    println!();

    println!("Draft Itinerary");
    for day in &plan.itinerary {
        println!(
            "Day {}: {} | {} | {}",
            day.day, day.morning, day.afternoon_evening, day.notes
        );
    }
    println!();

    println!("Cost-Saving Tips");
    for tip in report::COST_SAVING_TIPS {
        println!("- {tip}");
    }
}

/// Lenient day-count coercion, never fails
fn parse_day_count(raw: &str) -> Result<u32, String> {
    Ok(clamp_count(raw, MAX_TRIP_DAYS))
}

/// Lenient traveler-count coercion, never fails
fn parse_traveler_count(raw: &str) -> Result<u32, String> {
    Ok(clamp_count(raw, MAX_TRAVELERS))
}

///// Coerce free-form count input: unparseable values fall back to 1,
/// out-of-range values clamp into `[1, max]`
fn clamp_count(raw: &str, max: u32) -> u32 {
    raw.trim()
        .parse::<i64>()
        .map_or(1, |v| v.clamp(1, i64::from(max)) as u32)
}
