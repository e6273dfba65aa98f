use clap::Parser;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use log::info;

use travel_planner_rs::cli::{Cli, Command, OutputFormat};
use travel_planner_rs::config::PlannerConfig;
use travel_planner_rs::error::Result;
use travel_planner_rs::interface::{
    collect_trip_request, display_plan, format_itinerary_table, prompt_yes_no, saved_plan_report,
};
use travel_planner_rs::models::TripRequest;
use travel_planner_rs::planner::{anchor_date, plan_trip};
use travel_planner_rs::state::{
    load_plan, plan_file_name, plan_to_json, save_plan, write_scenarios_csv, PlanState,
};

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() {
    setup_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = PlannerConfig::load(cli.config.as_ref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            destination,
            days,
            budget,
            start_date,
            format,
            save,
            output,
            csv,
        } => {
            let request = TripRequest::new(destination, days, budget)?;
            cmd_plan(&config, request, start_date, format, save, output, csv)
        }
        Command::Interactive => cmd_interactive(&config),
        Command::Show { file } => cmd_show(&file),
    }
}

/// Day 1 of the trip: explicit start date, else today plus lead time.
fn resolve_anchor(config: &PlannerConfig, start_date: Option<NaiveDate>) -> Result<NaiveDate> {
    match start_date {
        Some(date) => Ok(date),
        None => anchor_date(Local::now().date_naive(), config.lead_time_days),
    }
}

/// Plan a single trip and print it.
fn cmd_plan(
    config: &PlannerConfig,
    request: TripRequest,
    start_date: Option<NaiveDate>,
    format: OutputFormat,
    save: bool,
    output: Option<PathBuf>,
    csv: Option<PathBuf>,
) -> Result<()> {
    let anchor = resolve_anchor(config, start_date)?;
    let state = plan_trip(request, anchor, config)?;

    match format {
        OutputFormat::Text => display_plan(&state),
        OutputFormat::Markdown => print!("{}", format_itinerary_table(state.itinerary())),
        OutputFormat::Json => println!("{}", plan_to_json(&state, Local::now().fixed_offset())?),
    }

    if let Some(path) = output.or_else(|| save.then(|| default_plan_path(&state))) {
        save_plan(&path, &state, Local::now().fixed_offset())?;
        eprintln!("Plan saved to: {}", path.display());
    }

    if let Some(path) = csv {
        if state.scenarios().is_empty() {
            eprintln!("Plan is within budget; no scenarios to export.");
        } else {
            write_scenarios_csv(&path, &state)?;
            eprintln!("Scenarios written to: {}", path.display());
        }
    }

    Ok(())
}

fn default_plan_path(state: &PlanState) -> PathBuf {
    let request = state.request();
    PathBuf::from(plan_file_name(request.destination(), request.duration_days()))
}

/// Prompt-driven planning loop.
fn cmd_interactive(config: &PlannerConfig) -> Result<()> {
    println!();
    println!("=== Interactive Travel Planner ===");
    println!();
    println!("Let's plan your next adventure!");
    println!();

    loop {
        let request = collect_trip_request()?;

        println!();
        println!(
            "Trip: {} days in {}",
            request.duration_days(),
            request.destination()
        );
        println!("Budget: ${:.2}", request.budget_limit());

        let anchor = resolve_anchor(config, None)?;
        let state = plan_trip(request, anchor, config)?;
        display_plan(&state);

        if prompt_yes_no("Save plan to file?", false)? {
            save_with_retry(&state)?;
        }

        if !prompt_yes_no("Plan another trip?", false)? {
            println!("Thanks for using Travel Planner! Have a great trip!");
            break;
        }
        println!();
    }

    Ok(())
}

/// Save the plan, offering another attempt when the write fails.
fn save_with_retry(state: &PlanState) -> Result<()> {
    let path = default_plan_path(state);
    loop {
        match save_plan(&path, state, Local::now().fixed_offset()) {
            Ok(()) => {
                println!("Plan saved to: {}", path.display());
                return Ok(());
            }
            Err(e) => {
                eprintln!("Could not save plan: {}", e);
                if !prompt_yes_no("Try saving again?", true)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Print a saved plan.
fn cmd_show(file: &Path) -> Result<()> {
    if !file.exists() {
        eprintln!("Plan file not found: {}", file.display());
        return Ok(());
    }

    let saved = load_plan(file)?;
    info!("loaded plan for {} from {}", saved.destination, file.display());

    println!();
    print!("{}", saved_plan_report(&saved));
    println!();
    Ok(())
}
