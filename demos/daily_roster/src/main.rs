//! `daily_roster`: one service day for a three-route network.
//!
//! Loads the run configuration (optional), the route records and, when
//! present, an employee list; generates the timetable, sizes and assigns the
//! crew, prints the report, and exports CSV and JSON files.
//!
//! Run with:
//!   cargo run -p daily_roster -- [config.json] [output_dir]
//!
//! Without `data/employees.json` the crew is synthesized from the headcount
//! estimate.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{Level, info, warn};

use cs_core::{RunConfig, load_employees_json, load_routes_json};
use cs_output::{CsvWriter, Report, write_json_file, write_run};
use cs_plan::PlanBuilder;

const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
const DEFAULT_OUTPUT_DIR: &str = "./output";

fn load_config(path: Option<&Path>) -> Result<RunConfig> {
    let Some(path) = path else {
        return Ok(RunConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config: RunConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    let config = load_config(config_path.as_deref())?;

    let data = Path::new(DATA_DIR);
    let routes = load_routes_json(BufReader::new(
        File::open(data.join("routes.json")).context("opening routes.json")?,
    ))?;

    let employees_path = data.join("employees.json");
    let mut builder = PlanBuilder::new(config, routes);
    if employees_path.exists() {
        let employees = load_employees_json(BufReader::new(File::open(&employees_path)?))?;
        info!(count = employees.len(), "loaded employees");
        builder = builder.employees(employees);
    }

    let plan = builder.build()?;
    let run = plan.run();

    println!("{}", Report::new(&run, &plan.routes));

    if !run.is_fully_assigned() {
        warn!(unassigned = run.roster.unassigned.len(), "roster has uncovered departures");
    }

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let mut writer = CsvWriter::new(&output_dir)?;
    write_run(&mut writer, &run)?;
    write_json_file(&output_dir.join("schedule.json"), &run)?;
    info!(dir = %output_dir.display(), "exports written");

    Ok(())
}
