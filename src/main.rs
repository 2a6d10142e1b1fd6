use crate::algos::Greedy;
use crate::config::Config;
use crate::display::*;
use crate::loaders::Loader;
use crate::model::Assignments;
use crate::workbook::{CsvWorkbook, Workbook};
use clap::Parser;
use eyre::{Error, ensure};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::{Level, error, info, warn};

mod algos;
mod checks;
mod config;
mod display;
mod loaders;
mod model;
mod report;
mod slots;
mod stats;
mod workbook;

#[derive(Parser)]
#[command(version, author, about = "Automatically assign mentees to mentors")]
struct Args {
    /// Use FILE as configuration instead of the built-in defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Directory holding one CSV file per table
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    workbook: PathBuf,
    /// Seed used to shuffle mentees for the alternate assignments
    #[arg(long)]
    seed: Option<u64>,
    /// Do not write back reports
    #[arg(short = 'n', long)]
    dry_run: bool,
    /// Fail if some mentees could not be assigned
    #[arg(long)]
    strict: bool,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn solve(
    mut assignments: Assignments,
    config: &Config,
    rng: Option<StdRng>,
) -> Result<Assignments, Error> {
    let incompatibilities = config.incompatibilities();
    {
        let mut greedy = Greedy::new(&mut assignments, &incompatibilities);
        if let Some(rng) = rng {
            greedy = greedy.shuffled(rng);
        }
        greedy.assign();
    }
    checks::ensure_valid(&assignments, &incompatibilities)?;
    Ok(assignments)
}

/// Compute the primary (input order) and alternate (shuffled) assignments
/// and save them unless `dry_run` is set.
fn run(
    workbook: &mut dyn Workbook,
    config: &Config,
    seed: Option<u64>,
    dry_run: bool,
) -> Result<[Assignments; 2], Error> {
    let (mentors, mentees) = Loader::new(&*workbook).load(&config.tables)?;
    info!(
        mentors = mentors.len(),
        mentees = mentees.len(),
        incompatible_pairs = config.incompatibilities().len(),
        "Tables loaded"
    );
    let empty = Assignments::new(mentors, mentees, config.limits.clone());
    if let Err(e) = empty.check_number_of_seats() {
        warn!("{e}");
    }
    let primary = solve(empty.clone(), config, None)?;
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let alternate = solve(empty, config, Some(rng))?;
    if !dry_run {
        report::save(workbook, &config.tables.primary, &primary)?;
        report::save(workbook, &config.tables.alternate, &alternate)?;
    }
    Ok([primary, alternate])
}

/// Display both assignments. With `strict`, fail if some mentee was left
/// unassigned in either of them.
fn summarize(config: &Config, assignments: &[Assignments; 2], strict: bool) -> Result<(), Error> {
    let [primary, alternate] = assignments;
    let mut unassigned = 0;
    for (table, a) in [
        (&config.tables.primary, primary),
        (&config.tables.alternate, alternate),
    ] {
        println!("# {table}");
        println!();
        display_details(a);
        display_stats(a);
        display_empty(a);
        checks::check_preferences(a);
        let missing = checks::check_unassigned(a);
        display_unassigned(a, &missing);
        unassigned += missing.len();
        println!();
    }
    ensure!(
        !strict || unassigned == 0,
        "{unassigned} mentees could not be assigned to any mentor"
    );
    Ok(())
}

fn main() -> Result<(), Error> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = match &args.config {
        Some(file_name) => Config::load(file_name)?,
        None => Config::default(),
    };
    let mut workbook = CsvWorkbook::new(&args.workbook);
    let assignments = run(&mut workbook, &config, args.seed, args.dry_run)
        .inspect_err(|e| error!("{e:#}"))?;
    summarize(&config, &assignments, args.strict)
}
