use mandate::{
    repository::Repository,
    roll::{Roll, RollBallot},
};
use std::{path::Path, process, time::Instant};
use tracing::{error, info};

const DEFAULT_SEATS: u32 = 120;
const DEFAULT_OUTPUT: &str = "ballots_with_districts.csv";

fn main() {
    tracing_subscriber::fmt().init();

    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        error!("Usage: mandate-cli <ballots.csv|roll.zip> [seats] [output.csv]");
        process::exit(1);
    }
    let path = Path::new(&args[1]).canonicalize().unwrap();
    let seats: u32 = match args.get(2) {
        Some(raw) => match raw.parse() {
            Ok(seats) => seats,
            Err(_) => {
                error!("Seat count must be a positive integer, got {raw}");
                process::exit(1);
            }
        },
        None => DEFAULT_SEATS,
    };
    let output = args.get(3).cloned().unwrap_or_else(|| DEFAULT_OUTPUT.into());

    info!("Loading roll...");
    let now = Instant::now();
    let roll = if path.extension().is_some_and(|ext| ext == "zip") {
        Roll::new().from_zip(path)
    } else {
        Roll::new().from_csv(path)
    };
    let mut records: Vec<RollBallot> = Vec::new();
    if let Err(err) = roll.stream_ballots(|(_, ballot)| records.push(ballot)) {
        error!("Failed to read roll: {err}");
        process::exit(1);
    }
    let repository = match Repository::new().load_roll(Roll::new().from_records(records.clone())) {
        Ok(repository) => repository,
        Err(err) => {
            error!("Failed to build repository: {err}");
            process::exit(1);
        }
    };
    info!(
        "Loaded {} ballots across {} towns in {:?}",
        repository.ballots.len(),
        repository.towns.len(),
        now.elapsed()
    );

    let now = Instant::now();
    let assignment = match repository.allocator(seats).solve() {
        Ok(assignment) => assignment,
        Err(err) => {
            error!("Allocation failed: {err}");
            process::exit(1);
        }
    };
    info!(
        "Allocated {} districts (target {seats}, quota {:.1}) in {:?}",
        assignment.districts().len(),
        assignment.quota(),
        now.elapsed()
    );

    let mut writer = match csv::Writer::from_path(&output) {
        Ok(writer) => writer,
        Err(err) => {
            error!("Failed to open {output}: {err}");
            process::exit(1);
        }
    };
    for (i, mut record) in records.into_iter().enumerate() {
        record.district = Some(assignment.district_of(i));
        if let Err(err) = writer.serialize(record) {
            error!("Failed to write {output}: {err}");
            process::exit(1);
        }
    }
    if let Err(err) = writer.flush() {
        error!("Failed to write {output}: {err}");
        process::exit(1);
    }
    info!("Wrote {output}");
}
