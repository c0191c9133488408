/* 3rd party libraries */
use clap::{Arg, Command};
use crossbeam_channel as cbc;
use log::{error, info, warn};
use std::io::BufRead;
use std::thread::Builder;

/* Custom libraries */
use elevator_sim::config;
use elevator_sim::unwrap_or_exit;
use elevator_sim::{Call, Simulation, SimulationRunner, Snapshot};

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("elevator-sim")
        .about("Single-car elevator dispatch simulation. Reads calls as `FROM TO [WEIGHT]` from stdin.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print snapshots as JSON"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config = unwrap_or_exit!(config::load_config(config_path), "Failed to load configuration");
    let json = matches.is_present("json");

    // Initialize channels
    let (call_tx, call_rx) = cbc::unbounded::<Call>();
    let (snapshot_tx, snapshot_rx) = cbc::unbounded::<Snapshot>();
    let (_terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the simulation
    let runner = SimulationRunner::new(
        Simulation::new(config.simulation.clone()),
        call_rx,
        snapshot_tx,
        terminate_rx,
    );
    let runner_thread = Builder::new().name("simulation".into());
    let runner_handle = unwrap_or_exit!(
        runner_thread.spawn(move || runner.run()),
        "Failed to start simulation thread"
    );

    // Start the call source. Dropping `call_tx` at EOF stops the simulation.
    let n_floors = config.simulation.n_floors;
    let call_source_thread = Builder::new().name("call_source".into());
    unwrap_or_exit!(
        call_source_thread.spawn(move || read_calls(call_tx, n_floors)),
        "Failed to start call source thread"
    );

    // Observe until the simulation stops
    for snapshot in snapshot_rx.iter() {
        if json {
            match serde_json::to_string(&snapshot) {
                Ok(line) => println!("{}", line),
                Err(e) => error!("Failed to serialize snapshot: {}", e),
            }
        } else {
            println!("{}", snapshot);
        }
    }

    if runner_handle.join().is_err() {
        error!("Simulation thread panicked");
        std::process::exit(1);
    }
}

fn read_calls(call_tx: cbc::Sender<Call>, n_floors: u8) {
    info!("Enter calls as `FROM TO [WEIGHT]`, floors 0..{}", n_floors);
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Error reading stdin: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_call(&line) {
            Some(call) => {
                if call_tx.send(call).is_err() {
                    break;
                }
            }
            None => warn!("Could not parse call {:?}, expected `FROM TO [WEIGHT]`", line),
        }
    }
    info!("Call source closed");
}

fn parse_call(line: &str) -> Option<Call> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [from, to] => Some(Call::new(from.parse().ok()?, to.parse().ok()?)),
        [from, to, weight] => Some(Call {
            from: from.parse().ok()?,
            to: to.parse().ok()?,
            weight: Some(weight.parse().ok()?),
        }),
        _ => None,
    }
}
