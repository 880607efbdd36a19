use baggage_carousel::io::input::{read_config, ConsolePrompt, EnterGate};
use baggage_carousel::io::ordering::TicketOrders;
use baggage_carousel::io::reporting::{self, ConsoleRenderer};
use baggage_carousel::simulation::traits::{NoWait, TickGate};
use baggage_carousel::{CarouselSimulation, SimulationConfig};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::error::Error;
use std::io;

#[derive(Debug, Default)]
struct CliOptions {
    seed: Option<u64>,
    no_wait: bool,
    csv: Option<String>,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<CliOptions, Box<dyn Error>> {
    let mut options = CliOptions::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                options.seed = Some(value.parse()?);
            }
            "--no-wait" => options.no_wait = true,
            "--csv" => options.csv = Some(args.next().ok_or("--csv needs a path")?),
            other => return Err(format!("unknown argument '{}'", other).into()),
        }
    }
    Ok(options)
}

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG overrides the default level.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .parse_default_env()
        .init();

    let options = parse_args(env::args().skip(1))?;

    println!("=== Baggage Carousel Simulation ===");

    // 1. SETUP CONFIGURATION
    // Loader layout and rotation come from the defaults; the run size is
    // asked for on the console.
    let base = SimulationConfig {
        seed: options.seed,
        ..SimulationConfig::default()
    };
    let mut prompt = ConsolePrompt::new(io::stdin().lock(), io::stdout());
    let config = read_config(&mut prompt, base)?;
    drop(prompt);

    // 2. SHUFFLE TICKETS
    // One order for bags coming off the plane, another for passengers.
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let orders = TicketOrders::generate(config.passengers, &mut rng);

    // 3. INITIALIZE SIMULATION
    info!(
        "Starting carousel: {} passengers, {} slots, {} minutes",
        config.passengers, config.carousel_size, config.total_minutes
    );
    let mut sim = CarouselSimulation::new(config, orders.unload, orders.disembark)?;

    // 4. RUN SIMULATION
    let mut renderer = ConsoleRenderer::stdout();
    let mut gate: Box<dyn TickGate> = if options.no_wait {
        Box::new(NoWait)
    } else {
        Box::new(EnterGate::new(io::stdin().lock(), io::stdout()))
    };
    sim.run_with(&mut renderer, gate.as_mut())?;

    // 5. EXPORT RESULTS
    if let Some(path) = options.csv {
        reporting::write_history_file(&path, sim.history())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(args(&["--seed", "42", "--no-wait", "--csv", "out.csv"])).unwrap();
        assert_eq!(options.seed, Some(42));
        assert!(options.no_wait);
        assert_eq!(options.csv.as_deref(), Some("out.csv"));

        assert!(parse_args(args(&["--seed"])).is_err());
        assert!(parse_args(args(&["--seed", "x"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }
}
