use std::env;
use std::process;

use waypoint_router::utils::permutation::factorial;
use waypoint_router::utils::report::{render_report, write_report};
use waypoint_router::{BruteForceSolver, RouteSolver, Scenario};

const DEFAULT_REPORT_PATH: &str = "best_route.txt";

struct CliOptions {
    scenario_path: Option<String>,
    max_iterations: Option<u64>,
    prior_best: Option<f64>,
    report_path: Option<String>,
}

fn parse_args() -> Result<CliOptions, String> {
    let mut options = CliOptions {
        scenario_path: None,
        max_iterations: None,
        prior_best: None,
        report_path: None,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--scenario" => {
                let path = args.next().ok_or("--scenario requires a file path")?;
                options.scenario_path = Some(path);
            }
            "--max-iterations" => {
                let value = args.next().ok_or("--max-iterations requires a number")?;
                let parsed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid iteration count: {}", value))?;
                options.max_iterations = Some(parsed);
            }
            "--prior-best" => {
                let value = args.next().ok_or("--prior-best requires a score")?;
                let parsed = value
                    .parse::<f64>()
                    .map_err(|_| format!("invalid prior best score: {}", value))?;
                options.prior_best = Some(parsed);
            }
            "-f" => {
                options.report_path = Some(DEFAULT_REPORT_PATH.to_string());
            }
            "--output" => {
                let path = args.next().ok_or("--output requires a file path")?;
                options.report_path = Some(path);
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(options)
}

fn main() {
    let options = match parse_args() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!(
                "Usage: waypoint_router [--scenario <file.json>] [--max-iterations <n>] \
                 [--prior-best <score>] [-f | --output <file>]"
            );
            process::exit(2);
        }
    };

    // Load the scenario, falling back to the built-in demo
    let scenario = match &options.scenario_path {
        Some(path) => match Scenario::from_json_file(path) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Error loading scenario from {}: {}", path, e);
                process::exit(1);
            }
        },
        None => Scenario::demo(),
    };

    let possible_routes = factorial(scenario.waypoint_count());
    let max_iterations = options.max_iterations.unwrap_or(possible_routes);
    println!(
        "{} possible routes for {} waypoints",
        possible_routes,
        scenario.waypoint_count()
    );

    let solver = BruteForceSolver::new();
    let start_time = std::time::Instant::now();
    let result = solver.solve(&scenario, max_iterations, options.prior_best);
    let elapsed = start_time.elapsed();

    let result = match result {
        Some(result) => result,
        None => {
            println!("No route found (empty waypoint set, zero iterations, or nothing beat the prior best)");
            return;
        }
    };

    println!(
        "Examined {} candidate routes in {:.2?}\n",
        result.examined, elapsed
    );

    let report = render_report(&scenario, &result, options.prior_best);
    print!("{}", report);

    // Write the report to a file only when explicitly requested
    if let Some(path) = &options.report_path {
        if let Err(e) = write_report(path, &report) {
            eprintln!("Error: could not write report to {}: {}", path, e);
            process::exit(1);
        }
        println!("\nReport written to {}", path);
    }
}
