//! `teamforge` command-line entry point.
//!
//! Reads an optimization request as JSON, runs the exhaustive search and
//! prints the result as JSON on stdout. Progress goes to stderr.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use teamforge::{
    ConfigError, OptimizationRequest, OptimizationResult, SolverConfig, TeamForgeError,
    TeamOptimizer,
};
use tracing::debug;

/// Exact team partitioning that minimizes historical overlap
#[derive(Parser)]
#[command(name = "teamforge", version)]
#[command(about = "Splits people into teams of fixed sizes with minimum total conflict")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Optimize a JSON request and print the best assignments
    Optimize(OptimizeArgs),
}

#[derive(Args, Debug)]
struct OptimizeArgs {
    /// Request file (JSON with people, teamSizes, conflictMatrix)
    #[arg(short, long)]
    input: PathBuf,

    /// Solver configuration (TOML, or YAML by extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of tied assignments to return; overrides config and request
    #[arg(long)]
    max_results: Option<usize>,

    /// Stop searching after this many seconds; overrides config
    #[arg(long)]
    time_limit_secs: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed request: {0}")]
    Request(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Optimize(#[from] TeamForgeError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Optimize(args) => run_optimize(&args),
    }
}

fn run_optimize(args: &OptimizeArgs) -> ExitCode {
    teamforge::console::init();

    match optimize(args) {
        Ok(result) => emit(&result, args.pretty),
        Err(CliError::Optimize(err)) => {
            eprintln!("error: {}", err);
            if let Some(partial) = err.partial_result() {
                let _ = emit(partial, args.pretty);
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn optimize(args: &OptimizeArgs) -> Result<OptimizationResult, CliError> {
    let mut request = load_request(&args.input)?;
    if let Some(max_results) = args.max_results {
        request.max_results = Some(max_results);
    }
    let optimizer = build_optimizer(args)?;
    debug!(
        event = "request_loaded",
        people = request.people.len() as u64,
        teams = request.team_sizes.len() as u64,
    );
    Ok(optimizer.solve(&request)?)
}

fn load_request(path: &Path) -> Result<OptimizationRequest, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Config file first, then command-line flags on top.
fn build_optimizer(args: &OptimizeArgs) -> Result<TeamOptimizer, CliError> {
    let mut config = match &args.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    if let Some(max_results) = args.max_results {
        config = config.with_max_results(max_results);
    }
    if let Some(seconds) = args.time_limit_secs {
        config = config.with_termination_seconds(seconds);
    }
    Ok(TeamOptimizer::from_config(&config)?)
}

fn render(result: &OptimizationResult, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    }
}

fn emit(result: &OptimizationResult, pretty: bool) -> ExitCode {
    match render(result, pretty) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: cannot serialize result: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const REQUEST: &str = r#"{
        "people": [{"id": "1"}, {"id": "2"}, {"id": "3"}, {"id": "4"}],
        "teamSizes": [2, 2],
        "conflictMatrix": {"1": {"2": 5}}
    }"#;

    fn write_temp(contents: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn args(input: &Path) -> OptimizeArgs {
        OptimizeArgs {
            input: input.to_path_buf(),
            config: None,
            max_results: None,
            time_limit_secs: None,
            pretty: false,
        }
    }

    #[test]
    fn test_parses_optimize_subcommand() {
        let cli = Cli::try_parse_from([
            "teamforge",
            "optimize",
            "--input",
            "req.json",
            "--max-results",
            "3",
            "--time-limit-secs",
            "5",
            "--pretty",
        ])
        .unwrap();

        let Command::Optimize(args) = cli.command;
        assert_eq!(args.input, PathBuf::from("req.json"));
        assert_eq!(args.max_results, Some(3));
        assert_eq!(args.time_limit_secs, Some(5));
        assert!(args.pretty);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_optimize_request_file() {
        let input = write_temp(REQUEST, ".json");

        let result = optimize(&args(input.path())).unwrap();

        assert_eq!(result.total_combinations_checked, 3);
        assert_eq!(result.best_assignments.len(), 2);
    }

    #[test]
    fn test_flag_overrides_request_cap() {
        let input = write_temp(REQUEST, ".json");
        let mut args = args(input.path());
        args.max_results = Some(1);

        let result = optimize(&args).unwrap();
        assert_eq!(result.best_assignments.len(), 1);
    }

    #[test]
    fn test_config_file_limits_search() {
        let input = write_temp(REQUEST, ".json");
        let config = write_temp("[termination]\npartition_count_limit = 1\n", ".toml");
        let mut args = args(input.path());
        args.config = Some(config.path().to_path_buf());

        let err = optimize(&args).unwrap_err();
        let CliError::Optimize(err) = err else {
            panic!("expected a search error, got {:?}", err);
        };
        assert_eq!(err.partial_result().unwrap().total_combinations_checked, 1);
    }

    #[test]
    fn test_zero_time_limit_stops_before_scoring() {
        let input = write_temp(REQUEST, ".json");
        let mut args = args(input.path());
        args.time_limit_secs = Some(0);

        let err = optimize(&args).unwrap_err();
        let CliError::Optimize(err) = err else {
            panic!("expected a search error, got {:?}", err);
        };
        assert!(matches!(err, TeamForgeError::DeadlineExceeded { .. }));
        assert_eq!(err.partial_result().unwrap().total_combinations_checked, 0);
    }

    #[test]
    fn test_huge_time_limit_completes() {
        let input = write_temp(REQUEST, ".json");
        let mut args = args(input.path());
        args.time_limit_secs = Some(u64::MAX);

        let result = optimize(&args).unwrap();
        assert_eq!(result.total_combinations_checked, 3);
    }

    #[test]
    fn test_missing_input_file() {
        let err = optimize(&args(Path::new("/nonexistent/request.json"))).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }

    #[test]
    fn test_malformed_request() {
        let input = write_temp("{\"people\": 3}", ".json");
        let err = optimize(&args(input.path())).unwrap_err();
        assert!(matches!(err, CliError::Request(_)));
    }

    #[test]
    fn test_invalid_flag_value_is_config_error() {
        let input = write_temp(REQUEST, ".json");
        let mut args = args(input.path());
        args.max_results = Some(0);

        let err = optimize(&args).unwrap_err();
        assert!(matches!(err, CliError::Optimize(TeamForgeError::Config(_))));
    }

    #[test]
    fn test_render_output_contract() {
        let input = write_temp(REQUEST, ".json");
        let result = optimize(&args(input.path())).unwrap();

        let compact = render(&result, false).unwrap();
        assert!(compact.starts_with("{\"bestAssignments\":["));
        assert!(compact.contains("\"totalCombinationsChecked\":3"));

        let pretty = render(&result, true).unwrap();
        assert!(pretty.contains("\n  \"bestAssignments\""));
    }
}
