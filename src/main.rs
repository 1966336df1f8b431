//! @ai:module:intent CLI for the wordlist tool benchmark harness
//! @ai:module:layer presentation

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wordlist_bench::{
    config::{BenchmarkConfig, PathConfig},
    metrics::{SummaryAggregator, SummaryAggregatorTrait, SummaryRecord},
    report::{JsonReporter, ReportGenerator, ReportPaths},
    runner::{BenchmarkRunner, SystemLauncher},
    toolchain::ToolchainValidator,
    tools::{default_tools, Tool},
    workload::{builtin_workloads, Workload},
};

#[derive(Parser)]
#[command(name = "wordlist-bench")]
#[command(about = "Benchmark wordlist generation tools against each other")]
#[command(version)]
struct Cli {
    /// Defaults to `run` with no flags
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run benchmarks
    Run(RunArgs),

    /// List workloads and the command each tool runs for them
    List {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory containing the tool executables
        #[arg(long)]
        tools_dir: Option<PathBuf>,
    },

    /// Check which tool executables are installed
    Check {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory containing the tool executables
        #[arg(long)]
        tools_dir: Option<PathBuf>,
    },

    /// Recompute summary artifacts from an existing raw results file
    Summarize {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Path to the raw results JSON file
        #[arg(short, long)]
        detailed: PathBuf,

        /// Output directory for summary artifacts
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "benchmark.toml")]
        output: PathBuf,
    },
}

#[derive(Args, Default)]
struct RunArgs {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Time budget per (workload, tool) pair in seconds
    #[arg(short, long)]
    budget: Option<f64>,

    /// Filter by workload names (comma-separated)
    #[arg(long)]
    benches: Option<String>,

    /// Filter by tool names (comma-separated)
    #[arg(long)]
    tools: Option<String>,

    /// Directory containing the tool executables
    #[arg(long)]
    tools_dir: Option<PathBuf>,

    /// Output directory for results
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write results into a timestamped subdirectory
    #[arg(long)]
    timestamped: bool,

    /// Do not print a progress marker per iteration
    #[arg(long)]
    no_progress: bool,
}

const DEFAULT_LOG_DIRECTIVE: &str = "wordlist_bench=info";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => run_benchmarks(args),
        Commands::List { config, tools_dir } => list(config, tools_dir),
        Commands::Check { config, tools_dir } => check(config, tools_dir),
        Commands::Summarize {
            config,
            detailed,
            output,
        } => summarize(config, detailed, output),
        Commands::Init { output } => init_config(output),
    }
}

/// @ai:intent Filter from RUST_LOG when set and valid, else the crate at info
/// @ai:effects pure
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

/// @ai:intent Run the full workload x tool matrix and write all artifacts
/// @ai:effects process, fs:write
fn run_benchmarks(args: RunArgs) -> Result<()> {
    let mut config = load_or_default_config(args.config)?;

    if let Some(budget) = args.budget {
        config.run.time_budget_secs = budget;
    }
    if let Some(dir) = args.tools_dir {
        config.tools.dir = dir;
    }
    if let Some(output) = args.output {
        config.paths.results_dir = output;
    }
    if let Some(benches) = args.benches {
        config.filter.benches = Some(split_list(&benches));
    }
    if let Some(tools) = args.tools {
        config.filter.tools = Some(split_list(&tools));
    }
    config.paths.timestamped |= args.timestamped;
    config.run.progress &= !args.no_progress;

    let (workloads, tools) = select(&config);

    if workloads.is_empty() || tools.is_empty() {
        tracing::warn!("No workload/tool pairs match the filter criteria");
        return Ok(());
    }

    let toolchain_status = ToolchainValidator::validate(&tools, &workloads[0]);
    ToolchainValidator::log_warnings(&toolchain_status);

    let output_dir = if config.paths.timestamped {
        let timestamp = chrono::Utc::now().format("%Y-%m-%d_%H-%M-%S");
        config.paths.results_dir.join(timestamp.to_string())
    } else {
        config.paths.results_dir.clone()
    };

    tracing::info!(
        "Benchmarking {} workloads x {} tools, {}s budget per pair",
        workloads.len(),
        tools.len(),
        config.run.time_budget_secs
    );

    let runner = BenchmarkRunner::new(SystemLauncher::new(), config.run.clone());
    let records = runner.run_all(&workloads, &tools)?;

    let summaries = SummaryAggregator::new().aggregate(&records);

    let output = ReportPaths::in_dir(&output_dir, &config.paths);
    ReportGenerator::new()
        .generate_all(&records, &summaries, &output)
        .with_context(|| format!("Failed to write results to {}", output_dir.display()))?;

    print_summary(&summaries);
    Ok(())
}

/// @ai:intent Apply the filter to the builtin catalogs
/// @ai:effects pure
fn select(config: &BenchmarkConfig) -> (Vec<Workload>, Vec<Tool>) {
    let workloads = builtin_workloads()
        .into_iter()
        .filter(|w| config.filter.matches_bench(&w.name))
        .collect();

    let tools = default_tools(&config.tools.dir)
        .into_iter()
        .filter(|t| config.filter.matches_tool(&t.name))
        .collect();

    (workloads, tools)
}

/// @ai:intent List workloads and tool commands
/// @ai:effects io
fn list(config_path: Option<PathBuf>, tools_dir: Option<PathBuf>) -> Result<()> {
    let mut config = load_or_default_config(config_path)?;

    if let Some(dir) = tools_dir {
        config.tools.dir = dir;
    }

    let (workloads, tools) = select(&config);

    println!("Workloads ({}):", workloads.len());
    println!();
    println!("{:<22} {:<22} {:>4} {:>4}", "Name", "Mask", "Min", "Max");
    println!("{}", "-".repeat(55));

    for workload in &workloads {
        println!(
            "{:<22} {:<22} {:>4} {:>4}",
            workload.name, workload.mask, workload.min_length, workload.max_length
        );
    }

    println!();
    println!("Commands:");

    for workload in &workloads {
        println!();
        println!("  {}", workload.name);

        for tool in &tools {
            println!("    {:<14} {}", tool.name, tool.build_command(workload));
        }
    }

    Ok(())
}

/// @ai:intent Report installed and missing tool executables
/// @ai:effects fs:read, io
fn check(config_path: Option<PathBuf>, tools_dir: Option<PathBuf>) -> Result<()> {
    let mut config = load_or_default_config(config_path)?;

    if let Some(dir) = tools_dir {
        config.tools.dir = dir;
    }

    let (workloads, tools) = select(&config);
    let probe = workloads
        .into_iter()
        .next()
        .unwrap_or_else(|| Workload::new("probe", "?d", 1, 1));

    let status = ToolchainValidator::validate(&tools, &probe);

    for name in &status.available {
        println!("  ok       {}", name);
    }

    for missing in &status.missing_tools {
        println!(
            "  missing  {} ({}) - {}",
            missing.tool_name,
            missing.program.display(),
            missing.install_hint
        );
    }

    Ok(())
}

/// @ai:intent Rebuild summary artifacts from a raw results file
/// @ai:effects fs:read, fs:write
fn summarize(
    config_path: Option<PathBuf>,
    detailed: PathBuf,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let config = load_or_default_config(config_path)?;

    let records = JsonReporter::load_raw(&detailed)
        .with_context(|| format!("Failed to read {}", detailed.display()))?;

    let summaries = SummaryAggregator::new().aggregate(&records);

    let output = summary_paths(&config.paths, output_dir);
    ReportGenerator::new().write_summaries(&records, &summaries, &output)?;

    print_summary(&summaries);
    Ok(())
}

/// @ai:intent Artifact paths for `summarize`, honoring configured file names
/// @ai:effects pure
fn summary_paths(paths: &PathConfig, output_dir: Option<PathBuf>) -> ReportPaths {
    let dir = output_dir.unwrap_or_else(|| paths.results_dir.clone());
    ReportPaths::in_dir(&dir, paths)
}

/// @ai:intent Initialize default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = BenchmarkConfig::default();
    config.save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load configuration or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<BenchmarkConfig> {
    let config = match path {
        Some(p) => BenchmarkConfig::load(&p)
            .with_context(|| format!("Failed to load config {}", p.display()))?,
        None => {
            let default_path = Path::new("benchmark.toml");

            if default_path.exists() {
                BenchmarkConfig::load(default_path)?
            } else {
                BenchmarkConfig::default()
            }
        }
    };

    Ok(config)
}

/// @ai:intent Split a comma-separated CLI list
/// @ai:effects pure
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// @ai:intent Print summary to console
/// @ai:effects io
fn print_summary(summaries: &[SummaryRecord]) {
    println!();
    println!("Wordlist Benchmark Results");
    println!("==========================");
    println!();

    if summaries.is_empty() {
        println!("No successful runs.");
        return;
    }

    println!(
        "{:<22} {:<14} {:>10} {:>10} {:>10} {:>10}",
        "Bench", "Tool", "Mean (s)", "Std", "Min", "Max"
    );
    println!("{}", "-".repeat(81));

    for s in summaries {
        let std = s
            .std
            .map(|v| format!("{:.4}", v))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<22} {:<14} {:>10.4} {:>10} {:>10.4} {:>10.4}",
            s.bench, s.tool, s.mean, std, s.min, s.max
        );
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_crate_info() {
        assert_eq!(log_filter(None).to_string(), DEFAULT_LOG_DIRECTIVE);
    }

    #[test]
    fn test_log_filter_keeps_rust_log_level() {
        let filter = log_filter(Some("wordlist_bench=debug".to_string())).to_string();
        assert!(filter.contains("wordlist_bench=debug"));
        assert!(!filter.contains("info"));
    }

    #[test]
    fn test_summary_paths_use_configured_names() {
        let paths = PathConfig {
            results_dir: PathBuf::from("results"),
            summary_file: "custom_summary.json".to_string(),
            markdown_file: "custom.md".to_string(),
            ..PathConfig::default()
        };

        let output = summary_paths(&paths, None);
        assert_eq!(output.summary, PathBuf::from("results/custom_summary.json"));
        assert_eq!(output.markdown, PathBuf::from("results/custom.md"));

        let output = summary_paths(&paths, Some(PathBuf::from("elsewhere")));
        assert_eq!(output.summary, PathBuf::from("elsewhere/custom_summary.json"));
    }

    #[test]
    fn test_cli_parses_summarize_config() {
        let cli = Cli::try_parse_from([
            "wordlist-bench",
            "summarize",
            "--config",
            "bench.toml",
            "--detailed",
            "raw.json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Summarize { config, output, .. }) => {
                assert_eq!(config, Some(PathBuf::from("bench.toml")));
                assert_eq!(output, None);
            }
            _ => panic!("expected summarize"),
        }
    }
}
