// crates/plangate-cli/src/main.rs
// ============================================================================
// Module: Plan Gate CLI Entry Point
// Description: Command dispatcher for harness plan, destroy, and config
// workflows.
// Purpose: Provide a small, safe CLI over the Plan Gate driver and config.
// Dependencies: clap, plangate-config, plangate-core, serde_json,
// tracing-subscriber
// ============================================================================

//! ## Overview
//! The `plangate` binary loads a TOML run configuration, drives the
//! Terraform CLI adapter through the requested lifecycle operation, and
//! reports the outcome as text or JSON. Tool failures map to a
//! nonzero exit code; output goes through explicit writer helpers because
//! direct printing is denied workspace-wide.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use plangate_config::HarnessConfig;
use plangate_config::base_dir;
use plangate_core::PlanResult;
use plangate_core::PlanSummary;
use plangate_core::Provisioner;
use plangate_core::TerraformCli;
use plangate_core::TerraformOptions;
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: Command Definitions
// ============================================================================

/// Plan Gate: drive a provisioning tool against a module configuration.
#[derive(Debug, Parser)]
#[command(name = "plangate", version, about)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Initialize the module and compute a plan.
    Plan(RunArgs),
    /// Tear down whatever the module applied.
    Destroy(RunArgs),
    /// Configuration workflows.
    Config {
        /// Configuration subcommand.
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands.
#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Load and validate a configuration file.
    Validate(ConfigArgs),
}

/// Arguments shared by lifecycle commands.
#[derive(Debug, clap::Args)]
struct RunArgs {
    /// Path to the run configuration file.
    #[arg(long)]
    config: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
    /// Suppress ANSI color in tool output.
    #[arg(long)]
    no_color: bool,
}

/// Arguments for configuration commands.
#[derive(Debug, clap::Args)]
struct ConfigArgs {
    /// Path to the run configuration file.
    #[arg(long)]
    config: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// Output formats for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable single-line output.
    Text,
    /// JSON object output.
    Json,
}

// ============================================================================
// SECTION: CLI Errors
// ============================================================================

/// Terminal CLI failure carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Plan(args) => command_plan(&args),
        Commands::Destroy(args) => command_destroy(&args),
        Commands::Config {
            command: ConfigCommands::Validate(args),
        } => command_config_validate(&args),
    }
}

/// Installs the stderr tracing subscriber, honoring `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================================================
// SECTION: Plan Command
// ============================================================================

/// Reported outcome of a plan command.
#[derive(Debug, Serialize)]
struct PlanOutcome {
    /// Module directory the plan ran against.
    module_dir: String,
    /// True when the plan proposes changes.
    changes_pending: bool,
    /// Parsed change counts, when the plan line was recognizable.
    summary: Option<PlanSummary>,
}

/// Executes the `plan` command.
fn command_plan(args: &RunArgs) -> CliResult<ExitCode> {
    let options = load_options(&args.config, args.no_color)?;
    let driver = TerraformCli::new();
    let plan = driver
        .init_and_plan(&options)
        .map_err(|err| CliError::new(err.to_string()))?;
    let outcome = PlanOutcome {
        module_dir: options.module_dir().display().to_string(),
        changes_pending: plan.changes_pending,
        summary: plan.summary,
    };
    match args.format {
        OutputFormat::Json => write_json(&outcome)?,
        OutputFormat::Text => write_stdout_line(&render_plan_text(&outcome, &plan))?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Renders the single-line text form of a plan outcome.
fn render_plan_text(outcome: &PlanOutcome, plan: &PlanResult) -> String {
    match &plan.summary {
        Some(summary) => format!(
            "plan for {}: {} to add, {} to change, {} to destroy",
            outcome.module_dir, summary.add, summary.change, summary.destroy
        ),
        None if outcome.changes_pending => {
            format!("plan for {}: changes pending", outcome.module_dir)
        }
        None => format!("plan for {}: no recognizable plan line", outcome.module_dir),
    }
}

// ============================================================================
// SECTION: Destroy Command
// ============================================================================

/// Executes the `destroy` command.
fn command_destroy(args: &RunArgs) -> CliResult<ExitCode> {
    let options = load_options(&args.config, args.no_color)?;
    let driver = TerraformCli::new();
    driver.destroy(&options).map_err(|err| CliError::new(err.to_string()))?;
    match args.format {
        OutputFormat::Json => write_json(&DestroyOutcome {
            module_dir: options.module_dir().display().to_string(),
            destroyed: true,
        })?,
        OutputFormat::Text => {
            write_stdout_line(&format!("destroy complete for {}", options.module_dir().display()))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Reported outcome of a destroy command.
#[derive(Debug, Serialize)]
struct DestroyOutcome {
    /// Module directory the destroy ran against.
    module_dir: String,
    /// Always true on success; failures exit nonzero instead.
    destroyed: bool,
}

// ============================================================================
// SECTION: Config Command
// ============================================================================

/// Reported shape of a validated configuration.
#[derive(Debug, Serialize)]
struct ConfigSummary {
    /// Module directory as written in the file.
    module_dir: String,
    /// Number of variables in the parameter set.
    variables: usize,
    /// Number of declared scenarios.
    scenarios: usize,
}

/// Executes the `config validate` command.
fn command_config_validate(args: &ConfigArgs) -> CliResult<ExitCode> {
    let config = load_config(&args.config)?;
    let summary = ConfigSummary {
        module_dir: config.module.dir.clone(),
        variables: config.vars.len(),
        scenarios: config.scenarios.len(),
    };
    match args.format {
        OutputFormat::Json => write_json(&summary)?,
        OutputFormat::Text => write_stdout_line(&format!(
            "config ok: module dir {}, {} variables, {} scenarios",
            summary.module_dir, summary.variables, summary.scenarios
        ))?,
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Shared Helpers
// ============================================================================

/// Loads and validates the run configuration.
fn load_config(path: &Path) -> CliResult<HarnessConfig> {
    plangate_config::load(path).map_err(|err| CliError::new(err.to_string()))
}

/// Loads configuration and builds driver options rooted at the config file.
fn load_options(path: &Path, no_color: bool) -> CliResult<TerraformOptions> {
    let config = load_config(path)?;
    let mut options = config.options_rooted_at(&base_dir(path));
    if no_color {
        options = options.with_no_color();
    }
    Ok(options)
}

/// Writes a value to stdout as JSON with a trailing newline.
fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let rendered = serde_json::to_string(value)
        .map_err(|err| CliError::new(format!("failed to render output: {err}")))?;
    write_stdout_line(&rendered)
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
        .map_err(|err| CliError::new(format!("failed to write stdout: {err}")))
}

/// Writes a line to stderr, reporting the failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let mut stderr = std::io::stderr();
    let _ = writeln!(&mut stderr, "plangate: {message}");
    ExitCode::FAILURE
}
