//! netif-tools: Multi-vendor network interface normalizer
//!
//! Queries devices through Cisco NSO RESTCONF, normalizes their interface
//! data and renders the result as tables, JSON or CSV.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use netif_tools::{
    cli,
    config::{self, AppConfig, Validatable},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with vendor support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported Platforms:",
        "\n  NSO NEDs:   Cisco ASA, Cisco IOS-XR, Juniper Junos, Fortinet FortiOS",
        "\n  OpenConfig: openconfig-interfaces JSON, gNMI Get responses",
        "\n\nOutput Formats:",
        "\n  table, json, csv"
    )
}

#[derive(Parser)]
#[command(name = "netif-tools")]
#[command(version, long_version = build_long_version())]
#[command(about = "Multi-vendor network interface normalizer", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Failed devices, pushes or verification mismatches
    3  Error occurred

EXAMPLES:
    # Query every device in NSO
    netif-tools query --nso-host nso.example.net --nso-port 8888

    # Export JSON for processing
    netif-tools query -o json -O interfaces.json

    # Normalize a captured RESTCONF payload
    netif-tools normalize xr-core-01.json --platform cisco-iosxr-cli-7.52

    # Verify a gNMI dump against expected interfaces
    netif-tools verify leaf1.json --expected expected.json --device leaf1")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// NSO connection flags shared by `query` and `push`
#[derive(Parser)]
struct NsoArgs {
    /// NSO host name or full URL
    #[arg(long, env = "NSO_HOST")]
    nso_host: Option<String>,

    /// NSO RESTCONF port
    #[arg(long, env = "NSO_PORT")]
    nso_port: Option<u16>,

    /// URL scheme (http or https)
    #[arg(long, env = "NSO_SCHEME")]
    nso_scheme: Option<String>,

    /// NSO username
    #[arg(long, env = "NSO_USERNAME")]
    nso_username: Option<String>,

    /// NSO password
    #[arg(long, env = "NSO_PASSWORD", hide_env_values = true)]
    nso_password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "NSO_TIMEOUT")]
    timeout: Option<u64>,

    /// Accept invalid TLS certificates
    #[arg(long, env = "NSO_INSECURE")]
    insecure: bool,
}

impl NsoArgs {
    fn apply(self, config: &mut AppConfig) {
        if let Some(host) = self.nso_host {
            config.nso.host = host;
        }
        if let Some(port) = self.nso_port {
            config.nso.port = port;
        }
        if let Some(scheme) = self.nso_scheme {
            config.nso.scheme = scheme;
        }
        if let Some(username) = self.nso_username {
            config.nso.username = username;
        }
        if let Some(password) = self.nso_password {
            config.nso.password = password;
        }
        if let Some(timeout) = self.timeout {
            config.nso.timeout_secs = timeout;
        }
        if self.insecure {
            config.nso.insecure = true;
        }
    }
}

/// Arguments for the `query` subcommand
#[derive(Parser)]
struct QueryArgs {
    #[command(flatten)]
    nso: NsoArgs,

    /// Output format (defaults from the output file extension, else table)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Only query these devices (repeatable)
    #[arg(short, long = "device", value_name = "NAME")]
    devices: Vec<String>,

    /// Query devices one at a time instead of in parallel
    #[arg(long)]
    sequential: bool,
}

/// Arguments for the `normalize` subcommand
#[derive(Parser)]
struct NormalizeArgs {
    /// Captured payload (RESTCONF response, OpenConfig JSON or gNMI Get dump)
    file: PathBuf,

    /// Platform tag / NED id, e.g. cisco-asa-cli-6.18 or openconfig
    #[arg(short, long)]
    platform: String,

    /// Device name shown in the report (defaults to the file name)
    #[arg(short, long)]
    device: Option<String>,

    /// Output format (defaults from the output file extension, else table)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `push` subcommand
#[derive(Parser)]
struct PushArgs {
    /// XML configuration files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Target device (defaults to the first <name> element of each file)
    #[arg(short, long)]
    device: Option<String>,

    /// Push timeout in seconds
    #[arg(long, env = "NSO_PUSH_TIMEOUT")]
    push_timeout: Option<u64>,

    #[command(flatten)]
    nso: NsoArgs,
}

/// Arguments for the `verify` subcommand
#[derive(Parser)]
struct VerifyArgs {
    /// OpenConfig payload or gNMI Get dump
    payload: PathBuf,

    /// Expected interfaces JSON ({"device": [{"name": ...}]})
    #[arg(short, long)]
    expected: PathBuf,

    /// Device entry to verify against
    #[arg(short, long)]
    device: String,
}

/// Arguments for the `oc-config` subcommand
#[derive(Parser)]
struct OcConfigArgs {
    /// Interface name
    #[arg(long)]
    name: String,

    /// IPv4 address
    #[arg(long)]
    ip: String,

    /// Prefix length (0-32)
    #[arg(long)]
    prefix_length: u8,

    /// Interface description
    #[arg(long)]
    description: Option<String>,

    /// Write the payload to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Query interfaces of every device managed by NSO
    Query(QueryArgs),
    /// Normalize a captured interface payload
    Normalize(NormalizeArgs),
    /// Push XML configuration files through NSO
    Push(PushArgs),
    /// Verify an OpenConfig payload against expected interfaces
    Verify(VerifyArgs),
    /// Print the OpenConfig payload configuring one interface
    OcConfig(OcConfigArgs),
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .netif-tools.yaml in the current directory
    Init,
}

/// Load the config file and layer the global flags over it.
fn load_config(cli: &Cli) -> AppConfig {
    let overrides = AppConfig::builder()
        .no_color(cli.no_color)
        .quiet(cli.quiet)
        .build();
    let (config, loaded_from) = AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    config
}

/// Reject invalid settings before any work starts.
fn ensure_valid(config: &AppConfig) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
    Err(netif_tools::NetifError::config(details.join("; "))).context("invalid configuration")
}

fn run(cli: Cli) -> Result<i32> {
    let mut config = load_config(&cli);

    match cli.command {
        Commands::Query(args) => {
            args.nso.apply(&mut config);
            if args.output.is_some() {
                config.output.format = args.output;
            }
            if args.output_file.is_some() {
                config.output.file = args.output_file;
            }
            if !args.devices.is_empty() {
                config.behavior.devices = args.devices;
            }
            if args.sequential {
                config.behavior.sequential = true;
            }
            ensure_valid(&config)?;
            cli::run_query(&config)
        }
        Commands::Normalize(args) => {
            if args.output.is_some() {
                config.output.format = args.output;
            }
            if args.output_file.is_some() {
                config.output.file = args.output_file;
            }
            ensure_valid(&config)?;
            cli::run_normalize(&args.file, &args.platform, args.device, &config)
        }
        Commands::Push(args) => {
            args.nso.apply(&mut config);
            if let Some(timeout) = args.push_timeout {
                config.nso.push_timeout_secs = timeout;
            }
            ensure_valid(&config)?;
            cli::run_push(&args.files, args.device.as_deref(), &config)
        }
        Commands::Verify(args) => {
            cli::run_verify(&args.payload, &args.expected, &args.device, config.behavior.quiet)
        }
        Commands::OcConfig(args) => cli::run_oc_config(
            &args.name,
            &args.ip,
            args.prefix_length,
            args.description.as_deref(),
            args.output_file,
            config.behavior.quiet,
        ),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "netif-tools", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to render schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }
        Commands::Config { action } => run_config_action(action, cli.config.as_deref()),
    }
}

fn run_config_action(action: ConfigAction, explicit: Option<&std::path::Path>) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = config::load_or_default(explicit);
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                config::user_config_dir().map(|p| p.display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in config::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match config::discover_config_file(explicit) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".netif-tools.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, config::generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(exit_codes::SUCCESS)
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_nso_args_override_config() {
        let cli = Cli::parse_from([
            "netif-tools",
            "query",
            "--nso-host",
            "nso.lab",
            "--nso-port",
            "8888",
            "--insecure",
            "-o",
            "csv",
            "--device",
            "fw-1",
            "--device",
            "xr-1",
        ]);
        let Commands::Query(args) = cli.command else {
            panic!("expected query");
        };
        assert_eq!(args.output, Some(ReportFormat::Csv));
        assert_eq!(args.devices, ["fw-1", "xr-1"]);

        let mut config = AppConfig::default();
        args.nso.apply(&mut config);
        assert_eq!(config.nso.base_url(), "http://nso.lab:8888");
        assert!(config.nso.insecure);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = AppConfig::default();
        config.nso.timeout_secs = 0;
        let err = ensure_valid(&config).unwrap_err();
        assert!(format!("{err:#}").contains("nso.timeout_secs"));
    }
}
