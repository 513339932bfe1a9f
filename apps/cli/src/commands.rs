//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use docsmith_conf::{
    EmitFormat, SITE_CONFIG_FILE_NAME, SiteConfig, emit, init_site_config, load_site_config,
    resolve,
};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// docsmith — resolve and emit documentation-site configuration.
#[derive(Parser)]
#[command(
    name = "docsmith",
    version,
    about = "Resolve a project's documentation-site configuration for the docs toolchain.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root containing the VERSION file (defaults to cwd).
    #[arg(long, global = true)]
    pub project_root: Option<PathBuf>,

    /// Site config file (defaults to <project-root>/docsmith.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Write a default docsmith.toml.
    Init,

    /// Print the loaded site settings as TOML.
    Show,

    /// Resolve the full configuration and emit it.
    Resolve {
        /// Output format.
        #[arg(long, default_value = "json")]
        format: OutputFormat,

        /// Write to a file instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Validate that resolution succeeds and report the dynamic values.
    Check,
}

/// Emission format flag.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    Toml,
}

impl From<OutputFormat> for EmitFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => EmitFormat::Json,
            OutputFormat::Toml => EmitFormat::Toml,
        }
    }
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Default filter directives for a given `-v` count. Targets are crate
/// names: `docsmith` for this binary, `docsmith_conf` for the library.
fn filter_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "docsmith=info,docsmith_conf=info",
        1 => "docsmith=debug,docsmith_conf=debug",
        _ => "docsmith=trace,docsmith_conf=trace",
    }
}

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(cli.verbose)));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let project_root = match &cli.project_root {
        Some(p) => p.clone(),
        None => std::env::current_dir()
            .map_err(|e| eyre!("cannot determine working directory: {e}"))?,
    };
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| project_root.join(SITE_CONFIG_FILE_NAME));

    match cli.command {
        Command::Init => cmd_init(&config_path),
        Command::Show => cmd_show(&config_path),
        Command::Resolve { format, out } => {
            cmd_resolve(&config_path, &project_root, format, out.as_deref())
        }
        Command::Check => cmd_check(&config_path, &project_root),
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Err(eyre!(
            "'{}' already exists — remove it first to re-initialize",
            config_path.display()
        ));
    }
    init_site_config(config_path)?;
    println!("Site config initialized at: {}", config_path.display());
    Ok(())
}

fn cmd_show(config_path: &Path) -> Result<()> {
    let site: SiteConfig = load_site_config(config_path)?;
    let toml_str = toml::to_string_pretty(&site)?;
    println!("{toml_str}");
    Ok(())
}

fn cmd_resolve(
    config_path: &Path,
    project_root: &Path,
    format: OutputFormat,
    out: Option<&Path>,
) -> Result<()> {
    let site = load_site_config(config_path)?;

    info!(
        project = %site.project.name,
        root = %project_root.display(),
        "resolving documentation configuration"
    );

    let resolved = resolve(&site, project_root)?;
    let rendered = emit(&resolved, format.into())?;

    match out {
        Some(path) => {
            std::fs::write(path, &rendered)
                .map_err(|e| eyre!("cannot write '{}': {e}", path.display()))?;
            println!("Resolved config written to: {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn cmd_check(config_path: &Path, project_root: &Path) -> Result<()> {
    let site = load_site_config(config_path)?;
    let resolved = resolve(&site, project_root)?;

    println!("  Configuration resolves cleanly.");
    println!("  Project:  {}", resolved.project);
    println!("  Version:  {}", resolved.version);
    println!(
        "  Switcher: {}",
        resolved.html.theme_options.switcher.version_match
    );
    println!("  Cname:    {}", resolved.cname);
    println!("  Repo:     {}", resolved.html.theme_options.github_url);

    Ok(())
}
