use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "composer-license-auditor")]
#[command(about = "Audit the licenses of a Composer project's dependencies")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize dependency licenses and what each license allows
    Report {
        /// Project directory containing composer.json (default: current directory)
        path: Option<PathBuf>,

        /// Composer executable
        #[arg(long)]
        composer: Option<String>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML file with extra license metadata, consulted before the bundled data
        #[arg(long)]
        license_data: Option<PathBuf>,

        /// Seconds to wait for composer
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },
    /// Check dependency licenses against a blacklist and/or whitelist
    Check {
        /// Project directory containing composer.json (default: current directory)
        path: Option<PathBuf>,

        /// Composer executable
        #[arg(long)]
        composer: Option<String>,

        /// License that must not be used (repeatable, replaces the configured list)
        #[arg(long = "blacklist", value_name = "LICENSE")]
        blacklist: Vec<String>,

        /// License that may be used (repeatable, replaces the configured list)
        #[arg(long = "whitelist", value_name = "LICENSE")]
        whitelist: Vec<String>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Exit with code 0 even on violations
        #[arg(long)]
        exit_zero: bool,

        /// Seconds to wait for composer
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },
    /// Initialize configuration with preset policy
    Init {
        /// Policy preset
        policy: InitPreset,

        /// Project directory (default: current directory)
        path: Option<PathBuf>,
    },
    /// Show or validate configuration
    Config {
        /// Project directory (default: current directory)
        path: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// CLI flag first, then the configured format, then table.
    pub fn resolve(flag: Option<OutputFormat>, configured: Option<&str>) -> OutputFormat {
        flag.unwrap_or(match configured {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Table,
        })
    }
}

#[derive(Clone, ValueEnum)]
pub enum InitPreset {
    Green,
    Yellow,
    Red,
}
