use clap::{Args, Parser, Subcommand, ValueEnum};
use orbiton::engine::backend::Backend;
use orbiton::workflows::positions::NucleonModel;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Orbiton Developers",
    version,
    about = "Orbiton CLI - A command-line interface for the Orbiton dual-backend numerical core: backend validation, nucleon position generation, and orbital probability evaluation.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Force a backend for both subsystems instead of the default resolution
    #[arg(short, long, global = true, value_enum, value_name = "BACKEND")]
    pub backend: Option<BackendArg>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare the self-contained and optimized-library backends over the fixed input battery.
    Validate(ValidateArgs),
    /// Generate a deterministic, seeded set of nucleon positions.
    Positions(PositionsArgs),
    /// Evaluate an orbital probability density at a point in space.
    Orbital(OrbitalArgs),
    /// Show backend availability and the default selection.
    Backends,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Maximum tolerated deviation between the two backends.
    #[arg(short, long, default_value_t = 1e-8, value_name = "FLOAT")]
    pub tolerance: f64,

    /// Emit the full report as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `positions` subcommand.
#[derive(Args, Debug)]
pub struct PositionsArgs {
    /// Physical model for nucleon placement.
    #[arg(short, long, value_enum, default_value_t = ModelArg::LiquidDrop)]
    pub model: ModelArg,

    /// Number of nucleons to place (untyped output).
    #[arg(short, long, value_name = "INT")]
    pub count: Option<usize>,

    /// Number of protons (typed output; requires --neutrons).
    #[arg(long, value_name = "INT", conflicts_with = "count", requires = "neutrons")]
    pub protons: Option<usize>,

    /// Number of neutrons (typed output; requires --protons).
    #[arg(long, value_name = "INT", conflicts_with = "count", requires = "protons")]
    pub neutrons: Option<usize>,

    /// Seed for the deterministic random stream.
    #[arg(short, long, default_value_t = 42, value_name = "INT")]
    pub seed: u64,

    /// Emit the positions as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `orbital` subcommand.
#[derive(Args, Debug)]
pub struct OrbitalArgs {
    /// Principal quantum number (n >= 1).
    #[arg(short, long, value_name = "INT")]
    pub n: u32,

    /// Angular momentum quantum number (0 <= l < n).
    #[arg(short, long, value_name = "INT")]
    pub l: u32,

    /// Magnetic quantum number (-l <= m <= l).
    #[arg(short, long, value_name = "INT", default_value_t = 0, allow_hyphen_values = true)]
    pub m: i32,

    /// Radius in Bohr radii.
    #[arg(short, long, value_name = "FLOAT")]
    pub r: f64,

    /// Polar angle from the z-axis, in radians.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.0)]
    pub theta: f64,

    /// Azimuthal angle, in radians.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.0)]
    pub phi: f64,

    /// Nuclear charge Z.
    #[arg(short = 'Z', long, value_name = "FLOAT", default_value_t = 1.0)]
    pub charge: f64,

    /// Apply the effective-nuclear-charge screening correction
    /// (interprets --charge as an atomic number).
    #[arg(long)]
    pub screened: bool,

    /// Emit the sample as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum BackendArg {
    SelfContained,
    Library,
}

impl From<BackendArg> for Backend {
    fn from(value: BackendArg) -> Self {
        match value {
            BackendArg::SelfContained => Backend::SelfContained,
            BackendArg::Library => Backend::Library,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ModelArg {
    LiquidDrop,
    Shell,
}

impl From<ModelArg> for NucleonModel {
    fn from(value: ModelArg) -> Self {
        match value {
            ModelArg::LiquidDrop => NucleonModel::LiquidDrop,
            ModelArg::Shell => NucleonModel::Shell,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positions_accepts_typed_counts() {
        let cli = Cli::try_parse_from([
            "orbiton",
            "positions",
            "--protons",
            "6",
            "--neutrons",
            "6",
            "--seed",
            "1",
        ])
        .unwrap();
        match cli.command {
            Commands::Positions(args) => {
                assert_eq!(args.protons, Some(6));
                assert_eq!(args.neutrons, Some(6));
                assert!(args.count.is_none());
            }
            _ => panic!("expected positions subcommand"),
        }
    }

    #[test]
    fn typed_counts_conflict_with_plain_count() {
        assert!(
            Cli::try_parse_from([
                "orbiton",
                "positions",
                "--count",
                "8",
                "--protons",
                "4",
                "--neutrons",
                "4"
            ])
            .is_err()
        );
    }
}
