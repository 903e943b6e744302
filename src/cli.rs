use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// foamcase - OpenFOAM case study helper
#[derive(Parser)]
#[command(name = "foamcase")]
#[command(about = "Locate OpenFOAM cases, generate Allrun/Allclean/rmCases scripts, read dictionaries")]
#[command(version)]
pub struct Cli {
    /// Dry-run mode: print generated scripts instead of writing them.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Log progress to stderr (same as RUST_LOG=info).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every OpenFOAM case below a directory
    Cases {
        /// Directory to search
        root: PathBuf,
    },
    /// Generate Allrun and Allclean for every runnable case
    Allrun {
        /// Study directory to scan
        base: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generate rmCases to remove a generated study
    Rmcases {
        /// Study directory (holding baseCase/)
        #[arg(required_unless_present = "study", conflicts_with = "study")]
        base: Option<PathBuf>,
        /// Parent case name (repeatable)
        #[arg(short, long = "case", value_name = "NAME", conflicts_with = "study")]
        cases: Vec<String>,
        /// The study directory is a copy; offer to delete it entirely
        #[arg(long, conflicts_with = "study")]
        write_dir: bool,
        /// Read base directory, case names and write_dir from a case study JSON file
        #[arg(long, value_name = "FILE")]
        study: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print an OpenFOAM dictionary
    Show {
        /// Dictionary file (e.g. 0/U, system/controlDict)
        file: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Json)]
        format: ShowFormat,
        /// Include the FoamFile header
        #[arg(long)]
        header: bool,
    },
    /// Check that an OpenFOAM dictionary parses
    Validate {
        /// Dictionary file to check
        file: PathBuf,
    },
}

/// Where generated scripts go and whether they are made executable.
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output directory for generated scripts
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,
    /// Leave file permissions untouched (do not chmod +x)
    #[arg(long)]
    pub no_chmod: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    /// Pretty-printed JSON
    Json,
    /// OpenFOAM dictionary syntax
    Foam,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
