use clap::{ArgGroup, Parser, ValueEnum};
use dupdetect_core::{EngineConfig, IdfScheme, Thresholds};
use std::path::PathBuf;

pub const DEFAULT_EXTENSIONS: [&str; 7] = ["h", "c", "cpp", "cc", "java", "py", "cs"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdfArg {
    /// log2(N / df)
    Standard,
    /// log2(1 + N / df)
    Smoothed,
}

impl From<IdfArg> for IdfScheme {
    fn from(value: IdfArg) -> Self {
        match value {
            IdfArg::Standard => IdfScheme::Standard,
            IdfArg::Smoothed => IdfScheme::Smoothed,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "dupdetect")]
#[command(about = "=== Duplicate Code Detection Tool ===", long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["directories", "files"])))]
pub struct Args {
    /// The maximum allowed similarity before the run exits with an error
    #[arg(short = 't', long, default_value_t = 100.0)]
    pub fail_threshold: f64,
    /// Check for similarities between all files of the specified directories
    #[arg(short = 'd', long, num_args = 1..)]
    pub directories: Vec<PathBuf>,
    /// Check for similarities between the specified files
    #[arg(short = 'f', long, num_args = 1..)]
    pub files: Vec<PathBuf>,
    /// Directories to ignore
    #[arg(long, num_args = 1..)]
    pub ignore_directories: Vec<PathBuf>,
    /// Files to ignore
    #[arg(long, num_args = 1..)]
    pub ignore_files: Vec<PathBuf>,
    /// Print output as JSON
    #[arg(short = 'j', long)]
    pub json: bool,
    /// Project root removed from paths when printing results
    #[arg(long)]
    pub project_root_dir: Option<PathBuf>,
    /// File extensions to check for similarities
    #[arg(long, num_args = 1.., default_values = DEFAULT_EXTENSIONS)]
    pub file_extensions: Vec<String>,
    /// Don't print out similarity below the ignore threshold
    #[arg(long, default_value_t = 0.0)]
    pub ignore_threshold: f64,
    /// Remove comments and docstrings from Python sources before analysis
    #[arg(long)]
    pub only_code: bool,
    /// Also write results as CSV to this path
    #[arg(long)]
    pub csv_output: Option<PathBuf>,
    /// Add file line counts to all outputs
    #[arg(long)]
    pub show_loc: bool,
    /// Inverse document frequency weighting
    #[arg(long, value_enum, default_value_t = IdfArg::Standard)]
    pub idf: IdfArg,
    /// Answer similarity queries on a single thread
    #[arg(long)]
    pub sequential: bool,
}

impl Args {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds { fail: self.fail_threshold, ignore: self.ignore_threshold }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig { idf: self.idf.into(), parallel: !self.sequential }
    }
}
