use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "poetry-up",
    about = "Safely update Poetry dependencies - dry-run first, apply only when conflict-free",
    version
)]
pub struct Cli {
    /// Name of the package to update
    #[arg(value_name = "PACKAGE_NAME")]
    pub package_name: Option<String>,

    /// Update all packages listed in pyproject.toml
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Enable verbose (debug-level) logging
    #[arg(short, long)]
    pub verbose: bool,
}
