pub mod campus;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "campus-registrar")]
#[command(about = "University records: enrollment, grading and academic standing")]
pub struct CliConfig {
    #[arg(long, help = "Campus description TOML file (built-in sample when omitted)")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print the campus summary as JSON")]
    pub json: bool,
}
