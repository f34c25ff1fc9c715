use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Version string: `v0.1.0` for releases, `v0.1.0 (dev abc1234)` otherwise.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{} (dev {})", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    bin_name = "roster",
    version = get_version(),
    disable_help_subcommand = true,
    about = "Employee directory with faceted filters, search and an adaptive table",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true, help_heading = "Options")]
    pub log_json: bool,

    /// JSON roster to load instead of the bundled one
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Viewport width in pixels (default: terminal width × cell_px)
    #[arg(long, global = true, value_name = "PX", help_heading = "Options")]
    pub width: Option<u32>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List employees (default)
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show every facet and its options
    Facets,

    /// Total, active and inactive counts
    Stats,

    /// Show the columns selected for the current width
    Columns,

    /// Interactive session: toggle filters, search, resize, page
    Shell,

    /// Show resolved configuration
    Config,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Case-insensitive substring search over name, email, department, position and location
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter as facet=value; repeat to combine (OR within a facet, AND across facets)
    #[arg(short, long = "filter", value_name = "FACET=VALUE")]
    pub filters: Vec<String>,

    /// Grid page, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Sort the grid by a column, e.g. salary:desc
    #[arg(long, value_name = "COLUMN[:asc|desc]")]
    pub sort: Option<String>,
}
