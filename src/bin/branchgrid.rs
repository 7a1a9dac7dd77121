//! branchgrid - Interactive grid over branch revenue records.
//!
//! Fetches the records once, then lets you filter, aggregate by location,
//! sort, page through and delete them in the terminal.
//!
//! Usage:
//!   branchgrid                                  # load from http://localhost:5000/api/data
//!   branchgrid --url http://host/api/data       # custom endpoint
//!   branchgrid --file ./data.json               # load a saved payload
//!   branchgrid --page-size 20 --log-file grid.log -v

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::error::Error;
use std::fs::File;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use branchgrid::config::{Config, DEFAULT_PAGE_SIZE, DEFAULT_URL, SourceConfig};
use branchgrid::tui::App;

/// How often the UI wakes up to check on the fetch.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Paginated, sortable, filterable grid over branch records.
#[derive(Parser)]
#[command(name = "branchgrid", about = "Branch revenue grid viewer")]
struct Args {
    /// Endpoint returning a JSON array of records.
    #[arg(long, value_name = "URL", conflicts_with = "file")]
    url: Option<String>,

    /// Read the JSON payload from a file instead of the endpoint.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Rows per page at start-up (must be at least 1).
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: NonZeroUsize,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Write logs to this file. Logs are off without it, the terminal
    /// belongs to the grid.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// More verbose logging (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Errors only.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn config(&self) -> Config {
        let source = match &self.file {
            Some(path) => SourceConfig::File(path.clone()),
            None => SourceConfig::Http {
                url: self.url.clone().unwrap_or_else(|| DEFAULT_URL.to_string()),
                timeout: self.timeout.map(Duration::from_secs),
            },
        };
        Config {
            source,
            page_size: self.page_size,
        }
    }
}

fn init_logging(path: &Path, verbose: u8, quiet: bool) -> Result<(), Box<dyn Error>> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter =
        EnvFilter::from_default_env().add_directive(format!("branchgrid={}", level).parse()?);

    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Some(ref path) = args.log_file
        && let Err(e) = init_logging(path, args.verbose, args.quiet)
    {
        eprintln!("Error: cannot set up logging to '{}': {}", path.display(), e);
        std::process::exit(1);
    }

    let config = args.config();
    info!(?config, "starting");

    let app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = app.run(TICK_RATE) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
