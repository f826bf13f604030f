//! Record Viewer - Entry Point

use clap::Parser;
use recview::model::{DateRange, FilterState, PageIndex, Status};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Parse a status filter argument (case-insensitive).
fn parse_status(raw: &str) -> Result<Status, String> {
    Status::parse(raw).ok_or_else(|| format!("expected ACTIVE, INACTIVE or BLOCKED, got '{}'", raw))
}

/// Record Viewer - TUI for browsing paginated user records
#[derive(Parser, Debug)]
#[command(name = "recview")]
#[command(version)]
#[command(about = "TUI application for browsing paginated user records")]
pub struct Args {
    /// Path to a JSON array of records (falls back to config / RECVIEW_DATA)
    pub file: Option<PathBuf>,

    /// Start at specific page number (must be positive)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Start with a name search applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start with a status filter applied
    #[arg(long, value_parser = parse_status)]
    pub status: Option<Status>,

    /// Start with a look-back window in days (0 = all dates)
    #[arg(short, long, default_value = "0")]
    pub days: u32,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Filters requested on the command line.
    pub fn initial_filters(&self) -> FilterState {
        FilterState {
            search_text: self.search.clone().unwrap_or_default(),
            status: self.status,
            date_range: DateRange::days(self.days),
        }
    }

    /// 0-based start page. Values past the page limit are clamped later.
    pub fn start_page(&self) -> PageIndex {
        PageIndex::from_number(self.page as usize).unwrap_or(PageIndex::FIRST)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let color_config = recview::view::ColorConfig::from_env_and_args(args.no_color);

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = recview::config::load_config_with_precedence(args.config.clone())?;
        let merged = recview::config::merge_config(config_file);
        let with_env = recview::config::apply_env_overrides(merged);
        recview::config::apply_cli_overrides(with_env, args.file.clone())
    };

    let _log_guard = recview::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let browser = config.browser();
    let source = recview::source::open_source(config.data_file.clone(), browser.page_size)?;
    let fetcher = recview::source::PageFetcher::new(Arc::new(source));

    let state = recview::state::ViewState::new(
        browser,
        args.start_page(),
        args.initial_filters(),
        chrono::Local::now().date_naive(),
    );
    let styles = recview::view::TableStyles::with_color_config(color_config);

    recview::view::run_with_state(state, fetcher, styles)?;

    Ok(())
}
