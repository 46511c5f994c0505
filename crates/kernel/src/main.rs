//! Elenco cities report
//!
//! Loads the business-listing data set and prints one page of the filtered,
//! sorted report as a text table.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use elenco_kernel::config::Config;
use elenco_kernel::listing::{DEFAULT_COLUMNS, JsonFileSource, RecordSource};
use elenco_kernel::report::ReportController;
use elenco_kernel::state::ReportState;

#[derive(Parser)]
#[command(name = "elenco", about = "Filterable, sortable, paginated listing report")]
struct Cli {
    /// Path to the listings JSON file (overrides ELENCO_DATA).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Show only listings in this city (case and whitespace insensitive).
    #[arg(long, default_value = "")]
    city: String,

    /// Show only listings whose category contains this text.
    #[arg(long, default_value = "")]
    category: String,

    /// Field key to sort by (e.g. name, city, reviews_count).
    #[arg(long)]
    sort: Option<String>,

    /// Sort direction: asc or desc.
    #[arg(long, default_value = "asc")]
    order: String,

    /// Page to display (1-indexed).
    #[arg(long, default_value_t = 1)]
    page: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;

    let data_path = cli
        .data
        .clone()
        .or_else(|| config.data_path.clone())
        .context("no data file: pass --data or set ELENCO_DATA")?;

    info!(path = %data_path.display(), "loading listings");

    let source = JsonFileSource::new(&data_path)
        .with_delay(Duration::from_millis(config.load_delay_ms));

    let mut state = ReportState::new();
    let records = source
        .load()
        .await
        .with_context(|| format!("failed to load records from {}", data_path.display()))?;
    state.ingest(records);

    let controller = state
        .controller_mut()
        .context("report did not become ready")?;

    apply_query(controller, &cli);
    print_page(controller);

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Replay the CLI selections as query transitions.
fn apply_query(controller: &mut ReportController, cli: &Cli) {
    if !cli.city.is_empty() {
        controller.set_city(cli.city.clone());
    }
    if !cli.category.is_empty() {
        controller.set_category_text(cli.category.clone());
    }
    if let Some(field) = &cli.sort {
        controller.toggle_sort(field.clone());
        if cli.order.eq_ignore_ascii_case("desc") {
            // A second toggle flips the fresh ascending sort.
            controller.toggle_sort(field.clone());
        }
    }
    controller.go_to_page(cli.page);
}

fn print_page(controller: &ReportController) {
    let page = controller.page();

    let header: Vec<&str> = DEFAULT_COLUMNS.iter().map(|c| c.label).collect();
    println!("{}", header.join("\t"));

    if page.page_records.is_empty() {
        println!("No records found.");
    } else {
        for record in &page.page_records {
            let row: Vec<String> = DEFAULT_COLUMNS
                .iter()
                .map(|c| record.field_text(c.key).unwrap_or_else(|| "-".to_string()))
                .collect();
            println!("{}", row.join("\t"));
        }
    }

    println!(
        "Page {} of {} ({} records)",
        page.page, page.page_count, page.total
    );
}
