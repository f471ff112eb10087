use std::fs::File;
use std::sync::Arc;

use atlas::core::config::{self, AtlasConfig, CliOverrides};
use atlas::core::controller::Controller;
use atlas::core::format::format_population;
use atlas::countries::RestCountriesSource;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "atlas", about = "Browse and search the countries of the world")]
struct Args {
    /// Base URL of the REST Countries API
    #[arg(long)]
    base_url: Option<String>,

    /// Minimum time a page append stays in the loading state
    #[arg(long)]
    load_more_delay_ms: Option<u64>,

    /// Seconds before a request to the API is abandoned
    #[arg(long)]
    request_timeout_secs: Option<u64>,

    /// Print the visible list to stdout instead of starting the TUI
    #[arg(long)]
    print: bool,

    /// Search query to apply before printing (with --print)
    #[arg(long, requires = "print")]
    search: Option<String>,

    /// Number of browse pages to reveal before printing (with --print)
    #[arg(long, default_value_t = 1)]
    pages: usize,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to atlas.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("atlas.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        AtlasConfig::default()
    });
    let cli = CliOverrides {
        base_url: args.base_url.clone(),
        load_more_delay_ms: args.load_more_delay_ms,
        request_timeout_secs: args.request_timeout_secs,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("Atlas starting up against {}", resolved.base_url);

    if args.print {
        print_list(resolved, args.search.as_deref(), args.pages).await
    } else {
        atlas::tui::run(resolved)
    }
}

/// Runs the same load/search/page flow as the TUI and prints the result.
async fn print_list(
    resolved: config::ResolvedConfig,
    search: Option<&str>,
    pages: usize,
) -> std::io::Result<()> {
    let source = RestCountriesSource::new(Some(resolved.base_url), resolved.request_timeout)
        .map_err(std::io::Error::other)?;
    let mut controller = Controller::new(Arc::new(source), resolved.load_more_delay);

    controller.load_all().await;
    if let Some(query) = search {
        controller.search(query).await;
    }
    for _ in 1..pages {
        if !controller.state().has_more {
            break;
        }
        controller.load_more().await;
    }

    let app = controller.state();
    if let Some(error) = &app.error {
        eprintln!("{error}");
        return Err(std::io::Error::other(error.clone()));
    }

    println!("{}", app.summary());
    for country in &app.displayed {
        println!(
            "{}\t{}\t{}\t{}",
            country.name.common,
            country.primary_capital().unwrap_or("No capital"),
            format_population(country.population),
            country.region_line()
        );
    }
    Ok(())
}
