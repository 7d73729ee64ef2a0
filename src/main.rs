use car_listings::{MakeList, RecordWriter, ScrapeError, ScraperConfig, Search, SearchFilters};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let makes = match &config.makes_file {
        Some(path) => match MakeList::from_file(path) {
            Ok(makes) => makes,
            Err(e) => {
                ::log::error!("Failed to read make list {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => MakeList::embedded(),
    };

    // Nothing touches the network until every filter is valid
    let filters = match SearchFilters::validate(
        args.raw_filters(),
        &makes,
        car_listings::utils::current_year(),
    ) {
        Ok(filters) => filters,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    match run(filters, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("Search failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<ScraperConfig, ScrapeError> {
    let mut config = match &args.config {
        Some(path) => ScraperConfig::from_file(path)?,
        None => ScraperConfig::default(),
    };

    if let Some(output) = &args.output {
        config.output_path = path_string(output);
    }
    if let Some(makes_file) = &args.makes_file {
        config.makes_file = Some(path_string(makes_file));
    }
    Ok(config)
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

async fn run(filters: SearchFilters, config: ScraperConfig) -> Result<(), ScrapeError> {
    let output_path = config.output_path.clone();
    let make_count = filters.makes.len().max(1);

    // Truncated before the first request
    let mut writer = RecordWriter::create(&output_path)?;

    let start_time = std::time::Instant::now();
    ::log::info!("Searching around {} within {} miles", filters.postcode, filters.radius);

    let records = Search::new(filters).with_config(config).collect().await?;
    writer.write_all(&records)?;
    let rows = writer.rows();
    writer.finish()?;

    ::log::info!(
        "Wrote {} vehicles from {} searches to {} in {:.2} seconds",
        rows,
        make_count,
        output_path,
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
