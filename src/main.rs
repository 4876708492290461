use artview::core::config;
use artview::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "artview", about = "Browse the Art Institute of Chicago collection in your terminal")]
struct Args {
    /// Base URL of the artworks API
    #[arg(long)]
    base_url: Option<String>,

    /// Rows per page (5, 10, 25 or 50)
    #[arg(short, long)]
    page_size: Option<u32>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to artview.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("artview.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::ArtviewConfig::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref(), args.page_size);

    log::info!(
        "artview starting up: base_url={}, page_size={}",
        resolved.base_url,
        resolved.page_size
    );

    tui::run(resolved)
}
