use clap::Parser;
use tracing::error;

mod error;
mod fs_ops;
mod log_formatter;
mod modes;
mod paths;
mod sampler;
mod split_manifest;
mod subset;
mod synset_map;

use log_formatter::BracketedFormatter;
use subset::SubsetOptions;

fn main() {
    // Bracketed format on stderr; the summary table owns stdout
    tracing_subscriber::fmt()
        .event_format(BracketedFormatter)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let opts = SubsetOptions::parse();
    match subset::run(&opts) {
        Ok(summary) => {
            println!("Subset summary:");
            println!("Category\tSynset\tSamples");
            for row in &summary {
                println!("{}\t{}\t{}", row.category, row.synset, row.copied);
            }
        }
        Err(e) => {
            error!("Subset build failed: {}", e);
            std::process::exit(1);
        }
    }
}
