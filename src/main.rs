extern crate log;
pub mod config;
pub mod feeds;
pub mod overlay;
pub mod sources;
use crate::config::Config;
use crate::feeds::{fetch_all_feeds, fetch_all_feeds_with, Feeds};
use crate::overlay::layer::layer_meta_table;
use crate::overlay::output::{collection_to_pretty_string, write_feeds_to_geojson};
use clap::Parser;
use std::fmt::Write;
use std::path::PathBuf;

/// Fetch WA emergency overlays (bushfires, hotspots, outages) as GeoJSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to an optional YAML config file.
    #[arg(short, long = "config")]
    config_filepath: Option<PathBuf>,
    /// Print the layer labels and colors as JSON instead of fetching.
    #[arg(short, long)]
    meta: bool,
    /// Also write one <layer>.geojson file per layer to this directory.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn render_feeds(feeds: &Feeds) -> anyhow::Result<String> {
    let mut output = String::new();
    for (layer, collection) in feeds {
        writeln!(output, "--- {} ---", layer)?;
        writeln!(output, "{}", collection_to_pretty_string(collection)?)?;
    }
    Ok(output)
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.meta {
        println!("{}", serde_json::to_string_pretty(&layer_meta_table())?);
        return Ok(());
    }

    let feeds = match &args.config_filepath {
        Some(filepath) => {
            let config = Config::from_yaml_file(filepath)?;
            log::debug!("{:?}", config);
            fetch_all_feeds_with(&config)
        }
        None => fetch_all_feeds(),
    };
    print!("{}", render_feeds(&feeds)?);

    if let Some(output_dir) = &args.output_dir {
        write_feeds_to_geojson(&feeds, output_dir)?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}
