#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Feed URL override, set from the command line
static FEED_URL: OnceLock<String> = OnceLock::new();

/// Get the feed URL (from the command line or the default)
pub fn get_feed_url() -> String {
    FEED_URL
        .get()
        .cloned()
        .unwrap_or_else(|| apod_feed::DEFAULT_FEED_URL.to_string())
}

/// APOD Gallery - Astronomy Picture of the Day browser
#[derive(Parser, Debug)]
#[command(name = "apod-gallery")]
#[command(about = "Astronomy Picture of the Day gallery")]
struct Args {
    /// Feed URL (defaults to the public APOD JSON feed)
    #[arg(short, long)]
    feed_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    if let Some(url) = args.feed_url {
        let _ = FEED_URL.set(url);
    }

    tracing::info!("Starting APOD Gallery with feed: {}", get_feed_url());

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("APOD Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
