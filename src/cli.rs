use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Clone, Parser)]
#[command(name = "charfeed", version, about = "Infinite-scroll character feed")]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the GraphQL endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override the first page to load
    #[arg(long, value_name = "N")]
    pub start_page: Option<u32>,

    /// Ignore scroll triggers while a page is loading
    #[arg(long)]
    pub guard_in_flight: bool,

    /// Print up to PAGES pages to stdout and exit instead of opening the TUI
    #[arg(long, value_name = "PAGES", value_parser = clap::value_parser!(u32).range(1..))]
    pub dump: Option<u32>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.api.endpoint = endpoint.clone();
        }
        if let Some(page) = self.start_page {
            config.feed.start_page = page;
        }
        if self.guard_in_flight {
            config.feed.guard_in_flight = true;
        }
    }
}
