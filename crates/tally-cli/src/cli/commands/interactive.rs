//! Interactive mode handler.

use anyhow::Result;
use tally_core::config::Config;

pub fn run(config: &Config) -> Result<()> {
    tally_tui::run_interactive(config)
}
