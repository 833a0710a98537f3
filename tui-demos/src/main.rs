//! Binary crate for the `tui-demos` command-line tool.
//!
//! This crate focuses on:
//! - Dispatching subcommands to the individual demos
//! - The message-driven terminal runtime the demos run on
//! - Rendering (theme, weather card, spinners, text input)

use clap::Parser;

mod cli;
mod keys;
mod logging;
mod runtime;
mod spinners;
mod text;
mod theme;
mod weather;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
