// src/bin/cli.rs
use canvas_roster::cli;
use color_eyre::eyre::eyre;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run().map_err(|e| eyre!("{e}"))
}
