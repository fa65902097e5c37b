mod args;
mod pipeline;

use args::Cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    pipeline::run(Cli::parse())
}
